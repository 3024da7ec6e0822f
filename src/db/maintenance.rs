//! Out-of-band maintenance: the only code path that removes rows.

use crate::db::DATA_TABLES;
use crate::db::log::ttlog_quiet;
use crate::db::migrate::table_exists;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use chrono::Local;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Zip a copy of the database file next to it. Returns the archive path.
pub fn backup_before_reset(db_path: &str) -> AppResult<PathBuf> {
    let src = Path::new(db_path);

    let backup_name = format!(
        "{}-backup_db_pre_reset.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = match src.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(&backup_name),
        _ => PathBuf::from(&backup_name),
    };

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Other(format!("Backup failed (start_file): {e}")))?;

    let db_content = fs::read(src)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Other(format!("Backup failed (finish): {e}")))?;

    Ok(backup_path)
}

/// Empty every data table and restart the AUTOINCREMENT counters.
///
/// A zipped copy of the database is written first unless `skip_backup`.
pub fn reset_database(pool: &mut DbPool, skip_backup: bool) -> AppResult<()> {
    if !skip_backup {
        let archive = backup_before_reset(&pool.path)?;
        success(format!("📦 Backup created: {}", archive.display()));
    }

    info("Resetting database...");

    let tx = pool.conn.transaction()?;
    for table in DATA_TABLES {
        if table_exists(&tx, table)? {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
            info(format!(" - Cleared table: {table}"));
        } else {
            warning(format!(" - Table {table} not found, skipped"));
        }
    }

    if table_exists(&tx, "sqlite_sequence")? {
        let placeholders = vec!["?"; DATA_TABLES.len()].join(",");
        tx.execute(
            &format!("DELETE FROM sqlite_sequence WHERE name IN ({placeholders})"),
            rusqlite::params_from_iter(DATA_TABLES),
        )?;
        info(" - Reset ID counters");
    }
    tx.commit()?;

    ttlog_quiet(&pool.conn, "reset", "all tables", "Database reset");

    success("Database completely reset.");
    Ok(())
}

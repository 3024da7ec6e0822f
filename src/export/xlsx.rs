// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, date_to_excel_serial};
use crate::export::model::{BackupDocument, Cell, SheetRows};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export every dataset of the document to its own styled sheet.
pub(crate) fn export_xlsx(doc: &BackupDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    if let Some(logs) = &doc.logs {
        write_sheet(workbook.add_worksheet(), logs)?;
    }
    if let Some(metrics) = &doc.metrics {
        write_sheet(workbook.add_worksheet(), metrics)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet<T: SheetRows>(worksheet: &mut Worksheet, rows: &[T]) -> AppResult<()> {
    worksheet.set_name(T::SHEET).map_err(to_export_error)?;

    let headers = T::headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x1C1C1E))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    if rows.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_export_error)?;
        return Ok(());
    }

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xF2F2F7);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in item.cells().iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(width);
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Write one cell and return its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let width = match cell {
        Cell::Date(d) => {
            let fmt = base.set_num_format(DATE_FORMAT);
            worksheet
                .write_with_format(row, col, date_to_excel_serial(*d), &fmt)
                .map_err(to_export_error)?;
            DATE_FORMAT.len()
        }
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
            n.to_string().len()
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(to_export_error)?;
            s.width()
        }
        Cell::Empty => {
            worksheet
                .write_blank(row, col, &base)
                .map_err(to_export_error)?;
            0
        }
    };

    Ok(width)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

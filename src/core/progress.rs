use crate::core::calculator::progress::{CONSISTENCY_WINDOW_DAYS, ProgressSummary, summarize};
use crate::db::pool::DbPool;
use crate::db::queries::{DateBounds, load_workout_logs};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::bar;
use crate::utils::table::Table;

pub struct ProgressLogic;

impl ProgressLogic {
    pub fn load(pool: &DbPool, bounds: DateBounds) -> AppResult<ProgressSummary> {
        let logs = load_workout_logs(&pool.conn, bounds)?;
        Ok(summarize(&logs))
    }

    pub fn print(summary: &ProgressSummary) {
        header("Workout Consistency");

        if summary.daily.is_empty() {
            info("Log some workouts to see analytics.");
            return;
        }

        let mut table = Table::new(&["Day", "Exercises", ""]);
        for d in &summary.daily {
            table.add_row(vec![d.label(), d.count.to_string(), bar(d.count)]);
        }
        print!("{}", table.render());

        println!();
        println!(
            "Active Days ({}d): {}",
            CONSISTENCY_WINDOW_DAYS, summary.active_days
        );
        println!("Total Exercises: {}", summary.total_exercises);
        println!("Consistency: {}", summary.consistency_label());
    }
}

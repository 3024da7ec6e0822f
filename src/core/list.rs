use crate::db::pool::DbPool;
use crate::db::queries::{
    DateBounds, load_body_metrics, load_custom_exercises, load_sports_logs, load_workout_logs,
};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::{MISSING, kg, percent};
use crate::utils::table::Table;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Workouts,
    Custom,
    Sports,
    Metrics,
}

pub struct ListLogic;

impl ListLogic {
    /// Build the table for `target`, newest rows first.
    pub fn table(pool: &DbPool, target: ListTarget, bounds: DateBounds) -> AppResult<Table> {
        let conn = &pool.conn;

        let table = match target {
            ListTarget::Workouts => {
                let mut t = Table::new(&[
                    "ID", "Date", "Day", "Exercise", "Plan", "Done", "Weight", "Notes",
                ]);
                for e in load_workout_logs(conn, bounds)? {
                    let done = if e.skipped {
                        "skipped".to_string()
                    } else {
                        format!("{}x{}", e.sets, e.reps)
                    };
                    t.add_row(vec![
                        e.id.to_string(),
                        e.date_str(),
                        e.day.to_string(),
                        e.exercise.clone(),
                        format!("{}x{}", e.planned_sets, e.planned_reps),
                        done,
                        e.weight_label(),
                        e.notes.clone(),
                    ]);
                }
                t
            }
            ListTarget::Custom => {
                let mut t = Table::new(&["ID", "Date", "Day", "Exercise", "Done", "Weight", "Notes"]);
                for e in load_custom_exercises(conn, bounds)? {
                    t.add_row(vec![
                        e.id.to_string(),
                        e.date_str(),
                        e.day.to_string(),
                        e.exercise.clone(),
                        format!("{}x{}", e.sets, e.reps),
                        format!("{}kg", e.weight),
                        e.notes.clone(),
                    ]);
                }
                t
            }
            ListTarget::Sports => {
                let mut t = Table::new(&["ID", "Date", "Sport", "Minutes", "Intensity", "Notes"]);
                for e in load_sports_logs(conn, bounds)? {
                    t.add_row(vec![
                        e.id.to_string(),
                        e.date_str(),
                        e.sport.clone(),
                        e.minutes
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| MISSING.to_string()),
                        e.intensity.clone(),
                        e.notes.clone(),
                    ]);
                }
                t
            }
            ListTarget::Metrics => {
                let mut t = Table::new(&[
                    "ID", "Date", "Weight", "Body Fat", "Lean", "Muscle", "Water", "Notes",
                ]);
                for e in load_body_metrics(conn, bounds)? {
                    t.add_row(vec![
                        e.id.to_string(),
                        e.date_str(),
                        kg(e.weight),
                        percent(e.body_fat),
                        kg(e.lean_mass),
                        kg(e.muscle_mass),
                        kg(e.water_mass),
                        e.notes.clone(),
                    ]);
                }
                t
            }
        };

        Ok(table)
    }

    pub fn print(pool: &DbPool, target: ListTarget, bounds: DateBounds) -> AppResult<()> {
        let table = Self::table(pool, target, bounds)?;
        if table.is_empty() {
            warning("No entries found for the selected period.");
        } else {
            print!("{}", table.render());
        }
        Ok(())
    }
}

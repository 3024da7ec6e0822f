use crate::config::Config;
use crate::core::calculator::score::MAX_SPORT_POINTS;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{
    latest_body_metric, load_custom_exercises, load_sports_logs, load_workout_logs,
};
use crate::errors::AppResult;
use crate::models::body_metric::BodyMetricEntry;
use crate::models::day_name::DayName;
use crate::models::week::{WeekScore, WeekWindow};
use crate::models::workout_log::WorkoutLogEntry;
use crate::ui::messages::header;
use crate::ui::tiles::{Tile, render_tiles};
use crate::utils::colors::{RESET, color_for_score};
use crate::utils::date::long_label;
use crate::utils::formatting::{bold, kg, percent};
use chrono::NaiveDate;

/// Everything the dashboard shows for one reference date.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub reference: NaiveDate,
    pub today: DayName,
    pub window: WeekWindow,
    pub score: WeekScore,
    pub latest: Option<BodyMetricEntry>,
    pub recent: Vec<WorkoutLogEntry>,
    /// Whether any workout row exists, skipped ones included.
    pub has_workouts: bool,
}

impl Dashboard {
    /// Snapshot tiles. Body metric tiles replace the sports/today/phase
    /// tiles as soon as one reading exists.
    pub fn tiles(&self, cfg: &Config) -> Vec<Tile> {
        let score = self.score.score.to_string();

        match &self.latest {
            None => vec![
                Tile::new("Weekly Score", score, "Goal: Consistency"),
                Tile::new(
                    "Sports Points",
                    self.score.sport_points.to_string(),
                    format!("Max {}/week", MAX_SPORT_POINTS),
                ),
                Tile::new("Today", self.today.as_str(), "Focus Mode"),
                Tile::new("Phase", cfg.phase.as_str(), cfg.phase_note.as_str()),
            ],
            Some(m) => vec![
                Tile::new("Weekly Score", score, self.window.label()),
                Tile::new("Weight", kg(m.weight), "Latest reading"),
                Tile::new("Body Fat", percent(m.body_fat), "Target: Lean"),
                Tile::new("Lean Mass", kg(m.lean_mass), "Growth"),
            ],
        }
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn build(pool: &DbPool, reference: NaiveDate, recent_limit: usize) -> AppResult<Dashboard> {
        let workouts = load_workout_logs(&pool.conn, None)?;
        let custom = load_custom_exercises(&pool.conn, None)?;
        let sports = load_sports_logs(&pool.conn, None)?;
        let latest = latest_body_metric(&pool.conn)?;

        let (window, score) = Core::score_week(&workouts, &custom, &sports, reference);

        Ok(Dashboard {
            reference,
            today: DayName::of(reference),
            window,
            score,
            latest,
            recent: Core::recent_activity(&workouts, recent_limit),
            has_workouts: !workouts.is_empty(),
        })
    }

    pub fn print(dashboard: &Dashboard, cfg: &Config) {
        println!(
            "{}  {}",
            bold("rFitlogger"),
            long_label(dashboard.reference)
        );

        header("Current Snapshot");
        println!("{}", render_tiles(&dashboard.tiles(cfg)));
        println!(
            "Week {}: {}{} pts{}",
            dashboard.window.label(),
            color_for_score(dashboard.score.score),
            dashboard.score.score,
            RESET
        );

        header("Coach Notes");
        for note in &cfg.coach_notes {
            println!("• {}", note);
        }

        header("Recent Activity");
        if !dashboard.has_workouts {
            println!("No logs yet. Start today!");
        } else if dashboard.recent.is_empty() {
            println!("No logs yet.");
        } else {
            for log in &dashboard.recent {
                println!("{}: {}", log.date_str(), log.exercise);
            }
        }
    }
}

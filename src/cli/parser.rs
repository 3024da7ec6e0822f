use crate::core::list::ListTarget;
use crate::export::{ExportDataset, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFitlogger
/// CLI application to log workouts and body metrics with SQLite
#[derive(Parser)]
#[command(
    name = "rfitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal fitness log: workouts, sports and body metrics in SQLite, with a weekly consistency score",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, reset, ...)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "reset",
            help = "Delete every logged entry (a zipped backup is written first)"
        )]
        reset: bool,

        #[arg(long = "no-backup", requires = "reset", help = "Skip the backup before --reset")]
        no_backup: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Weekly score, body metric tiles, coach notes and recent activity
    #[command(alias = "dash")]
    Dashboard {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date (default: today)")]
        date: Option<String>,
    },

    /// Print the weekly score and sports points of a week
    Score {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Any date inside the week (default: today)")]
        date: Option<String>,
    },

    /// Log the result of a planned exercise
    Workout {
        /// Exercise name
        exercise: String,

        #[arg(long = "planned-sets", default_value = "", help = "Target sets (free text)")]
        planned_sets: String,

        #[arg(long = "planned-reps", default_value = "", help = "Target reps (free text)")]
        planned_reps: String,

        #[arg(long, default_value_t = 0, help = "Sets performed (0-20)")]
        sets: i64,

        #[arg(long, default_value_t = 0, help = "Reps performed (0-200)")]
        reps: i64,

        #[arg(long, default_value_t = 0.0, help = "Weight in kg (0 = bodyweight)")]
        weight: f64,

        #[arg(long = "skip", help = "Mark the exercise as not performed")]
        skip: bool,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Log date (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Plan day (Monday..Sunday, default: weekday of the log date)")]
        day: Option<String>,
    },

    /// Log an extra exercise that is not on the plan
    Custom {
        /// Exercise name
        exercise: String,

        #[arg(long, default_value_t = 0, help = "Sets performed (0-20)")]
        sets: i64,

        #[arg(long, default_value_t = 0, help = "Reps performed (0-100)")]
        reps: i64,

        #[arg(long, default_value_t = 0.0, help = "Weight in kg")]
        weight: f64,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long)]
        day: Option<String>,
    },

    /// Log a sports session
    Sport {
        /// Sport name
        sport: String,

        #[arg(long, help = "Duration in minutes")]
        minutes: Option<i64>,

        #[arg(long, default_value = "")]
        intensity: String,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Record body metrics
    Metrics {
        #[arg(long, help = "Body weight in kg (0-200)")]
        weight: Option<f64>,

        #[arg(long = "body-fat", help = "Body fat percentage (0-50)")]
        body_fat: Option<f64>,

        #[arg(long = "lean", help = "Lean mass in kg")]
        lean_mass: Option<f64>,

        #[arg(long = "muscle", help = "Muscle mass in kg")]
        muscle_mass: Option<f64>,

        #[arg(long = "water", help = "Water mass in kg")]
        water_mass: Option<f64>,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Show the last non-skipped entry of an exercise
    History {
        /// Exercise name
        exercise: String,
    },

    /// Workouts per day, active days and consistency
    Progress {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// List logged entries
    List {
        #[arg(value_enum, default_value = "workouts")]
        target: ListTarget,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Export workout logs and body metrics
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        dataset: ExportDataset,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

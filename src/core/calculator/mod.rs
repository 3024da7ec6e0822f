pub mod progress;
pub mod score;
pub mod week;

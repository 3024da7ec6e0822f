//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Placeholder printed for a missing measurement.
pub const MISSING: &str = "—";

/// `Some(82.44)` → "82.4 kg", `None` → "—"
pub fn kg(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1} kg", v))
        .unwrap_or_else(|| MISSING.to_string())
}

/// `Some(18.26)` → "18.3%", `None` → "—"
pub fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Horizontal bar used in place of a chart.
pub fn bar(count: i64) -> String {
    "█".repeat(count.max(0) as usize)
}

//! Dashboard tiles rendered as a fixed-width block of cards.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: String,
    pub value: String,
    pub hint: String,
}

impl Tile {
    pub fn new(label: &str, value: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            hint: hint.into(),
        }
    }
}

/// Render tiles side by side: label row, value row, hint row.
pub fn render_tiles(tiles: &[Tile]) -> String {
    let width = tiles
        .iter()
        .flat_map(|t| [t.label.width(), t.value.width(), t.hint.width()])
        .max()
        .unwrap_or(0)
        + 2;

    let row = |f: &dyn Fn(&Tile) -> String| -> String {
        let cells: Vec<String> = tiles
            .iter()
            .map(|t| {
                let s = f(t);
                let pad = width.saturating_sub(s.width());
                format!("{}{}", s, " ".repeat(pad))
            })
            .collect();
        format!("│ {}│", cells.join("│ "))
    };

    let border = format!(
        "┌{}┐",
        vec!["─".repeat(width + 1); tiles.len()].join("┬")
    );
    let bottom = format!(
        "└{}┘",
        vec!["─".repeat(width + 1); tiles.len()].join("┴")
    );

    [
        border,
        row(&|t| t.label.to_uppercase()),
        row(&|t| t.value.clone()),
        row(&|t| t.hint.clone()),
        bottom,
    ]
    .join("\n")
}

//! Output formatting for headless commands.
//!
//! Pure functions: (data, OutputFormat) → String. No I/O.

use serde::Serialize;

use crate::types::{ColorOption, OutputFormat, Snapshot};

/// Format a component snapshot for output.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_snapshot_human(snapshot)),
        OutputFormat::Json => serde_json::to_string_pretty(snapshot),
    }
}

/// Format the dropdown's option set for output.
pub fn format_colors(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_colors_human()),
        OutputFormat::Json => {
            let rows: Vec<ColorRow> = ColorOption::ALL.into_iter().map(ColorRow::from).collect();
            serde_json::to_string_pretty(&rows)
        }
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_snapshot_human(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str("=== Application View ===\n");
    out.push_str(&format!("Count is {}\n", snapshot.counter));
    out.push_str(&format!("Selection:    {}\n", snapshot.selection));
    out.push_str(&format!("Presentation: {}\n", snapshot.presentation));
    out
}

fn format_colors_human() -> String {
    let mut out = String::new();
    out.push_str("=== Colors ===\n");
    for (i, option) in ColorOption::ALL.into_iter().enumerate() {
        out.push_str(&format!(
            "[{}] {:<7} {:<7} {}\n",
            i + 1,
            option.id(),
            option.label(),
            option.token()
        ));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct ColorRow {
    id: &'static str,
    label: &'static str,
    token: &'static str,
}

impl From<ColorOption> for ColorRow {
    fn from(option: ColorOption) -> Self {
        ColorRow {
            id: option.id(),
            label: option.label(),
            token: option.token(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            counter: 3,
            selection: "purple".to_string(),
            presentation: "bg-purple-400".to_string(),
        }
    }

    #[test]
    fn human_snapshot_shows_label_and_token() {
        let output = format_snapshot(&sample_snapshot(), OutputFormat::Human).unwrap();
        assert!(output.contains("Count is 3"));
        assert!(output.contains("purple"));
        assert!(output.contains("bg-purple-400"));
    }

    #[test]
    fn json_snapshot_round_trips() {
        let output = format_snapshot(&sample_snapshot(), OutputFormat::Json).unwrap();
        let parsed: Snapshot = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed, sample_snapshot());
    }

    #[test]
    fn human_colors_lists_all_options_in_order() {
        let output = format_colors(OutputFormat::Human).unwrap();
        let lines: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[1] blue"));
        assert!(lines[3].contains("bg-purple-400"));
    }

    #[test]
    fn json_colors_has_expected_fields() {
        let output = format_colors(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = parsed.as_array().expect("array");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["id"], "slate");
        assert_eq!(rows[1]["label"], "Slate");
        assert_eq!(rows[1]["token"], "bg-slate-400");
    }
}

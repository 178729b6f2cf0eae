//! TUI color semantics, style constants, and the background style engine.
//!
//! Presentation tokens are opaque utility-class names everywhere else in
//! the crate. This is the only place that gives them a visual meaning.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// BACKGROUND TOKENS
// ============================================================================

/// Resolve a background utility class to a terminal color.
///
/// Known classes use the 400 shade of their palette as true color.
/// Anything else falls back to the terminal's own background.
pub fn background(token: &str) -> Color {
    match token {
        "bg-blue-400" => Color::Rgb(0x60, 0xa5, 0xfa),
        "bg-slate-400" => Color::Rgb(0x94, 0xa3, 0xb8),
        "bg-yellow-400" => Color::Rgb(0xfa, 0xcc, 0x15),
        "bg-purple-400" => Color::Rgb(0xc0, 0x84, 0xfc),
        _ => Color::Reset,
    }
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Card surface, white.
pub const STYLE_CARD: Style = Style::new().fg(Color::Black).bg(Color::White);

/// Card heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::Black).add_modifier(Modifier::BOLD);

/// Field caption above the dropdown.
pub const STYLE_CAPTION: Style = Style::new().fg(Color::Black);

/// Button face.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::White).bg(Color::Black);

/// Border of the control that has focus.
pub const STYLE_FOCUS: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of a control without focus.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::Gray);

/// Dropdown placeholder text.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Highlighted row in the open dropdown.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Check mark next to the chosen option.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve_to_true_color() {
        assert_eq!(background("bg-blue-400"), Color::Rgb(96, 165, 250));
        assert_eq!(background("bg-purple-400"), Color::Rgb(192, 132, 252));
    }

    #[test]
    fn every_option_token_is_known_to_the_engine() {
        for option in crate::types::ColorOption::ALL {
            assert_ne!(background(option.token()), Color::Reset, "{}", option.token());
        }
    }

    #[test]
    fn unknown_token_uses_terminal_background() {
        assert_eq!(background("bg-red-400"), Color::Reset);
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}

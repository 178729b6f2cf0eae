//! Pure rendering: map App state to ratatui widget trees.
//!
//! The frame is a full-viewport background in the presentation color,
//! a centered card holding the title, the counter button and the color
//! dropdown, and a help line. The open dropdown is drawn last so it
//! overlays whatever sits under it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::types::ColorOption;

use super::state::{App, Focus, Picker};
use super::theme;

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 14;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole view to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let background = Block::new().style(Style::new().bg(theme::background(app.view.presentation())));
    frame.render_widget(background, area);

    let [content, help] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let card = centered(content, CARD_WIDTH, CARD_HEIGHT);
    let trigger = render_card(app, frame, card);

    frame.render_widget(render_help(&app.widgets.picker), help);

    if app.widgets.picker.open {
        render_dropdown(&app.widgets.picker, frame, trigger, area);
    }
}

/// A `width` × `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn border_style(focused: bool) -> Style {
    if focused {
        theme::STYLE_FOCUS
    } else {
        theme::STYLE_UNFOCUSED
    }
}

// ============================================================================
// CARD
// ============================================================================

/// Draw the card and return where the dropdown trigger ended up.
fn render_card(app: &App, frame: &mut Frame, area: Rect) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::symmetric(2, 1))
        .style(theme::STYLE_CARD);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, _, button, _, caption, trigger] = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Length(3), // button
        Constraint::Length(1),
        Constraint::Length(1), // caption
        Constraint::Length(3), // trigger
    ])
    .areas(inner);

    let heading = Paragraph::new(Span::styled(app.title.as_str(), theme::STYLE_TITLE))
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    render_button(app, frame, button);

    let label = Paragraph::new(Span::styled("Select Background Color", theme::STYLE_CAPTION))
        .alignment(Alignment::Center);
    frame.render_widget(label, caption);

    render_trigger(app, frame, trigger);
    trigger
}

fn render_button(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.widgets.focus == Focus::Button;
    let button = Paragraph::new(app.view.count_label())
        .alignment(Alignment::Center)
        .style(theme::STYLE_BUTTON)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style(focused)),
        );
    frame.render_widget(button, area);
}

// ============================================================================
// DROPDOWN
// ============================================================================

fn render_trigger(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.widgets.focus == Focus::Picker;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = match app.widgets.picker.chosen {
        Some(option) => Span::raw(option.label()),
        None => Span::styled(app.placeholder.as_str(), theme::STYLE_PLACEHOLDER),
    };
    frame.render_widget(Paragraph::new(value), inner);

    let chevron = if app.widgets.picker.open { "▴" } else { "▾" };
    frame.render_widget(Paragraph::new(chevron).alignment(Alignment::Right), inner);
}

/// Draw the option list just below the trigger, clipped to the frame.
fn render_dropdown(picker: &Picker, frame: &mut Frame, trigger: Rect, bounds: Rect) {
    let height = ColorOption::ALL.len() as u16 + 2;
    let area = Rect::new(trigger.x, trigger.bottom(), trigger.width, height).intersection(bounds);
    if area.is_empty() {
        return;
    }

    let lines: Vec<Line> = ColorOption::ALL
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if picker.chosen == Some(option) {
                Span::styled("✓ ", theme::STYLE_CHECKED)
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![mark, Span::raw(option.label())]);
            if i == picker.cursor {
                line.style(theme::STYLE_CURSOR)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Clear, area);
    let list = Paragraph::new(lines).style(theme::STYLE_CARD).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::STYLE_FOCUS),
    );
    frame.render_widget(list, area);
}

// ============================================================================
// HELP
// ============================================================================

/// Help line showing available keybindings.
fn render_help(picker: &Picker) -> Paragraph<'static> {
    let help_text = if picker.open {
        " [j/k] move  [Enter] choose  [1-4] pick  [Esc] close"
    } else {
        " [Tab] focus  [Enter] press  [+] count  [1-4] color  [q] quit"
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================

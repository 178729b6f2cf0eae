//! TUI state algebra: pure types, zero effects.
//!
//! Component state (counter, selection, background) lives in
//! `ApplicationView` and is only reachable through its operations.
//! Everything in `Widgets` is transient widget state: which control has
//! focus, whether the dropdown is open, where its cursor sits. Nothing here
//! is derived from the component, and the component never reads it.

use crossterm::event::KeyEvent;

use crate::component::ApplicationView;
use crate::config::Config;
use crate::reactive::Context;
use crate::types::ColorOption;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal changed size; the next frame must be redrawn.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The mounted component.
    pub view: ApplicationView,
    /// Render scheduling and lifecycle for `view`.
    pub ctx: Context,
    /// Focus and dropdown state.
    pub widgets: Widgets,
    /// Card heading.
    pub title: String,
    /// Dropdown text shown before the first choice.
    pub placeholder: String,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Mount the component according to `config`.
    pub fn mount(config: &Config) -> Self {
        let mut ctx = Context::mount();
        let view = ApplicationView::mount(&mut ctx, &config.initial_color);
        App {
            view,
            ctx,
            widgets: Widgets::default(),
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            should_quit: false,
        }
    }
}

// ============================================================================
// WIDGETS
// ============================================================================

/// Which control receives Enter/Space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Button,
    Picker,
}

impl Focus {
    /// The other control. There are only two.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Button => Focus::Picker,
            Focus::Picker => Focus::Button,
        }
    }
}

/// Dropdown widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Picker {
    /// Content list visible.
    pub open: bool,
    /// Highlighted row while open.
    pub cursor: usize,
    /// Last option chosen through the dropdown. None shows the placeholder.
    pub chosen: Option<ColorOption>,
}

impl Picker {
    /// Open with the cursor on the chosen option, or the first one.
    pub fn opened(self) -> Self {
        Picker {
            open: true,
            cursor: self.chosen.map(ColorOption::index).unwrap_or(0),
            ..self
        }
    }

    pub fn closed(self) -> Self {
        Picker { open: false, ..self }
    }

    /// Close with `option` as the displayed value.
    pub fn choose(self, option: ColorOption) -> Self {
        Picker {
            open: false,
            cursor: option.index(),
            chosen: Some(option),
        }
    }
}

/// Transient state of the two interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Widgets {
    pub focus: Focus,
    pub picker: Picker,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Press the focused control (Enter / Space).
    Activate,
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrev,
    /// Cursor up in the open dropdown.
    MoveUp,
    /// Cursor down in the open dropdown, or open it.
    MoveDown,
    /// Choose an option by its 1-based number.
    NumberKey(u8),
    /// Activate the button regardless of focus.
    Increment,
    /// Close the dropdown, or leave.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure widget transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Only widget state changed (or nothing did).
    Widgets(Widgets),
    /// A control fired its callback. Apply the widget state, then the command.
    Dispatch { widgets: Widgets, command: Command },
    /// Quit the application.
    Quit,
}

/// Callback a control reports upward to the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Button activated → `increment()`.
    Increment,
    /// Dropdown value chosen → `select(option.id())`.
    Select(ColorOption),
}

// ============================================================================
// TESTS
// ============================================================================

//! Pure widget transitions: (Widgets, Action) → Transition.
//!
//! Fully testable without a terminal. `apply` is the single place where
//! transitions reach the component, through its two operations.

use tracing::trace;

use crate::types::ColorOption;

use super::state::{Action, App, Command, Focus, Picker, Transition, Widgets};

/// Pure state transition function.
pub fn update(widgets: Widgets, action: &Action) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }
    if widgets.picker.open {
        update_open_picker(widgets, action)
    } else {
        update_closed(widgets, action)
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Dropdown closed: focus moves, the focused control can be pressed.
fn update_closed(widgets: Widgets, action: &Action) -> Transition {
    match action {
        Action::FocusNext | Action::FocusPrev => Transition::Widgets(Widgets {
            focus: widgets.focus.toggled(),
            ..widgets
        }),
        Action::Activate => match widgets.focus {
            Focus::Button => increment(widgets),
            Focus::Picker => Transition::Widgets(Widgets {
                picker: widgets.picker.opened(),
                ..widgets
            }),
        },
        Action::MoveDown => match widgets.focus {
            Focus::Button => Transition::Widgets(Widgets {
                focus: Focus::Picker,
                ..widgets
            }),
            Focus::Picker => Transition::Widgets(Widgets {
                picker: widgets.picker.opened(),
                ..widgets
            }),
        },
        Action::MoveUp => Transition::Widgets(Widgets {
            focus: Focus::Button,
            ..widgets
        }),
        Action::NumberKey(n) => choose_number(widgets, *n),
        Action::Increment => increment(widgets),
        Action::Back => Transition::Quit,
        Action::Quit => Transition::Quit,
    }
}

/// Dropdown open: the cursor moves over the options until one is chosen.
fn update_open_picker(widgets: Widgets, action: &Action) -> Transition {
    let picker = widgets.picker;
    let last = ColorOption::ALL.len() - 1;

    match action {
        Action::MoveUp => Transition::Widgets(Widgets {
            picker: Picker {
                cursor: picker.cursor.saturating_sub(1),
                ..picker
            },
            ..widgets
        }),
        Action::MoveDown => Transition::Widgets(Widgets {
            picker: Picker {
                cursor: (picker.cursor + 1).min(last),
                ..picker
            },
            ..widgets
        }),
        Action::Activate => match ColorOption::at(picker.cursor) {
            Some(option) => choose(widgets, option),
            None => Transition::Widgets(Widgets {
                picker: picker.closed(),
                ..widgets
            }),
        },
        Action::NumberKey(n) => choose_number(widgets, *n),
        Action::Back => Transition::Widgets(Widgets {
            picker: picker.closed(),
            ..widgets
        }),
        Action::FocusNext | Action::FocusPrev => Transition::Widgets(Widgets {
            focus: widgets.focus.toggled(),
            picker: picker.closed(),
        }),
        Action::Increment => increment(widgets),
        Action::Quit => Transition::Quit,
    }
}

fn increment(widgets: Widgets) -> Transition {
    Transition::Dispatch {
        widgets,
        command: Command::Increment,
    }
}

fn choose(widgets: Widgets, option: ColorOption) -> Transition {
    Transition::Dispatch {
        widgets: Widgets {
            picker: widgets.picker.choose(option),
            ..widgets
        },
        command: Command::Select(option),
    }
}

/// Number keys are 1-based; anything out of range is a no-op.
fn choose_number(widgets: Widgets, n: u8) -> Transition {
    match (n as usize).checked_sub(1).and_then(ColorOption::at) {
        Some(option) => choose(widgets, option),
        None => Transition::Widgets(widgets),
    }
}

// ============================================================================
// APPLY
// ============================================================================

/// Run one action through `update` and carry out the result on `app`.
pub fn apply(app: &mut App, action: &Action) {
    let before = app.widgets;

    match update(before, action) {
        Transition::Widgets(widgets) => {
            app.widgets = widgets;
        }
        Transition::Dispatch { widgets, command } => {
            app.widgets = widgets;
            trace!(?command, "control fired");
            match command {
                Command::Increment => app.view.increment(&mut app.ctx),
                Command::Select(option) => app.view.select(option.id(), &mut app.ctx),
            }
        }
        Transition::Quit => {
            app.should_quit = true;
        }
    }

    if app.widgets != before {
        app.ctx.request_render();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn open_at(cursor: usize) -> Widgets {
        Widgets {
            focus: Focus::Picker,
            picker: Picker {
                open: true,
                cursor,
                chosen: None,
            },
        }
    }

    // -- Closed --

    #[test]
    fn activate_on_button_increments() {
        let result = update(Widgets::default(), &Action::Activate);
        assert_eq!(
            result,
            Transition::Dispatch {
                widgets: Widgets::default(),
                command: Command::Increment,
            }
        );
    }

    #[test]
    fn activate_on_trigger_opens_picker() {
        let widgets = Widgets {
            focus: Focus::Picker,
            ..Widgets::default()
        };
        match update(widgets, &Action::Activate) {
            Transition::Widgets(w) => {
                assert!(w.picker.open);
                assert_eq!(w.picker.cursor, 0);
            }
            other => panic!("Expected Widgets, got {:?}", other),
        }
    }

    #[test]
    fn tab_moves_focus() {
        let result = update(Widgets::default(), &Action::FocusNext);
        assert_eq!(
            result,
            Transition::Widgets(Widgets {
                focus: Focus::Picker,
                ..Widgets::default()
            })
        );
    }

    #[test]
    fn down_from_button_focuses_trigger() {
        match update(Widgets::default(), &Action::MoveDown) {
            Transition::Widgets(w) => {
                assert_eq!(w.focus, Focus::Picker);
                assert!(!w.picker.open);
            }
            other => panic!("Expected Widgets, got {:?}", other),
        }
    }

    #[test]
    fn number_key_chooses_without_opening() {
        let result = update(Widgets::default(), &Action::NumberKey(4));
        match result {
            Transition::Dispatch { widgets, command } => {
                assert_eq!(command, Command::Select(ColorOption::Purple));
                assert_eq!(widgets.picker.chosen, Some(ColorOption::Purple));
                assert!(!widgets.picker.open);
            }
            other => panic!("Expected Dispatch, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_number_is_noop() {
        assert_eq!(
            update(Widgets::default(), &Action::NumberKey(0)),
            Transition::Widgets(Widgets::default())
        );
        assert_eq!(
            update(Widgets::default(), &Action::NumberKey(9)),
            Transition::Widgets(Widgets::default())
        );
    }

    #[test]
    fn esc_with_closed_picker_quits() {
        assert_eq!(update(Widgets::default(), &Action::Back), Transition::Quit);
    }

    // -- Open --

    #[test]
    fn cursor_is_clamped() {
        assert_eq!(
            update(open_at(0), &Action::MoveUp),
            Transition::Widgets(open_at(0))
        );
        assert_eq!(
            update(open_at(3), &Action::MoveDown),
            Transition::Widgets(open_at(3))
        );
        assert_eq!(
            update(open_at(1), &Action::MoveDown),
            Transition::Widgets(open_at(2))
        );
    }

    #[test]
    fn activate_in_open_picker_chooses_cursor_row() {
        match update(open_at(2), &Action::Activate) {
            Transition::Dispatch { widgets, command } => {
                assert_eq!(command, Command::Select(ColorOption::Yellow));
                assert!(!widgets.picker.open);
                assert_eq!(widgets.focus, Focus::Picker);
            }
            other => panic!("Expected Dispatch, got {:?}", other),
        }
    }

    #[test]
    fn esc_closes_open_picker_without_choosing() {
        match update(open_at(1), &Action::Back) {
            Transition::Widgets(w) => {
                assert!(!w.picker.open);
                assert_eq!(w.picker.chosen, None);
            }
            other => panic!("Expected Widgets, got {:?}", other),
        }
    }

    #[test]
    fn quit_always_quits() {
        assert_eq!(update(open_at(1), &Action::Quit), Transition::Quit);
        assert_eq!(update(Widgets::default(), &Action::Quit), Transition::Quit);
    }

    // -- Apply --

    #[test]
    fn apply_routes_commands_to_component() {
        let mut app = App::mount(&Config::default());
        apply(&mut app, &Action::Activate);
        apply(&mut app, &Action::Increment);
        assert_eq!(app.view.counter(), 2);

        apply(&mut app, &Action::FocusNext);
        apply(&mut app, &Action::Activate);
        apply(&mut app, &Action::MoveDown);
        apply(&mut app, &Action::Activate);
        assert_eq!(app.view.selection(), "slate");
        assert_eq!(app.view.presentation(), "bg-slate-400");
        assert_eq!(app.widgets.picker.chosen, Some(ColorOption::Slate));
        assert_eq!(app.view.counter(), 2);
    }

    #[test]
    fn apply_yellow_then_slate_ends_on_slate() {
        let mut app = App::mount(&Config::default());
        apply(&mut app, &Action::NumberKey(3));
        apply(&mut app, &Action::NumberKey(2));
        assert_eq!(app.view.presentation(), "bg-slate-400");
    }

    #[test]
    fn widget_only_change_requests_render() {
        let mut app = App::mount(&Config::default());
        app.ctx.take_render();
        apply(&mut app, &Action::FocusNext);
        assert!(app.ctx.take_render());
    }

    #[test]
    fn noop_action_requests_no_render() {
        let mut app = App::mount(&Config::default());
        app.ctx.take_render();
        apply(&mut app, &Action::MoveUp);
        assert!(!app.ctx.render_requested());
    }

    #[test]
    fn rechoosing_same_option_does_not_rerender() {
        let mut app = App::mount(&Config::default());
        apply(&mut app, &Action::NumberKey(1));
        app.ctx.take_render();
        apply(&mut app, &Action::NumberKey(1));
        assert!(!app.ctx.render_requested());
        assert_eq!(app.view.presentation(), "bg-blue-400");
    }

    #[test]
    fn apply_quit_sets_flag() {
        let mut app = App::mount(&Config::default());
        apply(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}

//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events over an mpsc channel.
//! The loop handles them one at a time, so every derivation triggered by
//! an event has finished before the next frame is drawn.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::reactive::Context;
use crate::types::Snapshot;

use super::state::{Action, App, AppEvent};
use super::update::apply;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Focus
        KeyCode::Tab | KeyCode::Right => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Left => Some(Action::FocusPrev),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),

        // Press
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('+') => Some(Action::Increment),
        KeyCode::Char(c @ '1'..='4') => Some(Action::NumberKey(c as u8 - b'0')),

        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // mouse, focus, paste, key release
                Err(_) => break,
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// How a session ended. The view is always unmounted by the time this exists.
#[derive(Debug)]
pub struct Exit {
    /// Component state at unmount.
    pub snapshot: Snapshot,
    /// Context after teardown.
    pub ctx: Context,
    /// Why the loop stopped: Ok on quit or closed channel, Err if a frame failed.
    pub result: io::Result<()>,
}

/// Run the TUI until the user quits. Returns the component's final state.
///
/// The terminal is restored on every exit, including a failed frame.
pub fn run(config: &Config) -> io::Result<Snapshot> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let app = App::mount(config);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    let exit = session(app, &rx, |app| {
        terminal.draw(|frame| render(app, frame)).map(drop)
    });
    let restored = restore_terminal();

    exit.result?;
    restored?;
    Ok(exit.snapshot)
}

/// Drive `event_loop`, then unmount whatever way it stopped.
pub fn session<D>(mut app: App, rx: &mpsc::Receiver<AppEvent>, draw: D) -> Exit
where
    D: FnMut(&App) -> io::Result<()>,
{
    let result = event_loop(&mut app, rx, draw);

    let App { view, mut ctx, .. } = app;
    let snapshot = view.unmount(&mut ctx);
    match &result {
        Ok(()) => info!(frames = ctx.frames(), "event loop finished"),
        Err(e) => error!(frames = ctx.frames(), error = %e, "event loop failed"),
    }

    Exit { snapshot, ctx, result }
}

/// Draw when a render is due, then block on the next event, until quit.
fn event_loop<D>(app: &mut App, rx: &mpsc::Receiver<AppEvent>, mut draw: D) -> io::Result<()>
where
    D: FnMut(&App) -> io::Result<()>,
{
    loop {
        if app.ctx.take_render() {
            draw(app)?;
        }

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    debug!(?action, "key action");
                    apply(app, &action);
                }
            }
            AppEvent::Resize => app.ctx.request_render(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

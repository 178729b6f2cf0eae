//! The application view component: counter, selection, derived background.
//!
//! Owns its three state cells exclusively. The outside world mutates them
//! only through `increment` and `select`; everything else is read-only.

use tracing::{debug, info};

use crate::reactive::{Context, Derivation, Signal};
use crate::types::{INITIAL_TOKEN, Snapshot, background_token};

/// Derivation rule bound to the selection cell.
fn derive_background(selection: &str) -> Option<String> {
    background_token(selection).map(str::to_owned)
}

#[derive(Debug)]
pub struct ApplicationView {
    counter: Signal<u64>,
    selection: Signal<String>,
    presentation: Signal<String>,
    background: Derivation<str, String>,
}

impl ApplicationView {
    /// Mount the component with the given initial selection.
    ///
    /// The background derivation runs once here, so the token always
    /// reflects the starting selection when it is mapped.
    pub fn mount(ctx: &mut Context, initial_selection: &str) -> Self {
        let mut view = ApplicationView {
            counter: Signal::new(0),
            selection: Signal::new(initial_selection.to_string()),
            presentation: Signal::new(INITIAL_TOKEN.to_string()),
            background: Derivation::new("background", derive_background),
        };
        view.background
            .apply(view.selection.get().as_str(), &mut view.presentation);
        ctx.request_render();
        info!(
            selection = %view.selection.get(),
            presentation = %view.presentation.get(),
            "application view mounted"
        );
        view
    }

    /// Add one to the counter, computed from its value right now.
    pub fn increment(&mut self, ctx: &mut Context) {
        self.counter.update(|prev| prev.saturating_add(1));
        debug!(counter = *self.counter.get(), "counter incremented");
        ctx.request_render();
    }

    /// Overwrite the selection with whatever the picker reported.
    ///
    /// The background is re-derived only when the value actually changed.
    /// Ids outside the option set are stored but leave the background as is.
    pub fn select(&mut self, color_id: &str, ctx: &mut Context) {
        if !self.selection.set(color_id.to_string()) {
            debug!(selection = color_id, "selection unchanged");
            return;
        }
        self.background
            .apply(self.selection.get().as_str(), &mut self.presentation);
        debug!(
            selection = color_id,
            presentation = %self.presentation.get(),
            "selection changed"
        );
        ctx.request_render();
    }

    /// Discard the component and tear down its context.
    pub fn unmount(self, ctx: &mut Context) -> Snapshot {
        let snapshot = self.snapshot();
        ctx.unmount();
        info!(counter = snapshot.counter, "application view unmounted");
        snapshot
    }

    pub fn counter(&self) -> u64 {
        *self.counter.get()
    }

    pub fn selection(&self) -> &str {
        self.selection.get()
    }

    pub fn presentation(&self) -> &str {
        self.presentation.get()
    }

    /// Label of the button.
    pub fn count_label(&self) -> String {
        format!("Count is {}", self.counter())
    }

    /// How many times the background rule has been evaluated, mount included.
    pub fn derivation_runs(&self) -> u64 {
        self.background.runs()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            counter: self.counter(),
            selection: self.selection().to_string(),
            presentation: self.presentation().to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

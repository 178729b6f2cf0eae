//! Headless driver: mount, replay user events, unmount.
//!
//! Goes through the same `increment`/`select` operations the TUI uses, so
//! the resulting snapshot is what the terminal would have shown.

use tracing::info;

use crate::component::ApplicationView;
use crate::reactive::Context;
use crate::types::Snapshot;

/// A recorded sequence of user events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    /// Button activations, applied first.
    pub clicks: u64,
    /// Picker choices, applied in order after the clicks.
    pub selections: Vec<String>,
}

impl Script {
    /// Replay against a freshly mounted component and return its final state.
    pub fn run(&self, initial_selection: &str) -> Snapshot {
        let mut ctx = Context::mount();
        let mut view = ApplicationView::mount(&mut ctx, initial_selection);

        for _ in 0..self.clicks {
            view.increment(&mut ctx);
        }
        for id in &self.selections {
            view.select(id, &mut ctx);
        }

        info!(
            clicks = self.clicks,
            selections = self.selections.len(),
            "script replayed"
        );
        view.unmount(&mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_is_mount_state() {
        let snapshot = Script::default().run("blue");
        assert_eq!(snapshot.counter, 0);
        assert_eq!(snapshot.selection, "blue");
        assert_eq!(snapshot.presentation, "bg-blue-400");
    }

    #[test]
    fn clicks_and_selections_apply() {
        let script = Script {
            clicks: 5,
            selections: vec!["yellow".into(), "slate".into()],
        };
        let snapshot = script.run("blue");
        assert_eq!(snapshot.counter, 5);
        assert_eq!(snapshot.presentation, "bg-slate-400");
    }

    #[test]
    fn unknown_selection_in_script_is_silent() {
        let script = Script {
            clicks: 0,
            selections: vec!["purple".into(), "orange".into()],
        };
        let snapshot = script.run("blue");
        assert_eq!(snapshot.selection, "orange");
        assert_eq!(snapshot.presentation, "bg-purple-400");
    }
}

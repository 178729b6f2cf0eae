//! Reactive primitives: state cells, derivation rules, application context.
//!
//! No runtime, no scheduler. A `Signal` only reports whether a write
//! changed its value; the owner decides what to recompute. `Derivation`
//! packages a pure rule from one cell into another and is fired by the
//! owner inside the same mutation that changed the source cell.

use tracing::trace;

// ============================================================================
// SIGNAL
// ============================================================================

/// A state cell with equality-gated writes.
///
/// `version` bumps on every write that changes the value, so observers can
/// tell "set to a new value" apart from "set to the value it already had".
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    value: T,
    version: u64,
}

impl<T: PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Signal { value, version: 0 }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of changing writes since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Overwrite the value. Returns true if it differs from the previous one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        true
    }

    /// Read-modify-write against the value held at call time.
    ///
    /// The closure receives the latest value, never a copy captured
    /// earlier, so back-to-back updates compose without losing any.
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next)
    }
}

// ============================================================================
// DERIVATION
// ============================================================================

/// A pure rule computing a target cell from a source cell.
///
/// The rule returns None when it has no value for the source; the target
/// is then left untouched. `runs` counts evaluations, not writes.
#[derive(Debug)]
pub struct Derivation<S: ?Sized, T> {
    name: &'static str,
    rule: fn(&S) -> Option<T>,
    runs: u64,
}

impl<S: ?Sized, T: PartialEq> Derivation<S, T> {
    pub fn new(name: &'static str, rule: fn(&S) -> Option<T>) -> Self {
        Derivation { name, rule, runs: 0 }
    }

    /// Evaluate the rule and write the result into `target`.
    ///
    /// Returns true if the target value changed.
    pub fn apply(&mut self, source: &S, target: &mut Signal<T>) -> bool {
        self.runs += 1;
        match (self.rule)(source) {
            Some(value) => {
                let changed = target.set(value);
                trace!(derivation = self.name, changed, "derivation applied");
                changed
            }
            None => {
                trace!(derivation = self.name, "derivation has no value, target kept");
                false
            }
        }
    }

    /// How many times the rule has been evaluated.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Lifecycle phase of the view owning a `Context`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// Render scheduling and lifecycle state, passed explicitly to components.
///
/// Mutations call `request_render`; the event loop calls `take_render`
/// before drawing. Several requests between two frames collapse into one.
#[derive(Debug)]
pub struct Context {
    lifecycle: Lifecycle,
    render_requested: bool,
    frames: u64,
}

impl Context {
    /// Create a context for a view about to mount. The first frame is due.
    pub fn mount() -> Self {
        Context {
            lifecycle: Lifecycle::Mounted,
            render_requested: true,
            frames: 0,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Mark the view as needing a redraw. Ignored after unmount.
    pub fn request_render(&mut self) {
        if self.is_mounted() {
            self.render_requested = true;
        }
    }

    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    /// Consume a pending render request, counting the frame.
    pub fn take_render(&mut self) -> bool {
        if !self.render_requested || !self.is_mounted() {
            return false;
        }
        self.render_requested = false;
        self.frames += 1;
        true
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down: no further renders will be scheduled.
    pub fn unmount(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
        self.render_requested = false;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn double_if_even(n: &u32) -> Option<u32> {
        if n % 2 == 0 { Some(n * 2) } else { None }
    }

    #[test]
    fn set_same_value_is_not_a_change() {
        let mut cell = Signal::new(3);
        assert!(!cell.set(3));
        assert_eq!(cell.version(), 0);
        assert!(cell.set(4));
        assert_eq!(cell.version(), 1);
        assert_eq!(*cell.get(), 4);
    }

    #[test]
    fn update_reads_latest_value() {
        let mut cell = Signal::new(0u64);
        for _ in 0..50 {
            cell.update(|prev| prev + 1);
        }
        assert_eq!(*cell.get(), 50);
        assert_eq!(cell.version(), 50);
    }

    #[test]
    fn derivation_writes_on_match() {
        let mut target = Signal::new(0);
        let mut rule = Derivation::new("double", double_if_even);
        assert!(rule.apply(&4, &mut target));
        assert_eq!(*target.get(), 8);
        assert_eq!(rule.runs(), 1);
    }

    #[test]
    fn derivation_without_value_keeps_target() {
        let mut target = Signal::new(8);
        let mut rule = Derivation::new("double", double_if_even);
        assert!(!rule.apply(&3, &mut target));
        assert_eq!(*target.get(), 8);
        assert_eq!(target.version(), 0);
        assert_eq!(rule.runs(), 1);
    }

    #[test]
    fn derivation_rerun_is_idempotent() {
        let mut target = Signal::new(0);
        let mut rule = Derivation::new("double", double_if_even);
        rule.apply(&2, &mut target);
        assert!(!rule.apply(&2, &mut target));
        assert_eq!(*target.get(), 4);
        assert_eq!(target.version(), 1);
    }

    #[test]
    fn context_starts_with_first_frame_due() {
        let mut ctx = Context::mount();
        assert!(ctx.is_mounted());
        assert!(ctx.take_render());
        assert!(!ctx.take_render());
        assert_eq!(ctx.frames(), 1);
    }

    #[test]
    fn render_requests_coalesce() {
        let mut ctx = Context::mount();
        ctx.take_render();
        ctx.request_render();
        ctx.request_render();
        assert!(ctx.take_render());
        assert!(!ctx.take_render());
        assert_eq!(ctx.frames(), 2);
    }

    #[test]
    fn unmounted_context_never_renders() {
        let mut ctx = Context::mount();
        ctx.unmount();
        ctx.request_render();
        assert!(!ctx.render_requested());
        assert!(!ctx.take_render());
        assert_eq!(ctx.lifecycle(), Lifecycle::Unmounted);
    }
}

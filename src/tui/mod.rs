//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Widgets, Action, Transition)
//! - `update`: Pure widget transitions, plus `apply` to reach the component
//! - `view`: Pure rendering
//! - `theme`: Styles and the background style engine
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

//! tinted-counter: a counter button and a color dropdown driving a derived background.

pub mod component;
pub mod config;
pub mod error;
pub mod logging;
pub mod reactive;
pub mod report;
pub mod script;
pub mod tui;
pub mod types;

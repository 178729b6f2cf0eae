//! Domain types for tinted-counter.
//!
//! The color option set, the fixed selection → token mapping, and the
//! serializable snapshot of component state.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Selection held by a freshly mounted component.
pub const DEFAULT_SELECTION: &str = "blue";

/// Presentation token held before the first derivation runs.
pub const INITIAL_TOKEN: &str = "bg-blue-400";

// ============================================================================
// COLOR OPTIONS
// ============================================================================

/// One entry of the dropdown's fixed option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOption {
    Blue,
    Slate,
    Yellow,
    Purple,
}

impl ColorOption {
    /// All options, in the order the dropdown lists them.
    pub const ALL: [ColorOption; 4] = [
        ColorOption::Blue,
        ColorOption::Slate,
        ColorOption::Yellow,
        ColorOption::Purple,
    ];

    /// Identifier reported to `select()` when this option is chosen.
    pub fn id(self) -> &'static str {
        match self {
            ColorOption::Blue => "blue",
            ColorOption::Slate => "slate",
            ColorOption::Yellow => "yellow",
            ColorOption::Purple => "purple",
        }
    }

    /// Human-readable label shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ColorOption::Blue => "Blue",
            ColorOption::Slate => "Slate",
            ColorOption::Yellow => "Yellow",
            ColorOption::Purple => "Purple",
        }
    }

    /// Utility-class token the derivation assigns to this option.
    pub fn token(self) -> &'static str {
        match self {
            ColorOption::Blue => "bg-blue-400",
            ColorOption::Slate => "bg-slate-400",
            ColorOption::Yellow => "bg-yellow-400",
            ColorOption::Purple => "bg-purple-400",
        }
    }

    /// Exact, case-sensitive lookup by identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.id() == id)
    }

    /// Option at a zero-based dropdown position.
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based dropdown position of this option.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&option| option == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for ColorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The derivation rule: Selection → PresentationToken.
///
/// Returns None for identifiers outside the option set. Callers treat None
/// as "leave the token as it is", never as a fallback color.
pub fn background_token(selection: &str) -> Option<&'static str> {
    ColorOption::from_id(selection).map(ColorOption::token)
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-parseable JSON.
    Json,
}

/// Point-in-time copy of the component's three state cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub counter: u64,
    pub selection: String,
    pub presentation: String,
}

// ============================================================================
// TESTS
// ============================================================================

//! Alert severity ladder.

use serde::{Deserialize, Serialize};

/// Severity of an out-of-range finding, ordered `Normal < Info < Warning < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Raise to `other` if it is stricter. Never lowers.
    pub fn escalate(self, other: Severity) -> Severity {
        self.max(other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

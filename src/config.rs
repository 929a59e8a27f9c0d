// WHY: single configuration surface shared by the library, the weaver and the CLI
// Strictness is fixed at construction time and never changes during a check

use serde::{Deserialize, Serialize};

/// Configuration for duplicate header detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Compare headers exactly instead of by equivalence class
    pub strict: bool,
}

impl CheckConfig {
    /// Configuration requiring byte-exact header matches
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

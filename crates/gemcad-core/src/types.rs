//! Small value types shared across crates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Stone layout pattern used by quick fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    /// Triangular close-packed lattice.
    #[default]
    Hex,
    /// Concentric rings following the region outline.
    Pave,
    /// Straight rows of stones.
    Channel,
}

impl GridType {
    /// Wire name of the pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Pave => "pave",
            Self::Channel => "channel",
        }
    }
}

impl std::fmt::Display for GridType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a grid type name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown grid type '{0}', expected hex, pave or channel")]
pub struct ParseGridTypeError(pub String);

impl FromStr for GridType {
    type Err = ParseGridTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "pave" | "pavé" => Ok(Self::Pave),
            "channel" => Ok(Self::Channel),
            other => Err(ParseGridTypeError(other.to_string())),
        }
    }
}

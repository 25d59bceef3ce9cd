//! Task priority and its stored text encoding.
//!
//! The priority column holds the variant name (`HIGH`, `MEDIUM`, `LOW`).
//! The mapping lives here rather than in a rusqlite `ToSql`/`FromSql` impl
//! so that the store reads and writes plain text and the encoding can be
//! versioned independently of the schema.

use crate::db::todos::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version of the variant-to-text mapping below. Bump together with a
/// migration that rewrites the `priority` column.
pub const PRIORITY_ENCODING_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Text written to the `priority` column.
    pub fn as_stored(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Inverse of [`Priority::as_stored`]. Only exact variant names are accepted.
    pub fn from_stored(value: &str) -> Result<Self, StoreError> {
        match value {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            other => Err(StoreError::UnknownPriority(other.to_string())),
        }
    }

    /// Index of the priority in a selection list ordered High, Medium, Low.
    pub fn position(&self) -> usize {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Human-readable label, as offered in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_stored())
    }
}

/// Parses user input leniently: `high`, `H`, `High Priority` all map to High.
/// Anything unrecognised falls back to Low, matching the selection default.
pub fn parse_priority(input: &str) -> Priority {
    let normalized = input.trim().to_ascii_lowercase();
    match normalized.split_whitespace().next() {
        Some("high") | Some("h") => Priority::High,
        Some("medium") | Some("med") | Some("m") => Priority::Medium,
        _ => Priority::Low,
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{}', expected high, medium or low", other)),
        }
    }
}

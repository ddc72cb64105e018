//! Interruption submission payload

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome chosen when resolving an interruption.
///
/// `Proceed` and `Abort` are the values offered by manual intervention
/// steps. Any other value the server defines is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    Proceed,
    Abort,
    Other(String),
}

impl ResolutionKind {
    /// Approve a manual intervention.
    pub const MANUAL_INTERVENTION_APPROVE: Self = Self::Proceed;
    /// Reject a manual intervention.
    pub const MANUAL_INTERVENTION_ABORT: Self = Self::Abort;

    pub fn as_str(&self) -> &str {
        match self {
            Self::Proceed => "Proceed",
            Self::Abort => "Abort",
            Self::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ResolutionKind {
    fn from(value: &str) -> Self {
        match value {
            "Proceed" => Self::Proceed,
            "Abort" => Self::Abort,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ResolutionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Proceed" => Self::Proceed,
            "Abort" => Self::Abort,
            _ => Self::Other(value),
        }
    }
}

impl FromStr for ResolutionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResolutionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResolutionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Body of `POST /api/interruptions/{id}/submit`
///
/// Serialises to exactly `Instructions`, `Notes` and `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InterruptionSubmitRequest {
    pub instructions: String,
    pub notes: String,
    pub result: ResolutionKind,
}

impl InterruptionSubmitRequest {
    pub fn new(instructions: impl Into<String>, result: ResolutionKind) -> Self {
        Self {
            instructions: instructions.into(),
            notes: String::new(),
            result,
        }
    }

    /// Approve with the given instructions and no notes.
    pub fn approve(instructions: impl Into<String>) -> Self {
        Self::new(instructions, ResolutionKind::MANUAL_INTERVENTION_APPROVE)
    }

    /// Abort with the given instructions and no notes.
    pub fn abort(instructions: impl Into<String>) -> Self {
        Self::new(instructions, ResolutionKind::MANUAL_INTERVENTION_ABORT)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

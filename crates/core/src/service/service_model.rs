//! Operation identifiers and presentation result envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::leads::Lead;
use crate::opportunities::Opportunity;

/// The simulated backend operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Load,
    Retry,
    Update,
    Convert,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Load,
        Operation::Retry,
        Operation::Update,
        Operation::Convert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Retry => "retry",
            Operation::Update => "update",
            Operation::Convert => "convert",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{success, error}` envelope returned to the presentation layer for edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Lead>> for UpdateResult {
    fn from(result: Result<Lead>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                error: None,
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// `{success, opportunity, error}` envelope for conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<Opportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Opportunity>> for ConvertResult {
    fn from(result: Result<Opportunity>) -> Self {
        match result {
            Ok(opportunity) => Self {
                success: true,
                opportunity: Some(opportunity),
                error: None,
            },
            Err(err) => Self {
                success: false,
                opportunity: None,
                error: Some(err.to_string()),
            },
        }
    }
}

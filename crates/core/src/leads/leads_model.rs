//! Lead domain models.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SCORE;
use crate::errors::{Result, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern")
});

/// Returns true if `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Qualification status of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Unqualified,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Unqualified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Unqualified => "unqualified",
        }
    }

    /// Human readable label used by status selectors.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Unqualified => "Unqualified",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidInput(format!("Unknown lead status '{}'", s)))
    }
}

/// Quality band derived from a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// 90 and above
    Excellent,
    /// 75 to 89
    Good,
    /// 60 to 74
    Fair,
    /// Below 60
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreTier::Excellent,
            75..=89 => ScoreTier::Good,
            60..=74 => ScoreTier::Fair,
            _ => ScoreTier::Poor,
        }
    }
}

/// Domain model representing a sales lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    /// Origin channel (e.g. "website", "referral")
    pub source: String,
    /// Lead quality indicator in 0..=100
    pub score: u8,
    pub status: LeadStatus,
}

impl Lead {
    /// Validates the structural invariants of a lead record.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.score > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange(u32::from(self.score)).into());
        }
        Ok(())
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }

    /// Merges the fields present in `update` into this lead.
    pub(crate) fn apply(&mut self, update: &LeadUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(company) = &update.company {
            self.company = company.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(source) = &update.source {
            self.source = source.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Partial update for an existing lead.
///
/// The id and score are not editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl LeadUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn status(mut self, status: LeadStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.company.is_none()
            && self.email.is_none()
            && self.source.is_none()
            && self.status.is_none()
    }

    /// Validates the update before it is sent to the service.
    pub fn validate(&self) -> Result<()> {
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail(email.clone()).into());
            }
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(
                ValidationError::InvalidInput("Lead name cannot be empty".to_string()).into(),
            );
        }
        if matches!(&self.company, Some(company) if company.trim().is_empty()) {
            return Err(
                ValidationError::InvalidInput("Company cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

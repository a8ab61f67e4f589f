//! Opportunity domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::OPPORTUNITY_ID_PREFIX;
use crate::errors::{Result, ValidationError};
use crate::leads::Lead;

/// Position of an opportunity in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityStage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    pub const ALL: [OpportunityStage; 6] = [
        OpportunityStage::Prospecting,
        OpportunityStage::Qualification,
        OpportunityStage::Proposal,
        OpportunityStage::Negotiation,
        OpportunityStage::ClosedWon,
        OpportunityStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStage::Prospecting => "prospecting",
            OpportunityStage::Qualification => "qualification",
            OpportunityStage::Proposal => "proposal",
            OpportunityStage::Negotiation => "negotiation",
            OpportunityStage::ClosedWon => "closed-won",
            OpportunityStage::ClosedLost => "closed-lost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityStage::Prospecting => "Prospecting",
            OpportunityStage::Qualification => "Qualification",
            OpportunityStage::Proposal => "Proposal",
            OpportunityStage::Negotiation => "Negotiation",
            OpportunityStage::ClosedWon => "Closed Won",
            OpportunityStage::ClosedLost => "Closed Lost",
        }
    }

    /// Whether the opportunity has left the open pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            OpportunityStage::ClosedWon | OpportunityStage::ClosedLost
        )
    }
}

impl fmt::Display for OpportunityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OpportunityStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidInput(format!("Unknown stage '{}'", s)))
    }
}

/// Input collected by the conversion dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    #[serde(default)]
    pub stage: OpportunityStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl ConversionRequest {
    pub fn new(stage: OpportunityStage, amount: Option<Decimal>) -> Self {
        Self { stage, amount }
    }

    pub fn validate(&self) -> Result<()> {
        if matches!(self.amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(ValidationError::NegativeAmount.into());
        }
        Ok(())
    }
}

/// Domain model representing a sales opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    /// "{company} - {contact name}" of the source lead
    pub name: String,
    pub stage: OpportunityStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
}

impl Opportunity {
    /// Builds the opportunity that results from converting `lead`.
    pub fn from_lead(lead: &Lead, request: &ConversionRequest) -> Self {
        Self {
            id: next_opportunity_id(),
            name: format!("{} - {}", lead.company, lead.name),
            stage: request.stage,
            amount: request.amount,
            account_name: lead.company.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn display_amount(&self) -> String {
        format_amount(self.amount)
    }
}

/// Generates a process-unique opportunity id.
///
/// UUIDv7 values are time-ordered and carry random bits, so two
/// conversions in the same millisecond still get distinct ids.
pub fn next_opportunity_id() -> String {
    format!("{}-{}", OPPORTUNITY_ID_PREFIX, Uuid::now_v7())
}

/// Formats an amount as Brazilian reais, e.g. `R$\u{a0}5.000,00`.
///
/// The currency symbol is followed by a no-break space. Missing and zero
/// amounts render as "Not specified"; non-zero amounts under half a cent
/// round to `R$\u{a0}0,00`.
pub fn format_amount(amount: Option<Decimal>) -> String {
    let amount = match amount {
        Some(amount) if !amount.is_zero() => amount,
        _ => return "Not specified".to_string(),
    };

    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}R$\u{a0}{},{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::LeadStatus;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn alice() -> Lead {
        Lead {
            id: "1".to_string(),
            name: "Alice".to_string(),
            company: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            source: "web".to_string(),
            score: 85,
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_stage_serialization() {
        assert_eq!(
            serde_json::to_string(&OpportunityStage::ClosedWon).unwrap(),
            "\"closed-won\""
        );
        assert_eq!(
            "closed-lost".parse::<OpportunityStage>().unwrap(),
            OpportunityStage::ClosedLost
        );
        assert!("won".parse::<OpportunityStage>().is_err());
        assert_eq!(OpportunityStage::default(), OpportunityStage::Prospecting);
    }

    #[test]
    fn test_stage_labels_and_closed() {
        assert_eq!(OpportunityStage::ClosedWon.label(), "Closed Won");
        assert!(OpportunityStage::ClosedLost.is_closed());
        assert!(!OpportunityStage::Negotiation.is_closed());
    }

    #[test]
    fn test_from_lead_derives_name_and_account() {
        let request = ConversionRequest::new(OpportunityStage::Proposal, Some(dec!(5000)));
        let opportunity = Opportunity::from_lead(&alice(), &request);

        assert_eq!(opportunity.name, "Acme - Alice");
        assert_eq!(opportunity.account_name, "Acme");
        assert_eq!(opportunity.stage, OpportunityStage::Proposal);
        assert_eq!(opportunity.amount, Some(dec!(5000)));
        assert!(opportunity.id.starts_with("opp-"));
    }

    #[test]
    fn test_ids_are_unique_on_rapid_generation() {
        let ids: HashSet<String> = (0..1000).map(|_| next_opportunity_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_request_rejects_negative_amount() {
        let request = ConversionRequest::new(OpportunityStage::Prospecting, Some(dec!(-1)));
        assert!(request.validate().is_err());

        let request = ConversionRequest::new(OpportunityStage::Prospecting, Some(dec!(0)));
        assert!(request.validate().is_ok());

        assert!(ConversionRequest::default().validate().is_ok());
    }

    #[test]
    fn test_request_json_defaults_stage() {
        let request: ConversionRequest = serde_json::from_str(r#"{"amount":1200.5}"#).unwrap();
        assert_eq!(request.stage, OpportunityStage::Prospecting);
        assert_eq!(request.amount, Some(dec!(1200.5)));
    }

    #[test]
    fn test_opportunity_json_shape() {
        let opportunity = Opportunity::from_lead(&alice(), &ConversionRequest::default());
        let json = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(json["accountName"], "Acme");
        assert_eq!(json["stage"], "prospecting");
        assert!(json.get("amount").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(None), "Not specified");
        assert_eq!(format_amount(Some(dec!(0))), "Not specified");
        assert_eq!(format_amount(Some(dec!(5000))), "R$\u{a0}5.000,00");
        assert_eq!(format_amount(Some(dec!(1234567.891))), "R$\u{a0}1.234.567,89");
        assert_eq!(format_amount(Some(dec!(99.5))), "R$\u{a0}99,50");
    }

    #[test]
    fn test_format_amount_sub_cent() {
        assert_eq!(format_amount(Some(dec!(0.004))), "R$\u{a0}0,00");
        assert_eq!(format_amount(Some(dec!(0.005))), "R$\u{a0}0,01");
    }

    #[test]
    fn test_display_amount() {
        let request = ConversionRequest::new(OpportunityStage::Proposal, Some(dec!(5000)));
        let opportunity = Opportunity::from_lead(&alice(), &request);
        assert_eq!(opportunity.display_amount(), "R$\u{a0}5.000,00");

        let unpriced = Opportunity::from_lead(&alice(), &ConversionRequest::default());
        assert_eq!(unpriced.display_amount(), "Not specified");
    }
}

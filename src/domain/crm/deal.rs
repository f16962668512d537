use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Deal lifecycle label.
///
/// Stages are free-form strings in the backend; only the literal value
/// `"closed"` carries meaning for the dashboard. Unknown values are
/// preserved, not rejected.
///
/// # Example
/// ```
/// use crowsnest_api::domain::crm::Stage;
///
/// assert!(Stage::new("closed").is_closed());
/// assert!(!Stage::new("open").is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage(String);

impl Stage {
    /// Wraps a raw stage label from the backend.
    pub fn new(stage: impl Into<String>) -> Self {
        Stage(stage.into())
    }

    /// Whether this deal counts as closed. Exact, case-sensitive match.
    pub fn is_closed(&self) -> bool {
        self.0 == "closed"
    }

    /// Returns the raw stage label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A deal scoped to a company.
///
/// `amount` is the monetary value the dashboard sums into revenue; a
/// missing amount is defaulted to zero at the database boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub amount: Decimal,
    pub stage: Stage,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_stage_is_closed() {
        assert!(Stage::new("closed").is_closed());
    }

    #[test]
    fn open_stage_is_not_closed() {
        assert!(!Stage::new("open").is_closed());
        assert!(!Stage::new("negotiation").is_closed());
    }

    #[test]
    fn closed_match_is_case_sensitive() {
        assert!(!Stage::new("Closed").is_closed());
        assert!(!Stage::new("CLOSED").is_closed());
    }

    #[test]
    fn empty_stage_is_not_closed() {
        assert!(!Stage::new("").is_closed());
    }

    #[test]
    fn substring_is_not_closed() {
        assert!(!Stage::new("closed-lost").is_closed());
    }

    #[test]
    fn stage_display_is_raw_label() {
        assert_eq!(Stage::new("proposal").to_string(), "proposal");
    }

    #[test]
    fn stage_serializes_as_plain_string() {
        let json = serde_json::to_string(&Stage::new("open")).unwrap();
        assert_eq!(json, "\"open\"");
    }
}

use crate::presentation::serialization::string_as_float;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a dividend payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DividendState {
    /// Announced but not yet paid
    #[default]
    Pending,
    /// Amount has been paid out
    Paid,
    /// Payment is being reinvested
    Reinvested,
    /// Payment was voided by the upstream
    Voided,
    /// State string this client does not recognize; treated as not paid
    #[serde(other)]
    Unknown,
}

/// A dividend record from the upstream API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dividend {
    /// Upstream identifier for this dividend
    #[serde(default)]
    pub id: String,
    /// Total amount of the payment
    #[serde(default, deserialize_with = "string_as_float")]
    pub amount: f64,
    /// Per-share rate
    #[serde(default, deserialize_with = "string_as_float")]
    pub rate: f64,
    /// Number of shares held at the record date
    #[serde(default, deserialize_with = "string_as_float")]
    pub position: f64,
    /// Payment state
    #[serde(default)]
    pub state: DividendState,
    /// Date the position was snapshotted for eligibility
    #[serde(default)]
    pub record_date: String,
    /// Scheduled payment date
    #[serde(default)]
    pub payable_date: String,
    /// Timestamp the payment landed, when it has
    #[serde(default)]
    pub paid_at: Option<String>,
    /// Instrument URL the dividend belongs to
    #[serde(default)]
    pub instrument: String,
    /// Ticker symbol resolved from the instrument URL ("N/A" when unresolvable)
    #[serde(default)]
    pub symbol: String,
}

impl Dividend {
    /// True when the amount has actually been paid out (or reinvested)
    pub fn is_paid(&self) -> bool {
        matches!(self.state, DividendState::Paid | DividendState::Reinvested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dividend_deserializes() {
        let json = r#"{
            "id": "div-1",
            "amount": "7.30",
            "rate": "0.7300000000",
            "position": "10.0000",
            "state": "paid",
            "payable_date": "2026-03-15",
            "instrument": "https://api.example.com/instruments/abc/"
        }"#;
        let dividend: Dividend = serde_json::from_str(json).unwrap();
        assert_eq!(dividend.amount, 7.3);
        assert_eq!(dividend.state, DividendState::Paid);
        assert!(dividend.is_paid());
        assert!(dividend.paid_at.is_none());
        assert!(dividend.symbol.is_empty());
    }

    #[test]
    fn test_pending_dividend_not_counted_as_paid() {
        let json = r#"{"id": "div-2", "amount": "1.00", "state": "pending"}"#;
        let dividend: Dividend = serde_json::from_str(json).unwrap();
        assert!(!dividend.is_paid());
    }

    #[test]
    fn test_unrecognized_state_not_counted_as_paid() {
        let json = r#"{"id": "div-3", "amount": "1.00", "state": "cancelled"}"#;
        let dividend: Dividend = serde_json::from_str(json).unwrap();
        assert_eq!(dividend.state, DividendState::Unknown);
        assert!(!dividend.is_paid());
    }
}

use crate::presentation::serialization::{string_as_float, string_as_float_opt};
use serde::{Deserialize, Serialize};

fn default_asset_type() -> String {
    "stock".to_string()
}

/// A single position record as surfaced by the holdings endpoint
///
/// Flat record passed through from the upstream API; every optional field is
/// default-filled so a sparse upstream payload still deserializes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Holding {
    /// Ticker symbol
    pub symbol: String,
    /// Company or instrument name
    #[serde(default)]
    pub name: String,
    /// Number of shares held
    #[serde(default, deserialize_with = "string_as_float")]
    pub quantity: f64,
    /// Average purchase price per share
    #[serde(default, deserialize_with = "string_as_float")]
    pub average_buy_price: f64,
    /// Latest price per share
    #[serde(default, deserialize_with = "string_as_float")]
    pub price: f64,
    /// Current value of the position including unsettled amounts
    #[serde(default, deserialize_with = "string_as_float")]
    pub equity: f64,
    /// Current market value of the position
    #[serde(default, deserialize_with = "string_as_float")]
    pub market_value: f64,
    /// Percent change since purchase
    #[serde(default, deserialize_with = "string_as_float")]
    pub percent_change: f64,
    /// Absolute change in equity since purchase
    #[serde(default, deserialize_with = "string_as_float")]
    pub equity_change: f64,
    /// Absolute return for the current trading day
    #[serde(default, deserialize_with = "string_as_float")]
    pub total_return_today: f64,
    /// Percent return for the current trading day
    #[serde(default, deserialize_with = "string_as_float")]
    pub total_return_today_percent: f64,
    /// Price / earnings ratio, when the upstream has one
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub pe_ratio: Option<f64>,
    /// Dividend yield, when the upstream has one
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub dividend_yield: Option<f64>,
    /// Upstream instrument identifier
    #[serde(default)]
    pub id: String,
    /// Canonical instrument URL backing this position
    #[serde(default)]
    pub instrument: String,
    /// Asset type (e.g. "stock", "etp")
    #[serde(rename = "type", default = "default_asset_type")]
    pub asset_type: String,
}

impl Holding {
    /// Total amount paid for the position
    pub fn cost_basis(&self) -> f64 {
        self.average_buy_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_deserializes_sparse_payload() {
        let json = r#"{"symbol": "AAPL", "quantity": "10.0000", "equity": "1500.00"}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.symbol, "AAPL");
        assert_eq!(holding.quantity, 10.0);
        assert_eq!(holding.equity, 1500.0);
        assert_eq!(holding.price, 0.0);
        assert_eq!(holding.pe_ratio, None);
        assert!(holding.instrument.is_empty());
        assert_eq!(holding.asset_type, "stock");
    }

    #[test]
    fn test_cost_basis() {
        let json = r#"{"symbol": "MSFT", "quantity": "4", "average_buy_price": "250.50"}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.cost_basis(), 1002.0);
    }
}

use crate::presentation::serialization::{string_as_float, string_as_float_opt};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order direction (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    #[default]
    Buy,
    /// Sell order
    Sell,
    /// Side string this client does not recognize
    #[serde(other)]
    Unknown,
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Market order - executed immediately at current market price
    #[default]
    Market,
    /// Limit order - executed when price reaches specified level
    Limit,
    /// Order type this client does not recognize
    #[serde(other)]
    Unknown,
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good for day - expires at market close
    #[default]
    Gfd,
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Execute at market open
    Opg,
    /// Duration string this client does not recognize
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Waiting to be sent to the exchange
    #[default]
    Queued,
    /// Created but not yet acknowledged
    Unconfirmed,
    /// Acknowledged by the exchange and working
    Confirmed,
    /// Some of the quantity has executed
    PartiallyFilled,
    /// Fully executed
    Filled,
    /// Rejected by the exchange
    Rejected,
    /// Cancelled before completion
    Cancelled,
    /// Failed to route
    Failed,
    /// State string this client does not recognize; treated as not open
    #[serde(other)]
    Unknown,
}

impl OrderState {
    /// True for states in which the order may still execute
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderState::Queued
                | OrderState::Unconfirmed
                | OrderState::Confirmed
                | OrderState::PartiallyFilled
        )
    }
}

/// A stock order record from the upstream API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Order {
    /// Upstream identifier for this order
    #[serde(default)]
    pub id: String,
    /// Number of shares in the order
    #[serde(default, deserialize_with = "string_as_float")]
    pub quantity: f64,
    /// Limit price, when the order has one
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub price: Option<f64>,
    /// Average execution price, once any quantity has filled
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub average_price: Option<f64>,
    /// Buy or sell
    #[serde(default)]
    pub side: OrderSide,
    /// Market or limit
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
    /// How long the order stays working
    #[serde(default)]
    pub time_in_force: TimeInForce,
    /// Current lifecycle state
    #[serde(default)]
    pub state: OrderState,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
    /// Execution timestamp, once filled
    #[serde(default)]
    pub executed_at: Option<String>,
    /// Instrument URL the order is for
    #[serde(default)]
    pub instrument: String,
    /// Ticker symbol resolved from the instrument URL ("N/A" when unresolvable)
    #[serde(default)]
    pub symbol: String,
}

impl Order {
    /// True when the order may still execute
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes() {
        let json = r#"{
            "id": "ord-1",
            "quantity": "5.0000",
            "price": "180.25",
            "side": "buy",
            "type": "limit",
            "time_in_force": "gtc",
            "state": "confirmed",
            "created_at": "2026-08-01T14:30:00Z",
            "instrument": "https://api.example.com/instruments/abc/"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.quantity, 5.0);
        assert_eq!(order.price, Some(180.25));
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.order_type, OrderType::Limit);
        assert!(order.is_open());
    }

    #[test]
    fn test_terminal_states_are_not_open() {
        for state in [
            OrderState::Filled,
            OrderState::Rejected,
            OrderState::Cancelled,
            OrderState::Failed,
        ] {
            assert!(!state.is_open(), "{state:?} should be terminal");
        }
        assert!(OrderState::PartiallyFilled.is_open());
    }

    #[test]
    fn test_unknown_state_deserializes_as_not_open() {
        let json = r#"{
            "id": "ord-2",
            "quantity": "1",
            "side": "buy",
            "type": "limit",
            "time_in_force": "gtc",
            "state": "pending_cancelled",
            "instrument": ""
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.state, OrderState::Unknown);
        assert!(!order.is_open());
    }

    #[test]
    fn test_unrecognized_enum_strings_do_not_fail_the_record() {
        let json = r#"{
            "id": "ord-3",
            "quantity": "1",
            "side": "short",
            "type": "stop_loss",
            "time_in_force": "fok",
            "state": "filled",
            "instrument": ""
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.side, OrderSide::Unknown);
        assert_eq!(order.order_type, OrderType::Unknown);
        assert_eq!(order.time_in_force, TimeInForce::Unknown);
        assert_eq!(order.state, OrderState::Filled);
    }
}

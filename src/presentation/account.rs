use crate::presentation::serialization::{string_as_float, string_as_float_opt};
use serde::{Deserialize, Serialize};

/// Basic user profile from the user endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BasicProfile {
    /// Upstream user identifier
    #[serde(default)]
    pub id: String,
    /// Username or login email
    #[serde(default)]
    pub username: String,
    /// First name on the account
    #[serde(default)]
    pub first_name: String,
    /// Last name on the account
    #[serde(default)]
    pub last_name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Account creation timestamp
    #[serde(default)]
    pub created_at: String,
}

/// Account-level profile from the accounts endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountProfile {
    /// Brokerage account number
    #[serde(default)]
    pub account_number: String,
    /// Funds available for new orders
    #[serde(default, deserialize_with = "string_as_float")]
    pub buying_power: f64,
    /// Settled cash balance
    #[serde(default, deserialize_with = "string_as_float")]
    pub cash: f64,
    /// Cash held for pending orders
    #[serde(default, deserialize_with = "string_as_float")]
    pub cash_held_for_orders: f64,
    /// Uncleared deposit amount
    #[serde(default, deserialize_with = "string_as_float")]
    pub uncleared_deposits: f64,
    /// Account type (e.g. "cash", "margin")
    #[serde(rename = "type", default)]
    pub account_type: String,
}

/// Portfolio-level profile from the portfolios endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortfolioProfile {
    /// Total account equity
    #[serde(default, deserialize_with = "string_as_float")]
    pub equity: f64,
    /// Market value of all positions
    #[serde(default, deserialize_with = "string_as_float")]
    pub market_value: f64,
    /// Equity during extended hours, when available
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub extended_hours_equity: Option<f64>,
    /// Equity at the previous market close
    #[serde(default, deserialize_with = "string_as_float")]
    pub equity_previous_close: f64,
    /// Amount available for withdrawal
    #[serde(default, deserialize_with = "string_as_float")]
    pub withdrawable_amount: f64,
}

/// Combined account information for the dashboard
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountOverview {
    /// Basic user profile
    pub profile: BasicProfile,
    /// Account-level details
    pub account: AccountProfile,
    /// Portfolio-level details
    pub portfolio: PortfolioProfile,
}

use crate::presentation::holding::Holding;
use crate::utils::finance::return_percentage;
use serde::{Deserialize, Serialize};

/// Aggregated portfolio metrics for the dashboard summary view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of equity across all positions
    pub total_equity: f64,
    /// Sum of market value across all positions
    pub total_market_value: f64,
    /// Number of open positions
    pub total_positions: usize,
    /// Total dividends paid out
    pub total_dividends: f64,
    /// Total amount paid for all positions
    pub total_cost_basis: f64,
    /// Absolute return over cost basis
    pub total_return: f64,
    /// Percent return over cost basis
    pub total_return_percent: f64,
    /// The holdings the summary was computed from
    pub holdings: Vec<Holding>,
}

impl PortfolioSummary {
    /// Builds a summary from holdings and the dividend total
    pub fn from_holdings(holdings: Vec<Holding>, total_dividends: f64) -> Self {
        let total_equity: f64 = holdings.iter().map(|h| h.equity).sum();
        let total_market_value: f64 = holdings.iter().map(|h| h.market_value).sum();
        let total_cost_basis: f64 = holdings.iter().map(|h| h.cost_basis()).sum();
        let total_return = total_equity - total_cost_basis;
        let total_return_percent = return_percentage(total_equity, total_cost_basis);

        Self {
            total_equity,
            total_market_value,
            total_positions: holdings.len(),
            total_dividends,
            total_cost_basis,
            total_return,
            total_return_percent,
            holdings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(symbol: &str, quantity: f64, avg: f64, equity: f64, market_value: f64) -> Holding {
        serde_json::from_value(serde_json::json!({
            "symbol": symbol,
            "quantity": quantity.to_string(),
            "average_buy_price": avg.to_string(),
            "equity": equity.to_string(),
            "market_value": market_value.to_string(),
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_aggregates_holdings() {
        let holdings = vec![
            holding("AAPL", 10.0, 100.0, 1500.0, 1490.0),
            holding("MSFT", 2.0, 250.0, 400.0, 405.0),
        ];
        let summary = PortfolioSummary::from_holdings(holdings, 12.5);

        assert_eq!(summary.total_positions, 2);
        assert_eq!(summary.total_equity, 1900.0);
        assert_eq!(summary.total_market_value, 1895.0);
        assert_eq!(summary.total_cost_basis, 1500.0);
        assert_eq!(summary.total_return, 400.0);
        assert!((summary.total_return_percent - 26.666).abs() < 0.01);
        assert_eq!(summary.total_dividends, 12.5);
    }

    #[test]
    fn test_summary_of_empty_portfolio() {
        let summary = PortfolioSummary::from_holdings(Vec::new(), 0.0);
        assert_eq!(summary.total_positions, 0);
        assert_eq!(summary.total_equity, 0.0);
        assert_eq!(summary.total_return_percent, 0.0);
    }
}

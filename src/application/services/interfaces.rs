use crate::application::services::types::PortfolioSummary;
use crate::error::AppError;
use crate::presentation::account::AccountOverview;
use crate::presentation::dividend::Dividend;
use crate::presentation::holding::Holding;
use crate::presentation::order::Order;
use async_trait::async_trait;

/// Interface for the portfolio service
///
/// Each read accepts a `force_refresh` flag that bypasses the result cache
/// for that call and replaces the cached value with the fresh result.
#[async_trait]
pub trait PortfolioService: Send + Sync {
    /// Gets current holdings
    async fn get_holdings(&self, force_refresh: bool) -> Result<Vec<Holding>, AppError>;

    /// Gets dividend history with symbols resolved
    async fn get_dividends(&self, force_refresh: bool) -> Result<Vec<Dividend>, AppError>;

    /// Gets the total amount of dividends paid out (including reinvested)
    async fn get_total_dividends(&self, force_refresh: bool) -> Result<f64, AppError>;

    /// Gets orders that may still execute
    async fn get_open_orders(&self, force_refresh: bool) -> Result<Vec<Order>, AppError>;

    /// Gets all orders, newest first
    async fn get_all_orders(&self, force_refresh: bool) -> Result<Vec<Order>, AppError>;

    /// Gets the combined account overview (user, account and portfolio profiles)
    async fn get_account_overview(&self, force_refresh: bool)
        -> Result<AccountOverview, AppError>;

    /// Aggregates holdings and dividends into a dashboard summary
    async fn get_summary(&self) -> Result<PortfolioSummary, AppError>;

    /// Clears the result cache so the next reads hit the upstream
    async fn clear_cache(&self);

    /// Logs out from the upstream and clears all cached results
    async fn logout(&self) -> Result<(), AppError>;
}

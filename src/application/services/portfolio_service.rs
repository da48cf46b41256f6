use crate::application::cache::PortfolioCache;
use crate::application::services::interfaces::PortfolioService;
use crate::application::services::types::PortfolioSummary;
use crate::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::Paginated;
use crate::presentation::account::{AccountOverview, AccountProfile, BasicProfile, PortfolioProfile};
use crate::presentation::dividend::Dividend;
use crate::presentation::holding::Holding;
use crate::presentation::instrument::Instrument;
use crate::presentation::order::Order;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Symbol used when an instrument cannot be resolved
const UNKNOWN_SYMBOL: &str = "N/A";

/// Implementation of the portfolio service
///
/// Wraps the authenticated [`HttpClient`] with a per-operation result cache
/// and resolves instrument URLs to ticker symbols, memoizing the mapping for
/// the lifetime of the service.
pub struct PortfolioServiceImpl {
    config: Arc<Config>,
    client: Arc<HttpClient>,
    cache: PortfolioCache,
    symbols: RwLock<HashMap<String, String>>,
}

impl PortfolioServiceImpl {
    /// Creates a new service over an authenticated client
    pub fn new(client: Arc<HttpClient>) -> Self {
        let config = client.config();
        Self {
            config,
            client,
            cache: PortfolioCache::new(),
            symbols: RwLock::new(HashMap::new()),
        }
    }

    /// Gets the client this service was built with
    pub fn client(&self) -> Arc<HttpClient> {
        self.client.clone()
    }

    /// Resolves an instrument URL to its ticker symbol
    ///
    /// Resolutions are memoized; failed lookups return [`UNKNOWN_SYMBOL`]
    /// without being cached so a later call can still succeed.
    async fn resolve_symbol(&self, instrument_url: &str) -> String {
        if instrument_url.is_empty() {
            return UNKNOWN_SYMBOL.to_string();
        }

        if let Some(symbol) = self.symbols.read().await.get(instrument_url) {
            return symbol.clone();
        }

        match self.client.get::<Instrument>(instrument_url).await {
            Ok(instrument) => {
                let symbol = instrument.symbol;
                self.symbols
                    .write()
                    .await
                    .insert(instrument_url.to_string(), symbol.clone());
                symbol
            }
            Err(e) => {
                warn!("Failed to resolve instrument {}: {}", instrument_url, e);
                UNKNOWN_SYMBOL.to_string()
            }
        }
    }

    /// Fetches all holdings from the upstream
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, AppError> {
        let path = format!("portfolio/holdings/?page_size={}", self.config.page_size);
        let holdings: Vec<Holding> = self.client.get_paginated(&path).await?;
        info!("Fetched {} holdings", holdings.len());
        Ok(holdings)
    }

    /// Fetches dividend history and resolves each entry's symbol
    async fn fetch_dividends(&self) -> Result<Vec<Dividend>, AppError> {
        let path = format!("dividends/?page_size={}", self.config.page_size);
        let mut dividends: Vec<Dividend> = self.client.get_paginated(&path).await?;
        for dividend in &mut dividends {
            dividend.symbol = self.resolve_symbol(&dividend.instrument).await;
        }
        info!("Fetched {} dividend records", dividends.len());
        Ok(dividends)
    }

    /// Fetches the full order history, newest first, with symbols resolved
    async fn fetch_orders(&self) -> Result<Vec<Order>, AppError> {
        let path = format!("orders/?page_size={}", self.config.page_size);
        let mut orders: Vec<Order> = self.client.get_paginated(&path).await?;
        for order in &mut orders {
            order.symbol = self.resolve_symbol(&order.instrument).await;
        }
        // RFC 3339 timestamps order lexicographically
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    /// Fetches the user, account and portfolio profiles
    async fn fetch_account_overview(&self) -> Result<AccountOverview, AppError> {
        let profile: BasicProfile = self.client.get("user/").await?;

        let accounts: Paginated<AccountProfile> = self.client.get("accounts/").await?;
        let account = accounts.results.into_iter().next().ok_or(AppError::NotFound)?;

        let portfolios: Paginated<PortfolioProfile> = self.client.get("portfolios/").await?;
        let portfolio = portfolios.results.into_iter().next().ok_or(AppError::NotFound)?;

        Ok(AccountOverview {
            profile,
            account,
            portfolio,
        })
    }
}

#[async_trait]
impl PortfolioService for PortfolioServiceImpl {
    async fn get_holdings(&self, force_refresh: bool) -> Result<Vec<Holding>, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.holdings.get().await {
                debug!("Returning holdings cached at {}", cached.fetched_at);
                return Ok(cached.value);
            }
        }

        let holdings = self.fetch_holdings().await?;
        self.cache.holdings.put(holdings.clone()).await;
        Ok(holdings)
    }

    async fn get_dividends(&self, force_refresh: bool) -> Result<Vec<Dividend>, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.dividends.get().await {
                debug!("Returning dividends cached at {}", cached.fetched_at);
                return Ok(cached.value);
            }
        }

        let dividends = self.fetch_dividends().await?;
        self.cache.dividends.put(dividends.clone()).await;
        // The cached total was computed from the previous history
        self.cache.total_dividends.clear().await;
        Ok(dividends)
    }

    async fn get_total_dividends(&self, force_refresh: bool) -> Result<f64, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.total_dividends.get().await {
                return Ok(cached.value);
            }
        }

        let dividends = self.get_dividends(force_refresh).await?;
        let total: f64 = dividends
            .iter()
            .filter(|d| d.is_paid())
            .map(|d| d.amount)
            .sum();
        self.cache.total_dividends.put(total).await;
        Ok(total)
    }

    async fn get_open_orders(&self, force_refresh: bool) -> Result<Vec<Order>, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.open_orders.get().await {
                debug!("Returning open orders cached at {}", cached.fetched_at);
                return Ok(cached.value);
            }
        }

        let all_orders = self.get_all_orders(force_refresh).await?;
        let open: Vec<Order> = all_orders.into_iter().filter(|o| o.is_open()).collect();
        self.cache.open_orders.put(open.clone()).await;
        Ok(open)
    }

    async fn get_all_orders(&self, force_refresh: bool) -> Result<Vec<Order>, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.all_orders.get().await {
                debug!("Returning orders cached at {}", cached.fetched_at);
                return Ok(cached.value);
            }
        }

        let orders = self.fetch_orders().await?;
        self.cache.all_orders.put(orders.clone()).await;
        Ok(orders)
    }

    async fn get_account_overview(
        &self,
        force_refresh: bool,
    ) -> Result<AccountOverview, AppError> {
        if !force_refresh {
            if let Some(cached) = self.cache.account_overview.get().await {
                debug!("Returning account overview cached at {}", cached.fetched_at);
                return Ok(cached.value);
            }
        }

        let overview = self.fetch_account_overview().await?;
        self.cache.account_overview.put(overview.clone()).await;
        Ok(overview)
    }

    async fn get_summary(&self) -> Result<PortfolioSummary, AppError> {
        let holdings = self.get_holdings(false).await?;
        let total_dividends = self.get_total_dividends(false).await?;
        Ok(PortfolioSummary::from_holdings(holdings, total_dividends))
    }

    async fn clear_cache(&self) {
        info!("Clearing portfolio cache");
        self.cache.clear_all().await;
    }

    async fn logout(&self) -> Result<(), AppError> {
        let result = self.client.logout().await;
        self.cache.clear_all().await;
        result
    }
}

//! Result caching for portfolio operations
//!
//! Each operation the service exposes gets one named slot holding the last
//! fetched value and its fetch timestamp. There is no TTL eviction:
//! invalidation is explicit, either per call (`force_refresh`), for the whole
//! cache (`clear_all`, wired to the dashboard refresh button) or on logout.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// A cached value together with the time it was fetched
#[derive(Debug, Clone)]
pub struct Cached<T> {
    /// The cached value
    pub value: T,
    /// When the value was fetched from the upstream
    pub fetched_at: DateTime<Utc>,
}

/// A single cache slot for one operation's result
#[derive(Debug, Default)]
pub struct CacheSlot<T> {
    entry: RwLock<Option<Cached<T>>>,
}

impl<T: Clone> CacheSlot<T> {
    /// Creates an empty slot
    pub fn new() -> Self {
        Self {
            entry: RwLock::new(None),
        }
    }

    /// Returns the cached value, if any
    pub async fn get(&self) -> Option<Cached<T>> {
        self.entry.read().await.clone()
    }

    /// Stores a value, stamping it with the current time
    pub async fn put(&self, value: T) {
        let mut entry = self.entry.write().await;
        *entry = Some(Cached {
            value,
            fetched_at: Utc::now(),
        });
    }

    /// Clears the slot
    pub async fn clear(&self) {
        let mut entry = self.entry.write().await;
        *entry = None;
    }
}

use crate::presentation::account::AccountOverview;
use crate::presentation::dividend::Dividend;
use crate::presentation::holding::Holding;
use crate::presentation::order::Order;

/// Per-operation result cache for the portfolio service
#[derive(Debug, Default)]
pub struct PortfolioCache {
    /// Last fetched holdings
    pub holdings: CacheSlot<Vec<Holding>>,
    /// Last fetched dividend history
    pub dividends: CacheSlot<Vec<Dividend>>,
    /// Last computed dividend total
    pub total_dividends: CacheSlot<f64>,
    /// Last fetched open orders
    pub open_orders: CacheSlot<Vec<Order>>,
    /// Last fetched full order history
    pub all_orders: CacheSlot<Vec<Order>>,
    /// Last fetched account overview
    pub account_overview: CacheSlot<AccountOverview>,
}

impl PortfolioCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every slot
    pub async fn clear_all(&self) {
        self.holdings.clear().await;
        self.dividends.clear().await;
        self.total_dividends.clear().await;
        self.open_orders.clear().await;
        self.all_orders.clear().await;
        self.account_overview.clear().await;
    }
}

pub mod interfaces;
pub mod portfolio_service;
pub mod types;

pub use interfaces::PortfolioService;
pub use portfolio_service::PortfolioServiceImpl;
pub use types::PortfolioSummary;

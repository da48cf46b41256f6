use portfolio_analyzer::config::Config;
use portfolio_analyzer::error::AppError;
use portfolio_analyzer::server::start_web_server;
use portfolio_analyzer::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Config::new();
    info!(
        "Starting portfolio API v{} on {}:{}",
        portfolio_analyzer::version(),
        config.server.host,
        config.server.port
    );

    start_web_server(config).await
}

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::{build_router, start_web_server};
pub use types::AppState;

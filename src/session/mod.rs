/// Authentication and session lifecycle management
pub mod auth;

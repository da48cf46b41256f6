/// Module containing environment configuration helpers
pub mod config;
/// Module containing financial formatting and calculation utilities
pub mod finance;
/// Module containing utilities for generating device tokens
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use finance::*;
pub use id::*;
pub use logger::*;

/// Account, user and portfolio profile models
pub mod account;
/// Dividend payment models
pub mod dividend;
/// Holding (position) models
pub mod holding;
/// Instrument models for symbol resolution
pub mod instrument;
/// Stock order models
pub mod order;
/// Serialization utilities for API responses
pub mod serialization;

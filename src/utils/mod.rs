// Shared utilities
pub mod config;
pub mod error;

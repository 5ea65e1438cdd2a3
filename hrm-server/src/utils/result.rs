//! Unified Result Types
//!
//! Provides type aliases for commonly used Result types across the application

pub use shared::error::AppResult;

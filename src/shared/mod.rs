//! Shared utilities and common functionality
//!
//! This module contains shared utilities, error handling, logging
//! and input validation that are used across the application.

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
pub use validation::ValidationUtils;

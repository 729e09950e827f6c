//! Use cases - Application operations

pub mod format_response;
pub mod health_check;

pub use format_response::FormatResponseUseCase;
pub use health_check::HealthCheckUseCase;

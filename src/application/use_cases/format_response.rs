use crate::{
    domain::format::{FormattedResult, ResponseFormatter},
    infrastructure::adapters::RpcTransport,
    shared::{error::AppResult, validation::ValidationUtils},
};
use serde_json::Value;
use tracing::info;

/// Single call use case: send one request and format what comes back
#[derive(Debug, Clone, Default)]
pub struct FormatResponseUseCase {
    formatter: ResponseFormatter,
}

impl FormatResponseUseCase {
    /// Create a use case with the built-in parsers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a use case with a caller-supplied registry
    pub fn with_formatter(formatter: ResponseFormatter) -> Self {
        Self { formatter }
    }

    /// Execute one call. Transport failures are returned as errors; protocol
    /// errors come back inside the raw response.
    pub async fn execute<T>(
        &self,
        transport: &T,
        rpc_url: &str,
        method: &str,
        params: Value,
    ) -> AppResult<FormattedResult>
    where
        T: RpcTransport + ?Sized,
    {
        ValidationUtils::validate_rpc_url(rpc_url)?;
        ValidationUtils::validate_method_name(method)?;

        let response = transport.send(rpc_url, method, params).await?;
        let formatted = self.formatter.format(response, method);

        info!(
            method = %method,
            formatted = formatted.formatted.is_some(),
            "RPC call completed"
        );

        Ok(formatted)
    }
}

use crate::domain::format::{FormattedResult, NOT_AVAILABLE};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health status enumeration
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All probes answered
    Healthy,
    /// At least one probe failed at the transport level
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Outcome of one endpoint health check. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Overall verdict
    pub status: HealthStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<FormattedResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<FormattedResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<FormattedResult>,

    /// Whether the node still serves the genesis block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archive_node: Option<bool>,

    /// Failure message of the probe that broke the check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// When the verdict was reached
    pub last_checked: DateTime<Utc>,
}

impl HealthRecord {
    /// Record for a check where every probe answered
    pub fn healthy(
        block_number: FormattedResult,
        chain_id: FormattedResult,
        gas_price: FormattedResult,
        is_archive_node: bool,
    ) -> Self {
        Self {
            status: HealthStatus::Healthy,
            block_number: Some(block_number),
            chain_id: Some(chain_id),
            gas_price: Some(gas_price),
            is_archive_node: Some(is_archive_node),
            error: None,
            last_checked: Utc::now(),
        }
    }

    /// Record for a check that failed
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            block_number: None,
            chain_id: None,
            gas_price: None,
            is_archive_node: None,
            error: Some(error.into()),
            last_checked: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }

    /// Operator-facing summary, one `label: value` line per fact
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Status: {}", self.status)];

        if self.is_healthy() {
            let decimal = |field: &Option<FormattedResult>| {
                field
                    .as_ref()
                    .and_then(FormattedResult::decimal)
                    .unwrap_or(NOT_AVAILABLE)
                    .to_string()
            };
            let gas_unit = self
                .gas_price
                .as_ref()
                .and_then(|g| g.formatted.as_ref())
                .and_then(|p| p.unit())
                .unwrap_or("wei");

            lines.push(format!("Chain ID: {}", decimal(&self.chain_id)));
            lines.push(format!("Block Number: {}", decimal(&self.block_number)));
            lines.push(format!("Gas Price: {} {}", decimal(&self.gas_price), gas_unit));
            lines.push(format!(
                "Archive Node: {}",
                if self.is_archive_node.unwrap_or(false) { "Yes" } else { "No" }
            ));
        } else if let Some(error) = &self.error {
            lines.push(format!("Error: {}", error));
        }

        lines.push(format!(
            "Last Checked: {}",
            self.last_checked
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        ));
        lines
    }
}

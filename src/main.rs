use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpc_inspector::{
    application::{FormatResponseUseCase, HealthCheckUseCase},
    config::AppConfig,
    domain::{find_preset, preset_methods, units::decimal_to_hex},
    infrastructure::{curl_command_now, ExternalRpcAdapter},
    shared::{LoggingUtils, ValidationUtils},
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rpc-inspector")]
#[command(about = "Inspect Ethereum-style JSON-RPC endpoints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Endpoint URL; overrides the configured one
    #[arg(short, long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one call and print the formatted result
    Call {
        /// JSON-RPC method, e.g. eth_getBalance
        method: String,

        /// Params as a JSON array; defaults to the preset params or []
        params: Option<String>,
    },

    /// Check endpoint health
    Health {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the equivalent curl command
    Curl {
        method: String,
        params: Option<String>,
    },

    /// Convert a decimal number to hex
    DecToHex { decimal: String },

    /// List the predefined methods
    Presets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .and_then(|config| config.with_overrides(cli.rpc_url, cli.timeout, cli.log_level))
        .context("Failed to load configuration")?;

    LoggingUtils::initialize(
        &config.logging.level,
        &config.logging.format,
        config.logging.structured,
    )?;

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let rpc_url = config.endpoint.rpc_url.clone();

    match cli.command {
        Commands::Call { method, params } => {
            let params = match params {
                Some(text) => ValidationUtils::parse_params(&text)?,
                None => find_preset(&method)
                    .and_then(|preset| preset.default_params)
                    .unwrap_or_else(|| serde_json::json!([])),
            };

            let adapter = ExternalRpcAdapter::new(&config)?;
            info!(rpc_url = %rpc_url, method = %method, "Sending request");

            let result = FormatResponseUseCase::new()
                .execute(&adapter, &rpc_url, &method, params)
                .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Health { json } => {
            let adapter = ExternalRpcAdapter::new(&config)?;
            let record = HealthCheckUseCase::new().execute(&adapter, &rpc_url).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                for line in record.summary_lines() {
                    println!("{}", line);
                }
            }
        }
        Commands::Curl { method, params } => {
            let params = params.unwrap_or_else(|| {
                find_preset(&method)
                    .and_then(|preset| preset.default_params)
                    .map(|p| p.to_string())
                    .unwrap_or_default()
            });
            println!("{}", curl_command_now(&rpc_url, &method, &params));
        }
        Commands::DecToHex { decimal } => match decimal_to_hex(&decimal) {
            Some(hex) => println!("{}", hex),
            None => anyhow::bail!("'{}' contains no decimal digits", decimal),
        },
        Commands::Presets => {
            for preset in preset_methods() {
                let params = preset
                    .default_params
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<28} {:<24} {}", preset.method, preset.label, params);
            }
        }
    }

    Ok(())
}

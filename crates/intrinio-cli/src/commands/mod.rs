mod data_point;
mod historical;

use std::time::Instant;

use intrinio_core::config::API_KEY_ENV;
use intrinio_core::{ClientConfig, ConfigError, IntrinioClient};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Envelope, Metadata};

/// Output of a single command before it is wrapped in an envelope.
pub struct CommandResult {
    pub data: Value,
    pub requests: u32,
}

impl CommandResult {
    pub fn ok(data: Value, requests: u32) -> Self {
        Self { data, requests }
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let client = IntrinioClient::new(build_config(cli)?);
    let started = Instant::now();

    let CommandResult { data, requests } = match &cli.command {
        Command::Number(args) => data_point::number(args, &client).await?,
        Command::Text(args) => data_point::text(args, &client).await?,
        Command::Historical(args) => historical::run(args, &client).await?,
    };

    let latency_ms = started.elapsed().as_millis() as u64;
    debug!(latency_ms, requests, "command completed");

    Ok(Envelope {
        meta: Metadata::new(latency_ms, requests),
        data,
    })
}

/// Flags win over environment; clap already folds `INTRINIO_*` into the flags.
fn build_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let api_key = cli
        .api_key
        .clone()
        .ok_or(ConfigError::MissingEnv { name: API_KEY_ENV })?;
    let mut config = ClientConfig::new(api_key)?;

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }

    if let Some(timeout_ms) = cli.timeout_ms {
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: timeout_ms.to_string(),
            }
            .into());
        }
        config = config.with_timeout_ms(timeout_ms);
    }

    Ok(config)
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::{debug, info};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use remindify::core::Config;
use remindify::{Dispatcher, HttpReminderClient};

/// Read the event from the path given as the first argument, or stdin
async fn read_event() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read event file {path}")),
        _ => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Remindify skill...");
    debug!(
        "Required permissions: {:?} | Time zone: {}",
        config.required_permissions, config.time_zone_id
    );

    let client = HttpReminderClient::new(config.api_timeout_secs)
        .context("Failed to build reminders API client")?;
    let dispatcher = Dispatcher::from_config(&config, Arc::new(client));

    let raw = read_event().await?;
    let response = dispatcher.dispatch_json(&raw).await;

    let body = response.to_json().context("Failed to encode response")?;
    let mut stdout = tokio::io::stdout();
    stdout.write_all(body.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}

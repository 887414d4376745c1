//! Certbot DNS-01 manual hook
//!
//! ```text
//! certbot certonly --manual --preferred-challenges dns \
//!     --manual-auth-hook "dns-challenge-hook --auth" \
//!     --manual-cleanup-hook "dns-challenge-hook --cleanup" \
//!     -d example.com
//! ```

mod app;
mod challenge;
mod cli;
mod config;
mod domain;
mod error;
mod interrupt;
mod service;
#[cfg(test)]
mod test_utils;

use std::process::ExitCode;

use clap::Parser;
use dns_challenge_provider::create_provider;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::HookError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout belongs to certbot; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> ExitCode {
    tokio::spawn(interrupt::log_interrupts(tokio::signal::ctrl_c));

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Configuration: {:?}", settings.main);

    let action = cli.action();
    tracing::info!("Running {action:?} hook");
    match app::run(
        action,
        &settings.main,
        |key| std::env::var(key).ok(),
        create_provider,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &HookError) {
    if err.is_expected() {
        tracing::warn!("{err}");
    } else {
        tracing::error!("{err}");
    }
}

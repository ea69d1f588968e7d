// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of loadbalancer-controller

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use lbc_config::runtime::{create_shutdown_cancellation_token, ControllerRuntime};
use lbc_config::{client, Configuration};
use lbc_toleration::TolerationRegistry;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod args;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = args::Args::parse();
    init_logging()?;

    info!("starting loadbalancer controller");

    let tolerations = Arc::new(TolerationRegistry::new());
    let client = client::connect(args.kubeconfig.as_deref())
        .await
        .context("unable to construct a kubernetes client")?;
    let config = Configuration::new(client, args.config, tolerations.clone())
        .context("unable to load configuration")?;

    info! {
        additional_tolerations = %config.additional_tolerations,
        default_http_backend = %config.proxies.default_http_backend,
        default_ssl_certificate = ?config.proxies.default_ssl_certificate_secret(),
        proxy_nginx = %config.proxies.nginx.image,
        provider_ipvsdr = %config.providers.ipvsdr.image,
        "configuration loaded"
    }

    let runtime = ControllerRuntime {
        config: Arc::new(config),
        tolerations,
        cancellation_token: create_shutdown_cancellation_token()
            .context("unable to install shutdown signal handlers")?,
    };

    info! {
        tolerations = ?runtime.tolerations.additional_keys(),
        "additional toleration keys registered"
    }

    runtime.cancellation_token.cancelled().await;
    info!("shutting down");

    Ok(())
}

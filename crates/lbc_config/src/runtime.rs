// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of loadbalancer-controller

use crate::error::Result;
use crate::Configuration;
use lbc_toleration::TolerationRegistry;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio::{select, spawn};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Common state for controller components. The configuration is frozen once this is constructed.
#[derive(Clone)]
pub struct ControllerRuntime {
    pub config: Arc<Configuration>,
    pub tolerations: Arc<TolerationRegistry>,
    pub cancellation_token: CancellationToken,
}

/// Returns a token that is cancelled on the first SIGTERM or SIGINT. Fails if either handler
/// cannot be installed.
pub fn create_shutdown_cancellation_token() -> Result<CancellationToken> {
    let mut terminate = signal(SignalKind::terminate())?;
    let mut interrupt = signal(SignalKind::interrupt())?;

    let cancellation_token = CancellationToken::new();
    let shutdown = cancellation_token.clone();
    spawn(async move {
        let received = select! {
            _ = terminate.recv() => "SIGTERM",
            _ = interrupt.recv() => "SIGINT",
        };
        info! {
            signal = received,
            "shutdown signal received"
        }
        shutdown.cancel();
    });
    Ok(cancellation_token)
}

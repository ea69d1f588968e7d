// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of loadbalancer-controller

pub mod client;
pub mod error;
pub mod flag;
pub mod providers;
pub mod proxies;
pub mod runtime;
#[cfg(test)]
mod testing;
pub mod tolerations;

use crate::error::Result;
use crate::flag::apply_occurrences;
use crate::providers::Providers;
use crate::proxies::Proxies;
use crate::tolerations::CumulativeStringList;
use clap::ArgAction;
use clap_derive::Args;
use kube::api::DynamicObject;
use kube::{Api, Client};
use lbc_toleration::AdditionalTolerationKeys;
use std::sync::Arc;

const ADDITIONAL_TOLERATIONS_FLAG: &str = "additional-tolerations";
const ADDITIONAL_TOLERATIONS_ENV: &str = "ADDITIONAL_TOLERATIONS";

/// Command line and environment configuration of the controller
#[derive(Args, Debug, Clone)]
#[group(skip)]
pub struct Config {
    /// A comma separated list of Kubernetes toleration keys. May be repeated, the values
    /// accumulate after the keys from the ADDITIONAL_TOLERATIONS environment variable
    #[arg(long, value_name = "TOLERATION_KEYS", action = ArgAction::Append)]
    pub additional_tolerations: Vec<String>,

    /// The value of ADDITIONAL_TOLERATIONS at parse time. Unlike scalar flags this is not
    /// overridden by the command line, both sources accumulate.
    #[arg(skip = std::env::var(ADDITIONAL_TOLERATIONS_ENV).ok())]
    pub additional_tolerations_env: Option<String>,

    #[command(flatten)]
    pub proxies: Proxies,

    #[command(flatten)]
    pub providers: Providers,
}

impl Config {
    /// Replays the environment value followed by every occurrence of `--additional-tolerations`
    /// in command line order, forwarding the accumulated keys to `registry`.
    pub fn additional_tolerations(
        &self,
        registry: Arc<dyn AdditionalTolerationKeys>,
    ) -> Result<CumulativeStringList> {
        let mut tolerations = CumulativeStringList::new(registry);
        apply_occurrences(
            ADDITIONAL_TOLERATIONS_FLAG,
            &mut tolerations,
            self.additional_tolerations_env
                .iter()
                .chain(&self.additional_tolerations),
        )?;
        Ok(tolerations)
    }
}

/// The global configuration of the controller. Constructed once during startup and shared
/// read-only afterwards.
pub struct Configuration {
    pub client: Client,
    /// Client for the LoadBalancer custom resource
    pub resource_client: Api<DynamicObject>,
    pub additional_tolerations: CumulativeStringList,
    pub proxies: Proxies,
    pub providers: Providers,
}

impl Configuration {
    pub fn new(
        client: Client,
        config: Config,
        registry: Arc<dyn AdditionalTolerationKeys>,
    ) -> Result<Self> {
        let additional_tolerations = config.additional_tolerations(registry)?;
        Ok(Self {
            resource_client: client::load_balancers(client.clone()),
            client,
            additional_tolerations,
            proxies: config.proxies,
            providers: config.providers,
        })
    }
}

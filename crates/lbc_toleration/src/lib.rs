// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of loadbalancer-controller

use k8s_openapi::api::core::v1::Toleration;
use std::fmt::Debug;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// The write side of the toleration registry. Implementors receive the complete set of additional
/// toleration keys every time it changes, not just the delta.
pub trait AdditionalTolerationKeys: Debug + Send + Sync {
    fn add_additional_toleration_keys(&self, keys: &[String]);
}

/// Holds the toleration keys that are added to the pods of every load balancer component on top of
/// the tolerations the components declare themselves.
#[derive(Debug, Default)]
pub struct TolerationRegistry {
    additional_keys: RwLock<Vec<String>>,
}

impl TolerationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The additional keys in the order they were first seen
    pub fn additional_keys(&self) -> Vec<String> {
        self.additional_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Renders the additional keys as pod tolerations. Each key tolerates every taint with that
    /// key regardless of its value or effect.
    pub fn tolerations(&self) -> Vec<Toleration> {
        self.additional_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|key| Toleration {
                key: Some(key.clone()),
                operator: Some("Exists".to_string()),
                ..Default::default()
            })
            .collect()
    }
}

impl AdditionalTolerationKeys for TolerationRegistry {
    fn add_additional_toleration_keys(&self, keys: &[String]) {
        let mut deduplicated: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if !deduplicated.contains(key) {
                deduplicated.push(key.clone());
            }
        }

        debug! {
            keys = ?deduplicated,
            "updating additional toleration keys"
        }
        *self
            .additional_keys
            .write()
            .unwrap_or_else(PoisonError::into_inner) = deduplicated;
    }
}

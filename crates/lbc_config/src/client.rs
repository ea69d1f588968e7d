use crate::error::Result;
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client};
use std::env;
use std::path::Path;
use tracing::info;

pub const LOAD_BALANCER_GROUP: &str = "net.alpha.caicloud.io";
pub const LOAD_BALANCER_VERSION: &str = "v1alpha1";
pub const LOAD_BALANCER_KIND: &str = "LoadBalancer";

/// Constructs a Kubernetes client from the given kubeconfig files. Without them, the client is
/// built from `KUBECONFIG`, the default kubeconfig file or the in-cluster configuration.
pub async fn connect(kubeconfig: Option<&Path>) -> Result<Client> {
    let client = match kubeconfig {
        Some(paths) => {
            info! {
                kubeconfig = %paths.display(),
                "loading kubeconfig"
            }
            let kubeconfig = read_kubeconfig(paths)?;
            let config =
                kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await?;
            Client::try_from(config)?
        }
        None => Client::try_default().await?,
    };
    Ok(client)
}

/// Reads a list of kubeconfig files separated like `PATH`. Earlier files take precedence when
/// merging, an empty list yields an empty kubeconfig.
pub fn read_kubeconfig(paths: &Path) -> Result<Kubeconfig> {
    let mut merged: Option<Kubeconfig> = None;
    for path in env::split_paths(paths.as_os_str()).filter(|path| !path.as_os_str().is_empty()) {
        let next = Kubeconfig::read_from(&path)?;
        merged = Some(match merged {
            Some(kubeconfig) => kubeconfig.merge(next)?,
            None => next,
        });
    }
    Ok(merged.unwrap_or_default())
}

pub fn load_balancer_resource() -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk(
        LOAD_BALANCER_GROUP,
        LOAD_BALANCER_VERSION,
        LOAD_BALANCER_KIND,
    ))
}

/// A cluster-wide client for the LoadBalancer custom resource
pub fn load_balancers(client: Client) -> Api<DynamicObject> {
    Api::all_with(client, &load_balancer_resource())
}

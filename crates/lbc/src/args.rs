use clap_derive::Parser;
use std::path::PathBuf;

/// A load balancer controller for Kubernetes
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// Kubeconfig files, separated like PATH. If omitted, KUBECONFIG, the default kubeconfig file
    /// or the in-cluster configuration is used
    #[arg(long, value_name = "PATHS")]
    pub kubeconfig: Option<PathBuf>,

    #[command(flatten, next_help_heading = "Controller configuration options")]
    pub config: lbc_config::Config,
}

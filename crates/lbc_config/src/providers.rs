use clap_derive::Args;

pub const DEFAULT_IPVSDR_IMAGE: &str =
    "cargo.caicloud.io/caicloud/loadbalancer-provider-ipvsdr:v0.1.0";

/// Provider configuration
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(skip)]
pub struct Providers {
    #[command(flatten)]
    pub ipvsdr: ProviderIpvsdr,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(skip)]
pub struct ProviderIpvsdr {
    /// Image of ipvsdr provider
    #[arg(
        id = "provider_ipvsdr",
        env = "PROVIDER_IPVS_DR",
        long = "provider-ipvsdr",
        value_name = "IMAGE",
        default_value = DEFAULT_IPVSDR_IMAGE
    )]
    pub image: String,
}

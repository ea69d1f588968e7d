use clap_derive::Args;

pub const DEFAULT_HTTP_BACKEND_IMAGE: &str =
    "cargo.caicloud.io/caicloud/default-http-backend:v0.1.0";
pub const DEFAULT_NGINX_INGRESS_IMAGE: &str =
    "cargo.caicloud.io/caicloud/nginx-ingress-controller:0.9.0-beta.10";

/// Proxy configuration
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(skip)]
pub struct Proxies {
    /// Default http backend image for ingress controller
    #[arg(env, long, value_name = "IMAGE", default_value = DEFAULT_HTTP_BACKEND_IMAGE)]
    pub default_http_backend: String,

    /// Name of the secret that contains a SSL certificate to be used as default for a HTTPS
    /// catch-all server
    #[arg(env, long, value_name = "CERTIFICATE", default_value = "")]
    pub default_ssl_certificate: String,

    #[command(flatten)]
    pub nginx: ProxyNginx,
}

impl Proxies {
    /// The default certificate secret, if one is configured
    pub fn default_ssl_certificate_secret(&self) -> Option<&str> {
        Some(self.default_ssl_certificate.as_str()).filter(|name| !name.is_empty())
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(skip)]
pub struct ProxyNginx {
    /// Image of nginx ingress controller
    #[arg(
        id = "proxy_nginx",
        env = "PROXY_NGINX",
        long = "proxy-nginx",
        value_name = "IMAGE",
        default_value = DEFAULT_NGINX_INGRESS_IMAGE
    )]
    pub image: String,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid value {value:?} for flag --{flag}")]
    InvalidFlagValue {
        flag: String,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("unable to load kubeconfig")]
    Kubeconfig(#[from] kube::config::KubeconfigError),
    #[error("kubernetes client error")]
    Kube(#[from] kube::Error),
    #[error("unable to listen for shutdown signals")]
    Signal(#[from] std::io::Error),
}

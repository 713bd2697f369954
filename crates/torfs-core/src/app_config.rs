use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration assembled from environment variables.
///
/// See [`crate::load_app_config_from_env`] for variable names and defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub public_dir: PathBuf,
    pub listing_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_products: usize,
}

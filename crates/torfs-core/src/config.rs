use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default browser-like User-Agent sent with listing requests. Torfs serves
/// the full listing markup to desktop browsers; generic bot agents get a
/// stripped page.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const DEFAULT_LISTING_URL: &str = "https://www.torfs.be/nl/schoenen";

/// Load application configuration from environment variables already in the
/// process. Callers that want `.env` support run `dotenvy::dotenv()` first.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
///
/// Recognized variables (all optional):
/// - `PORT`: listening port, default `3000`.
/// - `TORFS_BIND_ADDR`: full socket address; overrides `PORT` when set.
/// - `TORFS_LOG_LEVEL`: default `info`.
/// - `TORFS_PUBLIC_DIR`: static front-end directory, default `./public`.
/// - `TORFS_LISTING_URL`: listing page to scrape.
/// - `TORFS_REQUEST_TIMEOUT_SECS`: outbound fetch timeout, default `15`.
/// - `TORFS_USER_AGENT`: outbound User-Agent header.
/// - `TORFS_MAX_PRODUCTS`: global result cap, default `50`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u16 = |var: &str, default: &str| -> Result<u16, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let port = parse_u16("PORT", "3000")?;
    let bind_addr = match lookup("TORFS_BIND_ADDR") {
        Ok(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "TORFS_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?,
        Err(_) => SocketAddr::from(([0, 0, 0, 0], port)),
    };

    let log_level = or_default("TORFS_LOG_LEVEL", "info");
    let public_dir = PathBuf::from(or_default("TORFS_PUBLIC_DIR", "./public"));
    let listing_url = or_default("TORFS_LISTING_URL", DEFAULT_LISTING_URL);
    let request_timeout_secs = parse_u64("TORFS_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("TORFS_USER_AGENT", DEFAULT_USER_AGENT);
    let max_products = parse_usize("TORFS_MAX_PRODUCTS", "50")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        public_dir,
        listing_url,
        request_timeout_secs,
        user_agent,
        max_products,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.listing_url, "https://www.torfs.be/nl/schoenen");
        assert_eq!(cfg.request_timeout_secs, 15);
        assert_eq!(cfg.max_products, 50);
        assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn build_app_config_port_overrides_default() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PORT", "8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn build_app_config_bind_addr_wins_over_port() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PORT", "8080");
        map.insert("TORFS_BIND_ADDR", "127.0.0.1:9999");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn build_app_config_rejects_invalid_port() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PORT", "not-a-port");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORT"),
            "expected InvalidEnvVar(PORT), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TORFS_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TORFS_BIND_ADDR"),
            "expected InvalidEnvVar(TORFS_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TORFS_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TORFS_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TORFS_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_listing_url_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TORFS_LISTING_URL", "http://localhost:8081/fixture");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.listing_url, "http://localhost:8081/fixture");
    }

    #[test]
    fn build_app_config_max_products_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TORFS_MAX_PRODUCTS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_products, 10);
    }
}

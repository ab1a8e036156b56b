use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use vitrine_models::CollectionKey;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub cookies: CookieConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Public URL of this front-end (e.g., https://market.example.com).
    /// Used when composing absolute pagination hrefs.
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".into(),
            public_url: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BackendConfig {
    /// GraphQL endpoint of the marketplace backend.
    pub graphql_url: String,
    #[serde(default = "default_backend_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_backend_retries")]
    pub max_retries: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:4000/graphql".into(),
            timeout_seconds: default_backend_timeout(),
            max_retries: default_backend_retries(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Page sizes offered in listing view-models.
    #[serde(default = "default_limit_choices")]
    pub limits: Vec<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            limits: default_limit_choices(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HomeConfig {
    /// Collections pinned to the home grid, each as "chainId-address",
    /// in display order.
    #[serde(default)]
    pub collections: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Idle TTL for load-more listing sessions.
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_session_ttl(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Mark the last-seen-notification cookie Secure. Disable only for
    /// plain-HTTP development setups.
    #[serde(default = "default_true")]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: default_true(),
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn default_backend_timeout() -> u64 {
    15
}
fn default_backend_retries() -> u32 {
    3
}
fn default_limit() -> u32 {
    12
}
fn default_limit_choices() -> Vec<u32> {
    vec![12, 24, 36, 48]
}
fn default_session_ttl() -> u64 {
    1800
}
fn default_true() -> bool {
    true
}

/// Generate a commented config file template with the given values filled in.
fn generate_config_template(config: &Config) -> String {
    format!(
        r#"# Vitrine Front-End Configuration
# Generated automatically on first run. Edit as needed.

[server]
bind_address = "{bind_address}"
# Set explicitly for internet-facing deployments:
# public_url = "https://market.example.com"

[backend]
# GraphQL endpoint of the marketplace backend.
graphql_url = "{graphql_url}"
timeout_seconds = {timeout_seconds}
max_retries = {max_retries}

[pagination]
default_limit = {default_limit}
limits = {limits:?}

[home]
# Collections pinned to the home grid, "chainId-address" each, in
# display order.
# collections = ["1-0x1234...", "137-0xabcd..."]
collections = []

[session]
# Idle TTL for load-more listing sessions.
ttl_seconds = {ttl_seconds}

[cookies]
secure = {cookie_secure}
"#,
        bind_address = config.server.bind_address,
        graphql_url = config.backend.graphql_url,
        timeout_seconds = config.backend.timeout_seconds,
        max_retries = config.backend.max_retries,
        default_limit = config.pagination.default_limit,
        limits = config.pagination.limits,
        ttl_seconds = config.session.ttl_seconds,
        cookie_secure = config.cookies.secure,
    )
}

fn validate_configuration(config: &Config) -> Result<()> {
    if config.pagination.default_limit == 0 {
        anyhow::bail!("Invalid pagination.default_limit: must be greater than zero");
    }
    if config.pagination.limits.is_empty() || config.pagination.limits.contains(&0) {
        anyhow::bail!("Invalid pagination.limits: must be a non-empty list of positive sizes");
    }
    let url = config.backend.graphql_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("Invalid backend.graphql_url: expected an http(s) URL, got '{url}'");
    }
    // A malformed key here would silently produce an empty filter clause
    // downstream; refuse to start instead.
    for raw in &config.home.collections {
        raw.parse::<CollectionKey>().map_err(|e| {
            anyhow::anyhow!("Invalid home.collections entry '{raw}': {e}")
        })?;
    }
    Ok(())
}

// ── Config Loading ───────────────────────────────────────────────────────────

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if std::path::Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            tracing::info!(
                "Config file not found at '{}', generating defaults...",
                path
            );
            let config = Config::default();

            if let Some(parent) = std::path::Path::new(path).parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(path, generate_config_template(&config))?;
            tracing::info!("Generated default config at '{}'", path);
            config
        };

        // Environment variable overrides
        if let Ok(value) = std::env::var("VITRINE_BIND_ADDRESS") {
            config.server.bind_address = value;
        }
        if let Ok(value) = std::env::var("VITRINE_PUBLIC_URL") {
            config.server.public_url = if value.trim().is_empty() {
                None
            } else {
                Some(value)
            };
        }
        if let Ok(value) = std::env::var("VITRINE_BACKEND_URL") {
            config.backend.graphql_url = value;
        }
        if let Ok(value) = std::env::var("VITRINE_BACKEND_TIMEOUT_SECONDS") {
            if let Ok(parsed) = value.parse::<u64>() {
                config.backend.timeout_seconds = parsed.max(1);
            }
        }
        if let Ok(value) = std::env::var("VITRINE_BACKEND_MAX_RETRIES") {
            if let Ok(parsed) = value.parse::<u32>() {
                config.backend.max_retries = parsed.min(10);
            }
        }
        if let Ok(value) = std::env::var("VITRINE_PAGINATION_DEFAULT_LIMIT") {
            if let Ok(parsed) = value.parse::<u32>() {
                config.pagination.default_limit = parsed;
            }
        }
        if let Ok(value) = std::env::var("VITRINE_PAGINATION_LIMITS") {
            let parsed: Vec<u32> = value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .filter_map(|entry| entry.parse().ok())
                .collect();
            if !parsed.is_empty() {
                config.pagination.limits = parsed;
            }
        }
        if let Ok(value) = std::env::var("VITRINE_HOME_COLLECTIONS") {
            config.home.collections = value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Ok(value) = std::env::var("VITRINE_SESSION_TTL_SECONDS") {
            if let Ok(parsed) = value.parse::<u64>() {
                config.session.ttl_seconds = parsed.max(60);
            }
        }
        if let Ok(value) = std::env::var("VITRINE_COOKIE_SECURE") {
            if let Ok(parsed) = value.parse::<bool>() {
                config.cookies.secure = parsed;
            }
        }

        validate_configuration(&config)?;
        Ok(config)
    }

    /// Parsed home grid keys, in configured display order.
    pub fn home_collection_keys(&self) -> Result<Vec<CollectionKey>> {
        self.home
            .collections
            .iter()
            .map(|raw| {
                raw.parse::<CollectionKey>().map_err(|e| {
                    anyhow::anyhow!("Invalid home.collections entry '{raw}': {e}")
                })
            })
            .collect()
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default service endpoint (the public deployment).
pub const DEFAULT_ENDPOINT: &str =
    "http://ec2-18-118-197-30.us-east-2.compute.amazonaws.com:8000/";

/// Client configuration loaded from `~/.config/bccr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BccrConfig {
    /// Randomizer service endpoint URL.
    pub endpoint: String,
}

impl Default for BccrConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bccr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The endpoint must be an absolute http/https URL.
pub fn load_or_init() -> Result<BccrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BccrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BccrConfig = toml::from_str(&data)?;
    validate_endpoint(&cfg.endpoint)
        .with_context(|| format!("invalid endpoint in {}", path.display()))?;
    Ok(cfg)
}

/// Rejects endpoints curl would refuse or silently misroute.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = url::Url::parse(endpoint).context("endpoint is not an absolute URL")?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported endpoint scheme: {}", other),
    }
}

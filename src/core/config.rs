//! Configuration - Environment settings and the wedding configuration document

use crate::entities::WeddingConfig;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Sample wedding document shipped with the binary
const EMBEDDED_WEDDING_CONFIG: &str = include_str!("../../config/wedding.json");

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
    /// Wedding document to load instead of the embedded sample
    pub wedding_config_path: Option<PathBuf>,
    pub public_dir: PathBuf,
    pub invitation_pdf_path: PathBuf,
    pub invitation_filename: String,
    /// Directory holding the `{storageKey}.json` cache file
    pub cache_dir: PathBuf,
    pub remote_timeout: Duration,
    /// Delay of the re-fetch scheduled after a submission, `None` disables it
    pub refresh_delay: Option<Duration>,
    pub simulated_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            app_env: "development".to_string(),
            wedding_config_path: None,
            public_dir: PathBuf::from("public"),
            invitation_pdf_path: PathBuf::from("public/invitation.pdf"),
            invitation_filename: "Sarah-Michael-Wedding-Invitation.pdf".to_string(),
            cache_dir: PathBuf::from("data"),
            remote_timeout: Duration::from_secs(10),
            refresh_delay: Some(Duration::from_secs(5)),
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Loads the configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        let defaults = Self::default();

        let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or(defaults.app_env);

        let wedding_config_path = env::var("WEDDING_CONFIG_PATH").ok().map(PathBuf::from);

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        let invitation_pdf_path = env::var("INVITATION_PDF_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| public_dir.join("invitation.pdf"));

        let invitation_filename =
            env::var("INVITATION_FILENAME").unwrap_or(defaults.invitation_filename);

        let cache_dir = env::var("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_dir);

        let remote_timeout_secs = env::var("REMOTE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid REMOTE_TIMEOUT_SECS: must be a positive number".to_string())?;

        let refresh_delay_secs = env::var("REFRESH_DELAY_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid REFRESH_DELAY_SECS: must be a positive number".to_string())?;

        let simulated_latency_ms = env::var("SIMULATED_LATENCY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid SIMULATED_LATENCY_MS: must be a positive number".to_string())?;

        Ok(Config {
            server_host,
            server_port,
            app_env,
            wedding_config_path,
            public_dir,
            invitation_pdf_path,
            invitation_filename,
            cache_dir,
            remote_timeout: Duration::from_secs(remote_timeout_secs),
            refresh_delay: (refresh_delay_secs > 0).then(|| Duration::from_secs(refresh_delay_secs)),
            simulated_latency: Duration::from_millis(simulated_latency_ms),
        })
    }

    /// Logs the effective configuration
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!(
            "   Wedding Config: {}",
            self.wedding_config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded sample".to_string())
        );
        info!("   Public Dir: {}", self.public_dir.display());
        info!("   Invitation PDF: {}", self.invitation_pdf_path.display());
        info!("   Cache Dir: {}", self.cache_dir.display());
        info!("   Remote Timeout: {}s", self.remote_timeout.as_secs());
        match self.refresh_delay {
            Some(delay) => info!("   Refresh After Submit: {}s", delay.as_secs()),
            None => warn!("   Refresh After Submit: disabled"),
        }
    }

    /// Reads the wedding document from `wedding_config_path`, or the embedded sample
    pub fn load_wedding_config(&self) -> Result<WeddingConfig, String> {
        let raw = match &self.wedding_config_path {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?,
            None => EMBEDDED_WEDDING_CONFIG.to_string(),
        };
        parse_wedding_config(&raw)
    }
}

pub fn parse_wedding_config(raw: &str) -> Result<WeddingConfig, String> {
    let config: WeddingConfig =
        serde_json::from_str(raw).map_err(|e| format!("Invalid wedding config: {}", e))?;

    if config.rsvp_config.max_guest_count == 0 {
        return Err("Invalid wedding config: maxGuestCount must be at least 1".to_string());
    }
    if config.rsvp_config.storage_key.trim().is_empty() {
        return Err("Invalid wedding config: storageKey must not be empty".to_string());
    }

    Ok(config)
}

/// The embedded sample document, parsed
pub fn sample_wedding_config() -> Result<WeddingConfig, String> {
    parse_wedding_config(EMBEDDED_WEDDING_CONFIG)
}

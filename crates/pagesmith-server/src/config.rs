//! Environment-driven server configuration

use std::net::SocketAddr;

use pagesmith::error::{Error, Result};

/// Listen address, `127.0.0.1:8080` by default.
pub const ADDR_ENV: &str = "PAGESMITH_ADDR";
/// Gemini model identifier, `gemini-1.5-pro` by default.
pub const MODEL_ENV: &str = "PAGESMITH_MODEL";
/// Sampling temperature, `0.2` by default.
pub const TEMPERATURE_ENV: &str = "PAGESMITH_TEMPERATURE";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Server settings, read once at startup.
///
/// The Gemini API key is not part of this struct; the client reads
/// `GEMINI_API_KEY` itself and an absent key only fails at the first
/// generation call.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,
    /// Model identifier passed to the Gemini client
    pub model: String,
    /// Sampling temperature for generation
    pub temperature: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

fn default_addr() -> SocketAddr {
    // The literal is valid; keep the fallback total anyway.
    DEFAULT_ADDR
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
}

impl ServerConfig {
    /// Load settings from the environment, falling back to defaults.
    ///
    /// A variable that is set but unparseable is a configuration error,
    /// not a silent fallback.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var(ADDR_ENV) {
            config.addr = addr
                .parse()
                .map_err(|e| Error::config(format!("invalid {ADDR_ENV} {addr:?}: {e}")))?;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        if let Ok(temperature) = std::env::var(TEMPERATURE_ENV) {
            config.temperature = temperature.parse().map_err(|e| {
                Error::config(format!("invalid {TEMPERATURE_ENV} {temperature:?}: {e}"))
            })?;
        }

        Ok(config)
    }
}

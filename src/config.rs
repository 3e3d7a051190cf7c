use crate::error::{AppError, Result};
use tracing::Level;

pub const DEFAULT_ENDPOINT_PATH: &str = "/recommend";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub endpoint_path: String,
    pub log_level: Level,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            log_level: Level::INFO,
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.api_base, self.endpoint_path)
    }

    /// Requests go to the origin that served the page.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        let origin = web_sys::window()
            .ok_or_else(|| AppError::Config("no window available".to_string()))?
            .location()
            .origin()
            .map_err(|_| AppError::Config("page origin is unavailable".to_string()))?;
        Ok(Self::new(origin))
    }

    /// Native builds have no page origin, so the service address and log
    /// level come from `SONGREC_API_URL` and `SONGREC_LOG`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let api_base =
            std::env::var("SONGREC_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let mut config = Self::new(api_base);
        if let Ok(level) = std::env::var("SONGREC_LOG") {
            config.log_level = parse_level(&level)?;
        }
        Ok(config)
    }
}

pub fn parse_level(value: &str) -> Result<Level> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|e| AppError::Config(format!("log level `{}`: {e}", value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("http://localhost:5000//");
        assert_eq!(config.endpoint_url(), "http://localhost:5000/recommend");
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }
}

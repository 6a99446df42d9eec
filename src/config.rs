use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5001;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub max_suggestions: usize,
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            gemini: GeminiConfig::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the environment. Missing or malformed values fall
    /// back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs: u64 = parse_var("GEMINI_TIMEOUT_SECS", DEFAULT_GEMINI_TIMEOUT_SECS);

        Self {
            host: non_empty_var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port),
            gemini: GeminiConfig {
                api_key: non_empty_var("GEMINI_API_KEY"),
                model: non_empty_var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                endpoint: non_empty_var("GEMINI_ENDPOINT").unwrap_or(defaults.gemini.endpoint),
                timeout: Duration::from_secs(timeout_secs.max(1)),
            },
            max_suggestions: parse_var("MAX_SUGGESTIONS", defaults.max_suggestions).max(1),
            catalog_path: non_empty_var("CATALOG_PATH").map(PathBuf::from),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match non_empty_var(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

use crate::cli_args::Cli;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default primary model for the final generation step.
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Default lite model for per-chunk summaries.
const DEFAULT_LITE_MODEL: &str = "gemini-2.0-flash-lite";
/// Default maximum chunk size in characters.
const DEFAULT_MAX_CHUNK_SIZE: usize = 3000;

/// Final resolved configuration for commitchef.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
    pub lite_model: String,
    pub max_chunk_size: usize,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--lite-model`, `--api-key`)
    ///   2. Env vars `COMMITCHEF_MODEL`, `COMMITCHEF_LITE_MODEL`, `GEMINI_API_KEY`
    ///   3. TOML `~/.config/commitchef.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("COMMITCHEF_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let lite_model = cli
            .lite_model
            .clone()
            .or_else(|| env::var("COMMITCHEF_LITE_MODEL").ok())
            .or(file_cfg.lite_model)
            .unwrap_or_else(|| DEFAULT_LITE_MODEL.to_string());

        let gemini_api_key = cli
            .api_key
            .clone()
            .or_else(|| env::var("GEMINI_API_KEY").ok())
            .or(file_cfg.gemini_api_key)
            .ok_or_else(|| {
                anyhow!("GEMINI_API_KEY must be set via env var, --api-key, or ~/.config/commitchef.toml")
            })?;

        let max_chunk_size = file_cfg.max_chunk_size.unwrap_or(DEFAULT_MAX_CHUNK_SIZE);

        Ok(Config {
            gemini_api_key,
            model,
            lite_model,
            max_chunk_size,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub lite_model: Option<String>,
    pub gemini_api_key: Option<String>,
    pub max_chunk_size: Option<usize>,
}

/// Return `~/.config/commitchef.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitchef.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_parses_partial_toml() {
        let cfg: FileConfig = toml::from_str("model = \"gemini-2.5-pro\"").unwrap();
        assert_eq!(cfg.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(cfg.lite_model.is_none());
        assert!(cfg.gemini_api_key.is_none());
        assert!(cfg.max_chunk_size.is_none());
    }

    #[test]
    fn file_config_parses_all_fields() {
        let cfg: FileConfig = toml::from_str(
            "model = \"a\"\nlite_model = \"b\"\ngemini_api_key = \"k\"\nmax_chunk_size = 1234",
        )
        .unwrap();
        assert_eq!(cfg.model.as_deref(), Some("a"));
        assert_eq!(cfg.lite_model.as_deref(), Some("b"));
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("k"));
        assert_eq!(cfg.max_chunk_size, Some(1234));
    }
}

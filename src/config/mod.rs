use crate::utils::error::{CacheError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::{Parser, ValueEnum};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What the model builder does when a cache artifact is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingArtifactPolicy {
    /// The dependent portion of the model stays empty
    #[default]
    Skip,
    /// The build fails with a not-found error
    Fail,
}

/// What the refresher does when one leaderboard's fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FetchFailurePolicy {
    /// The first failure aborts the whole refresh
    #[default]
    FailFast,
    /// Failures are recorded and the remaining leaderboards still refresh
    Continue,
}

/// Runtime settings, from flags or a TOML file.
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "scorecache")]
#[command(about = "Refreshes a game's leaderboard cache and prints the assembled model")]
pub struct Config {
    /// TOML file to load settings from; replaces the other flags
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Game identifier assigned by the scoring service
    #[arg(long, default_value = "")]
    #[serde(default)]
    pub game_id: String,

    /// Opaque query suffix appended verbatim to every remote URL
    #[arg(long, default_value = "")]
    #[serde(default)]
    pub auth_url_suffix: String,

    /// Base URL of the scoring service
    #[arg(long, default_value = "http://api.openfeint.com/api")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding the cached documents
    #[arg(long, default_value = "./cache")]
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Seconds a cached document stays fresh
    #[arg(long, default_value_t = 900)]
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,

    /// Seconds before a remote fetch times out
    #[arg(long, default_value_t = 10)]
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,

    /// Extra fetch attempts after a failure
    #[arg(long, default_value_t = 0)]
    #[serde(default)]
    pub fetch_retries: u32,

    /// Behavior when an artifact is missing during model build
    #[arg(long, value_enum, default_value = "skip")]
    #[serde(default)]
    pub on_missing_artifact: MissingArtifactPolicy,

    /// Behavior when one leaderboard's fetch fails during refresh
    #[arg(long, value_enum, default_value = "fail-fast")]
    #[serde(default)]
    pub on_fetch_failure: FetchFailurePolicy,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,
}

fn default_base_url() -> String {
    "http://api.openfeint.com/api".to_string()
}

fn default_cache_dir() -> String {
    "./cache".to_string()
}

fn default_cache_ttl() -> u64 {
    900
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| CacheError::Config {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

/// Replace `${VAR}` references with environment values; unknown
/// variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("game_id", &self.game_id)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("cache_dir", &self.cache_dir)?;
        // auth_url_suffix is deliberately unchecked: it is opaque
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
game_id = "9000"
auth_url_suffix = "?client_key=abc"
base_url = "https://api.example.com"
cache_dir = "./cache-test"
cache_ttl_seconds = 60
on_fetch_failure = "continue"
on_missing_artifact = "fail"
"#;

        let config = Config::from_toml_str(toml_content).unwrap();

        assert_eq!(config.game_id, "9000");
        assert_eq!(config.auth_url_suffix, "?client_key=abc");
        assert_eq!(config.cache_ttl_seconds, 60);
        assert_eq!(config.on_fetch_failure, FetchFailurePolicy::Continue);
        assert_eq!(config.on_missing_artifact, MissingArtifactPolicy::Fail);
        assert_eq!(config.fetch_retries, 0);
    }

    #[test]
    fn test_defaults_fill_omitted_fields() {
        let config = Config::from_toml_str("game_id = \"9000\"").unwrap();

        assert_eq!(config.base_url, "http://api.openfeint.com/api");
        assert_eq!(config.cache_dir, "./cache");
        assert_eq!(config.cache_ttl_seconds, 900);
        assert_eq!(config.ttl(), Duration::from_secs(900));
        assert_eq!(config.on_fetch_failure, FetchFailurePolicy::FailFast);
        assert_eq!(config.on_missing_artifact, MissingArtifactPolicy::Skip);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_GAME_ID", "424242");

        let config = Config::from_toml_str("game_id = \"${TEST_GAME_ID}\"").unwrap();
        assert_eq!(config.game_id, "424242");

        std::env::remove_var("TEST_GAME_ID");
    }

    #[test]
    fn test_unknown_env_var_left_as_written() {
        let config =
            Config::from_toml_str("game_id = \"${SCORECACHE_UNSET_VAR}\"").unwrap();
        assert_eq!(config.game_id, "${SCORECACHE_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_empty_game_id() {
        let config = Config::from_toml_str("base_url = \"https://api.example.com\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = Config::from_toml_str(
            "game_id = \"9000\"\nbase_url = \"not-a-url\"",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_auth_suffix_is_never_validated() {
        let config = Config::from_toml_str(
            "game_id = \"9000\"\nauth_url_suffix = \"anything at all, even spaces\"",
        )
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"game_id = \"9000\"\ncache_ttl_seconds = 120\n")
            .unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(config.game_id, "9000");
        assert_eq!(config.cache_ttl_seconds, 120);
    }
}

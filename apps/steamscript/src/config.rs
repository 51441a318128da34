//! Environment-sourced configuration.
//!
//! Every setting is an environment variable:
//!
//! | Variable           | Required | Meaning                                      |
//! |--------------------|----------|----------------------------------------------|
//! | `STEAM_API_KEY`    | yes      | Steam Web API key                            |
//! | `STEAM_PROFILE_ID` | yes      | 64-bit Steam ID or vanity profile name       |
//! | `SKIP_GAMES`       | no       | comma-separated ids/names to exclude         |
//! | `GAMES_WHITELIST`  | no       | comma-separated ids/names; when set, the only titles kept |
//! | `FORCE_VALIDATE`   | no       | presence appends ` -validate` to commands    |
//! | `OUTPUT_FILE`      | no       | write the script here instead of stdout      |

use std::path::PathBuf;

use steamscript_manifest::SelectionFilter;

/// A mandatory setting is absent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "The STEAM_API_KEY environment variable should contain your Steam API key.\nSee: https://steamcommunity.com/dev/apikey"
    )]
    MissingApiKey,

    #[error("The STEAM_PROFILE_ID environment variable is required.")]
    MissingProfileId,
}

/// Run configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub profile_id: String,
    pub skip_games: Vec<String>,
    pub whitelist: Vec<String>,
    pub force_validate: bool,
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds configuration from a variable lookup.
    ///
    /// A variable set to the empty string counts as unset, for mandatory
    /// and optional settings alike. `FORCE_VALIDATE` is presence-based:
    /// any non-empty value enables it.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = get("STEAM_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let profile_id = get("STEAM_PROFILE_ID").ok_or(ConfigError::MissingProfileId)?;

        let skip_games = SelectionFilter::parse_list(get("SKIP_GAMES").as_deref().unwrap_or(""));
        let whitelist =
            SelectionFilter::parse_list(get("GAMES_WHITELIST").as_deref().unwrap_or(""));

        Ok(Self {
            api_key,
            profile_id,
            skip_games,
            whitelist,
            force_validate: get("FORCE_VALIDATE").is_some(),
            output_file: get("OUTPUT_FILE").map(PathBuf::from),
        })
    }
}

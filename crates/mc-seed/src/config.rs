//! Seeder configuration resolved from the environment.

use std::fmt;

use reqwest::Url;

use crate::error::{Result, SeedError};

/// Supabase project used when `SUPABASE_URL` is not set.
pub const DEFAULT_SUPABASE_URL: &str = "https://lvhxabadywdqeepymwdm.supabase.co";

/// Environment variable holding the endpoint base URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the API key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// REST path of the target table, relative to the base URL.
pub const TABLE_PATH: &str = "rest/v1/mc_suggestions";

/// Fallback values for unset environment variables.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Defaults {
    /// Defaults compiled into the binary.
    ///
    /// The key is only present when `MC_SEED_SUPABASE_KEY` was set at build time.
    pub fn builtin() -> Self {
        Self {
            base_url: DEFAULT_SUPABASE_URL.to_string(),
            api_key: option_env!("MC_SEED_SUPABASE_KEY").map(str::to_string),
        }
    }
}

/// Resolved seeder configuration.
#[derive(Clone)]
pub struct SeedConfig {
    base_url: Url,
    api_key: String,
}

impl SeedConfig {
    /// Create a configuration from explicit values.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SeedError::Config("API key is empty".to_string()));
        }

        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key,
        })
    }

    /// Resolve from the process environment with the built-in defaults.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok(), &Defaults::builtin())
    }

    /// Resolve using `lookup` for variables and `defaults` for anything unset.
    ///
    /// Empty variables count as unset.
    pub fn resolve<F>(lookup: F, defaults: &Defaults) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = var(URL_VAR).unwrap_or_else(|| defaults.base_url.clone());
        let api_key = var(KEY_VAR)
            .or_else(|| defaults.api_key.clone())
            .ok_or_else(|| {
                SeedError::Config(format!(
                    "{KEY_VAR} environment variable not set and no key was provided at build time"
                ))
            })?;

        Self::new(&base_url, api_key)
    }

    /// The endpoint base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The API key, sent both as `apikey` and as the bearer token.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the `mc_suggestions` table endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            TABLE_PATH
        )
    }

    /// The key with all but its first few characters masked.
    pub fn redacted_key(&self) -> String {
        let visible: String = self.api_key.chars().take(6).collect();
        format!("{visible}…")
    }
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.redacted_key())
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| SeedError::Config(format!("Invalid {URL_VAR} '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(SeedError::Config(format!(
                "Invalid {URL_VAR} '{raw}': scheme must be http or https, got '{other}'"
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(SeedError::Config(format!(
            "Invalid {URL_VAR} '{raw}': missing host"
        )));
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(SeedError::Config(format!(
            "Invalid {URL_VAR} '{raw}': expected an origin like https://<project>.supabase.co \
             without path, query or fragment"
        )));
    }

    Ok(url)
}

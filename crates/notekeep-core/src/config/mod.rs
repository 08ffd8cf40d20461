//! Client configuration.
//!
//! Values come from the process environment (after the desktop shell loads
//! `.env`) and fall back to the defaults below when unset or blank.

use chrono::format::{Item, StrftimeItems};

use crate::error::{Error, Result};
use crate::util::{normalize_http_url, normalize_text_option};

pub const API_BASE_URL_VAR: &str = "NOTEKEEP_API_BASE_URL";
pub const SHARE_ORIGIN_VAR: &str = "NOTEKEEP_SHARE_ORIGIN";
pub const DATE_FORMAT_VAR: &str = "NOTEKEEP_DATE_FORMAT";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081/api";
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:3000";
/// en-US short date, e.g. `3/5/2024`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Runtime configuration for the note client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Note store base URL (host, port and path prefix), no trailing slash
    pub api_base_url: String,
    /// Origin that share links are built against, no trailing slash
    pub share_origin: String,
    /// chrono format string for note card dates
    pub date_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            normalize_text_option(lookup(key)).unwrap_or_else(|| default.to_string())
        };

        let api_base_url = normalize_http_url(
            &read(API_BASE_URL_VAR, DEFAULT_API_BASE_URL),
            API_BASE_URL_VAR,
        )?;
        let share_origin = normalize_http_url(
            &read(SHARE_ORIGIN_VAR, DEFAULT_SHARE_ORIGIN),
            SHARE_ORIGIN_VAR,
        )?;
        let date_format = read(DATE_FORMAT_VAR, DEFAULT_DATE_FORMAT);
        validate_date_format(&date_format)?;

        Ok(Self {
            api_base_url,
            share_origin,
            date_format,
        })
    }
}

/// Reject format strings chrono would fail to render
fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::Config(format!(
            "{DATE_FORMAT_VAR} is not a valid date format: {format}"
        )));
    }
    Ok(())
}

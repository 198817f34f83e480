use crate::adapters::algolia::DEFAULT_BASE_URL;
use crate::core::paging::DEFAULT_MAX_VISIBLE;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_hits_per_page() -> usize {
    20
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_store_path() -> String {
    "./.hn-scout".to_string()
}

fn default_reading_list_capacity() -> usize {
    100
}

/// Application settings, optionally loaded from a TOML file. Every field has
/// a default so a missing file or a partial file both work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: usize,

    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Directory holding the reading-list file.
    #[serde(default = "default_store_path")]
    pub store_path: String,

    #[serde(default = "default_reading_list_capacity")]
    pub reading_list_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            hits_per_page: default_hits_per_page(),
            max_visible_pages: default_max_visible_pages(),
            store_path: default_store_path(),
            reading_list_capacity: default_reading_list_capacity(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&raw)?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number("hits_per_page", self.hits_per_page, 1)?;
        validate_positive_number("max_visible_pages", self.max_visible_pages, 1)?;
        validate_path("store_path", &self.store_path)?;
        validate_positive_number("reading_list_capacity", self.reading_list_capacity, 1)?;
        Ok(())
    }
}

impl SettingsProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn hits_per_page(&self) -> usize {
        self.hits_per_page
    }

    fn max_visible_pages(&self) -> usize {
        self.max_visible_pages
    }

    fn reading_list_capacity(&self) -> usize {
        self.reading_list_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.hits_per_page, 20);
        assert_eq!(settings.max_visible_pages, 5);
        assert_eq!(settings.reading_list_capacity, 100);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str("hits_per_page = 50").unwrap();
        assert_eq!(settings.hits_per_page, 50);
        assert_eq!(settings.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut settings = Settings::default();
        settings.hits_per_page = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.api_base_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn load_without_a_path_uses_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.hits_per_page, 20);
    }
}

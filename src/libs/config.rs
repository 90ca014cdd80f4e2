//! Configuration management for taskmate.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file is not an error: the defaults point at
//! the public quote proxy and keep the database next to the config file.
//!
//! ## Configuration Structure
//!
//! - **Quote API**: endpoint, response field mapping and request timeout
//! - **Database**: optional explicit path of the SQLite file
//!
//! ## Environment Overrides
//!
//! - `TASKMATE_QUOTE_URL`: replaces `quote_api.base_url`
//! - `TASKMATE_DB`: replaces `database_path`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskmate::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! println!("quotes from {}", config.quote_api.base_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::db::db::DB_FILE_NAME;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Remote quote endpoint settings.
///
/// Different quote services name their fields differently, so the mapping
/// from response fields to quote content and author is configurable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct QuoteApiConfig {
    /// Root URL of the service, e.g. `https://quotable-proxy.onrender.com/`.
    pub base_url: String,
    /// Path appended to `base_url` for a random quote.
    pub path: String,
    /// Response field holding the quote text.
    pub content_field: String,
    /// Response field holding the author name.
    pub author_field: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for QuoteApiConfig {
    fn default() -> Self {
        QuoteApiConfig {
            base_url: "https://quotable-proxy.onrender.com/".to_string(),
            path: "random".to_string(),
            content_field: "content".to_string(),
            author_field: "author".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub quote_api: QuoteApiConfig,

    /// Explicit database location; defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the data directory, or defaults if absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the data directory and returns the file path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `TASKMATE_QUOTE_URL` and `TASKMATE_DB` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("TASKMATE_QUOTE_URL") {
            self.quote_api.base_url = url;
        }
        if let Ok(path) = env::var("TASKMATE_DB") {
            self.database_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Resolved location of the SQLite file.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup of the quote endpoint, starting from the current values.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let current = config.quote_api.clone();
        msg_print!(Message::ConfigModuleQuoteApi, true);

        config.quote_api = QuoteApiConfig {
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuoteBaseUrl.to_string())
                .default(current.base_url)
                .interact_text()?,
            path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuotePath.to_string())
                .default(current.path)
                .allow_empty(true)
                .interact_text()?,
            content_field: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuoteContentField.to_string())
                .default(current.content_field)
                .interact_text()?,
            author_field: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuoteAuthorField.to_string())
                .default(current.author_field)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuoteTimeout.to_string())
                .default(current.timeout_secs)
                .interact_text()?,
        };

        Ok(config)
    }
}

//! Configuration management for the PDF extraction server

use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::pdf::{ExtractOptions, ExtractionDetail};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Root directory for `/extract-pdf-url` paths
    pub assets_dir: PathBuf,
    /// Directory for upload temp files; OS temp dir when unset
    pub upload_dir: Option<PathBuf>,
    /// Default response shape
    pub detail: ExtractionDetail,
    /// Characters reported per page
    pub char_limit: usize,
    /// Horizontal gap in points that separates words
    pub word_gap_tolerance: f32,
    /// Upload body limit in bytes
    pub max_upload_bytes: usize,
}

impl ExtractionConfig {
    /// Extraction options with an optional per-request detail override
    pub fn options(&self, detail: Option<ExtractionDetail>) -> ExtractOptions {
        ExtractOptions {
            detail: detail.unwrap_or(self.detail),
            char_limit: self.char_limit,
            word_gap_tolerance: self.word_gap_tolerance,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir.clone().unwrap_or_else(env::temp_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5001,
            },
            extraction: ExtractionConfig {
                assets_dir: PathBuf::from("./public"),
                upload_dir: None,
                detail: ExtractionDetail::Coordinates,
                char_limit: 100,
                word_gap_tolerance: 3.0,
                max_upload_bytes: 50 * 1024 * 1024,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&lookup, "SERVER_PORT")?.unwrap_or(defaults.server.port),
            },
            extraction: ExtractionConfig {
                assets_dir: lookup("PDF_ASSETS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.extraction.assets_dir),
                upload_dir: lookup("PDF_UPLOAD_DIR").map(PathBuf::from),
                detail: parse_var(&lookup, "PDF_EXTRACT_DETAIL")?
                    .unwrap_or(defaults.extraction.detail),
                char_limit: parse_var(&lookup, "PDF_CHAR_LIMIT")?
                    .unwrap_or(defaults.extraction.char_limit),
                word_gap_tolerance: parse_var(&lookup, "PDF_WORD_GAP")?
                    .unwrap_or(defaults.extraction.word_gap_tolerance),
                max_upload_bytes: match parse_var::<usize, _>(&lookup, "PDF_MAX_UPLOAD_MB")? {
                    Some(mb) => mb.checked_mul(1024 * 1024).ok_or_else(|| {
                        ConfigError::InvalidValue {
                            name: "PDF_MAX_UPLOAD_MB",
                            value: mb.to_string(),
                        }
                    })?,
                    None => defaults.extraction.max_upload_bytes,
                },
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

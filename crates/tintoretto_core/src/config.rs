//! Layered configuration for storage and publishing endpoints.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tintoretto_error::{ConfigError, TintorettoError, TintorettoResult};
use tracing::{debug, instrument};

/// Storage endpoint configuration for the upload transport.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct StorageConfig {
    /// Upload endpoint URL
    endpoint: String,

    /// Fixed upload-preset credential sent with every upload.
    /// Lives in configuration, never supplied by end users.
    upload_preset: String,

    /// Slice size for streaming the payload, in bytes.
    /// Governs progress-report granularity.
    #[serde(default = "default_chunk_size")]
    #[builder(default = "default_chunk_size()")]
    chunk_size: usize,

    /// Maximum retries for transient upload failures
    #[serde(default = "default_max_retries")]
    #[builder(default = "default_max_retries()")]
    max_retries: usize,

    /// Initial backoff for upload retries, in milliseconds
    #[serde(default = "default_retry_backoff_ms")]
    #[builder(default = "default_retry_backoff_ms()")]
    retry_backoff_ms: u64,
}

impl StorageConfig {
    /// Start building a storage configuration.
    pub fn builder() -> StorageConfigBuilder {
        StorageConfigBuilder::default()
    }
}

fn default_chunk_size() -> usize {
    64 * 1024
}

/// Publisher configuration for destination dispatch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct PublisherConfig {
    /// Base URL the adapter endpoint paths are joined to
    api_base: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,
}

impl PublisherConfig {
    /// Start building a publisher configuration.
    pub fn builder() -> PublisherConfigBuilder {
        PublisherConfigBuilder::default()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

fn default_retry_backoff_ms() -> u64 {
    500
}

/// Top-level Tintoretto configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TintorettoConfig {
    /// Storage endpoint settings
    storage: StorageConfig,
    /// Publisher settings
    publisher: PublisherConfig,
}

impl TintorettoConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TintorettoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                TintorettoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TintorettoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (tintoretto.toml shipped with library)
    /// 2. User config in home directory (~/.config/tintoretto/tintoretto.toml)
    /// 3. User config in current directory (./tintoretto.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tintoretto_core::TintorettoConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TintorettoConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> TintorettoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../tintoretto.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tintoretto/tintoretto.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("tintoretto").required(false));

        builder
            .build()
            .map_err(|e| {
                TintorettoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TintorettoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let raw = include_str!("../../../tintoretto.toml");
        let config: TintorettoConfig = toml::from_str(raw).unwrap();
        assert!(!config.storage().endpoint().is_empty());
        assert!(*config.storage().chunk_size() > 0);
        assert!(*config.publisher().timeout_secs() > 0);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config: TintorettoConfig = toml::from_str(
            r#"
            [storage]
            endpoint = "https://store.example.com/upload"
            upload_preset = "unit-test"

            [publisher]
            api_base = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(*config.storage().chunk_size(), 64 * 1024);
        assert_eq!(*config.storage().max_retries(), 3);
        assert_eq!(*config.storage().retry_backoff_ms(), 500);
        assert_eq!(*config.publisher().timeout_secs(), 30);
    }
}

// Standard library
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, File};
use log::{error, info};
use tokio::sync::RwLock;

// Current module imports
use super::constants::{
    default_geo_endpoint, default_geo_timeout_secs, default_log_level, default_probe_count,
    default_probe_payload_bytes, default_probe_timeout_ms, CONFIG_FILE_NAME, CONFIG_PATH_ENV,
    DEFAULT_CONFIG,
};
use super::errors::ValidationError;
use super::types::{
    ConfigManager, GeoSettings, Log, ProbeSettings, ServerSpec, Settings, ValidatedSettings,
};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            count: default_probe_count(),
            payload_bytes: default_probe_payload_bytes(),
            timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geo_endpoint(),
            timeout_secs: default_geo_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_targets(&self) -> ServerSpec {
        self.targets.clone()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        // Validate probe shape
        if self.probe.count == 0 {
            return Err(ValidationError::InvalidProbeCount(self.probe.count));
        }
        if self.probe.timeout_ms == 0 {
            return Err(ValidationError::InvalidProbeTimeout(self.probe.timeout_ms));
        }

        if self.geo.endpoint.trim().is_empty() {
            return Err(ValidationError::EmptyGeoEndpoint);
        }

        // An absent or empty mapping means there is nothing to check.
        if self.targets.is_empty() {
            return Err(ValidationError::NoTargets);
        }
        for (hostname, servers) in &self.targets {
            if servers.is_empty() {
                return Err(ValidationError::NoServersForTarget(hostname.clone()));
            }
            for (label, address) in servers {
                if address.trim().is_empty() {
                    return Err(ValidationError::EmptyServerAddress {
                        hostname: hostname.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path: PathBuf = Self::get_config_path();
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: Arc::new(RwLock::new(validated_settings.into_inner())),
            _config_path: config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            PathBuf::from(path)
        } else {
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    /// Requires the configuration file to exist. A missing file gets a
    /// commented template written in its place so the operator has something
    /// to fill in, but the run does not start.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if config_path.exists() {
            return Ok(());
        }

        if let Some(parent_dir) = config_path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
        }
        fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
            let msg: String = format!("Failed to create default configuration file: {}", e);
            error!("{}", msg);
            ConfigError::Message(msg)
        })?;
        info!("Default configuration file created at: {:?}", config_path);

        Err(ConfigError::Message(format!(
            "Did not find {:?}; a template has been written there. Fill in [targets] and rerun.",
            config_path
        )))
    }

    /// Loads the settings from the configuration file.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .build()?;

        settings.try_deserialize()
    }

    /// Provides a read-locked reference to the current settings.
    pub async fn get_settings(&self) -> tokio::sync::RwLockReadGuard<'_, Settings> {
        self.settings.read().await
    }

    pub async fn get_log_level(&self) -> String {
        self.settings.read().await.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

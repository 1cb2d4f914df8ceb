use crate::services::catalog::Catalog;
use crate::services::move_service::DEFAULT_OPERATOR;
use crate::utils::error::{Result, WarehouseError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Service for loading settings and inventory fixtures
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service with default directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }

        Ok(Self { config_dir })
    }

    /// Create a config service with custom directory
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        Ok(Self { config_dir })
    }

    /// Get default config directory
    fn get_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "warehouse-move", "warehouse-move")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| WarehouseError::ConfigError("Failed to get config directory".to_string()))
    }

    /// Get path to app settings file
    fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Load application settings
    pub fn load_settings(&self) -> Result<AppSettings> {
        let path = self.settings_file();

        if !path.exists() {
            tracing::debug!("No settings file found, using defaults");
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: AppSettings = toml::from_str(&content)
            .map_err(|e| WarehouseError::ConfigError(format!("Failed to parse settings: {}", e)))?;

        tracing::debug!(
            "Loaded settings: language={:?}, operator={}",
            settings.language,
            settings.operator
        );
        Ok(settings)
    }

    /// Save application settings
    pub fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        let content = toml::to_string_pretty(settings).map_err(|e| {
            WarehouseError::ConfigError(format!("Failed to serialize settings: {}", e))
        })?;

        let path = self.settings_file();
        fs::write(&path, content)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Load the inventory fixture, falling back to the built-in one
    pub fn load_catalog(&self, fixture_path: Option<&Path>) -> Result<Catalog> {
        let Some(path) = fixture_path else {
            tracing::debug!("No fixture configured, using built-in inventory");
            return Ok(Catalog::builtin());
        };

        if !path.exists() {
            return Err(WarehouseError::ConfigError(format!(
                "Fixture file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let catalog = Catalog::from_toml_str(&content).map_err(|e| {
            WarehouseError::ConfigError(format!("Failed to parse fixture {}: {}", path.display(), e))
        })?;

        tracing::info!("Loaded fixture from {:?}", path);
        Ok(catalog)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// UI language ("en", "vi"); detected from `LANG` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// User recorded on move transactions
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Inventory fixture to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}

fn default_operator() -> String {
    DEFAULT_OPERATOR.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: None,
            operator: default_operator(),
            fixture_path: None,
        }
    }
}

impl AppSettings {
    /// Apply command-line overrides on top of saved values
    pub fn with_overrides(
        mut self,
        language: Option<String>,
        operator: Option<String>,
        fixture_path: Option<PathBuf>,
    ) -> Self {
        if language.is_some() {
            self.language = language;
        }
        if let Some(operator) = operator {
            self.operator = operator;
        }
        if fixture_path.is_some() {
            self.fixture_path = fixture_path;
        }
        self
    }
}

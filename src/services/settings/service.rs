use crate::models::settings::GridConfig;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit grid config file
pub const CONFIG_ENV_VAR: &str = "SHIFT_GRID_CONFIG";
pub const CONFIG_FILE_NAME: &str = "grid.toml";

/// Loads and stores [`GridConfig`] as TOML.
pub struct GridConfigService {
    path: Option<PathBuf>,
}

impl GridConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Resolve the config file: `SHIFT_GRID_CONFIG`, then the platform config directory.
    pub fn from_env() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Self::new(path);
        }
        let path = ProjectDirs::from("com", "GuardOps", "ShiftGrid")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        if path.is_none() {
            log::debug!("No config directory available, using built-in grid settings");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the config, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<GridConfig> {
        let Some(path) = self.path.as_deref() else {
            return Ok(GridConfig::default());
        };
        if !path.exists() {
            log::debug!("Grid config {:?} not found, using defaults", path);
            return Ok(GridConfig::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid config {:?}", path))?;
        let config: GridConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse grid config {:?}", path))?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid grid config {:?}: {}", path, e))?;

        log::info!("Loaded grid config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, config: &GridConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid grid config: {}", e))?;
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("No location to store the grid config"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let raw = toml::to_string_pretty(config).context("Failed to serialize grid config")?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write grid config {:?}", path))?;
        Ok(())
    }

    /// Reset the stored config to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&GridConfig::default())
    }
}

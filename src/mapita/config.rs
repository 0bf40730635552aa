use crate::error::{MapitaError, Result};
use crate::model::{LngLat, BOGOTA_CENTER, DEFAULT_ZOOM};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for mapita, stored next to the data file as config.json
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Map center when no view link overrides it.
    #[serde(default = "default_center")]
    pub default_center: LngLat,

    /// Zoom level when no view link overrides it.
    #[serde(default = "default_zoom")]
    pub default_zoom: f64,
}

fn default_center() -> LngLat {
    BOGOTA_CENTER
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: BOGOTA_CENTER,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MapitaError::Io)?;
        let config: MapConfig =
            serde_json::from_str(&content).map_err(MapitaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MapitaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MapitaError::Serialization)?;
        fs::write(config_path, content).map_err(MapitaError::Io)?;
        Ok(())
    }
}

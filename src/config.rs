//! Controller configuration loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::atmosphere::{Cloud, SunConfig};
use crate::core::error::Error;
use crate::core::types::Result;
use crate::lamp::Lamp;
use flowerlamp_link::LinkConfig;

/// Where the lamp stands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            latitude: 37.0,
            longitude: 56.0,
        }
    }
}

impl LampConfig {
    pub fn build(&self) -> Lamp {
        Lamp::new(self.latitude, self.longitude)
    }
}

/// Full controller configuration. Missing fields fall back to the
/// built-in scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub lamp: LampConfig,
    /// Clouds in evaluation order.
    pub clouds: Vec<Cloud>,
    pub sun: SunConfig,
    pub link: LinkConfig,
    /// Debug geometry output; `None` disables the dump.
    pub graphics_path: Option<PathBuf>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            lamp: LampConfig::default(),
            clouds: vec![Cloud::new(50.0, -10.0, 20.0, 30.0, 10.0)],
            sun: SunConfig::default(),
            link: LinkConfig::default(),
            graphics_path: Some(PathBuf::from("graphicsdata.d")),
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config as pretty JSON.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Reject positions and sizes the geometry cannot use.
    pub fn validate(&self) -> Result<()> {
        check_coordinates("lamp", self.lamp.latitude, self.lamp.longitude)?;
        for (i, cloud) in self.clouds.iter().enumerate() {
            let name = format!("cloud {}", i);
            check_coordinates(&name, cloud.latitude, cloud.longitude)?;
            for (field, value) in [
                ("x_width", cloud.x_width),
                ("y_width", cloud.y_width),
                ("height", cloud.height),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::Config(format!(
                        "{} {} must be a non-negative number, got {}",
                        name, field, value
                    )));
                }
            }
        }
        if self.link.topic.is_empty() {
            return Err(Error::Config("link topic must not be empty".into()));
        }
        Ok(())
    }
}

fn check_coordinates(name: &str, latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::Config(format!(
            "{} latitude must be within [-90, 90], got {}",
            name, latitude
        )));
    }
    if !longitude.is_finite() {
        return Err(Error::Config(format!("{} longitude must be finite", name)));
    }
    Ok(())
}

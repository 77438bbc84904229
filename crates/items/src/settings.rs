use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read item settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid item settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Beam parameters for flashlights spawned at runtime
#[derive(Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashlightSettings {
    pub intensity: f32,
    pub radius: f32,
    /// Linear sRGB
    pub color: [f32; 3],
}

impl Default for FlashlightSettings {
    fn default() -> Self {
        Self {
            intensity: 800_000.0,
            radius: 6.0,
            color: [1.0, 0.95, 0.7],
        }
    }
}

impl FlashlightSettings {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

#[derive(Resource, Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct ItemSettings {
    pub inventory_capacity: usize,
    pub flashlight: FlashlightSettings,
}

impl Default for ItemSettings {
    fn default() -> Self {
        Self {
            inventory_capacity: DEFAULT_INVENTORY_CAPACITY,
            flashlight: FlashlightSettings::default(),
        }
    }
}

impl ItemSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

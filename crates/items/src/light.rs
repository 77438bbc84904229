use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::FlashlightSettings;

/// Light emitted by a held item
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LightSource {
    /// Whether the light is currently on
    pub enabled: bool,
    /// Intensity used while on
    pub intensity: f32,
    /// Reach of the light in world units
    pub radius: f32,
}

impl LightSource {
    /// Switched-off light with the configured beam
    pub fn from_settings(settings: &FlashlightSettings) -> Self {
        Self {
            enabled: false,
            intensity: settings.intensity,
            radius: settings.radius,
        }
    }

    pub fn effective_intensity(&self) -> f32 {
        if self.enabled { self.intensity } else { 0.0 }
    }
}

/// Push `LightSource` changes onto whatever renders the light
pub fn sync_light_visuals(
    mut lights: Query<
        (&LightSource, Option<&mut Visibility>, Option<&mut PointLight>),
        Changed<LightSource>,
    >,
) {
    for (source, visibility, point_light) in lights.iter_mut() {
        if let Some(mut visibility) = visibility {
            *visibility = if source.enabled {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }

        if let Some(mut point_light) = point_light {
            point_light.intensity = source.effective_intensity();
            point_light.range = source.radius;
        }
    }
}

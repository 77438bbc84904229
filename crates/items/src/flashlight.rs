use bevy::prelude::*;

use crate::item::{Item, ItemKind, ItemTarget};
use crate::light::LightSource;
use crate::settings::ItemSettings;

/// Handheld light. Lights up while equipped, never used up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub struct Flashlight {
    /// Entity carrying the `LightSource` this flashlight switches
    pub light: Option<Entity>,
}

impl Flashlight {
    pub fn new(light: Entity) -> Self {
        Self { light: Some(light) }
    }

    /// Switch the light to match the equipped state.
    ///
    /// Does nothing when no light is attached, or when the attached entity
    /// no longer carries a `LightSource`.
    pub fn toggle_light(&self, is_equipped: bool, lights: &mut Query<&mut LightSource>) {
        let Some(light) = self.light else {
            return;
        };

        if let Ok(mut source) = lights.get_mut(light) {
            source.enabled = is_equipped;
            info!(
                "🔦 Flashlight light {:?}: {}",
                light,
                if is_equipped { "ON" } else { "OFF" }
            );
        }
    }
}

impl Item for Flashlight {
    fn can_use(&self, _target: ItemTarget) -> bool {
        true
    }

    fn use_on(&mut self, _target: ItemTarget) -> bool {
        false
    }

    fn needs_target(&self) -> bool {
        false
    }
}

/// Spawn a switched-off light under `holder` and a flashlight item wired to it.
///
/// Returns the item entity; the caller decides where it goes in the inventory.
pub fn spawn_flashlight(
    commands: &mut Commands,
    holder: Entity,
    settings: &ItemSettings,
) -> Entity {
    let light = commands
        .spawn((
            LightSource::from_settings(&settings.flashlight),
            Transform::default(),
            Visibility::Hidden,
            Name::new("FlashlightBeam"),
        ))
        .id();
    commands.entity(holder).add_child(light);

    commands
        .spawn((
            ItemKind::Flashlight(Flashlight::new(light)),
            Name::new("Flashlight"),
        ))
        .id()
}

pub mod equipment;
pub mod flashlight;
pub mod input;
pub mod inventory;
pub mod item;
pub mod light;
pub mod settings;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::equipment::{
    EquipmentChanged, FacingTile, ItemUsed, SelectSlot, UseHeldItem, apply_slot_selection,
    toggle_equipped_lights, use_held_items,
};
use crate::inventory::Inventory;
use crate::item::{ItemKind, ItemStack};
use crate::light::{LightSource, sync_light_visuals};
use crate::settings::ItemSettings;

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        // Keeps settings the app inserted before adding the plugin.
        app.init_resource::<ItemSettings>();

        app.register_type::<ItemKind>()
            .register_type::<ItemStack>()
            .register_type::<Inventory>()
            .register_type::<LightSource>()
            .register_type::<FacingTile>()
            .register_type::<ItemSettings>();

        app.add_message::<SelectSlot>()
            .add_message::<UseHeldItem>()
            .add_message::<EquipmentChanged>()
            .add_message::<ItemUsed>()
            .add_systems(
                Update,
                (
                    apply_slot_selection,
                    use_held_items,
                    toggle_equipped_lights,
                    sync_light_visuals,
                )
                    .chain(),
            );
    }
}

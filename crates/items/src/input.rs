use bevy::prelude::*;
use leafwing_input_manager::Actionlike;
use leafwing_input_manager::plugin::InputManagerPlugin;
use leafwing_input_manager::prelude::{ActionState, InputMap};
use serde::{Deserialize, Serialize};

use crate::equipment::{FacingTile, SelectSlot, UseHeldItem};
use crate::inventory::Inventory;
use crate::item::ItemTarget;

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize, Actionlike, Default,
)]
pub enum ItemAction {
    #[default]
    #[actionlike(Button)]
    UseItem,

    #[actionlike(Button)]
    NextSlot,

    #[actionlike(Button)]
    PreviousSlot,

    #[actionlike(Button)]
    Stow,
}

pub fn default_item_input_map() -> InputMap<ItemAction> {
    InputMap::<ItemAction>::default()
        .with(ItemAction::UseItem, KeyCode::Space)
        .with(ItemAction::UseItem, KeyCode::KeyE)
        .with(ItemAction::NextSlot, KeyCode::Tab)
        .with(ItemAction::PreviousSlot, KeyCode::KeyQ)
        .with(ItemAction::Stow, KeyCode::KeyR)
}

pub struct ItemInputPlugin;

impl Plugin for ItemInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<ItemAction>::default());
        app.add_systems(
            Update,
            handle_item_input.before(crate::equipment::apply_slot_selection),
        );
    }
}

/// Turn pressed item actions into equipment requests
pub fn handle_item_input(
    holders: Query<(
        Entity,
        &ActionState<ItemAction>,
        &Inventory,
        Option<&FacingTile>,
    )>,
    mut select: MessageWriter<SelectSlot>,
    mut use_item: MessageWriter<UseHeldItem>,
) {
    for (holder, action_state, inventory, facing) in holders.iter() {
        if action_state.just_pressed(&ItemAction::Stow) {
            select.write(SelectSlot { holder, slot: None });
        } else if action_state.just_pressed(&ItemAction::NextSlot) {
            select.write(SelectSlot {
                holder,
                slot: inventory.next_slot(),
            });
        } else if action_state.just_pressed(&ItemAction::PreviousSlot) {
            select.write(SelectSlot {
                holder,
                slot: inventory.previous_slot(),
            });
        }

        if action_state.just_pressed(&ItemAction::UseItem) {
            let target = facing.map_or(ItemTarget::Untargeted, |tile| ItemTarget::Tile(tile.0));
            use_item.write(UseHeldItem { holder, target });
        }
    }
}

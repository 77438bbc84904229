use bevy::prelude::*;

use crate::inventory::Inventory;
use crate::item::{Item, ItemKind, ItemStack, ItemTarget};
use crate::light::LightSource;

/// Request to hold the item in `slot`, or stow with `None`
#[derive(Message, Clone, Copy, Debug)]
pub struct SelectSlot {
    pub holder: Entity,
    pub slot: Option<usize>,
}

/// Request to use whatever `holder` is holding
#[derive(Message, Clone, Copy, Debug)]
pub struct UseHeldItem {
    pub holder: Entity,
    pub target: ItemTarget,
}

/// An item became the held item (`equipped`) or stopped being it
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentChanged {
    pub holder: Entity,
    pub item: Entity,
    pub equipped: bool,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemUsed {
    pub holder: Entity,
    pub item: Entity,
    pub target: ItemTarget,
    pub consumed: bool,
}

/// Tile the holder is facing; aimed at by item uses
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct FacingTile(pub IVec2);

pub fn apply_slot_selection(
    mut requests: MessageReader<SelectSlot>,
    mut inventories: Query<&mut Inventory>,
    mut changes: MessageWriter<EquipmentChanged>,
) {
    for request in requests.read() {
        let Ok(mut inventory) = inventories.get_mut(request.holder) else {
            warn!("Slot selection for {:?} without an inventory", request.holder);
            continue;
        };

        let previous = inventory.selected_item();
        if let Err(err) = inventory.select(request.slot) {
            warn!("Rejected slot selection for {:?}: {}", request.holder, err);
            continue;
        }
        let current = inventory.selected_item();

        if previous == current {
            continue;
        }
        if let Some(item) = previous {
            changes.write(EquipmentChanged {
                holder: request.holder,
                item,
                equipped: false,
            });
        }
        if let Some(item) = current {
            changes.write(EquipmentChanged {
                holder: request.holder,
                item,
                equipped: true,
            });
        }
    }
}

pub fn use_held_items(
    mut commands: Commands,
    mut requests: MessageReader<UseHeldItem>,
    mut inventories: Query<&mut Inventory>,
    mut items: Query<(&mut ItemKind, Option<&mut ItemStack>)>,
    mut used: MessageWriter<ItemUsed>,
    mut changes: MessageWriter<EquipmentChanged>,
) {
    for request in requests.read() {
        let Ok(mut inventory) = inventories.get_mut(request.holder) else {
            continue;
        };
        let Some(item) = inventory.selected_item() else {
            debug!("{:?} is not holding anything", request.holder);
            continue;
        };
        let Ok((mut kind, stack)) = items.get_mut(item) else {
            warn!("Held entity {:?} is not an item", item);
            continue;
        };

        if stack.as_ref().is_some_and(|stack| stack.is_empty()) {
            warn!("Dropping empty stack {:?} held by {:?}", item, request.holder);
            discard_held_item(&mut commands, &mut inventory, &mut changes, request.holder, item);
            continue;
        }
        if kind.needs_target() && !request.target.is_tile() {
            debug!("{:?} needs a target tile", item);
            continue;
        }
        if !kind.can_use(request.target) {
            debug!("{:?} cannot be used on {:?}", item, request.target);
            continue;
        }

        let consumed = kind.use_on(request.target);
        used.write(ItemUsed {
            holder: request.holder,
            item,
            target: request.target,
            consumed,
        });

        if !consumed {
            continue;
        }
        let used_up = stack.is_none_or(|mut stack| stack.take_one());
        if used_up {
            discard_held_item(&mut commands, &mut inventory, &mut changes, request.holder, item);
            info!("{:?} used up {:?}", request.holder, item);
        }
    }
}

/// Take `item` out of the holder's inventory, unequip it and despawn it
fn discard_held_item(
    commands: &mut Commands,
    inventory: &mut Inventory,
    changes: &mut MessageWriter<EquipmentChanged>,
    holder: Entity,
    item: Entity,
) {
    if let Some(slot) = inventory.position(item)
        && inventory.remove(slot).is_ok()
    {
        changes.write(EquipmentChanged {
            holder,
            item,
            equipped: false,
        });
    }
    commands.entity(item).despawn();
}

/// Switch flashlight beams on and off as they are equipped and stowed
pub fn toggle_equipped_lights(
    mut changes: MessageReader<EquipmentChanged>,
    items: Query<&ItemKind>,
    mut lights: Query<&mut LightSource>,
) {
    for change in changes.read() {
        let Some(flashlight) = items.get(change.item).ok().and_then(ItemKind::as_flashlight)
        else {
            continue;
        };
        flashlight.toggle_light(change.equipped, &mut lights);
    }
}

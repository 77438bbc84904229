use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    #[error("slot {slot} is out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },
    #[error("inventory is full")]
    Full,
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("item is already held in slot {0}")]
    AlreadyHeld(usize),
}

/// Fixed-size row of item slots with at most one selected (held) slot
#[derive(Component, Clone, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    slots: Vec<Option<Entity>>,
    selected: Option<usize>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            selected: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<Entity> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The item in the selected slot, if any
    pub fn selected_item(&self) -> Option<Entity> {
        self.selected.and_then(|slot| self.get(slot))
    }

    pub fn position(&self, item: Entity) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(item))
    }

    pub fn items(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.map(|item| (slot, item)))
    }

    /// Put an item in the first free slot. An item occupies at most one slot.
    pub fn insert(&mut self, item: Entity) -> Result<usize, InventoryError> {
        if let Some(slot) = self.position(item) {
            return Err(InventoryError::AlreadyHeld(slot));
        }
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(InventoryError::Full)?;
        self.slots[slot] = Some(item);
        Ok(slot)
    }

    /// Take the item out of `slot`. The selection stays where it is.
    pub fn remove(&mut self, slot: usize) -> Result<Entity, InventoryError> {
        self.check_slot(slot)?;
        self.slots[slot].take().ok_or(InventoryError::EmptySlot(slot))
    }

    /// Select a slot, or stow with `None`. Empty slots can be selected.
    pub fn select(&mut self, slot: Option<usize>) -> Result<(), InventoryError> {
        if let Some(slot) = slot {
            self.check_slot(slot)?;
        }
        self.selected = slot;
        Ok(())
    }

    pub fn next_slot(&self) -> Option<usize> {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }
        Some(self.selected.map_or(0, |slot| (slot + 1) % capacity))
    }

    pub fn previous_slot(&self) -> Option<usize> {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }
        Some(
            self.selected
                .map_or(capacity - 1, |slot| (slot + capacity - 1) % capacity),
        )
    }

    fn check_slot(&self, slot: usize) -> Result<(), InventoryError> {
        if slot >= self.capacity() {
            return Err(InventoryError::SlotOutOfRange {
                slot,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}

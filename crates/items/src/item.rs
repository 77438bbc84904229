use bevy::prelude::*;

use crate::flashlight::Flashlight;

/// What a use is aimed at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ItemTarget {
    #[default]
    Untargeted,
    Tile(IVec2),
}

impl ItemTarget {
    pub fn is_tile(&self) -> bool {
        matches!(self, ItemTarget::Tile(_))
    }
}

/// Capabilities shared by every item a player can hold
pub trait Item {
    /// Whether the item can be used on `target` right now
    fn can_use(&self, target: ItemTarget) -> bool;

    /// Use the item. Returns true when the use consumed it.
    fn use_on(&mut self, target: ItemTarget) -> bool;

    /// Whether a use has to be aimed at a tile
    fn needs_target(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum ToolAction {
    Till,
    Water,
    Harvest,
}

/// Reusable tool aimed at a tile (hoe, watering can, sickle)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct Tool {
    pub action: ToolAction,
}

impl Tool {
    pub fn new(action: ToolAction) -> Self {
        Self { action }
    }
}

impl Item for Tool {
    fn can_use(&self, target: ItemTarget) -> bool {
        target.is_tile()
    }

    fn use_on(&mut self, target: ItemTarget) -> bool {
        debug!("{:?} applied to {:?}", self.action, target);
        false
    }

    fn needs_target(&self) -> bool {
        true
    }
}

/// Seed planted on a tile, one per use
#[derive(Clone, Debug, PartialEq, Eq, Reflect)]
pub struct Seed {
    pub crop: String,
}

impl Seed {
    pub fn new(crop: impl Into<String>) -> Self {
        Self { crop: crop.into() }
    }
}

impl Item for Seed {
    fn can_use(&self, target: ItemTarget) -> bool {
        target.is_tile()
    }

    fn use_on(&mut self, target: ItemTarget) -> bool {
        debug!("Planted {} at {:?}", self.crop, target);
        true
    }

    fn needs_target(&self) -> bool {
        true
    }
}

/// Component naming the concrete kind of an item entity
#[derive(Component, Clone, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub enum ItemKind {
    Flashlight(Flashlight),
    Tool(Tool),
    Seed(Seed),
}

impl ItemKind {
    pub fn as_flashlight(&self) -> Option<&Flashlight> {
        match self {
            ItemKind::Flashlight(flashlight) => Some(flashlight),
            _ => None,
        }
    }
}

impl Item for ItemKind {
    fn can_use(&self, target: ItemTarget) -> bool {
        match self {
            ItemKind::Flashlight(item) => item.can_use(target),
            ItemKind::Tool(item) => item.can_use(target),
            ItemKind::Seed(item) => item.can_use(target),
        }
    }

    fn use_on(&mut self, target: ItemTarget) -> bool {
        match self {
            ItemKind::Flashlight(item) => item.use_on(target),
            ItemKind::Tool(item) => item.use_on(target),
            ItemKind::Seed(item) => item.use_on(target),
        }
    }

    fn needs_target(&self) -> bool {
        match self {
            ItemKind::Flashlight(item) => item.needs_target(),
            ItemKind::Tool(item) => item.needs_target(),
            ItemKind::Seed(item) => item.needs_target(),
        }
    }
}

/// Number of identical items held in one slot
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ItemStack(pub u32);

impl ItemStack {
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Take one item off the stack. Returns true when the stack is used up.
    pub fn take_one(&mut self) -> bool {
        self.0 = self.0.saturating_sub(1);
        self.0 == 0
    }
}

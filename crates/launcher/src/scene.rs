use bevy::prelude::*;
use farm_items::equipment::{FacingTile, ItemUsed};
use farm_items::flashlight::spawn_flashlight;
use farm_items::input::{ItemAction, default_item_input_map};
use farm_items::inventory::Inventory;
use farm_items::item::{ItemKind, ItemStack, ItemTarget, Seed, Tool, ToolAction};
use farm_items::light::LightSource;
use farm_items::settings::ItemSettings;
use leafwing_input_manager::prelude::ActionState;

const TILE_SIZE: f32 = 48.0;
const FIELD_RADIUS: i32 = 4;

const SOIL: Color = Color::srgb(0.36, 0.5, 0.22);
const TILLED: Color = Color::srgb(0.42, 0.28, 0.16);
const PLANTED: Color = Color::srgb(0.2, 0.7, 0.3);
const NIGHT: Color = Color::srgb(0.02, 0.02, 0.06);

pub struct SandboxScenePlugin;

impl Plugin for SandboxScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(NIGHT));
        app.add_systems(Startup, (spawn_field, spawn_farmer));
        app.add_systems(
            Update,
            (
                (turn_farmer, move_facing_marker).chain(),
                decorate_lights,
                paint_worked_tiles,
            ),
        );
    }
}

#[derive(Component)]
struct FieldTile(IVec2);

#[derive(Component)]
pub(crate) struct FacingMarker;

pub(crate) fn tile_to_world(tile: IVec2) -> Vec3 {
    (tile.as_vec2() * TILE_SIZE).extend(0.0)
}

fn spawn_field(mut commands: Commands) {
    commands.spawn(Camera2d);

    for x in -FIELD_RADIUS..=FIELD_RADIUS {
        for y in -FIELD_RADIUS..=FIELD_RADIUS {
            let tile = IVec2::new(x, y);
            commands.spawn((
                FieldTile(tile),
                Sprite::from_color(SOIL, Vec2::splat(TILE_SIZE - 2.0)),
                Transform::from_translation(tile_to_world(tile)),
            ));
        }
    }

    commands.spawn((
        FacingMarker,
        Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, 0.15), Vec2::splat(TILE_SIZE)),
        Transform::from_translation(tile_to_world(IVec2::Y).with_z(1.0)),
    ));
}

fn spawn_farmer(mut commands: Commands, settings: Res<ItemSettings>) {
    let farmer = commands
        .spawn((
            Name::new("Farmer"),
            Sprite::from_color(Color::srgb(0.9, 0.75, 0.55), Vec2::new(28.0, 40.0)),
            Transform::from_xyz(0.0, 0.0, 2.0),
            FacingTile(IVec2::Y),
            default_item_input_map(),
            ActionState::<ItemAction>::default(),
        ))
        .id();

    let mut inventory = Inventory::new(settings.inventory_capacity);
    let flashlight = spawn_flashlight(&mut commands, farmer, &settings);
    let hoe = commands
        .spawn((ItemKind::Tool(Tool::new(ToolAction::Till)), Name::new("Hoe")))
        .id();
    let seeds = commands
        .spawn((
            ItemKind::Seed(Seed::new("turnip")),
            ItemStack(5),
            Name::new("Turnip Seeds"),
        ))
        .id();

    for item in [flashlight, hoe, seeds] {
        if let Err(err) = inventory.insert(item) {
            warn!("Could not give {:?} to the farmer: {}", item, err);
            commands.entity(item).despawn();
        }
    }
    commands.entity(farmer).insert(inventory);
    info!("Farmer ready with {} slots", settings.inventory_capacity);
}

fn turn_farmer(keys: Res<ButtonInput<KeyCode>>, mut farmers: Query<&mut FacingTile>) {
    let direction = if keys.just_pressed(KeyCode::ArrowUp) {
        IVec2::Y
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        IVec2::NEG_Y
    } else if keys.just_pressed(KeyCode::ArrowLeft) {
        IVec2::NEG_X
    } else if keys.just_pressed(KeyCode::ArrowRight) {
        IVec2::X
    } else {
        return;
    };

    for mut facing in farmers.iter_mut() {
        facing.0 = direction;
    }
}

/// Keep the tile marker and the held lights' beams pointing where the farmer faces
pub(crate) fn move_facing_marker(
    farmers: Query<(&FacingTile, Option<&Children>), Changed<FacingTile>>,
    mut markers: Query<&mut Transform, With<FacingMarker>>,
    mut beams: Query<&mut Transform, (With<LightSource>, Without<FacingMarker>)>,
) {
    for (facing, children) in farmers.iter() {
        for mut transform in markers.iter_mut() {
            transform.translation = tile_to_world(facing.0).with_z(1.0);
        }

        for child in children.into_iter().flat_map(|children| children.iter()) {
            if let Ok(mut transform) = beams.get_mut(child) {
                transform.translation = tile_to_world(facing.0 * 2).with_z(1.0);
            }
        }
    }
}

/// Give freshly spawned lights a soft glow sprite
fn decorate_lights(
    mut commands: Commands,
    lights: Query<(Entity, &LightSource), Added<LightSource>>,
    settings: Res<ItemSettings>,
) {
    for (entity, source) in lights.iter() {
        let color = settings.flashlight.color().with_alpha(0.3);
        commands
            .entity(entity)
            .insert(Sprite::from_color(color, Vec2::splat(source.radius * TILE_SIZE)));
    }
}

fn paint_worked_tiles(
    mut used: MessageReader<ItemUsed>,
    mut tiles: Query<(&FieldTile, &mut Sprite)>,
) {
    for used in used.read() {
        let ItemTarget::Tile(target) = used.target else {
            continue;
        };
        let color = if used.consumed { PLANTED } else { TILLED };

        for (tile, mut sprite) in tiles.iter_mut() {
            if tile.0 == target {
                sprite.color = color;
            }
        }
    }
}

//! Equip, stow and use flow driven through messages

use bevy::prelude::*;

use crate::ItemsPlugin;
use crate::equipment::*;
use crate::flashlight::Flashlight;
use crate::inventory::Inventory;
use crate::item::{ItemKind, ItemStack, ItemTarget, Seed, Tool, ToolAction};
use crate::light::LightSource;

#[derive(Resource, Default)]
struct UsedLog(Vec<ItemUsed>);

fn record_used(mut used: MessageReader<ItemUsed>, mut log: ResMut<UsedLog>) {
    log.0.extend(used.read().copied());
}

struct Farm {
    app: App,
    holder: Entity,
    flashlight: Entity,
    light: Entity,
    hoe: Entity,
    seeds: Entity,
}

fn setup_farm() -> Farm {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(ItemsPlugin);
    app.init_resource::<UsedLog>();
    app.add_systems(Update, record_used.after(use_held_items));

    let world = app.world_mut();
    let light = world
        .spawn((LightSource::default(), Visibility::Hidden))
        .id();
    let flashlight = world
        .spawn(ItemKind::Flashlight(Flashlight::new(light)))
        .id();
    let hoe = world.spawn(ItemKind::Tool(Tool::new(ToolAction::Till))).id();
    let seeds = world
        .spawn((ItemKind::Seed(Seed::new("turnip")), ItemStack(2)))
        .id();

    let mut inventory = Inventory::new(4);
    inventory.insert(flashlight).unwrap();
    inventory.insert(hoe).unwrap();
    inventory.insert(seeds).unwrap();
    let holder = world.spawn(inventory).id();

    Farm {
        app,
        holder,
        flashlight,
        light,
        hoe,
        seeds,
    }
}

fn select(farm: &mut Farm, slot: Option<usize>) {
    farm.app.world_mut().write_message(SelectSlot {
        holder: farm.holder,
        slot,
    });
    farm.app.update();
}

fn use_held(farm: &mut Farm, target: ItemTarget) {
    farm.app.world_mut().write_message(UseHeldItem {
        holder: farm.holder,
        target,
    });
    farm.app.update();
}

fn light_on(farm: &Farm) -> bool {
    farm.app.world().get::<LightSource>(farm.light).unwrap().enabled
}

fn used_messages(app: &App) -> Vec<ItemUsed> {
    app.world().resource::<UsedLog>().0.clone()
}

#[test]
fn test_equipping_flashlight_turns_light_on() {
    let mut farm = setup_farm();
    assert!(!light_on(&farm));

    select(&mut farm, Some(0));
    assert!(light_on(&farm), "Equipped flashlight should shine");

    let visibility = farm.app.world().get::<Visibility>(farm.light).unwrap();
    assert_eq!(*visibility, Visibility::Inherited);
}

#[test]
fn test_stowing_flashlight_turns_light_off() {
    let mut farm = setup_farm();
    select(&mut farm, Some(0));
    select(&mut farm, None);

    assert!(!light_on(&farm));
    let visibility = farm.app.world().get::<Visibility>(farm.light).unwrap();
    assert_eq!(*visibility, Visibility::Hidden);
}

#[test]
fn test_switching_away_turns_light_off() {
    let mut farm = setup_farm();
    select(&mut farm, Some(0));
    select(&mut farm, Some(1));

    assert!(!light_on(&farm));
    let inventory = farm.app.world().get::<Inventory>(farm.holder).unwrap();
    assert_eq!(inventory.selected_item(), Some(farm.hoe));
}

#[test]
fn test_switching_through_flashlight_in_one_frame() {
    let mut farm = setup_farm();
    let world = farm.app.world_mut();
    world.write_message(SelectSlot {
        holder: farm.holder,
        slot: Some(0),
    });
    world.write_message(SelectSlot {
        holder: farm.holder,
        slot: Some(1),
    });
    farm.app.update();

    assert!(!light_on(&farm), "Last selection wins");
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let mut farm = setup_farm();
    select(&mut farm, Some(0));
    select(&mut farm, Some(10));

    assert!(light_on(&farm));
    let inventory = farm.app.world().get::<Inventory>(farm.holder).unwrap();
    assert_eq!(inventory.selected(), Some(0));
}

#[test]
fn test_flashlight_with_missing_light_equips_quietly() {
    let mut farm = setup_farm();
    let world = farm.app.world_mut();
    let broken = world.spawn(ItemKind::Flashlight(Flashlight::default())).id();
    world
        .get_mut::<Inventory>(farm.holder)
        .unwrap()
        .insert(broken)
        .unwrap();

    select(&mut farm, Some(3));
    select(&mut farm, None);

    assert!(!light_on(&farm), "Other lights should be untouched");
}

#[test]
fn test_using_flashlight_does_not_consume_it() {
    let mut farm = setup_farm();
    select(&mut farm, Some(0));
    use_held(&mut farm, ItemTarget::Untargeted);

    let used = used_messages(&farm.app);
    assert_eq!(
        used,
        vec![ItemUsed {
            holder: farm.holder,
            item: farm.flashlight,
            target: ItemTarget::Untargeted,
            consumed: false,
        }]
    );
    assert!(farm.app.world().get_entity(farm.flashlight).is_ok());
    assert!(light_on(&farm), "Using the flashlight keeps it lit");
}

#[test]
fn test_tool_without_target_is_not_used() {
    let mut farm = setup_farm();
    select(&mut farm, Some(1));
    use_held(&mut farm, ItemTarget::Untargeted);
    assert!(used_messages(&farm.app).is_empty());

    use_held(&mut farm, ItemTarget::Tile(IVec2::new(1, 1)));
    let used = used_messages(&farm.app);
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].item, farm.hoe);
    assert_eq!(used[0].target, ItemTarget::Tile(IVec2::new(1, 1)));
    assert!(!used[0].consumed);
}

#[test]
fn test_using_nothing_does_nothing() {
    let mut farm = setup_farm();
    use_held(&mut farm, ItemTarget::Tile(IVec2::ZERO));
    assert!(used_messages(&farm.app).is_empty());
}

#[test]
fn test_seed_stack_is_used_up() {
    let mut farm = setup_farm();
    select(&mut farm, Some(2));

    use_held(&mut farm, ItemTarget::Tile(IVec2::new(0, 0)));
    let stack = farm.app.world().get::<ItemStack>(farm.seeds).unwrap();
    assert_eq!(*stack, ItemStack(1));

    use_held(&mut farm, ItemTarget::Tile(IVec2::new(1, 0)));
    let used = used_messages(&farm.app);
    assert_eq!(used.len(), 2);
    assert!(used.iter().all(|used| used.consumed && used.item == farm.seeds));

    assert!(
        farm.app.world().get_entity(farm.seeds).is_err(),
        "Empty stack should be despawned"
    );
    let inventory = farm.app.world().get::<Inventory>(farm.holder).unwrap();
    assert_eq!(inventory.get(2), None);
    assert_eq!(inventory.selected(), Some(2));
}

#[test]
fn test_empty_stack_is_dropped_without_use() {
    let mut farm = setup_farm();
    let world = farm.app.world_mut();
    let empty = world
        .spawn((ItemKind::Seed(Seed::new("carrot")), ItemStack(0)))
        .id();
    world
        .get_mut::<Inventory>(farm.holder)
        .unwrap()
        .insert(empty)
        .unwrap();

    select(&mut farm, Some(3));
    use_held(&mut farm, ItemTarget::Tile(IVec2::new(2, 2)));

    assert!(
        used_messages(&farm.app).is_empty(),
        "An empty stack should not plant anything"
    );
    assert!(farm.app.world().get_entity(empty).is_err());
    let inventory = farm.app.world().get::<Inventory>(farm.holder).unwrap();
    assert_eq!(inventory.get(3), None);
}

#[test]
fn test_point_light_follows_flashlight() {
    let mut farm = setup_farm();
    let world = farm.app.world_mut();
    let lamp = world
        .spawn((
            LightSource {
                enabled: false,
                intensity: 500_000.0,
                radius: 7.0,
            },
            PointLight::default(),
        ))
        .id();
    let flashlight = world
        .spawn(ItemKind::Flashlight(Flashlight::new(lamp)))
        .id();
    world
        .get_mut::<Inventory>(farm.holder)
        .unwrap()
        .insert(flashlight)
        .unwrap();
    farm.app.update();

    let point_light = farm.app.world().get::<PointLight>(lamp).unwrap();
    assert_eq!(point_light.intensity, 0.0, "Stowed lamp should be dark");
    assert_eq!(point_light.range, 7.0);

    select(&mut farm, Some(3));
    let point_light = farm.app.world().get::<PointLight>(lamp).unwrap();
    assert_eq!(point_light.intensity, 500_000.0);

    select(&mut farm, None);
    let point_light = farm.app.world().get::<PointLight>(lamp).unwrap();
    assert_eq!(point_light.intensity, 0.0);
}

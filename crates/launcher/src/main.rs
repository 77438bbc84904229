use std::path::PathBuf;

use anyhow::Context;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::{App, AppExit, DefaultPlugins, PluginGroup, Window, WindowPlugin, default};
use bevy::window::PresentMode;
use clap::Parser;
use farm_items::ItemsPlugin;
use farm_items::input::ItemInputPlugin;
use farm_items::settings::ItemSettings;

mod scene;


#[derive(Parser)]
#[command(name = "farm-items")]
#[command(version = "0.1")]
#[command(about = "Sandbox scene for the farm item framework")]
#[command(long_about = "
Sandbox scene for the farm item framework

CONTROLS:
    Tab / Q      cycle through the hotbar
    R            stow the held item
    Space / E    use the held item on the tile ahead
    Arrow keys   turn to face another tile

EXAMPLES:
    cargo run --bin launcher                                  # Default settings
    cargo run --bin launcher -- --config items.json           # Load item settings
    cargo run --bin launcher -- --log-filter farm_items=debug # Verbose item logs
")]
struct Cli {
    #[arg(short, long)]
    #[arg(help = "JSON file with item settings")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "wgpu=error,naga=warn")]
    #[arg(help = "Extra tracing filter directives")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ItemSettings::load(path)
            .with_context(|| format!("loading item settings from {}", path.display()))?,
        None => ItemSettings::default(),
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Farm Items".to_string(),
                    resolution: (960, 540).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: Level::INFO,
                filter: cli.log_filter,
                ..default()
            }),
    );
    app.insert_resource(settings);
    app.add_plugins(ItemsPlugin);
    app.add_plugins(ItemInputPlugin);
    app.add_plugins(scene::SandboxScenePlugin);
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}

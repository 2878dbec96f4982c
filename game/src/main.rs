//! House demo: a generated room, a first-person camera, and an NPC that
//! turns to face the player when approached.

mod config;
mod input;
mod npc;
mod player;
mod world;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "House".to_string(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    // Settings must exist before the Startup spawners run.
    app.insert_resource(config::load_config());

    app.add_plugins(world::WorldPlugin);
    app.add_plugins(player::PlayerPlugin);
    app.add_plugins(npc::NpcPlugin);

    app.run();
}

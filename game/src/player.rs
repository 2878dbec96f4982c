//! Player camera: spawn, per-frame movement integration, and transform sync.

use bevy::prelude::*;
use sim::{integrate_movement, GameConfig, PlayerCamera, PlayerPosition, CAMERA_FOV_DEGREES};

use crate::input::{self, InputState};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>();
        app.add_systems(Startup, spawn_camera);
        // Input must be sampled before the camera consumes it.
        app.add_systems(
            Update,
            (
                input::handle_keyboard_input,
                input::handle_mouse_input,
                input::grab_cursor,
                update_camera,
            )
                .chain(),
        );
    }
}

/// Spawn the player camera at eye height above the room center.
fn spawn_camera(mut commands: Commands, settings: Res<GameConfig>) {
    let eye = settings.room.camera_position();

    commands.spawn((
        PlayerCamera,
        PlayerPosition(eye),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(eye),
        GlobalTransform::default(),
        Visibility::default(),
        InheritedVisibility::default(),
    ));

    info!("Spawned player camera at {eye}");
}

/// Integrate one frame of movement and write the camera transform.
fn update_camera(
    time: Res<Time>,
    input_state: Res<InputState>,
    settings: Res<GameConfig>,
    mut camera_query: Query<(&mut PlayerPosition, &mut Transform), With<PlayerCamera>>,
) {
    let Ok((mut position, mut transform)) = camera_query.single_mut() else {
        return;
    };

    position.0 = integrate_movement(
        position.0,
        input_state.look,
        input_state.axis_h(),
        input_state.axis_v(),
        settings.controls.move_speed,
        time.delta_secs(),
    );

    transform.translation = position.0;
    transform.rotation = input_state.look.rotation();
}

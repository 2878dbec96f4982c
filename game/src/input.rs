//! Keyboard and mouse sampling for the first-person controller.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use sim::{GameConfig, LookAngles};

/// Sampled controller state for the current frame.
#[derive(Resource, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Mouse-driven look angles; pitch clamping happens in `sim`.
    pub look: LookAngles,
}

impl InputState {
    /// Strafe axis in [-1, 1], positive to the right.
    pub fn axis_h(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Advance axis in [-1, 1], positive forward.
    pub fn axis_v(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }
}

/// Sample WASD into the input state.
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input_state: ResMut<InputState>,
) {
    input_state.forward = keyboard.pressed(KeyCode::KeyW);
    input_state.backward = keyboard.pressed(KeyCode::KeyS);
    input_state.left = keyboard.pressed(KeyCode::KeyA);
    input_state.right = keyboard.pressed(KeyCode::KeyD);
}

/// Apply this frame's accumulated mouse motion to the look angles.
pub fn handle_mouse_input(
    time: Res<Time>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut input_state: ResMut<InputState>,
    settings: Res<GameConfig>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }

    if delta != Vec2::ZERO {
        input_state
            .look
            .apply_delta(delta, settings.controls.mouse_sensitivity, time.delta_secs());
    }
}

/// Grab the cursor on left click, release it on Escape.
pub fn grab_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let Ok(window_entity) = windows.single() else {
        return;
    };
    let Ok(mut cursor) = cursor_opts.get_mut(window_entity) else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

//! Player-relative NPC orientation.
//!
//! Each frame the NPC checks how far away the player is and, when close
//! enough, blends its yaw toward facing the player. The blend is a
//! proportional step along the shortest arc, so the NPC eases in rather than
//! snapping.

use bevy::prelude::*;

/// Distance below which the NPC starts turning toward the player.
///
/// The check is strict: at exactly this distance the NPC does not engage.
pub const NPC_ENGAGE_DISTANCE: f32 = 5.0;

/// Fraction of the remaining arc covered per second while engaged.
pub const NPC_TURN_RATE: f32 = 2.0;

/// Normalize an angle to [-PI, PI].
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Yaw whose forward axis (-Z) points along the XZ components of `dir`.
pub fn yaw_toward(dir: Vec3) -> f32 {
    (-dir.x).atan2(-dir.z)
}

/// Blend `current` toward `target` along the shortest arc by fraction
/// `min(1, rate * dt)`. Single-axis spherical interpolation: the step is
/// proportional to the remaining angle, so it never overshoots.
pub fn blend_yaw(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).min(1.0);
    wrap_angle(current + wrap_angle(target - current) * t)
}

/// One follower tick. Returns the new yaw for an NPC at `npc_pos` with
/// `current_yaw`, turning toward `target_pos`.
///
/// No change when the target is out of range (full 3-D distance, strict
/// less-than) or directly above/below the NPC (no planar direction exists).
pub fn face_target(
    npc_pos: Vec3,
    target_pos: Vec3,
    current_yaw: f32,
    engage_distance: f32,
    turn_rate: f32,
    dt: f32,
) -> f32 {
    if npc_pos.distance(target_pos) >= engage_distance {
        return current_yaw;
    }

    // Face on the yaw axis only.
    let mut dir = target_pos - npc_pos;
    dir.y = 0.0;
    if dir == Vec3::ZERO {
        return current_yaw;
    }

    blend_yaw(current_yaw, yaw_toward(dir), turn_rate, dt)
}

//! ECS components carried by the simulated entities.

use bevy::prelude::*;

/// Marker component for the NPC entity.
#[derive(Component)]
pub struct Npc;

/// NPC position in world space. This is the base of the body (feet on the
/// floor), not the capsule center.
#[derive(Component, Clone, Debug, Default)]
pub struct NpcPosition(pub Vec3);

/// NPC rotation (yaw only; the body never pitches or rolls).
#[derive(Component, Clone, Debug, Default)]
pub struct NpcRotation(pub f32);

/// Marker for the player camera entity. The camera is the player: it carries
/// the controller state and is what the NPC turns toward.
#[derive(Component)]
pub struct PlayerCamera;

/// Player position in world space (eye point).
#[derive(Component, Clone, Debug, Default)]
pub struct PlayerPosition(pub Vec3);

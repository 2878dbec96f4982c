//! NPC spawning, player-facing behavior, and area-entry notices.

use bevy::prelude::*;
use sim::{
    distance_to_body_axis, face_target, npc_body_center, npc_head_center, GameConfig, Npc,
    NpcPosition, NpcRotation, PlayerCamera, PlayerPosition, TriggerArea, NPC_AREA_RADIUS,
    NPC_HEAD_RADIUS, NPC_RADIUS,
};

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_npc);
        app.add_systems(
            Update,
            (face_player, notice_player, sync_npc_transforms).chain(),
        );
    }
}

/// Spawn the capsule-and-sphere NPC at the room center.
fn spawn_npc(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GameConfig>,
) {
    if !settings.npc.add_npc {
        return;
    }

    let height = settings.npc.height;
    let base = Vec3::ZERO;

    let material = materials.add(StandardMaterial {
        base_color: srgb(settings.colors.npc),
        perceptual_roughness: 0.8,
        ..default()
    });

    // Capsule3d takes the cylindrical section length; the end caps add one
    // radius each to reach the full body height.
    let body_mesh = meshes.add(Capsule3d::new(
        NPC_RADIUS,
        (height - 2.0 * NPC_RADIUS).max(0.0),
    ));
    let head_mesh = meshes.add(Sphere::new(NPC_HEAD_RADIUS));

    let npc = commands
        .spawn((
            Npc,
            NpcPosition(base),
            NpcRotation(0.0),
            TriggerArea::default(),
            Transform::from_translation(base),
            GlobalTransform::from_translation(base),
            Visibility::default(),
            InheritedVisibility::default(),
        ))
        .id();

    commands.entity(npc).with_children(|parent| {
        parent.spawn((
            Name::new("Body"),
            Mesh3d(body_mesh),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(npc_body_center(Vec3::ZERO, height)),
        ));
        parent.spawn((
            Name::new("Head"),
            Mesh3d(head_mesh),
            MeshMaterial3d(material),
            Transform::from_translation(npc_head_center(Vec3::ZERO, height)),
        ));
    });

    info!("Spawned NPC at {base}");
}

fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

/// Turn each NPC toward the player while the player is in range.
fn face_player(
    time: Res<Time>,
    settings: Res<GameConfig>,
    player_query: Query<&PlayerPosition, With<PlayerCamera>>,
    mut npc_query: Query<(&NpcPosition, &mut NpcRotation), With<Npc>>,
) {
    // No player is a no-op, not a fault.
    let Ok(player) = player_query.single() else {
        return;
    };

    let dt = time.delta_secs();
    for (npc_pos, mut npc_rot) in npc_query.iter_mut() {
        npc_rot.0 = face_target(
            npc_pos.0,
            player.0,
            npc_rot.0,
            settings.npc.engage_distance,
            settings.npc.turn_rate,
            dt,
        );
    }
}

/// Log once whenever the player walks into an NPC's area.
fn notice_player(
    settings: Res<GameConfig>,
    player_query: Query<&PlayerPosition, With<PlayerCamera>>,
    mut npc_query: Query<(&NpcPosition, &mut TriggerArea), With<Npc>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (npc_pos, mut area) in npc_query.iter_mut() {
        let distance = distance_to_body_axis(player.0, npc_pos.0, settings.npc.height);
        if area.entered(distance, NPC_AREA_RADIUS) {
            info!("Player entered NPC area");
        }
    }
}

/// Write the simulated pose to the render transform.
fn sync_npc_transforms(
    mut npc_query: Query<(&NpcPosition, &NpcRotation, &mut Transform), With<Npc>>,
) {
    for (pos, rot, mut transform) in npc_query.iter_mut() {
        transform.translation = pos.0;
        transform.rotation = Quat::from_rotation_y(rot.0);
    }
}

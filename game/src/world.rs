//! Generated room shell and interior lighting.

use bevy::prelude::*;
use sim::{GameConfig, RoomSurface};

/// Root entity for the generated room; all slabs hang off it.
#[derive(Component)]
pub struct RoomRoot;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_room);
    }
}

fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

/// Spawn the six room slabs plus interior lighting.
fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GameConfig>,
) {
    let root = commands
        // Parent of the slabs and the light; needs the full spatial set so
        // children propagate without B0004 warnings.
        .spawn((
            RoomRoot,
            Transform::default(),
            GlobalTransform::default(),
            Visibility::default(),
            InheritedVisibility::default(),
        ))
        .id();

    let floor_material = materials.add(StandardMaterial {
        base_color: srgb(settings.colors.floor),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: srgb(settings.colors.walls),
        perceptual_roughness: 0.95,
        ..default()
    });
    let ceiling_material = materials.add(StandardMaterial {
        base_color: srgb(settings.colors.ceiling),
        perceptual_roughness: 0.95,
        ..default()
    });

    let parts = settings.room.parts();
    for part in &parts {
        let material = match part.surface {
            RoomSurface::Floor => floor_material.clone(),
            RoomSurface::Ceiling => ceiling_material.clone(),
            RoomSurface::Wall => wall_material.clone(),
        };
        let mesh = meshes.add(Cuboid::new(part.size.x, part.size.y, part.size.z));
        let slab = commands
            .spawn((
                Name::new(part.name),
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(part.center),
            ))
            .id();
        commands.entity(root).add_child(slab);
    }

    // The room is sealed, so no outside light ever reaches it: a flat ambient
    // plus one point light hung below the ceiling.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        affects_lightmapped_meshes: true,
    });

    let reach = settings.room.width.max(settings.room.length) * 2.0;
    let light = commands
        .spawn((
            PointLight {
                intensity: 50_000_000.0,
                range: reach,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::new(0.0, settings.room.height * 0.9, 0.0)),
        ))
        .id();
    commands.entity(root).add_child(light);

    info!(
        "Spawned room shell: {} slabs, {}x{}x{}",
        parts.len(),
        settings.room.width,
        settings.room.length,
        settings.room.height
    );
}

//! Room layout arithmetic.
//!
//! The room is a sealed box of six cuboid slabs: floor, ceiling, and four
//! walls. All placement math lives here so the generated shell can be
//! checked without spawning meshes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Camera field of view in degrees (wider than the engine default).
pub const CAMERA_FOV_DEGREES: f32 = 90.0;

/// Which surface of the shell a slab belongs to. Walls share one material;
/// floor and ceiling get their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomSurface {
    Floor,
    Ceiling,
    Wall,
}

/// One cuboid slab of the room shell.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomPart {
    pub name: &'static str,
    pub surface: RoomSurface,
    pub center: Vec3,
    pub size: Vec3,
}

/// Room dimensions. Width runs along X, length along Z, height along Y;
/// the floor slab is centered at the origin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RoomConfig {
    pub width: f32,
    pub length: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            length: 100.0,
            height: 80.0,
            wall_thickness: 0.2,
        }
    }
}

impl RoomConfig {
    /// The six slabs forming the shell.
    pub fn parts(&self) -> Vec<RoomPart> {
        let w = self.width;
        let l = self.length;
        let h = self.height;
        let t = self.wall_thickness;

        vec![
            RoomPart {
                name: "Floor",
                surface: RoomSurface::Floor,
                center: Vec3::ZERO,
                size: Vec3::new(w, t, l),
            },
            RoomPart {
                name: "Ceiling",
                surface: RoomSurface::Ceiling,
                center: Vec3::new(0.0, h, 0.0),
                size: Vec3::new(w, t, l),
            },
            RoomPart {
                name: "Wall_Front",
                surface: RoomSurface::Wall,
                center: Vec3::new(0.0, h / 2.0, l / 2.0),
                size: Vec3::new(w, h, t),
            },
            RoomPart {
                name: "Wall_Back",
                surface: RoomSurface::Wall,
                center: Vec3::new(0.0, h / 2.0, -l / 2.0),
                size: Vec3::new(w, h, t),
            },
            RoomPart {
                name: "Wall_Left",
                surface: RoomSurface::Wall,
                center: Vec3::new(-w / 2.0, h / 2.0, 0.0),
                size: Vec3::new(t, h, l),
            },
            RoomPart {
                name: "Wall_Right",
                surface: RoomSurface::Wall,
                center: Vec3::new(w / 2.0, h / 2.0, 0.0),
                size: Vec3::new(t, h, l),
            },
        ]
    }

    /// Eye position for the player camera: room center, 60% of the way up.
    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(0.0, self.height * 0.6, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_has_six_slabs() {
        let parts = RoomConfig::default().parts();
        assert_eq!(parts.len(), 6);
        assert_eq!(
            parts
                .iter()
                .filter(|p| p.surface == RoomSurface::Wall)
                .count(),
            4
        );
    }

    #[test]
    fn floor_and_ceiling_span_the_footprint() {
        let room = RoomConfig::default();
        let parts = room.parts();

        let floor = parts.iter().find(|p| p.name == "Floor").unwrap();
        assert_eq!(floor.center, Vec3::ZERO);
        assert_eq!(floor.size, Vec3::new(100.0, 0.2, 100.0));

        let ceiling = parts.iter().find(|p| p.name == "Ceiling").unwrap();
        assert_eq!(ceiling.center, Vec3::new(0.0, 80.0, 0.0));
        assert_eq!(ceiling.size, floor.size);
    }

    #[test]
    fn walls_close_the_box() {
        let room = RoomConfig {
            width: 10.0,
            length: 20.0,
            height: 4.0,
            wall_thickness: 0.5,
        };
        let parts = room.parts();

        let wall = |name: &str| parts.iter().find(|p| p.name == name).unwrap();

        // Front/back walls sit at +-length/2 and span the width.
        assert_eq!(wall("Wall_Front").center, Vec3::new(0.0, 2.0, 10.0));
        assert_eq!(wall("Wall_Back").center, Vec3::new(0.0, 2.0, -10.0));
        assert_eq!(wall("Wall_Front").size, Vec3::new(10.0, 4.0, 0.5));

        // Left/right walls sit at +-width/2 and span the length.
        assert_eq!(wall("Wall_Left").center, Vec3::new(-5.0, 2.0, 0.0));
        assert_eq!(wall("Wall_Right").center, Vec3::new(5.0, 2.0, 0.0));
        assert_eq!(wall("Wall_Left").size, Vec3::new(0.5, 4.0, 20.0));
    }

    #[test]
    fn camera_floats_at_sixty_percent_height() {
        let room = RoomConfig::default();
        assert_eq!(room.camera_position(), Vec3::new(0.0, 48.0, 0.0));
    }
}

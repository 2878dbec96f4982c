//! Run-time tunables.
//!
//! All scene and controller tunables live in one RON file loaded at
//! startup; any missing field falls back to its default, so a partial file
//! only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::facing::{NPC_ENGAGE_DISTANCE, NPC_TURN_RATE};
use crate::movement::{MOUSE_SENSITIVITY, MOVE_SPEED};
use crate::npc::NPC_HEIGHT;
use crate::room::RoomConfig;

/// sRGB tints for the generated materials.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MaterialColors {
    pub floor: [f32; 3],
    pub walls: [f32; 3],
    pub ceiling: [f32; 3],
    pub npc: [f32; 3],
}

impl Default for MaterialColors {
    fn default() -> Self {
        Self {
            floor: [0.45, 0.35, 0.25],
            walls: [0.75, 0.72, 0.68],
            ceiling: [0.85, 0.85, 0.82],
            npc: [0.2, 0.4, 0.8],
        }
    }
}

/// NPC tunables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NpcConfig {
    /// Skip spawning the NPC entirely when false.
    pub add_npc: bool,
    pub height: f32,
    pub turn_rate: f32,
    pub engage_distance: f32,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            add_npc: true,
            height: NPC_HEIGHT,
            turn_rate: NPC_TURN_RATE,
            engage_distance: NPC_ENGAGE_DISTANCE,
        }
    }
}

/// First-person controller tunables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ControlConfig {
    pub mouse_sensitivity: f32,
    pub move_speed: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            move_speed: MOVE_SPEED,
        }
    }
}

/// Top-level settings resource, one section per concern.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub room: RoomConfig,
    pub colors: MaterialColors,
    pub npc: NpcConfig,
    pub controls: ControlConfig,
}

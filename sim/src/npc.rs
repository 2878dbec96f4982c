//! NPC body geometry and area-entry bookkeeping.

use bevy::prelude::*;

/// Default NPC height in world units.
pub const NPC_HEIGHT: f32 = 1.8;

/// Body capsule radius.
pub const NPC_RADIUS: f32 = 0.5;

/// Head sphere radius.
pub const NPC_HEAD_RADIUS: f32 = 0.25;

/// Radius of the player's presence for area checks.
pub const PLAYER_TRIGGER_RADIUS: f32 = 0.2;

/// Distance from the body axis at which the player counts as inside the
/// NPC's area: body radius plus the player's trigger radius.
pub const NPC_AREA_RADIUS: f32 = NPC_RADIUS + PLAYER_TRIGGER_RADIUS;

/// Body capsule center for an NPC standing at `base`.
#[inline]
pub fn npc_body_center(base: Vec3, height: f32) -> Vec3 {
    base + Vec3::new(0.0, height * 0.5, 0.0)
}

/// Head sphere center: just above the top of the body.
#[inline]
pub fn npc_head_center(base: Vec3, height: f32) -> Vec3 {
    base + Vec3::new(0.0, height + 0.15, 0.0)
}

/// Distance from `point` to the NPC's body axis, the vertical segment
/// between the capsule's sphere centers.
pub fn distance_to_body_axis(point: Vec3, base: Vec3, height: f32) -> f32 {
    let bottom = base.y + NPC_RADIUS;
    let top = base.y + (height - NPC_RADIUS).max(NPC_RADIUS);
    let y = point.y.clamp(bottom, top);
    point.distance(Vec3::new(base.x, y, base.z))
}

/// Tracks whether the player is currently inside the NPC's area, so entry is
/// reported once per visit rather than every frame.
#[derive(Component, Clone, Debug, Default)]
pub struct TriggerArea {
    inside: bool,
}

impl TriggerArea {
    /// Feed the current distance; returns true exactly on the frame the
    /// player crosses into `radius`. Re-arms once the player leaves.
    pub fn entered(&mut self, distance: f32, radius: f32) -> bool {
        let now_inside = distance < radius;
        let entered = now_inside && !self.inside;
        self.inside = now_inside;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn body_and_head_sit_on_the_base() {
        let base = Vec3::new(2.0, 0.0, -1.0);
        assert!(npc_body_center(base, 1.8).distance(Vec3::new(2.0, 0.9, -1.0)) < EPS);
        assert!(npc_head_center(base, 1.8).distance(Vec3::new(2.0, 1.95, -1.0)) < EPS);
    }

    #[test]
    fn axis_distance_is_horizontal_at_mid_height() {
        let d = distance_to_body_axis(Vec3::new(3.0, 0.9, 0.0), Vec3::ZERO, 1.8);
        assert!((d - 3.0).abs() < EPS);
    }

    #[test]
    fn axis_distance_includes_height_above_the_body() {
        // Point 1 unit above the top sphere center, on the axis.
        let d = distance_to_body_axis(Vec3::new(0.0, 2.3, 0.0), Vec3::ZERO, 1.8);
        assert!((d - 1.0).abs() < EPS);
    }

    #[test]
    fn trigger_reports_entry_once_per_visit() {
        let mut area = TriggerArea::default();

        assert!(!area.entered(5.0, NPC_AREA_RADIUS));
        assert!(area.entered(0.5, NPC_AREA_RADIUS));
        // Staying inside does not re-report.
        assert!(!area.entered(0.4, NPC_AREA_RADIUS));
        // Leaving re-arms.
        assert!(!area.entered(2.0, NPC_AREA_RADIUS));
        assert!(area.entered(0.6, NPC_AREA_RADIUS));
    }

    #[test]
    fn boundary_distance_does_not_trigger() {
        let mut area = TriggerArea::default();
        assert!(!area.entered(NPC_AREA_RADIUS, NPC_AREA_RADIUS));
    }
}

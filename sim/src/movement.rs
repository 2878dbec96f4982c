//! First-person look-and-move controller.
//!
//! Mouse deltas update a yaw/pitch pair; WASD axes integrate the position
//! along the camera's own axes. Both are scaled by the frame delta so the
//! controller is frame-rate independent.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Mouse sensitivity in radians per pixel per second of frame time.
pub const MOUSE_SENSITIVITY: f32 = 0.12;

/// Camera movement speed in units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Yaw/pitch orientation of the first-person camera. No roll.
///
/// Pitch is clamped to [-PI/2, PI/2]; yaw is unbounded and wraps through the
/// rotation it produces.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Apply one frame of pointer delta. Positive `delta.y` (mouse pulled
    /// down) pitches the view down; the clamp keeps the view from flipping
    /// over the poles.
    pub fn apply_delta(&mut self, delta: Vec2, sensitivity: f32, dt: f32) {
        self.yaw -= delta.x * sensitivity * dt;
        self.pitch = (self.pitch - delta.y * sensitivity * dt).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// The camera rotation: yaw about Y, then pitch about X.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Integrate one frame of movement along the camera's own axes.
///
/// `h` and `v` are the raw strafe/advance axes in [-1, 1]. The axes come
/// from the full orientation, pitch included, so holding forward while
/// looking up climbs. The (h, v) pair is applied as-is, not normalized.
pub fn integrate_movement(
    position: Vec3,
    look: LookAngles,
    h: f32,
    v: f32,
    speed: f32,
    dt: f32,
) -> Vec3 {
    let rotation = look.rotation();
    let forward = rotation * -Vec3::Z;
    let right = rotation * Vec3::X;
    position + (right * h + forward * v) * speed * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn pitch_clamps_at_straight_down() {
        // One huge pull down saturates at -PI/2 exactly.
        let mut look = LookAngles::default();
        look.apply_delta(Vec2::new(0.0, 100.0), 1.0, 1.0);
        assert_eq!(look.pitch, -FRAC_PI_2);
    }

    #[test]
    fn pitch_stays_in_range_for_any_sequence() {
        let mut look = LookAngles::default();
        let deltas = [
            Vec2::new(3.0, 250.0),
            Vec2::new(-40.0, -1000.0),
            Vec2::new(0.0, 77.0),
            Vec2::new(12.0, -3.5),
            Vec2::new(-5.0, 9999.0),
        ];
        for delta in deltas {
            look.apply_delta(delta, MOUSE_SENSITIVITY, 0.016);
            assert!(look.pitch >= -FRAC_PI_2 && look.pitch <= FRAC_PI_2);
        }
    }

    #[test]
    fn yaw_accumulates_the_same_in_small_or_large_steps() {
        let mut stepped = LookAngles::default();
        for _ in 0..50 {
            stepped.apply_delta(Vec2::new(2.0, 0.0), MOUSE_SENSITIVITY, 0.016);
        }

        let mut single = LookAngles::default();
        single.apply_delta(Vec2::new(100.0, 0.0), MOUSE_SENSITIVITY, 0.016);

        assert!((stepped.yaw - single.yaw).abs() < EPS);
    }

    #[test]
    fn advance_moves_along_negative_z_at_rest() {
        let pos = integrate_movement(Vec3::ZERO, LookAngles::default(), 0.0, 1.0, 5.0, 0.5);
        assert!(pos.distance(Vec3::new(0.0, 0.0, -2.5)) < EPS);

        let pos = integrate_movement(Vec3::ZERO, LookAngles::default(), 1.0, 0.0, 5.0, 0.5);
        assert!(pos.distance(Vec3::new(2.5, 0.0, 0.0)) < EPS);
    }

    #[test]
    fn advance_follows_pitch() {
        // Looking straight down, forward is straight down.
        let look = LookAngles {
            yaw: 0.0,
            pitch: -FRAC_PI_2,
        };
        let pos = integrate_movement(Vec3::ZERO, look, 0.0, 1.0, 2.0, 1.0);
        assert!(pos.distance(Vec3::new(0.0, -2.0, 0.0)) < EPS);
    }

    #[test]
    fn diagonal_input_is_not_normalized() {
        let pos = integrate_movement(Vec3::ZERO, LookAngles::default(), 1.0, 1.0, 1.0, 1.0);
        assert!((pos.length() - std::f32::consts::SQRT_2).abs() < EPS);
    }
}

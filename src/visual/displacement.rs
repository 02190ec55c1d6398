//! Pointer-proximity displacement for letter cells.
//!
//! A letter whose center is within `max_distance` of the pointer is pulled
//! along the center-to-pointer vector by `force * intensity`, where force
//! falls linearly from 1 at the center to 0 at the activation radius. A
//! negative intensity pushes letters away instead.

use bevy::prelude::*;

use super::utils::{ease, lerp};

/// Transition used while a letter is inside the activation radius
pub const FAST_TRANSITION_SECS: f32 = 0.2;
/// Transition used when a letter returns to rest
pub const SLOW_TRANSITION_SECS: f32 = 0.5;

/// Tuning a tracker is attached with. Fixed for the tracker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSettings {
    /// Damping factor for displacement magnitude
    pub intensity: f32,
    /// Activation radius in logical pixels
    pub max_distance: f32,
}

/// Offset target for one letter plus how long the letter takes to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub offset: Vec2,
    pub duration: f32,
}

impl Displacement {
    /// Back to the rest position with the slow transition
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        duration: SLOW_TRANSITION_SECS,
    };
}

/// Normalized proximity: 1 at zero distance, 0 at or beyond the radius
pub fn force(distance: f32, max_distance: f32) -> f32 {
    if distance >= max_distance {
        return 0.0;
    }
    (max_distance - distance) / max_distance
}

/// Compute the displacement of the letter occupying `bounds` for a pointer at `pointer`.
/// Both are in the same logical-pixel space.
pub fn displacement(pointer: Vec2, bounds: Rect, settings: TrackerSettings) -> Displacement {
    let delta = pointer - bounds.center();
    let distance = delta.length();

    if distance >= settings.max_distance {
        return Displacement::REST;
    }

    let amount = force(distance, settings.max_distance) * settings.intensity;
    Displacement {
        offset: Vec2::new(lerp(0.0, delta.x, amount), lerp(0.0, delta.y, amount)),
        duration: FAST_TRANSITION_SECS,
    }
}

/// Animated translation of a letter cell.
///
/// Mirrors a CSS `transition: transform`: every new target restarts the
/// transition from wherever the letter currently is.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LetterMotion {
    /// Current translation in logical pixels
    pub offset: Vec2,
    start: Vec2,
    target: Vec2,
    elapsed: f32,
    duration: f32,
}

impl Default for LetterMotion {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            start: Vec2::ZERO,
            target: Vec2::ZERO,
            elapsed: SLOW_TRANSITION_SECS,
            duration: SLOW_TRANSITION_SECS,
        }
    }
}

impl LetterMotion {
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[cfg(test)]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start moving toward a new target. Re-sending the current target is a no-op.
    pub fn retarget(&mut self, displacement: Displacement) {
        if displacement.offset == self.target {
            return;
        }
        self.start = self.offset;
        self.target = displacement.offset;
        self.elapsed = 0.0;
        self.duration = displacement.duration;
    }

    /// Advance the transition by `dt` seconds and return the new offset
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        if self.is_settled() {
            self.offset = self.target;
            return self.offset;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.offset = self.start + (self.target - self.start) * ease(t);
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: TrackerSettings = TrackerSettings {
        intensity: 0.5,
        max_distance: 200.0,
    };

    fn cell_at(center: Vec2) -> Rect {
        Rect::from_center_size(center, Vec2::new(36.0, 60.0))
    }

    #[test]
    fn test_pointer_on_center() {
        let d = displacement(Vec2::new(100.0, 100.0), cell_at(Vec2::new(100.0, 100.0)), SETTINGS);
        assert_eq!(force(0.0, 200.0), 1.0);
        assert_eq!(d.offset, Vec2::ZERO);
        assert_eq!(d.duration, FAST_TRANSITION_SECS);
    }

    #[test]
    fn test_pointer_inside_radius() {
        let d = displacement(Vec2::new(150.0, 100.0), cell_at(Vec2::new(100.0, 100.0)), SETTINGS);
        assert_eq!(force(50.0, 200.0), 0.75);
        assert!((d.offset.x - 18.75).abs() < 1e-4);
        assert_eq!(d.offset.y, 0.0);
        assert_eq!(d.duration, FAST_TRANSITION_SECS);
    }

    #[test]
    fn test_pointer_outside_radius() {
        let d = displacement(Vec2::new(400.0, 100.0), cell_at(Vec2::new(100.0, 100.0)), SETTINGS);
        assert_eq!(d, Displacement::REST);
    }

    #[test]
    fn test_zero_at_and_beyond_radius() {
        let center = Vec2::new(300.0, 300.0);
        let on_rim = displacement(Vec2::new(500.0, 300.0), cell_at(center), SETTINGS);
        assert_eq!(on_rim, Displacement::REST);

        for angle in 0..16 {
            let dir = Vec2::from_angle(angle as f32 * std::f32::consts::TAU / 16.0);
            for distance in [200.5, 250.0, 1000.0] {
                let d = displacement(center + dir * distance, cell_at(center), SETTINGS);
                assert_eq!(d.offset, Vec2::ZERO, "angle {angle}, distance {distance}");
                assert_eq!(d.duration, SLOW_TRANSITION_SECS);
            }
        }
    }

    #[test]
    fn test_force_monotonic_with_proximity() {
        let mut prev = 0.0;
        for step in (0..=200).rev() {
            let f = force(step as f32, 200.0);
            assert!(f >= prev, "force dropped at distance {step}");
            prev = f;
        }
    }

    #[test]
    fn test_offset_grows_from_rim_to_half_radius() {
        let center = Vec2::new(0.0, 0.0);
        let mut prev = 0.0;
        for step in (100..=200).rev() {
            let d = displacement(Vec2::new(step as f32, 0.0), cell_at(center), SETTINGS);
            let magnitude = d.offset.length();
            assert!(magnitude + 1e-4 >= prev, "offset shrank at distance {step}");
            prev = magnitude;
        }
    }

    #[test]
    fn test_offset_points_toward_pointer() {
        let d = displacement(Vec2::new(60.0, 180.0), cell_at(Vec2::new(100.0, 100.0)), SETTINGS);
        assert!(d.offset.x < 0.0);
        assert!(d.offset.y > 0.0);

        let repel = TrackerSettings {
            intensity: -0.5,
            ..SETTINGS
        };
        let d = displacement(Vec2::new(60.0, 180.0), cell_at(Vec2::new(100.0, 100.0)), repel);
        assert!(d.offset.x > 0.0);
        assert!(d.offset.y < 0.0);
    }

    #[test]
    fn test_non_positive_radius_never_displaces() {
        let settings = TrackerSettings {
            intensity: 0.5,
            max_distance: 0.0,
        };
        let d = displacement(Vec2::new(100.0, 100.0), cell_at(Vec2::new(100.0, 100.0)), settings);
        assert_eq!(d, Displacement::REST);
    }

    #[test]
    fn test_motion_reaches_target_at_duration() {
        let mut motion = LetterMotion::default();
        assert!(motion.is_settled());

        motion.retarget(Displacement {
            offset: Vec2::new(18.75, 0.0),
            duration: FAST_TRANSITION_SECS,
        });
        assert!(!motion.is_settled());

        let halfway = motion.advance(0.1);
        assert!(halfway.x > 0.0 && halfway.x < 18.75);

        let end = motion.advance(0.1);
        assert_eq!(end, Vec2::new(18.75, 0.0));
        assert!(motion.is_settled());

        // Overshooting time stays on target
        assert_eq!(motion.advance(1.0), Vec2::new(18.75, 0.0));
    }

    #[test]
    fn test_retarget_starts_from_current_offset() {
        let mut motion = LetterMotion::default();
        motion.retarget(Displacement {
            offset: Vec2::new(40.0, 0.0),
            duration: FAST_TRANSITION_SECS,
        });
        let mid = motion.advance(0.1);

        motion.retarget(Displacement::REST);
        assert_eq!(motion.duration(), SLOW_TRANSITION_SECS);
        assert_eq!(motion.offset, mid);

        let next = motion.advance(0.01);
        assert!(next.x < mid.x && next.x > 0.0);

        motion.advance(SLOW_TRANSITION_SECS);
        assert_eq!(motion.offset, Vec2::ZERO);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut motion = LetterMotion::default();
        let target = Displacement {
            offset: Vec2::new(10.0, 5.0),
            duration: FAST_TRANSITION_SECS,
        };
        motion.retarget(target);
        motion.advance(0.15);
        let before = motion.clone();

        motion.retarget(target);
        assert_eq!(motion, before);
    }
}

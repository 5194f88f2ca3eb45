//! Carrot Hop - endless vertical climb-and-avoid-falling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player control, platform recycling, carrots, game over)
//! - `host`: Boundary to the physics/render host (snapshots in, commands out)
//! - `arcade`: Headless reference host used by the native runner and tests
//! - `settings`: User preferences

pub mod arcade;
pub mod host;
pub mod settings;
pub mod sim;

pub use host::{Host, HostCommand, PhysicsSnapshot, Simulation, Touching};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed host step (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World / viewport dimensions
    pub const WORLD_WIDTH: f32 = 480.0;
    pub const WORLD_HEIGHT: f32 = 640.0;
    pub const VIEWPORT: Vec2 = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);

    /// Host-side gravity (units/s², downward)
    pub const GRAVITY: f32 = 200.0;

    /// Number of platforms, fixed for the whole run
    pub const PLATFORM_COUNT: usize = 5;
    /// Vertical spacing of the initial platform layout
    pub const PLATFORM_SPACING: f32 = 150.0;
    /// Initial platform x range (inclusive)
    pub const PLATFORM_MIN_X: i32 = 80;
    pub const PLATFORM_MAX_X: i32 = 400;
    /// Half-scale platform footprint
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(190.0, 47.0);

    /// Player spawn point and half-scale footprint
    pub const PLAYER_START: Vec2 = Vec2::new(240.0, 320.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(60.0, 95.0);

    /// Carrot footprint
    pub const COLLECTIBLE_SIZE: Vec2 = Vec2::new(26.0, 40.0);
    /// Slots preallocated by the carrot pool
    pub const COLLECTIBLE_CAPACITY: usize = 16;

    /// Upward impulse applied on every ground touch
    pub const JUMP_IMPULSE: f32 = 320.0;
    /// Horizontal speed while steering
    pub const HORIZONTAL_SPEED: f32 = 200.0;

    /// A platform at or below scroll + margin has left the play area
    pub const RECYCLE_MARGIN: f32 = 700.0;
    /// Gap above the scroll frontier for recycled platforms, drawn from (min, max]
    pub const RECYCLE_GAP_MIN: i32 = 50;
    pub const RECYCLE_GAP_MAX: i32 = 80;

    /// Player this far below the lowest platform loses the run
    pub const FALL_MARGIN: f32 = 200.0;

    /// Camera horizontal deadzone, as a multiple of viewport width
    pub const DEADZONE_FACTOR: f32 = 1.5;
}

/// Wrap a horizontal position so the world behaves like a cylinder.
///
/// A body whose centre leaves by more than half its width on one side
/// reappears just outside the opposite side.
#[inline]
pub fn horizontal_wrap(x: f32, half_width: f32, world_width: f32) -> f32 {
    if x < -half_width {
        world_width + half_width
    } else if x > world_width + half_width {
        -half_width
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_inside_is_noop() {
        assert_eq!(horizontal_wrap(240.0, 30.0, 480.0), 240.0);
        assert_eq!(horizontal_wrap(-30.0, 30.0, 480.0), -30.0);
        assert_eq!(horizontal_wrap(510.0, 30.0, 480.0), 510.0);
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(horizontal_wrap(511.0, 30.0, 480.0), -30.0);
        assert_eq!(horizontal_wrap(-31.0, 30.0, 480.0), 510.0);
    }

    proptest! {
        #[test]
        fn wrap_only_moves_bodies_past_the_edge(x in -2000.0f32..2000.0, half in 1.0f32..100.0) {
            let wrapped = horizontal_wrap(x, half, 480.0);
            if x < -half {
                prop_assert_eq!(wrapped, 480.0 + half);
            } else if x > 480.0 + half {
                prop_assert_eq!(wrapped, -half);
            } else {
                prop_assert_eq!(wrapped, x);
            }
        }
    }
}

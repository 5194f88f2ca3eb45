//! Fall detection

use super::state::Platform;
use crate::consts::FALL_MARGIN;

/// The platform lowest on screen (greatest y). `None` for an empty slice.
pub fn lowest_platform(platforms: &[Platform]) -> Option<&Platform> {
    platforms
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// True while the player is more than `FALL_MARGIN` below the lowest platform.
///
/// Holds on every tick the condition is true; the caller latches the phase.
pub fn has_fallen(player_y: f32, platforms: &[Platform]) -> bool {
    match lowest_platform(platforms) {
        Some(lowest) => player_y > lowest.pos.y + FALL_MARGIN,
        None => false,
    }
}

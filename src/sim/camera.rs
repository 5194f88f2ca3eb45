//! Camera follow with a horizontal deadzone
//!
//! The vertical scroll is the frontier the platform recycler measures
//! against. The deadzone has no height, so the camera tracks the player's
//! y exactly; horizontally it only pans once the player leaves a band
//! 1.5 viewports wide, which the wrap keeps from ever happening in play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEADZONE_FACTOR;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left of the visible region in world space
    pub scroll: Vec2,
    pub viewport: Vec2,
    pub deadzone_width: f32,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            scroll: Vec2::ZERO,
            viewport,
            deadzone_width: viewport.x * DEADZONE_FACTOR,
        }
    }

    /// Vertical scroll offset (the scroll frontier)
    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.scroll.y
    }

    /// Re-centre on `target`, respecting the horizontal slack
    pub fn follow(&mut self, target: Vec2) {
        let mid_x = self.scroll.x + self.viewport.x * 0.5;
        let half = self.deadzone_width * 0.5;
        let (left, right) = (mid_x - half, mid_x + half);

        if target.x < left {
            self.scroll.x -= left - target.x;
        } else if target.x > right {
            self.scroll.x += target.x - right;
        }

        self.scroll.y = target.y - self.viewport.y * 0.5;
    }
}

//! Horizontally scrolling tiled background
//!
//! Placement math only: the renderer blits one image at every rectangle
//! returned by [`Backdrop::tiles`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    /// Horizontal position of the first column, always in `(-tile_width, 0]`
    pub offset: f32,
    /// Leftward scroll speed in pixels per second
    pub speed: f32,
    pub tile_width: f32,
    pub tile_height: f32,
}

impl Backdrop {
    pub fn new(tile_width: f32, tile_height: f32, speed: f32) -> Self {
        Self {
            offset: 0.0,
            speed,
            tile_width,
            tile_height,
        }
    }

    /// Scroll left by `speed * dt`, wrapping after one tile width
    pub fn advance(&mut self, dt: f32) {
        if self.tile_width <= 0.0 {
            return;
        }
        let shifted = self.offset - self.speed * dt.max(0.0);
        let wrapped = -((-shifted).rem_euclid(self.tile_width));
        // Normalize -0.0
        self.offset = if wrapped == 0.0 { 0.0 } else { wrapped };
    }

    /// Destination rectangles that cover a `view_width` x `view_height` view
    pub fn tiles(&self, view_width: f32, view_height: f32) -> Vec<Rect> {
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 {
            return Vec::new();
        }

        let size = Vec2::new(self.tile_width, self.tile_height);
        let mut rects = Vec::new();
        let mut y = 0.0;
        while y < view_height {
            let mut x = self.offset;
            while x < view_width {
                rects.push(Rect::new(Vec2::new(x, y), size));
                x += self.tile_width;
            }
            y += self.tile_height;
        }
        rects
    }
}

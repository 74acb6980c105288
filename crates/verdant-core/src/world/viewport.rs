//! Camera-like viewport used to select chunks for drawing

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use verdant_simulation::CHUNK_WORLD_SIZE;

/// Screen-sized window onto the world, centered on a world position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Vec2,
    /// Screen size in pixels
    pub width: f32,
    pub height: f32,
    /// Pixels per world unit
    pub zoom: f32,
}

impl Viewport {
    pub fn new(center: Vec2, width: f32, height: f32, zoom: f32) -> Self {
        Self {
            center,
            width,
            height,
            zoom,
        }
    }

    /// World-space rectangle visible through this viewport
    pub fn bounds(&self) -> ViewBounds {
        let zoom = self.zoom.max(f32::EPSILON);
        let half = Vec2::new(self.width, self.height) / zoom * 0.5;
        ViewBounds {
            min: self.center - half,
            max: self.center + half,
        }
    }
}

/// Axis-aligned world-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ViewBounds {
    /// Inclusive chunk coordinate range overlapping the bounds, grown by
    /// `margin` chunks on every side
    pub fn chunk_range(&self, margin: i32) -> (IVec2, IVec2) {
        let lo = (self.min / CHUNK_WORLD_SIZE).floor();
        let hi = (self.max / CHUNK_WORLD_SIZE).floor();
        (
            IVec2::new(lo.x as i32, lo.y as i32) - IVec2::splat(margin),
            IVec2::new(hi.x as i32, hi.y as i32) + IVec2::splat(margin),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Edge normals shared by every axis-aligned rectangle.
const WORLD_AXES: [Vec2; 2] = [Vec2::X, Vec2::Y];

/// Narrowphase primitive tests for axis-aligned rectangles.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn project(rect: &Rect, axis: Vec2) -> Projection {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for corner in rect.corners() {
            let p = corner.dot(axis);
            min = min.min(p);
            max = max.max(p);
        }
        Projection { min, max }
    }

    fn projections_overlap(p0: Projection, p1: Projection) -> bool {
        !(p0.max < p1.min || p1.max < p0.min)
    }

    fn collide(a: &Rect, b: &Rect) -> bool {
        // Both shapes are axis aligned, so the world axes are the only candidate separators.
        WORLD_AXES
            .iter()
            .all(|&axis| Self::projections_overlap(Self::project(a, axis), Self::project(b, axis)))
    }
}

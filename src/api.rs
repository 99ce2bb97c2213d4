use glam::Vec2;

use crate::error::WorldError;
use crate::types::*;

/// Receiver of detected overlaps. How the report is surfaced is up to the implementor.
pub trait CollisionSink {
    fn report(&mut self, a: &str, b: &str);
}

/// Public API contract for the broadphase world.
pub trait CollisionWorldApi {
    /// Construct a new world with one grid per configured cell size.
    fn new(cfg: WorldConfig) -> Self
    where
        Self: Sized;

    // --- Lifecycle ---------------------------------------------------------

    /// Register a box and insert it into every grid at its current origin.
    fn add(&mut self, rect: Rect) -> Result<(), WorldError>;

    /// Overwrite a registered box's position/extent, re-bucket it in every grid
    /// and rebuild each grid's pending pair queue from its destination bucket.
    fn update(&mut self, id: &str, x: f32, y: f32, width: f32, height: f32) -> Result<(), WorldError>;

    /// Execute every grid's queue in grid order, reporting each overlapping pair.
    /// Queues are left intact; calling again without an update re-reports.
    fn process_collisions(&mut self, sink: &mut dyn CollisionSink) -> usize;

    /// Same as `process_collisions` but returns grid-tagged events.
    fn collect_collisions(&mut self) -> Vec<CollisionEvent>;

    // --- Queries -----------------------------------------------------------

    /// Look up a registered box.
    fn get(&self, id: &str) -> Option<&Rect>;

    /// Ids bucketed in the cell containing `(x, y)` of grid `grid`.
    fn query_cell(&self, grid: usize, x: f32, y: f32) -> Vec<BoxId>;
}

/// Exact overlap primitives for axis-aligned rectangles.
pub trait NarrowphaseApi {
    /// Project `rect` onto a unit `axis`.
    fn project(rect: &Rect, axis: Vec2) -> Projection;

    /// Closed-interval overlap; touching endpoints overlap.
    fn projections_overlap(p0: Projection, p1: Projection) -> bool;

    /// Separating-axis test restricted to the two world axes.
    fn collide(a: &Rect, b: &Rect) -> bool;
}

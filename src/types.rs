use glam::Vec2;

/// Stable, user-provided identifier of a box. Unique within a world.
pub type BoxId = String;

/// Discrete grid coordinate `(floor(x / cell), floor(y / cell))`.
pub type CellKey = (i32, i32);

/// Axis-aligned rectangle with its origin at the min corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub id: BoxId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Convenience constructor.
    pub fn new(id: impl Into<BoxId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Origin point used for bucketing. The extent is ignored.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The four corner points.
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.origin();
        let max = min + Vec2::new(self.width, self.height);
        [
            min,
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, max.y),
            max,
        ]
    }
}

/// Closed scalar interval of a shape projected onto an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

/// World-level configuration.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// One grid per entry, in this order. Typically a coarse and a finer size so
    /// neighbours split by one grid's cell boundary still share a bucket in another.
    pub cell_sizes: Vec<f32>,
    /// Enable internal timing instrumentation (adds small overhead when true).
    pub enable_timing: bool,
}

impl WorldConfig {
    pub fn with_cell_sizes(cell_sizes: impl Into<Vec<f32>>) -> Self {
        Self {
            cell_sizes: cell_sizes.into(),
            ..Default::default()
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cell_sizes: vec![100.0, 50.0],
            enable_timing: false,
        }
    }
}

/// One detected overlap, tagged with the grid whose queue found it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub grid: usize,
    pub a: BoxId,
    pub b: BoxId,
}

/// Debug statistics for the current state of the world.
#[derive(Copy, Clone, Debug, Default)]
pub struct WorldStats {
    pub entries: usize,
    pub grids: usize,
    /// Non-empty buckets summed over all grids.
    pub cells: usize,
    /// Pending pair tests summed over all queues.
    pub queued_pairs: usize,
}

/// Timing breakdown for the last `update` / `process_collisions` runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct WorldTiming {
    pub update_ms: f64,
    pub process_ms: f64,
    pub pairs_tested: usize,
    pub reports_emitted: usize,
}

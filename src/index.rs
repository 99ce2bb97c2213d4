use glam::Vec2;

use crate::grid::SpatialGrid;
use crate::queue::CollisionQueue;
use crate::types::*;

/// One resolution: a grid and the queue rebuilt from its buckets.
#[derive(Clone, Debug)]
pub struct GridLayer {
    pub grid: SpatialGrid,
    pub queue: CollisionQueue,
}

impl GridLayer {
    pub fn new(cell_size: f32) -> Self {
        Self {
            grid: SpatialGrid::new(cell_size),
            queue: CollisionQueue::new(),
        }
    }

    /// Re-bucket `rect` and rebuild the queue from its destination bucket.
    /// The queue is rebuilt even when the cell did not change.
    pub fn relocate_and_rebuild(&mut self, rect: &Rect, old: Vec2) -> bool {
        let changed = self.grid.relocate(rect, old);
        match self.grid.bucket(self.grid.key_of(rect)) {
            Some(bucket) => self.queue.rebuild(&rect.id, bucket),
            None => self.queue.clear(),
        }
        changed
    }
}

/// Several independent grids at different cell sizes, each paired with its own queue.
#[derive(Clone, Debug, Default)]
pub struct MultiResolutionIndex {
    layers: Vec<GridLayer>,
}

impl MultiResolutionIndex {
    pub fn new(cell_sizes: &[f32]) -> Self {
        Self {
            layers: cell_sizes.iter().map(|&cs| GridLayer::new(cs)).collect(),
        }
    }

    pub fn insert(&mut self, rect: &Rect) {
        for layer in &mut self.layers {
            layer.grid.insert(rect);
        }
    }

    /// Relocate in every grid, rebuilding each queue. Returns how many grids changed cell.
    pub fn relocate(&mut self, rect: &Rect, old: Vec2) -> usize {
        let mut changed = 0;
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if layer.relocate_and_rebuild(rect, old) {
                changed += 1;
            }
            log::debug!("grid {} queue rebuilt for {}: {} pairs", i, rect.id, layer.queue.len());
        }
        changed
    }

    pub fn layers(&self) -> &[GridLayer] {
        &self.layers
    }

    pub fn layer(&self, i: usize) -> Option<&GridLayer> {
        self.layers.get(i)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn queued_pairs(&self) -> usize {
        self.layers.iter().map(|l| l.queue.len()).sum()
    }

    pub fn cells(&self) -> usize {
        self.layers.iter().map(|l| l.grid.len_cells()).sum()
    }
}

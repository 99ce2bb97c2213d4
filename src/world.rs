use std::collections::HashMap;
use std::time::Instant;

use crate::api::{CollisionSink, CollisionWorldApi};
use crate::error::WorldError;
use crate::grid::SpatialGrid;
use crate::index::MultiResolutionIndex;
use crate::queue::CollisionQueue;
use crate::types::*;

/// Persistent broadphase world: owns every box and the multi-resolution index.
pub struct CollisionWorld {
    pub cfg: WorldConfig,

    entries: Vec<Rect>,
    key_to_idx: HashMap<BoxId, usize>,

    index: MultiResolutionIndex,

    // Timing for last operations (optional)
    last_timing: Option<WorldTiming>,
}

impl CollisionWorldApi for CollisionWorld {
    fn new(cfg: WorldConfig) -> Self {
        let index = MultiResolutionIndex::new(&cfg.cell_sizes);
        Self {
            cfg,
            entries: Vec::new(),
            key_to_idx: HashMap::new(),
            index,
            last_timing: None,
        }
    }

    fn add(&mut self, rect: Rect) -> Result<(), WorldError> {
        if self.key_to_idx.contains_key(&rect.id) {
            log::warn!("box with id {} is already registered, ignoring add", rect.id);
            return Err(WorldError::DuplicateId(rect.id));
        }
        self.index.insert(&rect);
        self.key_to_idx.insert(rect.id.clone(), self.entries.len());
        self.entries.push(rect);
        Ok(())
    }

    fn update(&mut self, id: &str, x: f32, y: f32, width: f32, height: f32) -> Result<(), WorldError> {
        let t0 = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let Some(&idx) = self.key_to_idx.get(id) else {
            log::warn!("box with id {} not found, add it first", id);
            return Err(WorldError::UnknownId(id.to_owned()));
        };

        let rect = &mut self.entries[idx];
        let old = rect.origin();
        rect.x = x;
        rect.y = y;
        rect.width = width;
        rect.height = height;

        self.index.relocate(&self.entries[idx], old);

        if let Some(t0) = t0 {
            let timing = self.last_timing.get_or_insert_with(WorldTiming::default);
            timing.update_ms = t0.elapsed().as_secs_f64() * 1000.0;
        }
        Ok(())
    }

    fn process_collisions(&mut self, sink: &mut dyn CollisionSink) -> usize {
        self.run_queues(|_, a, b| sink.report(a, b))
    }

    fn collect_collisions(&mut self) -> Vec<CollisionEvent> {
        let mut out = Vec::new();
        self.run_queues(|grid, a, b| {
            out.push(CollisionEvent {
                grid,
                a: a.to_owned(),
                b: b.to_owned(),
            })
        });
        out
    }

    fn get(&self, id: &str) -> Option<&Rect> {
        let idx = *self.key_to_idx.get(id)?;
        self.entries.get(idx)
    }

    fn query_cell(&self, grid: usize, x: f32, y: f32) -> Vec<BoxId> {
        self.index
            .layer(grid)
            .map(|l| l.grid.query_cell(x, y).into_iter().collect())
            .unwrap_or_default()
    }
}

impl CollisionWorld {
    /// Execute every queue in grid order. No cross-grid deduplication: a pair
    /// queued in several grids is reported once per grid.
    fn run_queues<F>(&mut self, mut on_hit: F) -> usize
    where
        F: FnMut(usize, &str, &str),
    {
        let t0 = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let entries = &self.entries;
        let key_to_idx = &self.key_to_idx;
        let lookup = |id: &str| key_to_idx.get(id).and_then(|&i| entries.get(i));

        let mut reports = 0;
        for (grid, layer) in self.index.layers().iter().enumerate() {
            reports += layer.queue.execute(lookup, |a, b| on_hit(grid, a, b));
        }

        if let Some(t0) = t0 {
            let pairs_tested = self.index.queued_pairs();
            let timing = self.last_timing.get_or_insert_with(WorldTiming::default);
            timing.process_ms = t0.elapsed().as_secs_f64() * 1000.0;
            timing.pairs_tested = pairs_tested;
            timing.reports_emitted = reports;
        }
        reports
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered boxes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.entries.iter()
    }

    pub fn grid_count(&self) -> usize {
        self.index.len()
    }

    pub fn grid(&self, i: usize) -> Option<&SpatialGrid> {
        self.index.layer(i).map(|l| &l.grid)
    }

    pub fn queue(&self, i: usize) -> Option<&CollisionQueue> {
        self.index.layer(i).map(|l| &l.queue)
    }

    pub fn index(&self) -> &MultiResolutionIndex {
        &self.index
    }

    /// Return debug stats for the current state.
    pub fn debug_stats(&self) -> WorldStats {
        WorldStats {
            entries: self.entries.len(),
            grids: self.index.len(),
            cells: self.index.cells(),
            queued_pairs: self.index.queued_pairs(),
        }
    }

    /// Return timing breakdown for the last `update`/`process_collisions` runs.
    pub fn timing(&self) -> Option<WorldTiming> { self.last_timing }
}

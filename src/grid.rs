use glam::Vec2;

use std::collections::{HashMap, HashSet};

use crate::types::*;

/// Smallest usable cell size; guards the key division.
const MIN_CELL_SIZE: f32 = 1e-5;

/// Single-resolution uniform hash grid. Boxes are bucketed by the cell holding
/// their origin point only; extents never span additional cells.
/// Bucket members keep insertion order, so pair order is reproducible.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<CellKey, Vec<BoxId>>,
}

impl SpatialGrid {
    /// Empty grid. Non-finite or non-positive sizes fall back to a tiny minimum.
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > MIN_CELL_SIZE {
            cell_size
        } else {
            MIN_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Effective cell size after clamping.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cell containing point `p`. Non-finite coordinates saturate (`NaN` maps to 0).
    pub fn world_to_cell(&self, p: Vec2) -> CellKey {
        let cs = self.cell_size;
        ((p.x / cs).floor() as i32, (p.y / cs).floor() as i32)
    }

    /// Cell of `rect`'s origin.
    pub fn key_of(&self, rect: &Rect) -> CellKey {
        self.world_to_cell(rect.origin())
    }

    /// Add `rect` to the bucket of its origin. Inserting the same id twice is a no-op.
    pub fn insert(&mut self, rect: &Rect) {
        let key = self.key_of(rect);
        self.insert_into(key, &rect.id);
    }

    /// Remove `rect` from the bucket of its current origin. Absent boxes are ignored.
    pub fn remove(&mut self, rect: &Rect) {
        let key = self.key_of(rect);
        self.remove_from(key, &rect.id);
    }

    /// Move `rect` from the bucket of `old` to the bucket of its current origin.
    /// Returns true if the cell key changed.
    pub fn relocate(&mut self, rect: &Rect, old: Vec2) -> bool {
        let old_key = self.world_to_cell(old);
        let new_key = self.key_of(rect);
        if old_key == new_key {
            return false;
        }
        self.remove_from(old_key, &rect.id);
        self.insert_into(new_key, &rect.id);
        log::debug!("{} moved from cell {:?} to {:?} (cell size {})", rect.id, old_key, new_key, self.cell_size);
        true
    }

    /// Members of the cell containing `(x, y)`; empty if the bucket does not exist.
    pub fn query_cell(&self, x: f32, y: f32) -> HashSet<BoxId> {
        self.bucket(self.world_to_cell(Vec2::new(x, y)))
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Union of every bucket.
    pub fn query_all(&self) -> HashSet<BoxId> {
        self.cells.values().flatten().cloned().collect()
    }

    /// Members of bucket `key` in insertion order.
    pub fn bucket(&self, key: CellKey) -> Option<&[BoxId]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// Whether any bucket holds `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.cells.values().flatten().any(|other| other == id)
    }

    /// Number of non-empty buckets.
    pub fn len_cells(&self) -> usize {
        self.cells.len()
    }

    fn insert_into(&mut self, key: CellKey, id: &str) {
        let ids = self.cells.entry(key).or_default();
        if !ids.iter().any(|other| other == id) {
            ids.push(id.to_owned());
        }
    }

    fn remove_from(&mut self, key: CellKey, id: &str) {
        if let Some(ids) = self.cells.get_mut(&key) {
            ids.retain(|other| other != id);
            if ids.is_empty() {
                self.cells.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query_cell() {
        let mut g = SpatialGrid::new(100.0);
        let r = Rect::new("1", 10.0, 10.0, 1.0, 1.0);
        g.insert(&r);
        assert_eq!(g.key_of(&r), (0, 0));
        assert!(g.query_cell(10.0, 10.0).contains("1"));
        assert!(g.query_cell(99.0, 0.0).contains("1"));
        assert!(g.query_cell(150.0, 10.0).is_empty());
    }

    #[test]
    fn test_negative_coordinates_floor() {
        let g = SpatialGrid::new(100.0);
        assert_eq!(g.world_to_cell(Vec2::new(-0.5, -100.0)), (-1, -1));
        assert_eq!(g.world_to_cell(Vec2::new(-100.5, 250.0)), (-2, 2));
    }

    #[test]
    fn test_bucketing_ignores_extent() {
        let mut g = SpatialGrid::new(10.0);
        g.insert(&Rect::new("wide", 5.0, 5.0, 100.0, 100.0));
        assert_eq!(g.len_cells(), 1);
        assert!(g.query_cell(50.0, 50.0).is_empty());
    }

    #[test]
    fn test_relocate_to_new_cell() {
        let mut g = SpatialGrid::new(100.0);
        let mut r = Rect::new("1", 10.0, 10.0, 1.0, 1.0);
        g.insert(&r);
        r.x = 150.0;
        assert!(g.relocate(&r, Vec2::new(10.0, 10.0)));
        assert!(!g.query_cell(10.0, 10.0).contains("1"));
        assert!(g.bucket((0, 0)).is_none());
        assert!(g.bucket((1, 0)).is_some_and(|ids| ids.iter().any(|id| id == "1")));
    }

    #[test]
    fn test_relocate_within_cell_is_noop() {
        let mut g = SpatialGrid::new(100.0);
        let mut r = Rect::new("1", 10.0, 10.0, 1.0, 1.0);
        g.insert(&r);
        g.insert(&Rect::new("2", 20.0, 20.0, 1.0, 1.0));
        r.x = 60.0;
        r.y = 60.0;
        assert!(!g.relocate(&r, Vec2::new(10.0, 10.0)));
        assert_eq!(g.len_cells(), 1);
        assert_eq!(g.query_cell(0.0, 0.0).len(), 2);
    }

    #[test]
    fn test_two_resolutions_diverge() {
        let mut coarse = SpatialGrid::new(100.0);
        let mut fine = SpatialGrid::new(50.0);
        let mut r = Rect::new("1", 10.0, 10.0, 1.0, 1.0);
        coarse.insert(&r);
        fine.insert(&r);
        r.x = 60.0;
        r.y = 60.0;
        let old = Vec2::new(10.0, 10.0);
        assert!(!coarse.relocate(&r, old));
        assert!(fine.relocate(&r, old));
        assert!(coarse.query_cell(60.0, 60.0).contains("1"));
        assert!(fine.query_cell(60.0, 60.0).contains("1"));
        assert!(!fine.query_cell(10.0, 10.0).contains("1"));
    }

    #[test]
    fn test_relocate_absent_box_still_inserts() {
        let mut g = SpatialGrid::new(10.0);
        let r = Rect::new("ghost", 25.0, 5.0, 1.0, 1.0);
        assert!(g.relocate(&r, Vec2::new(5.0, 5.0)));
        assert!(g.query_cell(25.0, 5.0).contains("ghost"));
        assert_eq!(g.len_cells(), 1);
    }

    #[test]
    fn test_remove_deletes_empty_bucket() {
        let mut g = SpatialGrid::new(10.0);
        let a = Rect::new("a", 1.0, 1.0, 1.0, 1.0);
        let b = Rect::new("b", 2.0, 2.0, 1.0, 1.0);
        g.insert(&a);
        g.insert(&b);
        g.remove(&a);
        assert_eq!(g.len_cells(), 1);
        assert!(!g.contains("a"));
        g.remove(&b);
        assert_eq!(g.len_cells(), 0);
        // idempotent
        g.remove(&b);
        assert_eq!(g.len_cells(), 0);
    }

    #[test]
    fn test_insert_deduplicates_by_id() {
        let mut g = SpatialGrid::new(10.0);
        let r = Rect::new("a", 1.0, 1.0, 1.0, 1.0);
        g.insert(&r);
        g.insert(&r);
        assert_eq!(g.query_cell(1.0, 1.0).len(), 1);
    }

    #[test]
    fn test_query_all_unions_buckets() {
        let mut g = SpatialGrid::new(10.0);
        for (i, x) in [0.0, 15.0, 33.0, 34.0].into_iter().enumerate() {
            g.insert(&Rect::new(i.to_string(), x, 0.0, 1.0, 1.0));
        }
        assert_eq!(g.len_cells(), 3);
        let all = g.query_all();
        assert_eq!(all.len(), 4);
        for id in ["0", "1", "2", "3"] {
            assert!(all.contains(id));
        }
    }

    #[test]
    fn test_invalid_cell_size_is_clamped() {
        assert_eq!(SpatialGrid::new(0.0).cell_size(), MIN_CELL_SIZE);
        assert_eq!(SpatialGrid::new(-5.0).cell_size(), MIN_CELL_SIZE);
        assert_eq!(SpatialGrid::new(f32::NAN).cell_size(), MIN_CELL_SIZE);
        assert_eq!(SpatialGrid::new(f32::INFINITY).cell_size(), MIN_CELL_SIZE);
    }

    #[test]
    fn test_infinite_cell_size_does_not_collapse_buckets() {
        let mut g = SpatialGrid::new(f32::INFINITY);
        g.insert(&Rect::new("a", -1e9, 0.0, 1.0, 1.0));
        g.insert(&Rect::new("b", 1e9, 0.0, 1.0, 1.0));
        assert_eq!(g.len_cells(), 2);
        assert_ne!(g.key_of(&Rect::new("a", -1e9, 0.0, 1.0, 1.0)), (0, 0));
    }

    #[test]
    fn test_bucket_keeps_insertion_order() {
        let mut g = SpatialGrid::new(10.0);
        for id in ["d", "a", "c", "b"] {
            g.insert(&Rect::new(id, 1.0, 1.0, 1.0, 1.0));
        }
        let mut e = Rect::new("e", 15.0, 1.0, 1.0, 1.0);
        g.insert(&e);
        e.x = 2.0;
        g.relocate(&e, Vec2::new(15.0, 1.0));
        g.remove(&Rect::new("c", 1.0, 1.0, 1.0, 1.0));
        let ids: Vec<&str> = g.bucket((0, 0)).unwrap().iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["d", "a", "b", "e"]);
    }

    #[test]
    fn test_nan_origin_lands_in_zero_cell() {
        let mut g = SpatialGrid::new(10.0);
        g.insert(&Rect::new("nan", f32::NAN, f32::NAN, 1.0, 1.0));
        assert!(g.bucket((0, 0)).is_some_and(|ids| ids.iter().any(|id| id == "nan")));
    }
}

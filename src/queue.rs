use crate::api::{CollisionSink, NarrowphaseApi};
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// Pending pairwise tests for one grid, run in FIFO order.
#[derive(Clone, Debug, Default)]
pub struct CollisionQueue {
    pairs: Vec<(BoxId, BoxId)>,
}

impl CollisionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn push(&mut self, a: BoxId, b: BoxId) {
        self.pairs.push((a, b));
    }

    /// Replace the queue with `(moved, other)` for every other member of `bucket`.
    pub fn rebuild<'a>(&mut self, moved: &str, bucket: impl IntoIterator<Item = &'a BoxId>) {
        self.pairs.clear();
        for other in bucket {
            if other != moved {
                self.pairs.push((moved.to_owned(), other.clone()));
            }
        }
    }

    pub fn pairs(&self) -> &[(BoxId, BoxId)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Run every pending test without consuming it. `lookup` resolves ids to
    /// current box state; pairs with an unresolvable id are skipped.
    /// Calls `on_hit` for each overlapping pair and returns the number of hits.
    pub fn execute<'a, L, F>(&self, lookup: L, mut on_hit: F) -> usize
    where
        L: Fn(&str) -> Option<&'a Rect>,
        F: FnMut(&str, &str),
    {
        let mut hits = 0;
        for (a, b) in &self.pairs {
            let (Some(ra), Some(rb)) = (lookup(a.as_str()), lookup(b.as_str())) else {
                continue;
            };
            log::trace!("testing {} vs {}", a, b);
            if Narrowphase::collide(ra, rb) {
                on_hit(a.as_str(), b.as_str());
                hits += 1;
            }
        }
        hits
    }

    /// `execute` reporting straight into a sink.
    pub fn execute_into<'a, L>(&self, lookup: L, sink: &mut dyn CollisionSink) -> usize
    where
        L: Fn(&str) -> Option<&'a Rect>,
    {
        self.execute(lookup, |a, b| sink.report(a, b))
    }
}

//! gridbonk: multi-resolution uniform-grid broadphase with deferred AABB overlap checks

pub mod types;
pub mod api;
pub mod error;
pub mod narrowphase;
pub mod grid;
pub mod queue;
pub mod index;
pub mod sink;
pub mod world;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::WorldError;
pub use crate::grid::SpatialGrid;
pub use crate::queue::CollisionQueue;
pub use crate::index::{GridLayer, MultiResolutionIndex};
pub use crate::sink::LogSink;
pub use crate::world::CollisionWorld;

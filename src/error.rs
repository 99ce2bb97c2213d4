use thiserror::Error;

use crate::types::BoxId;

/// Non-fatal world errors. The rejected operation leaves the world untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("box with id {0} not found, add it first")]
    UnknownId(BoxId),

    #[error("box with id {0} is already registered")]
    DuplicateId(BoxId),
}

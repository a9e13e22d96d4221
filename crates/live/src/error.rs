use thiserror::Error;

use crate::list::ListId;

/// Errors from mutating a live list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiveListError {
    /// The subscription was torn down; the list no longer accepts updates
    #[error("Live list {list_id} is frozen")]
    Frozen { list_id: ListId },
}

pub type LiveListResult<T> = std::result::Result<T, LiveListError>;

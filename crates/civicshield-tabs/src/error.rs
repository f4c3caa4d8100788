//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab order must list {expected} tabs, got {actual}")]
    OrderLengthMismatch { expected: usize, actual: usize },

    #[error("Tab not open: {0}")]
    NotOpen(String),

    #[error("Tab listed more than once: {0}")]
    DuplicateInOrder(String),
}

//! Errors a progression transition can reject with.
//!
//! Every variant is recoverable: the state the call started from is left
//! untouched.

/// Why a log or purchase was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("food name cannot be empty")]
    EmptyFoodName,

    #[error("unknown category: {0} (expected meal, fruit, vegetable, water, or snack)")]
    UnknownCategory(String),

    #[error("unknown shop item: {0}")]
    UnknownItem(String),

    #[error("not enough points: {cost} needed, {available} available")]
    InsufficientPoints { cost: u64, available: u64 },
}

pub type Result<T> = core::result::Result<T, ProgressionError>;

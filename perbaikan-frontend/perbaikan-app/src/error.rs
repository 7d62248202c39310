use thiserror::Error;

use crate::motion::TargetId;

/// Failures inside the motion engine. None of them are fatal: callers log and skip the update.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MotionError {
    #[error("Container has no area ({width}x{height})")]
    ZeroArea { width: f64, height: f64 },
    #[error("Target {0:?} is not mounted")]
    MissingTarget(TargetId),
}

pub type MotionResult<T> = Result<T, MotionError>;

//! Domain errors for pawpal-core.
//!
//! Lookups never error (they return `Option`), and malformed priority labels
//! are tolerated. What remains are the operations that reject bad input.

use thiserror::Error;

use crate::ids::EntityKind;
use crate::{PetId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PawPalError {
    #[error("task {task_id} belongs to pet {task_pet_id}, not pet {pet_id}")]
    PetMismatch {
        task_id: TaskId,
        task_pet_id: PetId,
        pet_id: PetId,
    },

    #[error("task duration must be at least one minute")]
    InvalidDuration,

    #[error("invalid time of day '{0}' (expected HH:MM)")]
    InvalidTimeOfDay(String),

    #[error("unknown task category '{0}'")]
    UnknownCategory(String),

    #[error("no {0:?} ids left")]
    IdsExhausted(EntityKind),
}

pub type Result<T> = std::result::Result<T, PawPalError>;

//! pawpal-core: domain records and the daily pet-care scheduler.

pub mod error;
pub mod ids;
pub mod owner;
pub mod pet;
pub mod plan;
pub mod scheduler;
pub mod task;
pub mod time;

pub type OwnerId = u32;
pub type PetId = u32;
pub type TaskId = u32;

pub use error::PawPalError;
pub use ids::{EntityKind, IdGenerator};
pub use owner::Owner;
pub use pet::Pet;
pub use plan::SchedulePlan;
pub use scheduler::{filter_by_completion, filter_by_pet_name, sort_by_time, Scheduler};
pub use task::{priority_rank, Category, Priority, Task};
pub use time::{format_time_of_day, parse_time_of_day};

//! Pet profile and the care tasks it owns.

use serde::Serialize;

use crate::error::{PawPalError, Result};
use crate::task::Task;
use crate::{PetId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub age: u32,
    tasks: Vec<Task>,
}

impl Pet {
    pub fn new(id: PetId, name: impl Into<String>, species: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            age,
            tasks: Vec::new(),
        }
    }

    /// Attach a task. The task must already point at this pet; a mismatch is
    /// rejected and the collection is left untouched.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if task.pet_id != self.id {
            tracing::warn!(
                task_id = task.id,
                task_pet_id = task.pet_id,
                pet_id = self.id,
                "rejected task for another pet"
            );
            return Err(PawPalError::PetMismatch {
                task_id: task.id,
                task_pet_id: task.pet_id,
                pet_id: self.id,
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the first task with `id`. Returns it, or `None` if absent.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sum of task durations. Widened so any mix of valid durations fits.
    pub fn total_task_time(&self) -> u64 {
        self.tasks.iter().map(|t| u64::from(t.duration_minutes)).sum()
    }

    /// Returns false when no task has `id`.
    pub fn mark_task_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(t) => {
                t.mark_complete();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn task(id: TaskId, pet_id: PetId, minutes: u32) -> Task {
        Task::new(id, pet_id, format!("task {id}"), minutes).unwrap()
    }

    #[test]
    fn test_task_addition() {
        let mut pet = Pet::new(1, "Mochi", "Dog", 3);
        assert_eq!(pet.task_count(), 0);
        pet.add_task(task(101, 1, 10).with_priority(Priority::High)).unwrap();
        assert_eq!(pet.task_count(), 1);
    }

    #[test]
    fn test_mismatched_pet_rejected_without_mutation() {
        let mut pet = Pet::new(1, "Mochi", "Dog", 3);
        pet.add_task(task(1, 1, 10)).unwrap();

        let err = pet.add_task(task(2, 9, 10)).unwrap_err();
        assert_eq!(
            err,
            PawPalError::PetMismatch {
                task_id: 2,
                task_pet_id: 9,
                pet_id: 1
            }
        );
        assert_eq!(pet.task_count(), 1);
        assert!(pet.get_task(2).is_none());
    }

    #[test]
    fn test_remove_and_lookup() {
        let mut pet = Pet::new(1, "Luna", "Cat", 5);
        pet.add_task(task(1, 1, 10)).unwrap();
        pet.add_task(task(2, 1, 20)).unwrap();

        assert_eq!(pet.remove_task(1).map(|t| t.id), Some(1));
        assert!(pet.remove_task(1).is_none());
        assert_eq!(pet.tasks().iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert!(pet.get_task(99).is_none());
    }

    #[test]
    fn test_total_task_time() {
        let mut pet = Pet::new(1, "Luna", "Cat", 5);
        assert_eq!(pet.total_task_time(), 0);
        pet.add_task(task(1, 1, 10)).unwrap();
        pet.add_task(task(2, 1, 25)).unwrap();
        assert_eq!(pet.total_task_time(), 35);
    }

    #[test]
    fn test_total_task_time_past_u32_range() {
        let mut pet = Pet::new(1, "Luna", "Cat", 5);
        pet.add_task(task(1, 1, u32::MAX)).unwrap();
        pet.add_task(task(2, 1, 1)).unwrap();
        assert_eq!(pet.total_task_time(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_mark_task_complete() {
        let mut pet = Pet::new(1, "Luna", "Cat", 5);
        pet.add_task(task(1, 1, 10)).unwrap();
        assert!(pet.mark_task_complete(1));
        assert!(pet.get_task(1).unwrap().is_completed);
        assert!(!pet.mark_task_complete(42));
    }
}

//! Owner: the pets being cared for and the day's time budget.

use serde::Serialize;

use crate::pet::Pet;
use crate::task::Task;
use crate::{OwnerId, PetId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,

    /// Minutes available today. Range checks (10..=480) belong to whatever
    /// collects the value; the scheduler works for any budget.
    pub available_time_minutes: u32,

    pets: Vec<Pet>,
}

impl Owner {
    pub fn new(id: OwnerId, name: impl Into<String>, available_time_minutes: u32) -> Self {
        Self {
            id,
            name: name.into(),
            available_time_minutes,
            pets: Vec::new(),
        }
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    pub fn remove_pet(&mut self, id: PetId) -> Option<Pet> {
        let idx = self.pets.iter().position(|p| p.id == id)?;
        Some(self.pets.remove(idx))
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn get_pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn get_pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id == id)
    }

    /// Every task, in pet insertion order then task insertion order.
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.pets.iter().flat_map(|p| p.tasks()).collect()
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.pets.iter().find_map(|p| p.get_task(id))
    }

    pub fn total_task_time(&self) -> u64 {
        self.pets.iter().map(Pet::total_task_time).sum()
    }

    /// Name of the pet a task points at, or "Unknown" if that pet is gone.
    pub fn pet_name_for(&self, task: &Task) -> &str {
        self.get_pet(task.pet_id)
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn mark_task_complete(&mut self, id: TaskId) -> bool {
        self.pets.iter_mut().any(|p| p.mark_task_complete(id))
    }
}

//! Task model: one discrete pet-care activity.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PawPalError, Result};
use crate::{PetId, TaskId};

/// Kind of care a task represents. The set is closed; the form picker and
/// the CLI prompt only ever offer these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Walk,
    Feeding,
    Medication,
    Grooming,
    Enrichment,
    Training,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Walk,
        Category::Feeding,
        Category::Medication,
        Category::Grooming,
        Category::Enrichment,
        Category::Training,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Walk => "Walk",
            Category::Feeding => "Feeding",
            Category::Medication => "Medication",
            Category::Grooming => "Grooming",
            Category::Enrichment => "Enrichment",
            Category::Training => "Training",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PawPalError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PawPalError::UnknownCategory(wanted.to_string()))
    }
}

/// Task importance. Declaration order gives the total order Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Numeric rank used for sorting: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Lenient, case-insensitive parse. Anything unrecognized is `Low` so that
    /// scheduling stays total over arbitrary input.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from_label(&s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank of a raw priority label (see [`Priority::from_label`]).
pub fn priority_rank(label: &str) -> u8 {
    Priority::from_label(label).rank()
}

/// Core task type.
///
/// Tasks are plain values. A `SchedulePlan` keeps its own copies, so marking a
/// task complete on the owning pet never reaches back into an existing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub category: Category,

    /// Minutes, always > 0 (checked by [`Task::new`]).
    pub duration_minutes: u32,

    pub priority: Priority,

    /// Owning pet. A link, not a back-pointer; resolve through `Owner::get_pet`.
    pub pet_id: PetId,

    #[serde(default)]
    pub is_completed: bool,

    /// Optional time-of-day hint. Only used by the sort/filter views.
    #[serde(default)]
    pub time_of_day: Option<NaiveTime>,
}

impl Task {
    pub fn new(
        id: TaskId,
        pet_id: PetId,
        name: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self> {
        if duration_minutes == 0 {
            return Err(PawPalError::InvalidDuration);
        }
        Ok(Self {
            id,
            name: name.into(),
            category: Category::Walk,
            duration_minutes,
            priority: Priority::Medium,
            pet_id,
            is_completed: false,
            time_of_day: None,
        })
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_time(mut self, time_of_day: NaiveTime) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    pub fn priority_value(&self) -> u8 {
        self.priority.rank()
    }

    pub fn mark_complete(&mut self) {
        self.is_completed = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.is_completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("high", 3)]
    #[case("HIGH", 3)]
    #[case("Medium", 2)]
    #[case("low", 1)]
    #[case("urgent", 1)]
    #[case("", 1)]
    fn test_priority_rank_lookup(#[case] label: &str, #[case] expected: u8) {
        assert_eq!(priority_rank(label), expected);
    }

    #[test]
    fn test_priority_total_order() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_new_task_defaults() {
        let t = Task::new(1, 7, "Morning walk", 30).unwrap();
        assert!(!t.is_completed);
        assert_eq!(t.pet_id, 7);
        assert_eq!(t.priority, Priority::Medium);
        assert_eq!(t.time_of_day, None);
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(Task::new(1, 1, "nothing", 0), Err(PawPalError::InvalidDuration));
    }

    #[test]
    fn test_task_completion() {
        let mut t = Task::new(1, 1, "Morning walk", 30)
            .unwrap()
            .with_priority(Priority::High);
        t.mark_complete();
        assert!(t.is_completed);
        t.mark_incomplete();
        assert!(!t.is_completed);
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("grooming".parse::<Category>().unwrap(), Category::Grooming);
        assert_eq!(
            "Bath".parse::<Category>(),
            Err(PawPalError::UnknownCategory("Bath".to_string()))
        );
    }

    #[test]
    fn test_serde_priority_is_lenient() {
        let json = r#"{
            "id": 3, "name": "Brush fur", "category": "Grooming",
            "duration_minutes": 15, "priority": "Whenever", "pet_id": 2
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.priority, Priority::Low);
        assert!(!t.is_completed);

        let out = serde_json::to_value(&t).unwrap();
        assert_eq!(out["priority"], "low");
    }
}

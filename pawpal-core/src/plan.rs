//! SchedulePlan: the immutable result of one scheduling run.

use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedulePlan {
    scheduled: Vec<Task>,
    skipped: Vec<Task>,
    explanation: String,
    time_used: u32,
    time_available: u32,
}

impl SchedulePlan {
    pub(crate) fn new(
        scheduled: Vec<Task>,
        skipped: Vec<Task>,
        explanation: String,
        time_used: u32,
        time_available: u32,
    ) -> Self {
        Self {
            scheduled,
            skipped,
            explanation,
            time_used,
            time_available,
        }
    }

    /// Tasks that fit, in priority order.
    pub fn scheduled(&self) -> &[Task] {
        &self.scheduled
    }

    /// Tasks that did not fit, in priority order.
    pub fn skipped(&self) -> &[Task] {
        &self.skipped
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn time_used(&self) -> u32 {
        self.time_used
    }

    pub fn time_available(&self) -> u32 {
        self.time_available
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_available.saturating_sub(self.time_used)
    }

    pub fn scheduled_count(&self) -> usize {
        self.scheduled.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Scheduled {} tasks ({}/{} min), skipped {}",
            self.scheduled_count(),
            self.time_used,
            self.time_available,
            self.skipped_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_and_counts() {
        let walk = Task::new(1, 1, "walk", 30).unwrap();
        let brush = Task::new(2, 1, "brush", 15).unwrap();
        let plan = SchedulePlan::new(vec![walk], vec![brush], "why".to_string(), 30, 40);

        assert_eq!(plan.scheduled_count(), 1);
        assert_eq!(plan.skipped_count(), 1);
        assert_eq!(plan.time_remaining(), 10);
        assert_eq!(plan.summary(), "Scheduled 1 tasks (30/40 min), skipped 1");
    }

    #[test]
    fn serializes_for_presentation() {
        let walk = Task::new(1, 1, "walk", 30).unwrap();
        let plan = SchedulePlan::new(vec![walk], vec![], "fits".to_string(), 30, 60);

        let v = serde_json::to_value(&plan).unwrap();
        assert_eq!(v["time_used"], 30);
        assert_eq!(v["time_available"], 60);
        assert_eq!(v["scheduled"][0]["priority"], "medium");
        assert_eq!(v["skipped"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn default_plan_is_empty() {
        let plan = SchedulePlan::default();
        assert!(plan.scheduled().is_empty());
        assert!(plan.skipped().is_empty());
        assert_eq!(plan.time_remaining(), 0);
    }
}

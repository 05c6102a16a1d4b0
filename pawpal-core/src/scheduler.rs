//! Scheduler: priority-sorted greedy fit of care tasks into a time budget.
//!
//! Algorithm (deterministic, single pass):
//! 1) collect tasks in pet order, then task order
//! 2) stable sort by priority rank DESC (ties keep source order)
//! 3) schedule a task iff it fits the remaining minutes, otherwise skip it;
//!    decisions are never revisited
//! 4) explain the outcome
//!
//! This is greedy by sorted order, not knapsack-optimal: a skipped task's
//! minutes stay available to later (lower or equal priority) tasks, but the
//! skipped task itself is never reconsidered.

use std::cmp::Reverse;

use tracing::{debug, trace};

use crate::owner::Owner;
use crate::plan::SchedulePlan;
use crate::task::Task;

/// Stateless scheduling engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    pub fn new() -> Self {
        Self
    }

    /// Build today's plan for `owner`. Reads the owner, never mutates it; the
    /// plan carries its own copies of the tasks.
    pub fn generate_plan(&self, owner: &Owner) -> SchedulePlan {
        let budget = owner.available_time_minutes;
        let tasks: Vec<Task> = owner.all_tasks().into_iter().cloned().collect();
        let task_count = tasks.len();

        let sorted = Self::sort_by_priority(tasks);
        let (scheduled, skipped) = Self::fit_to_budget(sorted, budget);

        let time_used: u32 = scheduled.iter().map(|t| t.duration_minutes).sum();
        let explanation = Self::explain(
            task_count,
            scheduled.len(),
            skipped.len(),
            time_used,
            budget,
        );

        debug!(
            owner = %owner.name,
            tasks = task_count,
            budget,
            scheduled = scheduled.len(),
            skipped = skipped.len(),
            time_used,
            "generated plan"
        );

        SchedulePlan::new(scheduled, skipped, explanation, time_used, budget)
    }

    /// Highest priority first. `sort_by_key` is stable, so equal priorities
    /// keep their input order.
    pub fn sort_by_priority(mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by_key(|t| Reverse(t.priority.rank()));
        tasks
    }

    /// Greedy fit over already-sorted tasks. Returns (scheduled, skipped),
    /// each in the order the tasks were considered.
    pub fn fit_to_budget(tasks: Vec<Task>, available_minutes: u32) -> (Vec<Task>, Vec<Task>) {
        let mut remaining = available_minutes;
        let mut scheduled = Vec::new();
        let mut skipped = Vec::new();

        for task in tasks {
            if task.duration_minutes <= remaining {
                remaining -= task.duration_minutes;
                trace!(task_id = task.id, minutes = task.duration_minutes, remaining, "scheduled");
                scheduled.push(task);
            } else {
                trace!(task_id = task.id, minutes = task.duration_minutes, remaining, "skipped");
                skipped.push(task);
            }
        }

        (scheduled, skipped)
    }

    pub fn explain(
        task_count: usize,
        scheduled_count: usize,
        skipped_count: usize,
        time_used: u32,
        time_available: u32,
    ) -> String {
        if task_count == 0 {
            return "No tasks to schedule. Add some tasks for your pets!".to_string();
        }

        if skipped_count == 0 {
            return format!(
                "All {} tasks fit within your available time! Using {} of {} minutes.",
                scheduled_count, time_used, time_available
            );
        }

        format!(
            "Scheduled {} tasks using {} minutes. Skipped {} tasks due to time constraints. \
             Consider increasing available time or reducing task durations.",
            scheduled_count, time_used, skipped_count
        )
    }
}

/// Chronological by time of day. Untimed tasks go last; ties keep input order.
pub fn sort_by_time<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks.into_iter().collect();
    out.sort_by_key(|t| (t.time_of_day.is_none(), t.time_of_day));
    out
}

pub fn filter_by_completion<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    completed: bool,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|t| t.is_completed == completed)
        .collect()
}

/// Tasks whose owning pet (looked up through `owner`) is named `pet_name`,
/// ignoring ASCII case. Tasks pointing at an unknown pet never match.
pub fn filter_by_pet_name<'a>(
    owner: &Owner,
    tasks: impl IntoIterator<Item = &'a Task>,
    pet_name: &str,
) -> Vec<&'a Task> {
    let wanted = pet_name.trim();
    tasks
        .into_iter()
        .filter(|t| {
            owner
                .get_pet(t.pet_id)
                .is_some_and(|p| p.name.eq_ignore_ascii_case(wanted))
        })
        .collect()
}

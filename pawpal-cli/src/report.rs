//! Plain-text rendering of owners, tasks and plans for the terminal.

use pawpal_core::{format_time_of_day, Owner, SchedulePlan, Task};

const RULE_WIDTH: usize = 60;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

fn banner(title: &str) -> String {
    format!("{}\n{}\n{}\n", rule('='), title, rule('='))
}

/// One numbered row: `1. [HIGH  ] Morning walk         | Mochi    | 30 min`.
pub fn task_line(index: usize, task: &Task, owner: &Owner) -> String {
    let mut line = format!(
        "{}. [{:6}] {:20} | {:8} | {:2} min",
        index,
        task.priority.label().to_uppercase(),
        task.name,
        owner.pet_name_for(task),
        task.duration_minutes
    );
    if let Some(t) = task.time_of_day {
        line.push_str(&format!(" @ {}", format_time_of_day(t)));
    }
    if task.is_completed {
        line.push_str(" (done)");
    }
    line
}

/// Pets with their task counts, then every task with its id.
pub fn render_roster(owner: &Owner) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "Owner: {} ({} min available)\n",
        owner.name, owner.available_time_minutes
    ));

    if owner.pets().is_empty() {
        s.push_str("No pets yet.\n");
        return s;
    }

    s.push_str(&format!("\nPets ({}):\n", owner.pets().len()));
    for pet in owner.pets() {
        s.push_str(&format!(
            "- #{} {} ({}, {} years old) - {} tasks ({} min)\n",
            pet.id,
            pet.name,
            pet.species,
            pet.age,
            pet.task_count(),
            pet.total_task_time()
        ));
    }

    let tasks = owner.all_tasks();
    if tasks.is_empty() {
        s.push_str("\nNo tasks yet.\n");
        return s;
    }

    s.push_str(&format!(
        "\nTasks ({} total, {} min):\n",
        tasks.len(),
        owner.total_task_time()
    ));
    for task in tasks {
        s.push_str(&format!(
            "- #{} [{}] {} ({}, {}) - {} min{}\n",
            task.id,
            task.priority.label().to_uppercase(),
            task.name,
            owner.pet_name_for(task),
            task.category,
            task.duration_minutes,
            if task.is_completed { " (done)" } else { "" }
        ));
    }
    s
}

/// The full report: scheduled list, skipped list, explanation and summary.
pub fn render_plan(owner: &Owner, plan: &SchedulePlan) -> String {
    let mut s = String::new();
    s.push_str(&banner("TODAY'S SCHEDULE"));
    s.push('\n');

    s.push_str(&format!(
        "SCHEDULED TASKS ({} tasks, {} min):\n{}\n",
        plan.scheduled_count(),
        plan.time_used(),
        rule('-')
    ));
    for (i, task) in plan.scheduled().iter().enumerate() {
        s.push_str(&task_line(i + 1, task, owner));
        s.push('\n');
    }
    s.push('\n');

    if !plan.skipped().is_empty() {
        s.push_str(&format!(
            "SKIPPED TASKS ({} tasks):\n{}\n",
            plan.skipped_count(),
            rule('-')
        ));
        for (i, task) in plan.skipped().iter().enumerate() {
            s.push_str(&task_line(i + 1, task, owner));
            s.push('\n');
        }
        s.push('\n');
    }

    s.push_str(&banner("EXPLANATION"));
    s.push_str(plan.explanation());
    s.push_str("\n\n");

    s.push_str(&rule('='));
    s.push('\n');
    s.push_str(&plan.summary());
    s.push('\n');
    s.push_str(&rule('='));
    s.push('\n');
    s
}

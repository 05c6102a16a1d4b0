//! Canned two-pet household for a quick look at the scheduler.

use anyhow::Result;
use pawpal_core::{
    filter_by_completion, parse_time_of_day, sort_by_time, Category, EntityKind, IdGenerator,
    Owner, Pet, Priority, Scheduler, Task,
};

use crate::report::{render_plan, task_line};

struct DemoTask {
    name: &'static str,
    category: Category,
    minutes: u32,
    priority: Priority,
    at: Option<&'static str>,
}

const MOCHI_TASKS: [DemoTask; 3] = [
    DemoTask {
        name: "Morning walk",
        category: Category::Walk,
        minutes: 30,
        priority: Priority::High,
        at: Some("07:00"),
    },
    DemoTask {
        name: "Feed breakfast",
        category: Category::Feeding,
        minutes: 10,
        priority: Priority::High,
        at: Some("07:30"),
    },
    DemoTask {
        name: "Evening walk",
        category: Category::Walk,
        minutes: 30,
        priority: Priority::Medium,
        at: Some("18:00"),
    },
];

const LUNA_TASKS: [DemoTask; 3] = [
    DemoTask {
        name: "Feed dinner",
        category: Category::Feeding,
        minutes: 10,
        priority: Priority::High,
        at: Some("17:30"),
    },
    DemoTask {
        name: "Playtime with toys",
        category: Category::Enrichment,
        minutes: 20,
        priority: Priority::Medium,
        at: Some("15:00"),
    },
    DemoTask {
        name: "Brush fur",
        category: Category::Grooming,
        minutes: 15,
        priority: Priority::Low,
        at: None,
    },
];

fn build_pet(
    ids: &mut IdGenerator,
    name: &str,
    species: &str,
    age: u32,
    tasks: &[DemoTask],
) -> Result<Pet> {
    let mut pet = Pet::new(ids.next_id(EntityKind::Pet)?, name, species, age);
    for entry in tasks {
        let id = ids.next_id(EntityKind::Task)?;
        let mut task = Task::new(id, pet.id, entry.name, entry.minutes)?
            .with_category(entry.category)
            .with_priority(entry.priority);
        if let Some(at) = entry.at {
            task = task.with_time(parse_time_of_day(at)?);
        }
        pet.add_task(task)?;
    }
    Ok(pet)
}

/// Jordan with Mochi (dog) and Luna (cat), six tasks totalling 115 minutes.
pub fn demo_owner(ids: &mut IdGenerator, name: &str, available_minutes: u32) -> Result<Owner> {
    let mut owner = Owner::new(ids.next_id(EntityKind::Owner)?, name, available_minutes);
    owner.add_pet(build_pet(ids, "Mochi", "Dog", 3, &MOCHI_TASKS)?);
    owner.add_pet(build_pet(ids, "Luna", "Cat", 5, &LUNA_TASKS)?);
    Ok(owner)
}

pub fn render_demo(owner: &Owner) -> String {
    let mut s = String::new();
    s.push_str(&"=".repeat(60));
    s.push_str("\nPawPal+ Schedule Generator\n");
    s.push_str(&"=".repeat(60));
    s.push_str("\n\n");

    s.push_str(&format!("Owner: {}\n", owner.name));
    s.push_str(&format!("Available time: {} minutes\n\n", owner.available_time_minutes));

    for (i, pet) in owner.pets().iter().enumerate() {
        s.push_str(&format!(
            "Pet {}: {} ({}, {} years old)\n",
            i + 1,
            pet.name,
            pet.species,
            pet.age
        ));
    }

    s.push_str("\nTasks Created:\n");
    for pet in owner.pets() {
        s.push_str(&format!(
            "  {}: {} tasks ({} min total)\n",
            pet.name,
            pet.task_count(),
            pet.total_task_time()
        ));
    }
    s.push_str(&format!(
        "  Total time needed: {} minutes\n\n",
        owner.total_task_time()
    ));

    s.push_str("Open tasks by time of day:\n");
    let by_time = sort_by_time(filter_by_completion(owner.all_tasks(), false));
    for (i, task) in by_time.iter().enumerate() {
        s.push_str(&format!("  {}\n", task_line(i + 1, task, owner)));
    }
    s.push('\n');

    let plan = Scheduler::new().generate_plan(owner);
    s.push_str(&render_plan(owner, &plan));
    s
}

pub fn run_demo(name: &str, available_minutes: u32) -> Result<()> {
    let mut ids = IdGenerator::new();
    let owner = demo_owner(&mut ids, name, available_minutes)?;
    print!("{}", render_demo(&owner));
    Ok(())
}

//! Interactive planning session: build an owner, pets and tasks at the
//! prompt, then generate and review today's schedule.

use anyhow::Result;
use pawpal_core::{
    filter_by_completion, filter_by_pet_name, parse_time_of_day, sort_by_time, Category,
    EntityKind, IdGenerator, Owner, Pet, Priority, SchedulePlan, Scheduler, Task,
};
use std::io::{BufRead, Write};

use crate::config::{validate_budget, MAX_BUDGET_MINUTES, MIN_BUDGET_MINUTES};
use crate::report::{render_plan, render_roster, task_line};

const SPECIES: [&str; 4] = ["Dog", "Cat", "Bird", "Other"];
const MAX_PET_AGE: u32 = 30;
const MAX_TASK_MINUTES: u32 = 240;

const MENU: &str = "\
1) Add pet            2) Add task
3) Remove pet         4) Remove task
5) Mark task complete 6) Show pets and tasks
7) Open tasks by time 8) Change available time
9) Generate schedule  0) Quit";

pub struct Session<R, W> {
    input: R,
    out: W,
    eof: bool,
    ids: IdGenerator,
    owner: Owner,
    scheduler: Scheduler,
    last_plan: Option<SchedulePlan>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, owner_name: &str, available_minutes: u32) -> Result<Self> {
        let mut ids = IdGenerator::new();
        let owner = Owner::new(ids.next_id(EntityKind::Owner)?, owner_name, available_minutes);
        Ok(Self {
            input,
            out,
            eof: false,
            ids,
            owner,
            scheduler: Scheduler::new(),
            last_plan: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "PawPal+ planner\n")?;

        let current = self.owner.name.clone();
        self.owner.name = self.prompt_default("Owner name", &current)?;
        self.change_budget()?;

        while !self.eof {
            writeln!(self.out, "\n{}", MENU)?;
            let choice = self.prompt("Choose")?;
            match choice.as_str() {
                "1" => self.add_pet()?,
                "2" => self.add_task()?,
                "3" => self.remove_pet()?,
                "4" => self.remove_task()?,
                "5" => self.complete_task()?,
                "6" => write!(self.out, "{}", render_roster(&self.owner))?,
                "7" => self.open_tasks_by_time()?,
                "8" => self.change_budget()?,
                "9" => self.generate()?,
                "0" | "q" | "quit" => break,
                "" => {}
                other => writeln!(self.out, "Unknown choice: {}", other)?,
            }
        }

        Ok(())
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn last_plan(&self) -> Option<&SchedulePlan> {
        self.last_plan.as_ref()
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}: ", label)?;
        self.out.flush().ok();
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            self.eof = true;
        }
        Ok(s.trim().to_string())
    }

    /// Blank input (or end of input) takes the default.
    fn prompt_default(&mut self, label: &str, default: &str) -> Result<String> {
        let s = self.prompt(&format!("{} [{}]", label, default))?;
        Ok(if s.is_empty() { default.to_string() } else { s })
    }

    fn change_budget(&mut self) -> Result<()> {
        loop {
            let current = self.owner.available_time_minutes.to_string();
            let raw = self.prompt_default("Available time (minutes)", &current)?;
            match raw.parse::<u32>() {
                Ok(minutes) => match validate_budget(minutes) {
                    Ok(minutes) => {
                        self.owner.available_time_minutes = minutes;
                        return Ok(());
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "rejected budget");
                        writeln!(
                            self.out,
                            "Please enter a time between {} and {} minutes",
                            MIN_BUDGET_MINUTES, MAX_BUDGET_MINUTES
                        )?
                    }
                },
                Err(_) => writeln!(self.out, "Please enter a valid number")?,
            }
            if self.eof {
                return Ok(());
            }
        }
    }

    fn add_pet(&mut self) -> Result<()> {
        let name = self.prompt("Pet name (blank to cancel)")?;
        if name.is_empty() {
            return Ok(());
        }
        let species_label = format!("Species ({})", SPECIES.join("/"));
        let species_raw = self.prompt_default(&species_label, "Dog")?;
        let species = SPECIES
            .iter()
            .find(|s| s.eq_ignore_ascii_case(&species_raw))
            .copied()
            .unwrap_or("Other");
        let age_raw = self.prompt_default("Age", "3")?;
        let Some(age) = age_raw.parse::<u32>().ok().filter(|a| *a <= MAX_PET_AGE) else {
            writeln!(self.out, "Age must be a number from 0 to {}", MAX_PET_AGE)?;
            return Ok(());
        };

        let pet = Pet::new(self.ids.next_id(EntityKind::Pet)?, name, species, age);
        writeln!(self.out, "Added {} the {}!", pet.name, pet.species)?;
        self.owner.add_pet(pet);
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        if self.owner.pets().is_empty() {
            writeln!(self.out, "Please add a pet first before adding tasks.")?;
            return Ok(());
        }

        let names: Vec<String> = self.owner.pets().iter().map(|p| p.name.clone()).collect();
        let pet_label = format!("For which pet? ({})", names.join(", "));
        let pet_name = self.prompt_default(&pet_label, &names[0])?;
        let Some(pet_id) = self
            .owner
            .pets()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&pet_name))
            .map(|p| p.id)
        else {
            writeln!(self.out, "No pet named {}", pet_name)?;
            return Ok(());
        };

        let title = self.prompt_default("Task name", "Morning walk")?;

        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let category_label = format!("Category ({})", labels.join("/"));
        let category_raw = self.prompt_default(&category_label, "Walk")?;
        let category = match category_raw.parse::<Category>() {
            Ok(c) => c,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        let duration_raw = self.prompt_default("Duration (min)", "20")?;
        let Some(duration) = duration_raw
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=MAX_TASK_MINUTES).contains(d))
        else {
            writeln!(self.out, "Duration must be a number from 1 to {}", MAX_TASK_MINUTES)?;
            return Ok(());
        };

        let priority_raw = self.prompt_default("Priority (high/medium/low)", "medium")?;
        let priority = Priority::from_label(&priority_raw);

        let time_raw = self.prompt("Time of day HH:MM (blank for none)")?;
        let time_of_day = if time_raw.is_empty() {
            None
        } else {
            match parse_time_of_day(&time_raw) {
                Ok(t) => Some(t),
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    return Ok(());
                }
            }
        };

        let id = self.ids.next_id(EntityKind::Task)?;
        let mut task = Task::new(id, pet_id, title, duration)?
            .with_category(category)
            .with_priority(priority);
        if let Some(t) = time_of_day {
            task = task.with_time(t);
        }

        let task_name = task.name.clone();
        let Some(pet) = self.owner.get_pet_mut(pet_id) else {
            return Ok(());
        };
        match pet.add_task(task) {
            Ok(()) => {
                let pet_name = pet.name.clone();
                writeln!(self.out, "Added '{}' for {}!", task_name, pet_name)?
            }
            Err(e) => writeln!(self.out, "Could not add task: {}", e)?,
        }
        Ok(())
    }

    fn remove_pet(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Pet id to remove")? else {
            return Ok(());
        };
        match self.owner.remove_pet(id) {
            Some(pet) => writeln!(self.out, "Deleted {}", pet.name)?,
            None => writeln!(self.out, "No pet with id {}", id)?,
        }
        Ok(())
    }

    fn remove_task(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Task id to remove")? else {
            return Ok(());
        };
        let removed = self
            .owner
            .find_task(id)
            .map(|t| t.pet_id)
            .and_then(|pet_id| self.owner.get_pet_mut(pet_id))
            .and_then(|pet| pet.remove_task(id));
        match removed {
            Some(task) => writeln!(self.out, "Deleted '{}'", task.name)?,
            None => writeln!(self.out, "No task with id {}", id)?,
        }
        Ok(())
    }

    fn complete_task(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Task id to mark complete")? else {
            return Ok(());
        };
        if self.owner.mark_task_complete(id) {
            writeln!(self.out, "Marked task {} complete", id)?;
        } else {
            writeln!(self.out, "No task with id {}", id)?;
        }
        Ok(())
    }

    fn open_tasks_by_time(&mut self) -> Result<()> {
        let pet_name = self.prompt("Pet name (blank for all)")?;
        let all = self.owner.all_tasks();
        let scoped = if pet_name.is_empty() {
            all
        } else {
            filter_by_pet_name(&self.owner, all, &pet_name)
        };
        let open = sort_by_time(filter_by_completion(scoped, false));

        let mut lines = Vec::with_capacity(open.len());
        for (i, task) in open.iter().enumerate() {
            lines.push(task_line(i + 1, task, &self.owner));
        }
        if lines.is_empty() {
            writeln!(self.out, "No open tasks.")?;
        } else {
            writeln!(self.out, "{}", lines.join("\n"))?;
        }
        Ok(())
    }

    fn generate(&mut self) -> Result<()> {
        if self.owner.pets().is_empty() {
            writeln!(self.out, "Please add at least one pet first.")?;
            return Ok(());
        }
        if self.owner.all_tasks().is_empty() {
            writeln!(self.out, "Please add at least one task first.")?;
            return Ok(());
        }
        let plan = self.scheduler.generate_plan(&self.owner);
        write!(self.out, "{}", render_plan(&self.owner, &plan))?;
        self.last_plan = Some(plan);
        Ok(())
    }

    fn prompt_id(&mut self, label: &str) -> Result<Option<u32>> {
        let raw = self.prompt(label)?;
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.trim_start_matches('#').parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.out, "Not an id: {}", raw)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Owner, Option<SchedulePlan>, String) {
        let mut session = Session::new(script.as_bytes(), Vec::new(), "Jordan", 120).unwrap();
        session.run().unwrap();
        let owner = session.owner().clone();
        let plan = session.last_plan().cloned();
        (owner, plan, String::from_utf8(session.out).unwrap())
    }

    #[test]
    fn end_of_input_keeps_defaults() {
        let (owner, plan, out) = run_script("");
        assert_eq!(owner.name, "Jordan");
        assert_eq!(owner.available_time_minutes, 120);
        assert!(plan.is_none());
        assert!(out.starts_with("PawPal+ planner"));
    }

    #[test]
    fn builds_household_and_plans() {
        let script = "\
Sam
5
abc
60
1
Mochi
dog
3
2
Mochi
Morning walk
Walk
30
high
07:30
2
mochi
Evening walk
walk
40
medium

9
0
";
        let (owner, plan, out) = run_script(script);
        assert_eq!(owner.name, "Sam");
        assert_eq!(owner.available_time_minutes, 60);
        assert!(out.contains("Please enter a time between 10 and 480 minutes"));
        assert!(out.contains("Please enter a valid number"));
        assert!(out.contains("Added Mochi the Dog!"));
        assert!(out.contains("Added 'Evening walk' for Mochi!"));

        let plan = plan.unwrap();
        assert_eq!(plan.scheduled().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(plan.skipped().iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert!(out.contains("Scheduled 1 tasks using 30 minutes. Skipped 1 tasks"));
    }

    #[test]
    fn guards_before_pets_and_tasks() {
        let (_, plan, out) = run_script("\n\n2\n9\n1\nLuna\ncat\n5\n9\n0\n");
        assert!(out.contains("Please add a pet first before adding tasks."));
        assert!(out.contains("Please add at least one pet first."));
        assert!(out.contains("Please add at least one task first."));
        assert!(plan.is_none());
    }

    #[test]
    fn complete_remove_and_time_view() {
        let script = "\
\n\n\
1\nMochi\n\n\n\
2\n\nBreakfast\nFeeding\n10\nhigh\n08:00\n\
2\n\nWalk\n\n30\nlow\n06:45\n\
2\n\nBrush\nGrooming\n15\nmedium\n\n\
5\n2\n\
7\n\n\
4\n#3\n\
4\n99\n\
6\n\
0\n";
        let (owner, _, out) = run_script(script);

        assert!(owner.find_task(2).unwrap().is_completed);
        assert!(owner.find_task(3).is_none());
        assert!(out.contains("Marked task 2 complete"));
        assert!(out.contains("Deleted 'Brush'"));
        assert!(out.contains("No task with id 99"));

        // Task 2 is done, so the time view only lists breakfast and the untimed brush.
        let view_start = out.find("1. [HIGH  ] Breakfast").unwrap();
        let brush = out[view_start..].find("2. [MEDIUM] Brush").unwrap();
        assert!(brush > 0);
        assert!(!out[view_start..view_start + brush].contains("Walk"));
    }

    #[test]
    fn rejects_unknown_category_and_bad_time() {
        let script = "\n\n1\nMochi\n\n\n2\n\nBath\nSpa\n2\n\nWalk\nWalk\n10\nlow\n7pm\n6\n0\n";
        let (owner, _, out) = run_script(script);
        assert!(out.contains("unknown task category 'Spa'"));
        assert!(out.contains("invalid time of day '7pm'"));
        assert!(owner.all_tasks().is_empty());
    }
}

//! Personalized tasks — narrative analysis → detected conditions →
//! synthesized routine → checkable task records.

use serde::Serialize;

use crate::conditions::detector::detect;
use crate::routine::synthesizer::{synthesize, Routine};
use crate::tasks::models::{Category, TaskRecord};
use crate::tasks::normalize::tasks_for_category;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedTasks {
    pub detected_conditions: Vec<&'static str>,
    pub tasks: Vec<TaskRecord>,
}

/// Flattens a routine into morning, evening then weekly tasks.
pub fn routine_tasks(routine: &Routine) -> Vec<TaskRecord> {
    let mut tasks = tasks_for_category(Category::Morning, &routine.morning);
    tasks.extend(tasks_for_category(Category::Evening, &routine.evening));
    tasks.extend(tasks_for_category(Category::Weekly, &routine.weekly));
    tasks
}

pub fn personalized_tasks(analysis: &str) -> PersonalizedTasks {
    let detected_conditions = detect(analysis);
    let routine = synthesize(&detected_conditions);

    PersonalizedTasks {
        tasks: routine_tasks(&routine),
        detected_conditions,
    }
}

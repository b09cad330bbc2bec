//! Task normalization shared by every parser stage: emoji tagging and
//! per-category id numbering.

use std::collections::HashMap;

use crate::tasks::models::{Category, TaskRecord};

/// Appends the category emoji unless the text already contains it.
/// Applying it twice is a no-op.
pub fn tag_with_emoji(category: Category, text: &str) -> String {
    match category.emoji() {
        Some(emoji) if !text.contains(emoji) => format!("{text} {emoji}"),
        _ => text.to_string(),
    }
}

impl TaskRecord {
    /// Builds an uncompleted, tagged task with id `<category>_<n>`.
    pub fn new(category: Category, n: usize, text: &str) -> Self {
        Self {
            id: format!("{}_{}", category.as_str(), n),
            text: tag_with_emoji(category, text),
            completed: false,
        }
    }
}

/// Hands out 1-based sequence numbers per category. One per parse call, so
/// numbering restarts for every response.
#[derive(Debug, Default)]
pub struct TaskNumbering {
    next: HashMap<Category, usize>,
}

impl TaskNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the next task in `category`.
    pub fn push(&mut self, category: Category, text: &str) -> TaskRecord {
        let n = self.next.entry(category).or_insert(0);
        *n += 1;
        TaskRecord::new(category, *n, text)
    }
}

/// Numbers `lines` as consecutive tasks of a single category.
pub fn tasks_for_category<I, S>(category: Category, lines: I) -> Vec<TaskRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| TaskRecord::new(category, i + 1, line.as_ref()))
        .collect()
}

use crate::tasks::models::TaskRecord;

/// Returned when no stage finds anything or any stage fails.
const DEFAULT_TASKS: &[(&str, &str)] = &[
    ("morning_1", "Cleanse with gentle cleanser 🌞"),
    ("morning_2", "Apply moisturizer 🌞"),
    ("morning_3", "Apply sunscreen SPF 30+ 🌞"),
    ("evening_1", "Double cleanse to remove makeup/sunscreen 🌙"),
    ("evening_2", "Apply treatment serum 🌙"),
    ("evening_3", "Apply moisturizer 🌙"),
    ("weekly_1", "Exfoliate once a week 📅"),
    ("weekly_2", "Use a hydrating mask 📅"),
];

pub fn default_tasks() -> Vec<TaskRecord> {
    DEFAULT_TASKS
        .iter()
        .map(|(id, text)| TaskRecord {
            id: id.to_string(),
            text: text.to_string(),
            completed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::models::Category;
    use crate::tasks::normalize::tag_with_emoji;

    #[test]
    fn test_default_list_spans_all_categories() {
        let ids: Vec<String> = default_tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "morning_1", "morning_2", "morning_3", "evening_1", "evening_2", "evening_3",
                "weekly_1", "weekly_2",
            ]
        );
    }

    #[test]
    fn test_default_tasks_are_pre_tagged() {
        for task in default_tasks() {
            let category = match task.id.split('_').next() {
                Some("morning") => Category::Morning,
                Some("evening") => Category::Evening,
                _ => Category::Weekly,
            };
            assert_eq!(tag_with_emoji(category, &task.text), task.text);
            assert!(!task.completed);
        }
    }
}

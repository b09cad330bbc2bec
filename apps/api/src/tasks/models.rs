use serde::{Deserialize, Serialize};

/// Routine time bucket a task belongs to. `Other` is only produced by
/// generic line sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Morning,
    Evening,
    Weekly,
    Other,
}

impl Category {
    /// The three routine categories, in output order.
    pub const ROUTINE: [Category; 3] = [Category::Morning, Category::Evening, Category::Weekly];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Morning => "morning",
            Category::Evening => "evening",
            Category::Weekly => "weekly",
            Category::Other => "other",
        }
    }

    /// Tag appended to task text. `Other` has none.
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            Category::Morning => Some("🌞"),
            Category::Evening => Some("🌙"),
            Category::Weekly => Some("📅"),
            Category::Other => None,
        }
    }
}

/// A single checkable routine step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Which parser stage produced a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStage {
    /// `BEGIN_<X>_TASKS` / `TASK:` / `END_<X>_TASKS` blocks.
    Markers,
    /// Loose "morning ... tasks" sections.
    Sections,
    /// Any line that reads like a skincare step.
    Lines,
    /// Hardcoded default list.
    Fallback,
}

/// Result of a single parser stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Empty,
    Tasks(Vec<TaskRecord>),
}

impl From<Vec<TaskRecord>> for StageOutcome {
    fn from(tasks: Vec<TaskRecord>) -> Self {
        if tasks.is_empty() {
            StageOutcome::Empty
        } else {
            StageOutcome::Tasks(tasks)
        }
    }
}

/// Parsed tasks together with the stage that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub stage: ParseStage,
    pub tasks: Vec<TaskRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_emoji_mapping() {
        assert_eq!(Category::Morning.emoji(), Some("🌞"));
        assert_eq!(Category::Evening.emoji(), Some("🌙"));
        assert_eq!(Category::Weekly.emoji(), Some("📅"));
        assert_eq!(Category::Other.emoji(), None);
    }

    #[test]
    fn test_task_record_serializes_with_expected_keys() {
        let task = TaskRecord {
            id: "morning_1".to_string(),
            text: "Wash face 🌞".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "morning_1", "text": "Wash face 🌞", "completed": false})
        );
    }

    #[test]
    fn test_parse_stage_serde_snake_case() {
        assert_eq!(serde_json::to_string(&ParseStage::Fallback).unwrap(), r#""fallback""#);
        let stage: ParseStage = serde_json::from_str(r#""markers""#).unwrap();
        assert_eq!(stage, ParseStage::Markers);
    }

    #[test]
    fn test_stage_outcome_from_empty_vec_is_empty() {
        assert_eq!(StageOutcome::from(Vec::new()), StageOutcome::Empty);
    }
}

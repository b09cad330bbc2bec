//! Structured task parser — turns a model response into routine tasks.
//!
//! Stages run in order and the first one to produce tasks wins:
//!
//! 1. `Markers`  — `BEGIN_<X>_TASKS` / `TASK:` / `END_<X>_TASKS` blocks
//! 2. `Sections` — loose "morning ... tasks" regions up to the next category word
//! 3. `Lines`    — any line that reads like a skincare step
//! 4. `Fallback` — the hardcoded default list
//!
//! A stage error skips straight to the fallback. Parsing never fails.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::tasks::fallback::default_tasks;
use crate::tasks::models::{Category, ParseOutcome, ParseStage, StageOutcome, TaskRecord};
use crate::tasks::normalize::{tasks_for_category, TaskNumbering};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid {stage:?} pattern: {source}")]
    Pattern {
        stage: ParseStage,
        source: regex::Error,
    },
}

type StageFn = fn(&str) -> Result<StageOutcome, ParseError>;

const PIPELINE: &[(ParseStage, StageFn)] = &[
    (ParseStage::Markers, parse_marker_blocks),
    (ParseStage::Sections, parse_loose_sections),
    (ParseStage::Lines, parse_task_lines),
];

/// Lines shorter than this (in characters) are never treated as tasks by
/// the heuristic stages.
const MIN_HEURISTIC_LINE_CHARS: usize = 10;

/// Words that make a line look like a skincare step.
const STEP_KEYWORDS: &[&str] = &["cleanse", "apply", "use", "moisturize", "exfoliate", "sunscreen"];

const TASK_PREFIX: &str = "TASK:";

static MARKER_BLOCKS: LazyLock<Result<Vec<(Category, Regex)>, regex::Error>> =
    LazyLock::new(|| -> Result<Vec<(Category, Regex)>, regex::Error> {
        Category::ROUTINE
            .iter()
            .map(|&category| {
                let tag = category.as_str().to_uppercase();
                Regex::new(&format!(r"(?s)BEGIN_{tag}_TASKS\n(.*?)\nEND_{tag}_TASKS"))
                    .map(|re| (category, re))
            })
            .collect()
    });

struct SectionPatterns {
    sections: Vec<(Category, Regex)>,
    enumerated: Regex,
}

static SECTION_PATTERNS: LazyLock<Result<SectionPatterns, regex::Error>> =
    LazyLock::new(|| -> Result<SectionPatterns, regex::Error> {
        let sections = Category::ROUTINE
            .iter()
            .map(|&category| {
                let others: Vec<&str> = Category::ROUTINE
                    .iter()
                    .filter(|&&other| other != category)
                    .map(|other| other.as_str())
                    .collect();
                let pattern = format!(
                    r"(?is){}.*?tasks?(.*?)(?:{}|$)",
                    category.as_str(),
                    others.join("|")
                );
                Regex::new(&pattern).map(|re| (category, re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SectionPatterns {
            sections,
            enumerated: Regex::new(r"^[0-9]+\.")?,
        })
    });

/// Parses a model response into tasks. Always returns a non-empty list.
#[allow(dead_code)] // HTTP handlers use `parse_tasks_detailed`
pub fn parse_tasks(response: &str) -> Vec<TaskRecord> {
    parse_tasks_detailed(response).tasks
}

/// Like [`parse_tasks`], also reporting which stage produced the tasks.
pub fn parse_tasks_detailed(response: &str) -> ParseOutcome {
    let normalized = normalize_response(response);
    debug!(
        "Parsing response for tasks, preview: {:?}",
        normalized.chars().take(100).collect::<String>()
    );

    match run_pipeline(&normalized) {
        Ok(Some(outcome)) => {
            info!(
                "Extracted {} task(s) via {:?} stage",
                outcome.tasks.len(),
                outcome.stage
            );
            outcome
        }
        Ok(None) => {
            warn!("No stage produced tasks, using default task list");
            fallback_outcome()
        }
        Err(e) => {
            warn!("Task parsing failed, using default task list: {e}");
            fallback_outcome()
        }
    }
}

fn run_pipeline(normalized: &str) -> Result<Option<ParseOutcome>, ParseError> {
    for &(stage, run) in PIPELINE {
        match run(normalized)? {
            StageOutcome::Tasks(tasks) => return Ok(Some(ParseOutcome { stage, tasks })),
            StageOutcome::Empty => debug!("{stage:?} stage found no tasks"),
        }
    }
    Ok(None)
}

fn fallback_outcome() -> ParseOutcome {
    ParseOutcome {
        stage: ParseStage::Fallback,
        tasks: default_tasks(),
    }
}

fn normalize_response(response: &str) -> String {
    response.replace("\r\n", "\n").trim().to_string()
}

/// Stage 1: strict `BEGIN_<X>_TASKS` ... `END_<X>_TASKS` blocks. A category
/// with no complete block contributes nothing.
fn parse_marker_blocks(text: &str) -> Result<StageOutcome, ParseError> {
    let blocks = MARKER_BLOCKS
        .as_ref()
        .map_err(|e| pattern_error(ParseStage::Markers, e))?;

    let mut tasks = Vec::new();
    for (category, re) in blocks {
        let Some(body) = re.captures(text).and_then(|caps| caps.get(1)) else {
            debug!("{} marker block not found", category.as_str());
            continue;
        };

        let steps: Vec<&str> = body
            .as_str()
            .lines()
            .filter_map(|line| line.trim().strip_prefix(TASK_PREFIX))
            .map(str::trim)
            .collect();

        debug!("Found {} {} task(s) in marker block", steps.len(), category.as_str());
        tasks.extend(tasks_for_category(*category, steps));
    }

    Ok(tasks.into())
}

/// Stage 2: for each category, the region after the first
/// "<category> ... task(s)" up to the next other-category word or the end.
fn parse_loose_sections(text: &str) -> Result<StageOutcome, ParseError> {
    let patterns = SECTION_PATTERNS
        .as_ref()
        .map_err(|e| pattern_error(ParseStage::Sections, e))?;

    let mut tasks = Vec::new();
    for (category, re) in &patterns.sections {
        let Some(region) = re.captures(text).and_then(|caps| caps.get(1)) else {
            continue;
        };

        let steps: Vec<&str> = region
            .as_str()
            .lines()
            .map(str::trim)
            .filter(|line| is_section_step(line, &patterns.enumerated))
            .collect();

        tasks.extend(tasks_for_category(*category, steps));
    }

    Ok(tasks.into())
}

fn is_section_step(line: &str, enumerated: &Regex) -> bool {
    let lower = line.to_lowercase();
    line.chars().count() > MIN_HEURISTIC_LINE_CHARS
        && !line.starts_with('#')
        && !lower.contains("task")
        && !lower.contains("routine")
        && !enumerated.is_match(line)
}

/// Stage 3: every line that mentions a skincare action, categorised by the
/// time-of-day words or emoji it contains.
fn parse_task_lines(text: &str) -> Result<StageOutcome, ParseError> {
    let mut numbering = TaskNumbering::new();

    let tasks: Vec<_> = text
        .lines()
        .map(str::trim)
        .filter(|line| looks_like_step(line))
        .map(|line| numbering.push(classify_line(line), line))
        .collect();

    Ok(tasks.into())
}

fn looks_like_step(line: &str) -> bool {
    if line.chars().count() <= MIN_HEURISTIC_LINE_CHARS
        || line.contains("BEGIN_")
        || line.contains("END_")
    {
        return false;
    }
    let lower = line.to_lowercase();
    STEP_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn classify_line(line: &str) -> Category {
    let lower = line.to_lowercase();
    if lower.contains("morning") || line.contains("🌞") {
        Category::Morning
    } else if lower.contains("evening") || lower.contains("night") || line.contains("🌙") {
        Category::Evening
    } else if lower.contains("weekly") || lower.contains("once a week") || line.contains("📅") {
        Category::Weekly
    } else {
        Category::Other
    }
}

fn pattern_error(stage: ParseStage, source: &regex::Error) -> ParseError {
    ParseError::Pattern {
        stage,
        source: source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MARKERS: &str = "BEGIN_MORNING_TASKS
TASK: Cleanse with a gentle gel cleanser
TASK: Apply 2.5% benzoyl peroxide to affected areas
TASK: Apply SPF 30+ sunscreen 🌞
END_MORNING_TASKS

BEGIN_EVENING_TASKS
TASK: Remove makeup with micellar water
TASK: Apply adapalene gel
END_EVENING_TASKS

BEGIN_WEEKLY_TASKS
TASK: Use a salicylic acid mask
END_WEEKLY_TASKS";

    const LOOSE_SECTIONS: &str = "Here is your plan.
Morning tasks:
- Cleanse with a gentle foaming cleanser
- Apply SPF 50 mineral sunscreen
Evening tasks:
- Remove makeup with micellar water
- Apply 0.1% adapalene gel to affected areas
Weekly tasks:
- Exfoliate with a 10% glycolic acid pad";

    const PROSE: &str = "Your skin shows mild dryness.
Every morning cleanse with lukewarm water
Apply a rich cream at night
Use a clay mask once a week
Remember to use sunscreen daily";

    fn ids(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn marker_response(morning: usize, evening: usize, weekly: usize) -> String {
        let mut out = String::new();
        for (tag, count) in [("MORNING", morning), ("EVENING", evening), ("WEEKLY", weekly)] {
            if count == 0 {
                continue;
            }
            out.push_str(&format!("BEGIN_{tag}_TASKS\n"));
            for i in 1..=count {
                out.push_str(&format!("TASK: {tag} step number {i}\n"));
            }
            out.push_str(&format!("END_{tag}_TASKS\n\n"));
        }
        out
    }

    #[test]
    fn test_single_marker_task() {
        let tasks = parse_tasks("BEGIN_MORNING_TASKS\nTASK: Wash face\nEND_MORNING_TASKS");
        assert_eq!(
            tasks,
            vec![TaskRecord {
                id: "morning_1".to_string(),
                text: "Wash face 🌞".to_string(),
                completed: false,
            }]
        );
    }

    #[test]
    fn test_full_marker_response() {
        let outcome = parse_tasks_detailed(FULL_MARKERS);
        assert_eq!(outcome.stage, ParseStage::Markers);
        assert_eq!(
            ids(&outcome.tasks),
            vec!["morning_1", "morning_2", "morning_3", "evening_1", "evening_2", "weekly_1"]
        );
        assert_eq!(outcome.tasks[2].text, "Apply SPF 30+ sunscreen 🌞");
        assert_eq!(outcome.tasks[4].text, "Apply adapalene gel 🌙");
        assert_eq!(outcome.tasks[5].text, "Use a salicylic acid mask 📅");
    }

    #[test]
    fn test_marker_counts_and_ids_match_task_lines() {
        for (n, m, k) in [(1, 0, 0), (3, 3, 2), (0, 2, 1), (5, 1, 4)] {
            let tasks = parse_tasks(&marker_response(n, m, k));
            assert_eq!(tasks.len(), n + m + k, "counts {n}/{m}/{k}");

            let expected: Vec<String> = (1..=n)
                .map(|i| format!("morning_{i}"))
                .chain((1..=m).map(|i| format!("evening_{i}")))
                .chain((1..=k).map(|i| format!("weekly_{i}")))
                .collect();
            assert_eq!(ids(&tasks), expected);

            for task in &tasks {
                let emoji = match task.id.split('_').next() {
                    Some("morning") => "🌞",
                    Some("evening") => "🌙",
                    _ => "📅",
                };
                assert!(task.text.ends_with(emoji), "{} missing {emoji}", task.text);
            }
        }
    }

    #[test]
    fn test_crlf_and_padding_normalized() {
        let tasks =
            parse_tasks("  \r\nBEGIN_EVENING_TASKS\r\nTASK: Apply retinol\r\nEND_EVENING_TASKS\r\n  ");
        assert_eq!(ids(&tasks), vec!["evening_1"]);
        assert_eq!(tasks[0].text, "Apply retinol 🌙");
    }

    #[test]
    fn test_marker_body_ignores_non_task_lines() {
        let response = "BEGIN_WEEKLY_TASKS\nHere are some ideas\n   TASK:   Exfoliate gently  \n- not a task\nEND_WEEKLY_TASKS";
        let tasks = parse_tasks(response);
        assert_eq!(ids(&tasks), vec!["weekly_1"]);
        assert_eq!(tasks[0].text, "Exfoliate gently 📅");
    }

    #[test]
    fn test_unterminated_block_does_not_block_other_categories() {
        let response = "BEGIN_MORNING_TASKS\nTASK: Wash face\n\nBEGIN_EVENING_TASKS\nTASK: Apply retinol\nEND_EVENING_TASKS";
        let outcome = parse_tasks_detailed(response);
        assert_eq!(outcome.stage, ParseStage::Markers);
        assert_eq!(ids(&outcome.tasks), vec!["evening_1"]);
    }

    #[test]
    fn test_marker_tasks_win_over_loose_lines() {
        let response = "Apply sunscreen every morning before going out
Use a hydrating serum at night for best results
BEGIN_MORNING_TASKS
TASK: Wash face
END_MORNING_TASKS
Remember to exfoliate once a week with a gentle scrub";
        let outcome = parse_tasks_detailed(response);
        assert_eq!(outcome.stage, ParseStage::Markers);
        assert_eq!(ids(&outcome.tasks), vec!["morning_1"]);
        assert_eq!(outcome.tasks[0].text, "Wash face 🌞");
    }

    #[test]
    fn test_loose_sections_stage() {
        let outcome = parse_tasks_detailed(LOOSE_SECTIONS);
        assert_eq!(outcome.stage, ParseStage::Sections);
        assert_eq!(
            ids(&outcome.tasks),
            vec!["morning_1", "morning_2", "evening_1", "evening_2", "weekly_1"]
        );
        assert_eq!(outcome.tasks[0].text, "- Cleanse with a gentle foaming cleanser 🌞");
        assert_eq!(outcome.tasks[4].text, "- Exfoliate with a 10% glycolic acid pad 📅");
    }

    #[test]
    fn test_loose_sections_skip_headings_enumerations_and_short_lines() {
        let response = "Morning tasks
# Morning skincare steps
1. Cleanse with a gentle foaming cleanser
Short one
Apply a light gel moisturizer
Follow your routine closely every day";
        let outcome = parse_tasks_detailed(response);
        assert_eq!(outcome.stage, ParseStage::Sections);
        assert_eq!(ids(&outcome.tasks), vec!["morning_1"]);
        assert_eq!(outcome.tasks[0].text, "Apply a light gel moisturizer 🌞");
    }

    #[test]
    fn test_loose_sections_keep_existing_emoji() {
        let response = "Weekly tasks\nExfoliate with a gentle AHA 📅";
        let tasks = parse_tasks(response);
        assert_eq!(tasks[0].text, "Exfoliate with a gentle AHA 📅");
    }

    #[test]
    fn test_generic_line_stage_classifies_lines() {
        let outcome = parse_tasks_detailed(PROSE);
        assert_eq!(outcome.stage, ParseStage::Lines);
        assert_eq!(
            ids(&outcome.tasks),
            vec!["morning_1", "evening_1", "weekly_1", "other_1"]
        );
        assert_eq!(outcome.tasks[0].text, "Every morning cleanse with lukewarm water 🌞");
        assert_eq!(outcome.tasks[1].text, "Apply a rich cream at night 🌙");
        assert_eq!(outcome.tasks[2].text, "Use a clay mask once a week 📅");
        assert_eq!(outcome.tasks[3].text, "Remember to use sunscreen daily");
    }

    #[test]
    fn test_generic_line_stage_numbers_each_category_independently() {
        let response = "Use a gentle cleanser daily\nApply moisturizer after washing\nApply retinol in the evening";
        let tasks = parse_tasks(response);
        assert_eq!(ids(&tasks), vec!["other_1", "other_2", "evening_1"]);
    }

    #[test]
    fn test_generic_line_stage_keywords_are_case_insensitive() {
        let tasks = parse_tasks("MOISTURIZE THOROUGHLY EVERY MORNING");
        assert_eq!(ids(&tasks), vec!["morning_1"]);
    }

    #[test]
    fn test_generic_line_stage_skips_marker_lines() {
        let response = "BEGIN_X apply cleanser gently\nEND_X apply cream gently";
        let outcome = parse_tasks_detailed(response);
        assert_eq!(outcome.stage, ParseStage::Fallback);
    }

    #[test]
    fn test_empty_response_yields_default_list() {
        let outcome = parse_tasks_detailed("");
        assert_eq!(outcome.stage, ParseStage::Fallback);
        assert_eq!(outcome.tasks, default_tasks());
        assert_eq!(outcome.tasks.len(), 8);
    }

    #[test]
    fn test_never_empty_for_arbitrary_input() {
        for input in [
            "",
            "   \n\n\t",
            "hello",
            "\u{0}\u{1}\u{7f} garbage ~~~ \u{fffd}\u{fffd}",
            "BEGIN_MORNING_TASKS",
            "END_WEEKLY_TASKS\nBEGIN_WEEKLY_TASKS",
            "🌞🌙📅",
        ] {
            let tasks = parse_tasks(input);
            assert!(tasks.len() >= 7, "input {input:?} produced {} tasks", tasks.len());
        }
    }

    #[test]
    fn test_ids_unique_within_result() {
        for input in [FULL_MARKERS, LOOSE_SECTIONS, PROSE, ""] {
            let tasks = parse_tasks(input);
            let mut seen = std::collections::HashSet::new();
            assert!(tasks.iter().all(|t| seen.insert(t.id.clone())), "duplicate id in {input:?}");
        }
    }

    #[test]
    fn test_patterns_compile() {
        assert!(MARKER_BLOCKS.is_ok());
        assert!(SECTION_PATTERNS.is_ok());
    }
}

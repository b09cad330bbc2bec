// Prompt contracts sent to the vision model by callers of this service.
//
// The task prompts are a direct contract with the task parser: every rung of
// the ladder must keep the BEGIN_<X>_TASKS / TASK: / END_<X>_TASKS tokens
// byte-identical to what `tasks::parser` matches.

use serde::Serialize;

use crate::conditions::catalog::CATALOG;

/// A complete model request, minus the image the caller attaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptSpec {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

const MAX_TOKENS: u32 = 1000;

/// Number of characters of each condition description quoted in the
/// analysis prompt's reference block.
const REFERENCE_DESCRIPTION_CHARS: usize = 50;

pub const ANALYSIS_SYSTEM: &str = "You are a dermatology AI assistant specialized in acne and \
    skin conditions analysis. Provide detailed, specific, and personalized advice based on visual \
    skin assessments. Always be thorough, empathetic, and practical in your recommendations.";

/// Narrative analysis prompt. Replace `{condition_reference}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this photo of my face and provide a detailed skin assessment with personalized recommendations. Please include:

1. SPECIFIC DIAGNOSIS: Identify the exact types of acne present (e.g., inflammatory papules, pustules, nodules, cystic acne, comedones, blackheads, whiteheads) and their specific locations on my face.

2. SEVERITY ASSESSMENT: Rate the severity on a scale from mild to severe and explain why.

3. ROOT CAUSES: Provide a detailed analysis of potential underlying causes including hormonal factors, diet, product usage, or environmental factors that might be contributing to my specific acne pattern.

4. PERSONALIZED TREATMENT PLAN: Recommend specific active ingredients (with percentages if relevant) and product types for my specific skin needs. Include morning and evening routines.

5. LIFESTYLE RECOMMENDATIONS: Suggest specific dietary changes, stress management techniques, or habit adjustments that would benefit my particular skin condition.

6. PROFESSIONAL TREATMENT OPTIONS: Suggest specific in-office treatments that would address my particular skin concerns if they appear moderate to severe.

Reference information on skin conditions: {condition_reference}

Make your advice extremely specific to what you observe in the image rather than generic. Use a compassionate but direct tone. Conclude with a brief encouraging message."#;

pub const TASK_SYSTEM: &str = "You are a dermatology AI assistant specialized in creating \
    personalized skincare routines based on facial analysis. Your primary goal is to create \
    actionable, specific tasks for the user's skincare routine based on what you observe in their \
    skin. DO NOT include any explanatory text - ONLY output the exact format with BEGIN/END \
    markers as specified in the user's request. Any additional text will break the system.";

const TASK_PROMPT: &str = r#"Analyze this photo of my face and provide a personalized skincare routine tasks list. Focus on creating actionable tasks for treating the specific skin conditions you observe.

IMPORTANT: Please format your response in a specific structured format that our system can easily parse:

BEGIN_MORNING_TASKS
TASK: [Morning task 1]
TASK: [Morning task 2]
TASK: [Morning task 3]
END_MORNING_TASKS

BEGIN_EVENING_TASKS
TASK: [Evening task 1]
TASK: [Evening task 2]
TASK: [Evening task 3]
END_EVENING_TASKS

BEGIN_WEEKLY_TASKS
TASK: [Weekly task 1]
TASK: [Weekly task 2]
END_WEEKLY_TASKS

You MUST follow this exact format with the BEGIN/END markers and TASK: prefix for each task.

Include the following in your recommendations:
1. Morning routine - Include cleansing, treatment products, moisturizer, and sunscreen
2. Evening routine - Include makeup removal (if needed), cleansing, treatment products, and moisturizer
3. Weekly treatments - Include exfoliation, masks, or other occasional treatments

Be specific about product ingredients and concentrations (e.g., "Apply 2.5% benzoyl peroxide to affected areas").
Add specific emojis for visual cues: 🌞 for morning tasks, 🌙 for evening tasks, and 📅 for weekly tasks.

Base your recommendations on what you observe in the image - be specific about the type of acne or skin conditions present and tailor the tasks accordingly.

DO NOT include any text outside the BEGIN/END markers. Your response should ONLY contain the three sections with their BEGIN/END markers and the tasks within them. Any explanations or additional text will break the parsing system."#;

pub const STRICT_TASK_SYSTEM: &str = "You are a dermatology AI assistant creating structured \
    skincare routines. You MUST follow the EXACT format below with no deviations. Your entire \
    response should ONLY contain these sections with tasks, nothing else.";

const STRICT_TASK_PROMPT: &str = r#"Analyze this photo and create a structured skincare routine. Your response MUST follow this EXACT format, with no additional text or explanations:

BEGIN_MORNING_TASKS
TASK: Cleanse with gentle cleanser 🌞
TASK: Apply treatment product 🌞
TASK: Apply moisturizer 🌞
TASK: Apply sunscreen 🌞
END_MORNING_TASKS

BEGIN_EVENING_TASKS
TASK: Remove makeup/sunscreen 🌙
TASK: Cleanse face 🌙
TASK: Apply treatment 🌙
TASK: Apply moisturizer 🌙
END_EVENING_TASKS

BEGIN_WEEKLY_TASKS
TASK: Exfoliate once a week 📅
TASK: Use hydrating mask 📅
END_WEEKLY_TASKS"#;

pub const MINIMAL_TASK_SYSTEM: &str =
    "You are generating a skincare routine in a specific format. Output ONLY the exact format below.";

const MINIMAL_TASK_PROMPT: &str = r#"Look at this skin photo and provide ONLY this format with your recommendations - nothing else:

BEGIN_MORNING_TASKS
TASK: Task 1 🌞
TASK: Task 2 🌞
TASK: Task 3 🌞
END_MORNING_TASKS

BEGIN_EVENING_TASKS
TASK: Task 1 🌙
TASK: Task 2 🌙
TASK: Task 3 🌙
END_EVENING_TASKS

BEGIN_WEEKLY_TASKS
TASK: Task 1 📅
TASK: Task 2 📅
END_WEEKLY_TASKS"#;

/// Task prompts from most to least descriptive, with falling temperature.
const TASK_LADDER: &[(&str, &str, f32)] = &[
    (TASK_SYSTEM, TASK_PROMPT, 0.4),
    (STRICT_TASK_SYSTEM, STRICT_TASK_PROMPT, 0.3),
    (MINIMAL_TASK_SYSTEM, MINIMAL_TASK_PROMPT, 0.2),
];

/// Number of rungs on the task prompt ladder.
pub const TASK_LADDER_LEN: usize = TASK_LADDER.len();

/// One line per catalog condition: name, truncated description and the two
/// leading topical ingredients.
pub fn condition_reference() -> String {
    CATALOG
        .iter()
        .map(|condition| {
            let description: String = condition
                .description
                .chars()
                .take(REFERENCE_DESCRIPTION_CHARS)
                .collect();
            let ingredients = condition
                .treatments
                .topical
                .iter()
                .take(2)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{}: {}... Key ingredients: {}",
                condition.name, description, ingredients
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn analysis_prompt() -> PromptSpec {
    PromptSpec {
        system: ANALYSIS_SYSTEM.to_string(),
        user: ANALYSIS_PROMPT_TEMPLATE.replace("{condition_reference}", &condition_reference()),
        temperature: 0.7,
        max_tokens: MAX_TOKENS,
    }
}

/// The task prompt for the given 1-based model attempt, or `None` past the
/// end of the ladder.
pub fn task_prompt(attempt: usize) -> Option<PromptSpec> {
    let index = attempt.checked_sub(1)?;
    TASK_LADDER
        .get(index)
        .map(|&(system, user, temperature)| PromptSpec {
            system: system.to_string(),
            user: user.to_string(),
            temperature,
            max_tokens: MAX_TOKENS,
        })
}

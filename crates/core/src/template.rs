//! Rendering of [`PromptParameters`] into the provider instruction block.
//!
//! The layout is fixed: every parameter appears exactly once, under its
//! label, in the order of [`labelled_fields`]. List-valued parameters are
//! flattened with the separators below.

use crate::params::PromptParameters;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// System-role instruction sent alongside every rendered block.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert prompt engineer. Your task is to generate the best possible prompt.";

/// Upper bound on the generated prompt, stated to the model in the footer.
pub const MAX_PROMPT_WORDS: usize = 150;

/// Separator used to flatten `keywords`.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// Separator used to flatten `references`.
pub const REFERENCE_SEPARATOR: &str = " | ";

/// Separator used to flatten `visual_aids` and `interactivity`.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Label/value pairs in render order, with list fields already flattened.
///
/// The vague prompt is not included; it is rendered quoted on its own line
/// above the labelled block.
pub fn labelled_fields(params: &PromptParameters) -> [(&'static str, String); 15] {
    [
        ("Purpose", params.purpose.clone()),
        ("Tone", params.tone.clone()),
        ("Complexity", params.complexity.clone()),
        ("Target Audience", params.target_audience.clone()),
        ("Format", params.format.clone()),
        ("Length", params.length.clone()),
        ("Keywords", params.keywords.join(KEYWORD_SEPARATOR)),
        ("Style", params.style.clone()),
        ("References", params.references.join(REFERENCE_SEPARATOR)),
        ("Vocabulary Level", params.vocabulary_level.clone()),
        ("Emotion/Intent", params.emotion.clone()),
        (
            "Cultural Considerations",
            params.cultural_considerations.clone(),
        ),
        ("Visual Aids", params.visual_aids.join(MULTI_VALUE_SEPARATOR)),
        (
            "Interactivity",
            params.interactivity.join(MULTI_VALUE_SEPARATOR),
        ),
        ("Restrictions", params.restrictions.clone()),
    ]
}

/// Render the full instruction block for a provider call.
pub fn render(params: &PromptParameters) -> String {
    let body = labelled_fields(params)
        .iter()
        .map(|(label, value)| format!("[{label}]: {value}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "[User's Vague Prompt]: \"{vague}\"\n\n{body}\n\n\
         Generate the most optimal and detailed prompt based on these parameters.\n\
         Generated prompt must be less than {MAX_PROMPT_WORDS} words long",
        vague = params.vague_prompt,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

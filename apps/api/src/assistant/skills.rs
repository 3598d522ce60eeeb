//! Skill extraction — turns the model's comma-separated reply into a bounded,
//! deduplicated list of title-cased skill labels.

use std::collections::HashSet;

use tracing::info;

use crate::assistant::generate_or_warn;
use crate::assistant::prompts::skill_extraction_prompt;
use crate::llm_client::TextGenerator;

/// Upper bound on skills kept from one reply.
pub const MAX_SKILLS: usize = 15;

/// Shown instead of an empty list. Not an error.
pub const NO_SKILLS_MESSAGE: &str =
    "No key skills detected or an error occurred during skill extraction.";

/// Interprets a skill-extraction reply.
///
/// 1. split on `,`
/// 2. strip newlines, trim
/// 3. drop empties
/// 4. title-case
/// 5. dedup (first occurrence wins)
/// 6. keep at most `MAX_SKILLS`
pub fn interpret_skills_reply(reply: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    reply
        .split(',')
        .map(|token| token.replace(['\n', '\r'], ""))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .map(|token| title_case(&token))
        .filter(|skill| seen.insert(skill.clone()))
        .take(MAX_SKILLS)
        .collect()
}

/// Upper-cases a letter when the previous character is not a letter,
/// lower-cases it otherwise. `"machine LEARNING"` → `"Machine Learning"`,
/// `"node.js"` → `"Node.Js"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// Asks the model for the job's key skills.
///
/// A failed call yields an empty list and a warning; callers show
/// `NO_SKILLS_MESSAGE` rather than an error.
pub async fn analyze_job_description(
    generator: &dyn TextGenerator,
    job_description: &str,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let prompt = skill_extraction_prompt(job_description);
    let Some(reply) = generate_or_warn(generator, "skill extraction", &prompt, warnings).await
    else {
        return Vec::new();
    };

    let skills = interpret_skills_reply(&reply);
    info!("Extracted {} key skills", skills.len());
    skills
}

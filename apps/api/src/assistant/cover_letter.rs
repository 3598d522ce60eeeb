use tracing::info;

use crate::assistant::generate_or_warn;
use crate::assistant::prompts::cover_letter_prompt;
use crate::llm_client::TextGenerator;
use crate::models::profile::{CandidateProfile, JobContext};

pub const COVER_LETTER_FALLBACK: &str = "Could not generate cover letter.";

/// The whole reply is the letter; nothing is parsed out of it.
pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    job: &JobContext,
    profile: &CandidateProfile,
    required_skills: &[String],
    warnings: &mut Vec<String>,
) -> String {
    let prompt = cover_letter_prompt(job, profile, required_skills);
    match generate_or_warn(generator, "cover letter generation", &prompt, warnings).await {
        Some(letter) => {
            info!("Cover letter generated ({} chars)", letter.len());
            letter
        }
        None => COVER_LETTER_FALLBACK.to_string(),
    }
}

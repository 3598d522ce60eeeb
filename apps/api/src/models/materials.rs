use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resume advice returned alongside the cover letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    pub professional_summary: String,
    pub skills_to_highlight: String,
    pub keywords: String,
}

/// Everything produced by one form submission.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationMaterials {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub required_skills: Vec<String>,
    /// Neutral notice shown in place of the skill list when it is empty.
    pub skills_message: Option<String>,
    pub suggestions: SuggestionBundle,
    pub cover_letter: String,
    /// Non-fatal failures of external calls, in call order.
    pub warnings: Vec<String>,
}

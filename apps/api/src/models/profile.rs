use serde::{Deserialize, Serialize};

/// The applicant, as entered on the form. Nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub current_position: String,
    pub years_experience: u32,
    /// Free text, comma-separated.
    pub current_skills: String,
    pub resume_summary: String,
}

impl CandidateProfile {
    /// `current_skills` split on commas, trimmed, blanks dropped.
    pub fn skill_list(&self) -> Vec<String> {
        self.current_skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// The position being applied for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobContext {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
}

/// Request body of `POST /api/v1/materials`: every form field, flat.
///
/// Required: `job_description`, `name`, `email`, `job_title`, `company`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub job_description: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub job_title: String,
    pub company: String,
    pub current_position: String,
    pub years_experience: u32,
    pub current_skills: String,
    pub current_resume: String,
}

impl ApplicationForm {
    /// Labels of required fields that are blank after trimming, in form order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("job_description", &self.job_description),
            ("name", &self.name),
            ("email", &self.email),
            ("job_title", &self.job_title),
            ("company", &self.company),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn into_parts(self) -> (JobContext, CandidateProfile) {
        let job = JobContext {
            job_title: self.job_title,
            company: self.company,
            job_description: self.job_description,
        };
        let profile = CandidateProfile {
            name: self.name,
            email: self.email,
            phone: non_blank(self.phone),
            linkedin_url: non_blank(self.linkedin_url),
            current_position: self.current_position,
            years_experience: self.years_experience,
            current_skills: self.current_skills,
            resume_summary: self.current_resume,
        };
        (job, profile)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

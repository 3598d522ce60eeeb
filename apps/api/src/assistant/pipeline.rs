//! Form submission pipeline.
//!
//! Flow: validate_form → analyze_job_description → generate_resume_suggestions
//!       → generate_cover_letter → ApplicationMaterials.
//!
//! Calls run one after another. External failures never abort the run; they
//! become fallback content plus an entry in `warnings`.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::assistant::cover_letter::generate_cover_letter;
use crate::assistant::skills::{analyze_job_description, NO_SKILLS_MESSAGE};
use crate::assistant::suggestions::generate_resume_suggestions;
use crate::config::SuggestionSections;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::materials::ApplicationMaterials;
use crate::models::profile::{ApplicationForm, CandidateProfile, JobContext};

/// Upper bound of the years-of-experience input.
pub const MAX_YEARS_EXPERIENCE: u32 = 50;

const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields marked with *.";

/// Rejects a form with any blank required field as a single validation error.
pub fn validate_form(form: &ApplicationForm) -> Result<(), AppError> {
    let missing = form.missing_required_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "{REQUIRED_FIELDS_MESSAGE} Missing: {}",
            missing.join(", ")
        )));
    }

    if form.years_experience > MAX_YEARS_EXPERIENCE {
        return Err(AppError::Validation(format!(
            "years_experience must be between 0 and {MAX_YEARS_EXPERIENCE}"
        )));
    }

    Ok(())
}

/// Runs the three generation steps for an already-validated submission.
pub async fn generate_materials(
    generator: &dyn TextGenerator,
    job: &JobContext,
    profile: &CandidateProfile,
    mode: SuggestionSections,
) -> ApplicationMaterials {
    let generation_id = Uuid::new_v4();
    let mut warnings = Vec::new();
    info!(
        "Generating materials {generation_id} for '{}' at '{}'",
        job.job_title, job.company
    );

    // Step 1: key skills
    let required_skills =
        analyze_job_description(generator, &job.job_description, &mut warnings).await;

    // Step 2: summary + skills/keywords advice
    let suggestions = generate_resume_suggestions(
        generator,
        job,
        profile,
        &required_skills,
        mode,
        &mut warnings,
    )
    .await;

    // Step 3: cover letter
    let cover_letter =
        generate_cover_letter(generator, job, profile, &required_skills, &mut warnings).await;

    info!(
        "Materials {generation_id} ready: {} skills, {} warnings",
        required_skills.len(),
        warnings.len()
    );

    ApplicationMaterials {
        generation_id,
        generated_at: Utc::now(),
        skills_message: required_skills
            .is_empty()
            .then(|| NO_SKILLS_MESSAGE.to_string()),
        required_skills,
        suggestions,
        cover_letter,
        warnings,
    }
}

/// Validates, then generates. A validation failure makes no external call.
pub async fn submit_form(
    generator: &dyn TextGenerator,
    form: ApplicationForm,
    mode: SuggestionSections,
) -> Result<ApplicationMaterials, AppError> {
    validate_form(&form)?;
    let (job, profile) = form.into_parts();
    Ok(generate_materials(generator, &job, &profile, mode).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::cover_letter::COVER_LETTER_FALLBACK;
    use crate::assistant::suggestions::{KEYWORDS_FALLBACK, SUMMARY_FALLBACK};
    use crate::assistant::test_support::ScriptedGenerator;

    fn complete_form() -> ApplicationForm {
        ApplicationForm {
            job_description: "Looking for a Data Analyst with SQL and Python.".to_string(),
            name: "Jane Doe".to_string(),
            email: "jd@xyz.com".to_string(),
            phone: Some("+1 (123) 456-0789".to_string()),
            job_title: "Data Analyst".to_string(),
            company: "ABC Inc.".to_string(),
            current_position: "Business Analyst".to_string(),
            years_experience: 4,
            current_skills: "SQL, Tableau, Excel".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_company_makes_no_calls_and_one_error() {
        let generator = ScriptedGenerator::failing();
        let form = ApplicationForm {
            company: String::new(),
            ..complete_form()
        };

        let result = submit_form(&generator, form, SuggestionSections::Parsed).await;

        match result {
            Err(AppError::Validation(message)) => {
                assert!(message.starts_with(REQUIRED_FIELDS_MESSAGE));
                assert!(message.ends_with("Missing: company"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert_eq!(generator.call_count(), 0);
    }

    #[test]
    fn test_several_missing_fields_are_one_error() {
        let form = ApplicationForm::default();
        match validate_form(&form) {
            Err(AppError::Validation(message)) => assert!(message.contains(
                "Missing: job_description, name, email, job_title, company"
            )),
            Ok(()) => panic!("empty form must not validate"),
        }
    }

    #[test]
    fn test_years_experience_upper_bound() {
        let mut form = complete_form();
        form.years_experience = MAX_YEARS_EXPERIENCE;
        assert!(validate_form(&form).is_ok());
        form.years_experience = MAX_YEARS_EXPERIENCE + 1;
        assert!(validate_form(&form).is_err());
    }

    #[tokio::test]
    async fn test_full_run_calls_service_four_times_in_order() {
        let generator = ScriptedGenerator::new(vec![
            Ok("SQL, Python, sql".to_string()),
            Ok("Seasoned analyst.".to_string()),
            Ok("1. **Skills to Emphasize**: SQL\n2. **Keywords to Add**: Python".to_string()),
            Ok("Dear Hiring Manager, ...".to_string()),
        ]);

        let materials = submit_form(&generator, complete_form(), SuggestionSections::Parsed)
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].starts_with("From the following job description"));
        assert!(prompts[3].contains("Key Skills required by Job Description: Sql, Python"));

        assert_eq!(materials.required_skills, vec!["Sql", "Python"]);
        assert!(materials.skills_message.is_none());
        assert_eq!(materials.suggestions.professional_summary, "Seasoned analyst.");
        assert_eq!(materials.suggestions.skills_to_highlight, "SQL");
        assert_eq!(materials.suggestions.keywords, "Python");
        assert_eq!(materials.cover_letter, "Dear Hiring Manager, ...");
        assert!(materials.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_total_outage_degrades_everything() {
        let generator = ScriptedGenerator::failing();

        let materials = submit_form(&generator, complete_form(), SuggestionSections::Parsed)
            .await
            .unwrap();

        assert_eq!(generator.call_count(), 4);
        assert!(materials.required_skills.is_empty());
        assert_eq!(materials.skills_message.as_deref(), Some(NO_SKILLS_MESSAGE));
        assert_eq!(materials.suggestions.professional_summary, SUMMARY_FALLBACK);
        assert_eq!(materials.suggestions.keywords, KEYWORDS_FALLBACK);
        assert_eq!(materials.cover_letter, COVER_LETTER_FALLBACK);
        assert_eq!(materials.warnings.len(), 4);
    }

    #[tokio::test]
    async fn test_skill_failure_does_not_stop_later_steps() {
        let generator = ScriptedGenerator::new(vec![
            Err(crate::llm_client::LlmError::EmptyContent),
            Ok("Seasoned analyst.".to_string()),
            Ok("no headers here".to_string()),
            Ok("Dear Hiring Manager".to_string()),
        ]);

        let materials = submit_form(&generator, complete_form(), SuggestionSections::Parsed)
            .await
            .unwrap();

        assert!(materials.required_skills.is_empty());
        assert_eq!(materials.suggestions.professional_summary, "Seasoned analyst.");
        assert_eq!(materials.cover_letter, "Dear Hiring Manager");
        assert_eq!(materials.warnings.len(), 1);
    }
}

//! Axum route handlers for the Resume Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::pipeline::submit_form;
use crate::assistant::skills::{analyze_job_description, NO_SKILLS_MESSAGE};
use crate::errors::AppError;
use crate::models::materials::ApplicationMaterials;
use crate::models::profile::ApplicationForm;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
    pub message: Option<String>,
    pub warnings: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills
///
/// Key skills for a job description only. An unreachable service yields an
/// empty list with a neutral message, not an error status.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let mut warnings = Vec::new();
    let skills =
        analyze_job_description(state.generator.as_ref(), &request.job_description, &mut warnings)
            .await;

    Ok(Json(ExtractSkillsResponse {
        message: skills.is_empty().then(|| NO_SKILLS_MESSAGE.to_string()),
        skills,
        warnings,
    }))
}

/// POST /api/v1/materials
///
/// Full submission: validate → skills → suggestions → cover letter.
pub async fn handle_generate_materials(
    State(state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> Result<Json<ApplicationMaterials>, AppError> {
    let materials = submit_form(
        state.generator.as_ref(),
        form,
        state.config.suggestion_sections,
    )
    .await?;

    Ok(Json(materials))
}

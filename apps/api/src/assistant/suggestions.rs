//! Resume suggestions — professional summary plus the two advice sections
//! ("Skills to Emphasize", "Keywords to Add") pulled out of a second reply.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::assistant::generate_or_warn;
use crate::assistant::prompts::{professional_summary_prompt, skills_keywords_prompt};
use crate::config::SuggestionSections;
use crate::llm_client::TextGenerator;
use crate::models::materials::SuggestionBundle;
use crate::models::profile::{CandidateProfile, JobContext};

pub const SUMMARY_FALLBACK: &str = "Could not generate summary.";
pub const SKILLS_TO_HIGHLIGHT_FALLBACK: &str =
    "Focus on transferable skills and those directly matching the job description.";
pub const KEYWORDS_FALLBACK: &str = "Include relevant industry terms and action verbs.";

/// `1. **Skills to Emphasize**:` with an optional `-`/`*` bullet after the number.
fn skills_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"1\.\s*[-*]?\s*\*\*Skills to Emphasize\*\*:\s*").expect("valid regex")
    })
}

/// Start of the keywords header, including the whitespace before it.
/// Terminates the skills section.
fn keywords_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s*2\.\s*[-*]?\s*\*\*Keywords (?i:to) Add\*\*").expect("valid regex")
    })
}

/// `2. **Keywords to Add**:` (or `To`), capturing everything after it.
fn keywords_section() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)2\.\s*[-*]?\s*\*\*Keywords (?i:to) Add\*\*:\s*(.*)").expect("valid regex")
    })
}

/// Section bodies found in a skills/keywords reply. `None` when the header is
/// absent or the body is blank.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedSections {
    pub skills_to_emphasize: Option<String>,
    pub keywords_to_add: Option<String>,
}

pub fn parse_sections(reply: &str) -> ParsedSections {
    let skills_to_emphasize = skills_header().find(reply).and_then(|header| {
        let rest = &reply[header.end()..];
        let end = keywords_boundary()
            .find(rest)
            .map_or(rest.len(), |boundary| boundary.start());
        non_blank(&rest[..end])
    });

    let keywords_to_add = keywords_section()
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .and_then(|body| non_blank(body.as_str()));

    ParsedSections {
        skills_to_emphasize,
        keywords_to_add,
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Assembles the bundle, substituting fallback text for anything missing.
/// With `SuggestionSections::Fallback` the section text is ignored entirely.
pub fn build_bundle(
    summary: Option<String>,
    skills_keywords_reply: Option<&str>,
    mode: SuggestionSections,
) -> SuggestionBundle {
    let sections = match (mode, skills_keywords_reply) {
        (SuggestionSections::Parsed, Some(reply)) => parse_sections(reply),
        _ => ParsedSections::default(),
    };

    SuggestionBundle {
        professional_summary: summary.unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
        skills_to_highlight: sections
            .skills_to_emphasize
            .unwrap_or_else(|| SKILLS_TO_HIGHLIGHT_FALLBACK.to_string()),
        keywords: sections
            .keywords_to_add
            .unwrap_or_else(|| KEYWORDS_FALLBACK.to_string()),
    }
}

/// Two sequential calls: the summary, then the skills/keywords advice.
pub async fn generate_resume_suggestions(
    generator: &dyn TextGenerator,
    job: &JobContext,
    profile: &CandidateProfile,
    required_skills: &[String],
    mode: SuggestionSections,
    warnings: &mut Vec<String>,
) -> SuggestionBundle {
    let summary_prompt = professional_summary_prompt(job, profile, required_skills);
    let summary = generate_or_warn(generator, "summary generation", &summary_prompt, warnings).await;

    let advice_prompt = skills_keywords_prompt(profile, required_skills);
    let advice = generate_or_warn(
        generator,
        "skills and keywords suggestions",
        &advice_prompt,
        warnings,
    )
    .await;

    match &advice {
        Some(reply) => debug!("Raw skills/keywords reply:\n{reply}"),
        None => debug!("No skills/keywords reply received"),
    }

    let bundle = build_bundle(summary, advice.as_deref(), mode);
    info!(
        "Suggestions ready (summary fallback: {}, skills fallback: {}, keywords fallback: {})",
        bundle.professional_summary == SUMMARY_FALLBACK,
        bundle.skills_to_highlight == SKILLS_TO_HIGHLIGHT_FALLBACK,
        bundle.keywords == KEYWORDS_FALLBACK
    );
    bundle
}

//! Prompt Builder: fixed instruction blocks with user fields interpolated.
//!
//! Fields are inserted verbatim. Rendering is single-pass, so text a user typed
//! that happens to look like a `{placeholder}` is never substituted a second time.

use crate::assistant::skills::MAX_SKILLS;
use crate::models::profile::{CandidateProfile, JobContext};

const NOT_PROVIDED: &str = "N/A";

/// Skill extraction. Replace: {max_skills}, {job_description}
pub const SKILL_EXTRACTION_TEMPLATE: &str = r#"From the following job description, identify and list up to {max_skills} key technical and soft skills that are explicitly mentioned or strongly implied as requirements. List them as a comma-separated string, e.g., "Python, SQL, Data Analysis, Communication, Project Management".

Job Description:
{job_description}

Skills:"#;

/// Professional summary.
/// Replace: {job_title}, {years_experience}, {required_skills}, {current_skills}, {resume_summary}
pub const PROFESSIONAL_SUMMARY_TEMPLATE: &str = r#"You are a career coach. Based on the following information, generate a concise (3-4 sentences) professional summary for a resume. Focus on achievements, relevant skills, and the target job role.

Job Title applying for: {job_title}
Years of Experience: {years_experience}
Required Skills for the Job: {required_skills}
Your current skills: {current_skills}
Your current resume summary (if provided, use for context but don't just copy): {resume_summary}

Professional Summary:"#;

/// Skills to emphasize + keywords to add. The headers requested here are the
/// ones `suggestions::parse_sections` looks for.
/// Replace: {required_skills}, {current_skills}
pub const SKILLS_KEYWORDS_TEMPLATE: &str = r#"You are a resume expert. Based on the job's required skills and the user's current skills, suggest skills to highlight on a resume and additional keywords to include.

Required Skills for the Job: {required_skills}
Your Current Skills (comma-separated): {current_skills}

Format your response with exactly two sections, using these numbered, bold headers:
1. **Skills to Emphasize**: comma-separated list of skills you possess that are required for the job, or general advice if no direct matches
2. **Keywords to Add**: comma-separated list of unique skills from the required skills not in the current skills, plus any other relevant keywords for the job title
"#;

/// Cover letter. Replace: {name}, {email}, {phone}, {linkedin_url},
/// {years_experience}, {current_position}, {current_skills}, {job_title},
/// {company}, {required_skills}
pub const COVER_LETTER_TEMPLATE: &str = r#"You are a professional cover letter writer. Write a compelling cover letter for a job application. The letter should be professional, concise, and highlight the candidate's relevant experience and skills as they relate to the job description and company.

Candidate Information:
Name: {name}
Email: {email}
Phone: {phone}
LinkedIn: {linkedin_url}
Years of Experience: {years_experience}
Latest Position: {current_position}
Current Skills: {current_skills}

Job Information:
Job Title: {job_title}
Company: {company}
Key Skills required by Job Description: {required_skills}

Cover Letter Structure:
- Start with a strong opening expressing interest and mentioning where they saw the ad (assume LinkedIn or company website).
- Briefly state their relevant experience and align it with the company's mission or values (if known, otherwise general enthusiasm for the field).
- Pick 2-3 key skills or experiences from the candidate's background that directly match the 'Key Skills required by Job Description' and elaborate briefly on accomplishments using those skills. If concrete figures appear in the candidate's background (like "led over 40 engagements" or "improved operational efficiency by 60%"), incorporate them naturally where they align with the generated content.
- Express enthusiasm for the specific company and role, mentioning their reputation if appropriate.
- Conclude with a call to action to discuss further.
- Here is the template:
I am writing to express my strong interest in the {job_title} position at {company}, advertised on [Platform where you saw the ad]. With {years_experience} years of experience in data analytics, automation, and business optimization, I am confident my technical skills, business insight, and leadership experience align well with {company}'s data-driven approach.
Throughout my career, I've developed a proven ability to transform complex data into actionable insights, significantly optimizing business processes, and enhancing operational efficiency. I excel at leading cross-functional teams and effectively communicating complex technical information to diverse stakeholders.
I am eager to leverage my analytical and leadership abilities to contribute to {company}'s continued success. Thank you for your time and consideration; I look forward to discussing this opportunity.

Sincerely,
{name}
{email}
{phone}

Cover Letter:"#;

/// Substitutes `{key}` placeholders in one left-to-right pass.
/// Unknown keys and stray braces are copied through as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let substitution = tail[1..].find('}').and_then(|close| {
            let key = &tail[1..1 + close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close + 2))
        });

        match substitution {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn or_not_provided(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

pub fn skill_extraction_prompt(job_description: &str) -> String {
    let max_skills = MAX_SKILLS.to_string();
    render(
        SKILL_EXTRACTION_TEMPLATE,
        &[
            ("max_skills", max_skills.as_str()),
            ("job_description", job_description),
        ],
    )
}

pub fn professional_summary_prompt(
    job: &JobContext,
    profile: &CandidateProfile,
    required_skills: &[String],
) -> String {
    let years = profile.years_experience.to_string();
    let required = required_skills.join(", ");
    let current = profile.skill_list().join(", ");
    render(
        PROFESSIONAL_SUMMARY_TEMPLATE,
        &[
            ("job_title", job.job_title.as_str()),
            ("years_experience", years.as_str()),
            ("required_skills", required.as_str()),
            ("current_skills", current.as_str()),
            ("resume_summary", or_not_provided(&profile.resume_summary)),
        ],
    )
}

pub fn skills_keywords_prompt(profile: &CandidateProfile, required_skills: &[String]) -> String {
    let required = required_skills.join(", ");
    let current = profile.skill_list().join(", ");
    render(
        SKILLS_KEYWORDS_TEMPLATE,
        &[
            ("required_skills", required.as_str()),
            ("current_skills", current.as_str()),
        ],
    )
}

pub fn cover_letter_prompt(
    job: &JobContext,
    profile: &CandidateProfile,
    required_skills: &[String],
) -> String {
    let years = profile.years_experience.to_string();
    let required = required_skills.join(", ");
    let current = profile.skill_list().join(", ");
    let linkedin = profile.linkedin_url.as_deref().unwrap_or_default();
    render(
        COVER_LETTER_TEMPLATE,
        &[
            ("name", profile.name.as_str()),
            ("email", profile.email.as_str()),
            ("phone", profile.phone.as_deref().unwrap_or_default()),
            ("linkedin_url", or_not_provided(linkedin)),
            ("years_experience", years.as_str()),
            ("current_position", profile.current_position.as_str()),
            ("current_skills", current.as_str()),
            ("job_title", job.job_title.as_str()),
            ("company", job.company.as_str()),
            ("required_skills", required.as_str()),
        ],
    )
}

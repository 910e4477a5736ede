// All model prompt constants for the Career Gateway.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, REGIONAL_ACCURACY_INSTRUCTION};
use crate::models::profile::Profile;

/// System instruction for career recommendations.
pub const RECOMMENDATIONS_SYSTEM: &str = "You are an experienced career counsellor for \
    students who have just finished higher secondary school. \
    You give honest, realistic guidance: you mark a career as 'Not Eligible' when the \
    student's stream or marks rule it out, and you explain risk plainly to parents.";

/// Recommendations prompt template. Replace `{profile}` before sending.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Recommend careers for the following student.

STUDENT PROFILE:
{profile}

Return a JSON ARRAY of 4 to 6 career objects, ordered from best to weakest match.

Rules:
1. `matchScore` is a number from 0 to 100 reflecting fit with the student's marks, subjects, skills and interest.
2. `eligibilityStatus` is exactly "Eligible" or "Not Eligible", judged on stream and marks requirements.
3. `riskLevel` is exactly "Low", "Medium" or "High", reflecting competition, cost and job-market uncertainty.
4. `description` is one or two sentences describing the work.
5. `matchReason` explains why this career fits this particular student.
6. `parentAdvice` is one or two sentences addressed to the student's parents or guardians.
7. Include at least one realistic option the student is eligible for, if any exists."#;

/// System instruction for career detail expansion.
pub const DETAILS_SYSTEM: &str = "You are an experienced career counsellor who writes \
    concrete, step-by-step career plans for students and their families.";

/// Career detail prompt template. Replace `{career_name}` and `{profile}` before sending.
pub const DETAILS_PROMPT_TEMPLATE: &str = r#"Explain the career "{career_name}" for the following student.

STUDENT PROFILE:
{profile}

Return a JSON OBJECT with:
- `whyThisCareer`: why this career suits this student, in two or three sentences.
- `roadmap`: ordered steps from the student's current position to a first job.
- `growthOutlook`: the job-market outlook and typical salary progression.
- `courses`: relevant degree or diploma courses, each with `name`, `duration` and `description`.
- `entranceExams`: entrance exams for those courses, each with `name`, `conductedBy` and `eligibility`.
- `colleges`: well-regarded colleges, each with `name`, `location` and `collegeType`.
- `scholarships`: scholarships the student could apply for, each with `name`, `provider`, `amount` and `eligibility`."#;

/// Full system instruction: role text plus the JSON-only fragment.
pub fn system_instruction(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}

pub fn recommendations_prompt(profile: &Profile) -> String {
    let summary = profile.summary();
    fill_template(RECOMMENDATIONS_PROMPT_TEMPLATE, &[("{profile}", summary.as_str())])
}

/// Substitutes placeholders in one pass over the template.
/// Substituted values are never rescanned, so user text containing a
/// placeholder is inserted literally.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(placeholder, _)| tail.starts_with(*placeholder)) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
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

pub fn details_prompt(career_name: &str, profile: &Profile) -> String {
    let summary = profile.summary();
    let prompt = fill_template(
        DETAILS_PROMPT_TEMPLATE,
        &[("{career_name}", career_name), ("{profile}", summary.as_str())],
    );
    format!("{prompt}\n\n{REGIONAL_ACCURACY_INSTRUCTION}")
}

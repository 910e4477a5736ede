use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One ranked career suggestion produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub career_name: String,
    /// 0-100, model-assigned.
    pub match_score: f64,
    pub eligibility_status: EligibilityStatus,
    pub risk_level: RiskLevel,
    pub description: String,
    pub match_reason: String,
    /// Advice addressed to the student's parents or guardians.
    pub parent_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceExam {
    pub name: String,
    pub conducted_by: String,
    pub eligibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    pub location: String,
    /// e.g. "Government", "Private", "Deemed".
    pub college_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub name: String,
    pub provider: String,
    pub amount: String,
    pub eligibility: String,
}

/// Expanded information about a single career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetail {
    pub why_this_career: String,
    /// Ordered steps from the student's current position.
    pub roadmap: Vec<String>,
    pub growth_outlook: String,
    pub courses: Vec<Course>,
    pub entrance_exams: Vec<EntranceExam>,
    pub colleges: Vec<College>,
    pub scholarships: Vec<Scholarship>,
}

//! Test doubles shared by handler and client tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::llm_client::{GenerationModel, GenerationRequest, LlmError};
use crate::routes::build_router;
use crate::state::AppState;

/// What the stub model does on each call.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    /// Sleeps, then returns the text.
    Delayed(Duration, String),
    Overloaded,
    ApiError,
}

/// Counting stand-in for the generation model.
pub struct StubModel {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubModel {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationModel for StubModel {
    async fn generate(&self, _: &str, request: &GenerationRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.clone());

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            StubReply::Overloaded => Err(LlmError::Overloaded {
                status: 429,
                message: "Resource has been exhausted (e.g. check quota).".to_string(),
            }),
            StubReply::ApiError => Err(LlmError::Api {
                status: 400,
                message: "API key not valid. Please pass a valid API key.".to_string(),
            }),
        }
    }
}

pub fn app_state(model: Arc<StubModel>) -> AppState {
    AppState {
        config: Config::for_tests(),
        model,
    }
}

pub fn router(model: Arc<StubModel>) -> axum::Router {
    build_router(app_state(model))
}

/// Four conforming items for a Science-PCB student interested in medicine.
pub const FOUR_MEDICAL_ITEMS: &str = r#"[
    {"careerName": "Doctor (MBBS)", "matchScore": 92, "eligibilityStatus": "Eligible", "riskLevel": "Medium",
     "description": "Diagnose and treat patients.", "matchReason": "Biology strength and empathy.",
     "parentAdvice": "Expect 5.5 years of study plus NEET preparation."},
    {"careerName": "Nursing", "matchScore": 85, "eligibilityStatus": "Eligible", "riskLevel": "Low",
     "description": "Provide patient care in hospitals.", "matchReason": "Empathy suits patient care.",
     "parentAdvice": "Stable demand in India and abroad."},
    {"careerName": "Pharmacist", "matchScore": 74, "eligibilityStatus": "Eligible", "riskLevel": "Low",
     "description": "Dispense and advise on medicines.", "matchReason": "Chemistry and biology background.",
     "parentAdvice": "B.Pharm is a four-year course."},
    {"careerName": "Biomedical Researcher", "matchScore": 66, "eligibilityStatus": "Eligible", "riskLevel": "High",
     "description": "Research diseases and treatments.", "matchReason": "Interest in medicine.",
     "parentAdvice": "Long path through postgraduate study."}
]"#;

/// Items the model marked ineligible for a low-marks Arts student.
pub const NOT_ELIGIBLE_ITEMS: &str = r#"[
    {"careerName": "Doctor (MBBS)", "matchScore": 10, "eligibilityStatus": "Not Eligible", "riskLevel": "High",
     "description": "Requires PCB.", "matchReason": "Stream does not qualify.", "parentAdvice": "Consider alternatives."},
    {"careerName": "Engineer", "matchScore": 8, "eligibilityStatus": "Not Eligible", "riskLevel": "High",
     "description": "Requires PCM.", "matchReason": "Stream does not qualify.", "parentAdvice": "Consider alternatives."}
]"#;

pub const MBBS_DETAIL: &str = r#"{
    "whyThisCareer": "Your biology marks and empathy fit clinical work.",
    "roadmap": ["Prepare for NEET-UG", "Complete MBBS", "One-year internship", "Register with NMC"],
    "growthOutlook": "Consistent demand with strong long-term earnings.",
    "courses": [{"name": "MBBS", "duration": "5.5 years", "description": "Bachelor of Medicine and Surgery"}],
    "entranceExams": [{"name": "NEET-UG", "conductedBy": "NTA", "eligibility": "PCB with 50% marks"}],
    "colleges": [{"name": "AIIMS New Delhi", "location": "New Delhi", "collegeType": "Government"}],
    "scholarships": [{"name": "Central Sector Scholarship", "provider": "Ministry of Education", "amount": "Rs 12,000 per year", "eligibility": "Top 20 percentile"}]
}"#;

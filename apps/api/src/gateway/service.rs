//! Career generation — one bounded model call per request.
//!
//! Flow: build prompt + schema → call the model under the deadline →
//!       validate the payload against the schema → typed response.

use std::time::Duration;

use serde::Serialize;
use tokio::time::timeout;

use crate::errors::GatewayError;
use crate::gateway::envelope::CareerRequest;
use crate::gateway::prompts::{
    details_prompt, recommendations_prompt, system_instruction, DETAILS_SYSTEM,
    RECOMMENDATIONS_SYSTEM,
};
use crate::gateway::schema::{
    career_detail_schema, recommendations_schema, validate_career_detail,
    validate_recommendations,
};
use crate::llm_client::{GenerationModel, GenerationRequest};
use crate::models::career::{CareerDetail, RecommendationItem};

/// Successful gateway output, serialized as the bare document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CareerResponse {
    Recommendations(Vec<RecommendationItem>),
    Details(CareerDetail),
}

/// Builds the model request (prompt, system instruction, schema) for `request`.
pub fn build_generation(request: &CareerRequest, model: &str) -> GenerationRequest {
    let (prompt, system, schema) = match request {
        CareerRequest::Recommendations { profile } => (
            recommendations_prompt(profile),
            system_instruction(RECOMMENDATIONS_SYSTEM),
            recommendations_schema(),
        ),
        CareerRequest::Details {
            career_name,
            profile,
        } => (
            details_prompt(career_name, profile),
            system_instruction(DETAILS_SYSTEM),
            career_detail_schema(),
        ),
    };

    GenerationRequest {
        model: model.to_string(),
        prompt,
        system: Some(system),
        schema,
    }
}

/// Calls the model once and validates the result.
///
/// The model future is dropped when `deadline` elapses, which cancels any
/// in-flight HTTP request it owns.
pub async fn generate(
    model: &dyn GenerationModel,
    api_key: &str,
    generation: &GenerationRequest,
    request: &CareerRequest,
    deadline: Duration,
) -> Result<CareerResponse, GatewayError> {
    let text = timeout(deadline, model.generate(api_key, generation))
        .await
        .map_err(|_| GatewayError::UpstreamTimeout(deadline.as_millis()))??;

    match request {
        CareerRequest::Recommendations { .. } => {
            validate_recommendations(&text).map(CareerResponse::Recommendations)
        }
        CareerRequest::Details { .. } => validate_career_detail(&text).map(CareerResponse::Details),
    }
}

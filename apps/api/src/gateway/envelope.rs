//! Request envelope — the action tag, the profile, and the career name for details.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::GatewayError;
use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Recommendations,
    Details,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Recommendations => "recommendations",
            Action::Details => "details",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "recommendations" => Some(Action::Recommendations),
            "details" => Some(Action::Details),
            _ => None,
        }
    }
}

/// Wire shape of the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub action: Action,
    pub user_data: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_name: Option<String>,
}

impl Envelope {
    pub fn recommendations(profile: &Profile) -> Self {
        Self {
            action: Action::Recommendations,
            user_data: profile.clone(),
            career_name: None,
        }
    }

    pub fn details(career_name: &str, profile: &Profile) -> Self {
        Self {
            action: Action::Details,
            user_data: profile.clone(),
            career_name: Some(career_name.to_string()),
        }
    }
}

/// A decoded, validated request ready for prompt building.
#[derive(Debug, Clone, PartialEq)]
pub enum CareerRequest {
    Recommendations { profile: Profile },
    Details { career_name: String, profile: Profile },
}

impl CareerRequest {
    pub fn action(&self) -> Action {
        match self {
            CareerRequest::Recommendations { .. } => Action::Recommendations,
            CareerRequest::Details { .. } => Action::Details,
        }
    }
}

/// Decodes a raw request body.
///
/// The action is checked before the profile so that an unknown action is
/// reported as such even when the rest of the body is also wrong.
pub fn decode_envelope(body: &[u8]) -> Result<CareerRequest, GatewayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| GatewayError::MalformedRequest("body is not valid JSON".to_string()))?;
    let object = value.as_object().ok_or_else(|| {
        GatewayError::MalformedRequest("body must be a JSON object".to_string())
    })?;

    let action = match object.get("action") {
        Some(Value::String(raw)) => {
            Action::parse(raw).ok_or_else(|| GatewayError::InvalidAction(raw.clone()))?
        }
        Some(other) => return Err(GatewayError::InvalidAction(other.to_string())),
        None => return Err(GatewayError::InvalidAction("<missing>".to_string())),
    };

    let user_data = object
        .get("userData")
        .cloned()
        .ok_or_else(|| GatewayError::MalformedRequest("userData is required".to_string()))?;
    let profile: Profile = serde_json::from_value(user_data).map_err(|e| {
        debug!("userData failed to decode: {e}");
        GatewayError::MalformedRequest(
            "userData must include a known stream and numeric marks".to_string(),
        )
    })?;
    profile.validate().map_err(GatewayError::MalformedRequest)?;

    match action {
        Action::Recommendations => Ok(CareerRequest::Recommendations { profile }),
        Action::Details => {
            let career_name = object
                .get("careerName")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| {
                    GatewayError::MalformedRequest(
                        "careerName is required for details".to_string(),
                    )
                })?;
            Ok(CareerRequest::Details {
                career_name: career_name.to_string(),
                profile,
            })
        }
    }
}

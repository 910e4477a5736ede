//! Structured-output schemas sent to the model, and the validators that
//! enforce the same shapes on whatever comes back.
//!
//! Schemas use the Gemini OpenAPI subset (`ARRAY`, `OBJECT`, `STRING`,
//! `NUMBER`, `enum`, `required`). The model is asked to honor them, but a
//! response is only trusted after passing the matching validator.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::errors::GatewayError;
use crate::llm_client::strip_json_fences;
use crate::models::career::{CareerDetail, RecommendationItem};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object_list(fields: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> =
        fields.iter().map(|f| (f.to_string(), string())).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": properties,
            "required": fields,
        }
    })
}

/// Schema for an ordered list of `RecommendationItem`.
pub fn recommendations_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "careerName": string(),
                "matchScore": { "type": "NUMBER" },
                "eligibilityStatus": { "type": "STRING", "enum": ["Eligible", "Not Eligible"] },
                "riskLevel": { "type": "STRING", "enum": ["Low", "Medium", "High"] },
                "description": string(),
                "matchReason": string(),
                "parentAdvice": string(),
            },
            "required": [
                "careerName",
                "matchScore",
                "eligibilityStatus",
                "riskLevel",
                "description",
                "matchReason",
                "parentAdvice",
            ],
        }
    })
}

/// Schema for a `CareerDetail`.
pub fn career_detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "whyThisCareer": string(),
            "roadmap": string_list(),
            "growthOutlook": string(),
            "courses": object_list(&["name", "duration", "description"]),
            "entranceExams": object_list(&["name", "conductedBy", "eligibility"]),
            "colleges": object_list(&["name", "location", "collegeType"]),
            "scholarships": object_list(&["name", "provider", "amount", "eligibility"]),
        },
        "required": [
            "whyThisCareer",
            "roadmap",
            "growthOutlook",
            "courses",
            "entranceExams",
            "colleges",
            "scholarships",
        ],
    })
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, GatewayError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Decodes and checks a recommendations payload.
///
/// Items are returned in model order and unmodified; no eligibility filtering
/// happens here.
pub fn validate_recommendations(text: &str) -> Result<Vec<RecommendationItem>, GatewayError> {
    let items: Vec<RecommendationItem> = decode(text)?;

    if items.is_empty() {
        return Err(GatewayError::InvalidResponse(
            "recommendation list is empty".to_string(),
        ));
    }

    for (index, item) in items.iter().enumerate() {
        if item.career_name.trim().is_empty() {
            return Err(GatewayError::InvalidResponse(format!(
                "item {index} has a blank careerName"
            )));
        }
        if !item.match_score.is_finite() || !(0.0..=100.0).contains(&item.match_score) {
            return Err(GatewayError::InvalidResponse(format!(
                "item {index} has matchScore {} outside 0-100",
                item.match_score
            )));
        }
    }

    Ok(items)
}

/// Decodes and checks a career detail payload.
pub fn validate_career_detail(text: &str) -> Result<CareerDetail, GatewayError> {
    let detail: CareerDetail = decode(text)?;

    if detail.why_this_career.trim().is_empty() {
        return Err(GatewayError::InvalidResponse(
            "whyThisCareer is blank".to_string(),
        ));
    }
    if detail.roadmap.iter().all(|step| step.trim().is_empty()) {
        return Err(GatewayError::InvalidResponse("roadmap is empty".to_string()));
    }

    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{EligibilityStatus, RiskLevel};

    const TWO_ITEMS: &str = r#"[
        {"careerName": "Doctor (MBBS)", "matchScore": 91, "eligibilityStatus": "Eligible", "riskLevel": "Medium",
         "description": "d", "matchReason": "r", "parentAdvice": "a"},
        {"careerName": "Pilot", "matchScore": 40.5, "eligibilityStatus": "Not Eligible", "riskLevel": "High",
         "description": "d", "matchReason": "r", "parentAdvice": "a"}
    ]"#;

    const DETAIL: &str = r#"{
        "whyThisCareer": "You enjoy helping people.",
        "roadmap": ["Clear NEET-UG", "Complete MBBS", "Internship"],
        "growthOutlook": "Strong demand.",
        "courses": [{"name": "MBBS", "duration": "5.5 years", "description": "Medicine"}],
        "entranceExams": [{"name": "NEET-UG", "conductedBy": "NTA", "eligibility": "PCB with 50%"}],
        "colleges": [{"name": "AIIMS Delhi", "location": "New Delhi", "collegeType": "Government"}],
        "scholarships": []
    }"#;

    #[test]
    fn test_recommendations_schema_requires_all_fields() {
        let schema = recommendations_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 7);
        assert_eq!(
            schema["items"]["properties"]["riskLevel"]["enum"],
            json!(["Low", "Medium", "High"])
        );
    }

    #[test]
    fn test_career_detail_schema_nested_objects() {
        let schema = career_detail_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            schema["properties"]["colleges"]["items"]["required"],
            json!(["name", "location", "collegeType"])
        );
    }

    #[test]
    fn test_validate_recommendations_keeps_order_and_values() {
        let items = validate_recommendations(TWO_ITEMS).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].career_name, "Doctor (MBBS)");
        assert_eq!(items[1].eligibility_status, EligibilityStatus::NotEligible);
        assert_eq!(items[1].risk_level, RiskLevel::High);
    }

    #[test]
    fn test_validate_recommendations_accepts_fenced_json() {
        let fenced = format!("```json\n{TWO_ITEMS}\n```");
        assert_eq!(validate_recommendations(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn test_blank_text_is_empty_response() {
        assert!(matches!(
            validate_recommendations("   "),
            Err(GatewayError::EmptyResponse)
        ));
        assert!(matches!(
            validate_career_detail(""),
            Err(GatewayError::EmptyResponse)
        ));
    }

    #[test]
    fn test_empty_array_rejected() {
        assert!(matches!(
            validate_recommendations("[]"),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let text = TWO_ITEMS.replace("\"High\"", "\"Extreme\"");
        assert!(matches!(
            validate_recommendations(&text),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_match_score_out_of_range_rejected() {
        let text = TWO_ITEMS.replace("91", "191");
        assert!(matches!(
            validate_recommendations(&text),
            Err(GatewayError::InvalidResponse(msg)) if msg.contains("matchScore")
        ));
    }

    #[test]
    fn test_prose_response_rejected() {
        assert!(matches!(
            validate_recommendations("Sure! Here are some careers."),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_validate_career_detail() {
        let detail = validate_career_detail(DETAIL).unwrap();
        assert_eq!(detail.roadmap.len(), 3);
        assert_eq!(detail.roadmap[0], "Clear NEET-UG");
        assert_eq!(detail.entrance_exams[0].conducted_by, "NTA");
        assert!(detail.scholarships.is_empty());
    }

    #[test]
    fn test_career_detail_empty_roadmap_rejected() {
        let text = DETAIL.replace(
            r#"["Clear NEET-UG", "Complete MBBS", "Internship"]"#,
            "[]",
        );
        assert!(matches!(
            validate_career_detail(&text),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_career_detail_missing_section_rejected() {
        let text = r#"{"whyThisCareer": "x", "roadmap": ["a"], "growthOutlook": "y"}"#;
        assert!(matches!(
            validate_career_detail(text),
            Err(GatewayError::InvalidResponse(_))
        ));
    }
}

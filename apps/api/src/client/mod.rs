//! Client Adapter — the caller-facing API for the Career Gateway.
//!
//! Exposes exactly two operations. Each makes one Gateway request, bounded by a
//! client-side deadline that is deliberately longer than the Gateway's own
//! model deadline, so a slow model surfaces as the Gateway's 504 rather than a
//! client timeout. No retries, no caching.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::gateway::envelope::Envelope;
use crate::models::career::{CareerDetail, RecommendationItem};
use crate::models::profile::Profile;

pub mod error;
pub mod transport;

pub use error::ClientError;
pub use transport::{HttpTransport, Transport, TransportResponse};

/// Round-trip deadline applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct CareerClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
    timeout: Duration,
}

impl CareerClient {
    /// Client that talks to a Gateway at `base_url` over HTTP.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?), base_url))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            endpoint: format!("{}/api/career", base_url.trim_end_matches('/')),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn get_career_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<RecommendationItem>, ClientError> {
        self.call(&Envelope::recommendations(profile)).await
    }

    pub async fn get_career_details(
        &self,
        career_name: &str,
        profile: &Profile,
    ) -> Result<CareerDetail, ClientError> {
        self.call(&Envelope::details(career_name, profile)).await
    }

    async fn call<T: DeserializeOwned>(&self, envelope: &Envelope) -> Result<T, ClientError> {
        let body = serde_json::to_vec(envelope)
            .map_err(|e| ClientError::Transport(format!("failed to encode request: {e}")))?;

        debug!(action = envelope.action.as_str(), endpoint = %self.endpoint, "Calling career gateway");

        // Dropping the transport future on expiry cancels the in-flight request.
        let response = timeout(self.timeout, self.transport.post_json(&self.endpoint, body))
            .await
            .map_err(|_| {
                warn!(action = envelope.action.as_str(), "Career gateway call timed out");
                ClientError::Timeout(self.timeout)
            })??;

        if !(200..300).contains(&response.status) {
            let message = serde_json::from_slice::<ErrorBody>(&response.body)
                .map(|b| b.error)
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            warn!(
                action = envelope.action.as_str(),
                status = response.status,
                "Career gateway returned an error"
            );
            return Err(ClientError::Upstream {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

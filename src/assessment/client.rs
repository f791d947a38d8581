use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::messages::{AssessmentReply, AssessmentRequest, AssessmentResponse};
use crate::config::AssessmentConfig;

/// Fixed reply used when the assessment service is unreachable or returns
/// an unusable body. The conversation keeps flowing; no scores are awarded.
pub const FALLBACK_FEEDBACK: &str = "Great answer! Here's my feedback: \
    Your explanation demonstrates good understanding of the fundamentals. \
    Consider elaborating on real-world applications.";

/// Backend that scores a candidate answer and returns coach feedback.
///
/// Infallible at this boundary: implementations own their degradation
/// policy and must always produce a reply the session can append.
#[async_trait::async_trait]
pub trait AssessmentBackend: Send + Sync {
    /// Submit one candidate answer for assessment
    async fn submit(&self, message: &str, session_id: &str) -> AssessmentReply;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// HTTP client for the remote assessment endpoint.
///
/// Sends exactly one request per submission, with no retries or backoff.
/// Any transport or protocol failure collapses to the fixed fallback
/// reply so the conversation never breaks mid-session.
pub struct AssessmentClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssessmentClient {
    pub fn new(config: &AssessmentConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/assessment/message", self.base_url)
    }

    async fn request_assessment(&self, message: &str, session_id: &str) -> Result<AssessmentReply> {
        let request = AssessmentRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .context("Assessment request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Assessment service returned {}", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read assessment response")?;
        let parsed: AssessmentResponse =
            serde_json::from_str(&body).context("Failed to parse assessment response")?;

        Ok(parsed.into_reply())
    }
}

#[async_trait::async_trait]
impl AssessmentBackend for AssessmentClient {
    async fn submit(&self, message: &str, session_id: &str) -> AssessmentReply {
        match self.request_assessment(message, session_id).await {
            Ok(reply) => {
                debug!(
                    "Assessment reply received (session={}, scored={})",
                    session_id,
                    reply.skill_scores.is_some()
                );
                reply
            }
            Err(e) => {
                warn!("Assessment service unavailable, using fallback reply: {:#}", e);
                AssessmentReply {
                    feedback: FALLBACK_FEEDBACK.to_string(),
                    skill_scores: None,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

//! Summary generator.
//!
//! Per request: compose the prompt, make one completion call, parse the reply.
//! A failed call or an unusable reply ends in `SummaryOutcome::Fallback`
//! carrying the reason; `into_result` turns either variant into a
//! `SummaryResult`, so callers always get three well-formed fields.

use crate::error::GenerationFailure;
use crate::llm::client::CompletionClient;
use crate::llm::extract::extract_json_object;
use crate::llm::prompt::{SYSTEM_PROMPT, user_message};
use crate::models::{FilteredPayload, SummaryResult};

#[derive(Debug)]
pub enum SummaryOutcome {
    Analyzed(SummaryResult),
    Fallback(GenerationFailure),
}

impl SummaryOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback(_))
    }

    pub fn into_result(self) -> SummaryResult {
        match self {
            SummaryOutcome::Analyzed(result) => result,
            SummaryOutcome::Fallback(_) => SummaryResult::fallback(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    client: CompletionClient,
}

impl SummaryGenerator {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, payload: &FilteredPayload) -> SummaryOutcome {
        let user = user_message(payload);

        let text = match self.client.complete(SYSTEM_PROMPT, &user).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Completion call failed ({}), using fallback summary", e);
                return SummaryOutcome::Fallback(e);
            }
        };

        match parse_summary(&text) {
            Ok(result) => SummaryOutcome::Analyzed(result),
            Err(e) => {
                tracing::warn!("Could not parse model output ({}), using fallback summary", e);
                tracing::debug!("unparsed model output: {}", text);
                SummaryOutcome::Fallback(e)
            }
        }
    }
}

/// Accepts only an object with exactly `summary`, `technologies`, `structure`.
pub fn parse_summary(text: &str) -> Result<SummaryResult, GenerationFailure> {
    let json = extract_json_object(text).ok_or(GenerationFailure::NoJsonObject)?;
    Ok(serde_json::from_str(json)?)
}

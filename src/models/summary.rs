use serde::{Deserialize, Serialize};

pub const FALLBACK_SUMMARY: &str =
    "Unable to generate summary: the repository could not be analyzed.";
pub const FALLBACK_STRUCTURE: &str =
    "Unable to generate summary: the project structure was not analyzed.";

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub github_url: String,
}

/// The response contract. Decoding rejects unknown keys so a model reply is
/// only accepted when it carries exactly these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryResult {
    pub summary: String,
    pub technologies: Vec<String>,
    pub structure: String,
}

impl SummaryResult {
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            technologies: Vec::new(),
            structure: FALLBACK_STRUCTURE.to_string(),
        }
    }
}

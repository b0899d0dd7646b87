use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Caller-supplied hint shaping explanation tone and depth.
///
/// Serialized lowercase to match the JSON surface:
/// "beginner" | "intermediate" | "expert"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl AudienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceLevel::Beginner => "beginner",
            AudienceLevel::Intermediate => "intermediate",
            AudienceLevel::Expert => "expert",
        }
    }
}

/// Body of `POST /explain`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
    /// Defaults to "beginner" when omitted.
    #[serde(default)]
    pub audience_level: AudienceLevel,
}

impl ExplainRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() {
            return Err(ApiError::Validation("'code' must not be empty".into()));
        }
        Ok(())
    }
}

/// Body of `POST /convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub code: String,
    pub source_language: String,
    pub target_language: String,
}

impl ConvertRequest {
    /// Rejects empty fields and a conversion onto the same language.
    /// Language names are free text; equality is checked case-insensitively
    /// after trimming.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.code.trim().is_empty() {
            return Err(ApiError::Validation("'code' must not be empty".into()));
        }
        if self.source_language.trim().is_empty() {
            return Err(ApiError::Validation(
                "'source_language' must not be empty".into(),
            ));
        }
        if self.target_language.trim().is_empty() {
            return Err(ApiError::Validation(
                "'target_language' must not be empty".into(),
            ));
        }
        let source = self.source_language.trim();
        let target = self.target_language.trim();
        if source.eq_ignore_ascii_case(target) {
            return Err(ApiError::Validation(format!(
                "source and target language are both '{source}'; nothing to convert"
            )));
        }
        Ok(())
    }
}

/// Body of a successful `/explain` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Body of a successful `/convert` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub converted_code: String,
}

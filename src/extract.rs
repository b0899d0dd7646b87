//! Best-effort extraction of the assistant's text from a provider response.
//!
//! The policy is deliberate: a successful HTTP round-trip always yields some
//! text for the caller, even when the envelope is empty or unintelligible.
//! Degradation cases return fixed sentinel messages instead of failing the
//! request, and the whole policy lives here so it can be tested in isolation.

/// Returned when the envelope parses but the completion text is blank.
pub const EMPTY_COMPLETION_MESSAGE: &str = "The model returned an empty response.";

/// Returned when the body is not JSON or matches no known envelope shape.
pub const UNEXPECTED_FORMAT_MESSAGE: &str =
    "The model returned a response in an unexpected format.";

/// Pulls the first completion's text out of the raw response body.
///
/// - Non-empty `choices`: the first choice's `message.content`, trimmed.
///   Blank content maps to [`EMPTY_COMPLETION_MESSAGE`], never `""`.
/// - An `error` object instead of choices: a formatted message embedding the
///   provider's error text.
/// - Anything else: [`UNEXPECTED_FORMAT_MESSAGE`].
pub fn extract_completion_text(body: &str) -> String {
    let envelope: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return UNEXPECTED_FORMAT_MESSAGE.to_string(),
    };

    let content = envelope
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str());

    if let Some(text) = content {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return EMPTY_COMPLETION_MESSAGE.to_string();
        }
        return trimmed.to_string();
    }

    if let Some(detail) = provider_error_text(&envelope) {
        return format!("The model reported an error: {detail}");
    }

    UNEXPECTED_FORMAT_MESSAGE.to_string()
}

/// Error envelopes arrive either as `{"error": {"message": "..."}}` or, from
/// some gateways, `{"error": "..."}`.
fn provider_error_text(envelope: &serde_json::Value) -> Option<String> {
    let error = envelope.get("error")?;
    if let Some(msg) = error.get("message").and_then(|m| m.as_str()) {
        return Some(msg.to_string());
    }
    error.as_str().map(|s| s.to_string())
}

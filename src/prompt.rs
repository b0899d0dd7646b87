//! Prompt construction for the two supported operations.
//!
//! Each builder returns an ordered `system` + `user` pair. The caller's code
//! is embedded verbatim; no escaping or sanitization is applied beyond JSON
//! serialization, so text resembling instructions passes through unmodified.
//! That is an accepted limitation of the service, not something these
//! builders try to defend against.

use crate::models::api::AudienceLevel;
use crate::models::completion::ChatMessage;

/// Messages asking the model to explain `code` for the given audience.
pub fn explain_messages(code: &str, audience: AudienceLevel) -> Vec<ChatMessage> {
    let system = format!(
        "You are an expert software engineer who explains source code to a {} audience. \
         Keep the explanation accurate and match its depth and vocabulary to that audience.",
        audience.as_str()
    );
    let user = format!("Explain what the following code does:\n\n{code}");
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Messages asking the model to translate `code` between two languages.
///
/// The system message carries the "code only, no prose" instruction; the user
/// message restates the conversion alongside the embedded code.
pub fn convert_messages(code: &str, source_language: &str, target_language: &str) -> Vec<ChatMessage> {
    let system = format!(
        "You are an expert software engineer who translates {source_language} code into \
         {target_language}. Respond with only the converted {target_language} code. \
         Do not add prose, commentary, or markdown code fences."
    );
    let user = format!(
        "Convert the following {source_language} code to {target_language}:\n\n{code}"
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

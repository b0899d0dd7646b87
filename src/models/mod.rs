//! Data models for the HTTP surface and the provider wire format.
//!
//! Two submodules:
//! - `api`: Inbound request/response bodies for `/explain` and `/convert`,
//!   including field validation.
//! - `completion`: The outbound chat-completion request shape. The provider's
//!   response envelope is handled leniently as JSON in `crate::extract`.

pub mod api;
pub mod completion;

// Convenience re-exports for downstream users.
pub use api::{AudienceLevel, ConvertRequest, ConvertResponse, ExplainRequest, ExplainResponse};
pub use completion::{ChatCompletionRequest, ChatMessage, Role};

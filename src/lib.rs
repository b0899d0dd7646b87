#![forbid(unsafe_code)]
#![doc = r#"
Codesage

Explain and convert source code by relaying prompts to an LLM chat-completion
backend (OpenRouter-compatible).

Crate highlights
- Library: prompt construction (`prompt`), provider client behind a
  `CompletionProvider` trait (`client`), and tolerant response-text extraction
  (`extract`).
- HTTP server (in `server`): `POST /explain`, `POST /convert`, plus
  `GET /healthz` and `GET /status` probes.
- Stateless: every request is a single linear pass with no retries and no
  shared mutable state.

Modules
- `models`: Request/response bodies and the outbound wire format.
- `prompt`: System/user message pairs for each operation.
- `client`: The `CompletionProvider` trait and `OpenRouterClient`.
- `extract`: Best-effort extraction with fixed degradation sentinels.
- `server`: Axum router/handlers (the binary uses this).
- `config`: Startup configuration; a missing provider key is fatal.
- `error`: The classified failure taxonomy.
- `util`: Shared helpers (tracing, env, CORS, HTTP client).
"#]

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod prompt;
pub mod server;
pub mod util;

// Re-export the primary seams for ergonomic library use.
pub use crate::client::{CompletionProvider, OpenRouterClient};
pub use crate::config::Config;
pub use crate::error::ApiError;

// Re-export model namespaces for convenience (downstream users can do
// `use codesage::api`).
pub use crate::models::{api, completion};

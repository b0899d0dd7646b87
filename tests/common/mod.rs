use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http::{HeaderMap, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How the stub answers `/chat/completions`.
#[derive(Clone)]
pub enum StubBehavior {
    /// JSON body with the given status.
    Json {
        status: StatusCode,
        body: serde_json::Value,
    },
    /// 200 JSON body delivered after a delay (for timeout tests).
    Delayed {
        delay: Duration,
        body: serde_json::Value,
    },
    /// Raw text body with the given status (for non-JSON envelope tests).
    Raw { status: StatusCode, body: String },
}

/// One request as the stub observed it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

struct StubState {
    behavior: StubBehavior,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the completion provider. Counts calls and records
/// request bodies so tests can assert the provider was (or was not) reached.
pub struct ProviderStub {
    base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
}

impl ProviderStub {
    pub async fn start(behavior: StubBehavior) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(StubState {
            behavior,
            calls: calls.clone(),
            requests: requests.clone(),
        });

        let router = Router::new()
            .route("/chat/completions", post(completions_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind provider stub");
        let addr = listener.local_addr().expect("provider stub local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let server = axum::serve(listener, router.into_make_service());
        tokio::spawn(async move {
            tokio::select! {
                res = server => {
                    if let Err(err) = res {
                        eprintln!("Provider stub server error: {err:?}");
                    }
                }
                _ = rx => {}
            }
        });

        ProviderStub {
            base_url: format!("http://{}", addr),
            calls,
            requests,
            shutdown: Mutex::new(Some(tx)),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn take_requests(&self) -> Vec<RecordedRequest> {
        let mut guard = self.requests.lock().expect("lock stub requests");
        guard.drain(..).collect()
    }
}

impl Drop for ProviderStub {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.shutdown.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
    }
}

async fn completions_handler(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    if let Ok(mut guard) = state.requests.lock() {
        guard.push(RecordedRequest {
            authorization,
            body,
        });
    }

    match &state.behavior {
        StubBehavior::Json { status, body } => (*status, Json(body.clone())).into_response(),
        StubBehavior::Delayed { delay, body } => {
            tokio::time::sleep(*delay).await;
            (StatusCode::OK, Json(body.clone())).into_response()
        }
        StubBehavior::Raw { status, body } => (*status, body.clone()).into_response(),
    }
}

/// A success envelope with a single assistant message.
pub fn completion_envelope(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-0001",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

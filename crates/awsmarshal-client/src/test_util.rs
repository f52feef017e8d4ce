//! A scripted transport for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use awsmarshal_core::{HttpTransport, RawResponse, TransportError};
use bytes::Bytes;
use http::{HeaderMap, Method};
use parking_lot::Mutex;

/// A request as the transport received it, after signing.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// HTTP method.
    pub method: Method,
    /// Full request URI.
    pub uri: String,
    /// Headers, including the signature.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl CapturedRequest {
    /// Body as UTF-8 text (lossy).
    #[must_use]
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<RawResponse>,
    requests: Vec<CapturedRequest>,
}

/// Answers requests from a queue of canned responses and records every
/// request it sees. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct StaticReplayTransport {
    state: Arc<Mutex<State>>,
}

impl StaticReplayTransport {
    /// Creates a transport with no responses queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `response` for the next unanswered request.
    pub fn push_response(&self, response: RawResponse) {
        self.state.lock().responses.push_back(response);
    }

    /// Every request seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().requests.clone()
    }

    /// Number of queued responses not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.lock().responses.len()
    }
}

impl HttpTransport for StaticReplayTransport {
    fn execute(&self, request: http::Request<Bytes>) -> Result<RawResponse, TransportError> {
        let (parts, body) = request.into_parts();
        let captured = CapturedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        };

        let mut state = self.state.lock();
        let response = state.responses.pop_front();
        let result = response.ok_or_else(|| TransportError::Exhausted {
            method: captured.method.to_string(),
            uri: captured.uri.clone(),
        });
        state.requests.push(captured);
        result
    }
}

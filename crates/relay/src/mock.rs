//! Mock relay implementations
//!
//! - `MockRelay`: stateless echo used by `RelayServiceFactory` when provider is `"mock"`
//! - `ScriptedRelay`: test double with call recording and queued outcomes
//!   (available under `cfg(test)` or the `test-support` feature)

use crate::{ChatbotRelay, RelayError, RelayReply, RelayRequest};

/// Mock chatbot relay that echoes the last message back
#[derive(Debug, Default, Clone, Copy)]
pub struct MockRelay;

impl MockRelay {
    /// Create a new mock relay
    pub fn new() -> Self {
        Self
    }
}

fn echo_reply(request: &RelayRequest) -> RelayReply {
    let last_message = request
        .messages
        .last()
        .map(|m| m.content.as_str())
        .unwrap_or("empty");

    RelayReply {
        content: format!("Mock reply to: {}", last_message),
    }
}

#[async_trait::async_trait]
impl ChatbotRelay for MockRelay {
    async fn relay(
        &self,
        endpoint_url: &str,
        request: &RelayRequest,
    ) -> Result<RelayReply, RelayError> {
        tracing::info!(
            endpoint = %endpoint_url,
            message_count = request.messages.len(),
            "Mock relay processing request"
        );
        Ok(echo_reply(request))
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedRelay;

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use std::collections::VecDeque;
    use std::sync::{Mutex, MutexGuard};

    use super::echo_reply;
    use crate::{ChatbotRelay, RelayError, RelayReply, RelayRequest};

    /// Programmable relay for tests: records calls, replays queued outcomes,
    /// and falls back to the mock echo once the queue is empty
    #[derive(Debug, Default)]
    pub struct ScriptedRelay {
        calls: Mutex<Vec<(String, RelayRequest)>>,
        outcomes: Mutex<VecDeque<Result<RelayReply, RelayError>>>,
    }

    impl ScriptedRelay {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result returned by the next unanswered call
        pub fn push_outcome(&self, outcome: Result<RelayReply, RelayError>) {
            lock(&self.outcomes).push_back(outcome);
        }

        /// Queue a successful reply
        pub fn push_reply(&self, content: &str) {
            self.push_outcome(Ok(RelayReply {
                content: content.to_string(),
            }));
        }

        /// Every `(endpoint_url, request)` received so far
        pub fn calls(&self) -> Vec<(String, RelayRequest)> {
            lock(&self.calls).clone()
        }

        pub fn call_count(&self) -> usize {
            lock(&self.calls).len()
        }
    }

    // A poisoned lock only means another test thread panicked mid-call.
    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[async_trait::async_trait]
    impl ChatbotRelay for ScriptedRelay {
        async fn relay(
            &self,
            endpoint_url: &str,
            request: &RelayRequest,
        ) -> Result<RelayReply, RelayError> {
            lock(&self.calls).push((endpoint_url.to_string(), request.clone()));

            match lock(&self.outcomes).pop_front() {
                Some(outcome) => outcome,
                None => Ok(echo_reply(request)),
            }
        }
    }
}

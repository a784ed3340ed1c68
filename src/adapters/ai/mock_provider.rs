//! Mock completion provider for testing.
//!
//! Configurable to return scripted responses or inject errors, with call
//! tracking for verification. Tests can run the full request path without
//! calling the real completion API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockCompletionProvider::new()
//!     .with_responses(["first", "second", "third"]);
//!
//! let text = provider.complete(request).await?;
//! assert_eq!(text, "first");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{CompletionError, CompletionProvider, CompletionRequest};

/// A configured mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(String),
    Failure(MockFailure),
}

/// Mock failure modes for testing error handling.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate provider unavailable.
    Unavailable(String),
    /// Simulate a network error.
    Network(String),
}

impl From<MockFailure> for CompletionError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::AuthenticationFailed => CompletionError::AuthenticationFailed,
            MockFailure::Unavailable(message) => CompletionError::Unavailable(message),
            MockFailure::Network(message) => CompletionError::Network(message),
        }
    }
}

/// Mock completion provider.
///
/// Outcomes are consumed in order; once exhausted, a fallback response is
/// returned so open-ended tests keep working.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionProvider {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues successful responses, consumed in order.
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            for response in responses {
                outcomes.push_back(MockOutcome::Success(response.into()));
            }
        }
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Failure(failure));
        self
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of all requests received.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(request);

        match self.outcomes.lock().unwrap().pop_front() {
            Some(MockOutcome::Success(content)) => Ok(content),
            Some(MockOutcome::Failure(failure)) => Err(failure.into()),
            None => Ok("mock response".to_string()),
        }
    }
}

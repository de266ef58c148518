use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::client::{SearchClient, SearchClientFactory};
use super::error::{SearchError, SearchResult};
use super::model::RawRecord;

/// Failure kinds a mock can be scripted with.
///
/// `SearchError` carries non-cloneable detail, so scripts store the kind and
/// materialize the error per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Timeout,
    RateLimited,
    AuthExpired,
    Transport,
    Malformed,
}

impl MockFailure {
    fn into_error(self) -> SearchError {
        match self {
            MockFailure::Timeout => SearchError::Timeout { seconds: 10.0 },
            MockFailure::RateLimited => SearchError::RateLimited {
                message: "scripted".to_string(),
            },
            MockFailure::AuthExpired => SearchError::AuthExpired {
                message: "scripted".to_string(),
            },
            MockFailure::Transport => SearchError::Transport {
                url: "mock://registry".to_string(),
                message: "scripted".to_string(),
            },
            MockFailure::Malformed => SearchError::Malformed {
                message: "scripted".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Records(Vec<RawRecord>),
    Fail(MockFailure),
}

#[derive(Default)]
struct MockState {
    responses: HashMap<String, Scripted>,
    calls: Vec<String>,
}

/// Scripted in-memory registry client.
///
/// Clones share state, so a test can hand a clone to the orchestrator (or
/// use the client itself as a factory) and inspect calls afterwards.
#[derive(Clone, Default)]
pub struct MockSearchClient {
    state: Arc<Mutex<MockState>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the records returned for `query`. Unscripted queries return
    /// an empty record list.
    pub fn script(&self, query: &str, records: Vec<RawRecord>) {
        self.state
            .lock()
            .responses
            .insert(query.to_string(), Scripted::Records(records));
    }

    /// Scripts a failure for `query`.
    pub fn script_failure(&self, query: &str, failure: MockFailure) {
        self.state
            .lock()
            .responses
            .insert(query.to_string(), Scripted::Fail(failure));
    }

    /// Number of searches issued so far.
    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Queries issued so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }
}

impl SearchClient for MockSearchClient {
    async fn search(&mut self, query: &str) -> SearchResult<Vec<RawRecord>> {
        let mut state = self.state.lock();
        state.calls.push(query.to_string());

        match state.responses.get(query) {
            Some(Scripted::Records(records)) => Ok(records.clone()),
            Some(Scripted::Fail(failure)) => Err(failure.into_error()),
            None => Ok(Vec::new()),
        }
    }
}

impl SearchClientFactory for MockSearchClient {
    type Client = MockSearchClient;

    async fn build(&self) -> SearchResult<MockSearchClient> {
        Ok(self.clone())
    }
}

/// Convenience constructor for scripted records.
pub fn record(model: &str, level: &str, producer: &str, announced_at: &str) -> RawRecord {
    RawRecord {
        model: model.to_string(),
        declared_level_raw: level.to_string(),
        producer: producer.to_string(),
        registration_number: String::new(),
        category: String::new(),
        announced_at: announced_at.to_string(),
    }
}

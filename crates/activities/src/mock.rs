//! Test doubles for the activity host seams.
//!
//! Useful in unit and integration tests where a real activity, trace sink, or
//! backend connection is either unavailable or irrelevant.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::traits::BackendService;
use crate::{
    Activity, ActivityContext, ActivityDescriptor, ActivityError, InputParameterSet,
    OutputParameterSet, ParameterSpec, TraceSink,
};

/// Contract used by [`MockActivity`]: one required input, one output.
pub const MOCK_DESCRIPTOR: ActivityDescriptor = ActivityDescriptor {
    kind: "mock",
    inputs: &[ParameterSpec::required("Subject")],
    outputs: &["Result"],
};

/// Behaviour injected into `MockActivity` at construction time.
pub enum MockBehaviour {
    /// Bind a specific string under the `Result` output.
    ReturnValue(String),
    /// Fail with the given error.
    Fail(ActivityError),
}

/// A mock activity that records every input set it receives and returns a
/// programmer-specified result.
pub struct MockActivity {
    /// Label used in test assertions.
    pub name: String,
    /// What the activity will do when `execute` is called.
    pub behaviour: MockBehaviour,
    /// All input sets seen by this activity (in call order).
    pub calls: Arc<Mutex<Vec<InputParameterSet>>>,
}

impl MockActivity {
    /// Create a mock that always succeeds with the given `Result` value.
    pub fn returning(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            behaviour: MockBehaviour::ReturnValue(value.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with the given error.
    pub fn failing(name: impl Into<String>, error: ActivityError) -> Self {
        Self {
            name: name.into(),
            behaviour: MockBehaviour::Fail(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times this activity has been executed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Activity for MockActivity {
    fn descriptor(&self) -> &'static ActivityDescriptor {
        &MOCK_DESCRIPTOR
    }

    async fn execute(
        &self,
        inputs: &InputParameterSet,
        _ctx: &ActivityContext,
    ) -> Result<OutputParameterSet, ActivityError> {
        self.calls.lock().unwrap().push(inputs.clone());

        match &self.behaviour {
            MockBehaviour::ReturnValue(v) => {
                let mut outputs = OutputParameterSet::new();
                outputs.bind_string("Result", v.clone());
                Ok(outputs)
            }
            MockBehaviour::Fail(err) => Err(err.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Host fakes
// ---------------------------------------------------------------------------

/// In-memory trace sink that captures every line written to it.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingTrace {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything traced so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl TraceSink for RecordingTrace {
    fn trace(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_owned());
    }
}

/// In-memory backend fake keyed by `(entity, id)`.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    records: Mutex<HashMap<(String, Uuid), Value>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entity: impl Into<String>, id: Uuid, record: Value) {
        self.records.lock().unwrap().insert((entity.into(), id), record);
    }
}

#[async_trait]
impl BackendService for InMemoryBackend {
    async fn retrieve(&self, entity: &str, id: Uuid) -> Result<Value, ActivityError> {
        self.records
            .lock()
            .unwrap()
            .get(&(entity.to_owned(), id))
            .cloned()
            .ok_or_else(|| ActivityError::Configuration {
                name: "Target".to_owned(),
                value: format!("{entity}/{id}"),
                message: "no such record".to_owned(),
            })
    }
}

/// Context with fresh ids and a recording trace sink, for tests.
pub fn test_context() -> ActivityContext {
    ActivityContext {
        caller_id: Uuid::new_v4(),
        correlation_id: Uuid::new_v4(),
        tracer: RecordingTrace::new(),
        backend: None,
    }
}

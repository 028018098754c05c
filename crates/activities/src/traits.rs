//! The `Activity` trait — the contract every activity must fulfil.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{ActivityDescriptor, ActivityError, InputParameterSet, OutputParameterSet};

// ---------------------------------------------------------------------------
// Host-supplied context
// ---------------------------------------------------------------------------

/// Free-text diagnostic sink supplied by the host.
///
/// Content written here is for operators only; no activity may depend on it
/// for correctness.
pub trait TraceSink: Send + Sync {
    fn trace(&self, message: &str);
}

/// Production sink that forwards host diagnostics to the `tracing` crate.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn trace(&self, message: &str) {
        tracing::info!(target: "activity_host", "{message}");
    }
}

/// Backend data-access handle supplied by the host.
///
/// The built-in string activities never touch it; it is reserved for activity
/// kinds that look up business records.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Fetch a record of the given entity kind by id.
    async fn retrieve(&self, entity: &str, id: uuid::Uuid) -> Result<Value, ActivityError>;
}

/// Shared context passed to every activity during execution.
///
/// Defined here (in the activities crate) so both the engine and individual
/// activity implementations can import it without a circular dependency.
/// Identity and correlation ids are for diagnostics only.
#[derive(Clone)]
pub struct ActivityContext {
    /// Identity of the user on whose behalf the host invoked the activity.
    pub caller_id: uuid::Uuid,
    /// Correlation id tying this invocation to the host's trace.
    pub correlation_id: uuid::Uuid,
    /// Diagnostic sink.
    pub tracer: Arc<dyn TraceSink>,
    /// Business-data backend; `None` when the host provides no connection.
    pub backend: Option<Arc<dyn BackendService>>,
}

impl ActivityContext {
    /// Context with fresh ids and the `tracing`-backed sink.
    pub fn for_host() -> Self {
        Self {
            caller_id: uuid::Uuid::new_v4(),
            correlation_id: uuid::Uuid::new_v4(),
            tracer: Arc::new(TracingSink),
            backend: None,
        }
    }

    /// Write a line to the host's diagnostic sink.
    pub fn trace(&self, message: &str) {
        self.tracer.trace(message);
    }
}

impl std::fmt::Debug for ActivityContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityContext")
            .field("caller_id", &self.caller_id)
            .field("correlation_id", &self.correlation_id)
            .field("backend", &self.backend.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// The core activity trait.
///
/// An invocation is a single linear pass: read declared inputs (defaults
/// applied for absent optional ones), run the pure transformation, bind the
/// result under the declared output names.  Implementations must not mutate
/// the input set and must not retain anything across invocations — same
/// inputs, same outputs.
#[async_trait]
pub trait Activity: Send + Sync {
    /// The fixed parameter contract for this activity kind.
    fn descriptor(&self) -> &'static ActivityDescriptor;

    /// Execute the activity against one input set.
    ///
    /// On success every declared output is bound; on failure nothing is.
    async fn execute(
        &self,
        inputs: &InputParameterSet,
        ctx: &ActivityContext,
    ) -> Result<OutputParameterSet, ActivityError>;
}

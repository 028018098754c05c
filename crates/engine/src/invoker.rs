//! Activity invoker.
//!
//! `Invoker` runs the single linear pass of an activity invocation:
//! 1. Resolves the activity kind in the registry.
//! 2. Checks every required input against the declared contract — a missing
//!    parameter is caught before the transformation runs.
//! 3. Dispatches via the `Activity` trait object.
//!
//! Nothing is retained across invocations and the input set is never
//! mutated: an invocation either fully succeeds with all declared outputs
//! bound, or fully fails with no outputs.

use activities::{ActivityContext, InputParameterSet, OutputParameterSet};
use tracing::{error, info, instrument};

use crate::{ActivityRegistry, EngineError};

/// Stateless dispatcher over a startup-built registry.
pub struct Invoker {
    registry: ActivityRegistry,
}

impl Invoker {
    /// Create an invoker over the given registry.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self { registry }
    }

    /// Invoker over the built-in activity set.
    pub fn builtin() -> Self {
        Self::new(ActivityRegistry::builtin())
    }

    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    /// Run one activity invocation.
    ///
    /// # Errors
    /// - [`EngineError::UnknownActivity`] if `kind` is not registered.
    /// - [`EngineError::Activity`] for missing or malformed inputs.
    #[instrument(skip(self, inputs, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn invoke(
        &self,
        kind: &str,
        inputs: &InputParameterSet,
        ctx: &ActivityContext,
    ) -> Result<OutputParameterSet, EngineError> {
        let activity = self
            .registry
            .get(kind)
            .ok_or_else(|| EngineError::UnknownActivity(kind.to_owned()))?;

        // Fail fast on the contract before any transformation work.
        activity.descriptor().check_required(inputs)?;

        ctx.trace(&format!("entered '{kind}' (caller {})", ctx.caller_id));

        match activity.execute(inputs, ctx).await {
            Ok(outputs) => {
                ctx.trace(&format!("exiting '{kind}'"));
                info!("activity '{kind}' succeeded with {} output(s)", outputs.len());
                Ok(outputs)
            }
            Err(err) => {
                error!("activity '{kind}' failed: {err}");
                Err(err.into())
            }
        }
    }
}

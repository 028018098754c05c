//! Activity registry — kind identifier → implementation.
//!
//! Resolution happens once at startup; invoking an activity is then a plain
//! map lookup, never reflection or per-call type loading.

use std::collections::HashMap;
use std::sync::Arc;

use activities::{Activity, ActivityDescriptor, EncodeHtml, RegexReplace};

/// Maps activity kind strings to shared `Activity` implementations.
#[derive(Default)]
pub struct ActivityRegistry {
    entries: HashMap<&'static str, Arc<dyn Activity>>,
}

impl ActivityRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in string activities.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(RegexReplace));
        registry.register(Arc::new(EncodeHtml));
        registry
    }

    /// Register an activity under its descriptor's kind identifier.
    ///
    /// Registering a second activity under the same kind replaces the first.
    pub fn register(&mut self, activity: Arc<dyn Activity>) {
        self.entries.insert(activity.descriptor().kind, activity);
    }

    /// Look up an activity by kind.
    pub fn get(&self, kind: &str) -> Option<&Arc<dyn Activity>> {
        self.entries.get(kind)
    }

    /// Descriptors of every registered activity, sorted by kind.
    pub fn descriptors(&self) -> Vec<&'static ActivityDescriptor> {
        let mut all: Vec<_> = self.entries.values().map(|a| a.descriptor()).collect();
        all.sort_by_key(|d| d.kind);
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! The parameter contract — named inputs in, named outputs out.
//!
//! These types are the entire wire contract between an activity and its host:
//! the host hands over a JSON object of named inputs, the activity hands back
//! a JSON object of named outputs.  Both sets are built fresh per invocation
//! and discarded afterwards — no state survives a call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ActivityError;

// ---------------------------------------------------------------------------
// InputParameterSet
// ---------------------------------------------------------------------------

/// The named input parameters supplied by the host for one invocation.
///
/// Values are strings or null; the typed accessors enforce that.  The set is
/// never mutated by the core — activities only read from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParameterSet(Map<String, Value>);

impl InputParameterSet {
    /// Wrap a raw JSON object map.
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Build a set from `(name, value)` pairs; handy in tests.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Whether the named parameter is present with a non-null value.
    pub fn has(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(v) if !v.is_null())
    }

    /// Read a required string parameter.
    ///
    /// # Errors
    /// - [`ActivityError::MissingParameter`] if the parameter is absent or null.
    /// - [`ActivityError::Configuration`] if the value is not a string.
    pub fn required_str(&self, name: &str) -> Result<&str, ActivityError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(ActivityError::MissingParameter(name.to_owned())),
            Some(value) => Self::as_str(name, value),
        }
    }

    /// Read an optional string parameter.
    ///
    /// Absent or null yields `None`; the caller applies the declared default.
    ///
    /// # Errors
    /// [`ActivityError::Configuration`] if a present value is not a string.
    pub fn optional_str(&self, name: &str) -> Result<Option<&str>, ActivityError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::as_str(name, value).map(Some),
        }
    }

    fn as_str<'a>(name: &str, value: &'a Value) -> Result<&'a str, ActivityError> {
        value.as_str().ok_or_else(|| ActivityError::Configuration {
            name: name.to_owned(),
            value: value.to_string(),
            message: "expected a string value".to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// OutputParameterSet
// ---------------------------------------------------------------------------

/// The named output parameters produced by one successful invocation.
///
/// Populated only on full success — a failed invocation binds nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputParameterSet(Map<String, Value>);

impl OutputParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a string result under the declared output name.
    pub fn bind_string(&mut self, name: &str, value: String) {
        self.0.insert(name.to_owned(), Value::String(value));
    }

    /// Read a bound string output, if present.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ActivityDescriptor
// ---------------------------------------------------------------------------

/// Declaration of a single input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub required: bool,
    /// Default applied when an optional parameter is absent or null.
    pub default: Option<&'static str>,
}

impl ParameterSpec {
    pub const fn required(name: &'static str) -> Self {
        Self { name, required: true, default: None }
    }

    pub const fn optional(name: &'static str, default: &'static str) -> Self {
        Self { name, required: false, default: Some(default) }
    }
}

/// Static metadata pairing an activity kind with its parameter contract.
///
/// One descriptor exists per activity kind; the names never change across
/// invocations.  The engine checks required inputs against the descriptor
/// before the transformation runs.
#[derive(Debug, Clone, Copy)]
pub struct ActivityDescriptor {
    /// Kind identifier the registry resolves at startup.
    pub kind: &'static str,
    pub inputs: &'static [ParameterSpec],
    pub outputs: &'static [&'static str],
}

impl ActivityDescriptor {
    /// Verify every required input is present and non-null.
    ///
    /// # Errors
    /// [`ActivityError::MissingParameter`] naming the first absent input.
    pub fn check_required(&self, inputs: &InputParameterSet) -> Result<(), ActivityError> {
        for spec in self.inputs.iter().filter(|s| s.required) {
            if !inputs.has(spec.name) {
                return Err(ActivityError::MissingParameter(spec.name.to_owned()));
            }
        }
        Ok(())
    }
}

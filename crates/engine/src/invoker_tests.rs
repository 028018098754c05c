//! Integration tests for the activity invoker.
//!
//! These exercise the full Validate → Transform → Bind pass through the
//! built-in registry, plus the host seams via the test doubles in
//! `activities::mock` — no real workflow host is required.

use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use activities::mock::{test_context, InMemoryBackend, MockActivity, RecordingTrace};
use activities::{ActivityContext, ActivityError, BackendService, InputParameterSet};

use crate::{EngineError, Invoker};

fn regex_inputs(subject: &str, pattern: &str, replacement: Value) -> InputParameterSet {
    InputParameterSet::from_pairs([
        ("StringToSearch", json!(subject)),
        ("Pattern", json!(pattern)),
        ("ReplacementValue", replacement),
    ])
}

// ============================================================
// End-to-end scenarios through the built-in registry
// ============================================================

#[tokio::test]
async fn regex_replace_single_occurrence() {
    let invoker = Invoker::builtin();
    let inputs = regex_inputs("1 is the first number", "1", json!("One"));

    let outputs = invoker.invoke("regex_replace", &inputs, &test_context()).await.unwrap();
    assert_eq!(outputs.get_str("ReplacedString"), Some("One is the first number"));
}

#[tokio::test]
async fn regex_replace_null_replacement_deletes_matches() {
    let invoker = Invoker::builtin();
    let inputs = regex_inputs(
        "1 is    the    first number,    1 is    good",
        r"\s+",
        Value::Null,
    );

    let outputs = invoker.invoke("regex_replace", &inputs, &test_context()).await.unwrap();
    assert_eq!(outputs.get_str("ReplacedString"), Some("1isthefirstnumber,1isgood"));
}

#[tokio::test]
async fn regex_replace_strips_tags_and_leaves_plain_text_alone() {
    let invoker = Invoker::builtin();

    let stripped = invoker
        .invoke(
            "regex_replace",
            &regex_inputs("<span>Hello World</span>", "<[^>]*>", json!("")),
            &test_context(),
        )
        .await
        .unwrap();
    assert_eq!(stripped.get_str("ReplacedString"), Some("Hello World"));

    let untouched = invoker
        .invoke(
            "regex_replace",
            &regex_inputs("Hello World!", "<[^>]*>", json!("")),
            &test_context(),
        )
        .await
        .unwrap();
    assert_eq!(untouched.get_str("ReplacedString"), Some("Hello World!"));
}

#[tokio::test]
async fn regex_replace_rejects_unparsable_pattern() {
    let invoker = Invoker::builtin();
    let inputs = regex_inputs("anything", "[unbalanced", json!("x"));

    let err = invoker.invoke("regex_replace", &inputs, &test_context()).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Activity(ActivityError::Configuration { ref name, .. }) if name == "Pattern"
    ));
}

#[tokio::test]
async fn encode_html_encodes_named_case() {
    let invoker = Invoker::builtin();
    let inputs = InputParameterSet::from_pairs([("StringToEncode", json!("Svendborg Værft A/S"))]);

    let outputs = invoker.invoke("encode_html", &inputs, &test_context()).await.unwrap();
    assert_eq!(outputs.get_str("EncodedString"), Some("Svendborg V&#230;rft A/S"));
}

#[tokio::test]
async fn unknown_kind_is_rejected() {
    let invoker = Invoker::builtin();
    let inputs = InputParameterSet::default();

    let err = invoker.invoke("send_fax", &inputs, &test_context()).await.unwrap_err();
    assert!(matches!(err, EngineError::UnknownActivity(kind) if kind == "send_fax"));
}

// ============================================================
// Contract checking happens before dispatch
// ============================================================

#[tokio::test]
async fn missing_required_input_is_caught_before_the_activity_runs() {
    let mock = MockActivity::returning("never_reached", "output");
    let calls = Arc::clone(&mock.calls);

    let mut registry = crate::ActivityRegistry::new();
    registry.register(Arc::new(mock));
    let invoker = Invoker::new(registry);

    // MOCK_DESCRIPTOR requires "Subject"; supply nothing.
    let err = invoker
        .invoke("mock", &InputParameterSet::default(), &test_context())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::Activity(ActivityError::MissingParameter(name)) if name == "Subject"
    ));
    assert_eq!(calls.lock().unwrap().len(), 0, "activity must not have been dispatched");
}

#[tokio::test]
async fn activity_failure_binds_no_outputs() {
    let mock = MockActivity::failing(
        "boom",
        ActivityError::Configuration {
            name: "Subject".into(),
            value: "bad".into(),
            message: "rejected".into(),
        },
    );
    let mut registry = crate::ActivityRegistry::new();
    registry.register(Arc::new(mock));
    let invoker = Invoker::new(registry);

    let inputs = InputParameterSet::from_pairs([("Subject", json!("bad"))]);
    let result = invoker.invoke("mock", &inputs, &test_context()).await;
    assert!(result.is_err());
}

// ============================================================
// Host context plumbing
// ============================================================

#[tokio::test]
async fn invoker_traces_entry_and_exit_with_caller_identity() {
    let trace = RecordingTrace::new();
    let ctx = ActivityContext {
        caller_id: Uuid::new_v4(),
        correlation_id: Uuid::new_v4(),
        tracer: Arc::clone(&trace) as Arc<dyn activities::TraceSink>,
        backend: None,
    };

    let invoker = Invoker::builtin();
    let inputs = InputParameterSet::from_pairs([("StringToEncode", json!("plain"))]);
    invoker.invoke("encode_html", &inputs, &ctx).await.unwrap();

    let lines = trace.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("entered 'encode_html'"));
    assert!(lines[0].contains(&ctx.caller_id.to_string()));
    assert!(lines[1].contains("exiting 'encode_html'"));
}

#[tokio::test]
async fn backend_handle_is_available_but_unused_by_string_activities() {
    let backend = Arc::new(InMemoryBackend::new());
    let id = Uuid::new_v4();
    backend.insert("account", id, json!({ "name": "Svendborg Værft A/S" }));

    let mut ctx = test_context();
    ctx.backend = Some(Arc::clone(&backend) as Arc<dyn BackendService>);

    // The fake answers lookups for activity kinds that need them...
    let record = ctx.backend.as_ref().unwrap().retrieve("account", id).await.unwrap();
    assert_eq!(record["name"], "Svendborg Værft A/S");

    // ...while the built-in string activities complete without touching it.
    let invoker = Invoker::builtin();
    let inputs = InputParameterSet::from_pairs([("StringToEncode", json!("ok"))]);
    let outputs = invoker.invoke("encode_html", &inputs, &ctx).await.unwrap();
    assert_eq!(outputs.get_str("EncodedString"), Some("ok"));
}

// ============================================================
// Purity
// ============================================================

#[tokio::test]
async fn repeat_invocations_with_same_inputs_yield_same_outputs() {
    let invoker = Invoker::builtin();
    let inputs = regex_inputs("1 is the first number, 1 is good", "1", json!("One"));

    let first = invoker.invoke("regex_replace", &inputs, &test_context()).await.unwrap();
    let second = invoker.invoke("regex_replace", &inputs, &test_context()).await.unwrap();

    assert_eq!(first.get_str("ReplacedString"), Some("One is the first number, One is good"));
    assert_eq!(first.get_str("ReplacedString"), second.get_str("ReplacedString"));
}

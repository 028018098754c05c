//! `encode_html` — escape a string for safe embedding in HTML.

use async_trait::async_trait;

use crate::{
    Activity, ActivityContext, ActivityDescriptor, ActivityError, InputParameterSet,
    OutputParameterSet, ParameterSpec,
};

/// Parameter contract for [`EncodeHtml`].
pub const DESCRIPTOR: ActivityDescriptor = ActivityDescriptor {
    kind: "encode_html",
    inputs: &[ParameterSpec::required("StringToEncode")],
    outputs: &["EncodedString"],
};

/// Whether a character must be escaped.
///
/// Rule: the HTML metacharacters `& < > " '` plus every character above
/// U+007E.  ASCII letters, digits, spaces, and common punctuation pass
/// through unchanged.
fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'') || ch as u32 > 0x7E
}

/// Encode `input` by replacing each character requiring escaping with its
/// decimal numeric character reference (`&#N;`).
///
/// A single left-to-right pass preserving the order and count of unescaped
/// characters.  Total over any string — there is no failure mode.  Because
/// `&` is itself escaped, encoding already-encoded text escapes the
/// ampersands of its references again; callers wanting idempotence must
/// encode exactly once.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if needs_escape(ch) {
            out.push_str(&format!("&#{};", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Activity adapter binding the host parameter set to [`encode`].
#[derive(Debug, Default)]
pub struct EncodeHtml;

#[async_trait]
impl Activity for EncodeHtml {
    fn descriptor(&self) -> &'static ActivityDescriptor {
        &DESCRIPTOR
    }

    async fn execute(
        &self,
        inputs: &InputParameterSet,
        _ctx: &ActivityContext,
    ) -> Result<OutputParameterSet, ActivityError> {
        let subject = inputs.required_str("StringToEncode")?;

        let mut outputs = OutputParameterSet::new();
        outputs.bind_string("EncodedString", encode(subject));
        Ok(outputs)
    }
}

//! `regex_replace` — replace every match of a pattern in a string.

use async_trait::async_trait;
use regex::Regex;

use crate::{
    Activity, ActivityContext, ActivityDescriptor, ActivityError, InputParameterSet,
    OutputParameterSet, ParameterSpec,
};

/// Parameter contract for [`RegexReplace`].
pub const DESCRIPTOR: ActivityDescriptor = ActivityDescriptor {
    kind: "regex_replace",
    inputs: &[
        ParameterSpec::required("StringToSearch"),
        ParameterSpec::required("Pattern"),
        ParameterSpec::optional("ReplacementValue", ""),
    ],
    outputs: &["ReplacedString"],
};

/// Replace every non-overlapping match of `pattern` in `subject` with
/// `replacement`.
///
/// Matching is global and case-sensitive unless the pattern itself says
/// otherwise.  An empty replacement deletes the matched substrings.
///
/// # Errors
/// [`ActivityError::Configuration`] carrying the offending pattern when it
/// does not parse — a malformed pattern is never treated as "no match".
pub fn replace_all(
    subject: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String, ActivityError> {
    let re = Regex::new(pattern).map_err(|e| ActivityError::Configuration {
        name: "Pattern".to_owned(),
        value: pattern.to_owned(),
        message: e.to_string(),
    })?;
    Ok(re.replace_all(subject, replacement).into_owned())
}

/// Activity adapter binding the host parameter set to [`replace_all`].
#[derive(Debug, Default)]
pub struct RegexReplace;

#[async_trait]
impl Activity for RegexReplace {
    fn descriptor(&self) -> &'static ActivityDescriptor {
        &DESCRIPTOR
    }

    async fn execute(
        &self,
        inputs: &InputParameterSet,
        _ctx: &ActivityContext,
    ) -> Result<OutputParameterSet, ActivityError> {
        let subject = inputs.required_str("StringToSearch")?;
        let pattern = inputs.required_str("Pattern")?;
        // Absent or null replacement means "delete the matches".
        let replacement = inputs.optional_str("ReplacementValue")?.unwrap_or("");

        let replaced = replace_all(subject, pattern, replacement)?;

        let mut outputs = OutputParameterSet::new();
        outputs.bind_string("ReplacedString", replaced);
        Ok(outputs)
    }
}

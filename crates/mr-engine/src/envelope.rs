//! Pulling the response object out of a raw narrator reply.

use mr_core::Choice;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::lenient;
use crate::patch::Patch;

/// The structured part of a narrator reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeResponse {
    /// Prose for this turn.
    pub narration: String,
    /// Choices to present next.
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    /// Effects to apply.
    #[serde(default, deserialize_with = "patch_or_default")]
    pub patch: Patch,
}

impl NarrativeResponse {
    /// A response with narration only.
    pub fn narration(text: impl Into<String>) -> Self {
        Self {
            narration: text.into(),
            ..Self::default()
        }
    }

    /// The choice set for the next turn: the envelope's, else the patch's, else none.
    pub fn next_choices(&self) -> Vec<Choice> {
        self.choices
            .clone()
            .or_else(|| self.patch.choices.clone())
            .unwrap_or_default()
    }
}

fn patch_or_default<'de, D>(deserializer: D) -> Result<Patch, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::object::<D, Patch>(deserializer)?.unwrap_or_default())
}

/// Parse the span from the first `{` to the last `}` of a raw reply.
///
/// Text around the object (markdown fences, chatter) is ignored.
pub fn extract(raw: &str) -> EngineResult<NarrativeResponse> {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(EngineError::NoEnvelope);
    };
    if end < start {
        return Err(EngineError::NoEnvelope);
    }
    Ok(serde_json::from_str(&raw[start..=end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_core::Intent;

    #[test]
    fn strips_surrounding_text() {
        let raw = "Sure! ```json\n{\"narration\":\"You rest.\",\"patch\":{\"timeDelta\":8}}\n```";
        let r = extract(raw).unwrap();
        assert_eq!(r.narration, "You rest.");
        assert_eq!(r.patch.time_delta, Some(8));
    }

    #[test]
    fn missing_braces_fail() {
        assert!(matches!(extract("no json here"), Err(EngineError::NoEnvelope)));
        assert!(matches!(extract("} backwards {"), Err(EngineError::NoEnvelope)));
    }

    #[test]
    fn invalid_json_mentions_json() {
        let err = extract("{narration: oops}").unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn narration_is_required() {
        assert!(extract(r#"{"patch":{}}"#).is_err());
    }

    #[test]
    fn patch_of_wrong_shape_is_empty() {
        let r = extract(r#"{"narration":"Hm.","patch":"none"}"#).unwrap();
        assert_eq!(r.patch, Patch::default());
    }

    #[test]
    fn envelope_choices_win() {
        let r = extract(
            r#"{"narration":"x",
                "choices":[{"id":"a","label":"Top","intent":"social"}],
                "patch":{"choices":[{"id":"b","label":"Inner","intent":"rest"}]}}"#,
        )
        .unwrap();
        let next = r.next_choices();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].intent, Intent::Social);

        let inner = extract(
            r#"{"narration":"x","patch":{"choices":[{"id":"b","label":"Inner","intent":"rest"}]}}"#,
        )
        .unwrap();
        assert_eq!(inner.next_choices()[0].id, "b");
        assert!(NarrativeResponse::narration("x").next_choices().is_empty());
    }
}

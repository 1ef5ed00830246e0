//! Failed turns: collaborator errors and how they are reported.
//!
//! A failure never touches committed state. The turn log gets one error
//! entry and the choice set is replaced with a fallback.

use mr_core::{Choice, Intent};
use thiserror::Error;

/// An error from the narrator or scene-image collaborator.
///
/// The display text is what [`FailureKind::classify`] inspects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No usable credentials.
    #[error("API key missing or rejected: {0}")]
    Credentials(String),

    /// Usage limits reached.
    #[error("quota exhausted: {0}")]
    Quota(String),

    /// The service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Anything else, reported verbatim.
    #[error("{0}")]
    Other(String),
}

/// Failure categories, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing or rejected credentials.
    Credentials,
    /// Quota or rate limits.
    Quota,
    /// The reply could not be parsed.
    Malformed,
    /// Connectivity trouble.
    Network,
    /// Anything else.
    Unclassified,
}

impl FailureKind {
    /// Classify an error message by case-insensitive keyword; first match wins.
    pub fn classify(message: &str) -> Self {
        let text = message.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| text.contains(n));
        if has(&["api key"]) {
            Self::Credentials
        } else if has(&["quota", "resource_exhausted"]) {
            Self::Quota
        } else if has(&["json", "unexpected token"]) {
            Self::Malformed
        } else if has(&["network", "failed to fetch"]) {
            Self::Network
        } else {
            Self::Unclassified
        }
    }
}

/// The log text and fallback choices for a failed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Category.
    pub kind: FailureKind,
    /// Text for the error log entry.
    pub message: String,
    /// Choices replacing the current set.
    pub choices: Vec<Choice>,
}

impl FailureReport {
    /// Build the report for an error message.
    pub fn from_message(error: &str) -> Self {
        let kind = FailureKind::classify(error);
        let retry = || vec![Choice::new("retry", "Retry Last Action", Intent::Rest)];
        let (message, choices) = match kind {
            FailureKind::Credentials => (
                "A connection to the arcane energies could not be established. \
                 The realm's configuration seems to be missing."
                    .to_string(),
                vec![Choice::new("settings", "Check Settings", Intent::System)],
            ),
            FailureKind::Quota => (
                "Your connection to the arcane energies has been temporarily suspended \
                 due to overuse. Please check your API plan and billing details, or try \
                 again later."
                    .to_string(),
                vec![Choice::new("settings", "Check API Settings", Intent::System)],
            ),
            FailureKind::Malformed => (
                "The world's response was garbled and indistinct, like a whisper on the \
                 wind. Perhaps we should try again."
                    .to_string(),
                retry(),
            ),
            FailureKind::Network => (
                "The connection to the ethereal plane is unstable. Please check your \
                 connection to the physical world."
                    .to_string(),
                retry(),
            ),
            FailureKind::Unclassified => (
                format!("The world shudders with an unknown force. ({error})"),
                retry(),
            ),
        };
        Self {
            kind,
            message,
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_order() {
        assert_eq!(FailureKind::classify("Invalid API KEY"), FailureKind::Credentials);
        assert_eq!(
            FailureKind::classify("RESOURCE_EXHAUSTED: api key quota"),
            FailureKind::Credentials
        );
        assert_eq!(
            FailureKind::classify("429 RESOURCE_EXHAUSTED"),
            FailureKind::Quota
        );
        assert_eq!(
            FailureKind::classify("Unexpected token < in JSON"),
            FailureKind::Malformed
        );
        assert_eq!(
            FailureKind::classify("network json failure"),
            FailureKind::Malformed
        );
        assert_eq!(FailureKind::classify("Failed to fetch"), FailureKind::Network);
        assert_eq!(FailureKind::classify("boom"), FailureKind::Unclassified);
    }

    #[test]
    fn service_error_text_classifies_itself() {
        let cases = [
            (ServiceError::Credentials("none set".into()), FailureKind::Credentials),
            (ServiceError::Quota("daily".into()), FailureKind::Quota),
            (ServiceError::Network("timeout".into()), FailureKind::Network),
            (ServiceError::Other("odd".into()), FailureKind::Unclassified),
        ];
        for (err, kind) in cases {
            assert_eq!(FailureKind::classify(&err.to_string()), kind);
        }
    }

    #[test]
    fn credentials_route_to_settings() {
        let r = FailureReport::from_message("api key not valid");
        assert_eq!(r.choices.len(), 1);
        assert_eq!(r.choices[0].id, "settings");
        assert_eq!(r.choices[0].intent, Intent::System);
        assert!(r.message.contains("configuration seems to be missing"));
    }

    #[test]
    fn unclassified_embeds_error() {
        let r = FailureReport::from_message("dragon ate the server");
        assert_eq!(
            r.message,
            "The world shudders with an unknown force. (dragon ate the server)"
        );
        assert_eq!(r.choices[0].id, "retry");
        assert_eq!(r.choices[0].intent, Intent::Rest);
    }

    #[test]
    fn malformed_message() {
        let r = FailureReport::from_message("invalid JSON in narrator reply: eof");
        assert_eq!(r.kind, FailureKind::Malformed);
        assert!(r.message.starts_with("The world's response was garbled"));
    }
}

//! Natural-language styling boundary.
//!
//! The service that turns a prompt into a partial-state patch is an opaque
//! collaborator behind [`StyleAssistant`]. The core only constrains its
//! output shape and routes successful patches through the same merge path
//! as manual edits. Failures surface as a message and never touch state.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patch::StylePatch;
use crate::session::EditorSession;
use crate::state::StyleState;

/// A successful assistant reply: the changes to apply plus an optional
/// human-readable summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistResponse {
    pub changes: StylePatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The opaque prompt-to-patch service.
pub trait StyleAssistant {
    /// Turn a prompt plus the current state snapshot into a partial-state
    /// patch. Transport failures map to [`EditorError::assist`](crate::error::EditorError::assist).
    fn suggest(&self, prompt: &str, current: &StyleState) -> Result<AssistResponse>;
}

/// What the caller branches on after a prompt round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Run one prompt against the session. On success the returned changes go
/// through `apply_patch`; on failure the session is left untouched and the
/// failure message is surfaced.
pub fn run_prompt(
    session: &mut EditorSession,
    assistant: &dyn StyleAssistant,
    prompt: &str,
) -> AssistOutcome {
    let snapshot = session.effective_state();
    match assistant.suggest(prompt, &snapshot) {
        Ok(response) => {
            session.apply_patch(&response.changes);
            AssistOutcome {
                success: true,
                message: response.message,
            }
        }
        Err(err) => AssistOutcome {
            success: false,
            message: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::patch::EffectsPatch;

    struct CannedAssistant(StylePatch);

    impl StyleAssistant for CannedAssistant {
        fn suggest(&self, _prompt: &str, _current: &StyleState) -> Result<AssistResponse> {
            Ok(AssistResponse {
                changes: self.0.clone(),
                message: Some("done".into()),
            })
        }
    }

    struct FailingAssistant;

    impl StyleAssistant for FailingAssistant {
        fn suggest(&self, _prompt: &str, _current: &StyleState) -> Result<AssistResponse> {
            Err(EditorError::assist("network unreachable"))
        }
    }

    #[test]
    fn successful_prompts_merge_through_the_patch_path() {
        let mut session = EditorSession::new();
        let assistant = CannedAssistant(StylePatch {
            effects: Some(EffectsPatch {
                opacity: Some(60.0),
                blur: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let outcome = run_prompt(&mut session, &assistant, "make it softer");
        assert!(outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("done"));
        assert_eq!(session.base().effects.opacity, 60.0);
        assert_eq!(session.base().effects.blur, 2.0);
        // Untouched leaves keep their values.
        assert_eq!(session.base().effects.brightness, 100.0);
    }

    #[test]
    fn failures_surface_a_message_without_mutating_state() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::opacity(80.0));
        let before = session.clone();

        let outcome = run_prompt(&mut session, &FailingAssistant, "do a thing");
        assert!(!outcome.success);
        assert!(outcome.message.unwrap().contains("network unreachable"));
        assert_eq!(session, before);
    }

    #[test]
    fn response_patch_parses_from_service_json() {
        let response: AssistResponse = serde_json::from_str(
            r##"{"changes":{"appearance":{"backgroundColor":"#112233"},"effects":{"opacity":75}},"message":"tinted"}"##,
        )
        .unwrap();

        let mut session = EditorSession::new();
        session.apply_patch(&response.changes);
        assert_eq!(
            session.base().appearance.background_color.as_deref(),
            Some("#112233")
        );
        assert_eq!(session.base().effects.opacity, 75.0);
    }
}

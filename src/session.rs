//! The editing session: one element being edited.
//!
//! An [`EditorSession`] owns the canonical [`StyleState`], the per-breakpoint
//! override records, and the currently selected breakpoint. Every mutation
//! path routes through it, so there is no ambient editor state anywhere else
//! in the crate.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patch::StylePatch;
use crate::state::{Breakpoint, Effects, StyleState, Transforms, Transforms3D};

// ── Breakpoint overrides ───────────────────────────────────────────────

/// One sparse override record per non-base breakpoint. Base is represented
/// by the canonical state itself, so it carries no record here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointOverrides {
    #[serde(skip_serializing_if = "StylePatch::is_empty")]
    pub sm: StylePatch,
    #[serde(skip_serializing_if = "StylePatch::is_empty")]
    pub md: StylePatch,
    #[serde(skip_serializing_if = "StylePatch::is_empty")]
    pub lg: StylePatch,
    #[serde(skip_serializing_if = "StylePatch::is_empty")]
    pub xl: StylePatch,
    #[serde(rename = "2xl", skip_serializing_if = "StylePatch::is_empty")]
    pub xxl: StylePatch,
}

impl BreakpointOverrides {
    /// The override record for a breakpoint; `None` for base.
    pub fn get(&self, bp: Breakpoint) -> Option<&StylePatch> {
        match bp {
            Breakpoint::Base => None,
            Breakpoint::Sm => Some(&self.sm),
            Breakpoint::Md => Some(&self.md),
            Breakpoint::Lg => Some(&self.lg),
            Breakpoint::Xl => Some(&self.xl),
            Breakpoint::Xxl => Some(&self.xxl),
        }
    }

    fn get_mut(&mut self, bp: Breakpoint) -> Option<&mut StylePatch> {
        match bp {
            Breakpoint::Base => None,
            Breakpoint::Sm => Some(&mut self.sm),
            Breakpoint::Md => Some(&mut self.md),
            Breakpoint::Lg => Some(&mut self.lg),
            Breakpoint::Xl => Some(&mut self.xl),
            Breakpoint::Xxl => Some(&mut self.xxl),
        }
    }

    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL
            .iter()
            .all(|bp| self.get(*bp).map_or(true, StylePatch::is_empty))
    }
}

/// Resolve the effective state for a breakpoint: the base state with the
/// breakpoint's override leaves applied. Base resolves to the base state
/// itself; absent override leaves keep their base values.
pub fn resolve(base: &StyleState, overrides: &BreakpointOverrides, bp: Breakpoint) -> StyleState {
    let mut effective = base.clone();
    if let Some(patch) = overrides.get(bp) {
        patch.apply_to(&mut effective);
    }
    effective
}

// ── The session ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSession {
    base: StyleState,
    overrides: BreakpointOverrides,
    current: Breakpoint,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(base: StyleState) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    /// Parse a session document, accepting either a full session (base +
    /// overrides) or a bare state object.
    pub fn from_json(json: &str) -> Result<Self> {
        if let Ok(session) = serde_json::from_str::<EditorSession>(json) {
            // A bare StyleState also deserializes as an all-default session
            // (every field optional), so only accept it when it carries the
            // session shape; otherwise fall through to the state parse.
            if json.contains("\"base\"") {
                return Ok(session);
            }
        }
        let state: StyleState = serde_json::from_str(json)?;
        Ok(Self::with_state(state))
    }

    pub fn base(&self) -> &StyleState {
        &self.base
    }

    pub fn overrides(&self) -> &BreakpointOverrides {
        &self.overrides
    }

    pub fn current_breakpoint(&self) -> Breakpoint {
        self.current
    }

    pub fn set_current_breakpoint(&mut self, bp: Breakpoint) {
        self.current = bp;
    }

    /// Replace the canonical state wholesale (preset load). Overrides are
    /// left as they are; the preset snapshot never aliases the live state.
    pub fn replace_state(&mut self, state: StyleState) {
        self.base = state;
    }

    // ── Resolution ─────────────────────────────────────────────────────

    /// Effective state for a breakpoint.
    pub fn resolve(&self, bp: Breakpoint) -> StyleState {
        resolve(&self.base, &self.overrides, bp)
    }

    /// Effective state for the currently selected breakpoint.
    pub fn effective_state(&self) -> StyleState {
        self.resolve(self.current)
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Route an edit to the base state or a breakpoint override record.
    ///
    /// `target = None` means "the currently selected breakpoint". Edits to
    /// base apply leaf-by-leaf onto the canonical state; edits to any other
    /// breakpoint accumulate in that breakpoint's override record. Either
    /// way only the written path changes — untouched branches are never
    /// rewritten.
    pub fn apply_at(&mut self, patch: &StylePatch, target: Option<Breakpoint>) {
        let bp = target.unwrap_or(self.current);
        match self.overrides.get_mut(bp) {
            None => patch.apply_to(&mut self.base),
            Some(record) => record.merge_from(patch),
        }
    }

    /// Apply a sparse patch to the canonical state regardless of the
    /// selected breakpoint. This is the merge path shared by manual bulk
    /// edits, the styling assistant, presets, and templates.
    pub fn apply_patch(&mut self, patch: &StylePatch) {
        patch.apply_to(&mut self.base);
    }

    // ── Resets ─────────────────────────────────────────────────────────

    /// Restore the documented defaults and clear every override record.
    pub fn reset_all(&mut self) {
        self.base = StyleState::default();
        self.overrides = BreakpointOverrides::default();
    }

    /// Restore only the 2D and 3D transform records.
    pub fn reset_transforms(&mut self) {
        self.base.transforms = Transforms::default();
        self.base.transforms_3d = Transforms3D::default();
    }

    /// Restore only the effects record.
    pub fn reset_effects(&mut self) {
        self.base.effects = Effects::default();
    }

    /// Drop a single breakpoint's override record. No-op for base.
    pub fn clear_breakpoint_overrides(&mut self, bp: Breakpoint) {
        if let Some(record) = self.overrides.get_mut(bp) {
            *record = StylePatch::default();
        }
    }

    pub fn has_breakpoint_overrides(&self, bp: Breakpoint) -> bool {
        self.overrides
            .get(bp)
            .map_or(false, |record| !record.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{SpacingPatch, TransformsPatch};
    use crate::state::{Corner, PositionKind, Side, Spacing};

    #[test]
    fn empty_overrides_resolve_to_base_for_every_breakpoint() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::padding_side(Side::Left, "16"));
        for bp in Breakpoint::ALL {
            assert_eq!(session.resolve(bp), *session.base());
        }
    }

    #[test]
    fn override_replaces_exactly_its_leaves() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            padding: Some(Spacing {
                l: "16".into(),
                t: "8".into(),
                r: "16".into(),
                b: "8".into(),
            }.into()),
            ..Default::default()
        });

        session.apply_at(&StylePatch::padding_side(Side::Left, "32"), Some(Breakpoint::Md));

        let md = session.resolve(Breakpoint::Md);
        assert_eq!(md.padding.l, "32");
        assert_eq!(md.padding.t, "8");
        assert_eq!(md.padding.r, "16");
        // Base stays untouched.
        assert_eq!(session.base().padding.l, "16");
        // Unrelated breakpoints see pure base.
        assert_eq!(session.resolve(Breakpoint::Lg), *session.base());
    }

    #[test]
    fn resolution_is_deterministic_by_value() {
        let mut session = EditorSession::new();
        session.apply_at(&StylePatch::scale(150.0), Some(Breakpoint::Sm));
        assert_eq!(session.resolve(Breakpoint::Sm), session.resolve(Breakpoint::Sm));
    }

    #[test]
    fn edits_route_to_the_current_breakpoint_when_no_target_given() {
        let mut session = EditorSession::new();
        session.set_current_breakpoint(Breakpoint::Lg);
        session.apply_at(&StylePatch::position_kind(PositionKind::Absolute), None);

        assert_eq!(session.base().position.kind, PositionKind::Relative);
        assert!(session.has_breakpoint_overrides(Breakpoint::Lg));
        assert_eq!(
            session.resolve(Breakpoint::Lg).position.kind,
            PositionKind::Absolute
        );
    }

    #[test]
    fn deep_nested_radius_edit_targets_one_corner() {
        let mut session = EditorSession::new();
        session.apply_at(&StylePatch::radius_all(8.0), None);
        session.apply_at(&StylePatch::radius_corner(Corner::Tl, 16.0), None);

        let radius = &session.base().border.radius;
        assert_eq!(radius.all, 8.0);
        assert_eq!(radius.tl, 16.0);
        assert_eq!(radius.tr, 0.0);
    }

    #[test]
    fn breakpoint_edits_accumulate_in_the_override_record() {
        let mut session = EditorSession::new();
        session.apply_at(&StylePatch::padding_side(Side::Left, "4"), Some(Breakpoint::Sm));
        session.apply_at(&StylePatch::padding_side(Side::Top, "2"), Some(Breakpoint::Sm));

        let record = session.overrides().get(Breakpoint::Sm).unwrap();
        assert_eq!(
            record.padding,
            Some(SpacingPatch {
                l: Some("4".into()),
                t: Some("2".into()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn scoped_resets_leave_everything_else_alone() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            transforms: Some(TransformsPatch {
                rotate: Some(45.0),
                scale: Some(150.0),
                ..Default::default()
            }),
            ..Default::default()
        });
        session.apply_patch(&StylePatch::opacity(50.0));
        session.apply_patch(&StylePatch::padding_side(Side::Left, "16"));

        session.reset_transforms();
        assert_eq!(session.base().transforms, Transforms::default());
        assert_eq!(session.base().effects.opacity, 50.0);
        assert_eq!(session.base().padding.l, "16");

        session.reset_effects();
        assert_eq!(session.base().effects, Effects::default());
        assert_eq!(session.base().padding.l, "16");
    }

    #[test]
    fn reset_all_restores_defaults_and_clears_overrides() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::rotate(10.0));
        session.apply_at(&StylePatch::opacity(40.0), Some(Breakpoint::Xl));
        assert!(session.has_breakpoint_overrides(Breakpoint::Xl));

        session.reset_all();
        assert_eq!(*session.base(), StyleState::default());
        assert!(!session.has_breakpoint_overrides(Breakpoint::Xl));
        assert!(session.overrides().is_empty());
    }

    #[test]
    fn clear_breakpoint_overrides_is_per_breakpoint() {
        let mut session = EditorSession::new();
        session.apply_at(&StylePatch::opacity(40.0), Some(Breakpoint::Sm));
        session.apply_at(&StylePatch::opacity(60.0), Some(Breakpoint::Md));

        session.clear_breakpoint_overrides(Breakpoint::Sm);
        assert!(!session.has_breakpoint_overrides(Breakpoint::Sm));
        assert!(session.has_breakpoint_overrides(Breakpoint::Md));
    }

    #[test]
    fn session_document_round_trips() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::background_color(Some("#112233")));
        session.apply_at(&StylePatch::opacity(80.0), Some(Breakpoint::Md));

        let json = serde_json::to_string(&session).unwrap();
        let back = EditorSession::from_json(&json).unwrap();
        assert_eq!(session, back);
    }

    #[test]
    fn bare_state_json_loads_as_a_fresh_session() {
        let json = r#"{"tag":"button","textContent":"Go","elementId":"cta"}"#;
        let session = EditorSession::from_json(json).unwrap();
        assert_eq!(session.base().tag, "button");
        assert_eq!(session.base().element_id, "cta");
        assert!(session.overrides().is_empty());
    }
}

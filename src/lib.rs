pub mod assist;
pub mod classes;
pub mod error;
pub mod export;
pub mod patch;
pub mod presets;
pub mod preview;
pub mod session;
pub mod state;
pub mod styles;
pub mod templates;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

use state::Breakpoint;

/// Render the complete HTML fragment for a session at one breakpoint:
/// resolve the effective state, generate classes and inline styles, and
/// export.
pub fn render_fragment(session: &session::EditorSession, bp: Breakpoint) -> String {
    let effective = session.resolve(bp);
    let class_string = classes::generate_classes(&effective, bp);
    let style_map = styles::generate_styles(&effective);
    export::to_html(&effective, &class_string, &style_map)
}

/// Render the CSS rule block for a session at one breakpoint.
pub fn render_css(session: &session::EditorSession, bp: Breakpoint) -> String {
    export::to_css(&session.resolve(bp))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::classes::{generate_all_breakpoints, generate_classes};
    use crate::patch::{EffectsPatch, StylePatch, Transforms3DPatch};
    use crate::session::EditorSession;
    use crate::state::{Breakpoint, Side, Spacing, StyleState};
    use crate::styles::generate_styles;

    #[test]
    fn end_to_end_button_fragment() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            tag: Some("a".into()),
            link: Some("https://x.com".into()),
            text_content: Some("Go".into()),
            padding: Some(
                Spacing {
                    l: "16".into(),
                    t: "8".into(),
                    r: "16".into(),
                    b: "8".into(),
                }
                .into(),
            ),
            ..Default::default()
        });
        session.apply_patch(&StylePatch::background_color(Some("#112233")));

        let html = render_fragment(&session, Breakpoint::Base);
        assert!(html.contains("href=\"https://x.com\""));
        assert!(html.contains("\n  Go\n"));
        assert!(html.contains("class=\"pl-16 pt-8 pr-16 pb-8 relative\""));
        assert!(html.contains("style=\"background-color: #112233\""));
    }

    #[test]
    fn end_to_end_classes_and_styles_do_not_overlap() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            effects: Some(EffectsPatch {
                opacity: Some(50.0),
                blur: Some(4.0),
                ..Default::default()
            }),
            ..Default::default()
        });
        session.apply_patch(&StylePatch::background_color(Some("#112233")));

        let effective = session.resolve(Breakpoint::Base);
        let class_string = generate_classes(&effective, Breakpoint::Base);
        let style_map = generate_styles(&effective);

        assert!(class_string.contains("opacity-50"));
        assert!(class_string.contains("blur-[4px]"));
        assert!(!class_string.contains("bg-"));
        assert_eq!(style_map.get("backgroundColor"), Some("#112233"));
        assert_eq!(style_map.get("opacity"), None);
        assert_eq!(style_map.get("filter"), None);
    }

    #[test]
    fn end_to_end_breakpoint_workflow() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::padding_side(Side::Left, "8"));

        // Edit while md is the active breakpoint.
        session.set_current_breakpoint(Breakpoint::Md);
        session.apply_at(&StylePatch::padding_side(Side::Left, "24"), None);
        session.set_current_breakpoint(Breakpoint::Base);

        let combined = generate_all_breakpoints(&session);
        assert!(combined.contains("pl-8"));
        assert!(combined.contains("md:pl-24"));

        // The md fragment reflects the override; base does not.
        assert!(render_fragment(&session, Breakpoint::Md).contains("md:pl-24"));
        assert!(render_fragment(&session, Breakpoint::Base).contains("pl-8"));

        session.clear_breakpoint_overrides(Breakpoint::Md);
        assert!(!generate_all_breakpoints(&session).contains("md:"));
    }

    #[test]
    fn end_to_end_3d_transforms_stay_inline() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            transforms_3d: Some(Transforms3DPatch {
                rotate_x: Some(15.0),
                rotate_y: Some(30.0),
                perspective: Some(8.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let effective = session.resolve(Breakpoint::Base);
        let style_map = generate_styles(&effective);
        assert_eq!(
            style_map.get("transform"),
            Some("rotateX(15deg) rotateY(30deg)")
        );
        assert_eq!(style_map.get("perspective"), Some("800px"));

        let class_string = generate_classes(&effective, Breakpoint::Base);
        assert!(!class_string.contains("rotate"));
    }

    #[test]
    fn end_to_end_css_export_matches_preview_rules() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            element_id: Some("hero".into()),
            ..Default::default()
        });
        session.apply_patch(&StylePatch::radius_all(8.0));
        session.apply_patch(&StylePatch::radius_corner(crate::state::Corner::Tl, 16.0));

        let css = render_css(&session, Breakpoint::Base);
        assert!(css.starts_with("#hero {"));
        // The corner override forces the four-corner form everywhere.
        assert!(css.contains("border-radius: 16px 0px 0px 0px;"));
        let preview = preview::preview_styles(session.base());
        assert_eq!(preview.get("borderRadius"), Some("16px 0px 0px 0px"));
    }

    #[test]
    fn end_to_end_template_then_prompt_then_export() {
        struct TintAssistant;
        impl assist::StyleAssistant for TintAssistant {
            fn suggest(
                &self,
                _prompt: &str,
                _current: &StyleState,
            ) -> error::Result<assist::AssistResponse> {
                Ok(assist::AssistResponse {
                    changes: serde_json::from_str(
                        r##"{"appearance":{"backgroundColor":"#0f172a"},"effects":{"opacity":90}}"##,
                    )
                    .unwrap(),
                    message: Some("darkened".into()),
                })
            }
        }

        let mut session = EditorSession::new();
        let templates = templates::builtin_templates();
        let card = templates.iter().find(|t| t.id == "card-basic").unwrap();
        session.apply_patch(&card.state);

        let outcome = assist::run_prompt(&mut session, &TintAssistant, "make it darker");
        assert!(outcome.success);

        let base = session.base();
        assert_eq!(base.appearance.background_color.as_deref(), Some("#0f172a"));
        assert_eq!(base.effects.opacity, 90.0);
        // Template values the prompt did not touch survive.
        assert_eq!(base.padding.l, "24");
        assert_eq!(base.effects.shadow, crate::state::Shadow::Md);

        let html = render_fragment(&session, Breakpoint::Base);
        assert!(html.contains("opacity-90"));
        assert!(html.contains("background-color: #0f172a"));
    }

    #[test]
    fn end_to_end_reset_clears_derived_output() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch::rotate(45.0));
        session.apply_at(&StylePatch::opacity(50.0), Some(Breakpoint::Sm));
        assert!(generate_all_breakpoints(&session).contains("sm:opacity-50"));

        session.reset_all();
        assert_eq!(generate_all_breakpoints(&session), "relative");
        assert_eq!(
            render_fragment(&session, Breakpoint::Base),
            "<div class=\"relative\">\n  \n</div>"
        );
    }

    #[test]
    fn end_to_end_session_survives_disk_round_trip() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            tag: Some("section".into()),
            inline_css: Some("cursor: pointer; border-top: 1px solid red".into()),
            ..Default::default()
        });
        session.apply_at(&StylePatch::scale(110.0), Some(Breakpoint::Lg));

        let json = serde_json::to_string_pretty(&session).unwrap();
        let restored = session::EditorSession::from_json(&json).unwrap();

        assert_eq!(
            render_fragment(&session, Breakpoint::Lg),
            render_fragment(&restored, Breakpoint::Lg)
        );
        assert_eq!(
            generate_all_breakpoints(&session),
            generate_all_breakpoints(&restored)
        );
    }

    // ── Degradation paths ─────────────────────────────────────────────

    #[test]
    fn malformed_values_never_panic_the_generators() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            tag: Some("<script>".into()),
            inline_css: Some(";;;:::garbage;;".into()),
            padding: Some(
                Spacing {
                    l: "garbage".into(),
                    t: "".into(),
                    r: "-".into(),
                    b: ".".into(),
                }
                .into(),
            ),
            ..Default::default()
        });

        let html = render_fragment(&session, Breakpoint::Base);
        assert!(html.starts_with("<div"));
        let css = render_css(&session, Breakpoint::Base);
        assert!(css.contains("padding:"));
    }

    #[test]
    fn empty_session_produces_minimal_output() {
        let session = EditorSession::new();
        assert_eq!(
            render_fragment(&session, Breakpoint::Base),
            "<div class=\"relative\">\n  \n</div>"
        );
        assert_eq!(render_css(&session, Breakpoint::Base), ".element {\n  position: relative;\n}");
    }
}

use std::fs;
use std::path::Path;

use stylekit::classes::{generate_all_breakpoints, generate_classes};
use stylekit::export::{to_css, to_html};
use stylekit::session::EditorSession;
use stylekit::state::Breakpoint;
use stylekit::styles::generate_styles;

fn load_demo(name: &str) -> EditorSession {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    EditorSession::from_json(&json)
        .unwrap_or_else(|e| panic!("{} failed to parse: {e}", path.display()))
}

#[test]
fn all_demos_export() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let entries: Vec<_> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false)
        })
        .collect();

    assert!(!entries.is_empty(), "no demo files found in {}", dir.display());

    for entry in &entries {
        let path = entry.path();
        let json = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
        let session = EditorSession::from_json(&json)
            .unwrap_or_else(|e| panic!("{} failed to parse: {e}", path.display()));

        let effective = session.resolve(Breakpoint::Base);
        let html = to_html(
            &effective,
            &generate_all_breakpoints(&session),
            &generate_styles(&effective),
        );
        assert!(
            html.starts_with('<') && html.ends_with('>'),
            "{} produced a malformed fragment",
            path.display()
        );

        let css = to_css(&effective);
        assert!(
            css.contains('{') && css.ends_with('}'),
            "{} produced a malformed rule block",
            path.display()
        );
    }

    eprintln!("  exported {} demos from {}", entries.len(), dir.display());
}

#[test]
fn hero_demo_resolves_breakpoint_overrides() {
    let session = load_demo("hero.json");

    let base = session.resolve(Breakpoint::Base);
    assert_eq!(base.padding.l, "32");
    assert_eq!(base.typography.font_size, "2xl");

    let md = session.resolve(Breakpoint::Md);
    assert_eq!(md.padding.l, "64");
    assert_eq!(md.padding.t, "48", "untouched side keeps the base value");
    assert_eq!(md.typography.font_size, "4xl");
    assert_eq!(
        md.typography.text_color.as_deref(),
        Some("#f8fafc"),
        "untouched color keeps the base value"
    );

    let combined = generate_all_breakpoints(&session);
    assert!(combined.contains("pl-32"));
    assert!(combined.contains("md:pl-64"));
    assert!(combined.contains("md:text-4xl"));
    assert!(combined.contains("tracking-tight"));
}

#[test]
fn button_demo_exports_a_link_like_fragment() {
    let session = load_demo("button.json");
    let effective = session.resolve(Breakpoint::Base);

    let classes = generate_classes(&effective, Breakpoint::Base);
    assert!(classes.contains("pl-16 pt-8 pr-16 pb-8"));
    assert!(classes.contains("font-medium"));
    assert!(classes.contains("shadow-md"));
    assert!(classes.contains("rounded-[8px]"));
    assert!(classes.contains("border-2"));

    let html = to_html(&effective, &classes, &generate_styles(&effective));
    assert!(html.starts_with("<button id=\"cta\""));
    assert!(html.contains("href=\"https://example.com/signup\""));
    assert!(html.contains("\n  Get started\n"));
    assert!(html.contains("border-color: #2563eb"));

    let css = to_css(&effective);
    assert!(css.starts_with("#cta {"));
    assert!(css.contains("border: 2px solid #2563eb;"));
    assert!(css.contains("box-shadow:"));
}

#[test]
fn card_demo_mixes_generated_and_inline_rules() {
    let session = load_demo("card.json");
    let effective = session.resolve(Breakpoint::Base);

    let classes = generate_classes(&effective, Breakpoint::Base);
    assert!(classes.contains("rotate-[-2deg]"));
    assert!(classes.contains("scale-[1.02]"));
    assert!(classes.contains("backdrop-blur-[8px]"));
    assert!(classes.contains("saturate-[1.2]"));

    let styles = generate_styles(&effective);
    assert_eq!(styles.get("mixBlendMode"), Some("screen"));
    assert_eq!(styles.get("perspective"), Some("1000px"));
    assert_eq!(
        styles.get("boxShadow"),
        Some("0 8px 32px rgba(0,0,0,0.35)"),
        "inline CSS parses into the style map"
    );
    assert_eq!(styles.get("outline"), Some("1px solid rgba(255,255,255,0.08)"));

    let css = to_css(&effective);
    // The corner override forces the four-corner form.
    assert!(css.contains("border-radius: 24px 0px 0px 0px;"));
}

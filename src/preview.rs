//! Preview-side value building.
//!
//! The live preview applies everything as inline CSS, so these builders
//! turn state groups into concrete CSS value strings. The CSS exporter
//! reuses them, which keeps the two outputs on the same formatting rules.

use crate::state::{Border, FontWeight, Margin, Radius, Spacing, StyleState, TextAlign};
use crate::styles::{generate_styles, StyleMap};
use crate::units::{normalize, normalize_px, DEFAULT_KEYWORDS, SIZE_KEYWORDS};

/// Tags the renderer will emit. Anything else is coerced to `div`.
pub const ALLOWED_TAGS: &[&str] = &[
    "div", "span", "button", "a", "p", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "aside", "header", "footer", "nav", "main", "label", "input",
];

/// Minimum WCAG AA contrast ratio for normal text.
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

fn fmt(n: f64) -> String {
    format!("{n}")
}

/// Coerce a tag to the whitelist. Unrecognized tags render as `div`; the
/// stored state is never rewritten.
pub fn coerce_tag(tag: &str) -> String {
    let normalized = tag.to_lowercase();
    if ALLOWED_TAGS.contains(&normalized.as_str()) {
        normalized
    } else {
        "div".to_string()
    }
}

/// The complete `transform` value: 2D components then 3D rotations, fixed
/// order. Empty when every component is at identity.
pub fn transform_value(state: &StyleState) -> String {
    let t = &state.transforms;
    let t3 = &state.transforms_3d;
    let mut parts: Vec<String> = Vec::new();

    if t.translate_x != 0.0 {
        parts.push(format!("translateX({}px)", fmt(t.translate_x)));
    }
    if t.translate_y != 0.0 {
        parts.push(format!("translateY({}px)", fmt(t.translate_y)));
    }
    if t.rotate != 0.0 {
        parts.push(format!("rotate({}deg)", fmt(t.rotate)));
    }
    if t.scale != 100.0 {
        parts.push(format!("scale({})", fmt(t.scale / 100.0)));
    }
    if t.skew_x != 0.0 {
        parts.push(format!("skewX({}deg)", fmt(t.skew_x)));
    }
    if t.skew_y != 0.0 {
        parts.push(format!("skewY({}deg)", fmt(t.skew_y)));
    }
    if t3.rotate_x != 0.0 {
        parts.push(format!("rotateX({}deg)", fmt(t3.rotate_x)));
    }
    if t3.rotate_y != 0.0 {
        parts.push(format!("rotateY({}deg)", fmt(t3.rotate_y)));
    }
    if t3.rotate_z != 0.0 {
        parts.push(format!("rotateZ({}deg)", fmt(t3.rotate_z)));
    }

    parts.join(" ")
}

/// The `filter` value: each active effect function in fixed order.
pub fn filter_value(state: &StyleState) -> String {
    let e = &state.effects;
    let mut parts: Vec<String> = Vec::new();

    if e.blur > 0.0 {
        parts.push(format!("blur({}px)", fmt(e.blur)));
    }
    if e.brightness != 100.0 {
        parts.push(format!("brightness({})", fmt(e.brightness / 100.0)));
    }
    if e.saturation != 100.0 {
        parts.push(format!("saturate({})", fmt(e.saturation / 100.0)));
    }
    if e.contrast != 100.0 {
        parts.push(format!("contrast({})", fmt(e.contrast / 100.0)));
    }
    if e.hue_rotate != 0.0 {
        parts.push(format!("hue-rotate({}deg)", fmt(e.hue_rotate)));
    }
    if e.grayscale > 0.0 {
        parts.push(format!("grayscale({})", fmt(e.grayscale / 100.0)));
    }
    if e.invert > 0.0 {
        parts.push(format!("invert({})", fmt(e.invert / 100.0)));
    }
    if e.sepia > 0.0 {
        parts.push(format!("sepia({})", fmt(e.sepia / 100.0)));
    }

    parts.join(" ")
}

/// The `border-radius` value. Any non-zero individual corner wins over
/// `all`: the four-corner form is emitted and `all` is ignored.
pub fn border_radius_value(radius: &Radius) -> String {
    let has_corners =
        radius.tl != 0.0 || radius.tr != 0.0 || radius.br != 0.0 || radius.bl != 0.0;

    if has_corners {
        format!(
            "{}px {}px {}px {}px",
            fmt(radius.tl),
            fmt(radius.tr),
            fmt(radius.br),
            fmt(radius.bl)
        )
    } else if radius.all > 0.0 {
        format!("{}px", fmt(radius.all))
    } else {
        String::new()
    }
}

/// The `border` shorthand. Needs a color and a non-zero width; a width that
/// fails to normalize falls back to `1px`.
pub fn border_value(border: &Border) -> String {
    let Some(color) = &border.color else {
        return String::new();
    };
    if border.width == "0" {
        return String::new();
    }

    let mut width = normalize_px(&border.width);
    if width.is_empty() {
        width = "1px".to_string();
    }
    format!("{width} {} {color}", border.style.as_str())
}

/// The `padding` shorthand, `top right bottom left`. Empty when no side is
/// set at all.
pub fn padding_value(padding: &Spacing) -> String {
    if padding.l.is_empty() && padding.t.is_empty() && padding.r.is_empty() && padding.b.is_empty()
    {
        return String::new();
    }

    let side = |raw: &str| {
        let v = normalize_px(raw);
        if v.is_empty() {
            "0px".to_string()
        } else {
            v
        }
    };
    format!(
        "{} {} {} {}",
        side(&padding.t),
        side(&padding.r),
        side(&padding.b),
        side(&padding.l)
    )
}

/// The `margin` shorthand, `y x`. Empty when both axes are zero.
pub fn margin_value(margin: &Margin) -> String {
    if margin.x == "0" && margin.y == "0" {
        return String::new();
    }

    let axis = |raw: &str| {
        let v = normalize_px(raw);
        if v.is_empty() {
            "0px".to_string()
        } else {
            v
        }
    };
    format!("{} {}", axis(&margin.y), axis(&margin.x))
}

/// ARIA attributes derived from state: a label from the text content, a
/// role for interactive tags.
pub fn aria_attributes(state: &StyleState) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    if !state.text_content.is_empty() {
        attrs.push(("aria-label".to_string(), state.text_content.clone()));
    }
    match coerce_tag(&state.tag).as_str() {
        "a" => attrs.push(("role".to_string(), "link".to_string())),
        "button" => attrs.push(("role".to_string(), "button".to_string())),
        _ => {}
    }
    attrs
}

/// Non-fatal issues worth surfacing to the user. Nothing here blocks
/// rendering; the generators degrade on their own.
pub fn lint(state: &StyleState) -> Vec<String> {
    let mut warnings = Vec::new();

    let normalized = state.tag.to_lowercase();
    if !ALLOWED_TAGS.contains(&normalized.as_str()) {
        warnings.push(format!(
            "unknown tag '{}' renders as <div>",
            state.tag
        ));
    }

    let tag = coerce_tag(&state.tag);
    if !state.link.is_empty() && tag != "a" && tag != "button" {
        warnings.push(format!("link is ignored for <{tag}> elements"));
    }

    let skipped = state
        .inline_css
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .filter(|segment| match segment.split_once(':') {
            Some((prop, value)) => prop.trim().is_empty() || value.trim().is_empty(),
            None => true,
        })
        .count();
    if skipped > 0 {
        warnings.push(format!("{skipped} inline CSS segment(s) could not be parsed"));
    }

    if let (Some(text), Some(bg)) = (
        &state.typography.text_color,
        &state.appearance.background_color,
    ) {
        let report = contrast_report(text, bg);
        if !report.meets {
            warnings.push(format!(
                "text/background contrast {:.2} is below the {MIN_CONTRAST_RATIO} AA minimum",
                report.ratio
            ));
        }
    }

    warnings
}

// ── Contrast ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    Aaa,
    Aa,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub meets: bool,
    pub ratio: f64,
    pub level: ContrastLevel,
}

fn hex_channel(hex: &str, at: usize) -> Option<f64> {
    let raw = u8::from_str_radix(hex.get(at..at + 2)?, 16).ok()?;
    Some(raw as f64 / 255.0)
}

/// WCAG relative luminance for a `#rrggbb` color.
fn luminance(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let r = hex_channel(hex, 0)?;
    let g = hex_channel(hex, 2)?;
    let b = hex_channel(hex, 4)?;

    let lin = |c: f64| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b))
}

/// Contrast ratio between two hex colors. Falls back to the AA threshold
/// when either color cannot be parsed, so unparsed input never warns.
pub fn contrast_ratio(color1: &str, color2: &str) -> f64 {
    match (luminance(color1), luminance(color2)) {
        (Some(l1), Some(l2)) => {
            let lighter = l1.max(l2);
            let darker = l1.min(l2);
            (lighter + 0.05) / (darker + 0.05)
        }
        _ => MIN_CONTRAST_RATIO,
    }
}

/// Contrast check for a text/background pair, ratio rounded to 2 decimals.
pub fn contrast_report(text_color: &str, background_color: &str) -> ContrastReport {
    let ratio = contrast_ratio(text_color, background_color);
    let rounded = (ratio * 100.0).round() / 100.0;
    let level = if ratio >= 7.0 {
        ContrastLevel::Aaa
    } else if ratio >= MIN_CONTRAST_RATIO {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    };
    ContrastReport {
        meets: ratio >= MIN_CONTRAST_RATIO,
        ratio: rounded,
        level,
    }
}

// ── Composition ────────────────────────────────────────────────────────

/// The complete style map the preview renderer applies: the inline-style
/// generator's output plus everything the preview renders itself (which a
/// real page would get from the utility classes).
pub fn preview_styles(state: &StyleState) -> StyleMap {
    let mut styles = generate_styles(state);

    let transform = transform_value(state);
    if !transform.is_empty() {
        styles.set("transform", transform);
    }

    let filter = filter_value(state);
    if !filter.is_empty() {
        styles.set("filter", filter);
    }

    if state.effects.backdrop_blur > 0.0 {
        styles.set(
            "backdropFilter",
            format!("blur({}px)", fmt(state.effects.backdrop_blur)),
        );
    }

    if state.effects.opacity != 100.0 {
        styles.set("opacity", fmt(state.effects.opacity / 100.0));
    }

    let radius = border_radius_value(&state.border.radius);
    if !radius.is_empty() {
        styles.set("borderRadius", radius);
    }

    let border = border_value(&state.border);
    if !border.is_empty() {
        styles.set("border", border);
    }

    let padding = padding_value(&state.padding);
    if !padding.is_empty() {
        styles.set("padding", padding);
    }

    let margin = margin_value(&state.margin);
    if !margin.is_empty() {
        styles.set("margin", margin);
    }

    if !state.size.width.is_empty() {
        styles.set("width", normalize(&state.size.width, "px", SIZE_KEYWORDS));
    }
    if !state.size.height.is_empty() {
        styles.set("height", normalize(&state.size.height, "px", SIZE_KEYWORDS));
    }

    if !state.typography.font_size.is_empty() {
        styles.set(
            "fontSize",
            normalize(&state.typography.font_size, "px", DEFAULT_KEYWORDS),
        );
    }
    if state.typography.font_weight != FontWeight::Normal {
        styles.set(
            "fontWeight",
            state.typography.font_weight.css_value().to_string(),
        );
    }
    if state.typography.text_align != TextAlign::Left {
        styles.set("textAlign", state.typography.text_align.as_str());
    }

    styles
}

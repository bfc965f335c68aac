//! Utility-class generation.
//!
//! Maps an effective [`StyleState`] to an ordered list of Tailwind class
//! tokens, one token per visual rule. Every token is gated on its field
//! differing from the identity default, so a default state generates
//! nothing beyond the default position keyword.

use std::collections::HashSet;

use crate::session::EditorSession;
use crate::state::{
    BorderStyle, Breakpoint, FontFamily, FontWeight, LetterSpacing, PositionKind, Shadow,
    StyleState, TextAlign,
};

fn fmt(n: f64) -> String {
    format!("{n}")
}

/// Generate the class tokens for one state at one breakpoint, in emission
/// order. Non-base breakpoints prefix every generated token; user-supplied
/// extra classes are appended verbatim, never prefixed.
pub fn generate_class_list(state: &StyleState, breakpoint: Breakpoint) -> Vec<String> {
    let p = breakpoint.prefix();
    let mut classes: Vec<String> = Vec::new();
    let mut push = |token: String| classes.push(token);

    // Padding
    if !state.padding.l.is_empty() && state.padding.l != "0" {
        push(format!("{p}pl-{}", state.padding.l));
    }
    if !state.padding.t.is_empty() && state.padding.t != "0" {
        push(format!("{p}pt-{}", state.padding.t));
    }
    if !state.padding.r.is_empty() && state.padding.r != "0" {
        push(format!("{p}pr-{}", state.padding.r));
    }
    if !state.padding.b.is_empty() && state.padding.b != "0" {
        push(format!("{p}pb-{}", state.padding.b));
    }

    // Margin
    if !state.margin.x.is_empty() && state.margin.x != "0" {
        push(format!("{p}mx-{}", state.margin.x));
    }
    if !state.margin.y.is_empty() && state.margin.y != "0" {
        push(format!("{p}my-{}", state.margin.y));
    }

    // Position
    if state.position.kind != PositionKind::Static {
        push(format!("{p}{}", state.position.kind.as_str()));
    }
    if !state.position.z_index.is_empty() {
        push(format!("{p}z-{}", state.position.z_index));
    }
    if !state.position.l.is_empty() {
        push(format!("{p}left-{}", state.position.l));
    }
    if !state.position.t.is_empty() {
        push(format!("{p}top-{}", state.position.t));
    }
    if !state.position.r.is_empty() {
        push(format!("{p}right-{}", state.position.r));
    }
    if !state.position.b.is_empty() {
        push(format!("{p}bottom-{}", state.position.b));
    }

    // Size — arbitrary values
    if !state.size.width.is_empty() {
        push(format!("{p}w-[{}]", state.size.width));
    }
    if !state.size.height.is_empty() {
        push(format!("{p}h-[{}]", state.size.height));
    }
    if !state.size.max_width.is_empty() {
        push(format!("{p}max-w-[{}]", state.size.max_width));
    }
    if !state.size.max_height.is_empty() {
        push(format!("{p}max-h-[{}]", state.size.max_height));
    }
    if !state.size.min_width.is_empty() {
        push(format!("{p}min-w-[{}]", state.size.min_width));
    }
    if !state.size.min_height.is_empty() {
        push(format!("{p}min-h-[{}]", state.size.min_height));
    }

    // Typography
    if state.typography.font_family != FontFamily::Inter {
        push(format!("{p}font-{}", state.typography.font_family.as_str()));
    }
    if state.typography.font_weight != FontWeight::Normal {
        push(format!("{p}font-{}", state.typography.font_weight.as_str()));
    }
    if !state.typography.font_size.is_empty() {
        push(format!("{p}text-{}", state.typography.font_size));
    }
    if state.typography.letter_spacing != LetterSpacing::Normal {
        push(format!(
            "{p}tracking-{}",
            state.typography.letter_spacing.as_str()
        ));
    }
    if !state.typography.line_height.is_empty() {
        push(format!("{p}leading-{}", state.typography.line_height));
    }
    if state.typography.text_align != TextAlign::Left {
        push(format!("{p}text-{}", state.typography.text_align.as_str()));
    }

    // 2D transforms
    if state.transforms.rotate != 0.0 {
        push(format!("{p}rotate-[{}deg]", fmt(state.transforms.rotate)));
    }
    if state.transforms.scale != 100.0 {
        push(format!("{p}scale-[{}]", fmt(state.transforms.scale / 100.0)));
    }
    if state.transforms.translate_x != 0.0 {
        push(format!(
            "{p}translate-x-[{}px]",
            fmt(state.transforms.translate_x)
        ));
    }
    if state.transforms.translate_y != 0.0 {
        push(format!(
            "{p}translate-y-[{}px]",
            fmt(state.transforms.translate_y)
        ));
    }
    if state.transforms.skew_x != 0.0 {
        push(format!("{p}skew-x-[{}deg]", fmt(state.transforms.skew_x)));
    }
    if state.transforms.skew_y != 0.0 {
        push(format!("{p}skew-y-[{}deg]", fmt(state.transforms.skew_y)));
    }

    // Effects
    if state.effects.opacity != 100.0 {
        push(format!("{p}opacity-{}", fmt(state.effects.opacity)));
    }
    if state.effects.blur > 0.0 {
        push(format!("{p}blur-[{}px]", fmt(state.effects.blur)));
    }
    if state.effects.backdrop_blur > 0.0 {
        push(format!(
            "{p}backdrop-blur-[{}px]",
            fmt(state.effects.backdrop_blur)
        ));
    }
    if state.effects.hue_rotate != 0.0 {
        push(format!(
            "{p}hue-rotate-[{}deg]",
            fmt(state.effects.hue_rotate)
        ));
    }
    if state.effects.saturation != 100.0 {
        push(format!(
            "{p}saturate-[{}]",
            fmt(state.effects.saturation / 100.0)
        ));
    }
    if state.effects.brightness != 100.0 {
        push(format!(
            "{p}brightness-[{}]",
            fmt(state.effects.brightness / 100.0)
        ));
    }
    if state.effects.contrast != 100.0 {
        push(format!(
            "{p}contrast-[{}]",
            fmt(state.effects.contrast / 100.0)
        ));
    }
    if state.effects.grayscale > 0.0 {
        push(format!(
            "{p}grayscale-[{}]",
            fmt(state.effects.grayscale / 100.0)
        ));
    }
    if state.effects.invert > 0.0 {
        push(format!("{p}invert-[{}]", fmt(state.effects.invert / 100.0)));
    }
    if state.effects.sepia > 0.0 {
        push(format!("{p}sepia-[{}]", fmt(state.effects.sepia / 100.0)));
    }
    if state.effects.shadow != Shadow::None {
        push(format!("{p}shadow-{}", state.effects.shadow.as_str()));
    }

    // Border
    if state.border.radius.all > 0.0 {
        push(format!("{p}rounded-[{}px]", fmt(state.border.radius.all)));
    }
    if !state.border.width.is_empty() && state.border.width != "0" {
        push(format!("{p}border-{}", state.border.width));
    }
    if state.border.style != BorderStyle::Solid && state.border.style != BorderStyle::None {
        push(format!("{p}border-{}", state.border.style.as_str()));
    }

    // User-supplied extra classes, original order, no prefix.
    classes.extend(state.tailwind_classes.iter().cloned());

    classes.retain(|c| !c.is_empty());
    classes
}

/// Generate the space-joined class string for one breakpoint.
pub fn generate_classes(state: &StyleState, breakpoint: Breakpoint) -> String {
    generate_class_list(state, breakpoint).join(" ")
}

/// Generate the combined class string across base and every breakpoint
/// that carries overrides: the complete rule set per breakpoint, resolved
/// against base, de-duplicated in first-occurrence order.
pub fn generate_all_breakpoints(session: &EditorSession) -> String {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for bp in Breakpoint::ALL {
        if bp != Breakpoint::Base && !session.has_breakpoint_overrides(bp) {
            continue;
        }
        let effective = session.resolve(bp);
        for token in generate_class_list(&effective, bp) {
            if seen.insert(token.clone()) {
                out.push(token);
            }
        }
    }

    out.join(" ")
}

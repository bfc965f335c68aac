//! Inline-style generation.
//!
//! Covers only what utility classes cannot express: custom colors, 3D
//! transforms, blend modes, background images, and the user's free-form
//! inline CSS. Keys use the camelCase style-map convention; the exporter
//! converts them back to kebab-case for the `style` attribute.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::state::StyleState;

/// An insertion-ordered property map with JS-object semantics: setting an
/// existing key replaces its value in place, new keys append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `style` attribute text: `kebab-prop: value; ...`.
    pub fn to_css_text(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {v}", kebab_case(k)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// `background-color` → `backgroundColor`.
pub fn camel_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len());
    let mut chars = prop.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// `backgroundColor` → `background-color`.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn fmt(n: f64) -> String {
    format!("{n}")
}

/// Generate the inline styles for an effective state.
pub fn generate_styles(state: &StyleState) -> StyleMap {
    let mut styles = StyleMap::new();

    // Custom colors never become utility classes.
    if let Some(color) = &state.typography.text_color {
        styles.set("color", color);
    }
    if let Some(color) = &state.appearance.background_color {
        styles.set("backgroundColor", color);
    }
    if let Some(color) = &state.border.color {
        styles.set("borderColor", color);
    }

    // 3D rotations, fixed X/Y/Z order; omitted entirely when all zero.
    let mut rotations: Vec<String> = Vec::new();
    if state.transforms_3d.rotate_x != 0.0 {
        rotations.push(format!("rotateX({}deg)", fmt(state.transforms_3d.rotate_x)));
    }
    if state.transforms_3d.rotate_y != 0.0 {
        rotations.push(format!("rotateY({}deg)", fmt(state.transforms_3d.rotate_y)));
    }
    if state.transforms_3d.rotate_z != 0.0 {
        rotations.push(format!("rotateZ({}deg)", fmt(state.transforms_3d.rotate_z)));
    }
    if !rotations.is_empty() {
        styles.set("transform", rotations.join(" "));
    }
    // Perspective is stored as a small scale factor, not pixels.
    if state.transforms_3d.perspective > 0.0 {
        styles.set(
            "perspective",
            format!("{}px", fmt(state.transforms_3d.perspective * 100.0)),
        );
    }

    if state.appearance.blend_mode != crate::state::BlendMode::Normal {
        styles.set("mixBlendMode", state.appearance.blend_mode.as_str());
    }

    if !state.appearance.background_image.is_empty() {
        styles.set(
            "backgroundImage",
            format!("url({})", state.appearance.background_image),
        );
    }

    // Free-form inline CSS, best effort: malformed segments are skipped.
    for segment in state.inline_css.split(';') {
        let Some((prop, value)) = segment.split_once(':') else {
            continue;
        };
        let prop = prop.trim();
        let value = value.trim();
        if prop.is_empty() || value.is_empty() {
            continue;
        }
        styles.set(camel_case(prop), value);
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BlendMode;

    #[test]
    fn colors_come_from_the_nullable_fields_verbatim() {
        let mut state = StyleState::default();
        state.typography.text_color = Some("#abcdef".into());
        state.appearance.background_color = Some("#112233".into());
        state.border.color = Some("hsl(217 91% 60%)".into());

        let styles = generate_styles(&state);
        assert_eq!(styles.get("color"), Some("#abcdef"));
        assert_eq!(styles.get("backgroundColor"), Some("#112233"));
        assert_eq!(styles.get("borderColor"), Some("hsl(217 91% 60%)"));
    }

    #[test]
    fn default_state_generates_no_styles() {
        assert!(generate_styles(&StyleState::default()).is_empty());
    }

    #[test]
    fn rotations_concatenate_in_xyz_order() {
        let mut state = StyleState::default();
        state.transforms_3d.rotate_z = 30.0;
        state.transforms_3d.rotate_x = 15.0;

        let styles = generate_styles(&state);
        assert_eq!(styles.get("transform"), Some("rotateX(15deg) rotateZ(30deg)"));
    }

    #[test]
    fn transform_is_omitted_when_all_rotations_are_zero() {
        let styles = generate_styles(&StyleState::default());
        assert_eq!(styles.get("transform"), None);
    }

    #[test]
    fn perspective_scales_to_pixels() {
        let mut state = StyleState::default();
        state.transforms_3d.perspective = 5.0;
        let styles = generate_styles(&state);
        assert_eq!(styles.get("perspective"), Some("500px"));
    }

    #[test]
    fn blend_mode_and_background_image() {
        let mut state = StyleState::default();
        state.appearance.blend_mode = BlendMode::Multiply;
        state.appearance.background_image = "https://example.com/bg.png".into();

        let styles = generate_styles(&state);
        assert_eq!(styles.get("mixBlendMode"), Some("multiply"));
        assert_eq!(
            styles.get("backgroundImage"),
            Some("url(https://example.com/bg.png)")
        );
    }

    #[test]
    fn inline_css_parses_into_camel_case_keys() {
        let mut state = StyleState::default();
        state.inline_css = "border-top: 1px solid red; cursor: pointer;".into();

        let styles = generate_styles(&state);
        assert_eq!(styles.get("borderTop"), Some("1px solid red"));
        assert_eq!(styles.get("cursor"), Some("pointer"));
    }

    #[test]
    fn inline_css_splits_on_the_first_colon_only() {
        let mut state = StyleState::default();
        state.inline_css = "background: url(https://x.com/a.png)".into();

        let styles = generate_styles(&state);
        assert_eq!(styles.get("background"), Some("url(https://x.com/a.png)"));
    }

    #[test]
    fn malformed_inline_segments_are_skipped_silently() {
        let mut state = StyleState::default();
        state.inline_css = "no-colon-here; : orphan-value; cursor: ; color: red".into();

        let styles = generate_styles(&state);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.get("color"), Some("red"));
    }

    #[test]
    fn inline_css_can_override_generated_values_in_place() {
        let mut state = StyleState::default();
        state.typography.text_color = Some("#000000".into());
        state.inline_css = "color: #ffffff".into();

        let styles = generate_styles(&state);
        assert_eq!(styles.get("color"), Some("#ffffff"));
        // Replacement keeps the original position.
        assert_eq!(styles.iter().next().unwrap().0, "color");
    }

    #[test]
    fn case_conversions_round_trip() {
        assert_eq!(camel_case("background-color"), "backgroundColor");
        assert_eq!(camel_case("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(camel_case("color"), "color");
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("mixBlendMode"), "mix-blend-mode");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn css_text_uses_kebab_case() {
        let mut styles = StyleMap::new();
        styles.set("backgroundColor", "#112233");
        styles.set("mixBlendMode", "screen");
        assert_eq!(
            styles.to_css_text(),
            "background-color: #112233; mix-blend-mode: screen"
        );
    }
}

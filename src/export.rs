//! Code export: a standalone HTML fragment and a CSS rule block.
//!
//! Both outputs render the same effective state the preview shows, through
//! the same value builders, so copied code matches what the user sees.

use crate::preview::{
    border_radius_value, border_value, coerce_tag, filter_value, margin_value, padding_value,
    transform_value,
};
use crate::state::{FontWeight, PositionKind, StyleState, TextAlign};
use crate::styles::StyleMap;
use crate::units::{normalize, normalize_px, SIZE_KEYWORDS};

fn fmt(n: f64) -> String {
    format!("{n}")
}

/// Render the HTML fragment. Attributes with empty sources are omitted;
/// `href` only appears on link-like tags.
pub fn to_html(state: &StyleState, classes: &str, styles: &StyleMap) -> String {
    let tag = coerce_tag(&state.tag);

    let id_attr = if state.element_id.is_empty() {
        String::new()
    } else {
        format!(" id=\"{}\"", state.element_id)
    };
    let class_attr = if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{classes}\"")
    };
    let style_text = styles.to_css_text();
    let style_attr = if style_text.is_empty() {
        String::new()
    } else {
        format!(" style=\"{style_text}\"")
    };
    let href_attr = if !state.link.is_empty() && (tag == "a" || tag == "button") {
        format!(" href=\"{}\"", state.link)
    } else {
        String::new()
    };

    format!(
        "<{tag}{id_attr}{class_attr}{style_attr}{href_attr}>\n  {}\n</{tag}>",
        state.text_content
    )
}

fn is_zeroish(raw: &str) -> bool {
    raw.is_empty() || raw == "0"
}

/// Render a single CSS rule block for the state. Selector is the element
/// id when set, a placeholder class otherwise. Only non-default properties
/// are emitted, in a fixed order.
pub fn to_css(state: &StyleState) -> String {
    let selector = if state.element_id.is_empty() {
        ".element".to_string()
    } else {
        format!("#{}", state.element_id)
    };

    let mut css = String::new();
    css.push_str(&format!("{selector} {{\n"));
    let mut decl = |prop: &str, value: String| {
        css.push_str(&format!("  {prop}: {value};\n"));
    };

    // Position
    if state.position.kind != PositionKind::Static {
        decl("position", state.position.kind.as_str().to_string());
    }
    if !state.position.l.is_empty() {
        decl("left", normalize_px(&state.position.l));
    }
    if !state.position.t.is_empty() {
        decl("top", normalize_px(&state.position.t));
    }
    if !state.position.r.is_empty() {
        decl("right", normalize_px(&state.position.r));
    }
    if !state.position.b.is_empty() {
        decl("bottom", normalize_px(&state.position.b));
    }
    if !state.position.z_index.is_empty() {
        decl("z-index", state.position.z_index.clone());
    }

    // Size
    if !state.size.width.is_empty() {
        decl("width", normalize(&state.size.width, "px", SIZE_KEYWORDS));
    }
    if !state.size.height.is_empty() {
        decl("height", normalize(&state.size.height, "px", SIZE_KEYWORDS));
    }
    if !state.size.max_width.is_empty() {
        decl("max-width", normalize(&state.size.max_width, "px", SIZE_KEYWORDS));
    }
    if !state.size.max_height.is_empty() {
        decl("max-height", normalize(&state.size.max_height, "px", SIZE_KEYWORDS));
    }
    if !state.size.min_width.is_empty() {
        decl("min-width", normalize(&state.size.min_width, "px", SIZE_KEYWORDS));
    }
    if !state.size.min_height.is_empty() {
        decl("min-height", normalize(&state.size.min_height, "px", SIZE_KEYWORDS));
    }

    // Padding / margin shorthands
    let padding = &state.padding;
    if !(is_zeroish(&padding.l)
        && is_zeroish(&padding.t)
        && is_zeroish(&padding.r)
        && is_zeroish(&padding.b))
    {
        decl("padding", padding_value(padding));
    }
    let margin = margin_value(&state.margin);
    if !margin.is_empty() {
        decl("margin", margin);
    }

    // Typography
    if !state.typography.font_size.is_empty() {
        decl("font-size", normalize_px(&state.typography.font_size));
    }
    if state.typography.font_weight != FontWeight::Normal {
        decl(
            "font-weight",
            state.typography.font_weight.css_value().to_string(),
        );
    }
    if let Some(color) = &state.typography.text_color {
        decl("color", color.clone());
    }
    if state.typography.text_align != TextAlign::Left {
        decl("text-align", state.typography.text_align.as_str().to_string());
    }

    // Background
    if let Some(color) = &state.appearance.background_color {
        decl("background-color", color.clone());
    }
    if !state.appearance.background_image.is_empty() {
        decl(
            "background-image",
            format!("url({})", state.appearance.background_image),
        );
    }

    // Border
    let radius = border_radius_value(&state.border.radius);
    if !radius.is_empty() {
        decl("border-radius", radius);
    }
    let border = border_value(&state.border);
    if !border.is_empty() {
        decl("border", border);
    }

    // Transforms
    let transform = transform_value(state);
    if !transform.is_empty() {
        decl("transform", transform);
    }
    if state.transforms_3d.perspective > 0.0 {
        decl(
            "perspective",
            format!("{}px", fmt(state.transforms_3d.perspective * 100.0)),
        );
    }

    // Effects
    let filter = filter_value(state);
    if !filter.is_empty() {
        decl("filter", filter);
    }
    if state.effects.backdrop_blur > 0.0 {
        decl(
            "backdrop-filter",
            format!("blur({}px)", fmt(state.effects.backdrop_blur)),
        );
    }
    if state.effects.opacity != 100.0 {
        decl("opacity", fmt(state.effects.opacity / 100.0));
    }
    if let Some(shadow) = state.effects.shadow.box_shadow() {
        decl("box-shadow", shadow.to_string());
    }

    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Radius, Shadow, Spacing};
    use crate::styles::generate_styles;

    #[test]
    fn html_carries_href_and_text_for_links() {
        let mut state = StyleState::default();
        state.tag = "a".into();
        state.link = "https://x.com".into();
        state.text_content = "Go".into();

        let html = to_html(&state, "", &StyleMap::new());
        assert_eq!(html, "<a href=\"https://x.com\">\n  Go\n</a>");
    }

    #[test]
    fn href_is_dropped_for_non_link_tags() {
        let mut state = StyleState::default();
        state.tag = "p".into();
        state.link = "https://x.com".into();

        let html = to_html(&state, "", &StyleMap::new());
        assert!(!html.contains("href"));
    }

    #[test]
    fn unknown_tags_render_as_div() {
        let mut state = StyleState::default();
        state.tag = "script".into();
        state.text_content = "hi".into();

        let html = to_html(&state, "", &StyleMap::new());
        assert!(html.starts_with("<div>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn attributes_appear_in_order_and_only_when_set() {
        let mut state = StyleState::default();
        state.element_id = "hero".into();
        state.typography.text_color = Some("#112233".into());

        let styles = generate_styles(&state);
        let html = to_html(&state, "pl-16 relative", &styles);
        assert_eq!(
            html,
            "<div id=\"hero\" class=\"pl-16 relative\" style=\"color: #112233\">\n  \n</div>"
        );
    }

    #[test]
    fn css_selector_prefers_the_element_id() {
        let mut state = StyleState::default();
        assert!(to_css(&state).starts_with(".element {"));
        state.element_id = "hero".into();
        assert!(to_css(&state).starts_with("#hero {"));
    }

    #[test]
    fn css_default_state_emits_only_position() {
        let css = to_css(&StyleState::default());
        assert_eq!(css, ".element {\n  position: relative;\n}");
    }

    #[test]
    fn css_four_corner_radius_wins_over_all() {
        let mut state = StyleState::default();
        state.border.radius = Radius {
            all: 8.0,
            tl: 16.0,
            ..Default::default()
        };
        let css = to_css(&state);
        assert!(css.contains("border-radius: 16px 0px 0px 0px;"));
        assert!(!css.contains("border-radius: 8px;"));
    }

    #[test]
    fn css_padding_shorthand_suffixes_bare_numbers() {
        let mut state = StyleState::default();
        state.padding = Spacing {
            l: "16".into(),
            t: "8".into(),
            r: "1rem".into(),
            b: "8".into(),
        };
        let css = to_css(&state);
        assert!(css.contains("padding: 8px 1rem 8px 16px;"));
    }

    #[test]
    fn css_margin_shorthand_is_y_x() {
        let mut state = StyleState::default();
        state.margin.x = "auto".into();
        let css = to_css(&state);
        assert!(css.contains("margin: 0px auto;"));
    }

    #[test]
    fn css_declarations_follow_the_fixed_order() {
        let mut state = StyleState::default();
        state.size.width = "320".into();
        state.padding.l = "16".into();
        state.typography.text_color = Some("#112233".into());
        state.border.radius.all = 8.0;
        state.transforms.rotate = 45.0;
        state.effects.blur = 4.0;
        state.effects.opacity = 50.0;

        let css = to_css(&state);
        let order = [
            "position:",
            "width:",
            "padding:",
            "color:",
            "border-radius:",
            "transform:",
            "filter:",
            "opacity:",
        ];
        let mut last = 0;
        for prop in order {
            let at = css.find(prop).unwrap_or_else(|| panic!("{prop} missing in: {css}"));
            assert!(at > last, "{prop} out of order in: {css}");
            last = at;
        }
    }

    #[test]
    fn css_shadow_exports_a_concrete_box_shadow() {
        let mut state = StyleState::default();
        state.effects.shadow = Shadow::Md;
        let css = to_css(&state);
        assert!(css.contains(
            "box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);"
        ));
    }

    #[test]
    fn css_filter_and_backdrop_filter_are_separate() {
        let mut state = StyleState::default();
        state.effects.blur = 4.0;
        state.effects.backdrop_blur = 8.0;
        let css = to_css(&state);
        assert!(css.contains("filter: blur(4px);"));
        assert!(css.contains("backdrop-filter: blur(8px);"));
    }

    #[test]
    fn css_border_requires_color_and_width() {
        let mut state = StyleState::default();
        state.border.color = Some("#ff0000".into());
        state.border.width = "2".into();
        let css = to_css(&state);
        assert!(css.contains("border: 2px solid #ff0000;"));
    }
}

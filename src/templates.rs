//! Built-in component templates.
//!
//! Each template is a partial-state patch; applying one is exactly
//! `apply_patch`. The groups a template touches are written as full-leaf
//! patches, so stale values inside those groups reset to defaults while
//! everything the template does not mention stays put.

use crate::patch::{BorderPatch, RadiusPatch, StylePatch};
use crate::state::{
    Border, BorderStyle, Effects, FontWeight, Margin, Radius, Shadow, Size, Spacing, Typography,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Buttons,
    Cards,
    Inputs,
    Navigation,
    Layout,
}

impl TemplateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::Buttons => "buttons",
            TemplateCategory::Cards => "cards",
            TemplateCategory::Inputs => "inputs",
            TemplateCategory::Navigation => "navigation",
            TemplateCategory::Layout => "layout",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComponentTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub state: StylePatch,
}

fn spacing(l: &str, t: &str, r: &str, b: &str) -> Spacing {
    Spacing {
        l: l.into(),
        t: t.into(),
        r: r.into(),
        b: b.into(),
    }
}

/// The static template catalog.
pub fn builtin_templates() -> Vec<ComponentTemplate> {
    vec![
        ComponentTemplate {
            id: "btn-primary",
            name: "Primary Button",
            description: "A solid primary action button",
            category: TemplateCategory::Buttons,
            state: StylePatch {
                tag: Some("button".into()),
                text_content: Some("Click me".into()),
                padding: Some(spacing("16", "8", "16", "8").into()),
                border: Some(
                    Border {
                        radius: Radius::uniform(8.0),
                        ..Default::default()
                    }
                    .into(),
                ),
                typography: Some(
                    Typography {
                        font_weight: FontWeight::Medium,
                        ..Default::default()
                    }
                    .into(),
                ),
                appearance: Some(crate::state::Appearance {
                    background_color: Some("hsl(217 91% 60%)".into()),
                    ..Default::default()
                }
                .into()),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "btn-outline",
            name: "Outline Button",
            description: "A bordered outline button",
            category: TemplateCategory::Buttons,
            state: StylePatch {
                tag: Some("button".into()),
                text_content: Some("Learn More".into()),
                padding: Some(spacing("16", "8", "16", "8").into()),
                border: Some(
                    Border {
                        color: Some("hsl(217 91% 60%)".into()),
                        width: "2".into(),
                        style: BorderStyle::Solid,
                        ring_color: None,
                        radius: Radius::uniform(8.0),
                    }
                    .into(),
                ),
                typography: Some(
                    Typography {
                        font_weight: FontWeight::Medium,
                        text_color: Some("hsl(217 91% 60%)".into()),
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "btn-ghost",
            name: "Ghost Button",
            description: "A subtle ghost button",
            category: TemplateCategory::Buttons,
            state: StylePatch {
                tag: Some("button".into()),
                text_content: Some("Cancel".into()),
                padding: Some(spacing("16", "8", "16", "8").into()),
                border: Some(
                    Border {
                        radius: Radius::uniform(8.0),
                        ..Default::default()
                    }
                    .into(),
                ),
                typography: Some(
                    Typography {
                        text_color: Some("hsl(215 20% 65%)".into()),
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "card-basic",
            name: "Basic Card",
            description: "A simple card with shadow",
            category: TemplateCategory::Cards,
            state: StylePatch {
                tag: Some("div".into()),
                text_content: Some("Card Content".into()),
                padding: Some(spacing("24", "24", "24", "24").into()),
                border: Some(
                    Border {
                        color: Some("hsl(217 33% 17%)".into()),
                        width: "1".into(),
                        style: BorderStyle::Solid,
                        ring_color: None,
                        radius: Radius::uniform(12.0),
                    }
                    .into(),
                ),
                effects: Some(
                    Effects {
                        shadow: Shadow::Md,
                        ..Default::default()
                    }
                    .into(),
                ),
                appearance: Some(crate::state::Appearance {
                    background_color: Some("hsl(222 47% 11%)".into()),
                    ..Default::default()
                }
                .into()),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "card-elevated",
            name: "Elevated Card",
            description: "Card with stronger elevation",
            category: TemplateCategory::Cards,
            state: StylePatch {
                tag: Some("div".into()),
                text_content: Some("Featured".into()),
                padding: Some(spacing("32", "32", "32", "32").into()),
                border: Some(
                    Border {
                        radius: Radius::uniform(16.0),
                        ..Default::default()
                    }
                    .into(),
                ),
                effects: Some(
                    Effects {
                        shadow: Shadow::Xl,
                        ..Default::default()
                    }
                    .into(),
                ),
                appearance: Some(crate::state::Appearance {
                    background_color: Some("hsl(222 47% 14%)".into()),
                    ..Default::default()
                }
                .into()),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "input-default",
            name: "Text Input",
            description: "Standard text input field",
            category: TemplateCategory::Inputs,
            state: StylePatch {
                tag: Some("div".into()),
                text_content: Some("Enter text...".into()),
                padding: Some(spacing("12", "8", "12", "8").into()),
                border: Some(
                    Border {
                        color: Some("hsl(217 33% 25%)".into()),
                        width: "1".into(),
                        style: BorderStyle::Solid,
                        ring_color: None,
                        radius: Radius::uniform(8.0),
                    }
                    .into(),
                ),
                appearance: Some(crate::state::Appearance {
                    background_color: Some("hsl(222 47% 11%)".into()),
                    ..Default::default()
                }
                .into()),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "nav-link",
            name: "Nav Link",
            description: "Navigation menu link",
            category: TemplateCategory::Navigation,
            state: StylePatch {
                tag: Some("a".into()),
                text_content: Some("Home".into()),
                padding: Some(spacing("16", "8", "16", "8").into()),
                border: Some(BorderPatch {
                    radius: Some(RadiusPatch::uniform(6.0)),
                    ..Default::default()
                }),
                typography: Some(
                    Typography {
                        font_weight: FontWeight::Medium,
                        text_color: Some("hsl(215 20% 65%)".into()),
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            },
        },
        ComponentTemplate {
            id: "layout-section",
            name: "Section Container",
            description: "Content section wrapper",
            category: TemplateCategory::Layout,
            state: StylePatch {
                tag: Some("section".into()),
                text_content: Some("Section Content".into()),
                padding: Some(spacing("32", "48", "32", "48").into()),
                size: Some(
                    Size {
                        max_width: "1200px".into(),
                        ..Default::default()
                    }
                    .into(),
                ),
                margin: Some(
                    Margin {
                        x: "auto".into(),
                        y: "0".into(),
                    }
                    .into(),
                ),
                ..Default::default()
            },
        },
    ]
}

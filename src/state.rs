//! The canonical style-state model.
//!
//! One [`StyleState`] describes the complete visual configuration of a single
//! element. It is the contract between the mutation layer and every
//! generator: each visual concern has exactly one representation here.
//!
//! Numeric fields carry an explicit identity default (scale 100, opacity 100,
//! radius 0) — "unset" in the panel means "equal to the default". Only the
//! four color fields use `None` to mean "no override", because color has no
//! meaningful identity value.

use serde::{Deserialize, Serialize};

// ── Breakpoints ────────────────────────────────────────────────────────

/// Responsive breakpoint keys, Tailwind convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Class-name prefix: empty for base, `"sm:"` etc. otherwise.
    pub fn prefix(self) -> String {
        match self {
            Breakpoint::Base => String::new(),
            other => format!("{}:", other.as_str()),
        }
    }
}

impl std::str::FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Breakpoint::Base),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            "2xl" => Ok(Breakpoint::Xxl),
            other => Err(format!("unknown breakpoint: {other}")),
        }
    }
}

// ── Field addressing ───────────────────────────────────────────────────

/// A box side, for padding and position offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// A margin / translation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A border-radius corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Tl,
    Tr,
    Br,
    Bl,
}

// ── Nested value records ───────────────────────────────────────────────

/// Per-side spacing, raw numeric strings or CSS lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub l: String,
    pub t: String,
    pub r: String,
    pub b: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            l: "0".into(),
            t: "0".into(),
            r: "0".into(),
            b: "0".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub x: String,
    pub y: String,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            x: "0".into(),
            y: "0".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    Static,
    #[default]
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PositionKind::Static => "static",
            PositionKind::Relative => "relative",
            PositionKind::Absolute => "absolute",
            PositionKind::Fixed => "fixed",
            PositionKind::Sticky => "sticky",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    #[serde(rename = "type")]
    pub kind: PositionKind,
    pub l: String,
    pub t: String,
    pub r: String,
    pub b: String,
    pub z_index: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Size {
    pub width: String,
    pub height: String,
    pub max_width: String,
    pub max_height: String,
    pub min_width: String,
    pub min_height: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Poppins,
    Montserrat,
    Mono,
    Serif,
    Sans,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Inter => "inter",
            FontFamily::Roboto => "roboto",
            FontFamily::Poppins => "poppins",
            FontFamily::Montserrat => "montserrat",
            FontFamily::Mono => "mono",
            FontFamily::Serif => "serif",
            FontFamily::Sans => "sans",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Extralight,
    Light,
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
    Extrabold,
    Black,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Thin => "thin",
            FontWeight::Extralight => "extralight",
            FontWeight::Light => "light",
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Extrabold => "extrabold",
            FontWeight::Black => "black",
        }
    }

    /// Numeric CSS `font-weight` value.
    pub fn css_value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Extralight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Extrabold => 800,
            FontWeight::Black => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSpacing {
    Tighter,
    Tight,
    #[default]
    Normal,
    Wide,
    Wider,
    Widest,
}

impl LetterSpacing {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterSpacing::Tighter => "tighter",
            LetterSpacing::Tight => "tight",
            LetterSpacing::Normal => "normal",
            LetterSpacing::Wide => "wide",
            LetterSpacing::Wider => "wider",
            LetterSpacing::Widest => "widest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_family: FontFamily,
    pub font_size: String,
    pub font_weight: FontWeight,
    pub line_height: String,
    pub letter_spacing: LetterSpacing,
    pub text_align: TextAlign,
    pub text_color: Option<String>,
}

/// 2D transform components. `scale` is a percentage: 100 = identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transforms {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub scale: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for Transforms {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            scale: 100.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

/// 3D rotation plus perspective. `perspective` is a small integer scale
/// factor (multiplied by 100 to get pixels); 0 means no perspective.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transforms3D {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub perspective: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// Corner radii in px. `all` and the per-corner fields are independent; any
/// non-zero corner wins over `all` at render time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Radius {
    pub all: f64,
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl Radius {
    pub fn uniform(px: f64) -> Self {
        Self {
            all: px,
            tl: px,
            tr: px,
            br: px,
            bl: px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Border {
    pub color: Option<String>,
    pub width: String,
    pub style: BorderStyle,
    pub ring_color: Option<String>,
    pub radius: Radius,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: None,
            width: "0".into(),
            style: BorderStyle::Solid,
            ring_color: None,
            radius: Radius::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    #[default]
    None,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    Inner,
}

impl Shadow {
    pub fn as_str(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Sm => "sm",
            Shadow::Md => "md",
            Shadow::Lg => "lg",
            Shadow::Xl => "xl",
            Shadow::Xxl => "2xl",
            Shadow::Inner => "inner",
        }
    }

    /// Concrete `box-shadow` value for the named preset, Tailwind scale.
    pub fn box_shadow(self) -> Option<&'static str> {
        match self {
            Shadow::None => None,
            Shadow::Sm => Some("0 1px 2px 0 rgb(0 0 0 / 0.05)"),
            Shadow::Md => {
                Some("0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)")
            }
            Shadow::Lg => {
                Some("0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)")
            }
            Shadow::Xl => {
                Some("0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)")
            }
            Shadow::Xxl => Some("0 25px 50px -12px rgb(0 0 0 / 0.25)"),
            Shadow::Inner => Some("inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
        }
    }
}

/// Visual effects. Percentage fields use 100 as identity; 0-100 fields use
/// 0 as identity. `blur`/`backdrop_blur` are px, `hue_rotate` degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Effects {
    pub shadow: Shadow,
    pub opacity: f64,
    pub blur: f64,
    pub backdrop_blur: f64,
    pub hue_rotate: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub invert: f64,
    pub sepia: f64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            shadow: Shadow::None,
            opacity: 100.0,
            blur: 0.0,
            backdrop_blur: 0.0,
            hue_rotate: 0.0,
            saturation: 100.0,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            invert: 0.0,
            sepia: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    Difference,
    Exclusion,
}

impl BlendMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    pub background_color: Option<String>,
    pub background_image: String,
    pub blend_mode: BlendMode,
}

// ── The canonical record ───────────────────────────────────────────────

/// Complete visual configuration of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleState {
    pub element_id: String,
    pub tag: String,
    pub text_content: String,
    pub link: String,

    pub padding: Spacing,
    pub margin: Margin,

    pub position: Position,
    pub size: Size,

    pub typography: Typography,

    pub transforms: Transforms,
    #[serde(rename = "transforms3D")]
    pub transforms_3d: Transforms3D,

    pub border: Border,

    pub effects: Effects,

    pub appearance: Appearance,

    #[serde(rename = "inlineCSS")]
    pub inline_css: String,
    pub tailwind_classes: Vec<String>,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            element_id: String::new(),
            tag: "div".into(),
            text_content: String::new(),
            link: String::new(),
            padding: Spacing::default(),
            margin: Margin::default(),
            position: Position::default(),
            size: Size::default(),
            typography: Typography::default(),
            transforms: Transforms::default(),
            transforms_3d: Transforms3D::default(),
            border: Border::default(),
            effects: Effects::default(),
            appearance: Appearance::default(),
            inline_css: String::new(),
            tailwind_classes: Vec::new(),
        }
    }
}

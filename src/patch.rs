//! Sparse partial-state patches and the deep-merge rules.
//!
//! A [`StylePatch`] mirrors [`StyleState`](crate::state::StyleState) with
//! every leaf optional. The same type serves three roles: a single-field
//! edit routed by the session, a breakpoint override record, and the
//! partial-state payload produced by the styling assistant or a template.
//!
//! Merging is written as explicit per-field-group functions over the known
//! tree shape — no reflection. Scalars and arrays replace; nested records
//! merge leaf-by-leaf.

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::{
    Appearance, Axis, BlendMode, Border, BorderStyle, Corner, Effects, FontFamily, FontWeight,
    LetterSpacing, Margin, Position, PositionKind, Radius, Shadow, Side, Size, Spacing, StyleState,
    TextAlign, Transforms, Transforms3D, Typography,
};

/// Distinguish "key absent" from "key present and null" for the nullable
/// color leaves: absent leaves the base color untouched, an explicit JSON
/// `null` clears it.
fn nullable<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}

// ── Nested patch records ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<String>,
}

impl SpacingPatch {
    fn merge_from(&mut self, other: &SpacingPatch) {
        if other.l.is_some() {
            self.l = other.l.clone();
        }
        if other.t.is_some() {
            self.t = other.t.clone();
        }
        if other.r.is_some() {
            self.r = other.r.clone();
        }
        if other.b.is_some() {
            self.b = other.b.clone();
        }
    }

    fn apply_to(&self, target: &mut Spacing) {
        if let Some(v) = &self.l {
            target.l = v.clone();
        }
        if let Some(v) = &self.t {
            target.t = v.clone();
        }
        if let Some(v) = &self.r {
            target.r = v.clone();
        }
        if let Some(v) = &self.b {
            target.b = v.clone();
        }
    }
}

impl From<Spacing> for SpacingPatch {
    fn from(v: Spacing) -> Self {
        Self {
            l: Some(v.l),
            t: Some(v.t),
            r: Some(v.r),
            b: Some(v.b),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

impl MarginPatch {
    fn merge_from(&mut self, other: &MarginPatch) {
        if other.x.is_some() {
            self.x = other.x.clone();
        }
        if other.y.is_some() {
            self.y = other.y.clone();
        }
    }

    fn apply_to(&self, target: &mut Margin) {
        if let Some(v) = &self.x {
            target.x = v.clone();
        }
        if let Some(v) = &self.y {
            target.y = v.clone();
        }
    }
}

impl From<Margin> for MarginPatch {
    fn from(v: Margin) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PositionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,
}

impl PositionPatch {
    fn merge_from(&mut self, other: &PositionPatch) {
        if other.kind.is_some() {
            self.kind = other.kind;
        }
        if other.l.is_some() {
            self.l = other.l.clone();
        }
        if other.t.is_some() {
            self.t = other.t.clone();
        }
        if other.r.is_some() {
            self.r = other.r.clone();
        }
        if other.b.is_some() {
            self.b = other.b.clone();
        }
        if other.z_index.is_some() {
            self.z_index = other.z_index.clone();
        }
    }

    fn apply_to(&self, target: &mut Position) {
        if let Some(v) = self.kind {
            target.kind = v;
        }
        if let Some(v) = &self.l {
            target.l = v.clone();
        }
        if let Some(v) = &self.t {
            target.t = v.clone();
        }
        if let Some(v) = &self.r {
            target.r = v.clone();
        }
        if let Some(v) = &self.b {
            target.b = v.clone();
        }
        if let Some(v) = &self.z_index {
            target.z_index = v.clone();
        }
    }
}

impl From<Position> for PositionPatch {
    fn from(v: Position) -> Self {
        Self {
            kind: Some(v.kind),
            l: Some(v.l),
            t: Some(v.t),
            r: Some(v.r),
            b: Some(v.b),
            z_index: Some(v.z_index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
}

impl SizePatch {
    fn merge_from(&mut self, other: &SizePatch) {
        if other.width.is_some() {
            self.width = other.width.clone();
        }
        if other.height.is_some() {
            self.height = other.height.clone();
        }
        if other.max_width.is_some() {
            self.max_width = other.max_width.clone();
        }
        if other.max_height.is_some() {
            self.max_height = other.max_height.clone();
        }
        if other.min_width.is_some() {
            self.min_width = other.min_width.clone();
        }
        if other.min_height.is_some() {
            self.min_height = other.min_height.clone();
        }
    }

    fn apply_to(&self, target: &mut Size) {
        if let Some(v) = &self.width {
            target.width = v.clone();
        }
        if let Some(v) = &self.height {
            target.height = v.clone();
        }
        if let Some(v) = &self.max_width {
            target.max_width = v.clone();
        }
        if let Some(v) = &self.max_height {
            target.max_height = v.clone();
        }
        if let Some(v) = &self.min_width {
            target.min_width = v.clone();
        }
        if let Some(v) = &self.min_height {
            target.min_height = v.clone();
        }
    }
}

impl From<Size> for SizePatch {
    fn from(v: Size) -> Self {
        Self {
            width: Some(v.width),
            height: Some(v.height),
            max_width: Some(v.max_width),
            max_height: Some(v.max_height),
            min_width: Some(v.min_width),
            min_height: Some(v.min_height),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Option<String>>,
}

impl TypographyPatch {
    fn merge_from(&mut self, other: &TypographyPatch) {
        if other.font_family.is_some() {
            self.font_family = other.font_family;
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size.clone();
        }
        if other.font_weight.is_some() {
            self.font_weight = other.font_weight;
        }
        if other.line_height.is_some() {
            self.line_height = other.line_height.clone();
        }
        if other.letter_spacing.is_some() {
            self.letter_spacing = other.letter_spacing;
        }
        if other.text_align.is_some() {
            self.text_align = other.text_align;
        }
        if other.text_color.is_some() {
            self.text_color = other.text_color.clone();
        }
    }

    fn apply_to(&self, target: &mut Typography) {
        if let Some(v) = self.font_family {
            target.font_family = v;
        }
        if let Some(v) = &self.font_size {
            target.font_size = v.clone();
        }
        if let Some(v) = self.font_weight {
            target.font_weight = v;
        }
        if let Some(v) = &self.line_height {
            target.line_height = v.clone();
        }
        if let Some(v) = self.letter_spacing {
            target.letter_spacing = v;
        }
        if let Some(v) = self.text_align {
            target.text_align = v;
        }
        if let Some(v) = &self.text_color {
            target.text_color = v.clone();
        }
    }
}

impl From<Typography> for TypographyPatch {
    fn from(v: Typography) -> Self {
        Self {
            font_family: Some(v.font_family),
            font_size: Some(v.font_size),
            font_weight: Some(v.font_weight),
            line_height: Some(v.line_height),
            letter_spacing: Some(v.letter_spacing),
            text_align: Some(v.text_align),
            text_color: Some(v.text_color),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_y: Option<f64>,
}

impl TransformsPatch {
    fn merge_from(&mut self, other: &TransformsPatch) {
        if other.translate_x.is_some() {
            self.translate_x = other.translate_x;
        }
        if other.translate_y.is_some() {
            self.translate_y = other.translate_y;
        }
        if other.rotate.is_some() {
            self.rotate = other.rotate;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
        if other.skew_x.is_some() {
            self.skew_x = other.skew_x;
        }
        if other.skew_y.is_some() {
            self.skew_y = other.skew_y;
        }
    }

    fn apply_to(&self, target: &mut Transforms) {
        if let Some(v) = self.translate_x {
            target.translate_x = v;
        }
        if let Some(v) = self.translate_y {
            target.translate_y = v;
        }
        if let Some(v) = self.rotate {
            target.rotate = v;
        }
        if let Some(v) = self.scale {
            target.scale = v;
        }
        if let Some(v) = self.skew_x {
            target.skew_x = v;
        }
        if let Some(v) = self.skew_y {
            target.skew_y = v;
        }
    }
}

impl From<Transforms> for TransformsPatch {
    fn from(v: Transforms) -> Self {
        Self {
            translate_x: Some(v.translate_x),
            translate_y: Some(v.translate_y),
            rotate: Some(v.rotate),
            scale: Some(v.scale),
            skew_x: Some(v.skew_x),
            skew_y: Some(v.skew_y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transforms3DPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f64>,
}

impl Transforms3DPatch {
    fn merge_from(&mut self, other: &Transforms3DPatch) {
        if other.rotate_x.is_some() {
            self.rotate_x = other.rotate_x;
        }
        if other.rotate_y.is_some() {
            self.rotate_y = other.rotate_y;
        }
        if other.rotate_z.is_some() {
            self.rotate_z = other.rotate_z;
        }
        if other.perspective.is_some() {
            self.perspective = other.perspective;
        }
    }

    fn apply_to(&self, target: &mut Transforms3D) {
        if let Some(v) = self.rotate_x {
            target.rotate_x = v;
        }
        if let Some(v) = self.rotate_y {
            target.rotate_y = v;
        }
        if let Some(v) = self.rotate_z {
            target.rotate_z = v;
        }
        if let Some(v) = self.perspective {
            target.perspective = v;
        }
    }
}

impl From<Transforms3D> for Transforms3DPatch {
    fn from(v: Transforms3D) -> Self {
        Self {
            rotate_x: Some(v.rotate_x),
            rotate_y: Some(v.rotate_y),
            rotate_z: Some(v.rotate_z),
            perspective: Some(v.perspective),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub br: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bl: Option<f64>,
}

impl RadiusPatch {
    pub fn uniform(px: f64) -> Self {
        Radius::uniform(px).into()
    }

    fn merge_from(&mut self, other: &RadiusPatch) {
        if other.all.is_some() {
            self.all = other.all;
        }
        if other.tl.is_some() {
            self.tl = other.tl;
        }
        if other.tr.is_some() {
            self.tr = other.tr;
        }
        if other.br.is_some() {
            self.br = other.br;
        }
        if other.bl.is_some() {
            self.bl = other.bl;
        }
    }

    fn apply_to(&self, target: &mut Radius) {
        if let Some(v) = self.all {
            target.all = v;
        }
        if let Some(v) = self.tl {
            target.tl = v;
        }
        if let Some(v) = self.tr {
            target.tr = v;
        }
        if let Some(v) = self.br {
            target.br = v;
        }
        if let Some(v) = self.bl {
            target.bl = v;
        }
    }
}

impl From<Radius> for RadiusPatch {
    fn from(v: Radius) -> Self {
        Self {
            all: Some(v.all),
            tl: Some(v.tl),
            tr: Some(v.tr),
            br: Some(v.br),
            bl: Some(v.bl),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderPatch {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub ring_color: Option<Option<String>>,
    /// Radius merges its sub-keys independently (the two-level merge).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<RadiusPatch>,
}

impl BorderPatch {
    fn merge_from(&mut self, other: &BorderPatch) {
        if other.color.is_some() {
            self.color = other.color.clone();
        }
        if other.width.is_some() {
            self.width = other.width.clone();
        }
        if other.style.is_some() {
            self.style = other.style;
        }
        if other.ring_color.is_some() {
            self.ring_color = other.ring_color.clone();
        }
        if let Some(radius) = &other.radius {
            self.radius
                .get_or_insert_with(RadiusPatch::default)
                .merge_from(radius);
        }
    }

    fn apply_to(&self, target: &mut Border) {
        if let Some(v) = &self.color {
            target.color = v.clone();
        }
        if let Some(v) = &self.width {
            target.width = v.clone();
        }
        if let Some(v) = self.style {
            target.style = v;
        }
        if let Some(v) = &self.ring_color {
            target.ring_color = v.clone();
        }
        if let Some(v) = &self.radius {
            v.apply_to(&mut target.radius);
        }
    }
}

impl From<Border> for BorderPatch {
    fn from(v: Border) -> Self {
        Self {
            color: Some(v.color),
            width: Some(v.width),
            style: Some(v.style),
            ring_color: Some(v.ring_color),
            radius: Some(v.radius.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepia: Option<f64>,
}

impl EffectsPatch {
    fn merge_from(&mut self, other: &EffectsPatch) {
        if other.shadow.is_some() {
            self.shadow = other.shadow;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.blur.is_some() {
            self.blur = other.blur;
        }
        if other.backdrop_blur.is_some() {
            self.backdrop_blur = other.backdrop_blur;
        }
        if other.hue_rotate.is_some() {
            self.hue_rotate = other.hue_rotate;
        }
        if other.saturation.is_some() {
            self.saturation = other.saturation;
        }
        if other.brightness.is_some() {
            self.brightness = other.brightness;
        }
        if other.contrast.is_some() {
            self.contrast = other.contrast;
        }
        if other.grayscale.is_some() {
            self.grayscale = other.grayscale;
        }
        if other.invert.is_some() {
            self.invert = other.invert;
        }
        if other.sepia.is_some() {
            self.sepia = other.sepia;
        }
    }

    fn apply_to(&self, target: &mut Effects) {
        if let Some(v) = self.shadow {
            target.shadow = v;
        }
        if let Some(v) = self.opacity {
            target.opacity = v;
        }
        if let Some(v) = self.blur {
            target.blur = v;
        }
        if let Some(v) = self.backdrop_blur {
            target.backdrop_blur = v;
        }
        if let Some(v) = self.hue_rotate {
            target.hue_rotate = v;
        }
        if let Some(v) = self.saturation {
            target.saturation = v;
        }
        if let Some(v) = self.brightness {
            target.brightness = v;
        }
        if let Some(v) = self.contrast {
            target.contrast = v;
        }
        if let Some(v) = self.grayscale {
            target.grayscale = v;
        }
        if let Some(v) = self.invert {
            target.invert = v;
        }
        if let Some(v) = self.sepia {
            target.sepia = v;
        }
    }
}

impl From<Effects> for EffectsPatch {
    fn from(v: Effects) -> Self {
        Self {
            shadow: Some(v.shadow),
            opacity: Some(v.opacity),
            blur: Some(v.blur),
            backdrop_blur: Some(v.backdrop_blur),
            hue_rotate: Some(v.hue_rotate),
            saturation: Some(v.saturation),
            brightness: Some(v.brightness),
            contrast: Some(v.contrast),
            grayscale: Some(v.grayscale),
            invert: Some(v.invert),
            sepia: Some(v.sepia),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearancePatch {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

impl AppearancePatch {
    fn merge_from(&mut self, other: &AppearancePatch) {
        if other.background_color.is_some() {
            self.background_color = other.background_color.clone();
        }
        if other.background_image.is_some() {
            self.background_image = other.background_image.clone();
        }
        if other.blend_mode.is_some() {
            self.blend_mode = other.blend_mode;
        }
    }

    fn apply_to(&self, target: &mut Appearance) {
        if let Some(v) = &self.background_color {
            target.background_color = v.clone();
        }
        if let Some(v) = &self.background_image {
            target.background_image = v.clone();
        }
        if let Some(v) = self.blend_mode {
            target.blend_mode = v;
        }
    }
}

impl From<Appearance> for AppearancePatch {
    fn from(v: Appearance) -> Self {
        Self {
            background_color: Some(v.background_color),
            background_image: Some(v.background_image),
            blend_mode: Some(v.blend_mode),
        }
    }
}

// ── The patch root ─────────────────────────────────────────────────────

/// Sparse mirror of [`StyleState`]: only the fields to change are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<MarginPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<TransformsPatch>,
    #[serde(rename = "transforms3D", skip_serializing_if = "Option::is_none")]
    pub transforms_3d: Option<Transforms3DPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<AppearancePatch>,
    #[serde(rename = "inlineCSS", skip_serializing_if = "Option::is_none")]
    pub inline_css: Option<String>,
    /// Arrays replace outright, never concatenate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind_classes: Option<Vec<String>>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        *self == StylePatch::default()
    }

    /// Deep-merge another patch into this one. Used to accumulate edits in
    /// a breakpoint override record.
    pub fn merge_from(&mut self, other: &StylePatch) {
        if other.element_id.is_some() {
            self.element_id = other.element_id.clone();
        }
        if other.tag.is_some() {
            self.tag = other.tag.clone();
        }
        if other.text_content.is_some() {
            self.text_content = other.text_content.clone();
        }
        if other.link.is_some() {
            self.link = other.link.clone();
        }
        if let Some(v) = &other.padding {
            self.padding
                .get_or_insert_with(SpacingPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.margin {
            self.margin
                .get_or_insert_with(MarginPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.position {
            self.position
                .get_or_insert_with(PositionPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.size {
            self.size
                .get_or_insert_with(SizePatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.typography {
            self.typography
                .get_or_insert_with(TypographyPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.transforms {
            self.transforms
                .get_or_insert_with(TransformsPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.transforms_3d {
            self.transforms_3d
                .get_or_insert_with(Transforms3DPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.border {
            self.border
                .get_or_insert_with(BorderPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.effects {
            self.effects
                .get_or_insert_with(EffectsPatch::default)
                .merge_from(v);
        }
        if let Some(v) = &other.appearance {
            self.appearance
                .get_or_insert_with(AppearancePatch::default)
                .merge_from(v);
        }
        if other.inline_css.is_some() {
            self.inline_css = other.inline_css.clone();
        }
        if other.tailwind_classes.is_some() {
            self.tailwind_classes = other.tailwind_classes.clone();
        }
    }

    /// Apply every present leaf onto a state. Absent leaves leave the state
    /// untouched; this is the non-destructive partial override.
    pub fn apply_to(&self, target: &mut StyleState) {
        if let Some(v) = &self.element_id {
            target.element_id = v.clone();
        }
        if let Some(v) = &self.tag {
            target.tag = v.clone();
        }
        if let Some(v) = &self.text_content {
            target.text_content = v.clone();
        }
        if let Some(v) = &self.link {
            target.link = v.clone();
        }
        if let Some(v) = &self.padding {
            v.apply_to(&mut target.padding);
        }
        if let Some(v) = &self.margin {
            v.apply_to(&mut target.margin);
        }
        if let Some(v) = &self.position {
            v.apply_to(&mut target.position);
        }
        if let Some(v) = &self.size {
            v.apply_to(&mut target.size);
        }
        if let Some(v) = &self.typography {
            v.apply_to(&mut target.typography);
        }
        if let Some(v) = &self.transforms {
            v.apply_to(&mut target.transforms);
        }
        if let Some(v) = &self.transforms_3d {
            v.apply_to(&mut target.transforms_3d);
        }
        if let Some(v) = &self.border {
            v.apply_to(&mut target.border);
        }
        if let Some(v) = &self.effects {
            v.apply_to(&mut target.effects);
        }
        if let Some(v) = &self.appearance {
            v.apply_to(&mut target.appearance);
        }
        if let Some(v) = &self.inline_css {
            target.inline_css = v.clone();
        }
        if let Some(v) = &self.tailwind_classes {
            target.tailwind_classes = v.clone();
        }
    }
}

// ── Single-leaf constructors ───────────────────────────────────────────
//
// One patch per panel edit: `setNestedField("padding", "l", "16")` becomes
// `StylePatch::padding_side(Side::Left, "16")`.

impl StylePatch {
    pub fn padding_side(side: Side, value: impl Into<String>) -> Self {
        let mut patch = SpacingPatch::default();
        let value = Some(value.into());
        match side {
            Side::Left => patch.l = value,
            Side::Top => patch.t = value,
            Side::Right => patch.r = value,
            Side::Bottom => patch.b = value,
        }
        Self {
            padding: Some(patch),
            ..Default::default()
        }
    }

    pub fn margin_axis(axis: Axis, value: impl Into<String>) -> Self {
        let mut patch = MarginPatch::default();
        let value = Some(value.into());
        match axis {
            Axis::X => patch.x = value,
            Axis::Y => patch.y = value,
        }
        Self {
            margin: Some(patch),
            ..Default::default()
        }
    }

    pub fn position_kind(kind: PositionKind) -> Self {
        Self {
            position: Some(PositionPatch {
                kind: Some(kind),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// The two-level-deep write used solely for `border.radius.*`.
    pub fn radius_corner(corner: Corner, px: f64) -> Self {
        let mut patch = RadiusPatch::default();
        let px = Some(px);
        match corner {
            Corner::Tl => patch.tl = px,
            Corner::Tr => patch.tr = px,
            Corner::Br => patch.br = px,
            Corner::Bl => patch.bl = px,
        }
        Self {
            border: Some(BorderPatch {
                radius: Some(patch),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn radius_all(px: f64) -> Self {
        Self {
            border: Some(BorderPatch {
                radius: Some(RadiusPatch {
                    all: Some(px),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn text_color(color: Option<&str>) -> Self {
        Self {
            typography: Some(TypographyPatch {
                text_color: Some(color.map(str::to_string)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn background_color(color: Option<&str>) -> Self {
        Self {
            appearance: Some(AppearancePatch {
                background_color: Some(color.map(str::to_string)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn scale(pct: f64) -> Self {
        Self {
            transforms: Some(TransformsPatch {
                scale: Some(pct),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn rotate(deg: f64) -> Self {
        Self {
            transforms: Some(TransformsPatch {
                rotate: Some(deg),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn opacity(pct: f64) -> Self {
        Self {
            effects: Some(EffectsPatch {
                opacity: Some(pct),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn shadow(shadow: Shadow) -> Self {
        Self {
            effects: Some(EffectsPatch {
                shadow: Some(shadow),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

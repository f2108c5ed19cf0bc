//! Renderer and factory capability contracts
//!
//! The drawing core never talks to a concrete graphics API. It manufactures
//! backend resources through a [`Factory`] and submits them to a [`Renderer`];
//! any backend (GPU or the software [`crate::recording`] path) plugs in by
//! implementing these two traits. Resources returned by a factory must only
//! ever be handed back to the renderer that shares its backend.
//!
//! Every trait object exposes `as_any` so a backend can recover its concrete
//! resource types at the submission boundary.

use std::any::Any;

use crate::color::Color;
use crate::geometry::AffineTransform;
use crate::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Attribute enums
// ─────────────────────────────────────────────────────────────────────────────

/// Interior test used when rasterizing a closed path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Winding-number test
    #[default]
    NonZero,
    /// Crossing-parity test
    EvenOdd,
}

/// Whether a paint fills the path interior or strokes its outline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Round corner
    Round,
    /// Flat corner
    Bevel,
}

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Blend mode for image composition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
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
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend resources
// ─────────────────────────────────────────────────────────────────────────────

/// Backend-native paint object
pub trait RenderPaint {
    fn set_style(&mut self, style: PaintStyle);
    fn set_color(&mut self, color: Color);
    fn set_shader(&mut self, shader: Box<dyn RenderShader>);
    fn set_thickness(&mut self, thickness: f32);
    fn set_join(&mut self, join: StrokeJoin);
    fn set_cap(&mut self, cap: StrokeCap);
    fn as_any(&self) -> &dyn Any;
}

/// Backend-native gradient shader
pub trait RenderShader {
    fn as_any(&self) -> &dyn Any;
}

/// Backend-native realization of a [`Path`]
pub trait RenderPath {
    fn as_any(&self) -> &dyn Any;
}

/// Backend-native image
pub trait RenderImage {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn as_any(&self) -> &dyn Any;
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability interfaces
// ─────────────────────────────────────────────────────────────────────────────

/// Manufactures backend resources.
///
/// Returned objects are live and independently owned; no caching or interning
/// is required of the caller.
pub trait Factory {
    fn make_render_paint(&mut self) -> Box<dyn RenderPaint>;

    fn make_render_path(&mut self, path: &Path, fill_rule: FillRule) -> Box<dyn RenderPath>;

    fn make_linear_gradient(
        &mut self,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        colors: &[Color],
        stops: &[f32],
    ) -> Box<dyn RenderShader>;

    fn make_radial_gradient(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        colors: &[Color],
        stops: &[f32],
    ) -> Box<dyn RenderShader>;
}

/// Consumes realized paths and paints.
///
/// `save`/`restore` must nest LIFO; callers are expected to keep a strict 1:1
/// correspondence between their own state stack and these calls.
pub trait Renderer {
    fn save(&mut self);
    fn restore(&mut self);
    fn transform(&mut self, transform: &AffineTransform);
    fn draw_path(&mut self, path: &dyn RenderPath, paint: &dyn RenderPaint);
    fn clip_path(&mut self, path: &dyn RenderPath);
    fn draw_image(&mut self, image: &dyn RenderImage, blend_mode: BlendMode, opacity: f32);
}

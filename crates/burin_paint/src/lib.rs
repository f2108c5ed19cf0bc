//! Burin immediate-mode drawing API
//!
//! A 2D drawing context over the `burin_core` renderer contract. All core
//! types are re-exported here so downstream code can depend on this crate
//! alone.
//!
//! # Example
//!
//! ```rust
//! use burin_paint::{
//!     Color, ColorGradient, Graphics, Point, RecordingFactory, RecordingRenderer, Rectangle,
//! };
//!
//! let mut renderer = RecordingRenderer::new();
//! let mut factory = RecordingFactory::new();
//!
//! {
//!     let mut g = Graphics::new(&mut renderer, &mut factory);
//!     g.set_color(Color::from_hex(0x336699));
//!     g.fill_rounded_rect(Rectangle::new(10.0, 10.0, 120.0, 48.0), 8.0);
//!
//!     let mut saved = g.save_state();
//!     saved.set_color_gradient(ColorGradient::linear(
//!         Point::new(0.0, 0.0),
//!         Point::new(0.0, 48.0),
//!         Color::WHITE,
//!         Color::TRANSPARENT,
//!     ));
//!     saved.fill_rect(Rectangle::new(10.0, 10.0, 120.0, 24.0));
//!     // dropping the guard pops the gradient frame again
//! }
//!
//! assert_eq!(renderer.commands().len(), 4);
//! ```

pub mod graphics;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from burin_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use burin_core::{
    // Transforms
    AffineTransform,
    // Image composition
    BlendMode,
    // Colors and gradients
    Color,
    ColorGradient,
    ColorStop,
    // Corner radius
    CornerRadius,
    // Renderer contract
    Factory,
    FillRule,
    PaintStyle,
    // Paths
    Path,
    PathDataError,
    // Geometry
    Point,
    Rectangle,
    // Recording backend
    RecordingFactory,
    RecordingImage,
    RecordingRenderer,
    RenderCommand,
    RenderImage,
    RenderPaint,
    RenderPath,
    RenderShader,
    Renderer,
    Segment,
    Size,
    // Strokes
    StrokeCap,
    StrokeJoin,
};

// ─────────────────────────────────────────────────────────────────────────────
// burin_paint specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use graphics::{Graphics, PaintSource, RenderOptions, SavedState};

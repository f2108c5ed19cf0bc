//! Burin core rendering model
//!
//! This crate provides the device-independent half of the Burin drawing
//! stack:
//!
//! - **Geometry**: points, sizes, rectangles, corner radii, affine transforms
//! - **Paths**: segment sequences with incremental bounds, geometric
//!   builders, and an SVG path-data interpreter
//! - **Paint model**: colors and two-stop linear/radial gradients
//! - **Renderer contract**: the [`Factory`]/[`Renderer`] capability traits
//!   every graphics-API backend implements
//! - **Recording backend**: a software implementation of that contract which
//!   logs submissions for headless use and testing
//!
//! # Example
//!
//! ```rust
//! use burin_core::{Path, Rectangle};
//!
//! let mut path = Path::new();
//! path.add_rounded_rectangle(0.0, 0.0, 100.0, 60.0, 8.0);
//! assert_eq!(path.bounding_box(), Rectangle::new(0.0, 0.0, 100.0, 60.0));
//!
//! let mut outline = Path::new();
//! assert!(outline.parse_path_data("M0,0 L100,0 L100,60 Z"));
//! ```

pub mod color;
pub mod geometry;
pub mod path;
pub mod recording;
pub mod renderer;
pub mod svg;

pub use color::{Color, ColorGradient, ColorStop};
pub use geometry::{AffineTransform, CornerRadius, Point, Rectangle, Size};
pub use path::{Path, Segment};
pub use recording::{
    BrushSnapshot, PaintSnapshot, RecordingFactory, RecordingImage, RecordingPaint, RecordingPath,
    RecordingRenderer, RecordingShader, RenderCommand, ShaderSnapshot,
};
pub use renderer::{
    BlendMode, Factory, FillRule, PaintStyle, RenderImage, RenderPaint, RenderPath, RenderShader,
    Renderer, StrokeCap, StrokeJoin,
};
pub use svg::PathDataError;

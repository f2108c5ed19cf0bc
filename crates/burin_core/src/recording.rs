//! Recording backend
//!
//! A software implementation of the [`Factory`]/[`Renderer`] contract that
//! realizes resources as plain snapshots and logs every submission into an
//! inspectable [`RenderCommand`] list. It backs headless rendering and is the
//! deterministic backend the drawing-context tests run against.

use std::any::Any;

use crate::color::Color;
use crate::geometry::{AffineTransform, Point};
use crate::path::{Path, Segment};
use crate::renderer::{
    BlendMode, Factory, FillRule, PaintStyle, RenderImage, RenderPaint, RenderPath, RenderShader,
    Renderer, StrokeCap, StrokeJoin,
};

// ─────────────────────────────────────────────────────────────────────────────
// Snapshots
// ─────────────────────────────────────────────────────────────────────────────

/// Realized gradient geometry and stops
#[derive(Clone, Debug, PartialEq)]
pub enum ShaderSnapshot {
    Linear {
        start: Point,
        end: Point,
        colors: Vec<Color>,
        stops: Vec<f32>,
    },
    Radial {
        center: Point,
        radius: f32,
        colors: Vec<Color>,
        stops: Vec<f32>,
    },
}

/// Paint source captured at submission time
#[derive(Clone, Debug, PartialEq)]
pub enum BrushSnapshot {
    Solid(Color),
    Shader(ShaderSnapshot),
}

/// Full paint state captured at submission time
#[derive(Clone, Debug, PartialEq)]
pub struct PaintSnapshot {
    pub style: PaintStyle,
    pub brush: BrushSnapshot,
    pub thickness: f32,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
}

impl Default for PaintSnapshot {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            brush: BrushSnapshot::Solid(Color::BLACK),
            thickness: 1.0,
            join: StrokeJoin::Miter,
            cap: StrokeCap::Butt,
        }
    }
}

/// One recorded renderer submission
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Save,
    Restore,
    Transform(AffineTransform),
    DrawPath {
        segments: Vec<Segment>,
        fill_rule: FillRule,
        paint: PaintSnapshot,
    },
    ClipPath {
        segments: Vec<Segment>,
        fill_rule: FillRule,
    },
    DrawImage {
        width: f32,
        height: f32,
        blend_mode: BlendMode,
        opacity: f32,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Paint object realized as a mutable snapshot
#[derive(Clone, Debug, Default)]
pub struct RecordingPaint {
    snapshot: PaintSnapshot,
}

impl RecordingPaint {
    pub fn snapshot(&self) -> &PaintSnapshot {
        &self.snapshot
    }
}

impl RenderPaint for RecordingPaint {
    fn set_style(&mut self, style: PaintStyle) {
        self.snapshot.style = style;
    }

    fn set_color(&mut self, color: Color) {
        self.snapshot.brush = BrushSnapshot::Solid(color);
    }

    fn set_shader(&mut self, shader: Box<dyn RenderShader>) {
        match shader.as_any().downcast_ref::<RecordingShader>() {
            Some(shader) => self.snapshot.brush = BrushSnapshot::Shader(shader.snapshot.clone()),
            None => tracing::warn!("set_shader: shader was not made by the recording factory"),
        }
    }

    fn set_thickness(&mut self, thickness: f32) {
        self.snapshot.thickness = thickness;
    }

    fn set_join(&mut self, join: StrokeJoin) {
        self.snapshot.join = join;
    }

    fn set_cap(&mut self, cap: StrokeCap) {
        self.snapshot.cap = cap;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Gradient shader realized as a snapshot
#[derive(Clone, Debug)]
pub struct RecordingShader {
    snapshot: ShaderSnapshot,
}

impl RenderShader for RecordingShader {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Path realized as a flat segment copy
#[derive(Clone, Debug)]
pub struct RecordingPath {
    segments: Vec<Segment>,
    fill_rule: FillRule,
}

impl RecordingPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }
}

impl RenderPath for RecordingPath {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Placeholder image carrying only its dimensions
#[derive(Clone, Copy, Debug)]
pub struct RecordingImage {
    width: f32,
    height: f32,
}

impl RecordingImage {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl RenderImage for RecordingImage {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Factory and renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Manufactures recording resources
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordingFactory;

impl RecordingFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Factory for RecordingFactory {
    fn make_render_paint(&mut self) -> Box<dyn RenderPaint> {
        Box::new(RecordingPaint::default())
    }

    fn make_render_path(&mut self, path: &Path, fill_rule: FillRule) -> Box<dyn RenderPath> {
        Box::new(RecordingPath {
            segments: path.segments().to_vec(),
            fill_rule,
        })
    }

    fn make_linear_gradient(
        &mut self,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        colors: &[Color],
        stops: &[f32],
    ) -> Box<dyn RenderShader> {
        Box::new(RecordingShader {
            snapshot: ShaderSnapshot::Linear {
                start: Point::new(start_x, start_y),
                end: Point::new(end_x, end_y),
                colors: colors.to_vec(),
                stops: stops.to_vec(),
            },
        })
    }

    fn make_radial_gradient(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        colors: &[Color],
        stops: &[f32],
    ) -> Box<dyn RenderShader> {
        Box::new(RecordingShader {
            snapshot: ShaderSnapshot::Radial {
                center: Point::new(center_x, center_y),
                radius,
                colors: colors.to_vec(),
                stops: stops.to_vec(),
            },
        })
    }
}

/// Renderer that appends every submission to a command log
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.commands.push(RenderCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(RenderCommand::Restore);
    }

    fn transform(&mut self, transform: &AffineTransform) {
        self.commands.push(RenderCommand::Transform(*transform));
    }

    fn draw_path(&mut self, path: &dyn RenderPath, paint: &dyn RenderPaint) {
        let Some(path) = path.as_any().downcast_ref::<RecordingPath>() else {
            tracing::warn!("draw_path: path was not made by the recording factory");
            return;
        };
        let Some(paint) = paint.as_any().downcast_ref::<RecordingPaint>() else {
            tracing::warn!("draw_path: paint was not made by the recording factory");
            return;
        };

        self.commands.push(RenderCommand::DrawPath {
            segments: path.segments.clone(),
            fill_rule: path.fill_rule,
            paint: paint.snapshot.clone(),
        });
    }

    fn clip_path(&mut self, path: &dyn RenderPath) {
        let Some(path) = path.as_any().downcast_ref::<RecordingPath>() else {
            tracing::warn!("clip_path: path was not made by the recording factory");
            return;
        };

        self.commands.push(RenderCommand::ClipPath {
            segments: path.segments.clone(),
            fill_rule: path.fill_rule,
        });
    }

    fn draw_image(&mut self, image: &dyn RenderImage, blend_mode: BlendMode, opacity: f32) {
        self.commands.push(RenderCommand::DrawImage {
            width: image.width(),
            height: image.height(),
            blend_mode,
            opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_records_setters() {
        let mut factory = RecordingFactory::new();
        let mut paint = factory.make_render_paint();
        paint.set_style(PaintStyle::Stroke);
        paint.set_thickness(3.0);
        paint.set_join(StrokeJoin::Round);
        paint.set_cap(StrokeCap::Square);
        paint.set_color(Color::RED);

        let snapshot = paint
            .as_any()
            .downcast_ref::<RecordingPaint>()
            .unwrap()
            .snapshot();
        assert_eq!(snapshot.style, PaintStyle::Stroke);
        assert_eq!(snapshot.thickness, 3.0);
        assert_eq!(snapshot.join, StrokeJoin::Round);
        assert_eq!(snapshot.cap, StrokeCap::Square);
        assert_eq!(snapshot.brush, BrushSnapshot::Solid(Color::RED));
    }

    #[test]
    fn test_shader_replaces_solid_brush() {
        let mut factory = RecordingFactory::new();
        let shader = factory.make_linear_gradient(
            0.0,
            0.0,
            10.0,
            0.0,
            &[Color::RED, Color::BLUE],
            &[0.0, 1.0],
        );

        let mut paint = factory.make_render_paint();
        paint.set_color(Color::GREEN);
        paint.set_shader(shader);

        let snapshot = paint
            .as_any()
            .downcast_ref::<RecordingPaint>()
            .unwrap()
            .snapshot();
        assert!(matches!(
            snapshot.brush,
            BrushSnapshot::Shader(ShaderSnapshot::Linear { .. })
        ));
    }

    #[test]
    fn test_renderer_logs_submissions_in_order() {
        let mut factory = RecordingFactory::new();
        let mut renderer = RecordingRenderer::new();

        let mut path = Path::new();
        path.add_rectangle(0.0, 0.0, 10.0, 10.0);
        let render_path = factory.make_render_path(&path, FillRule::NonZero);
        let paint = factory.make_render_paint();

        renderer.save();
        renderer.draw_path(render_path.as_ref(), paint.as_ref());
        renderer.restore();

        let commands = renderer.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], RenderCommand::Save);
        assert!(matches!(
            commands[1],
            RenderCommand::DrawPath {
                fill_rule: FillRule::NonZero,
                ..
            }
        ));
        assert_eq!(commands[2], RenderCommand::Restore);
    }

    #[test]
    fn test_draw_image_records_dimensions() {
        let mut renderer = RecordingRenderer::new();
        let image = RecordingImage::new(64.0, 32.0);
        renderer.draw_image(&image, BlendMode::Normal, 0.5);

        assert_eq!(
            renderer.commands()[0],
            RenderCommand::DrawImage {
                width: 64.0,
                height: 32.0,
                blend_mode: BlendMode::Normal,
                opacity: 0.5,
            }
        );
    }
}

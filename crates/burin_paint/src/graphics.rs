//! Immediate-mode drawing context
//!
//! [`Graphics`] binds one renderer and one resource factory for the duration
//! of a render pass and layers paint state on top: the active paint source
//! (solid color or gradient), stroke join/cap, and a save/restore stack of
//! [`RenderOptions`] frames kept in strict 1:1 correspondence with the
//! backend's own `save`/`restore` calls.
//!
//! Every drawing operation is immediate: it builds a throwaway [`Path`],
//! materializes a paint object from the current frame, and issues a single
//! `draw_path` submission. Nothing is retained between calls, so state
//! changes and draw calls interleave freely in call order. Inputs are not
//! validated; degenerate geometry flows through to the backend, which is
//! expected to cull it.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use burin_core::{
    AffineTransform, BlendMode, Color, ColorGradient, CornerRadius, Factory, FillRule, PaintStyle,
    Path, Point, Rectangle, RenderImage, RenderPaint, RenderShader, Renderer, StrokeCap,
    StrokeJoin,
};

// ─────────────────────────────────────────────────────────────────────────────
// Paint state
// ─────────────────────────────────────────────────────────────────────────────

/// The active paint source of a state frame.
///
/// Setting a color or a gradient replaces the source wholesale, so a stale
/// value of the other kind can never leak into a draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintSource {
    Color(Color),
    Gradient(ColorGradient),
}

impl PaintSource {
    /// Rewrites the alpha channel of the active source in place
    pub fn set_alpha_u8(&mut self, alpha: u8) {
        match self {
            PaintSource::Color(color) => color.set_alpha_u8(alpha),
            PaintSource::Gradient(gradient) => gradient.set_alpha_u8(alpha),
        }
    }

    /// Alpha channel of the active source, quantized to 8 bits
    pub fn alpha_u8(&self) -> u8 {
        match self {
            PaintSource::Color(color) => color.alpha_u8(),
            PaintSource::Gradient(gradient) => gradient.start_color().alpha_u8(),
        }
    }
}

/// One frame of the save/restore stack
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub paint: PaintSource,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paint: PaintSource::Color(Color::BLACK),
            join: StrokeJoin::Miter,
            cap: StrokeCap::Butt,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graphics
// ─────────────────────────────────────────────────────────────────────────────

/// Immediate-mode drawing context bound to one renderer and one factory.
///
/// The context only borrows its backend; both borrows must outlive it. It is
/// single-threaded by design: build, mutate, and consume it within one render
/// pass on one thread.
pub struct Graphics<'a> {
    renderer: &'a mut dyn Renderer,
    factory: &'a mut dyn Factory,
    render_options: SmallVec<[RenderOptions; 4]>,
}

impl<'a> Graphics<'a> {
    /// Creates a context with a single default state frame
    pub fn new(renderer: &'a mut dyn Renderer, factory: &'a mut dyn Factory) -> Self {
        let mut render_options = SmallVec::new();
        render_options.push(RenderOptions::default());
        Self {
            renderer,
            factory,
            render_options,
        }
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    pub fn factory(&mut self) -> &mut dyn Factory {
        &mut *self.factory
    }

    fn current_render_options(&self) -> &RenderOptions {
        debug_assert!(!self.render_options.is_empty());
        self.render_options
            .last()
            .expect("render options stack is never empty")
    }

    fn current_render_options_mut(&mut self) -> &mut RenderOptions {
        debug_assert!(!self.render_options.is_empty());
        self.render_options
            .last_mut()
            .expect("render options stack is never empty")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save / restore
    // ─────────────────────────────────────────────────────────────────────────

    /// Pushes a copy of the current state frame and a matching backend save.
    ///
    /// The returned guard restores when it goes out of scope; moving it
    /// transfers that obligation to the new owner.
    pub fn save_state(&mut self) -> SavedState<'_, 'a> {
        let frame = *self.current_render_options();
        self.render_options.push(frame);
        self.renderer.save();
        SavedState {
            graphics: Some(self),
        }
    }

    /// Pops the current state frame and the matching backend save.
    ///
    /// Checked no-op when only the base frame remains, so an unbalanced call
    /// cannot corrupt the render pass.
    pub fn restore_state(&mut self) {
        if self.render_options.len() <= 1 {
            tracing::warn!("restore_state called without a matching save_state");
            return;
        }

        self.renderer.restore();
        self.render_options.pop();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paint attributes
    // ─────────────────────────────────────────────────────────────────────────

    /// Makes a solid color the active paint source
    pub fn set_color(&mut self, color: Color) {
        self.current_render_options_mut().paint = PaintSource::Color(color);
    }

    /// The active solid color, if a color is the active paint source
    pub fn color(&self) -> Option<Color> {
        match self.current_render_options().paint {
            PaintSource::Color(color) => Some(color),
            PaintSource::Gradient(_) => None,
        }
    }

    /// Makes a gradient the active paint source
    pub fn set_color_gradient(&mut self, gradient: ColorGradient) {
        self.current_render_options_mut().paint = PaintSource::Gradient(gradient);
    }

    /// The active gradient, if a gradient is the active paint source
    pub fn color_gradient(&self) -> Option<ColorGradient> {
        match self.current_render_options().paint {
            PaintSource::Gradient(gradient) => Some(gradient),
            PaintSource::Color(_) => None,
        }
    }

    pub fn paint_source(&self) -> &PaintSource {
        &self.current_render_options().paint
    }

    /// Applies an opacity to the active paint source by rewriting its alpha
    /// channel in place. Destructive: [`Graphics::opacity`] reads back the
    /// mutated value, no separate multiplier is stored.
    pub fn set_opacity(&mut self, opacity: u8) {
        self.current_render_options_mut().paint.set_alpha_u8(opacity);
    }

    pub fn opacity(&self) -> u8 {
        self.current_render_options().paint.alpha_u8()
    }

    pub fn set_stroke_join(&mut self, join: StrokeJoin) {
        self.current_render_options_mut().join = join;
    }

    pub fn stroke_join(&self) -> StrokeJoin {
        self.current_render_options().join
    }

    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.current_render_options_mut().cap = cap;
    }

    pub fn stroke_cap(&self) -> StrokeCap {
        self.current_render_options().cap
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Strokes a straight line between two points
    pub fn draw_line(&mut self, from: Point, to: Point, thickness: f32) {
        let mut path = Path::new();
        path.move_to(from.x, from.y);
        path.line_to(to.x, to.y);

        let paint = self.make_paint(PaintStyle::Stroke, Some(thickness));
        self.submit_path(&path, paint.as_ref());
    }

    /// Fills a rectangle with the active paint source
    pub fn fill_rect(&mut self, rect: Rectangle) {
        let mut path = Path::new();
        path.add_rectangle(rect.x(), rect.y(), rect.width(), rect.height());

        let paint = self.make_paint(PaintStyle::Fill, None);
        self.submit_path(&path, paint.as_ref());
    }

    /// Strokes a rectangle outline
    pub fn draw_rect(&mut self, rect: Rectangle, thickness: f32) {
        let mut path = Path::new();
        path.add_rectangle(rect.x(), rect.y(), rect.width(), rect.height());

        let paint = self.make_paint(PaintStyle::Stroke, Some(thickness));
        self.submit_path(&path, paint.as_ref());
    }

    /// Fills a rounded rectangle; corner radii clamp to half the smaller
    /// dimension
    pub fn fill_rounded_rect(&mut self, rect: Rectangle, radius: impl Into<CornerRadius>) {
        let mut path = Path::new();
        path.add_rounded_rectangle(rect.x(), rect.y(), rect.width(), rect.height(), radius);

        let paint = self.make_paint(PaintStyle::Fill, None);
        self.submit_path(&path, paint.as_ref());
    }

    /// Strokes a rounded rectangle outline
    pub fn draw_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: impl Into<CornerRadius>,
        thickness: f32,
    ) {
        let mut path = Path::new();
        path.add_rounded_rectangle(rect.x(), rect.y(), rect.width(), rect.height(), radius);

        let paint = self.make_paint(PaintStyle::Stroke, Some(thickness));
        self.submit_path(&path, paint.as_ref());
    }

    /// Fills the ellipse inscribed in the given rectangle
    pub fn fill_ellipse(&mut self, rect: Rectangle) {
        let mut path = Path::new();
        path.add_ellipse(rect.x(), rect.y(), rect.width(), rect.height());

        let paint = self.make_paint(PaintStyle::Fill, None);
        self.submit_path(&path, paint.as_ref());
    }

    /// Strokes the ellipse inscribed in the given rectangle
    pub fn draw_ellipse(&mut self, rect: Rectangle, thickness: f32) {
        let mut path = Path::new();
        path.add_ellipse(rect.x(), rect.y(), rect.width(), rect.height());

        let paint = self.make_paint(PaintStyle::Stroke, Some(thickness));
        self.submit_path(&path, paint.as_ref());
    }

    /// Fills an arbitrary path with the non-zero fill rule
    pub fn fill_path(&mut self, path: &Path) {
        let paint = self.make_paint(PaintStyle::Fill, None);
        self.submit_path(path, paint.as_ref());
    }

    /// Strokes an arbitrary path outline
    pub fn draw_path(&mut self, path: &Path, thickness: f32) {
        let paint = self.make_paint(PaintStyle::Stroke, Some(thickness));
        self.submit_path(path, paint.as_ref());
    }

    /// Intersects the backend clip with the given path
    pub fn clip_path(&mut self, path: &Path) {
        let render_path = self.factory.make_render_path(path, FillRule::NonZero);
        self.renderer.clip_path(render_path.as_ref());
    }

    /// Applies a transform to the backend's current matrix
    pub fn transform(&mut self, transform: &AffineTransform) {
        self.renderer.transform(transform);
    }

    /// Submits an image draw to the backend
    pub fn draw_image(&mut self, image: &dyn RenderImage, blend_mode: BlendMode, opacity: f32) {
        self.renderer.draw_image(image, blend_mode, opacity);
    }

    // ─────────────────────────────────────────────────────────────────────────

    fn make_paint(&mut self, style: PaintStyle, thickness: Option<f32>) -> Box<dyn RenderPaint> {
        let options = *self.current_render_options();

        let mut paint = self.factory.make_render_paint();
        paint.set_style(style);

        if let Some(thickness) = thickness {
            paint.set_thickness(thickness);
            paint.set_join(options.join);
            paint.set_cap(options.cap);
        }

        match options.paint {
            PaintSource::Color(color) => paint.set_color(color),
            PaintSource::Gradient(gradient) => {
                let shader = make_gradient_shader(self.factory, &gradient);
                paint.set_shader(shader);
            }
        }

        paint
    }

    fn submit_path(&mut self, path: &Path, paint: &dyn RenderPaint) {
        let render_path = self.factory.make_render_path(path, FillRule::NonZero);
        self.renderer.draw_path(render_path.as_ref(), paint);
    }
}

fn make_gradient_shader(
    factory: &mut dyn Factory,
    gradient: &ColorGradient,
) -> Box<dyn RenderShader> {
    let colors = gradient.colors();
    let stops = gradient.stop_offsets();

    match gradient {
        ColorGradient::Linear { start, end, .. } => {
            factory.make_linear_gradient(start.x, start.y, end.x, end.y, &colors, &stops)
        }
        ColorGradient::Radial { center, radius, .. } => {
            factory.make_radial_gradient(center.x, center.y, *radius, &colors, &stops)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scope guard
// ─────────────────────────────────────────────────────────────────────────────

/// Scope guard returned by [`Graphics::save_state`].
///
/// Dereferences to the underlying [`Graphics`], so drawing continues through
/// the guard while it is alive. Going out of scope pops the saved frame;
/// moving the guard hands that obligation to the new owner, and
/// [`SavedState::restore`] pops it eagerly.
#[must_use = "dropping the guard restores the saved state immediately"]
pub struct SavedState<'g, 'a> {
    graphics: Option<&'g mut Graphics<'a>>,
}

impl SavedState<'_, '_> {
    /// Restores the saved state now, consuming the guard
    pub fn restore(self) {}
}

impl<'a> Deref for SavedState<'_, 'a> {
    type Target = Graphics<'a>;

    fn deref(&self) -> &Graphics<'a> {
        self.graphics
            .as_deref()
            .expect("saved state accessed after restore")
    }
}

impl<'a> DerefMut for SavedState<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Graphics<'a> {
        self.graphics
            .as_deref_mut()
            .expect("saved state accessed after restore")
    }
}

impl Drop for SavedState<'_, '_> {
    fn drop(&mut self) {
        if let Some(graphics) = self.graphics.take() {
            graphics.restore_state();
        }
    }
}

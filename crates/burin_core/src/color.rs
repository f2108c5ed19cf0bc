//! Colors and gradients
//!
//! [`Color`] is a plain RGBA value in linear space. [`ColorGradient`] is the
//! two-stop gradient model consumed when materializing paints: linear between
//! two points, or radial from a center. Alpha can be rewritten in place across
//! the whole gradient, which is how the drawing context applies opacity.

use crate::geometry::Point;

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.a = alpha;
    }

    /// Rewrites the alpha channel from an 8-bit opacity value
    pub fn set_alpha_u8(&mut self, alpha: u8) {
        self.a = alpha as f32 / 255.0;
    }

    /// Alpha channel quantized to 8 bits
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gradients
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Two-stop color gradient
///
/// The geometry discriminates the kind: linear gradients run between two
/// points, radial gradients fan out from a center. Both carry exactly a start
/// and a finish stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorGradient {
    /// Linear gradient between two points
    Linear {
        start: Point,
        end: Point,
        from: ColorStop,
        to: ColorStop,
    },
    /// Radial gradient from center outward
    Radial {
        center: Point,
        radius: f32,
        from: ColorStop,
        to: ColorStop,
    },
}

impl ColorGradient {
    /// Linear gradient with stops pinned at 0 and 1
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        ColorGradient::Linear {
            start,
            end,
            from: ColorStop::new(0.0, from),
            to: ColorStop::new(1.0, to),
        }
    }

    /// Linear gradient with explicit stops
    pub fn linear_with_stops(start: Point, end: Point, from: ColorStop, to: ColorStop) -> Self {
        ColorGradient::Linear {
            start,
            end,
            from,
            to,
        }
    }

    /// Radial gradient with stops pinned at 0 and 1
    pub fn radial(center: Point, radius: f32, from: Color, to: Color) -> Self {
        ColorGradient::Radial {
            center,
            radius,
            from: ColorStop::new(0.0, from),
            to: ColorStop::new(1.0, to),
        }
    }

    /// Radial gradient with explicit stops
    pub fn radial_with_stops(center: Point, radius: f32, from: ColorStop, to: ColorStop) -> Self {
        ColorGradient::Radial {
            center,
            radius,
            from,
            to,
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, ColorGradient::Linear { .. })
    }

    pub fn start_color(&self) -> Color {
        match self {
            ColorGradient::Linear { from, .. } | ColorGradient::Radial { from, .. } => from.color,
        }
    }

    pub fn finish_color(&self) -> Color {
        match self {
            ColorGradient::Linear { to, .. } | ColorGradient::Radial { to, .. } => to.color,
        }
    }

    /// Both stop colors, start first
    pub fn colors(&self) -> [Color; 2] {
        [self.start_color(), self.finish_color()]
    }

    /// Both stop offsets, start first
    pub fn stop_offsets(&self) -> [f32; 2] {
        match self {
            ColorGradient::Linear { from, to, .. } | ColorGradient::Radial { from, to, .. } => {
                [from.offset, to.offset]
            }
        }
    }

    /// Rewrites the alpha channel of both stops in place
    pub fn set_alpha(&mut self, alpha: f32) {
        match self {
            ColorGradient::Linear { from, to, .. } | ColorGradient::Radial { from, to, .. } => {
                from.color.set_alpha(alpha);
                to.color.set_alpha(alpha);
            }
        }
    }

    /// Rewrites the alpha channel of both stops from an 8-bit opacity value
    pub fn set_alpha_u8(&mut self, alpha: u8) {
        self.set_alpha(alpha as f32 / 255.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_alpha_u8_round_trip() {
        let mut c = Color::RED;
        c.set_alpha_u8(128);
        assert_eq!(c.alpha_u8(), 128);
        c.set_alpha_u8(0);
        assert_eq!(c.alpha_u8(), 0);
        c.set_alpha_u8(255);
        assert_eq!(c.alpha_u8(), 255);
    }

    #[test]
    fn test_stop_offset_clamped() {
        let stop = ColorStop::new(1.5, Color::WHITE);
        assert_eq!(stop.offset, 1.0);
    }

    #[test]
    fn test_gradient_set_alpha_touches_both_stops() {
        let mut g = ColorGradient::linear(
            Point::ZERO,
            Point::new(100.0, 0.0),
            Color::RED,
            Color::BLUE,
        );
        g.set_alpha_u8(64);
        assert_eq!(g.start_color().alpha_u8(), 64);
        assert_eq!(g.finish_color().alpha_u8(), 64);
    }

    #[test]
    fn test_gradient_accessors() {
        let g = ColorGradient::radial(Point::new(5.0, 5.0), 10.0, Color::WHITE, Color::BLACK);
        assert!(!g.is_linear());
        assert_eq!(g.stop_offsets(), [0.0, 1.0]);
        assert_eq!(g.colors(), [Color::WHITE, Color::BLACK]);
    }
}

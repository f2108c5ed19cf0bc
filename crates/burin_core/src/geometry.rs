//! Core geometry types
//!
//! Plain f32 value types shared by the path model and the drawing context:
//! points, sizes, rectangles, per-corner radii, and 2D affine transforms.
//! Every in-place mutator on [`Rectangle`] has a pure counterpart (`set_x`
//! pairs with `with_x`, `translate` with `translated`, and so on) so callers
//! can choose between chained mutation and value-style updates.

// ─────────────────────────────────────────────────────────────────────────────
// Point
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns a copy with the x coordinate replaced
    pub const fn with_x(self, x: f32) -> Self {
        Self { x, y: self.y }
    }

    /// Returns a copy with the y coordinate replaced
    pub const fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }

    /// Moves the point in place
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Returns the point moved by the given deltas
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Scales both coordinates in place
    pub fn scale(&mut self, factor_x: f32, factor_y: f32) -> &mut Self {
        self.x *= factor_x;
        self.y *= factor_y;
        self
    }

    /// Returns the point with both coordinates scaled
    pub fn scaled(self, factor_x: f32, factor_y: f32) -> Self {
        Self::new(self.x * factor_x, self.y * factor_y)
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Size
// ─────────────────────────────────────────────────────────────────────────────

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// True when the width collapses to zero while the height does not
    pub fn is_horizontally_empty(&self) -> bool {
        self.width == 0.0 && self.height != 0.0
    }

    /// True when the height collapses to zero while the width does not
    pub fn is_vertically_empty(&self) -> bool {
        self.height == 0.0 && self.width != 0.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub const fn with_width(self, width: f32) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    pub const fn with_height(self, height: f32) -> Self {
        Self {
            width: self.width,
            height,
        }
    }

    /// Returns the size with both dimensions scaled
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rectangle
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle defined by its top-left corner and size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub origin: Point,
    pub size: Size,
}

impl Rectangle {
    pub const ZERO: Rectangle = Rectangle {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Builds the rectangle spanned by two arbitrary corner points
    pub fn from_points(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        Self {
            origin: Point::new(min_x, min_y),
            size: Size::new(p1.x.max(p2.x) - min_x, p1.y.max(p2.y) - min_y),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn position(&self) -> Point {
        self.origin
    }

    pub fn dimensions(&self) -> Size {
        self.size
    }

    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.origin.x = x;
        self
    }

    pub fn with_x(self, x: f32) -> Self {
        Self {
            origin: self.origin.with_x(x),
            size: self.size,
        }
    }

    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.origin.y = y;
        self
    }

    pub fn with_y(self, y: f32) -> Self {
        Self {
            origin: self.origin.with_y(y),
            size: self.size,
        }
    }

    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.size.width = width;
        self
    }

    pub fn with_width(self, width: f32) -> Self {
        Self {
            origin: self.origin,
            size: self.size.with_width(width),
        }
    }

    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.size.height = height;
        self
    }

    pub fn with_height(self, height: f32) -> Self {
        Self {
            origin: self.origin,
            size: self.size.with_height(height),
        }
    }

    pub fn set_position(&mut self, position: Point) -> &mut Self {
        self.origin = position;
        self
    }

    pub fn with_position(self, position: Point) -> Self {
        Self {
            origin: position,
            size: self.size,
        }
    }

    /// Returns the rectangle moved to the origin, keeping its size
    pub fn with_zero_position(self) -> Self {
        Self {
            origin: Point::ZERO,
            size: self.size,
        }
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.size = size;
        self
    }

    pub fn with_size(self, size: Size) -> Self {
        Self {
            origin: self.origin,
            size,
        }
    }

    pub fn with_zero_size(self) -> Self {
        Self {
            origin: self.origin,
            size: Size::ZERO,
        }
    }

    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.origin = Point::new(x, y);
        self.size = Size::new(width, height);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────

    pub fn top_left(&self) -> Point {
        self.origin
    }

    pub fn top_right(&self) -> Point {
        self.origin.translated(self.size.width, 0.0)
    }

    pub fn bottom_left(&self) -> Point {
        self.origin.translated(0.0, self.size.height)
    }

    pub fn bottom_right(&self) -> Point {
        self.origin.translated(self.size.width, self.size.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Repositions the rectangle so its center lands on the given point
    pub fn set_center(&mut self, center: Point) -> &mut Self {
        self.origin = Point::new(
            center.x - self.size.width / 2.0,
            center.y - self.size.height / 2.0,
        );
        self
    }

    pub fn with_center(self, center: Point) -> Self {
        let mut result = self;
        result.set_center(center);
        result
    }

    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_empty(&self) -> bool {
        self.size.is_zero()
    }

    /// A rectangle with zero size degenerates to a point
    pub fn is_point(&self) -> bool {
        self.size.is_zero()
    }

    pub fn is_line(&self) -> bool {
        self.is_vertical_line() || self.is_horizontal_line()
    }

    pub fn is_vertical_line(&self) -> bool {
        self.size.is_horizontally_empty()
    }

    pub fn is_horizontal_line(&self) -> bool {
        self.size.is_vertically_empty()
    }

    pub fn area(&self) -> f32 {
        self.size.area()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x <= self.origin.x + self.size.width
            && point.y <= self.origin.y + self.size.height
    }

    // ─────────────────────────────────────────────────────────────────────────

    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.origin.translate(dx, dy);
        self
    }

    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin.translated(dx, dy),
            size: self.size,
        }
    }

    /// Scales position and size in place by per-axis factors
    pub fn scale(&mut self, factor_x: f32, factor_y: f32) -> &mut Self {
        self.origin.scale(factor_x, factor_y);
        self.size.width *= factor_x;
        self.size.height *= factor_y;
        self
    }

    pub fn scaled(self, factor_x: f32, factor_y: f32) -> Self {
        let mut result = self;
        result.scale(factor_x, factor_y);
        result
    }

    /// Shrinks the rectangle by the given amount on every side, clamping the
    /// size at zero
    pub fn reduce(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.origin.translate(dx, dy);
        self.size.width = (self.size.width - 2.0 * dx).max(0.0);
        self.size.height = (self.size.height - 2.0 * dy).max(0.0);
        self
    }

    pub fn reduced(self, dx: f32, dy: f32) -> Self {
        let mut result = self;
        result.reduce(dx, dy);
        result
    }

    /// Grows the rectangle by the given amount on every side
    pub fn enlarge(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.origin.translate(-dx, -dy);
        self.size.width = (self.size.width + 2.0 * dx).max(0.0);
        self.size.height = (self.size.height + 2.0 * dy).max(0.0);
        self
    }

    pub fn enlarged(self, dx: f32, dy: f32) -> Self {
        let mut result = self;
        result.enlarge(dx, dy);
        result
    }

    // ─────────────────────────────────────────────────────────────────────────

    /// Carves the given height off the top, returning the removed strip
    pub fn remove_from_top(&mut self, delta: f32) -> Rectangle {
        let removed = Rectangle {
            origin: self.origin,
            size: self.size.with_height(delta.max(0.0)),
        };
        self.origin.y += delta;
        self.size.height = (self.size.height - delta).max(0.0);
        removed
    }

    /// Carves the given width off the left, returning the removed strip
    pub fn remove_from_left(&mut self, delta: f32) -> Rectangle {
        let removed = Rectangle {
            origin: self.origin,
            size: self.size.with_width(delta.max(0.0)),
        };
        self.origin.x += delta;
        self.size.width = (self.size.width - delta).max(0.0);
        removed
    }

    /// Carves the given height off the bottom, returning the removed strip
    pub fn remove_from_bottom(&mut self, delta: f32) -> Rectangle {
        let removed = Rectangle {
            origin: self
                .origin
                .with_y((self.origin.y + self.size.height - delta).max(0.0)),
            size: self.size.with_height(delta.max(0.0)),
        };
        self.size.height = (self.size.height - delta).max(0.0);
        removed
    }

    /// Carves the given width off the right, returning the removed strip
    pub fn remove_from_right(&mut self, delta: f32) -> Rectangle {
        let removed = Rectangle {
            origin: self
                .origin
                .with_x((self.origin.x + self.size.width - delta).max(0.0)),
            size: self.size.with_width(delta.max(0.0)),
        };
        self.size.width = (self.size.width - delta).max(0.0);
        removed
    }

    // ─────────────────────────────────────────────────────────────────────────

    pub fn intersects(&self, other: &Rectangle) -> bool {
        let bottom_right = self.bottom_right();
        let other_bottom_right = other.bottom_right();

        !(self.x() > other_bottom_right.x
            || bottom_right.x < other.x()
            || self.y() > other_bottom_right.y
            || bottom_right.y < other.y())
    }

    /// Overlapping region of two rectangles, or [`Rectangle::ZERO`] when they
    /// are disjoint
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x().max(other.x());
        let x2 = (self.x() + self.width()).min(other.x() + other.width());

        if x1 < x2 {
            let y1 = self.y().max(other.y());
            let y2 = (self.y() + self.height()).min(other.y() + other.height());

            if y1 < y2 {
                return Rectangle::new(x1, y1, x2 - x1, y2 - y1);
            }
        }

        Rectangle::ZERO
    }

    /// Smallest rectangle containing both this and the other rectangle
    pub fn union_with(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x().min(other.x());
        let y1 = self.y().min(other.y());
        let x2 = (self.x() + self.width()).max(other.x() + other.width());
        let y2 = (self.y() + self.height()).max(other.y() + other.height());
        Rectangle::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Largest square that fits inside this rectangle, centered on the longer
    /// axis
    pub fn largest_fitting_square(&self) -> Rectangle {
        if self.width() == self.height() {
            return *self;
        }

        if self.width() > self.height() {
            let inset = (self.width() - self.height()) / 2.0;
            Rectangle::new(self.x() + inset, self.y(), self.height(), self.height())
        } else {
            let inset = (self.height() - self.width()) / 2.0;
            Rectangle::new(self.x(), self.y() + inset, self.width(), self.width())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────

    /// Transforms the two corners and re-boxes them axis-aligned, in place
    pub fn transform(&mut self, t: &AffineTransform) -> &mut Self {
        let p1 = t.transform_point(self.top_left());
        let p2 = t.transform_point(self.bottom_right());
        *self = Rectangle::from_points(p1, p2);
        self
    }

    pub fn transformed(self, t: &AffineTransform) -> Self {
        let mut result = self;
        result.transform(t);
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Corner radii
// ─────────────────────────────────────────────────────────────────────────────

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Per-corner radii, clockwise from top-left
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Affine transform
// ─────────────────────────────────────────────────────────────────────────────

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Rotation around the origin, angle in radians
    pub fn rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Rotation around an arbitrary center point, angle in radians
    pub fn rotation_around(angle: f32, center_x: f32, center_y: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let tx = center_x - center_x * c + center_y * s;
        let ty = center_y - center_x * s - center_y * c;
        Self {
            elements: [c, s, -s, c, tx, ty],
        }
    }

    /// Exact comparison against the identity matrix
    pub fn is_identity(&self) -> bool {
        self.elements == Self::IDENTITY.elements
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(
            a * point.x + c * point.y + tx,
            b * point.x + d * point.y + ty,
        )
    }

    /// Concatenates this transform with another (self * other).
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &AffineTransform) -> AffineTransform {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        AffineTransform {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_accessors() {
        let r = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.x(), 10.0);
        assert_eq!(r.y(), 20.0);
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 40.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(r.bottom_right(), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_mutating_and_pure_pairs_agree() {
        let r = Rectangle::new(0.0, 0.0, 100.0, 50.0);

        let mut mutated = r;
        mutated.translate(5.0, 7.0);
        assert_eq!(mutated, r.translated(5.0, 7.0));

        let mut mutated = r;
        mutated.reduce(10.0, 5.0);
        assert_eq!(mutated, r.reduced(10.0, 5.0));
        assert_eq!(mutated, Rectangle::new(10.0, 5.0, 80.0, 40.0));

        let mut mutated = r;
        mutated.enlarge(1.0, 2.0);
        assert_eq!(mutated, r.enlarged(1.0, 2.0));

        let mut mutated = r;
        mutated.scale(2.0, 3.0);
        assert_eq!(mutated, r.scaled(2.0, 3.0));
        assert_eq!(mutated, Rectangle::new(0.0, 0.0, 200.0, 150.0));
    }

    #[test]
    fn test_reduce_clamps_at_zero() {
        let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        r.reduce(20.0, 20.0);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }

    #[test]
    fn test_remove_from_sides() {
        let mut r = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let top = r.remove_from_top(20.0);
        assert_eq!(top, Rectangle::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(r, Rectangle::new(0.0, 20.0, 100.0, 80.0));

        let left = r.remove_from_left(30.0);
        assert_eq!(left, Rectangle::new(0.0, 20.0, 30.0, 80.0));
        assert_eq!(r, Rectangle::new(30.0, 20.0, 70.0, 80.0));
    }

    #[test]
    fn test_intersection_and_union() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Rectangle::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a.union_with(&b), Rectangle::new(0.0, 0.0, 15.0, 15.0));

        let disjoint = Rectangle::new(100.0, 100.0, 5.0, 5.0);
        assert!(!a.intersects(&disjoint));
        assert_eq!(a.intersection(&disjoint), Rectangle::ZERO);
    }

    #[test]
    fn test_largest_fitting_square() {
        let wide = Rectangle::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(
            wide.largest_fitting_square(),
            Rectangle::new(30.0, 0.0, 40.0, 40.0)
        );

        let square = Rectangle::new(1.0, 2.0, 5.0, 5.0);
        assert_eq!(square.largest_fitting_square(), square);
    }

    #[test]
    fn test_transform_reboxes_corners() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 20.0);
        let flipped = r.transformed(&AffineTransform::scale(-1.0, 1.0));
        assert_eq!(flipped, Rectangle::new(-10.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_affine_concatenation_order() {
        let t = AffineTransform::translation(10.0, 0.0);
        let s = AffineTransform::scale(2.0, 2.0);

        // then() applies the argument first
        let scale_then_translate = t.then(&s);
        assert_eq!(
            scale_then_translate.transform_point(Point::new(1.0, 1.0)),
            Point::new(12.0, 2.0)
        );

        let translate_then_scale = s.then(&t);
        assert_eq!(
            translate_then_scale.transform_point(Point::new(1.0, 1.0)),
            Point::new(22.0, 2.0)
        );
    }

    #[test]
    fn test_rotation_around_center_fixes_center() {
        let t = AffineTransform::rotation_around(std::f32::consts::FRAC_PI_2, 5.0, 5.0);
        let moved = t.transform_point(Point::new(5.0, 5.0));
        assert!((moved.x - 5.0).abs() < 1e-5);
        assert!((moved.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_corner_radius_from_f32_is_uniform() {
        let r: CornerRadius = 8.0.into();
        assert!(r.is_uniform());
        assert_eq!(r.top_left, 8.0);
    }
}

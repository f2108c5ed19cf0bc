//! Device-independent vector paths
//!
//! A [`Path`] is an ordered run of [`Segment`]s grouped into subpaths, each
//! subpath opened by a `MoveTo`. The path keeps an incrementally updated
//! bounding box fed by segment anchor points (curve control points are not
//! included, so the box is a cheap over-tight approximation, not a guarantee).
//!
//! Geometric builders (`add_rectangle`, `add_rounded_rectangle`,
//! `add_ellipse`, `add_centered_arc`, ...) compose the primitive mutators, so
//! everything downstream (bounding box, subpath tracking) stays consistent.
//! SVG path-data parsing lives in [`crate::svg`] and drives the same mutators.

use crate::geometry::{AffineTransform, CornerRadius, Point, Rectangle};
use crate::svg::{self, PathDataError};

/// Cubic Bezier approximation constant for a quarter circle
///
/// Maximum radial deviation of the 4-segment circle approximation is about
/// 0.027%, which is below a device pixel at any realistic raster size.
pub(crate) const CIRCLE_KAPPA: f32 = 0.5522847498;

// ─────────────────────────────────────────────────────────────────────────────
// Segments
// ─────────────────────────────────────────────────────────────────────────────

/// One drawing segment of a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Opens a new subpath at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bezier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl Segment {
    /// Terminal anchor point of the segment
    pub fn anchor(&self) -> Point {
        match self {
            Segment::MoveTo(p) | Segment::LineTo(p) => *p,
            Segment::QuadTo { end, .. } | Segment::CubicTo { end, .. } => *end,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered sequence of drawing segments with value semantics
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    last_subpath_index: Option<usize>,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Creates an empty path
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
            last_subpath_index: None,
        }
    }

    /// Creates a path with an initial subpath opened at the given point
    pub fn starting_at(x: f32, y: f32) -> Self {
        let mut path = Self::new();
        path.move_to(x, y);
        path
    }

    /// Parses SVG path data into a new path, reporting unknown or truncated
    /// commands as a structured error.
    ///
    /// Unlike [`Path::parse_path_data`], which swallows everything, this
    /// constructor fails on the first command letter it does not understand or
    /// on a coordinate group cut off mid-way. Segments parsed before the error
    /// are discarded.
    pub fn from_svg_data(data: &str) -> Result<Path, PathDataError> {
        svg::parse_path_data_strict(data)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn reserve(&mut self, additional: usize) {
        self.segments.reserve(additional);
    }

    /// Removes every segment and resets the bounding box
    pub fn clear(&mut self) {
        self.segments.clear();
        self.last_subpath_index = None;
        self.reset_bounding_box();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Primitive mutators
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a new subpath at the given point.
    ///
    /// A `MoveTo` issued directly after another `MoveTo` overwrites the prior
    /// point instead of opening an empty subpath.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let point = Point::new(x, y);

        if let Some(Segment::MoveTo(last)) = self.segments.last_mut() {
            *last = point;
            self.update_bounding_box(point);
            return self;
        }

        self.last_subpath_index = Some(self.segments.len());
        self.segments.push(Segment::MoveTo(point));
        self.update_bounding_box(point);
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        let point = Point::new(x, y);
        self.segments.push(Segment::LineTo(point));
        self.update_bounding_box(point);
        self
    }

    /// Appends a quadratic Bezier curve; control point first, anchor last
    pub fn quad_to(&mut self, control_x: f32, control_y: f32, x: f32, y: f32) -> &mut Self {
        let end = Point::new(x, y);
        self.segments.push(Segment::QuadTo {
            control: Point::new(control_x, control_y),
            end,
        });
        self.update_bounding_box(end);
        self
    }

    /// Appends a cubic Bezier curve; control points first, anchor last
    pub fn cubic_to(
        &mut self,
        control1_x: f32,
        control1_y: f32,
        control2_x: f32,
        control2_y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        let end = Point::new(x, y);
        self.segments.push(Segment::CubicTo {
            control1: Point::new(control1_x, control1_y),
            control2: Point::new(control2_x, control2_y),
            end,
        });
        self.update_bounding_box(end);
        self
    }

    /// Closes the current subpath with a line back to its starting point.
    ///
    /// No-op on an empty path. Closing twice appends two coincident lines;
    /// the duplicates are accepted, not deduplicated.
    pub fn close(&mut self) -> &mut Self {
        if self.segments.is_empty() {
            return self;
        }

        if let Some(index) = self.last_subpath_index {
            if let Some(segment) = self.segments.get(index) {
                let start = segment.anchor();
                self.line_to(start.x, start.y);
            }
        }

        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometric builders
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a standalone line as its own subpath
    pub fn add_line(&mut self, from: Point, to: Point) -> &mut Self {
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self
    }

    /// Appends a closed axis-aligned rectangle (one `MoveTo`, four `LineTo`s)
    pub fn add_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.reserve(5);
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.line_to(x, y);
        self
    }

    /// Appends a closed rounded rectangle.
    ///
    /// Each corner radius is independently clamped to half the smaller
    /// dimension, so opposing corners can never overlap. Corners are cubic
    /// Bezier quarter-circle approximations.
    pub fn add_rounded_rectangle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: impl Into<CornerRadius>,
    ) -> &mut Self {
        let radius = radius.into();
        let max_radius = (width.min(height) / 2.0).max(0.0);
        let tl = radius.top_left.min(max_radius);
        let tr = radius.top_right.min(max_radius);
        let br = radius.bottom_right.min(max_radius);
        let bl = radius.bottom_left.min(max_radius);

        let k = CIRCLE_KAPPA;

        self.reserve(10);
        self.move_to(x + tl, y);

        self.line_to(x + width - tr, y);
        if tr > 0.0 {
            self.cubic_to(
                x + width - tr * (1.0 - k),
                y,
                x + width,
                y + tr * (1.0 - k),
                x + width,
                y + tr,
            );
        }

        self.line_to(x + width, y + height - br);
        if br > 0.0 {
            self.cubic_to(
                x + width,
                y + height - br * (1.0 - k),
                x + width - br * (1.0 - k),
                y + height,
                x + width - br,
                y + height,
            );
        }

        self.line_to(x + bl, y + height);
        if bl > 0.0 {
            self.cubic_to(
                x + bl * (1.0 - k),
                y + height,
                x,
                y + height - bl * (1.0 - k),
                x,
                y + height - bl,
            );
        }

        self.line_to(x, y + tl);
        if tl > 0.0 {
            self.cubic_to(x, y + tl * (1.0 - k), x + tl * (1.0 - k), y, x + tl, y);
        }

        self.close()
    }

    /// Appends a closed ellipse inscribed in the given box
    /// (one `MoveTo`, four `CubicTo`s, one closing `LineTo`)
    pub fn add_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        let rx = width * 0.5;
        let ry = height * 0.5;
        self.add_centered_ellipse(x + rx, y + ry, rx, ry)
    }

    /// Appends a closed ellipse around a center point
    pub fn add_centered_ellipse(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius_x: f32,
        radius_y: f32,
    ) -> &mut Self {
        let cx = center_x;
        let cy = center_y;
        let rx = radius_x;
        let ry = radius_y;
        let dx = rx * CIRCLE_KAPPA;
        let dy = ry * CIRCLE_KAPPA;

        self.reserve(6);
        self.move_to(cx + rx, cy);
        self.cubic_to(cx + rx, cy - dy, cx + dx, cy - ry, cx, cy - ry);
        self.cubic_to(cx - dx, cy - ry, cx - rx, cy - dy, cx - rx, cy);
        self.cubic_to(cx - rx, cy + dy, cx - dx, cy + ry, cx, cy + ry);
        self.cubic_to(cx + dx, cy + ry, cx + rx, cy + dy, cx + rx, cy);
        self.close()
    }

    /// Appends an elliptical arc inscribed in the given box
    pub fn add_arc(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        from_radians: f32,
        to_radians: f32,
        start_as_new_subpath: bool,
    ) -> &mut Self {
        let radius_x = width * 0.5;
        let radius_y = height * 0.5;
        self.add_centered_arc(
            x + radius_x,
            y + radius_y,
            radius_x,
            radius_y,
            0.0,
            from_radians,
            to_radians,
            start_as_new_subpath,
        )
    }

    /// Appends an elliptical arc around a center point as a polyline.
    ///
    /// The angular span is subdivided into `clamp(span / 0.1, 2, 54)` straight
    /// segments, each rotated by `rotation` about the center. The 54-segment
    /// cap bounds the cost of large spans.
    #[allow(clippy::too_many_arguments)]
    pub fn add_centered_arc(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        from_radians: f32,
        to_radians: f32,
        start_as_new_subpath: bool,
    ) -> &mut Self {
        let segments = (((to_radians - from_radians) / 0.1) as i32).clamp(2, 54);
        let delta = (to_radians - from_radians) / segments as f32;
        let (sin_theta, cos_theta) = rotation.sin_cos();

        let x = from_radians.cos() * radius_x;
        let y = from_radians.sin() * radius_y;
        let rotated_x = x * cos_theta - y * sin_theta + center_x;
        let rotated_y = x * sin_theta + y * cos_theta + center_y;

        if start_as_new_subpath {
            self.move_to(rotated_x, rotated_y);
        } else {
            self.line_to(rotated_x, rotated_y);
        }

        for i in 1..=segments {
            let angle = from_radians + i as f32 * delta;
            let x = angle.cos() * radius_x;
            let y = angle.sin() * radius_y;
            self.line_to(
                x * cos_theta - y * sin_theta + center_x,
                x * sin_theta + y * cos_theta + center_y,
            );
        }

        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Composition and transformation
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a deep copy of another path's segments.
    ///
    /// The bounding box becomes the union of both boxes; segments are copied
    /// verbatim without re-running the `MoveTo` merge rule.
    pub fn append_path(&mut self, other: &Path) -> &mut Self {
        let offset = self.segments.len();
        self.reserve(other.len());
        self.segments.extend_from_slice(&other.segments);

        if let Some(index) = other.last_subpath_index {
            self.last_subpath_index = Some(offset + index);
        }

        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
        self
    }

    /// Appends another path with a transform applied to every point.
    ///
    /// Segments are re-inserted through the normal mutators, so the `MoveTo`
    /// merge rule applies and the bounding box is rebuilt incrementally from
    /// the transformed anchors.
    pub fn append_path_transformed(&mut self, other: &Path, t: &AffineTransform) -> &mut Self {
        self.reserve(other.len());

        for segment in &other.segments {
            match segment {
                Segment::MoveTo(p) => {
                    let p = t.transform_point(*p);
                    self.move_to(p.x, p.y);
                }
                Segment::LineTo(p) => {
                    let p = t.transform_point(*p);
                    self.line_to(p.x, p.y);
                }
                Segment::QuadTo { control, end } => {
                    let control = t.transform_point(*control);
                    let end = t.transform_point(*end);
                    self.quad_to(control.x, control.y, end.x, end.y);
                }
                Segment::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let control1 = t.transform_point(*control1);
                    let control2 = t.transform_point(*control2);
                    let end = t.transform_point(*end);
                    self.cubic_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y);
                }
            }
        }

        self
    }

    /// Transforms every anchor and control point in place.
    ///
    /// The identity transform is short-circuited before touching any segment.
    /// The bounding box is rebuilt from the transformed anchors.
    pub fn transform(&mut self, t: &AffineTransform) -> &mut Self {
        if t.is_identity() {
            return self;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for segment in &mut self.segments {
            match segment {
                Segment::MoveTo(p) | Segment::LineTo(p) => {
                    *p = t.transform_point(*p);
                }
                Segment::QuadTo { control, end } => {
                    *control = t.transform_point(*control);
                    *end = t.transform_point(*end);
                }
                Segment::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    *control1 = t.transform_point(*control1);
                    *control2 = t.transform_point(*control2);
                    *end = t.transform_point(*end);
                }
            }

            let anchor = segment.anchor();
            min_x = min_x.min(anchor.x);
            min_y = min_y.min(anchor.y);
            max_x = max_x.max(anchor.x);
            max_y = max_y.max(anchor.y);
        }

        self.min_x = min_x;
        self.min_y = min_y;
        self.max_x = max_x;
        self.max_y = max_y;
        self
    }

    /// Pure counterpart of [`Path::transform`]
    pub fn transformed(&self, t: &AffineTransform) -> Path {
        let mut result = self.clone();
        result.transform(t);
        result
    }

    /// Axis-aligned bounding box of every anchor point appended so far.
    ///
    /// Curve control points are not tracked, so a curve may overshoot the box.
    pub fn bounding_box(&self) -> Rectangle {
        if self.segments.is_empty() {
            return Rectangle::ZERO;
        }

        Rectangle::new(
            self.min_x,
            self.min_y,
            self.max_x - self.min_x,
            self.max_y - self.min_y,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // SVG path data
    // ─────────────────────────────────────────────────────────────────────────

    /// Interprets SVG path data, appending to this path.
    ///
    /// Malformed tokens stop the current command's repetition loop and unknown
    /// command letters are skipped; whatever parsed up to that point stays in
    /// the path. Returns `true` when the whole input was consumed cleanly.
    pub fn parse_path_data(&mut self, data: &str) -> bool {
        svg::parse_path_data(self, data)
    }

    // ─────────────────────────────────────────────────────────────────────────

    fn update_bounding_box(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    fn reset_bounding_box(&mut self) {
        self.min_x = f32::INFINITY;
        self.min_y = f32::INFINITY;
        self.max_x = f32::NEG_INFINITY;
        self.max_y = f32::NEG_INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_round_trip() {
        let mut path = Path::new();
        path.add_rectangle(1.0, 2.0, 30.0, 40.0);

        assert_eq!(path.len(), 5);
        assert!(matches!(path.segments()[0], Segment::MoveTo(_)));
        assert!(path.segments()[1..]
            .iter()
            .all(|s| matches!(s, Segment::LineTo(_))));
        assert_eq!(path.bounding_box(), Rectangle::new(1.0, 2.0, 30.0, 40.0));
    }

    #[test]
    fn test_ellipse_segment_count_and_bounds() {
        let mut path = Path::new();
        path.add_ellipse(0.0, 0.0, 100.0, 100.0);

        assert_eq!(path.len(), 6);
        assert!(matches!(path.segments()[0], Segment::MoveTo(_)));
        assert!(path.segments()[1..5]
            .iter()
            .all(|s| matches!(s, Segment::CubicTo { .. })));
        assert!(matches!(path.segments()[5], Segment::LineTo(_)));
        assert_eq!(path.bounding_box(), Rectangle::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_bounding_box_contains_every_anchor() {
        let mut path = Path::new();
        path.move_to(3.0, -2.0);
        path.line_to(10.0, 4.0);
        path.quad_to(50.0, 50.0, -5.0, 8.0);
        path.cubic_to(-100.0, 0.0, 100.0, 0.0, 7.0, 30.0);

        let bounds = path.bounding_box();
        for segment in path.segments() {
            assert!(bounds.contains(segment.anchor()), "{segment:?} outside");
        }
    }

    #[test]
    fn test_move_to_merges_consecutive_moves() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.move_to(5.0, 5.0);
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments()[0], Segment::MoveTo(Point::new(5.0, 5.0)));

        // the merged MoveTo still closes back to the overwritten point
        path.line_to(10.0, 0.0);
        path.close();
        assert_eq!(
            path.segments().last(),
            Some(&Segment::LineTo(Point::new(5.0, 5.0)))
        );
    }

    #[test]
    fn test_starting_at_and_add_line() {
        let path = Path::starting_at(2.0, 3.0);
        assert_eq!(path.segments(), &[Segment::MoveTo(Point::new(2.0, 3.0))]);

        let mut path = Path::new();
        path.add_line(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        assert_eq!(path.len(), 2);
        assert_eq!(path.bounding_box(), Rectangle::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn test_close_on_empty_path_is_noop() {
        let mut path = Path::new();
        path.close();
        assert!(path.is_empty());
    }

    #[test]
    fn test_double_close_appends_coincident_lines() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.close();
        path.close();

        assert_eq!(path.len(), 4);
        assert_eq!(
            path.segments()[2],
            Segment::LineTo(Point::new(0.0, 0.0))
        );
        assert_eq!(path.segments()[2], path.segments()[3]);
    }

    #[test]
    fn test_close_targets_most_recent_subpath() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        path.move_to(10.0, 10.0);
        path.line_to(20.0, 10.0);
        path.close();

        assert_eq!(
            path.segments().last(),
            Some(&Segment::LineTo(Point::new(10.0, 10.0)))
        );
    }

    #[test]
    fn test_rounded_rectangle_clamps_radii() {
        let mut path = Path::new();
        path.add_rounded_rectangle(0.0, 0.0, 10.0, 20.0, 100.0);

        let bounds = Rectangle::new(0.0, 0.0, 10.0, 20.0);
        for segment in path.segments() {
            assert!(bounds.contains(segment.anchor()));
            if let Segment::CubicTo {
                control1, control2, ..
            } = segment
            {
                assert!(bounds.contains(*control1), "{control1:?} outside");
                assert!(bounds.contains(*control2), "{control2:?} outside");
            }
        }

        // clamped to half the smaller dimension: the top edge starts at x = 5
        assert_eq!(path.segments()[0], Segment::MoveTo(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_rounded_rectangle_zero_radius_is_plain_rect() {
        let mut path = Path::new();
        path.add_rounded_rectangle(0.0, 0.0, 10.0, 10.0, 0.0);

        assert!(path
            .segments()
            .iter()
            .all(|s| !matches!(s, Segment::CubicTo { .. })));
        assert_eq!(path.bounding_box(), Rectangle::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_centered_arc_segment_clamp() {
        // tiny span still produces the 2-segment floor
        let mut path = Path::new();
        path.add_centered_arc(0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 0.01, true);
        assert_eq!(path.len(), 3);

        // a full sweep hits the 54-segment ceiling
        let mut path = Path::new();
        path.add_centered_arc(0.0, 0.0, 10.0, 10.0, 0.0, 0.0, std::f32::consts::TAU, true);
        assert_eq!(path.len(), 55);
    }

    #[test]
    fn test_centered_arc_continues_subpath() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.add_centered_arc(0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 1.0, false);
        assert!(matches!(path.segments()[1], Segment::LineTo(_)));
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let mut path = Path::new();
        path.add_rounded_rectangle(5.0, 5.0, 40.0, 30.0, 4.0);
        let before = path.clone();

        path.transform(&AffineTransform::IDENTITY);
        assert_eq!(path, before);
        assert_eq!(path.transformed(&AffineTransform::IDENTITY), before);
    }

    #[test]
    fn test_transform_rebuilds_bounding_box() {
        let mut path = Path::new();
        path.add_rectangle(0.0, 0.0, 10.0, 10.0);
        path.transform(&AffineTransform::scale(3.0, 2.0));

        assert_eq!(path.bounding_box(), Rectangle::new(0.0, 0.0, 30.0, 20.0));
    }

    #[test]
    fn test_append_path_unions_bounding_boxes() {
        let mut a = Path::new();
        a.add_rectangle(0.0, 0.0, 10.0, 10.0);
        let mut b = Path::new();
        b.add_rectangle(20.0, 20.0, 10.0, 10.0);

        a.append_path(&b);
        assert_eq!(a.len(), 10);
        assert_eq!(a.bounding_box(), Rectangle::new(0.0, 0.0, 30.0, 30.0));

        // close() now targets the appended subpath
        a.close();
        assert_eq!(
            a.segments().last(),
            Some(&Segment::LineTo(Point::new(20.0, 20.0)))
        );
    }

    #[test]
    fn test_append_path_transformed_recomputes_box() {
        let mut a = Path::new();
        a.move_to(0.0, 0.0);
        a.line_to(1.0, 1.0);

        let mut b = Path::new();
        b.move_to(2.0, 2.0);
        b.line_to(3.0, 3.0);

        a.append_path_transformed(&b, &AffineTransform::translation(10.0, 0.0));
        assert_eq!(a.bounding_box(), Rectangle::new(0.0, 0.0, 13.0, 3.0));
        assert_eq!(
            a.segments().last(),
            Some(&Segment::LineTo(Point::new(13.0, 3.0)))
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut path = Path::new();
        path.add_ellipse(0.0, 0.0, 10.0, 10.0);
        path.clear();

        assert!(path.is_empty());
        assert_eq!(path.bounding_box(), Rectangle::ZERO);

        // close after clear must not resurrect the old subpath
        path.line_to(1.0, 1.0);
        path.close();
        assert_eq!(path.len(), 1);
    }
}

//! SVG path-data mini-language
//!
//! Single-pass interpreter for the `d` attribute grammar: a sequence of
//! command letters (`M m L l H h V v Q q T t C c S s A a Z z`), each followed
//! by zero or more coordinate groups. Case selects absolute vs. relative
//! addressing, and every command except `Z` implicitly repeats while more
//! coordinate groups follow.
//!
//! The scanner is deliberately permissive: numbers are runs of digits with an
//! optional leading `-` and at most one `.`, adjacent numbers need no
//! separator (`"1-1"`, `"0.5.5"`), and malformed tokens simply end the
//! current command's repetition loop. The lenient entry point keeps whatever
//! parsed and reports completeness as a plain flag; the strict entry point
//! promotes unknown commands and truncated coordinate groups to
//! [`PathDataError`].

use crate::geometry::Point;
use crate::path::Path;
use thiserror::Error;

/// Structured diagnostics for the strict parsing entry point
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathDataError {
    /// A byte that is not a recognized command letter where one was expected
    #[error("unknown path command '{command}' at byte {offset}")]
    UnknownCommand { command: char, offset: usize },

    /// A coordinate group that started but was cut off mid-way
    #[error("incomplete coordinates for '{command}' command at byte {offset}")]
    IncompleteCoordinates { command: char, offset: usize },
}

/// Lenient interpretation: appends to `path`, swallows everything, returns
/// `true` when the input was consumed without skipped or truncated commands.
pub(crate) fn parse_path_data(path: &mut Path, data: &str) -> bool {
    let mut parser = PathDataParser::new(data);
    parser.run(path, false).unwrap_or(false)
}

/// Strict interpretation into a fresh path
pub(crate) fn parse_path_data_strict(data: &str) -> Result<Path, PathDataError> {
    let mut path = Path::new();
    let mut parser = PathDataParser::new(data);
    parser.run(&mut path, true)?;
    Ok(path)
}

fn is_command_letter(byte: u8) -> bool {
    matches!(
        byte,
        b'M' | b'm'
            | b'L'
            | b'l'
            | b'H'
            | b'h'
            | b'V'
            | b'v'
            | b'Q'
            | b'q'
            | b'T'
            | b't'
            | b'C'
            | b'c'
            | b'S'
            | b's'
            | b'A'
            | b'a'
            | b'Z'
            | b'z'
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

/// Interpreter state threaded through the command handlers
struct PathDataParser<'a> {
    bytes: &'a [u8],
    pos: usize,
    current: Point,
    subpath_start: Point,
    /// Second control point of the previous C/S command, for S reflection
    last_cubic_control: Option<Point>,
    /// Control point of the previous Q/T command, for T reflection
    last_quad_control: Option<Point>,
    /// Byte offset of the first truncated coordinate group, if any
    incomplete: Option<usize>,
    clean: bool,
}

impl<'a> PathDataParser<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
            current: Point::ZERO,
            subpath_start: Point::ZERO,
            last_cubic_control: None,
            last_quad_control: None,
            incomplete: None,
            clean: true,
        }
    }

    fn run(&mut self, path: &mut Path, strict: bool) -> Result<bool, PathDataError> {
        while !self.at_end() {
            let offset = self.pos;
            let command = self.bytes[self.pos];
            self.pos += 1;
            self.skip_whitespace();

            match command {
                b'M' | b'm' => {
                    self.handle_move_to(path, command == b'm');
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                b'L' | b'l' => {
                    self.handle_line_to(path, command == b'l');
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                b'H' | b'h' => {
                    self.handle_horizontal_line_to(path, command == b'h');
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                b'V' | b'v' => {
                    self.handle_vertical_line_to(path, command == b'v');
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                b'Q' | b'q' => {
                    self.last_quad_control = None;
                    self.handle_quad_to(path, command == b'q');
                    self.last_cubic_control = None;
                }
                b'T' | b't' => {
                    self.handle_smooth_quad_to(path, command == b't');
                    self.last_cubic_control = None;
                }
                b'C' | b'c' => {
                    self.last_cubic_control = None;
                    self.handle_cubic_to(path, command == b'c');
                    self.last_quad_control = None;
                }
                b'S' | b's' => {
                    self.handle_smooth_cubic_to(path, command == b's');
                    self.last_quad_control = None;
                }
                b'A' | b'a' => {
                    self.handle_elliptical_arc(path, command == b'a');
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                b'Z' | b'z' => {
                    path.close();
                    self.current = self.subpath_start;
                    self.last_cubic_control = None;
                    self.last_quad_control = None;
                }
                _ => {
                    self.clean = false;
                    if strict {
                        return Err(PathDataError::UnknownCommand {
                            command: command as char,
                            offset,
                        });
                    }
                }
            }

            if strict {
                if let Some(at) = self.incomplete {
                    return Err(PathDataError::IncompleteCoordinates {
                        command: command as char,
                        offset: at,
                    });
                }
            }

            self.skip_whitespace();
        }

        Ok(self.clean)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scanner
    // ─────────────────────────────────────────────────────────────────────────

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_command(&self) -> bool {
        self.peek().is_some_and(is_command_letter)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace_or_comma(&mut self) {
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_whitespace() || b == b',')
        {
            self.pos += 1;
        }
    }

    /// Scans one number: optional leading `-`, digits, at most one `.`.
    /// A command letter, `-`, or second `.` ends the token, so adjacent
    /// numbers need no separator.
    fn parse_coordinate(&mut self) -> Option<f32> {
        self.skip_whitespace();

        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }

        let start = self.pos;
        let mut point_found = false;

        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() || byte == b',' || byte == b'-' || is_command_letter(byte)
            {
                break;
            }

            if byte == b'.' {
                if point_found {
                    break;
                }
                point_found = true;
            } else if !byte.is_ascii_digit() {
                break;
            }

            self.pos += 1;
        }

        if self.pos == start {
            return None;
        }

        let token = std::str::from_utf8(&self.bytes[start..self.pos]).ok()?;
        let mut value: f32 = token.parse().unwrap_or(0.0);
        if negative {
            value = -value;
        }

        self.skip_whitespace_or_comma();
        Some(value)
    }

    /// Scans a bare digit run, used for the arc flags
    fn parse_flag(&mut self) -> Option<i32> {
        self.skip_whitespace();

        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        if self.pos == start {
            return None;
        }

        let token = std::str::from_utf8(&self.bytes[start..self.pos]).ok()?;
        let value = token.parse().unwrap_or(0);

        self.skip_whitespace_or_comma();
        Some(value)
    }

    fn parse_coordinate_pair(&mut self) -> Option<(f32, f32)> {
        let x = self.parse_coordinate()?;
        match self.parse_coordinate() {
            Some(y) => Some((x, y)),
            None => {
                self.mark_incomplete();
                None
            }
        }
    }

    fn mark_incomplete(&mut self) {
        self.clean = false;
        if self.incomplete.is_none() {
            self.incomplete = Some(self.pos);
        }
    }

    fn more_groups(&self) -> bool {
        !self.at_end() && !self.at_command()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_move_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                break;
            };

            if relative {
                x += self.current.x;
                y += self.current.y;
            }

            path.move_to(x, y);
            self.current = Point::new(x, y);
            self.subpath_start = self.current;

            self.skip_whitespace();
        }
    }

    fn handle_line_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                break;
            };

            if relative {
                x += self.current.x;
                y += self.current.y;
            }

            path.line_to(x, y);
            self.current = Point::new(x, y);

            self.skip_whitespace();
        }
    }

    fn handle_horizontal_line_to(&mut self, path: &mut Path, relative: bool) {
        // the y coordinate is pinned for the whole command
        let y = self.current.y;

        while self.more_groups() {
            let Some(mut x) = self.parse_coordinate() else {
                break;
            };

            if relative {
                x += self.current.x;
            }

            path.line_to(x, y);
            self.current.x = x;

            self.skip_whitespace();
        }
    }

    fn handle_vertical_line_to(&mut self, path: &mut Path, relative: bool) {
        let x = self.current.x;

        while self.more_groups() {
            let Some(mut y) = self.parse_coordinate() else {
                break;
            };

            if relative {
                y += self.current.y;
            }

            path.line_to(x, y);
            self.current.y = y;

            self.skip_whitespace();
        }
    }

    fn handle_quad_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut cx, mut cy)) = self.parse_coordinate_pair() else {
                break;
            };
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                self.mark_incomplete();
                break;
            };

            if relative {
                cx += self.current.x;
                cy += self.current.y;
                x += self.current.x;
                y += self.current.y;
            }

            path.quad_to(cx, cy, x, y);
            self.current = Point::new(x, y);
            self.last_quad_control = Some(Point::new(cx, cy));

            self.skip_whitespace();
        }
    }

    fn handle_smooth_quad_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                break;
            };

            // reflect the previous quad control around the current point;
            // with no compatible predecessor the control collapses onto it
            let control = match self.last_quad_control {
                Some(prev) => Point::new(
                    2.0 * self.current.x - prev.x,
                    2.0 * self.current.y - prev.y,
                ),
                None => self.current,
            };

            if relative {
                x += self.current.x;
                y += self.current.y;
            }

            path.quad_to(control.x, control.y, x, y);
            self.current = Point::new(x, y);
            self.last_quad_control = Some(control);

            self.skip_whitespace();
        }
    }

    fn handle_cubic_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut c1x, mut c1y)) = self.parse_coordinate_pair() else {
                break;
            };
            let Some((mut c2x, mut c2y)) = self.parse_coordinate_pair() else {
                self.mark_incomplete();
                break;
            };
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                self.mark_incomplete();
                break;
            };

            if relative {
                c1x += self.current.x;
                c1y += self.current.y;
                c2x += self.current.x;
                c2y += self.current.y;
                x += self.current.x;
                y += self.current.y;
            }

            path.cubic_to(c1x, c1y, c2x, c2y, x, y);
            self.current = Point::new(x, y);
            self.last_cubic_control = Some(Point::new(c2x, c2y));

            self.skip_whitespace();
        }
    }

    fn handle_smooth_cubic_to(&mut self, path: &mut Path, relative: bool) {
        while self.more_groups() {
            let Some((mut c2x, mut c2y)) = self.parse_coordinate_pair() else {
                break;
            };
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                self.mark_incomplete();
                break;
            };

            let control1 = match self.last_cubic_control {
                Some(prev) => Point::new(
                    2.0 * self.current.x - prev.x,
                    2.0 * self.current.y - prev.y,
                ),
                None => self.current,
            };

            if relative {
                c2x += self.current.x;
                c2y += self.current.y;
                x += self.current.x;
                y += self.current.y;
            }

            path.cubic_to(control1.x, control1.y, c2x, c2y, x, y);
            self.current = Point::new(x, y);
            self.last_cubic_control = Some(Point::new(c2x, c2y));

            self.skip_whitespace();
        }
    }

    /// Endpoint-to-center elliptical arc per the SVG arc implementation notes
    fn handle_elliptical_arc(&mut self, path: &mut Path, relative: bool) {
        use std::f32::consts::TAU;

        while self.more_groups() {
            let Some((mut rx, mut ry)) = self.parse_coordinate_pair() else {
                break;
            };
            let Some(x_axis_rotation) = self.parse_coordinate() else {
                self.mark_incomplete();
                break;
            };
            let Some(large_arc) = self.parse_flag() else {
                self.mark_incomplete();
                break;
            };
            let Some(sweep) = self.parse_flag() else {
                self.mark_incomplete();
                break;
            };
            let Some((mut x, mut y)) = self.parse_coordinate_pair() else {
                self.mark_incomplete();
                break;
            };

            if relative {
                x += self.current.x;
                y += self.current.y;
            }

            // degenerate radii collapse the arc to a straight line
            if rx == 0.0 || ry == 0.0 {
                path.line_to(x, y);
                self.current = Point::new(x, y);
                self.skip_whitespace();
                continue;
            }

            let angle_rad = x_axis_rotation.to_radians();
            let (sin_angle, cos_angle) = angle_rad.sin_cos();

            // midpoint between the endpoints, rotated into ellipse space
            let dx = (self.current.x - x) / 2.0;
            let dy = (self.current.y - y) / 2.0;
            let x1_prime = cos_angle * dx + sin_angle * dy;
            let y1_prime = -sin_angle * dx + cos_angle * dy;

            // coincident endpoints describe no arc at all
            if x1_prime == 0.0 && y1_prime == 0.0 {
                self.skip_whitespace();
                continue;
            }

            let mut rx_sq = rx * rx;
            let mut ry_sq = ry * ry;
            let x1_prime_sq = x1_prime * x1_prime;
            let y1_prime_sq = y1_prime * y1_prime;

            // scale the radii up when they cannot span the endpoints
            let radii_scale = x1_prime_sq / rx_sq + y1_prime_sq / ry_sq;
            if radii_scale > 1.0 {
                let scale = radii_scale.sqrt();
                rx *= scale;
                ry *= scale;
                rx_sq = rx * rx;
                ry_sq = ry * ry;
            }

            // the large-arc/sweep flags select the solution branch
            let sign = if (large_arc != 0) != (sweep != 0) {
                1.0
            } else {
                -1.0
            };
            let sqrt_factor = (((rx_sq * ry_sq - rx_sq * y1_prime_sq - ry_sq * x1_prime_sq)
                / (rx_sq * y1_prime_sq + ry_sq * x1_prime_sq))
                .max(0.0))
            .sqrt();
            let cx_prime = sign * sqrt_factor * (rx * y1_prime / ry);
            let cy_prime = sign * sqrt_factor * (-ry * x1_prime / rx);

            let center_x = cos_angle * cx_prime - sin_angle * cy_prime + (self.current.x + x) / 2.0;
            let center_y = sin_angle * cx_prime + cos_angle * cy_prime + (self.current.y + y) / 2.0;

            let ux = (x1_prime - cx_prime) / rx;
            let uy = (y1_prime - cy_prime) / ry;
            let vx = (-x1_prime - cx_prime) / rx;
            let vy = (-y1_prime - cy_prime) / ry;

            let start_angle = uy.atan2(ux);
            let mut delta_angle = (ux * vy - uy * vx).atan2(ux * vx + uy * vy);

            if sweep == 0 && delta_angle > 0.0 {
                delta_angle -= TAU;
            } else if sweep != 0 && delta_angle < 0.0 {
                delta_angle += TAU;
            }
            delta_angle %= TAU;

            path.add_centered_arc(
                center_x,
                center_y,
                rx,
                ry,
                angle_rad,
                start_angle,
                start_angle + delta_angle,
                true,
            );

            self.current = Point::new(x, y);
            self.skip_whitespace();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Segment;

    fn parsed(data: &str) -> Path {
        let mut path = Path::new();
        assert!(path.parse_path_data(data), "expected clean parse: {data}");
        path
    }

    fn last_anchor(path: &Path) -> Point {
        path.segments().last().map(|s| s.anchor()).unwrap()
    }

    #[test]
    fn test_empty_input_parses_clean() {
        let mut path = Path::new();
        assert!(path.parse_path_data(""));
        assert!(path.is_empty());
    }

    #[test]
    fn test_absolute_move_and_lines() {
        let path = parsed("M10,20 L30,40 L50,60");
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments()[0], Segment::MoveTo(Point::new(10.0, 20.0)));
        assert_eq!(last_anchor(&path), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_implicit_command_repetition() {
        let path = parsed("M0,0 L10,0 20,0 30,0");
        assert_eq!(path.len(), 4);
        assert_eq!(last_anchor(&path), Point::new(30.0, 0.0));
    }

    #[test]
    fn test_relative_commands() {
        let path = parsed("m10,10 l5,0 v5 h-5 z");
        let anchors: Vec<Point> = path.segments().iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec![
                Point::new(10.0, 10.0),
                Point::new(15.0, 10.0),
                Point::new(15.0, 15.0),
                Point::new(10.0, 15.0),
                Point::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_horizontal_pins_y_for_whole_command() {
        let path = parsed("M0,5 H10 20 30");
        for segment in &path.segments()[1..] {
            assert_eq!(segment.anchor().y, 5.0);
        }
        assert_eq!(last_anchor(&path), Point::new(30.0, 5.0));
    }

    #[test]
    fn test_numbers_without_separators() {
        let path = parsed("M0.5.5L1-1");
        assert_eq!(path.segments()[0], Segment::MoveTo(Point::new(0.5, 0.5)));
        assert_eq!(path.segments()[1], Segment::LineTo(Point::new(1.0, -1.0)));
    }

    #[test]
    fn test_quadratic_and_cubic_curves() {
        let path = parsed("M0,0 Q5,10 10,0 C15,10 20,10 25,0");
        assert_eq!(
            path.segments()[1],
            Segment::QuadTo {
                control: Point::new(5.0, 10.0),
                end: Point::new(10.0, 0.0),
            }
        );
        assert_eq!(
            path.segments()[2],
            Segment::CubicTo {
                control1: Point::new(15.0, 10.0),
                control2: Point::new(20.0, 10.0),
                end: Point::new(25.0, 0.0),
            }
        );
    }

    #[test]
    fn test_smooth_cubic_reflects_previous_control() {
        let path = parsed("M0,0 C10,0 10,10 20,10 S30,0 40,10");
        assert_eq!(
            path.segments()[2],
            Segment::CubicTo {
                control1: Point::new(30.0, 10.0),
                control2: Point::new(30.0, 0.0),
                end: Point::new(40.0, 10.0),
            }
        );
    }

    #[test]
    fn test_smooth_quad_reflects_previous_control() {
        let path = parsed("M0,0 Q5,10 10,0 T20,0");
        assert_eq!(
            path.segments()[2],
            Segment::QuadTo {
                control: Point::new(15.0, -10.0),
                end: Point::new(20.0, 0.0),
            }
        );
    }

    #[test]
    fn test_smooth_after_incompatible_command_uses_current_point() {
        let path = parsed("M0,0 L5,5 T10,10");
        assert_eq!(
            path.segments()[2],
            Segment::QuadTo {
                control: Point::new(5.0, 5.0),
                end: Point::new(10.0, 10.0),
            }
        );

        let path = parsed("M0,0 Q5,10 10,0 S20,10 30,0");
        // S after Q must not reflect the quad control
        assert_eq!(
            path.segments()[2],
            Segment::CubicTo {
                control1: Point::new(10.0, 0.0),
                control2: Point::new(20.0, 10.0),
                end: Point::new(30.0, 0.0),
            }
        );
    }

    #[test]
    fn test_relative_smooth_quad() {
        let path = parsed("M0,0 Q5,10 10,0 t10,0");
        assert_eq!(
            path.segments()[2],
            Segment::QuadTo {
                control: Point::new(15.0, -10.0),
                end: Point::new(20.0, 0.0),
            }
        );
    }

    #[test]
    fn test_degenerate_arc_collapses_to_line() {
        let path = parsed("M0,0 A0,5 0 0,1 10,10");
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[1], Segment::LineTo(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_arc_sweep_selects_branch() {
        let above = parsed("M0,0 A5,5 0 0,1 10,0");
        let end = last_anchor(&above);
        assert!((end.x - 10.0).abs() < 1e-3 && end.y.abs() < 1e-3);
        assert!(above.bounding_box().y() < -4.9);

        let below = parsed("M0,0 A5,5 0 0,0 10,0");
        let bounds = below.bounding_box();
        assert!(bounds.y() + bounds.height() > 4.9);
    }

    #[test]
    fn test_arc_radii_scaled_up_when_too_small() {
        // radius 1 cannot span endpoints 10 apart; the radii grow to fit
        let path = parsed("M0,0 A1,1 0 0,1 10,0");
        let end = last_anchor(&path);
        assert!((end.x - 10.0).abs() < 1e-2 && end.y.abs() < 1e-2);
    }

    #[test]
    fn test_arc_with_coincident_endpoints_emits_nothing() {
        let path = parsed("M5,5 A3,3 0 0,1 5,5");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_close_resets_current_point() {
        let path = parsed("M5,5 L10,5 z l1,1");
        assert_eq!(
            path.segments()[2],
            Segment::LineTo(Point::new(5.0, 5.0))
        );
        assert_eq!(last_anchor(&path), Point::new(6.0, 6.0));
    }

    #[test]
    fn test_unknown_command_is_skipped_but_flagged() {
        let mut path = Path::new();
        let clean = path.parse_path_data("M0,0 X9 L10,10");
        assert!(!clean);
        assert_eq!(last_anchor(&path), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_truncated_group_keeps_prefix() {
        let mut path = Path::new();
        let clean = path.parse_path_data("M0,0 L10,10 L20");
        assert!(!clean);
        assert_eq!(path.len(), 2);
        assert_eq!(last_anchor(&path), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_strict_parse_reports_unknown_command() {
        let error = Path::from_svg_data("M0,0 X5,5").unwrap_err();
        assert_eq!(
            error,
            PathDataError::UnknownCommand {
                command: 'X',
                offset: 5,
            }
        );
    }

    #[test]
    fn test_strict_parse_reports_truncation() {
        let error = Path::from_svg_data("M0,0 L10").unwrap_err();
        assert!(matches!(
            error,
            PathDataError::IncompleteCoordinates { command: 'L', .. }
        ));
    }

    #[test]
    fn test_strict_parse_of_valid_data() {
        let path = Path::from_svg_data("M0,0 H10 V10 H0 Z").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(last_anchor(&path), Point::new(0.0, 0.0));
    }
}

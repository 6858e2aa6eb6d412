// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, polyline paths).

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn distance(&self, other: &Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Straight-segment path; no curves are ever produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    /// Polyline through `points` in order; empty input gives an empty path.
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        let mut it = points.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
        }
        path
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Stroke length in pixels, counting the closing segment when present.
    pub fn length(&self) -> f32 {
        let mut total = 0.0;
        let mut start: Option<Point> = None;
        let mut cur: Option<Point> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    start = Some(p);
                    cur = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if let Some(c) = cur { total += c.distance(&p); }
                    cur = Some(p);
                }
                PathCommand::Close => {
                    if let (Some(c), Some(s)) = (cur, start) { total += c.distance(&s); }
                    cur = start;
                }
            }
        }
        total
    }

    /// SVG path data, e.g. `M 40 95 L 580 20`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() { d.push(' '); }
            match cmd {
                PathCommand::MoveTo(p) => { let _ = write!(d, "M {} {}", fmt_num(p.x), fmt_num(p.y)); }
                PathCommand::LineTo(p) => { let _ = write!(d, "L {} {}", fmt_num(p.x), fmt_num(p.y)); }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Compact number for markup: at most 2 decimals, trailing zeros dropped.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_and_svg_data() {
        let p = Path::polyline(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.5, 4.0)]);
        assert_eq!(p.to_svg_d(), "M 0 0 L 3 4 L 3.5 4");
        assert!((p.length() - 5.5).abs() < 1e-6);
    }

    #[test]
    fn closed_path_counts_return_segment() {
        let mut p = Path::polyline(&[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)]);
        p.close();
        assert!((p.length() - 12.0).abs() < 1e-6);
        assert!(p.to_svg_d().ends_with(" Z"));
    }

    #[test]
    fn empty_polyline() {
        assert!(Path::polyline(&[]).is_empty());
        assert_eq!(Path::new().length(), 0.0);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(12.346), "12.35");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(clamp(5, 0, 3), 3);
    }
}

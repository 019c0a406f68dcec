use serde::{Deserialize, Serialize};

/// Canvas-space point, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned box, `min` inclusive top-left, `max` bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn around(c: Point, half_w: f64, half_h: f64) -> Self {
        Bounds {
            min: Point::new(c.x - half_w, c.y - half_h),
            max: Point::new(c.x + half_w, c.y + half_h),
        }
    }

    pub fn union(self, o: Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(o.min.x), self.min.y.min(o.min.y)),
            max: Point::new(self.max.x.max(o.max.x), self.max.y.max(o.max.y)),
        }
    }

    pub fn grow(self, d: f64) -> Bounds {
        Bounds {
            min: self.min.offset(-d, -d),
            max: self.max.offset(d, d),
        }
    }

    pub fn within(&self, w: f64, h: f64) -> bool {
        self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= w && self.max.y <= h
    }
}

/// Polygon vertex, optionally a corner to be rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolygonPoint {
    Point(Point),
    /// Corner with rounding radius.
    Rounded(Point, f64),
}

impl PolygonPoint {
    fn at(&self) -> Point {
        match *self {
            PolygonPoint::Point(p) | PolygonPoint::Rounded(p, _) => p,
        }
    }
}

pub fn rotate_point(p: Point, c: Point, ang: f64, flip: bool) -> Point {
    let mut dx = p.x - c.x;
    let dy = p.y - c.y;
    if flip {
        dx = -dx;
    }
    let (s, ca) = ang.to_radians().sin_cos();
    Point {
        x: c.x + dx * ca - dy * s,
        y: c.y + dx * s + dy * ca,
    }
}

fn normalize(p: Point) -> Point {
    let len = (p.x * p.x + p.y * p.y).sqrt();
    if len == 0.0 {
        Point { x: 0.0, y: 0.0 }
    } else {
        Point {
            x: p.x / len,
            y: p.y / len,
        }
    }
}

/// Expand rounded corners into arc points. Only right-angle corners are
/// rounded exactly; a rounded vertex needs a predecessor and a successor.
pub fn poly_to_points(poly: &[PolygonPoint]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::new();
    let n = poly.len();
    for i in 0..n {
        match poly[i] {
            PolygonPoint::Point(p) => out.push(p),
            PolygonPoint::Rounded(corner, radius) => {
                let Some(&prev) = out.last() else {
                    out.push(corner);
                    continue;
                };
                if i + 1 >= n || radius <= 0.0 {
                    out.push(corner);
                    continue;
                }
                let next = poly[i + 1].at();
                let v1 = normalize(Point {
                    x: prev.x - corner.x,
                    y: prev.y - corner.y,
                });
                let v2 = normalize(Point {
                    x: next.x - corner.x,
                    y: next.y - corner.y,
                });
                let start = Point {
                    x: corner.x + v1.x * radius,
                    y: corner.y + v1.y * radius,
                };
                let end = Point {
                    x: corner.x + v2.x * radius,
                    y: corner.y + v2.y * radius,
                };
                out.push(start);
                let center = Point {
                    x: corner.x + (v1.x + v2.x) * radius,
                    y: corner.y + (v1.y + v2.y) * radius,
                };
                let start_ang = (start.y - center.y).atan2(start.x - center.x);
                let end_ang = (end.y - center.y).atan2(end.x - center.x);
                let mut sweep = end_ang - start_ang;
                if sweep > std::f64::consts::PI {
                    sweep -= std::f64::consts::TAU;
                } else if sweep < -std::f64::consts::PI {
                    sweep += std::f64::consts::TAU;
                }
                let steps = 12;
                for j in 1..=steps {
                    let t = j as f64 / steps as f64;
                    let ang = start_ang + sweep * t;
                    out.push(Point {
                        x: center.x + radius * ang.cos(),
                        y: center.y + radius * ang.sin(),
                    });
                }
            }
        }
    }
    out
}

pub fn bounds_of(pts: &[Point]) -> Option<Bounds> {
    let first = *pts.first()?;
    let mut b = Bounds {
        min: first,
        max: first,
    };
    for p in &pts[1..] {
        b.min.x = b.min.x.min(p.x);
        b.min.y = b.min.y.min(p.y);
        b.max.x = b.max.x.max(p.x);
        b.max.y = b.max.y.max(p.y);
    }
    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quarter_turn_about_center() {
        let p = rotate_point(Point::new(1.0, 0.0), Point::default(), 90.0, false);
        assert!(close(p.x, 0.0) && close(p.y, 1.0));
    }

    #[test]
    fn flip_mirrors_before_rotating() {
        let p = rotate_point(Point::new(3.0, 1.0), Point::new(1.0, 1.0), 0.0, true);
        assert!(close(p.x, -1.0) && close(p.y, 1.0));
    }

    #[test]
    fn rounded_corners_take_the_short_way_round() {
        let (l, t, r, b) = (30.0, 40.0, 70.0, 60.0);
        let pts = poly_to_points(&[
            PolygonPoint::Point(Point::new(50.0, t)),
            PolygonPoint::Rounded(Point::new(r, t), 4.0),
            PolygonPoint::Rounded(Point::new(r, b), 4.0),
            PolygonPoint::Rounded(Point::new(l, b), 4.0),
            PolygonPoint::Rounded(Point::new(l, t), 4.0),
            PolygonPoint::Point(Point::new(50.0, t)),
        ]);
        let bb = bounds_of(&pts).unwrap();
        assert!(close(bb.min.x, l) && close(bb.max.x, r));
        assert!(close(bb.min.y, t) && close(bb.max.y, b));
        for p in &pts {
            let inside = (p.x - 50.0).abs() < 15.0 && (p.y - 50.0).abs() < 5.0;
            assert!(!inside, "arc point {:?} crosses the interior", p);
        }
    }

    #[test]
    fn rounded_corner_without_successor_is_kept_sharp() {
        let pts = poly_to_points(&[
            PolygonPoint::Point(Point::new(0.0, 0.0)),
            PolygonPoint::Rounded(Point::new(10.0, 0.0), 2.0),
        ]);
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn bounds_of_empty_is_none() {
        assert!(bounds_of(&[]).is_none());
    }

    #[test]
    fn bounds_union_and_containment() {
        let a = Bounds::around(Point::new(10.0, 10.0), 5.0, 5.0);
        let b = Bounds::around(Point::new(30.0, 10.0), 5.0, 2.0);
        let u = a.union(b);
        assert_eq!(u.min, Point::new(5.0, 5.0));
        assert_eq!(u.max, Point::new(35.0, 15.0));
        assert!(u.within(40.0, 40.0));
        assert!(!u.grow(6.0).within(40.0, 40.0));
    }
}

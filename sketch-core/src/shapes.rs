//! Main-stone outlines for each cut.
//!
//! Every outline is a function of a single base size `s` (pixels, derived
//! from carat weight) and the stone center. `h = floor(s / 2)` is the
//! reference half-extent; each cut scales it on one or both axes.

use ring_core::GemShape;
use serde::Serialize;

use crate::constants::*;
use crate::geometry::Point;
use crate::scene::Shape;

/// Linear size in pixels for a carat weight. This is the single source of
/// geometric scale for the sketch.
pub fn base_size(carat: f64) -> f64 {
    (carat * CARAT_SCALE).floor().max(MIN_EXTENT)
}

/// Reference half-extent `h` for a base size.
pub fn half_size(base: f64) -> f64 {
    (base / 2.0).floor().max(MIN_EXTENT)
}

fn extent(v: f64) -> f64 {
    v.max(MIN_EXTENT)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoneOutline {
    pub body: Shape,
    /// Facet lines drawn over the body.
    pub facets: Vec<(Point, Point)>,
    pub half_width: f64,
    pub half_height: f64,
}

fn square(c: Point, h: f64) -> StoneOutline {
    StoneOutline {
        body: Shape::Rect {
            center: c,
            half_w: h,
            half_h: h,
        },
        facets: Vec::new(),
        half_width: h,
        half_height: h,
    }
}

fn octagon(c: Point, h: f64) -> Vec<Point> {
    let k = h * OCTAGON_CUT_RATIO;
    let (l, t, r, b) = (c.x - h, c.y - h, c.x + h, c.y + h);
    vec![
        Point::new(l + k, t),
        Point::new(r - k, t),
        Point::new(r, t + k),
        Point::new(r, b - k),
        Point::new(r - k, b),
        Point::new(l + k, b),
        Point::new(l, b - k),
        Point::new(l, t + k),
    ]
}

/// Five-point teardrop with the apex above `c`.
pub(crate) fn pear_points(c: Point, h: f64) -> Vec<Point> {
    let apex = h * PEAR_APEX_RATIO;
    let low = h * PEAR_BASE_RATIO;
    let low_w = h * PEAR_BASE_HALF_WIDTH_RATIO;
    vec![
        Point::new(c.x, c.y - apex),
        Point::new(c.x + h, c.y),
        Point::new(c.x + low_w, c.y + low),
        Point::new(c.x - low_w, c.y + low),
        Point::new(c.x - h, c.y),
    ]
}

/// Four-point lens with the given horizontal and vertical half-extents.
pub(crate) fn lens_points(c: Point, half_w: f64, half_h: f64) -> Vec<Point> {
    vec![
        Point::new(c.x, c.y - half_h),
        Point::new(c.x + half_w, c.y),
        Point::new(c.x, c.y + half_h),
        Point::new(c.x - half_w, c.y),
    ]
}

/// Outline and half-extents of a main stone of base size `base` centered on
/// `c`.
pub fn stone_outline(shape: GemShape, c: Point, base: f64) -> StoneOutline {
    let h = half_size(base);
    match shape {
        GemShape::Round => StoneOutline {
            body: Shape::Ellipse {
                center: c,
                rx: h,
                ry: h,
            },
            facets: Vec::new(),
            half_width: h,
            half_height: h,
        },
        // Asscher has no geometry of its own and shares the princess square.
        GemShape::Princess | GemShape::Asscher => {
            let mut out = square(c, h);
            out.facets = vec![
                (c.offset(-h, -h), c.offset(h, h)),
                (c.offset(h, -h), c.offset(-h, h)),
            ];
            out
        }
        GemShape::Oval => {
            let ry = extent(h * OVAL_HEIGHT_RATIO);
            StoneOutline {
                body: Shape::Ellipse {
                    center: c,
                    rx: h,
                    ry,
                },
                facets: Vec::new(),
                half_width: h,
                half_height: ry,
            }
        }
        GemShape::Emerald | GemShape::Radiant => StoneOutline {
            body: Shape::Polygon(octagon(c, h)),
            facets: Vec::new(),
            half_width: h,
            half_height: h,
        },
        GemShape::Cushion => StoneOutline {
            body: Shape::RoundedRect {
                center: c,
                half_w: h,
                half_h: h,
                r: h * CUSHION_CORNER_RATIO,
            },
            facets: Vec::new(),
            half_width: h,
            half_height: h,
        },
        GemShape::Pear => StoneOutline {
            body: Shape::Polygon(pear_points(c, h)),
            facets: Vec::new(),
            half_width: h,
            half_height: extent(h * PEAR_APEX_RATIO.max(PEAR_BASE_RATIO)),
        },
        GemShape::Marquise => {
            let hw = extent(h * MARQUISE_SHORT_RATIO);
            let hh = extent(h * MARQUISE_LONG_RATIO);
            StoneOutline {
                body: Shape::Polygon(lens_points(c, hw, hh)),
                facets: Vec::new(),
                half_width: hw,
                half_height: hh,
            }
        }
    }
}

/// Plain square used when the requested cut is not recognized.
pub fn fallback_outline(c: Point, base: f64) -> StoneOutline {
    square(c, half_size(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Point = Point::new(CENTER_X, CENTER_Y);

    #[test]
    fn one_carat_round_is_17px() {
        let base = base_size(1.0);
        assert_eq!(base, 35.0);
        let o = stone_outline(GemShape::Round, C, base);
        assert_eq!((o.half_width, o.half_height), (17.0, 17.0));
    }

    #[test]
    fn oval_is_taller_than_wide() {
        let o = stone_outline(GemShape::Oval, C, 35.0);
        assert_eq!(o.half_width, 17.0);
        assert!((o.half_height - 23.8).abs() < 1e-9);
    }

    #[test]
    fn marquise_extents() {
        let o = stone_outline(GemShape::Marquise, C, 40.0);
        assert!((o.half_width - 16.0).abs() < 1e-9);
        assert!((o.half_height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn pear_apex_points_up() {
        let o = stone_outline(GemShape::Pear, C, 40.0);
        let Shape::Polygon(pts) = &o.body else {
            panic!("pear should be a polygon");
        };
        assert_eq!(pts.len(), 5);
        let top = pts.iter().fold(f64::INFINITY, |m, p| m.min(p.y));
        assert_eq!(top, pts[0].y);
        assert!((o.half_height - 26.0).abs() < 1e-9);
    }

    #[test]
    fn asscher_renders_as_princess() {
        let a = stone_outline(GemShape::Asscher, C, 50.0);
        let p = stone_outline(GemShape::Princess, C, 50.0);
        assert_eq!(a, p);
        assert_eq!(p.facets.len(), 2);
    }

    #[test]
    fn octagon_fits_its_square() {
        let o = stone_outline(GemShape::Emerald, C, 40.0);
        let b = o.body.bounds();
        assert_eq!(b.min, Point::new(230.0, 230.0));
        assert_eq!(b.max, Point::new(270.0, 270.0));
    }

    #[test]
    fn extents_never_collapse() {
        for shape in GemShape::ALL {
            let o = stone_outline(shape, C, 0.0);
            assert!(o.half_width >= MIN_EXTENT, "{:?}", shape);
            assert!(o.half_height >= MIN_EXTENT, "{:?}", shape);
        }
    }

    #[test]
    fn body_matches_reported_extents() {
        for shape in GemShape::ALL {
            let o = stone_outline(shape, C, 70.0);
            let b = o.body.bounds();
            assert!((C.x - b.min.x - o.half_width).abs() < 1e-9, "{:?}", shape);
            assert!(C.y - b.min.y <= o.half_height + 1e-9, "{:?}", shape);
            assert!(b.max.y - C.y <= o.half_height + 1e-9, "{:?}", shape);
        }
    }
}

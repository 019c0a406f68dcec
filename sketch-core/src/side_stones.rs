//! Auxiliary stones and prongs.

use ring_core::SideStoneShape;
use serde::Serialize;

use crate::constants::*;
use crate::geometry::{Point, rotate_point};
use crate::scene::Shape;
use crate::shapes::{lens_points, pear_points};

/// Direction an asymmetric side stone points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    /// Clockwise rotation (y down) that turns an upward shape to face this way.
    fn degrees(self) -> f64 {
        match self {
            Orientation::Up => 0.0,
            Orientation::Right => 90.0,
            Orientation::Down => 180.0,
            Orientation::Left => 270.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SideStoneOutline {
    pub body: Shape,
    /// Rendered extents; these differ from the nominal radius for marquise
    /// and pear and depend on orientation.
    pub half_width: f64,
    pub half_height: f64,
}

/// Outline of a side stone of nominal `radius`. `None` when the radius is not
/// positive.
pub fn side_stone_outline(
    shape: SideStoneShape,
    center: Point,
    radius: f64,
    orientation: Orientation,
) -> Option<SideStoneOutline> {
    if radius <= 0.0 || !radius.is_finite() {
        return None;
    }
    let out = match shape {
        SideStoneShape::Round => SideStoneOutline {
            body: Shape::Ellipse {
                center,
                rx: radius,
                ry: radius,
            },
            half_width: radius,
            half_height: radius,
        },
        SideStoneShape::Marquise => {
            let long = radius * MARQUISE_LONG_RATIO;
            let short = radius * MARQUISE_SHORT_RATIO;
            let (hw, hh) = if orientation.is_horizontal() {
                (long, short)
            } else {
                (short, long)
            };
            SideStoneOutline {
                body: Shape::Polygon(lens_points(center, hw, hh)),
                half_width: hw,
                half_height: hh,
            }
        }
        SideStoneShape::Pear => {
            let ang = orientation.degrees();
            let pts = pear_points(center, radius)
                .into_iter()
                .map(|p| rotate_point(p, center, ang, false))
                .collect();
            let long = radius * PEAR_APEX_RATIO.max(PEAR_BASE_RATIO);
            let (hw, hh) = if orientation.is_horizontal() {
                (long, radius)
            } else {
                (radius, long)
            };
            SideStoneOutline {
                body: Shape::Polygon(pts),
                half_width: hw,
                half_height: hh,
            }
        }
    };
    Some(out)
}

/// Prong radius for a stone of the given base size.
pub fn prong_radius(base: f64) -> f64 {
    (base * PRONG_RATIO).max(PRONG_MIN_RADIUS)
}

/// Four prongs on the corners of the stone's bounding box.
pub fn prongs(center: Point, half_w: f64, half_h: f64, base: f64) -> [Shape; 4] {
    let r = prong_radius(base);
    let at = |sx: f64, sy: f64| Shape::Ellipse {
        center: center.offset(sx * half_w, sy * half_h),
        rx: r,
        ry: r,
    };
    [at(-1.0, -1.0), at(1.0, -1.0), at(1.0, 1.0), at(-1.0, 1.0)]
}

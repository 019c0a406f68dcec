//! Band shoulders fitted to the composite setting width.

use ring_core::{GemShape, SettingStyle};
use serde::Serialize;
use tracing::debug;

use crate::constants::*;
use crate::geometry::{Point, PolygonPoint, poly_to_points};
use crate::scene::Shape;

/// How a shoulder meets the stone cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BandJoin {
    /// Semicircular end; curved cuts.
    Rounded,
    /// Flat end; angular cuts.
    Square,
    /// Flat end for pear and marquise. Not tangent to the outline.
    Straight,
}

pub fn band_join(shape: Option<GemShape>) -> BandJoin {
    match shape {
        Some(GemShape::Round | GemShape::Oval | GemShape::Cushion) => BandJoin::Rounded,
        Some(GemShape::Pear | GemShape::Marquise) => BandJoin::Straight,
        Some(GemShape::Princess | GemShape::Emerald | GemShape::Radiant | GemShape::Asscher)
        | None => BandJoin::Square,
    }
}

/// One shoulder, spanning `x0..x1` on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shoulder {
    pub x0: f64,
    pub x1: f64,
    pub shape: Shape,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandLayout {
    pub setting_half_width: f64,
    pub join: BandJoin,
    pub left: Option<Shoulder>,
    pub right: Option<Shoulder>,
}

fn clamp_x(x: f64) -> f64 {
    x.clamp(0.0, CANVAS_SIZE)
}

/// `inner_right` is true for the left shoulder, whose stone-side end is at
/// `x1`.
fn shoulder(x0: f64, x1: f64, join: BandJoin, inner_right: bool) -> Option<Shoulder> {
    if x1 <= x0 {
        return None;
    }
    let half = BAND_THICKNESS / 2.0;
    let (t, b) = (CENTER_Y - half, CENTER_Y + half);
    let r = half.min(x1 - x0);
    let shape = match join {
        BandJoin::Rounded => {
            let pts = if inner_right {
                [
                    PolygonPoint::Point(Point::new(x0, t)),
                    PolygonPoint::Rounded(Point::new(x1, t), r),
                    PolygonPoint::Rounded(Point::new(x1, b), r),
                    PolygonPoint::Point(Point::new(x0, b)),
                ]
            } else {
                [
                    PolygonPoint::Point(Point::new(x1, b)),
                    PolygonPoint::Rounded(Point::new(x0, b), r),
                    PolygonPoint::Rounded(Point::new(x0, t), r),
                    PolygonPoint::Point(Point::new(x1, t)),
                ]
            };
            Shape::Polygon(poly_to_points(&pts))
        }
        BandJoin::Square | BandJoin::Straight => Shape::Rect {
            center: Point::new((x0 + x1) / 2.0, CENTER_Y),
            half_w: (x1 - x0) / 2.0,
            half_h: half,
        },
    };
    Some(Shoulder { x0, x1, shape })
}

/// Fit the band to the composite width. Solitaire hugs the main stone; other
/// styles use half the composite width, never less than the main stone's own
/// half-width.
pub fn layout_band(
    total_setting_width: f64,
    main_half_width: f64,
    shape: Option<GemShape>,
    style: SettingStyle,
) -> BandLayout {
    let setting_half_width = match style {
        SettingStyle::Solitaire => main_half_width,
        _ => (total_setting_width / 2.0).floor().max(main_half_width),
    };
    let join = band_join(shape);
    let left = shoulder(
        clamp_x(0.0),
        clamp_x(CENTER_X - setting_half_width),
        join,
        true,
    );
    let right = shoulder(
        clamp_x(CENTER_X + setting_half_width),
        clamp_x(CANVAS_SIZE),
        join,
        false,
    );
    debug!(setting_half_width, ?join, "band fitted");
    BandLayout {
        setting_half_width,
        join,
        left,
        right,
    }
}

//! Auxiliary-stone placement per setting style.
//!
//! Placement depends on the main stone's rendered half-width, and each style
//! adds its own contribution to the composite width the band is fitted to.

use ring_core::{GemShape, SettingStyle, SideStoneShape};
use serde::Serialize;
use tracing::debug;

use crate::constants::*;
use crate::geometry::Point;
use crate::scene::Shape;
use crate::shapes::{StoneOutline, half_size};
use crate::side_stones::{Orientation, SideStoneOutline, side_stone_outline};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StoneSide {
    Left,
    Right,
}

impl StoneSide {
    fn sign(self) -> f64 {
        match self {
            StoneSide::Left => -1.0,
            StoneSide::Right => 1.0,
        }
    }

    /// Asymmetric stones point toward the main stone.
    fn facing(self) -> Orientation {
        match self {
            StoneSide::Left => Orientation::Right,
            StoneSide::Right => Orientation::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// The single side stone of a three-stone setting.
    Inner,
    InnerTop,
    InnerBottom,
    Outer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedStone {
    pub side: StoneSide,
    pub slot: Slot,
    pub shape: SideStoneShape,
    pub center: Point,
    pub radius: f64,
    pub orientation: Orientation,
    pub outline: SideStoneOutline,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HaloRing {
    pub outline: Shape,
    pub half_width: f64,
    pub half_height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettingLayout {
    pub style: SettingStyle,
    pub halo: Option<HaloRing>,
    pub stones: Vec<PlacedStone>,
    /// Horizontal extent of main stone plus setting, seeded with the main
    /// stone's base size. Never decreases.
    pub total_setting_width: f64,
}

/// Nominal radius shared by every side stone of a setting.
pub fn side_stone_radius(base: f64) -> f64 {
    (base / SIDE_STONE_RATIO).floor().max(SIDE_STONE_MIN_RADIUS)
}

fn halo_ring(shape: Option<GemShape>, main: &StoneOutline, center: Point, base: f64) -> HaloRing {
    let hw = main.half_width + HALO_PADDING;
    let hh = main.half_height + HALO_PADDING;
    let outline = match shape {
        Some(GemShape::Cushion) => Shape::RoundedRect {
            center,
            half_w: hw,
            half_h: hh,
            r: half_size(base) * CUSHION_CORNER_RATIO + HALO_PADDING,
        },
        Some(GemShape::Princess) => Shape::RoundedRect {
            center,
            half_w: hw,
            half_h: hh,
            r: HALO_PADDING,
        },
        _ => Shape::Ellipse {
            center,
            rx: hw,
            ry: hh,
        },
    };
    HaloRing {
        outline,
        half_width: hw,
        half_height: hh,
    }
}

fn place(
    side: StoneSide,
    slot: Slot,
    shape: SideStoneShape,
    center: Point,
    radius: f64,
) -> Option<PlacedStone> {
    let orientation = side.facing();
    let outline = side_stone_outline(shape, center, radius, orientation)?;
    Some(PlacedStone {
        side,
        slot,
        shape,
        center,
        radius,
        orientation,
        outline,
    })
}

/// Lay out the auxiliary geometry of `style` around a main stone.
///
/// `side_shapes` holds one shape for three-stone and (top, bottom, outer) for
/// seven-stone; missing entries default to round.
pub fn layout_setting(
    style: SettingStyle,
    main_shape: Option<GemShape>,
    main: &StoneOutline,
    center: Point,
    base: f64,
    side_shapes: &[SideStoneShape],
) -> SettingLayout {
    let pick = |i: usize| side_shapes.get(i).copied().unwrap_or(SideStoneShape::Round);
    let mut out = SettingLayout {
        style,
        halo: None,
        stones: Vec::new(),
        total_setting_width: base,
    };
    match style {
        SettingStyle::Solitaire => {}
        SettingStyle::Halo => {
            out.halo = Some(halo_ring(main_shape, main, center, base));
            out.total_setting_width += 2.0 * HALO_PADDING;
        }
        SettingStyle::ThreeStone => {
            let r = side_stone_radius(base);
            let dx = main.half_width + r;
            for side in [StoneSide::Left, StoneSide::Right] {
                let c = center.offset(side.sign() * dx, 0.0);
                out.stones.extend(place(side, Slot::Inner, pick(0), c, r));
            }
            out.total_setting_width += THREE_STONE_WIDTH_FACTOR * r;
        }
        SettingStyle::SevenStone => {
            let r = side_stone_radius(base);
            let inner_dx = main.half_width + r;
            let outer_dx = main.half_width + 3.0 * r;
            for side in [StoneSide::Left, StoneSide::Right] {
                let facing = side.facing();
                // Stack the inner pair on their rendered heights.
                let top_h = side_stone_outline(pick(0), center, r, facing)
                    .map_or(r, |o| o.half_height);
                let bottom_h = side_stone_outline(pick(1), center, r, facing)
                    .map_or(r, |o| o.half_height);
                let half_gap = STACK_GAP / 2.0;
                let x = side.sign() * inner_dx;
                out.stones.extend(place(
                    side,
                    Slot::InnerTop,
                    pick(0),
                    center.offset(x, -(top_h + half_gap)),
                    r,
                ));
                out.stones.extend(place(
                    side,
                    Slot::InnerBottom,
                    pick(1),
                    center.offset(x, bottom_h + half_gap),
                    r,
                ));
                out.stones.extend(place(
                    side,
                    Slot::Outer,
                    pick(2),
                    center.offset(side.sign() * outer_dx, 0.0),
                    r,
                ));
            }
            out.total_setting_width += SEVEN_STONE_WIDTH_FACTOR * r;
        }
    }
    debug!(
        style = style.as_str(),
        stones = out.stones.len(),
        halo = out.halo.is_some(),
        total_setting_width = out.total_setting_width,
        "setting laid out"
    );
    out
}

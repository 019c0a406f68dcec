//! Dimension pass: every extent and position of a sketch, computed before
//! anything is drawn.

use ring_core::{Carat, Choice, GemShape, MetalType, RingDesign, SettingStyle, SideStoneShape};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::band::{BandLayout, layout_band};
use crate::constants::*;
use crate::geometry::{Bounds, Point};
use crate::scene::Shape;
use crate::setting::{SettingLayout, layout_setting};
use crate::shapes::{StoneOutline, base_size, fallback_outline, stone_outline};
use crate::side_stones::prongs;

/// Inputs to one sketch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SketchRequest {
    pub shape: Choice<GemShape>,
    pub carat: Carat,
    pub metal: MetalType,
    pub setting: Choice<SettingStyle>,
    /// One shape for three-stone, (top, bottom, outer) for seven-stone.
    pub side_stones: Vec<SideStoneShape>,
}

impl SketchRequest {
    pub fn new(
        shape: GemShape,
        carat: Carat,
        metal: MetalType,
        setting: SettingStyle,
        side_stones: &[SideStoneShape],
    ) -> Self {
        SketchRequest {
            shape: Choice::Known(shape),
            carat,
            metal,
            setting: Choice::Known(setting),
            side_stones: side_stones.to_vec(),
        }
    }

    pub fn from_design(d: &RingDesign) -> Self {
        SketchRequest {
            shape: d.shape.clone(),
            carat: d.carat,
            metal: d.metal,
            setting: d.setting.clone(),
            side_stones: d.side_stones.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MainStone {
    pub shape: Option<GemShape>,
    pub center: Point,
    pub base: f64,
    pub outline: StoneOutline,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SketchLayout {
    pub metal: MetalType,
    pub main: MainStone,
    pub setting: SettingLayout,
    pub band: BandLayout,
    /// Main-stone prongs first, then four per auxiliary stone in placement
    /// order.
    pub prongs: Vec<Shape>,
    /// Messages drawn on the canvas for fallbacks that were taken.
    pub warnings: Vec<String>,
}

impl SketchLayout {
    pub fn total_setting_width(&self) -> f64 {
        self.setting.total_setting_width
    }

    /// Box covering every stone, ring and prong (band excluded).
    pub fn footprint(&self) -> Bounds {
        let mut b = self.main.outline.body.bounds();
        if let Some(h) = &self.setting.halo {
            b = b.union(h.outline.bounds());
        }
        for s in &self.setting.stones {
            b = b.union(s.outline.body.bounds());
        }
        for p in &self.prongs {
            b = b.union(p.bounds());
        }
        b
    }
}

/// Characters in the longest warning line that still fits the canvas width.
fn label_capacity() -> usize {
    ((CANVAS_SIZE - 2.0 * WARNING_X) / (WARNING_FONT_SIZE * TEXT_ADVANCE_RATIO)).floor() as usize
}

/// `{prefix}{name}{suffix}` with `name` shortened to keep the line on the
/// canvas. Characters XML cannot carry are dropped.
fn warning_label(prefix: &str, name: &str, suffix: &str) -> String {
    let room = label_capacity().saturating_sub(prefix.chars().count() + suffix.chars().count());
    let clean: Vec<char> = name
        .chars()
        .filter(|c| !c.is_control() && !matches!(*c, '\u{FFFE}' | '\u{FFFF}'))
        .collect();
    let shown: String = if clean.len() <= room {
        clean.into_iter().collect()
    } else {
        clean[..room.saturating_sub(1)]
            .iter()
            .chain(std::iter::once(&'…'))
            .collect()
    };
    format!("{prefix}{shown}{suffix}")
}

/// Compute the full layout for `req`. Never fails: unrecognized shapes draw a
/// plain square and unrecognized settings draw as solitaire, each with a
/// warning.
#[instrument(skip_all, fields(shape = ?req.shape, setting = ?req.setting, carat = req.carat.get()))]
pub fn compute_layout(req: &SketchRequest) -> SketchLayout {
    let center = Point::new(CENTER_X, CENTER_Y);
    let base = base_size(req.carat.get());
    let mut warnings = Vec::new();

    let shape = req.shape.known();
    let outline = match &req.shape {
        Choice::Known(s) => stone_outline(*s, center, base),
        Choice::Unrecognized(name) => {
            warn!(shape = %name, "drawing fallback outline");
            warnings.push(warning_label("Unrecognized shape: ", name, ""));
            fallback_outline(center, base)
        }
    };

    let style = match &req.setting {
        Choice::Known(s) => *s,
        Choice::Unrecognized(name) => {
            warn!(setting = %name, "drawing as solitaire");
            warnings.push(warning_label(
                "Unrecognized setting: ",
                name,
                " (shown as solitaire)",
            ));
            SettingStyle::Solitaire
        }
    };

    let setting = layout_setting(style, shape, &outline, center, base, &req.side_stones);
    let band = layout_band(
        setting.total_setting_width,
        outline.half_width,
        shape,
        style,
    );

    let mut prong_shapes: Vec<Shape> =
        prongs(center, outline.half_width, outline.half_height, base).into();
    for s in &setting.stones {
        prong_shapes.extend(prongs(
            s.center,
            s.outline.half_width,
            s.outline.half_height,
            2.0 * s.radius,
        ));
    }

    SketchLayout {
        metal: req.metal,
        main: MainStone {
            shape,
            center,
            base,
            outline,
        },
        setting,
        band,
        prongs: prong_shapes,
        warnings,
    }
}

//! Draw pass: turns a [`SketchLayout`] into an ordered [`Scene`].

use tracing::instrument;

use crate::constants::*;
use crate::geometry::Point;
use crate::layout::SketchLayout;
use crate::scene::{Layer, Paint, Scene, Shape};

/// Paint order is band, main stone, setting, prongs, then warnings, so prongs
/// sit over the stone and band seam.
#[instrument(skip_all, fields(primitives = tracing::field::Empty))]
pub fn render_layout(layout: &SketchLayout) -> Scene {
    let metal = layout.metal.hex();
    let stone = Paint::fill_and_stroke(STONE_FILL, STONE_STROKE, STONE_STROKE_WIDTH);
    let mut sc = Scene::new(CANVAS_SIZE, CANVAS_SIZE);

    for s in [&layout.band.left, &layout.band.right].into_iter().flatten() {
        sc.push(Layer::Band, s.shape.clone(), Paint::fill(&metal));
    }

    let main = &layout.main.outline;
    sc.push(Layer::MainStone, main.body.clone(), stone.clone());
    for (a, b) in &main.facets {
        sc.push(
            Layer::Facet,
            Shape::Line(*a, *b),
            Paint::stroke(STONE_STROKE, FACET_STROKE_WIDTH),
        );
    }

    if let Some(h) = &layout.setting.halo {
        sc.push(
            Layer::Halo,
            h.outline.clone(),
            Paint::stroke(&metal, HALO_STROKE_WIDTH),
        );
    }
    for s in &layout.setting.stones {
        sc.push(Layer::SideStone, s.outline.body.clone(), stone.clone());
    }

    for p in &layout.prongs {
        sc.push(Layer::Prong, p.clone(), Paint::fill(&metal));
    }

    for (i, w) in layout.warnings.iter().enumerate() {
        sc.push(
            Layer::Warning,
            Shape::Text {
                at: Point::new(WARNING_X, WARNING_Y + i as f64 * WARNING_LINE_GAP),
                content: w.clone(),
                size: WARNING_FONT_SIZE,
            },
            Paint::fill(WARNING_COLOR),
        );
    }
    tracing::Span::current().record("primitives", sc.primitives.len());
    sc
}

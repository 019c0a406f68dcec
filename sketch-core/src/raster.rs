//! SVG → pixels → PNG.

use std::path::Path;
use std::sync::Arc;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use tracing::{debug, instrument, warn};

use crate::constants::{CANVAS_PX, PREFERRED_SANS_FAMILIES};
use crate::error::SketchError;
use crate::layout::{SketchRequest, compute_layout};
use crate::render::render_layout;
use crate::scene::{Layer, Scene};

/// A finished sketch. Opaque RGB on a white background.
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    pixmap: tiny_skia::Pixmap,
}

impl Sketch {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// RGB at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue()])
    }

    /// Row-major RGB bytes, three per pixel.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 3);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue()]);
        }
        out
    }

    /// PNG bytes; identical sketches encode to identical bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, SketchError> {
        let rgb = self.to_rgb();
        let mut buf = Vec::new();
        {
            let mut enc = Encoder::new(&mut buf, self.width(), self.height());
            enc.set_color(ColorType::Rgb);
            enc.set_depth(BitDepth::Eight);
            enc.set_filter(FilterType::NoFilter);
            enc.set_compression(Compression::Default);
            let mut writer = enc.write_header()?;
            writer.write_image_data(&rgb)?;
        }
        Ok(buf)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SketchError> {
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

fn family_of(face: &usvg::fontdb::FaceInfo) -> Option<String> {
    face.families.first().map(|(n, _)| n.clone())
}

/// Family to serve generic `sans-serif`: the first preferred family that is
/// installed, otherwise the first loaded face.
fn sans_serif_family(fontdb: &usvg::fontdb::Database) -> Option<String> {
    PREFERRED_SANS_FAMILIES
        .iter()
        .find_map(|want| {
            fontdb
                .faces()
                .filter_map(family_of)
                .find(|name| name.eq_ignore_ascii_case(want))
        })
        .or_else(|| fontdb.faces().next().and_then(family_of))
}

fn options_for(scene: &Scene) -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    // Fonts are only needed for warning labels.
    if scene.count(Layer::Warning) > 0 {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        // fontdb maps sans-serif to Arial, which most hosts lack.
        match sans_serif_family(&fontdb) {
            Some(name) => {
                debug!(family = %name, "sans-serif mapped");
                fontdb.set_sans_serif_family(name);
            }
            None => warn!("no fonts found, warning labels will not be drawn"),
        }
        opt.fontdb = Arc::new(fontdb);
    }
    opt
}

/// Rasterize a scene at its own size.
#[instrument(skip_all, fields(primitives = scene.primitives.len()))]
pub fn rasterize(scene: &Scene) -> Result<Sketch, SketchError> {
    let svg = scene.to_svg();
    let opt = options_for(scene);
    let tree =
        usvg::Tree::from_str(&svg, &opt).map_err(|e| SketchError::Svg(format!("{e:?}")))?;
    let (w, h) = (scene.width.ceil() as u32, scene.height.ceil() as u32);
    let mut pixmap = tiny_skia::Pixmap::new(w, h).ok_or(SketchError::PixmapAlloc(w, h))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    debug!(w, h, svg_bytes = svg.len(), "sketch rasterized");
    Ok(Sketch { pixmap })
}

/// Scene for `req` without rasterizing it.
pub fn build_scene(req: &SketchRequest) -> Scene {
    render_layout(&compute_layout(req))
}

/// Full pipeline: layout, draw list, pixels. Always a
/// `CANVAS_PX`×`CANVAS_PX` image.
pub fn render_sketch(req: &SketchRequest) -> Result<Sketch, SketchError> {
    let sketch = rasterize(&build_scene(req))?;
    debug_assert_eq!(sketch.width(), CANVAS_PX);
    Ok(sketch)
}

/// SVG document for `req`.
pub fn render_svg(req: &SketchRequest) -> String {
    build_scene(req).to_svg()
}

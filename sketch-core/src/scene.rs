//! Ordered drawing list and its SVG serialization.

use serde::Serialize;

use crate::constants::*;
use crate::geometry::{Bounds, Point, bounds_of};

/// Geometry of one drawable element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Shape {
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    Rect {
        center: Point,
        half_w: f64,
        half_h: f64,
    },
    RoundedRect {
        center: Point,
        half_w: f64,
        half_h: f64,
        r: f64,
    },
    Polygon(Vec<Point>),
    Line(Point, Point),
    Text {
        at: Point,
        content: String,
        size: f64,
    },
}

impl Shape {
    /// Geometric extent, excluding stroke width. Text is estimated from its
    /// font size.
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Ellipse { center, rx, ry } => Bounds::around(*center, *rx, *ry),
            Shape::Rect {
                center,
                half_w,
                half_h,
            }
            | Shape::RoundedRect {
                center,
                half_w,
                half_h,
                ..
            } => Bounds::around(*center, *half_w, *half_h),
            Shape::Polygon(pts) => bounds_of(pts).unwrap_or(Bounds {
                min: Point::default(),
                max: Point::default(),
            }),
            Shape::Line(a, b) => Bounds {
                min: Point::new(a.x.min(b.x), a.y.min(b.y)),
                max: Point::new(a.x.max(b.x), a.y.max(b.y)),
            },
            Shape::Text { at, content, size } => {
                let w = content.chars().count() as f64 * size * TEXT_ADVANCE_RATIO;
                Bounds {
                    min: Point::new(at.x, at.y - size),
                    max: Point::new(at.x + w, at.y + size * 0.25),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Paint {
    pub fn fill(color: &str) -> Self {
        Paint {
            fill: Some(color.to_string()),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn stroke(color: &str, width: f64) -> Self {
        Paint {
            fill: None,
            stroke: Some(color.to_string()),
            stroke_width: width,
        }
    }

    pub fn fill_and_stroke(fill: &str, stroke: &str, width: f64) -> Self {
        Paint {
            fill: Some(fill.to_string()),
            stroke: Some(stroke.to_string()),
            stroke_width: width,
        }
    }
}

/// What a primitive depicts. Used by tests and layout dumps; drawing only
/// cares about list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Layer {
    Band,
    MainStone,
    Facet,
    Halo,
    SideStone,
    Prong,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
    pub paint: Paint,
}

/// Drawing list; later entries paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn paint_attrs(p: &Paint) -> String {
    let mut out = format!(
        " fill=\"{}\"",
        p.fill.as_deref().unwrap_or("none")
    );
    match &p.stroke {
        Some(s) if p.stroke_width > 0.0 => {
            out.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linejoin=\"round\"",
                s, p.stroke_width
            ));
        }
        _ => out.push_str(" stroke=\"none\""),
    }
    out
}

fn path_from_points(pts: &[Point]) -> String {
    let Some(first) = pts.first() else {
        return String::new();
    };
    let mut out = format!("M {:.2} {:.2}", first.x, first.y);
    for p in &pts[1..] {
        out.push_str(&format!(" L {:.2} {:.2}", p.x, p.y));
    }
    out.push_str(" Z");
    out
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Scene {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, shape: Shape, paint: Paint) {
        self.primitives.push(Primitive {
            layer,
            shape,
            paint,
        });
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.primitives.iter().filter(|p| p.layer == layer).count()
    }

    pub fn to_svg(&self) -> String {
        let mut s = String::new();
        s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        s.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        ));
        s.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            BACKGROUND
        ));
        for p in &self.primitives {
            let attrs = paint_attrs(&p.paint);
            let el = match &p.shape {
                Shape::Ellipse { center, rx, ry } => format!(
                    "<ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\"{}/>",
                    center.x, center.y, rx, ry, attrs
                ),
                Shape::Rect {
                    center,
                    half_w,
                    half_h,
                } => format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"{}/>",
                    center.x - half_w,
                    center.y - half_h,
                    half_w * 2.0,
                    half_h * 2.0,
                    attrs
                ),
                Shape::RoundedRect {
                    center,
                    half_w,
                    half_h,
                    r,
                } => format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\"{}/>",
                    center.x - half_w,
                    center.y - half_h,
                    half_w * 2.0,
                    half_h * 2.0,
                    r,
                    r,
                    attrs
                ),
                Shape::Polygon(pts) => {
                    if pts.is_empty() {
                        continue;
                    }
                    format!("<path d=\"{}\"{}/>", path_from_points(pts), attrs)
                }
                Shape::Line(a, b) => format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"{}/>",
                    a.x, a.y, b.x, b.y, attrs
                ),
                Shape::Text { at, content, size } => format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.0}\"{}>{}</text>",
                    at.x,
                    at.y,
                    size,
                    attrs,
                    svg_escape(content)
                ),
            };
            s.push_str(&el);
            s.push('\n');
        }
        s.push_str("</svg>\n");
        s
    }
}

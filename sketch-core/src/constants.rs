//! Sketch dimensions and ratios. Values are canvas pixels unless noted.

// ── Canvas ──────────────────────────────────────────────────────────
pub const CANVAS_SIZE: f64 = 500.0;
pub const CANVAS_PX: u32 = 500;
pub const CENTER_X: f64 = 250.0;
pub const CENTER_Y: f64 = 250.0;

// ── Main stone ──────────────────────────────────────────────────────
/// Pixels of base size per carat.
pub const CARAT_SCALE: f64 = 35.0;
/// Every half-extent is at least this large.
pub const MIN_EXTENT: f64 = 1.0;
pub const OVAL_HEIGHT_RATIO: f64 = 1.4;
/// Corner cut of the emerald/radiant octagon, as a fraction of h.
pub const OCTAGON_CUT_RATIO: f64 = 0.25;
/// Cushion corner radius, as a fraction of h.
pub const CUSHION_CORNER_RATIO: f64 = 1.0 / 3.0;
pub const PEAR_APEX_RATIO: f64 = 1.3;
pub const PEAR_BASE_RATIO: f64 = 1.2;
pub const PEAR_BASE_HALF_WIDTH_RATIO: f64 = 0.5;
pub const MARQUISE_LONG_RATIO: f64 = 1.5;
pub const MARQUISE_SHORT_RATIO: f64 = 0.8;

// ── Setting ─────────────────────────────────────────────────────────
pub const HALO_PADDING: f64 = 8.0;
/// Side-stone radius is base size divided by this.
pub const SIDE_STONE_RATIO: f64 = 3.5;
pub const SIDE_STONE_MIN_RADIUS: f64 = 3.0;
pub const THREE_STONE_WIDTH_FACTOR: f64 = 4.0;
pub const SEVEN_STONE_WIDTH_FACTOR: f64 = 6.0;
/// Vertical gap between stacked seven-stone side stones.
pub const STACK_GAP: f64 = 1.0;

// ── Prongs ──────────────────────────────────────────────────────────
pub const PRONG_RATIO: f64 = 0.05;
pub const PRONG_MIN_RADIUS: f64 = 2.0;

// ── Band ────────────────────────────────────────────────────────────
pub const BAND_THICKNESS: f64 = 12.0;

// ── Paint ───────────────────────────────────────────────────────────
pub const BACKGROUND: &str = "#ffffff";
pub const STONE_FILL: &str = "#e8f4fb";
pub const STONE_STROKE: &str = "#4a5a68";
pub const STONE_STROKE_WIDTH: f64 = 1.5;
pub const FACET_STROKE_WIDTH: f64 = 0.8;
pub const HALO_STROKE_WIDTH: f64 = 3.0;
pub const WARNING_COLOR: &str = "#b00020";
pub const WARNING_FONT_SIZE: f64 = 14.0;
pub const WARNING_X: f64 = 10.0;
pub const WARNING_Y: f64 = 20.0;
pub const WARNING_LINE_GAP: f64 = 18.0;
/// Estimated glyph advance as a fraction of font size.
pub const TEXT_ADVANCE_RATIO: f64 = 0.6;
/// Looked up in order before falling back to any installed face.
pub const PREFERRED_SANS_FAMILIES: [&str; 5] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Helvetica",
    "Arial",
];

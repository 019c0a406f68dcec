//! Rendered sketches for reference selections, checked at the pixel level.

use ring_core::{Carat, Choice, GemShape, MetalType, SettingStyle, SideStoneShape};
use sketch_core::constants::*;
use sketch_core::setting::StoneSide;
use sketch_core::side_stones::Orientation;
use sketch_core::{Layer, SketchRequest, compute_layout, render_sketch, render_svg};

const WHITE: [u8; 3] = [255, 255, 255];
const YELLOW_GOLD: [u8; 3] = [212, 175, 55];

fn one_carat(shape: GemShape, setting: SettingStyle, side: &[SideStoneShape]) -> SketchRequest {
    SketchRequest::new(
        shape,
        Carat::new(1.0).unwrap(),
        MetalType::YellowGold,
        setting,
        side,
    )
}

#[test]
fn round_solitaire_one_carat() {
    let req = one_carat(GemShape::Round, SettingStyle::Solitaire, &[]);
    let layout = compute_layout(&req);
    assert_eq!(layout.main.outline.half_width, 17.0);
    assert_eq!(layout.main.outline.half_height, 17.0);
    assert_eq!(layout.prongs.len(), 4);
    assert_eq!(layout.band.left.as_ref().unwrap().x0, 0.0);
    assert_eq!(layout.band.left.as_ref().unwrap().x1, 233.0);
    assert_eq!(layout.band.right.as_ref().unwrap().x0, 267.0);
    assert_eq!(layout.band.right.as_ref().unwrap().x1, 500.0);

    let sketch = render_sketch(&req).unwrap();
    assert_eq!((sketch.width(), sketch.height()), (CANVAS_PX, CANVAS_PX));
    // band
    assert_eq!(sketch.pixel(100, 250), Some(YELLOW_GOLD));
    assert_eq!(sketch.pixel(400, 250), Some(YELLOW_GOLD));
    assert_eq!(sketch.pixel(229, 250), Some(YELLOW_GOLD));
    // prong on the top-left corner of the stone's box
    assert_eq!(sketch.pixel(233, 233), Some(YELLOW_GOLD));
    // stone interior and background
    assert_eq!(sketch.pixel(250, 250), Some([0xe8, 0xf4, 0xfb]));
    assert_eq!(sketch.pixel(250, 100), Some(WHITE));
    assert_eq!(sketch.pixel(100, 240), Some(WHITE));
    assert_eq!(sketch.pixel(500, 0), None);
}

#[test]
fn round_halo_shortens_band() {
    let solitaire = compute_layout(&one_carat(GemShape::Round, SettingStyle::Solitaire, &[]));
    let halo_req = one_carat(GemShape::Round, SettingStyle::Halo, &[]);
    let halo = compute_layout(&halo_req);

    let span = |l: &sketch_core::SketchLayout| {
        let left = l.band.left.as_ref().unwrap();
        let right = l.band.right.as_ref().unwrap();
        (left.x1 - left.x0) + (right.x1 - right.x0)
    };
    assert_eq!(span(&solitaire) - span(&halo), 2.0 * HALO_PADDING);
    assert!(halo.setting.stones.is_empty());

    let sketch = render_sketch(&halo_req).unwrap();
    assert_eq!(sketch.pixel(220, 250), Some(YELLOW_GOLD));
    // gap between stone and halo ring, where the solitaire band would be
    assert_eq!(sketch.pixel(229, 250), Some(WHITE));
}

#[test]
fn three_stone_marquise_faces_main_stone() {
    let req = one_carat(
        GemShape::Round,
        SettingStyle::ThreeStone,
        &[SideStoneShape::Marquise],
    );
    let layout = compute_layout(&req);
    assert_eq!(layout.setting.stones.len(), 2);
    let left = &layout.setting.stones[0];
    let right = &layout.setting.stones[1];
    assert_eq!(left.side, StoneSide::Left);
    assert_eq!(left.orientation, Orientation::Right);
    assert_eq!(right.orientation, Orientation::Left);
    assert!(left.outline.half_width > left.outline.half_height);

    let sketch = render_sketch(&req).unwrap();
    assert_ne!(sketch.pixel(223, 250), Some(WHITE));
    // an upright marquise would reach this far above center
    assert_eq!(sketch.pixel(223, 238), Some(WHITE));
    assert_eq!(sketch.pixel(277, 238), Some(WHITE));
}

#[test]
fn platinum_band_color() {
    let req = SketchRequest::new(
        GemShape::Emerald,
        Carat::new(2.0).unwrap(),
        MetalType::Platinum,
        SettingStyle::Solitaire,
        &[],
    );
    let sketch = render_sketch(&req).unwrap();
    assert_eq!(sketch.pixel(50, 250), Some(MetalType::Platinum.rgb()));
}

#[test]
fn unrecognized_inputs_still_render() {
    let mut req = one_carat(GemShape::Round, SettingStyle::Solitaire, &[]);
    req.shape = Choice::Unrecognized("Heart".into());
    req.setting = Choice::Unrecognized("pave".into());
    let layout = compute_layout(&req);
    assert_eq!(layout.warnings.len(), 2);

    let svg = render_svg(&req);
    assert!(svg.contains("Unrecognized shape: Heart"));
    assert!(svg.contains("<text"));

    let sketch = render_sketch(&req).unwrap();
    assert_eq!(sketch.pixel(100, 250), Some(YELLOW_GOLD));

    // both label lines reach the pixels
    let reddish = |y0: u32, y1: u32| {
        (y0..y1)
            .flat_map(|y| (0..400).map(move |x| (x, y)))
            .filter_map(|(x, y)| sketch.pixel(x, y))
            .filter(|[r, g, b]| *r > 120 && *g < 60 && *b < 80)
            .count()
    };
    assert!(reddish(0, 24) > 20, "shape warning not drawn");
    assert!(reddish(24, 44) > 20, "setting warning not drawn");
}

#[test]
fn long_unrecognized_setting_label_stays_on_canvas() {
    let mut req = one_carat(GemShape::Round, SettingStyle::Solitaire, &[]);
    req.setting = Choice::Unrecognized("cathedral-pave-setting".into());
    let scene = sketch_core::build_scene(&req);
    assert_eq!(scene.count(Layer::Warning), 1);
    for p in &scene.primitives {
        let b = p.shape.bounds().grow(p.paint.stroke_width / 2.0);
        assert!(b.within(CANVAS_SIZE, CANVAS_SIZE), "{:?} {:?}", p.layer, b);
    }
}

#[test]
fn seven_stone_max_carat_stays_on_canvas() {
    let req = SketchRequest::new(
        GemShape::Oval,
        Carat::new(3.0).unwrap(),
        MetalType::RoseGold,
        SettingStyle::SevenStone,
        &[
            SideStoneShape::Pear,
            SideStoneShape::Pear,
            SideStoneShape::Marquise,
        ],
    );
    let scene = sketch_core::build_scene(&req);
    assert_eq!(scene.count(Layer::SideStone), 6);
    for p in &scene.primitives {
        let b = p.shape.bounds().grow(p.paint.stroke_width / 2.0);
        assert!(b.within(CANVAS_SIZE, CANVAS_SIZE), "{:?} leaves the canvas", p.layer);
    }
}

#[test]
fn png_is_deterministic() {
    let req = one_carat(
        GemShape::Pear,
        SettingStyle::SevenStone,
        &[
            SideStoneShape::Round,
            SideStoneShape::Pear,
            SideStoneShape::Marquise,
        ],
    );
    let a = render_sketch(&req).unwrap().encode_png().unwrap();
    let b = render_sketch(&req).unwrap().encode_png().unwrap();
    assert_eq!(a, b);
    assert_eq!(&a[1..4], b"PNG");
}

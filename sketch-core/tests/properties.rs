use proptest::prelude::*;
use ring_core::{Carat, Choice, GemShape, MetalType, SettingStyle, SideStoneShape};
use sketch_core::constants::{CANVAS_SIZE, CENTER_X};
use sketch_core::setting::StoneSide;
use sketch_core::{SketchRequest, build_scene, compute_layout, render_sketch};

fn carat() -> impl Strategy<Value = Carat> {
    (50u32..=300).prop_map(|c| Carat::new(c as f64 / 100.0).unwrap())
}

/// Mostly known values, sometimes an arbitrary unrecognized name.
fn choice<T: Clone + std::fmt::Debug + 'static>(known: &[T]) -> impl Strategy<Value = Choice<T>> {
    prop_oneof![
        4 => prop::sample::select(known.to_vec()).prop_map(Choice::Known),
        1 => any::<String>().prop_map(Choice::Unrecognized),
    ]
}

fn request() -> impl Strategy<Value = SketchRequest> {
    (
        choice(&GemShape::ALL),
        carat(),
        prop::sample::select(MetalType::ALL.to_vec()),
        choice(&SettingStyle::ALL),
        prop::collection::vec(prop::sample::select(SideStoneShape::ALL.to_vec()), 0..=3),
    )
        .prop_map(|(shape, carat, metal, setting, side_stones)| SketchRequest {
            shape,
            carat,
            metal,
            setting,
            side_stones,
        })
}

proptest! {
    #[test]
    fn layout_is_deterministic(req in request()) {
        prop_assert_eq!(compute_layout(&req), compute_layout(&req));
        prop_assert_eq!(build_scene(&req).to_svg(), build_scene(&req).to_svg());
    }

    #[test]
    fn everything_stays_on_canvas(req in request()) {
        let scene = build_scene(&req);
        for p in &scene.primitives {
            let b = p.shape.bounds().grow(p.paint.stroke_width / 2.0);
            prop_assert!(b.within(CANVAS_SIZE, CANVAS_SIZE), "{:?} {:?}", p.layer, b);
        }
    }

    #[test]
    fn bigger_stones_are_never_narrower(
        shape in prop::sample::select(GemShape::ALL.to_vec()),
        a in carat(),
        b in carat(),
    ) {
        let (small, big) = if a.get() <= b.get() { (a, b) } else { (b, a) };
        let hw = |c: Carat| {
            let req = SketchRequest::new(shape, c, MetalType::WhiteGold, SettingStyle::Solitaire, &[]);
            compute_layout(&req).main.outline.half_width
        };
        prop_assert!(hw(small) <= hw(big));
    }

    #[test]
    fn setting_width_never_below_base(req in request()) {
        let l = compute_layout(&req);
        prop_assert!(l.total_setting_width() >= l.main.base);
        prop_assert!(l.band.setting_half_width >= l.main.outline.half_width);
    }

    #[test]
    fn side_stones_mirror_about_center(
        req in request().prop_filter("needs side stones", |r| {
            r.setting.known().is_some_and(|s| s.side_stone_slots() > 0)
        })
    ) {
        let l = compute_layout(&req);
        let stones = &l.setting.stones;
        let r0 = stones[0].radius;
        for s in stones {
            prop_assert_eq!(s.radius, r0);
            if s.side != StoneSide::Left {
                continue;
            }
            let twin = stones
                .iter()
                .find(|t| t.side == StoneSide::Right && t.slot == s.slot);
            prop_assert!(twin.is_some());
            let twin = twin.unwrap();
            prop_assert!(((CENTER_X - s.center.x) - (twin.center.x - CENTER_X)).abs() < 1e-9);
            prop_assert_eq!(s.center.y, twin.center.y);
            prop_assert_eq!(s.outline.half_width, twin.outline.half_width);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn png_bytes_are_reproducible(req in request()) {
        let a = render_sketch(&req).unwrap().encode_png().unwrap();
        let b = render_sketch(&req).unwrap().encode_png().unwrap();
        prop_assert_eq!(a, b);
    }
}

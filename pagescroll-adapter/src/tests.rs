use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use pagescroll::{IntersectionRecord, SectionGeometry};

const ALL_EASINGS: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseInOutCubic,
    Easing::EaseOutQuad,
    Easing::EaseOutQuart,
    Easing::EaseOutExpo,
];

const EASED_VARIANTS: [ScrollVariant; 3] = [
    ScrollVariant::EasedCubic {
        duration_ms: CUBIC_DURATION_MS,
    },
    ScrollVariant::EasedQuartic,
    ScrollVariant::EasedExponential,
];

/// A page where `#id` elements sit at fixed document tops; lookups report viewport-relative
/// tops for the given scroll offset, like a bounding-rect query.
fn page(scroll_offset: f64) -> impl FnMut(&str) -> Option<f64> {
    move |selector| {
        let doc_top = match selector {
            "#home" => 0.0,
            "#about" => 900.0,
            "#services" => 1_800.0,
            "#contact" => 4_000.0,
            _ => return None,
        };
        Some(doc_top - scroll_offset)
    }
}

fn run_to_completion(engine: &mut ScrollEngine, start_ms: u64) -> Vec<f64> {
    let mut offsets = Vec::new();
    let mut now_ms = start_ms;
    while let Some(off) = engine.tick(now_ms) {
        offsets.push(off);
        now_ms += 16;
        assert!(offsets.len() < 1_000, "tween never finished");
    }
    offsets
}

// --- easing / tween ---

#[test]
fn easing_curves_hit_endpoints_exactly() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn easing_curves_are_monotonic_and_in_range() {
    for easing in ALL_EASINGS {
        let mut prev = 0.0;
        for i in 0..=200 {
            let v = easing.sample(i as f64 / 200.0);
            assert!((0.0..=1.0).contains(&v), "{easing:?} out of range: {v}");
            assert!(v >= prev, "{easing:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn easing_shapes() {
    assert_eq!(Easing::EaseInOutCubic.sample(0.5), 0.5);
    // Ease-out curves front-load progress.
    assert!(Easing::EaseOutQuart.sample(0.25) > 0.6);
    assert!(Easing::EaseOutExpo.sample(0.25) > 0.8);
    assert!(Easing::EaseOutQuad.sample(0.5) == 0.75);
    // Out-of-range input is clamped.
    assert_eq!(Easing::EaseOutQuart.sample(1.7), 1.0);
    assert_eq!(Easing::Linear.sample(-0.3), 0.0);
}

#[test]
fn tween_waits_for_first_tick_and_lands_exactly() {
    let mut tween = Tween::new(0.1, 0.3, 100, Easing::EaseInOutCubic);
    assert_eq!(tween.progress(5_000), 0.0);
    assert_eq!(tween.start(1_000), 1_000);
    assert_eq!(tween.start(1_050), 1_000);

    assert_eq!(tween.sample(1_000), 0.1);
    assert!(!tween.is_done(1_099));
    assert!(tween.is_done(1_100));
    assert_eq!(tween.sample(1_100), 0.3);
    assert_eq!(tween.sample(9_999), 0.3);
}

#[test]
fn zero_duration_tween_is_clamped_to_one_ms() {
    let tween = Tween::new(0.0, 50.0, 0, Easing::Linear).starting_at(10);
    assert_eq!(tween.duration_ms, 1);
    assert_eq!(tween.sample(11), 50.0);
}

// --- target resolution ---

#[test]
fn target_offset_subtracts_header_and_clamps() {
    assert_eq!(target_offset(1_000.0, 0.0, DEFAULT_HEADER_OFFSET), 920.0);
    assert_eq!(target_offset(-200.0, 1_200.0, DEFAULT_HEADER_OFFSET), 920.0);
    assert_eq!(target_offset(30.0, 0.0, DEFAULT_HEADER_OFFSET), 0.0);
}

#[test]
fn resolve_target_reports_missing_selector() {
    let mut lookup = page(0.0);
    assert_eq!(resolve_target(&mut lookup, "#about", 0.0, 80.0), Some(820.0));
    assert_eq!(resolve_target(&mut lookup, "#pricing", 0.0, 80.0), None);
}

#[test]
fn variant_policies() {
    assert_eq!(
        ScrollVariant::eased_cubic().animation(),
        Some((800, Easing::EaseInOutCubic))
    );
    assert_eq!(
        ScrollVariant::EasedQuartic.animation(),
        Some((600, Easing::EaseOutQuart))
    );
    assert_eq!(
        ScrollVariant::EasedExponential.animation(),
        Some((400, Easing::EaseOutExpo))
    );
    assert_eq!(ScrollVariant::NativeSmooth.animation(), None);
    assert_eq!(ScrollVariant::InstantNative.animation(), None);
    assert_eq!(
        ScrollVariant::InstantNative.native_behavior(),
        Some(ScrollBehavior::Instant)
    );
    assert_eq!(ScrollVariant::default(), ScrollVariant::NativeSmooth);
}

// --- engine ---

#[test]
fn missing_target_is_a_no_op() {
    let mut engine = ScrollEngine::new();
    let mut lookup = page(300.0);
    for variant in [
        ScrollVariant::NativeSmooth,
        ScrollVariant::InstantNative,
        ScrollVariant::EasedQuartic,
    ] {
        assert_eq!(engine.scroll_to("#missing", variant, 300.0, &mut lookup), None);
        assert!(!engine.is_animating());
        assert_eq!(engine.tick(0), None);
    }
}

#[test]
fn missing_target_leaves_running_tween_alone() {
    let mut engine = ScrollEngine::new();
    let mut lookup = page(0.0);
    engine.scroll_to("#services", ScrollVariant::EasedQuartic, 0.0, &mut lookup);
    engine.tick(0);
    let miss = engine.scroll_to("#nope", ScrollVariant::EasedQuartic, 0.0, &mut lookup);
    assert_eq!(miss, None);
    assert!(engine.is_animating());
    assert_eq!(run_to_completion(&mut engine, 16).last().copied(), Some(1_720.0));
}

#[test]
fn native_variants_return_platform_commands() {
    let mut engine = ScrollEngine::new();
    let mut lookup = page(100.0);
    assert_eq!(
        engine.scroll_to("#about", ScrollVariant::NativeSmooth, 100.0, &mut lookup),
        Some(ScrollCommand::Native {
            top: 820.0,
            behavior: ScrollBehavior::Smooth,
        })
    );
    assert_eq!(
        engine.scroll_to("#about", ScrollVariant::InstantNative, 100.0, &mut lookup),
        Some(ScrollCommand::Native {
            top: 820.0,
            behavior: ScrollBehavior::Instant,
        })
    );
    assert!(!engine.is_animating());
}

#[test]
fn eased_variants_land_exactly_on_target() {
    for variant in EASED_VARIANTS {
        let mut engine = ScrollEngine::new();
        let mut lookup = page(250.0);
        let cmd = engine
            .scroll_to("#contact", variant, 250.0, &mut lookup)
            .unwrap();
        assert_eq!(cmd, ScrollCommand::Animate { from: 250.0, to: 3_920.0 });

        let offsets = run_to_completion(&mut engine, 5_000);
        assert_eq!(offsets.first().copied(), Some(250.0), "{variant:?}");
        assert_eq!(offsets.last().copied(), Some(4_000.0 - DEFAULT_HEADER_OFFSET));
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]), "{variant:?}");
        assert!(!engine.is_animating());
    }
}

#[test]
fn eased_durations_match_variant() {
    for (variant, duration) in [
        (ScrollVariant::EasedCubic { duration_ms: 700 }, 700u64),
        (ScrollVariant::EasedQuartic, 600),
        (ScrollVariant::EasedExponential, 400),
    ] {
        let mut engine = ScrollEngine::new();
        engine.scroll_to_offset(1_000.0, variant, 0.0);
        engine.tick(100);
        assert!(engine.tick(100 + duration - 1).is_some());
        assert!(engine.is_animating());
        assert_eq!(engine.tick(100 + duration), Some(1_000.0));
        assert!(!engine.is_animating());
        assert_eq!(engine.tick(100 + duration + 16), None);
    }
}

#[test]
fn new_scroll_to_cancels_in_flight_tween() {
    let mut engine = ScrollEngine::new();
    let mut lookup = page(0.0);
    engine.scroll_to("#contact", ScrollVariant::eased_cubic(), 0.0, &mut lookup);
    engine.tick(0);
    let midway = engine.tick(200).unwrap();
    assert!(midway > 0.0 && midway < 3_920.0);

    let mut lookup = page(midway);
    let cmd = engine
        .scroll_to("#home", ScrollVariant::EasedExponential, midway, &mut lookup)
        .unwrap();
    assert_eq!(cmd, ScrollCommand::Animate { from: midway, to: 0.0 });

    let offsets = run_to_completion(&mut engine, 216);
    assert_eq!(offsets.last().copied(), Some(0.0));
    // The first tween is gone: nothing moves toward #contact any more.
    assert!(offsets.iter().all(|&o| o <= midway));
}

#[test]
fn native_request_also_cancels_tween() {
    let mut engine = ScrollEngine::new();
    engine.scroll_to_offset(2_000.0, ScrollVariant::EasedQuartic, 0.0);
    engine.tick(0);
    let cmd = engine.scroll_to_top(ScrollVariant::NativeSmooth, 500.0);
    assert_eq!(
        cmd,
        ScrollCommand::Native {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }
    );
    assert!(!engine.is_animating());
}

#[test]
fn scroll_to_top_and_bottom() {
    let mut engine = ScrollEngine::new().with_header_offset(0.0);
    let cmd = engine.scroll_to_bottom(6_400.0, ScrollVariant::InstantNative, 100.0);
    assert_eq!(cmd.destination(), 6_400.0);

    let cmd = engine.scroll_to_top(ScrollVariant::EasedExponential, 1_200.0);
    assert_eq!(cmd, ScrollCommand::Animate { from: 1_200.0, to: 0.0 });
    assert_eq!(run_to_completion(&mut engine, 0).last().copied(), Some(0.0));
}

#[test]
fn custom_header_offset() {
    let mut engine = ScrollEngine::new().with_header_offset(120.0);
    let mut lookup = page(0.0);
    let cmd = engine
        .scroll_to("#services", ScrollVariant::NativeSmooth, 0.0, &mut lookup)
        .unwrap();
    assert_eq!(cmd.destination(), 1_680.0);
}

#[test]
fn cancel_reports_whether_anything_stopped() {
    let mut engine = ScrollEngine::new();
    assert!(!engine.cancel());
    engine.scroll_to_offset(10.0, ScrollVariant::EasedQuartic, 0.0);
    assert!(engine.cancel());
    assert_eq!(engine.tick(0), None);
}

// --- reveal / motion ---

#[test]
fn should_animate_follows_once_flag() {
    let seen_then_left = IntersectionRecord {
        is_intersecting: false,
        has_intersected: true,
    };
    let on_screen = IntersectionRecord {
        is_intersecting: true,
        has_intersected: true,
    };
    let once = RevealOptions::default();
    let both_ways = RevealOptions {
        once: false,
        ..RevealOptions::default()
    };

    assert!(should_animate(seen_then_left, &once));
    assert!(!should_animate(IntersectionRecord::default(), &once));

    assert!(should_animate(on_screen, &both_ways));
    assert!(!should_animate(seen_then_left, &both_ways));
}

#[test]
fn hidden_styles_per_kind() {
    let motion = MotionConfig::default();
    let fade = reveal_style(RevealKind::Fade, false, &motion);
    assert_eq!((fade.opacity, fade.translate_y, fade.scale), (0.0, 20.0, 1.0));

    let reduced = MotionConfig::for_tier(PerformanceTier::Low, false);
    assert_eq!(reveal_style(RevealKind::Fade, false, &reduced).translate_y, 10.0);

    assert_eq!(reveal_style(RevealKind::SlideUp, false, &motion).translate_y, 40.0);
    assert_eq!(reveal_style(RevealKind::Scale, false, &motion).scale, 0.8);
    let stagger = reveal_style(RevealKind::Stagger, false, &motion);
    assert_eq!((stagger.opacity, stagger.translate_y), (0.0, 0.0));

    for kind in [
        RevealKind::Fade,
        RevealKind::SlideUp,
        RevealKind::Scale,
        RevealKind::Stagger,
    ] {
        assert_eq!(reveal_style(kind, true, &motion), RevealStyle::SHOWN);
    }
}

#[test]
fn transitions_adapt_to_motion_config() {
    let options = RevealOptions {
        delay_ms: 50,
        ..RevealOptions::default()
    };

    let high = MotionConfig::for_tier(PerformanceTier::High, false);
    let t = reveal_transition(RevealKind::Fade, &options, &high);
    assert_eq!((t.duration_ms, t.delay_ms), (600, 150));
    assert_eq!(t.easing, Easing::EaseOutQuad);

    let low = MotionConfig::for_tier(PerformanceTier::Low, false);
    let t = reveal_transition(RevealKind::Fade, &options, &low);
    assert_eq!((t.duration_ms, t.delay_ms), (300, 50));

    let t = reveal_transition(RevealKind::Scale, &RevealOptions::default(), &high);
    assert_eq!(t.duration_ms, 500);

    let off = MotionConfig::for_tier(PerformanceTier::High, true);
    assert!(!off.enabled);
    let t = reveal_transition(RevealKind::SlideUp, &options, &off);
    assert_eq!((t.duration_ms, t.delay_ms), (0, 0));
}

#[test]
fn stagger_delays_grow_linearly() {
    let delays: Vec<u64> = (0..4).map(|i| stagger_delay_ms(i, 100)).collect();
    assert_eq!(delays, [0, 100, 200, 300]);
}

#[test]
fn performance_tiers() {
    assert_eq!(PerformanceTier::classify(None, None, None), PerformanceTier::Low);
    assert_eq!(
        PerformanceTier::classify(Some(8), Some(8.0), Some("4g")),
        PerformanceTier::High
    );
    assert_eq!(
        PerformanceTier::classify(Some(4), Some(8.0), Some("4g")),
        PerformanceTier::Medium
    );
    assert_eq!(
        PerformanceTier::classify(Some(8), Some(8.0), Some("3g")),
        PerformanceTier::Medium
    );
    assert_eq!(
        PerformanceTier::classify(Some(8), Some(8.0), Some("2g")),
        PerformanceTier::Low
    );
    assert_eq!(
        PerformanceTier::classify(Some(16), None, None),
        PerformanceTier::Medium
    );
}

// --- page controller ---

fn site_sections() -> Vec<String> {
    ["home", "about", "services", "contact"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn site_geometry(id: &String) -> Option<SectionGeometry> {
    match id.as_str() {
        "home" => Some(SectionGeometry::new(0.0, 900.0)),
        "about" => Some(SectionGeometry::new(900.0, 900.0)),
        "services" => Some(SectionGeometry::new(1_800.0, 2_200.0)),
        "contact" => Some(SectionGeometry::new(4_000.0, 800.0)),
        _ => None,
    }
}

#[test]
fn controller_tracks_scroll_and_active_section() {
    let mut c = PageController::new(site_sections(), 0.0);
    assert_eq!(c.active_section().map(String::as_str), Some("home"));
    assert!(!c.back_to_top_visible());

    assert!(c.on_scroll_event());
    assert!(!c.on_scroll_event());
    assert!(c.on_animation_frame(1_000.0, 16, site_geometry));
    assert_eq!(c.active_section().map(String::as_str), Some("about"));
    assert!(c.back_to_top_visible());
    assert!(c.scroll_state().is_scrolling);

    // Throttled: 40ms later the resolver does not move yet.
    c.on_scroll_event();
    c.on_animation_frame(2_000.0, 56, site_geometry);
    assert_eq!(c.active_section().map(String::as_str), Some("about"));
    assert_eq!(
        c.resolve_active(116, site_geometry).map(String::as_str),
        Some("services")
    );

    assert_eq!(c.tick(206, site_geometry), None);
    assert!(!c.scroll_state().is_scrolling);
}

#[test]
fn controller_resolves_section_when_scrolling_settles() {
    let mut c = PageController::new(site_sections(), 0.0);
    c.on_scroll_event();
    c.on_animation_frame(1_000.0, 0, site_geometry);
    assert_eq!(c.active_section().map(String::as_str), Some("about"));

    // The last frame lands inside the resolver's throttle window.
    c.on_scroll_event();
    c.on_animation_frame(2_000.0, 40, site_geometry);
    assert_eq!(c.active_section().map(String::as_str), Some("about"));

    assert_eq!(c.tick(100, site_geometry), None);
    assert!(c.scroll_state().is_scrolling);
    c.tick(190, site_geometry);
    assert!(!c.scroll_state().is_scrolling);
    assert_eq!(c.active_section().map(String::as_str), Some("services"));
}

#[test]
fn controller_drives_eased_scroll_through_frames() {
    let mut c = PageController::new(site_sections(), 0.0);
    let cmd = c
        .scroll_to("#contact", ScrollVariant::EasedQuartic, 0.0, &mut page(0.0))
        .unwrap();
    assert_eq!(cmd.destination(), 3_920.0);
    assert!(c.is_animating());

    // Simulated host loop: write each tween offset back as a scroll event + frame.
    let mut now_ms = 1_000;
    while let Some(off) = c.tick(now_ms, site_geometry) {
        if c.on_scroll_event() {
            c.on_animation_frame(off, now_ms, site_geometry);
        }
        now_ms += 16;
    }
    assert_eq!(c.scroll_state().offset, 3_920.0);
    assert!(!c.is_animating());

    now_ms += 200;
    assert_eq!(
        c.resolve_active(now_ms, site_geometry).map(String::as_str),
        Some("contact")
    );
}

#[test]
fn user_input_cancels_controller_tween() {
    let mut c = PageController::new(site_sections(), 0.0);
    c.scroll_to("#services", ScrollVariant::eased_cubic(), 0.0, &mut page(0.0));
    assert!(c.tick(0, site_geometry).is_some());
    c.on_user_input();
    assert!(!c.is_animating());
    assert_eq!(c.tick(16, site_geometry), None);
}

#[test]
fn controller_resize_invalidates_geometry() {
    let mut c = PageController::new(site_sections(), 0.0);
    c.on_scroll_event();
    c.on_animation_frame(100.0, 0, site_geometry);
    assert_eq!(c.sections().cache_len(), 4);
    c.on_resize();
    assert_eq!(c.sections().cache_len(), 0);
}

#[test]
fn controller_scroll_to_top_uses_tracked_offset() {
    let mut c = PageController::new(site_sections(), 0.0);
    c.on_scroll_event();
    c.on_animation_frame(1_500.0, 0, site_geometry);
    let cmd = c.scroll_to_top(ScrollVariant::EasedExponential);
    assert_eq!(cmd, ScrollCommand::Animate { from: 1_500.0, to: 0.0 });

    c.detach();
    assert!(!c.is_animating());
    assert_eq!(c.tracker().subscriber_count(), 0);
}

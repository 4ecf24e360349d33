// Example: scroll tracking, active-section highlighting and reveal visibility for a one-page site.
use pagescroll::{
    ElementRect, ObserverOptions, ResolverOptions, ScrollTracker, SectionGeometry,
    SectionResolver, TrackerOptions, Viewport, VisibilityObserver,
};

const VIEWPORT_HEIGHT: f64 = 800.0;

fn layout(id: &&str) -> Option<SectionGeometry> {
    match *id {
        "home" => Some(SectionGeometry::new(0.0, 900.0)),
        "services" => Some(SectionGeometry::new(900.0, 1_400.0)),
        "pricing" => Some(SectionGeometry::new(2_300.0, 1_000.0)),
        "contact" => Some(SectionGeometry::new(3_300.0, 700.0)),
        _ => None,
    }
}

fn main() {
    let mut tracker = ScrollTracker::new(TrackerOptions::default(), 0.0);
    tracker.subscribe(|state| {
        println!(
            "  state: offset={} direction={:?} back_to_top={}",
            state.offset,
            state.direction,
            state.back_to_top_visible()
        );
    });

    let mut sections = SectionResolver::new(
        ResolverOptions::default(),
        ["home", "services", "pricing", "contact"],
    );

    let mut reveals = VisibilityObserver::new(ObserverOptions::default());
    let start = Viewport::new(0.0, VIEWPORT_HEIGHT);
    for (key, top) in [("hero", 100.0), ("service-cards", 1_100.0), ("price-table", 2_500.0)] {
        let record = reveals.observe(key, ElementRect::new(top, 300.0), start);
        println!("observe {key}: {record:?}");
    }

    // A burst of scroll events per frame; only the first of each burst requests a frame.
    let mut now_ms = 0u64;
    for offset in [120.0, 480.0, 950.0, 1_600.0, 2_250.0, 2_900.0] {
        now_ms += 120;
        let requested = (0..5).filter(|_| tracker.on_scroll_event()).count();
        println!("t={now_ms} events coalesced into {requested} frame");

        tracker.on_animation_frame(offset, now_ms);
        let active = sections.resolve(tracker.offset(), now_ms, layout);
        println!("  active section: {active:?}");

        reveals.on_viewport_change(Viewport::new(offset, VIEWPORT_HEIGHT), |key, record| {
            println!("  {key} intersecting={}", record.is_intersecting);
        });
        tracker.tick(now_ms);
    }

    now_ms += 150;
    tracker.tick(now_ms);
    println!("idle at t={now_ms}: is_scrolling={}", tracker.is_scrolling());
}

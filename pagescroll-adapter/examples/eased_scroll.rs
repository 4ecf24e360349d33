use pagescroll::SectionGeometry;
use pagescroll_adapter::{PageController, ScrollCommand, ScrollVariant};

fn main() {
    // Example: a navigation click that runs a custom eased scroll through the page controller.
    //
    // An adapter would:
    // - resolve the link target and call scroll_to
    // - call tick(now_ms, geometry) from its animation-frame callback and write the offset out
    // - feed the resulting scroll events back through on_scroll_event/on_animation_frame
    let geometry = |id: &&str| match *id {
        "home" => Some(SectionGeometry::new(0.0, 1_000.0)),
        "about" => Some(SectionGeometry::new(1_000.0, 1_200.0)),
        "contact" => Some(SectionGeometry::new(2_200.0, 900.0)),
        _ => None,
    };

    let mut c = PageController::new(["home", "about", "contact"], 0.0);
    let mut live_offset = 0.0;

    let mut lookup = |selector: &str| match selector {
        "#contact" => Some(2_200.0 - live_offset),
        _ => None,
    };
    let cmd = c.scroll_to("#contact", ScrollVariant::EasedQuartic, live_offset, &mut lookup);
    match cmd {
        Some(ScrollCommand::Animate { from, to }) => println!("animating {from} -> {to}"),
        Some(ScrollCommand::Native { top, behavior }) => println!("native {behavior:?} to {top}"),
        None => println!("target not found"),
    }

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms, geometry) {
        live_offset = off;
        if c.on_scroll_event() {
            c.on_animation_frame(live_offset, now_ms, geometry);
        }
        if now_ms % 96 == 0 {
            println!("t={now_ms} off={off:.1} active={:?}", c.active_section());
        }
        now_ms += 16;
    }

    now_ms += 150;
    c.tick(now_ms, geometry);
    let off = c.scroll_state().offset;
    let active = c.resolve_active(now_ms, geometry).copied();
    let scrolling = c.scroll_state().is_scrolling;
    let back_to_top = c.back_to_top_visible();
    println!(
        "done: off={} active={:?} scrolling={} back_to_top={}",
        off, active, scrolling, back_to_top
    );
}

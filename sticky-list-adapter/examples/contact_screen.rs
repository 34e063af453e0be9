// Example: drive the reference contact screen through a scroll, a "TOP" tap and a user fling.
//
//   RUST_LOG=sticky_list_adapter=debug cargo run -p sticky-list-adapter --example contact_screen --features tracing
use sticky_list::NodeContent;
use sticky_list_adapter::{Intent, sample_controller};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sticky_list_adapter=debug,sticky_list=warn")),
        )
        .with_target(true)
        .init();

    let mut c = sample_controller(640);
    print_frame("initial", &mut c);

    c.update(Intent::ScrollToIndex { index: 50, animated: false }, 0);
    print_frame("at index 50", &mut c);

    // The host's "TOP" button, then ~60 fps ticks.
    let mut now_ms = 1_000;
    c.update(Intent::ScrollToTop, now_ms);
    while c.is_animating() {
        now_ms += 16;
        let u = c.update(Intent::Tick, now_ms);
        if let Some(signals) = u.signals {
            println!("t={now_ms} show_top={}", signals.show_scroll_to_top_control);
        }
        // A fling partway through takes over from the animation.
        if now_ms == 1_096 {
            c.update(Intent::ScrollBy { delta: 240 }, now_ms);
        }
    }
    print_frame("after fling", &mut c);

    c.dispose();
}

fn print_frame(label: &str, c: &mut sticky_list_adapter::Controller<char, sticky_list::Item>) {
    let offset = c.scroll_offset();
    let frame = c.frame();
    println!(
        "-- {label}: offset={offset} pinned={:?} phase={:?} show_top={}",
        frame.sticky_key(),
        frame.sticky.phase,
        frame.signals.show_scroll_to_top_control
    );
    for node in frame.nodes.iter().take(6) {
        match node.content {
            NodeContent::Header(letter) => println!("  [{:>2}] {:>5} {letter}", node.slot, node.top),
            NodeContent::Item(it) => println!(
                "  [{:>2}] {:>5}   {} ({})",
                node.slot, node.top, it.primary_text, it.secondary_text
            ),
        }
    }
}

// Example: sweep the scroll offset and watch the pinned header hand off between groups.
use sticky_list::{
    Item, ListEngine, ListOptions, ScrollPositionObserver, StickyHeaderOverlay, StickyPhase,
    contact_sections,
};

fn main() {
    let names = [
        "Ada", "Amy", "Ava", "Ben", "Bob", "Cal", "Dan", "Dee", "Eve", "Fay", "Gus", "Hal", "Ian",
        "Jon", "Kim", "Lee",
    ];
    let list = contact_sections(names.iter().map(|n| Item::new(*n, "")));

    let kinds: Vec<bool> = (0..list.len())
        .map(|i| list.node(i).is_some_and(|n| n.is_header()))
        .collect();
    let mut engine = ListEngine::new(
        ListOptions::new(list.len(), move |i| if kinds[i] { 40 } else { 65 })
            .with_padding(16, 88)
            .with_initial_viewport_extent(300),
    );

    let mut overlay = StickyHeaderOverlay::new();
    let mut observer = ScrollPositionObserver::new(3);
    let max = engine.max_scroll_offset();
    for offset in (0..=max).step_by(10) {
        engine.set_scroll_offset(offset);
        if overlay.update(&engine, list.header_indexes()) {
            let h = overlay.current();
            let letter = h.group.map(|g| list.groups()[g].key);
            if h.phase != StickyPhase::Transitioning || h.translation % 20 == 0 {
                println!(
                    "offset={offset:>4} phase={:?} group={letter:?} translation={}",
                    h.phase, h.translation
                );
            }
        }
        if let Some(signals) = observer.observe(&engine.scroll_state()) {
            println!(
                "offset={offset:>4} show_scroll_to_top={}",
                signals.show_scroll_to_top_control
            );
        }
    }
}

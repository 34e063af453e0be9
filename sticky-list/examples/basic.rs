// Example: group a few contacts, scroll, and read the visible range.
use sticky_list::{Align, Item, ListEngine, ListOptions, NodeContent, contact_sections};

fn main() {
    let list = contact_sections([
        Item::new("Zoe", "Designer"),
        Item::new("Ada", "Engineer"),
        Item::new("Bob", "Manager"),
        Item::new("Amy", "Analyst"),
    ]);

    let heights: Vec<i64> = (0..list.len())
        .map(|i| match list.node(i) {
            Some(n) if n.is_header() => 40,
            _ => 65,
        })
        .collect();
    let mut engine = ListEngine::new(
        ListOptions::new(list.len(), move |i| heights[i]).with_initial_viewport_extent(120),
    );

    println!("total_height={}", engine.total_height());
    println!("visible_range={:?}", engine.visible_range());

    let off = engine.scroll_to_index(list.len() - 1, Align::End);
    println!("after scroll_to_index: offset={off}");

    engine.for_each_render_node(None, |node| match list.content(node.index) {
        Some(NodeContent::Header(letter)) => println!("{:>4} [{letter}]", node.start),
        Some(NodeContent::Item(it)) => println!("{:>4}  {}", node.start, it.primary_text),
        None => {}
    });
}

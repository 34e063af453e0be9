use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use proptest::prelude::*;

const HEADER: i64 = 10;
const ROW: i64 = 20;

fn item(name: &str) -> Item {
    Item::new(name, "")
}

// Layout used by most tests (header 10, row 20):
//   0 H(A) [0,10)  1 Ada [10,30)  2 Amy [30,50)  3 H(B) [50,60)  4 Bo [60,80)
fn small_list() -> SectionedList<char, Item> {
    contact_sections([item("Bo"), item("Amy"), item("Ada")])
}

fn engine_for(list: &SectionedList<char, Item>, extent: u32) -> ListEngine {
    let kinds: Arc<[bool]> = (0..list.len())
        .map(|i| list.node(i).is_some_and(|n| n.is_header()))
        .collect();
    let opts = ListOptions::new(list.len(), move |i| if kinds[i] { HEADER } else { ROW })
        .with_initial_viewport_extent(extent);
    ListEngine::new(opts)
}

fn engine_from_heights(heights: Vec<u32>, extent: u32) -> ListEngine {
    let n = heights.len();
    ListEngine::new(
        ListOptions::new(n, move |i| heights[i] as i64).with_initial_viewport_extent(extent),
    )
}

#[test]
fn grouping_partitions_presorted_items_in_key_order() {
    let items = vec![("Ada", 1), ("Amy", 3), ("Bo", 2)];
    let groups = group_by_key(items, |(name, _)| initial_of(name));

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, 'A');
    assert_eq!(groups[0].items, vec![("Ada", 1), ("Amy", 3)]);
    assert_eq!(groups[1].key, 'B');
    assert_eq!(groups[1].items, vec![("Bo", 2)]);
}

#[test]
fn grouping_keeps_input_order_within_a_group() {
    // Not pre-sorted: partitioned, never re-sorted.
    let groups = group_by_key(["b2", "a1", "b1", "a2"], |s| s.as_bytes()[0]);
    assert_eq!(groups[0].items, vec!["a1", "a2"]);
    assert_eq!(groups[1].items, vec!["b2", "b1"]);
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    let groups = group_by_key(Vec::<Item>::new(), |it| initial_of(&it.primary_text));
    assert!(groups.is_empty());

    let list = contact_sections(Vec::<Item>::new());
    assert!(list.is_empty());
    assert!(list.header_indexes().is_empty());
}

#[test]
fn grouping_with_comparator_merges_equal_keys() {
    // Case-insensitive comparator over raw first letters: 'a' and 'A' share a group.
    let groups = group_by_key_with(
        ["alpha", "Beta", "Apex", "bravo"],
        |s| s.chars().next().unwrap_or('#'),
        |a: &char, b: &char| a.to_ascii_uppercase().cmp(&b.to_ascii_uppercase()),
    );
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, 'a');
    assert_eq!(groups[0].items, vec!["alpha", "Apex"]);
    assert_eq!(groups[1].items, vec!["Beta", "bravo"]);
}

#[test]
fn initial_is_uppercased_and_empty_text_has_a_fallback() {
    assert_eq!(initial_of("zohran"), 'Z');
    assert_eq!(initial_of("J.D. Vance"), 'J');
    assert_eq!(initial_of("élise"), 'É');
    assert_eq!(initial_of("ßen"), 'ß');
    assert_eq!(initial_of("ŉx"), 'ŉ');
    assert_eq!(initial_of(""), '#');
}

#[test]
fn sectioned_list_interleaves_headers_and_items() {
    let list = small_list();
    assert_eq!(list.len(), 5);
    assert_eq!(list.item_count(), 3);
    assert_eq!(list.header_indexes(), &[0, 3]);

    assert_eq!(list.node(0), Some(NodeKind::Header { group: 0 }));
    assert_eq!(list.node(2), Some(NodeKind::Item { group: 0, item: 1 }));
    assert_eq!(list.node(3), Some(NodeKind::Header { group: 1 }));
    assert_eq!(list.node(5), None);

    assert_eq!(list.group_of(4), Some(1));
    assert_eq!(list.content(3), Some(NodeContent::Header(&'B')));
    match list.content(1) {
        Some(NodeContent::Item(it)) => assert_eq!(it.primary_text, "Ada"),
        other => panic!("unexpected content: {other:?}"),
    }

    let names: Vec<&str> = list.items().map(|it| it.primary_text.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Amy", "Bo"]);
}

#[test]
fn sectioned_list_key_lookup_roundtrips() {
    let list = small_list();
    for i in 0..list.len() {
        let key = list.node_key(i).unwrap();
        assert_eq!(list.index_of_key(&key), Some(i));
    }
    assert_eq!(list.index_of_key(&NodeKey::Header('Z')), None);
    assert_eq!(list.index_of_key(&NodeKey::Item(String::from("Zed"))), None);
}

#[test]
fn duplicate_item_keys_resolve_to_the_last_occurrence() {
    let list = SectionedList::from_items(
        [Item::new("Sam", "first"), Item::new("Sam", "second")],
        |it| initial_of(&it.primary_text),
    );
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.index_of_key(&NodeKey::Item(String::from("Sam"))),
        Some(2)
    );
}

#[test]
fn empty_groups_are_dropped() {
    let list = SectionedList::new(vec![
        Group {
            key: 'A',
            items: vec![item("Ada")],
        },
        Group {
            key: 'B',
            items: Vec::new(),
        },
    ]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.groups().len(), 1);
}

#[test]
fn fixed_heights_total_and_visible_range() {
    let list = small_list();
    let e = engine_for(&list, 30);
    assert_eq!(e.total_height(), 80);
    assert_eq!(e.max_scroll_offset(), 50);

    assert_eq!(
        e.visible_range(),
        NodeRange {
            start_index: 0,
            end_index: 2
        }
    );
    // One node of slack on each side.
    assert_eq!(
        e.render_range(),
        NodeRange {
            start_index: 0,
            end_index: 3
        }
    );

    let r = e.visible_range_for(45, 30);
    assert_eq!(r.start_index, 2);
    assert_eq!(r.last_index(), Some(4));
}

#[test]
fn visible_range_clamps_offsets_past_the_end() {
    let e = engine_from_heights(vec![10; 100], 50);
    let r = e.visible_range_for(u64::MAX, 50);
    assert_eq!(r.start_index, 95);
    assert_eq!(r.end_index, 100);
}

#[test]
fn empty_engine_has_no_content() {
    let mut e = engine_from_heights(Vec::new(), 100);
    assert_eq!(e.total_height(), 0);
    assert!(e.visible_range().is_empty());
    assert!(e.render_range().is_empty());
    assert_eq!(e.index_at_offset(0), None);
    assert_eq!(e.scroll_to_index(5, Align::Start), 0);
    assert_eq!(e.scroll_state(), ScrollState {
        offset: 0,
        viewport_extent: 100,
        first_visible_index: 0,
        first_visible_item_scroll_offset: 0,
    });

    let mut seen = Vec::new();
    e.for_each_render_index(Some(0), |i| seen.push(i));
    assert!(seen.is_empty());
}

#[test]
fn zero_viewport_renders_nothing() {
    let e = engine_from_heights(vec![10; 10], 0);
    assert!(e.visible_range().is_empty());
    let mut out = Vec::new();
    e.collect_render_nodes(None, &mut out);
    assert!(out.is_empty());
}

#[test]
fn negative_heights_clamp_to_zero() {
    let e = ListEngine::new(
        ListOptions::new(3, |i| if i == 1 { -50 } else { 10 }).with_initial_viewport_extent(5),
    );
    assert_eq!(e.node_height(1), Some(0));
    assert_eq!(e.total_height(), 20);
    // Offset 10 is the start of node 2: the empty node 1 is skipped.
    assert_eq!(e.index_at_offset(10), Some(2));
}

#[test]
fn missing_heights_clamp_to_zero() {
    let mut e = engine_from_heights(vec![1; 4], 2);
    e.set_node_heights(&[10, -3]);
    assert_eq!(e.node_height(0), Some(10));
    assert_eq!(e.node_height(1), Some(0));
    assert_eq!(e.node_height(2), Some(0));
    assert_eq!(e.node_height(3), Some(0));
    assert_eq!(e.total_height(), 10);
}

#[test]
fn padding_shifts_nodes_and_content_top() {
    let mut e = ListEngine::new(
        ListOptions::new(10, |_| 10)
            .with_padding(16, 88)
            .with_initial_viewport_extent(50),
    );
    assert_eq!(e.node_start(0), Some(16));
    assert_eq!(e.total_height(), 16 + 100 + 88);

    // Index 0 on the content top line is offset 0.
    assert_eq!(e.scroll_to_index_offset(0, Align::Start), 0);
    assert_eq!(e.scroll_to_index_offset(3, Align::Start), 30);
    assert_eq!(e.scroll_state().first_visible_index, 0);

    e.set_scroll_offset(35);
    let s = e.scroll_state();
    assert_eq!(s.first_visible_index, 3);
    assert_eq!(s.first_visible_item_scroll_offset, 5);
    assert_eq!(e.content_top(), 51);
}

#[test]
fn scroll_to_index_clamps_out_of_range_targets() {
    let mut e = engine_from_heights(vec![10; 20], 50);
    let last = e.scroll_to_index_offset(19, Align::Start);
    assert_eq!(e.scroll_to_index_offset(1_000, Align::Start), last);
    assert_eq!(last, e.max_scroll_offset());
    assert_eq!(e.scroll_to_index(1_000, Align::End), 150);
}

#[test]
fn align_variants_place_the_node() {
    let mut e = engine_from_heights(vec![10; 20], 30);
    assert_eq!(e.scroll_to_index_offset(10, Align::Start), 100);
    assert_eq!(e.scroll_to_index_offset(10, Align::End), 80);
    assert_eq!(e.scroll_to_index_offset(10, Align::Center), 90);

    e.set_scroll_offset(95);
    // Node 10 spans [100,110), fully inside [95,125).
    assert_eq!(e.scroll_to_index_offset(10, Align::Auto), 95);
    assert_eq!(e.scroll_to_index_offset(2, Align::Auto), 20);
    assert_eq!(e.scroll_to_index_offset(15, Align::Auto), 130);
}

#[test]
fn scroll_by_clamps_and_tracks_direction() {
    let mut e = engine_from_heights(vec![10; 10], 40);
    assert_eq!(e.scroll_by(25), 25);
    assert_eq!(e.scroll_direction(), Some(ScrollDirection::Forward));
    assert_eq!(e.scroll_by(1_000), 60);
    assert_eq!(e.scroll_by(-15), 45);
    assert_eq!(e.scroll_direction(), Some(ScrollDirection::Backward));
    assert_eq!(e.scroll_by(-1_000), 0);
}

#[test]
fn shrinking_the_viewport_and_content_reclamps_the_offset() {
    let mut e = engine_from_heights(vec![10; 10], 40);
    e.set_scroll_offset(60);
    e.set_viewport_extent(80);
    assert_eq!(e.scroll_offset(), 20);

    e.update_options(|o| o.count = 5);
    assert_eq!(e.scroll_offset(), 0);
}

#[test]
fn measure_above_offset_shifts_scroll_to_keep_content_still() {
    let mut e = engine_from_heights(vec![10; 100], 30);
    e.set_scroll_offset(200);

    assert_eq!(e.measure(0, 30), 20);
    assert_eq!(e.scroll_offset(), 220);
    assert!(e.is_measured(0));

    // Below the offset: no shift.
    assert_eq!(e.measure(50, 40), 0);
    assert_eq!(e.scroll_offset(), 220);
    assert_eq!(e.total_height(), 1_000 + 20 + 30);

    assert_eq!(e.measure(1_000, 5), 0);
}

#[test]
fn measurements_follow_keys_after_reorder() {
    let keys = Arc::new(std::sync::Mutex::new(vec![10u64, 11, 12]));
    let mut e = ListEngine::new(ListOptions::new_with_key(3, |_| 1, {
        let keys = Arc::clone(&keys);
        move |i| keys.lock().unwrap()[i]
    }));
    e.measure(0, 9);
    assert_eq!(e.node_height(0), Some(9));
    assert_eq!(e.measurement_cache_len(), 1);

    *keys.lock().unwrap() = vec![12, 11, 10];
    e.sync_node_keys();
    assert_eq!(e.node_height(0), Some(1));
    assert_eq!(e.node_height(2), Some(9));
    assert!(e.is_measured(2));

    e.reset_measurements();
    assert_eq!(e.node_height(2), Some(1));
    assert_eq!(e.measurement_cache_len(), 0);
}

#[test]
fn measurement_cache_drops_keys_that_left_the_list() {
    let base = Arc::new(std::sync::Mutex::new(0u64));
    let mut e = ListEngine::new(ListOptions::new_with_key(4, |_| 1, {
        let base = Arc::clone(&base);
        move |i| *base.lock().unwrap() + i as u64
    }));
    for round in 0..5u64 {
        *base.lock().unwrap() = round * 100;
        e.sync_node_keys();
        for i in 0..e.count() {
            e.measure(i, 7);
        }
        assert_eq!(e.measurement_cache_len(), 4);
    }

    // Two of four keys overlap with the previous round.
    *base.lock().unwrap() = 402;
    e.sync_node_keys();
    assert_eq!(e.measurement_cache_len(), 2);
    assert_eq!(e.node_height(0), Some(7));
    assert_eq!(e.node_height(2), Some(1));

    e.set_options(ListOptions::new_with_key(1, |_| 1, |i| 9_000 + i as u64));
    assert_eq!(e.measurement_cache_len(), 0);
}

#[test]
fn render_nodes_include_an_offscreen_pinned_header() {
    let mut e = engine_from_heights(vec![10; 100], 30);
    e.set_scroll_offset(500);

    let mut indexes = Vec::new();
    e.for_each_render_index(Some(40), |i| indexes.push(i));
    assert_eq!(indexes.first(), Some(&40));
    assert_eq!(&indexes[1..], &[49, 50, 51, 52, 53]);

    // Pinned inside the range is not duplicated.
    indexes.clear();
    e.for_each_render_index(Some(50), |i| indexes.push(i));
    assert_eq!(indexes, vec![49, 50, 51, 52, 53]);

    let mut nodes = Vec::new();
    e.collect_render_nodes(Some(40), &mut nodes);
    assert_eq!(nodes[0].start, 400);
    assert_eq!(nodes[0].top_in_viewport(e.scroll_offset()), -100);
    assert_eq!(nodes[1].end(), 500);
}

#[test]
fn emitter_drops_duplicates_and_out_of_range_indexes() {
    let window = Window {
        start_index: 2,
        end_index: 4,
        overscan: 1,
        count: 5,
    };
    let mut out = Vec::new();
    {
        let mut push = |i| out.push(i);
        let mut e = IndexEmitter::new(window, &mut push);
        e.emit_visible();
        e.emit(3);
        e.emit_range(4, 10);
    }
    assert_eq!(out, vec![2, 3, 4]);

    out.clear();
    {
        let mut push = |i| out.push(i);
        let mut e = IndexEmitter::new(window, &mut push);
        e.emit_overscanned_with_pinned(Some(0));
    }
    assert_eq!(out, vec![0, 1, 2, 3, 4]);
}

#[test]
fn sticky_header_pins_first_group_at_top() {
    let list = small_list();
    let e = engine_for(&list, 30);
    let h = sticky_header_at(&e, list.header_indexes(), 0);
    assert_eq!(h.phase, StickyPhase::Pinned);
    assert_eq!(h.group, Some(0));
    assert_eq!(h.header_index, Some(0));
    assert_eq!(h.next_header_index, Some(3));
    assert_eq!(h.height, 10);
    assert_eq!(h.translation, 0);
}

#[test]
fn sticky_header_is_pushed_by_the_next_header() {
    let list = small_list();
    let e = engine_for(&list, 30);
    let headers = list.header_indexes();

    // Next header top at 10: touching, not overlapping.
    assert_eq!(sticky_header_at(&e, headers, 40).phase, StickyPhase::Pinned);

    let h = sticky_header_at(&e, headers, 45);
    assert_eq!(h.phase, StickyPhase::Transitioning);
    assert_eq!(h.group, Some(0));
    assert_eq!(h.translation, -5);
    assert_eq!(h.top, -5);

    assert_eq!(sticky_header_at(&e, headers, 49).translation, -9);

    let h = sticky_header_at(&e, headers, 50);
    assert_eq!(h.phase, StickyPhase::Pinned);
    assert_eq!(h.group, Some(1));
    assert_eq!(h.next_header_index, None);
    assert_eq!(h.translation, 0);
}

#[test]
fn sticky_header_hides_on_overscroll_and_empty_lists() {
    let list = small_list();
    let e = engine_for(&list, 30);
    assert_eq!(
        sticky_header_at(&e, list.header_indexes(), -1),
        StickyHeader::HIDDEN
    );

    let empty = contact_sections(Vec::<Item>::new());
    let e = engine_for(&empty, 30);
    let mut overlay = StickyHeaderOverlay::new();
    assert!(!overlay.update(&e, empty.header_indexes()));
    assert!(!overlay.current().is_visible());
}

#[test]
fn sticky_header_respects_content_padding() {
    let list = small_list();
    let mut e = engine_for(&list, 30);
    e.update_options(|o| o.padding_start = 16);

    let h = sticky_header_at(&e, list.header_indexes(), 0);
    assert_eq!(h.phase, StickyPhase::Pinned);
    assert_eq!(h.top, 16);
    assert_eq!(sticky_header_at(&e, list.header_indexes(), -1).phase, StickyPhase::Hidden);
}

#[test]
fn overlay_update_reports_changes_only() {
    let list = small_list();
    let mut e = engine_for(&list, 30);
    let mut overlay = StickyHeaderOverlay::new();

    assert!(overlay.update(&e, list.header_indexes()));
    assert!(!overlay.update(&e, list.header_indexes()));

    e.set_scroll_offset(20);
    assert!(!overlay.update(&e, list.header_indexes()));

    e.set_scroll_offset(45);
    assert!(overlay.update(&e, list.header_indexes()));
    assert_eq!(overlay.current().phase, StickyPhase::Transitioning);
}

#[test]
fn scroll_to_top_control_threshold_boundary() {
    let observer = ScrollPositionObserver::default();
    let at = |first_visible_index| ScrollState {
        first_visible_index,
        ..ScrollState::default()
    };
    assert!(!observer.derive(&at(10)).show_scroll_to_top_control);
    assert!(observer.derive(&at(11)).show_scroll_to_top_control);
}

#[test]
fn observer_memoizes_unchanged_signals() {
    let mut observer = ScrollPositionObserver::new(10);
    let mut state = ScrollState::default();

    assert_eq!(
        observer.observe(&state),
        Some(ScrollSignals {
            show_scroll_to_top_control: false
        })
    );
    for i in 0..=10 {
        state.first_visible_index = i;
        state.offset = i as u64 * 7;
        assert_eq!(observer.observe(&state), None);
    }

    state.first_visible_index = 11;
    assert!(observer.observe(&state).is_some());
    assert!(observer.current().show_scroll_to_top_control);
    assert_eq!(observer.observe(&state), None);

    observer.reset();
    assert!(observer.observe(&state).is_some());
}

#[test]
fn derive_is_idempotent() {
    let observer = ScrollPositionObserver::default();
    let state = ScrollState {
        offset: 1234,
        viewport_extent: 800,
        first_visible_index: 19,
        first_visible_item_scroll_offset: 3,
    };
    assert_eq!(observer.derive(&state), observer.derive(&state));
}

#[test]
fn recycler_keeps_slots_for_keys_across_reorder() {
    let mut r = SlotRecycler::new();
    let first = r.assign(&["a", "b", "c"]);
    assert_eq!(first, vec![0, 1, 2]);

    let reordered = r.assign(&["c", "a", "b"]);
    assert_eq!(reordered, vec![2, 0, 1]);
    assert_eq!(r.capacity(), 3);
}

#[test]
fn recycler_reuses_freed_slots_lowest_first() {
    let mut r = SlotRecycler::new();
    r.assign(&["a", "b", "c", "d"]);

    // "a" and "c" scroll away; "e" and "f" scroll in.
    let next = r.assign(&["b", "d", "e", "f"]);
    assert_eq!(next, vec![1, 3, 0, 2]);
    assert_eq!(r.capacity(), 4);
    assert_eq!(r.slot_of(&"a"), None);
    assert_eq!(r.slot_of(&"f"), Some(2));
}

#[test]
fn recycler_maps_duplicate_keys_to_one_slot() {
    let mut r = SlotRecycler::new();
    assert_eq!(r.assign(&["x", "x", "y"]), vec![0, 0, 1]);
    r.clear();
    assert_eq!(r.capacity(), 0);
}

fn grouped_heights() -> impl Strategy<Value = Vec<(u32, Vec<u32>)>> {
    prop::collection::vec(
        (1u32..40, prop::collection::vec(0u32..60, 1..6)),
        1..6,
    )
}

proptest! {
    #[test]
    fn grouping_is_a_stable_partition_in_key_order(
        items in prop::collection::vec((0u8..8, any::<u16>()), 0..64),
    ) {
        let groups = group_by_key(items.clone(), |&(k, _)| k);

        prop_assert!(groups.windows(2).all(|w| w[0].key < w[1].key));
        prop_assert!(groups.iter().all(|g| g.items.iter().all(|it| it.0 == g.key)));

        let flattened: Vec<(u8, u16)> =
            groups.into_iter().flat_map(|g| g.items).collect();
        let mut expected = items;
        expected.sort_by_key(|&(k, _)| k);
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn visible_range_matches_linear_scan(
        heights in prop::collection::vec(0u32..50, 1..40),
        offset in 0u64..2_000,
        extent in 1u32..300,
    ) {
        let e = engine_from_heights(heights.clone(), extent);
        let r = e.visible_range_for(offset, extent);

        let total: u64 = heights.iter().map(|&h| h as u64).sum();
        let offset = offset.min(total.saturating_sub(extent as u64));
        let end = offset + extent as u64;
        let mut start = 0u64;
        for (i, &h) in heights.iter().enumerate() {
            let stop = start + h as u64;
            if h > 0 && stop > offset && start < end {
                prop_assert!(r.contains(i), "node {} overlaps but is outside {:?}", i, r);
            }
            start = stop;
        }
        prop_assert!(r.end_index <= heights.len());
    }

    #[test]
    fn sticky_translation_is_monotonic_through_group_boundaries(
        groups in grouped_heights(),
        extent in 1u32..200,
    ) {
        let mut heights = Vec::new();
        let mut headers = Vec::new();
        for (header, items) in &groups {
            headers.push(heights.len());
            heights.push(*header);
            heights.extend(items.iter().copied());
        }
        let e = engine_from_heights(heights, extent);
        let total = e.total_height() as i64;

        let mut prev = sticky_header_at(&e, &headers, 0);
        for offset in 1..=total {
            let cur = sticky_header_at(&e, &headers, offset);
            prop_assert!(cur.translation <= 0 && cur.translation >= -(cur.height as i64));
            prop_assert_eq!(cur, sticky_header_at(&e, &headers, offset));

            if cur.group == prev.group {
                let step = cur.translation - prev.translation;
                prop_assert!(step == 0 || step == -1, "jump of {} at offset {}", step, offset);
            } else {
                prop_assert_eq!(cur.group, prev.group.map(|g| g + 1));
                prop_assert_eq!(cur.translation, 0);
            }
            prev = cur;
        }
    }
}

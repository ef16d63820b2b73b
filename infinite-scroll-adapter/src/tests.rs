use crate::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use infinite_scroll::InfiniteScrollOptions;

#[derive(Debug, PartialEq)]
enum Event {
    Selected(usize),
    DragBegan,
}

struct Recorder(Rc<RefCell<Vec<Event>>>);

impl InfiniteListDelegate for Recorder {
    fn did_select(&mut self, index: usize) {
        self.0.borrow_mut().push(Event::Selected(index));
    }

    fn will_begin_dragging(&mut self) {
        self.0.borrow_mut().push(Event::DragBegan);
    }
}

struct CountingSource {
    count: Cell<usize>,
    queries: Cell<usize>,
}

impl DataSource for CountingSource {
    fn item_count(&self) -> usize {
        self.queries.set(self.queries.get() + 1);
        self.count.get()
    }
}

#[derive(Default)]
struct CountingRenderer {
    reloads: usize,
}

impl Renderer for CountingRenderer {
    fn reload(&mut self) {
        self.reloads += 1;
    }
}

fn items() -> Vec<&'static str> {
    vec!["a", "b", "c", "d", "e"]
}

// Five 50px cells in a 100px viewport: center 325, threshold 62.5.
fn five_cell_list() -> InfiniteList {
    InfiniteList::new(InfiniteScrollOptions::new(50.0).with_initial_extent(100.0)).unwrap()
}

fn first_visible_index(list: &InfiniteList, count: usize) -> usize {
    let s = list.scroll();
    s.cell_at_offset(s.offset() + 0.5, count).unwrap().index
}

#[test]
fn layout_reloads_only_after_a_recenter() {
    let items = items();
    let mut list = five_cell_list();
    let mut renderer = CountingRenderer::default();

    let out = list.layout(&items, &mut renderer);
    assert!(out.should_reload);
    assert_eq!(out.offset, 300.0);
    assert_eq!(out.drift, 6);
    assert_eq!(renderer.reloads, 1);

    let out = list.layout(&items, &mut renderer);
    assert!(!out.should_reload);
    assert_eq!(renderer.reloads, 1);
}

#[test]
fn closures_can_act_as_renderers() {
    let items = ["a", "b", "c", "d", "e"];
    let mut list = five_cell_list();
    let mut reloads = 0;
    list.layout(&items, &mut || reloads += 1);
    assert_eq!(reloads, 1);
}

#[test]
fn item_count_is_queried_on_every_pass() {
    let source = CountingSource {
        count: Cell::new(0),
        queries: Cell::new(0),
    };
    let mut list = five_cell_list();
    let mut renderer = CountingRenderer::default();

    assert!(!list.layout(&source, &mut renderer).should_reload);
    source.count.set(5);
    assert!(list.layout(&source, &mut renderer).should_reload);
    assert_eq!(source.queries.get(), 2);
    assert_eq!(renderer.reloads, 1);
}

#[test]
fn selection_is_remapped_and_reported() {
    let items = items();
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut list = five_cell_list();
    list.set_delegate(Some(Box::new(Recorder(Rc::clone(&events)))));
    assert!(list.has_delegate());
    list.layout(&items, &mut CountingRenderer::default());

    assert_eq!(list.select_slot(6, &items), Some(0));
    assert_eq!(list.select_slot(14, &items), Some(3));
    assert_eq!(list.select_slot(15, &items), None);
    assert_eq!(*events.borrow(), vec![Event::Selected(0), Event::Selected(3)]);

    list.set_delegate(None);
    assert_eq!(list.select_slot(7, &items), Some(1));
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn begin_drag_cancels_tween_and_notifies_delegate() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut list = five_cell_list();
    list.set_delegate(Some(Box::new(Recorder(Rc::clone(&events)))));

    list.start_tween_by_cells(3, 0, 100, Easing::Linear);
    assert!(list.is_animating());
    list.begin_drag();
    assert!(!list.is_animating());
    assert_eq!(*events.borrow(), vec![Event::DragBegan]);

    list.start_tween_by_cells(3, 0, 100, Easing::Linear);
    list.on_scroll(10.0);
    assert!(!list.is_animating());
    assert_eq!(list.scroll().offset(), 10.0);
}

#[test]
fn tween_keeps_content_continuous_across_recenters() {
    let items = items();
    let mut list = five_cell_list();
    list.scroll_mut().scroll_to_center(items.len());
    assert_eq!(list.scroll().offset(), 325.0);

    let to = list.start_tween_by_cells(10, 0, 100, Easing::Linear);
    assert_eq!(to, 825.0);

    let mut renderer = CountingRenderer::default();
    for now_ms in (0..=100u64).step_by(10) {
        let off = list.tick(now_ms, &items, &mut renderer);
        assert!(off.is_some());

        let travelled = 5.0 * now_ms as f64;
        let abs = 325.0 + travelled + 0.5;
        let expected = ((abs / 50.0).floor() as usize) % 5;
        assert_eq!(first_visible_index(&list, 5), expected, "now_ms={now_ms}");
    }
    assert!(renderer.reloads > 0);
    assert!(!list.is_animating());
    assert_eq!(list.tick(200, &items, &mut renderer), None);
}

#[test]
fn tween_to_index_lands_on_nearest_copy() {
    let items = items();
    let mut list = five_cell_list();
    list.scroll_mut().scroll_to_center(5);
    assert_eq!(first_visible_index(&list, 5), 1);

    assert_eq!(
        list.start_tween_to_index(7, &items, 0, 100, Easing::SmoothStep),
        None
    );
    let to = list.start_tween_to_index(3, &items, 0, 100, Easing::SmoothStep);
    assert_eq!(to, Some(400.0));

    let mut renderer = CountingRenderer::default();
    for now_ms in [0u64, 25, 50, 75, 100] {
        list.tick(now_ms, &items, &mut renderer);
    }
    assert!(!list.is_animating());
    assert_eq!(first_visible_index(&list, 5), 3);
    assert_eq!(list.scroll().offset(), 350.0);
    assert_eq!(list.scroll().drift(), -1);
}

#[test]
fn scroll_to_index_prefers_the_closer_copy() {
    let items = items();
    let mut list = five_cell_list();
    list.scroll_mut().scroll_to_center(5);

    assert_eq!(list.scroll_to_index(0, &items), Some(250.0));
    assert_eq!(first_visible_index(&list, 5), 0);
    assert_eq!(list.scroll_to_index(5, &items), None);
}

#[test]
fn nearest_slot_falls_back_to_middle_copy() {
    let mut list = five_cell_list();
    list.on_scroll(-100.0);
    assert_eq!(nearest_slot_for_index(list.scroll(), 2, 5), Some(7));
    assert_eq!(nearest_slot_for_index(list.scroll(), 2, 0), None);

    list.scroll_mut().restore(infinite_scroll::ScrollSnapshot {
        offset: -100.0,
        extent: 100.0,
        drift: 6,
    })
    .unwrap();
    let slot = nearest_slot_for_index(list.scroll(), 2, 5).unwrap();
    assert!((5..10).contains(&slot));
    assert_eq!(list.scroll().logical_index_for_slot(slot, 5), Some(2));
}

#[test]
fn anchor_survives_drift_reset() {
    let items = items();
    let mut list = five_cell_list();
    list.layout(&items, &mut CountingRenderer::default());
    list.on_scroll(320.0);

    let anchor = list.capture_first_visible_anchor(&items).unwrap();
    assert_eq!(anchor.index, 0);
    assert_eq!(anchor.offset_in_viewport, 20.0);

    // Forgetting the drift shifts every slot by one item.
    list.scroll_mut().reset_drift();
    assert_eq!(first_visible_index(&list, 5), 1);

    assert!(list.apply_anchor(&anchor, &items));
    assert_eq!(list.scroll().offset(), 270.0);
    assert_eq!(first_visible_index(&list, 5), 0);

    let gone = ScrollAnchor {
        index: 9,
        offset_in_viewport: 0.0,
    };
    assert!(!list.apply_anchor(&gone, &items));
}

#[test]
fn anchor_capture_needs_visible_content() {
    let empty: Vec<&str> = Vec::new();
    let list = five_cell_list();
    assert_eq!(list.capture_first_visible_anchor(&empty), None);

    let mut cells = Vec::new();
    list.collect_visible_cells(&empty, &mut cells);
    assert!(cells.is_empty());
}

#[test]
fn visible_cells_follow_the_drift() {
    let items = items();
    let mut list = five_cell_list();
    list.layout(&items, &mut CountingRenderer::default());

    let mut shown = Vec::new();
    list.for_each_visible_cell(&items, |c| shown.push(items[c.index]));
    assert_eq!(shown, vec!["a", "b"]);
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }

    let mut t = Tween::new(0.0, 100.0, 10, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(11));
    t.retarget(10, 50.0, 20);
    assert_eq!(t.from, 0.0);
    assert_eq!(t.sample(20), 25.0);
    assert_eq!(t.progress(15), 0.25);
    assert_eq!(t.sample(30), 50.0);
    t.translate(-10.0);
    assert_eq!((t.from, t.to), (-10.0, 40.0));
}

#[test]
fn debug_output_hides_the_delegate() {
    let mut list = five_cell_list();
    list.set_delegate(Some(Box::new(Recorder(Rc::new(RefCell::new(Vec::new()))))));
    let s = format!("{list:?}");
    assert!(s.contains("has_delegate: true"));
}

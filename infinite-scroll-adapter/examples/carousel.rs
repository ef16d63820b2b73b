// Example: an auto-advancing carousel driven by tweens and a frame clock.
use infinite_scroll::InfiniteScrollOptions;
use infinite_scroll_adapter::{Easing, InfiniteList, InfiniteListDelegate};

struct Printer;

impl InfiniteListDelegate for Printer {
    fn did_select(&mut self, index: usize) {
        println!("selected item {index}");
    }
}

fn main() -> Result<(), infinite_scroll::ConfigError> {
    let cards = vec!["red", "green", "blue", "amber"];
    let mut list = InfiniteList::new(
        InfiniteScrollOptions::new(120.0)
            .with_padding(8.0)
            .with_initial_extent(256.0),
    )?;
    list.set_delegate(Some(Box::new(Printer)));
    list.scroll_mut().scroll_to_center(cards.len());

    let mut reloads = 0;
    let mut now_ms = 0u64;
    for _ in 0..6 {
        list.start_tween_by_cells(1, now_ms, 200, Easing::EaseOutCubic);
        while list.is_animating() {
            now_ms += 16;
            list.tick(now_ms, &cards, &mut || reloads += 1);
        }
        let mut shown = Vec::new();
        list.for_each_visible_cell(&cards, |c| shown.push(cards[c.index]));
        println!("t={now_ms}ms shown={shown:?}");
    }
    println!("reloads={reloads}");

    if let Some(slot) = list.scroll().visible_slots(cards.len()).next() {
        list.select_slot(slot, &cards);
    }
    Ok(())
}

// Example: a horizontal strip of five cells scrolled far to the right.
use infinite_scroll::{InfiniteScrollOptions, correct};

fn main() -> Result<(), infinite_scroll::ConfigError> {
    let count = 5;
    let mut s = InfiniteScrollOptions::new(50.0)
        .with_initial_extent(100.0)
        .build()?;

    let out = s.on_layout(count);
    println!("first layout: {out:?}");

    for step in 0..6 {
        s.apply_scroll_offset(s.offset() + 70.0);
        let out = s.on_layout(count);
        let mut shown = Vec::new();
        s.for_each_visible_cell(count, |c| shown.push(c.index));
        println!(
            "step={step} offset={:.1} drift={} reload={} shown={shown:?}",
            out.offset, out.drift, out.should_reload
        );
    }

    let slots: Vec<usize> = (0..s.slot_count(count) as i64)
        .map(|slot| correct(slot, count, s.drift()))
        .collect();
    println!("slot -> index: {slots:?}");
    Ok(())
}

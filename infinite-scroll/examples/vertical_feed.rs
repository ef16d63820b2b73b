// Example: a vertical list built from flow-layout parameters, with a snapshot round-trip.
use infinite_scroll::{Axis, InfiniteScrollOptions, ItemLayout};

fn main() -> Result<(), infinite_scroll::ConfigError> {
    let rows = ["inbox", "drafts", "sent", "archive", "spam", "trash"];
    let layout = ItemLayout {
        item_width: 320.0,
        item_height: 44.0,
        inter_item_spacing: 4.0,
    };

    let mut s = InfiniteScrollOptions::from_layout(layout, Axis::Vertical)
        .with_initial_extent(200.0)
        .with_on_recenter(Some(|out: &infinite_scroll::LayoutOutcome| {
            println!("  re-centered by {} cells", out.shift_cells);
        }))
        .build()?;

    s.scroll_to_center(rows.len());
    for _ in 0..8 {
        s.apply_scroll_offset(s.offset() - 60.0);
        s.on_layout(rows.len());
        let first = s.visible_slots(rows.len()).next();
        let label = first
            .and_then(|slot| s.logical_index_for_slot(slot, rows.len()))
            .map(|i| rows[i]);
        println!("offset={:.1} top={label:?}", s.offset());
    }

    let snap = s.snapshot();
    println!("snapshot: {snap:?}");
    Ok(())
}

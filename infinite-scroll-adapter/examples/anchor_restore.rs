// Example: restoring a list from a snapshot that lost its drift, using an anchor.
use infinite_scroll::InfiniteScrollOptions;
use infinite_scroll_adapter::InfiniteList;

fn main() -> Result<(), infinite_scroll::ConfigError> {
    let items: Vec<String> = (0..12).map(|i| format!("item-{i}")).collect();
    let mut list = InfiniteList::new(InfiniteScrollOptions::new(30.0).with_initial_extent(90.0))?;

    list.on_scroll(1_000.0);
    list.layout(&items, &mut || {});
    let anchor = list
        .capture_first_visible_anchor(&items)
        .expect("visible content");
    println!("anchored on {} (+{})", items[anchor.index], anchor.offset_in_viewport);

    let mut snapshot = list.scroll().snapshot();
    snapshot.drift = 0;
    list.scroll_mut().restore(snapshot)?;
    list.apply_anchor(&anchor, &items);

    let mut cells = Vec::new();
    list.collect_visible_cells(&items, &mut cells);
    let names: Vec<&str> = cells.iter().map(|c| items[c.index].as_str()).collect();
    println!("after restore: {names:?}");
    Ok(())
}

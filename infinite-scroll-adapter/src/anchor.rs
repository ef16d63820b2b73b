use infinite_scroll::{InfiniteScroll, correct_slot, slot_count};

/// A scroll anchor that preserves visual position across data or drift changes.
///
/// Typical use cases:
/// - the collection grew or shrank and the list should keep showing the same item first
/// - a persisted list is restored without its drift
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    /// Logical index of the anchored item.
    pub index: usize,
    /// The distance from the anchor cell's start to the viewport's scroll offset.
    pub offset_in_viewport: f64,
}

/// Captures an anchor for the first visible cell.
///
/// Returns `None` if nothing is visible.
pub fn capture_first_visible_anchor(s: &InfiniteScroll, item_count: usize) -> Option<ScrollAnchor> {
    let first = s.visible_slots(item_count).next()?;
    let start = s.viewport().slot_start(first);
    Some(ScrollAnchor {
        index: correct_slot(first, item_count, s.drift()),
        offset_in_viewport: s.offset() - start,
    })
}

/// The slot showing `index` that is closest to the current scroll offset.
///
/// Falls back to the middle copy when the offset is outside the tiled content.
pub fn nearest_slot_for_index(s: &InfiniteScroll, index: usize, item_count: usize) -> Option<usize> {
    if index >= item_count {
        return None;
    }
    let slots = slot_count(item_count);
    let Some(here) = s.viewport().slot_at(s.offset(), item_count) else {
        let phase = (index as i128 + s.drift() as i128).rem_euclid(item_count as i128) as usize;
        return Some(item_count + phase);
    };

    let shown = correct_slot(here, item_count, s.drift());
    let ahead = (index + item_count - shown) % item_count;
    let forward = here + ahead;
    let backward = (forward >= item_count).then(|| forward - item_count);

    let best = match backward {
        Some(back) if forward >= slots || here - back <= forward - here => back,
        _ => forward,
    };
    (best < slots).then_some(best)
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// Returns `true` when the anchor was successfully applied.
pub fn apply_anchor(s: &mut InfiniteScroll, anchor: &ScrollAnchor, item_count: usize) -> bool {
    let Some(slot) = nearest_slot_for_index(s, anchor.index, item_count) else {
        return false;
    };
    let target = s.viewport().slot_start(slot) + anchor.offset_in_viewport;
    s.apply_scroll_offset(target);
    true
}

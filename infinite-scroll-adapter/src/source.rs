/// Read-only view of the item collection.
///
/// Queried once per layout pass; the count must not change while a pass runs.
pub trait DataSource {
    fn item_count(&self) -> usize;
}

impl<T, const N: usize> DataSource for [T; N] {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T> DataSource for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

/// Redraw sink.
///
/// `reload` is called after a layout pass changed the slot → index mapping. The renderer must
/// re-resolve every visible slot (e.g. through `InfiniteList::for_each_visible_cell`).
pub trait Renderer {
    fn reload(&mut self);
}

impl<F: FnMut()> Renderer for F {
    fn reload(&mut self) {
        self()
    }
}

/// Optional user-interaction hooks.
pub trait InfiniteListDelegate {
    /// A cell was selected; `index` is the logical index in the data source.
    fn did_select(&mut self, index: usize) {
        let _ = index;
    }

    /// The user started dragging the list.
    fn will_begin_dragging(&mut self) {}
}

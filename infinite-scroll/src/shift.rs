/// Cumulative whole-cell drift applied across re-centers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftAccumulator {
    drift: i64,
}

impl ShiftAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a previously captured drift (e.g. a restored snapshot).
    pub fn with_drift(drift: i64) -> Self {
        Self { drift }
    }

    pub fn get(&self) -> i64 {
        self.drift
    }

    pub fn add(&mut self, cells: i64) {
        debug_assert!(
            self.drift.checked_add(cells).is_some(),
            "ShiftAccumulator overflow (drift={}, cells={cells})",
            self.drift
        );
        self.drift = self.drift.saturating_add(cells);
    }

    pub fn reset(&mut self) {
        self.drift = 0;
    }
}

/// A lightweight, serializable snapshot of a list's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restoring it puts
/// the viewport back at the same offset with the same drift, so the same items are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub extent: f64,
    pub drift: i64,
}

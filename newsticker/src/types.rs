use alloc::string::String;

use crate::ItemId;

/// Life-cycle phase of a ticker item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Created; width unknown; not yet shown.
    Pending,
    /// Translating left from the trailing viewport edge until the item has
    /// cleared its own width plus the spacing gap.
    Entering,
    /// Continuing left until fully past the leading viewport edge.
    Traveling,
    /// Terminal. The engine drops the item once it gets here.
    Removed,
}

/// One unit of content (e.g. one headline) with its own life cycle.
///
/// Owned exclusively by the engine: created on launch, dropped on removal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickerItem {
    pub id: ItemId,
    /// Display text, immutable once created.
    pub content: String,
    /// Position in the content source at creation time (0-based, used for
    /// click/identity correlation).
    pub sequence_index: usize,
    /// Measured width in pixels; `None` until the host reports layout.
    pub width: Option<u32>,
    pub phase: Phase,
}

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

/// Engine-issued identity of a ticker item. Stable for the item's lifetime.
pub type ItemId = u64;

/// Host-issued opaque handle for a displayable element.
pub type ElementId = u64;

#[cfg(feature = "std")]
pub(crate) type IdMap<V> = HashMap<ItemId, V>;
#[cfg(not(feature = "std"))]
pub(crate) type IdMap<V> = BTreeMap<ItemId, V>;

#[cfg(feature = "std")]
type IdSet = HashSet<ItemId>;
#[cfg(not(feature = "std"))]
type IdSet = BTreeSet<ItemId>;

/// The set of item identities currently under active animation (enter or
/// exit leg).
///
/// An id is present at most once at any time; membership is the sole guard
/// against double-starting an animation from a duplicate layout report.
#[derive(Clone, Debug, Default)]
pub struct AnimatingSet {
    ids: IdSet,
}

impl AnimatingSet {
    pub fn new() -> Self {
        Self { ids: IdSet::new() }
    }

    /// Marks `id` as animating. Returns `false` when it already was.
    pub fn begin(&mut self, id: ItemId) -> bool {
        self.ids.insert(id)
    }

    /// Clears `id`. Returns `false` when it was not animating.
    pub fn finish(&mut self, id: ItemId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear()
    }
}

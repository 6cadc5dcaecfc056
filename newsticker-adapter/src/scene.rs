use alloc::string::String;
use alloc::vec::Vec;

use newsticker::{ElementId, ItemId, TickerHost, TickerItem};

use crate::Motion;

/// One displayable element retained by the [`Scene`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneElement {
    pub element: ElementId,
    pub item: ItemId,
    pub sequence_index: usize,
    pub content: String,
    /// Current horizontal position of the element's leading (left) edge, in
    /// viewport coordinates.
    pub x: i64,
    /// Measured text width; `None` until the embedding UI measures it.
    pub width: Option<u32>,
    pub(crate) motion: Option<Motion>,
}

impl SceneElement {
    /// Whether a viewport x coordinate falls inside this element.
    pub fn contains(&self, x: i64) -> bool {
        match self.width {
            Some(w) => x >= self.x && x < self.x.saturating_add(w as i64),
            None => false,
        }
    }
}

/// A retained, framework-neutral [`TickerHost`].
///
/// The scene holds no real UI objects; it tracks, per element, the position
/// a real element would have at the current clock. An embedding UI draws
/// from [`Scene::for_each_element`] each frame and advances the clock with
/// [`Scene::advance`] (or lets a [`crate::Controller`] do both).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    viewport_width: u32,
    clock_ms: u64,
    next_element: ElementId,
    elements: Vec<SceneElement>,
}

impl Scene {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width,
            clock_ms: 0,
            next_element: 0,
            elements: Vec::new(),
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Sets the clock used as the start time for newly scheduled motions.
    pub fn set_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, item: ItemId) -> Option<&SceneElement> {
        self.elements.iter().find(|el| el.item == item)
    }

    pub(crate) fn element_mut(&mut self, item: ItemId) -> Option<&mut SceneElement> {
        self.elements.iter_mut().find(|el| el.item == item)
    }

    /// Iterates over the retained elements, oldest (leftmost) first.
    pub fn for_each_element(&self, mut f: impl FnMut(&SceneElement)) {
        for el in &self.elements {
            f(el);
        }
    }

    /// Hit-tests a viewport x coordinate to the item drawn there.
    pub fn element_at(&self, x: i64) -> Option<ItemId> {
        // With positive spacing at most one element covers any x.
        self.elements.iter().find(|el| el.contains(x)).map(|el| el.item)
    }

    /// Advances every active motion to `now_ms`.
    ///
    /// Returns the items whose motion just finished; the caller must feed
    /// each into `Ticker::animation_finished` to keep the engine in step.
    pub fn advance(&mut self, now_ms: u64) -> Vec<ItemId> {
        self.clock_ms = now_ms;
        let mut finished = Vec::new();
        for el in &mut self.elements {
            let Some(motion) = el.motion else { continue };
            el.x = motion.sample(now_ms);
            if motion.is_done(now_ms) {
                el.x = motion.target();
                el.motion = None;
                finished.push(el.item);
            }
        }
        finished
    }

    /// Drops one item's in-flight motion without completing it.
    ///
    /// Returns `true` when there was one to drop.
    pub(crate) fn cancel_motion(&mut self, item: ItemId) -> bool {
        match self.element_mut(item) {
            Some(el) => el.motion.take().is_some(),
            None => false,
        }
    }

    /// Drops every in-flight motion, returning the affected items.
    pub(crate) fn cancel_motions(&mut self) -> Vec<ItemId> {
        let mut canceled = Vec::new();
        for el in &mut self.elements {
            if el.motion.take().is_some() {
                canceled.push(el.item);
            }
        }
        canceled
    }
}

impl TickerHost for Scene {
    fn materialize(&mut self, item: &TickerItem) -> ElementId {
        let element = self.next_element;
        self.next_element += 1;
        self.elements.push(SceneElement {
            element,
            item: item.id,
            sequence_index: item.sequence_index,
            content: item.content.clone(),
            // Off-screen, fully beyond the trailing edge.
            x: self.viewport_width as i64,
            width: None,
            motion: None,
        });
        element
    }

    fn animate(&mut self, element: ElementId, delta_x: i64, duration_ms: u64) {
        let clock_ms = self.clock_ms;
        if let Some(el) = self.elements.iter_mut().find(|el| el.element == element) {
            el.motion = Some(Motion::new(el.x, delta_x, clock_ms, duration_ms));
        }
    }

    fn discard(&mut self, element: ElementId) {
        self.elements.retain(|el| el.element != element);
    }
}

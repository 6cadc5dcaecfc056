use alloc::string::ToString;
use alloc::sync::Arc;

use crate::ids::IdMap;
use crate::timing::{enter_leg, exit_leg};
use crate::{
    AnimatingSet, ElementId, Headlines, ItemId, Phase, TickerError, TickerItem, TickerOptions,
};

/// The seam between the engine and the host display layer.
///
/// The engine never renders; it asks the host to create, move, and destroy
/// displayable elements. The host reports back through
/// [`Ticker::report_width`], [`Ticker::animation_finished`],
/// [`Ticker::animation_canceled`], and [`Ticker::item_interacted`].
pub trait TickerHost {
    /// Creates a displayable element for `item`, positioned fully beyond the
    /// trailing (right) viewport edge. The host must eventually report the
    /// element's measured width via [`Ticker::report_width`]; layout systems
    /// may report more than once per element.
    fn materialize(&mut self, item: &TickerItem) -> ElementId;

    /// Schedules a constant-velocity horizontal translation of `delta_x`
    /// pixels over `duration_ms`, continuing from the element's current
    /// position. The host reports completion through
    /// [`Ticker::animation_finished`] exactly once, or not at all if the
    /// animation is canceled.
    fn animate(&mut self, element: ElementId, delta_x: i64, duration_ms: u64);

    /// Detaches and destroys the element.
    fn discard(&mut self, element: ElementId);
}

/// A headless news-ticker engine.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects; elements live behind opaque [`ElementId`]s.
/// - A host drives it with layout and animation-completion events.
/// - All state transitions happen inside those calls, on one logical event
///   stream; the engine is otherwise synchronous and non-blocking.
///
/// The engine owns every in-flight [`TickerItem`] (typically 1-2 at a time:
/// one finishing its exit while the next enters) plus the [`AnimatingSet`]
/// that guards against duplicate layout reports.
#[derive(Clone, Debug)]
pub struct Ticker {
    options: TickerOptions,
    headlines: Headlines,
    viewport_width: u32,
    items: IdMap<TickerItem>,
    elements: IdMap<ElementId>,
    animating: AnimatingSet,
    next_id: ItemId,
}

impl Ticker {
    pub fn new(headlines: Headlines, options: TickerOptions) -> Self {
        let viewport_width = options.initial_viewport_width.unwrap_or(0);
        tdebug!(count = headlines.len(), viewport_width, "Ticker::new");
        Self {
            options,
            headlines,
            viewport_width,
            items: IdMap::new(),
            elements: IdMap::new(),
            animating: AnimatingSet::new(),
            next_id: 0,
        }
    }

    pub fn options(&self) -> &TickerOptions {
        &self.options
    }

    pub fn headlines(&self) -> &Headlines {
        &self.headlines
    }

    /// Replaces the headline sequence.
    ///
    /// Takes effect at the next launch; items already in flight keep the
    /// content they were created with.
    pub fn set_headlines(&mut self, headlines: Headlines) {
        self.headlines = headlines;
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Updates the viewport width. Applies to exit legs computed after this
    /// call; legs already scheduled keep their distance.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn set_travel_speed(&mut self, travel_speed: u64) {
        self.options.travel_speed = travel_speed;
    }

    pub fn set_spacing_width(&mut self, spacing_width: u32) {
        self.options.spacing_width = spacing_width;
    }

    pub fn set_text_color(&mut self, text_color: u32) {
        self.options.text_color = text_color;
    }

    pub fn set_text_size(&mut self, text_size: u32) {
        self.options.text_size = text_size;
    }

    pub fn set_on_headline_selected(
        &mut self,
        on_headline_selected: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_headline_selected = on_headline_selected.map(|f| Arc::new(f) as _);
    }

    pub fn item(&self, id: ItemId) -> Option<&TickerItem> {
        self.items.get(&id)
    }

    /// Number of items currently owned by the engine.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the in-flight items, in no particular order.
    pub fn for_each_item(&self, mut f: impl FnMut(&TickerItem)) {
        for item in self.items.values() {
            f(item);
        }
    }

    pub fn is_animating(&self, id: ItemId) -> bool {
        self.animating.contains(id)
    }

    pub fn animating_count(&self) -> usize {
        self.animating.len()
    }

    /// Starts scrolling the headlines by launching the first item.
    ///
    /// Fails fast when no headlines are set; no partial state is created.
    pub fn run(&mut self, host: &mut impl TickerHost) -> Result<(), TickerError> {
        if self.headlines.is_empty() {
            return Err(TickerError::EmptyContent);
        }
        self.launch(host);
        Ok(())
    }

    /// Applies a layout report for an item's element.
    ///
    /// Layout passes can fire repeatedly for the same element; only the first
    /// report while the item is not in the [`AnimatingSet`] starts the enter
    /// leg. Everything else is a no-op.
    pub fn report_width(&mut self, host: &mut impl TickerHost, id: ItemId, width: u32) {
        if self.animating.contains(id) {
            ttrace!(id, width, "duplicate layout report ignored");
            return;
        }
        let Some(item) = self.items.get_mut(&id) else {
            twarn!(id, "layout report for unknown item");
            return;
        };
        if item.phase != Phase::Pending {
            return;
        }
        item.width = Some(width);
        item.phase = Phase::Entering;
        self.animating.begin(id);

        let leg = enter_leg(width, self.options.spacing_width, self.options.travel_speed);
        ttrace!(
            id,
            width,
            distance = leg.distance,
            duration_ms = leg.duration_ms,
            "entering"
        );
        if leg.is_instant() {
            self.finish_enter(host, id);
            return;
        }
        if let Some(&element) = self.elements.get(&id) {
            host.animate(element, leg.delta_x(), leg.duration_ms);
        }
    }

    /// Reports that a scheduled translation for `id`'s element finished.
    ///
    /// An enter completion launches the next item and starts this item's exit
    /// leg; an exit completion removes the item. Anything else is stale and
    /// ignored.
    pub fn animation_finished(&mut self, host: &mut impl TickerHost, id: ItemId) {
        match self.items.get(&id).map(|item| item.phase) {
            Some(Phase::Entering) => self.finish_enter(host, id),
            Some(Phase::Traveling) => self.finish_travel(host, id),
            Some(_) => twarn!(id, "animation finished in unexpected phase"),
            None => twarn!(id, "animation finished for unknown item"),
        }
    }

    /// Host-initiated cancellation (e.g. the viewport is being destroyed).
    ///
    /// Clears the id from the [`AnimatingSet`] without running completion
    /// logic: no chained launch, no discard request.
    pub fn animation_canceled(&mut self, id: ItemId) {
        ttrace!(id, "animation canceled");
        self.animating.finish(id);
    }

    /// Cancels every in-flight animation. Teardown convenience; equivalent to
    /// [`Ticker::animation_canceled`] for each animating item.
    pub fn cancel_all(&mut self) {
        tdebug!(count = self.animating.len(), "cancel all");
        self.animating.clear();
    }

    /// Forwards a host-level interaction with an item to the registered
    /// `on_headline_selected` observer, mapped to the item's sequence index.
    ///
    /// Interactions with unknown (already removed) items are ignored.
    pub fn item_interacted(&self, id: ItemId) {
        let Some(item) = self.items.get(&id) else {
            ttrace!(id, "interaction with unknown item");
            return;
        };
        if let Some(cb) = &self.options.on_headline_selected {
            cb(item.sequence_index);
        }
    }

    fn launch(&mut self, host: &mut impl TickerHost) {
        let (sequence_index, content) = match self.headlines.next() {
            Ok((index, text)) => (index, text.to_string()),
            Err(_) => {
                // Headlines were replaced with an empty set mid-run; the
                // ticker stalls until content is set and run again.
                twarn!("launch with no headlines");
                return;
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        let item = TickerItem {
            id,
            content,
            sequence_index,
            width: None,
            phase: Phase::Pending,
        };
        tdebug!(id, sequence_index, "launch");
        let element = host.materialize(&item);
        self.items.insert(id, item);
        self.elements.insert(id, element);
    }

    // Enter-complete. The next launch is chained here rather than to a
    // timer: the gap between successive items is always one enter leg, so a
    // longer headline naturally holds the next one back longer.
    fn finish_enter(&mut self, host: &mut impl TickerHost, id: ItemId) {
        self.launch(host);

        if let Some(item) = self.items.get_mut(&id) {
            item.phase = Phase::Traveling;
        }
        let leg = exit_leg(
            self.viewport_width,
            self.options.spacing_width,
            self.options.travel_speed,
        );
        ttrace!(
            id,
            distance = leg.distance,
            duration_ms = leg.duration_ms,
            "traveling"
        );
        if leg.is_instant() {
            self.finish_travel(host, id);
            return;
        }
        if let Some(&element) = self.elements.get(&id) {
            host.animate(element, leg.delta_x(), leg.duration_ms);
        }
    }

    // Travel-complete: the item is fully past the leading edge.
    fn finish_travel(&mut self, host: &mut impl TickerHost, id: ItemId) {
        tdebug!(id, "removed");
        self.animating.finish(id);
        self.items.remove(&id);
        if let Some(element) = self.elements.remove(&id) {
            host.discard(element);
        }
    }
}

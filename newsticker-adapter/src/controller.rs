use alloc::sync::Arc;
use alloc::vec::Vec;

use newsticker::{Headlines, ItemId, Ticker, TickerError, TickerOptions};

use crate::Scene;

/// Measures the pixel width of a headline's text.
///
/// Stands in for the host toolkit's layout pass; adapters typically wrap
/// their font metrics here.
pub type MeasureText = Arc<dyn Fn(&str) -> u32 + Send + Sync>;

/// A framework-neutral controller that owns a [`Ticker`] plus a [`Scene`]
/// and drives both from a single event stream.
///
/// Adapters call:
/// - [`Controller::run`] once, after headlines are set
/// - [`Controller::tick`] each frame/timer tick with a monotonic clock
/// - [`Controller::click_at`] / [`Controller::cancel_all`] on input and
///   teardown
///
/// `tick` serializes every state transition — layout reports for freshly
/// materialized elements, motion sampling, and completion dispatch into the
/// engine — so no two transitions can interleave.
pub struct Controller {
    ticker: Ticker,
    scene: Scene,
    measure_text: MeasureText,
}

impl Controller {
    pub fn new(
        headlines: Headlines,
        options: TickerOptions,
        measure_text: impl Fn(&str) -> u32 + Send + Sync + 'static,
    ) -> Self {
        let viewport_width = options.initial_viewport_width.unwrap_or(0);
        Self {
            ticker: Ticker::new(headlines, options),
            scene: Scene::new(viewport_width),
            measure_text: Arc::new(measure_text),
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut Ticker {
        &mut self.ticker
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.scene.set_viewport_width(width);
        self.ticker.set_viewport_width(width);
    }

    /// Starts scrolling. Fails when no headlines are set.
    pub fn run(&mut self, now_ms: u64) -> Result<(), TickerError> {
        self.scene.set_clock(now_ms);
        self.ticker.run(&mut self.scene)
    }

    /// Advances the controller to `now_ms`.
    ///
    /// Performs, in order: the simulated layout pass (measure elements that
    /// have no width yet and report them), motion sampling, and completion
    /// dispatch.
    pub fn tick(&mut self, now_ms: u64) {
        self.scene.set_clock(now_ms);

        let mut measured: Vec<(ItemId, u32)> = Vec::new();
        self.scene.for_each_element(|el| {
            if el.width.is_none() {
                measured.push((el.item, (self.measure_text)(&el.content)));
            }
        });
        for (item, width) in measured {
            if let Some(el) = self.scene.element_mut(item) {
                el.width = Some(width);
            }
            self.ticker.report_width(&mut self.scene, item, width);
        }

        for item in self.scene.advance(now_ms) {
            self.ticker.animation_finished(&mut self.scene, item);
        }
    }

    /// Forwards a click/tap at viewport coordinate `x`.
    ///
    /// Returns `true` when an element was hit.
    pub fn click_at(&mut self, x: i64) -> bool {
        match self.scene.element_at(x) {
            Some(item) => {
                self.ticker.item_interacted(item);
                true
            }
            None => false,
        }
    }

    /// Cancels one item's in-flight motion and clears its animating guard.
    pub fn cancel(&mut self, item: ItemId) {
        if self.scene.cancel_motion(item) {
            self.ticker.animation_canceled(item);
        }
    }

    /// Cancels everything in flight (viewport teardown).
    pub fn cancel_all(&mut self) {
        for item in self.scene.cancel_motions() {
            self.ticker.animation_canceled(item);
        }
    }
}

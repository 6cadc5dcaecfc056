use alloc::sync::Arc;

/// A callback fired when the host reports an interaction (click/tap) with an
/// item, carrying the headline's sequence index.
pub type HeadlineSelectedCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Default travel speed: milliseconds of animation per pixel of travel.
pub const DEFAULT_TRAVEL_SPEED: u64 = 10;

/// Default gap between successive items, in pixels.
pub const DEFAULT_SPACING_WIDTH: u32 = 100;

/// Default text color, packed ARGB (opaque white).
pub const DEFAULT_TEXT_COLOR: u32 = 0xFFFF_FFFF;

/// Default text size, in pixels.
pub const DEFAULT_TEXT_SIZE: u32 = 28;

/// Configuration for [`crate::Ticker`].
///
/// Cheap to clone: the callback is stored in an `Arc`. `travel_speed` and
/// `spacing_width` feed the duration formulas; `text_color`/`text_size` are
/// pass-through styling for the host with no effect on the state machine.
#[derive(Clone)]
pub struct TickerOptions {
    /// Milliseconds of animation per pixel of horizontal travel.
    pub travel_speed: u64,

    /// Pixel gap kept between the trailing edge of one item and the leading
    /// edge of the next.
    pub spacing_width: u32,

    /// Text color, packed ARGB. Hosts read it when materializing elements.
    pub text_color: u32,

    /// Text size in pixels. Hosts read it when materializing elements.
    pub text_size: u32,

    /// Viewport width applied at construction. Later updates go through
    /// [`crate::Ticker::set_viewport_width`].
    pub initial_viewport_width: Option<u32>,

    /// Optional observer notified when a headline is selected.
    pub on_headline_selected: Option<HeadlineSelectedCallback>,
}

impl TickerOptions {
    pub fn new() -> Self {
        Self {
            travel_speed: DEFAULT_TRAVEL_SPEED,
            spacing_width: DEFAULT_SPACING_WIDTH,
            text_color: DEFAULT_TEXT_COLOR,
            text_size: DEFAULT_TEXT_SIZE,
            initial_viewport_width: None,
            on_headline_selected: None,
        }
    }

    pub fn with_travel_speed(mut self, travel_speed: u64) -> Self {
        self.travel_speed = travel_speed;
        self
    }

    pub fn with_spacing_width(mut self, spacing_width: u32) -> Self {
        self.spacing_width = spacing_width;
        self
    }

    pub fn with_text_color(mut self, text_color: u32) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn with_text_size(mut self, text_size: u32) -> Self {
        self.text_size = text_size;
        self
    }

    /// Sets the viewport width known at construction time.
    pub fn with_initial_viewport_width(mut self, initial_viewport_width: Option<u32>) -> Self {
        self.initial_viewport_width = initial_viewport_width;
        self
    }

    pub fn with_on_headline_selected(
        mut self,
        on_headline_selected: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_headline_selected = on_headline_selected.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for TickerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickerOptions")
            .field("travel_speed", &self.travel_speed)
            .field("spacing_width", &self.spacing_width)
            .field("text_color", &self.text_color)
            .field("text_size", &self.text_size)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .finish_non_exhaustive()
    }
}

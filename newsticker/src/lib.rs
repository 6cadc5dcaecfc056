//! A headless news-ticker (marquee) engine.
//!
//! Text items enter from the trailing edge of a viewport, travel across it at
//! constant speed, and exit the leading edge. The next item is launched the
//! moment the current one has cleared its own width plus the spacing gap, so
//! successive items stay evenly spaced regardless of text length: launch
//! cadence is driven by animation completion, not a timer.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - element creation, translation, and teardown (the [`TickerHost`] seam)
//! - measured element widths (a layout event, possibly repeated)
//! - animation completion and cancellation reports
//!
//! For adapter-level utilities (a retained scene, a tick-driven controller),
//! see the `newsticker-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod headlines;
mod ids;
mod options;
mod ticker;
mod timing;
mod types;

#[cfg(test)]
mod tests;

pub use error::TickerError;
pub use headlines::Headlines;
pub use ids::{AnimatingSet, ElementId, ItemId};
pub use options::{
    DEFAULT_SPACING_WIDTH, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE, DEFAULT_TRAVEL_SPEED,
    HeadlineSelectedCallback, TickerOptions,
};
pub use ticker::{Ticker, TickerHost};
pub use timing::{Leg, enter_leg, exit_leg};
pub use types::{Phase, TickerItem};

/// A single constant-velocity leg of an item's journey across the viewport.
///
/// Only linear translation is modeled: `duration_ms` is always
/// `distance * travel_speed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Leftward travel in pixels.
    pub distance: u32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl Leg {
    fn new(distance: u32, travel_speed: u64) -> Self {
        Self {
            distance,
            duration_ms: (distance as u64).saturating_mul(travel_speed),
        }
    }

    /// A zero-distance leg is never scheduled with the host; the engine
    /// treats the phase as instantly complete.
    pub fn is_instant(&self) -> bool {
        self.distance == 0
    }

    /// Signed horizontal delta to hand to the host. Leftward is negative.
    pub fn delta_x(&self) -> i64 {
        -(self.distance as i64)
    }
}

/// The enter leg: the item clears its own width plus the spacing gap.
///
/// Its duration is also the interval until the next launch, which is what
/// keeps successive items evenly spaced regardless of text length.
pub fn enter_leg(item_width: u32, spacing_width: u32, travel_speed: u64) -> Leg {
    Leg::new(item_width.saturating_add(spacing_width), travel_speed)
}

/// The exit leg: the remaining distance until the item is fully past the
/// leading viewport edge. Saturates at zero for degenerate viewports.
pub fn exit_leg(viewport_width: u32, spacing_width: u32, travel_speed: u64) -> Leg {
    Leg::new(viewport_width.saturating_sub(spacing_width), travel_speed)
}

use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
enum HostCall {
    Materialize {
        item: ItemId,
        sequence_index: usize,
        content: String,
    },
    Animate {
        element: ElementId,
        delta_x: i64,
        duration_ms: u64,
    },
    Discard {
        element: ElementId,
    },
}

/// Records every engine → host request, in order.
#[derive(Debug, Default)]
struct MockHost {
    calls: Vec<HostCall>,
    next_element: ElementId,
}

impl MockHost {
    fn new() -> Self {
        Self::default()
    }

    fn launches(&self) -> Vec<(usize, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Materialize {
                    sequence_index,
                    content,
                    ..
                } => Some((*sequence_index, content.clone())),
                _ => None,
            })
            .collect()
    }

    fn animations(&self) -> Vec<(i64, u64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Animate {
                    delta_x,
                    duration_ms,
                    ..
                } => Some((*delta_x, *duration_ms)),
                _ => None,
            })
            .collect()
    }

    fn discards(&self) -> usize {
        self.discarded_elements().len()
    }

    fn materialized_items(&self) -> Vec<ItemId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Materialize { item, .. } => Some(*item),
                _ => None,
            })
            .collect()
    }

    fn animated_elements(&self) -> Vec<ElementId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Animate { element, .. } => Some(*element),
                _ => None,
            })
            .collect()
    }

    fn discarded_elements(&self) -> Vec<ElementId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Discard { element } => Some(*element),
                _ => None,
            })
            .collect()
    }
}

impl TickerHost for MockHost {
    fn materialize(&mut self, item: &TickerItem) -> ElementId {
        let element = self.next_element;
        self.next_element += 1;
        self.calls.push(HostCall::Materialize {
            item: item.id,
            sequence_index: item.sequence_index,
            content: item.content.clone(),
        });
        element
    }

    fn animate(&mut self, element: ElementId, delta_x: i64, duration_ms: u64) {
        self.calls.push(HostCall::Animate {
            element,
            delta_x,
            duration_ms,
        });
    }

    fn discard(&mut self, element: ElementId) {
        self.calls.push(HostCall::Discard { element });
    }
}

fn ticker(contents: &[&str], spacing: u32, speed: u64, viewport: u32) -> Ticker {
    Ticker::new(
        Headlines::new(contents.iter().copied()),
        TickerOptions::new()
            .with_spacing_width(spacing)
            .with_travel_speed(speed)
            .with_initial_viewport_width(Some(viewport)),
    )
}

#[test]
fn headlines_cycle_in_insertion_order() {
    let mut h = Headlines::new(["a", "b", "c"]);
    assert_eq!(h.len(), 3);

    let mut seen = Vec::new();
    for _ in 0..7 {
        let (index, text) = h.next().unwrap();
        seen.push((index, text.to_string()));
    }
    let indexes: Vec<usize> = seen.iter().map(|(i, _)| *i).collect();
    assert_eq!(indexes, [0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(seen[0].1, "a");
    assert_eq!(seen[5].1, "c");
    assert_eq!(h.get(1), Some("b"));
}

#[test]
fn single_headline_repeats_index_zero() {
    let mut h = Headlines::new(["only"]);
    for _ in 0..3 {
        assert_eq!(h.next().unwrap().0, 0);
    }
}

#[test]
fn next_on_empty_headlines_fails() {
    let mut h = Headlines::default();
    assert_eq!(h.next().unwrap_err(), TickerError::EmptyContent);
    assert!(h.is_empty());
}

#[test]
fn animating_set_holds_each_id_at_most_once() {
    let mut set = AnimatingSet::new();
    assert!(set.begin(7));
    assert!(!set.begin(7));
    assert_eq!(set.len(), 1);
    assert!(set.finish(7));
    assert!(!set.finish(7));
    assert!(set.is_empty());
}

#[test]
fn leg_durations_follow_the_formulas() {
    assert_eq!(
        enter_leg(20, 10, 1),
        Leg {
            distance: 30,
            duration_ms: 30
        }
    );
    assert_eq!(enter_leg(20, 10, 10).duration_ms, 300);
    assert_eq!(enter_leg(20, 10, 1).delta_x(), -30);

    assert_eq!(
        exit_leg(100, 10, 1),
        Leg {
            distance: 90,
            duration_ms: 90
        }
    );
    // Spacing at or beyond the viewport saturates to an instant leg.
    assert!(exit_leg(10, 10, 1).is_instant());
    assert!(exit_leg(5, 10, 1).is_instant());
    assert_eq!(exit_leg(5, 10, 1).duration_ms, 0);
}

#[test]
fn run_with_no_headlines_creates_nothing() {
    let mut host = MockHost::new();
    let mut t = ticker(&[], 10, 1, 100);
    assert_eq!(t.run(&mut host), Err(TickerError::EmptyContent));
    assert!(host.calls.is_empty());
    assert_eq!(t.item_count(), 0);
}

#[test]
fn run_launches_the_first_headline() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one", "two"], 10, 1, 100);
    t.run(&mut host).unwrap();

    assert_eq!(t.item_count(), 1);
    assert_eq!(host.launches(), [(0, "one".to_string())]);
    assert_eq!(host.materialized_items(), [0]);
    assert_eq!(t.item(0).unwrap().phase, Phase::Pending);
    assert_eq!(t.item(0).unwrap().width, None);

    // Nothing animates until the host reports a width.
    assert!(host.animations().is_empty());
    assert_eq!(t.animating_count(), 0);
}

#[test]
fn duplicate_width_reports_schedule_one_animation() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one"], 10, 1, 100);
    t.run(&mut host).unwrap();

    t.report_width(&mut host, 0, 20);
    t.report_width(&mut host, 0, 20);
    t.report_width(&mut host, 0, 25);

    assert_eq!(host.animations(), [(-30, 30)]);
    assert_eq!(host.animated_elements(), [0]);
    assert!(t.is_animating(0));
    // The first report wins; later ones never touch the item.
    assert_eq!(t.item(0).unwrap().width, Some(20));
    assert_eq!(t.item(0).unwrap().phase, Phase::Entering);
}

#[test]
fn two_headlines_full_cycle() {
    let mut host = MockHost::new();
    let mut t = ticker(&["A", "BB"], 10, 1, 100);
    t.run(&mut host).unwrap();
    assert_eq!(host.launches(), [(0, "A".to_string())]);

    // "A" measures 20px: enter leg of 20 + 10 over 30ms.
    t.report_width(&mut host, 0, 20);
    assert_eq!(host.animations(), [(-30, 30)]);

    // Enter completes: "BB" launches, "A" starts its exit leg (100 - 10).
    t.animation_finished(&mut host, 0);
    assert_eq!(
        host.launches(),
        [(0, "A".to_string()), (1, "BB".to_string())]
    );
    assert_eq!(host.animations(), [(-30, 30), (-90, 90)]);
    assert_eq!(t.item(0).unwrap().phase, Phase::Traveling);

    // "BB" measures 30px: enter leg of 30 + 10 over 40ms.
    t.report_width(&mut host, 1, 30);
    assert_eq!(host.animations(), [(-30, 30), (-90, 90), (-40, 40)]);

    // Its enter completes: the cursor wraps back to "A".
    t.animation_finished(&mut host, 1);
    assert_eq!(host.launches().last().unwrap(), &(0, "A".to_string()));

    // "A"'s exit completes: discarded and dropped from engine ownership.
    t.animation_finished(&mut host, 0);
    assert_eq!(host.discarded_elements(), [0]);
    assert!(t.item(0).is_none());
    assert!(!t.is_animating(0));
}

#[test]
fn launch_count_tracks_enter_completions_plus_one() {
    let mut host = MockHost::new();
    let mut t = ticker(&["x", "yy", "zzz"], 5, 2, 200);
    t.run(&mut host).unwrap();

    let mut completions = 0;
    for id in 0..6u64 {
        t.report_width(&mut host, id, 10 + id as u32);
        t.animation_finished(&mut host, id);
        completions += 1;
        assert_eq!(host.launches().len(), completions + 1);
    }
}

#[test]
fn cancellation_clears_the_guard_without_side_effects() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one", "two"], 10, 1, 100);
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);
    assert!(t.is_animating(0));

    let launches = host.launches().len();
    t.animation_canceled(0);

    assert!(!t.is_animating(0));
    assert_eq!(host.launches().len(), launches);
    assert_eq!(host.discards(), 0);
}

#[test]
fn cancel_all_clears_every_animating_item() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one", "two"], 10, 1, 100);
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);
    t.animation_finished(&mut host, 0); // 0 travels, 1 launches
    t.report_width(&mut host, 1, 30); // 1 enters
    assert_eq!(t.animating_count(), 2);

    t.cancel_all();
    assert_eq!(t.animating_count(), 0);
    assert_eq!(host.discards(), 0);
}

#[test]
fn exit_distance_of_zero_removes_the_item_immediately() {
    let mut host = MockHost::new();
    // Viewport equal to the spacing width: the exit leg is empty.
    let mut t = ticker(&["one", "two"], 100, 1, 100);
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);
    t.animation_finished(&mut host, 0);

    assert_eq!(host.discards(), 1);
    assert!(t.item(0).is_none());
    assert!(!t.is_animating(0));
    // Only the enter leg was ever scheduled.
    assert_eq!(host.animations().len(), 1);
    // The completion still paced the next launch.
    assert_eq!(host.launches().len(), 2);
}

#[test]
fn zero_enter_distance_completes_the_phase_inline() {
    let mut host = MockHost::new();
    let mut t = ticker(&["", "b"], 0, 1, 50);
    t.run(&mut host).unwrap();

    t.report_width(&mut host, 0, 0);

    // The enter leg was instant: no enter animation was scheduled, but the
    // next launch happened and the exit leg (50 - 0) was.
    assert_eq!(host.launches().len(), 2);
    assert_eq!(host.animations(), [(-50, 50)]);
    assert_eq!(t.item(0).unwrap().phase, Phase::Traveling);
    assert!(t.is_animating(0));
}

#[test]
fn stale_events_are_ignored() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one"], 10, 1, 100);
    t.run(&mut host).unwrap();

    t.report_width(&mut host, 42, 20);
    t.animation_finished(&mut host, 42);

    assert!(host.animations().is_empty());
    assert_eq!(host.discards(), 0);
    assert_eq!(t.item_count(), 1);
}

#[test]
fn viewport_updates_apply_to_later_exit_legs() {
    let mut host = MockHost::new();
    let mut t = ticker(&["one", "two"], 10, 1, 100);
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);

    t.set_viewport_width(60);
    t.animation_finished(&mut host, 0);
    assert_eq!(host.animations().last().unwrap(), &(-50, 50));
}

#[test]
fn interaction_reports_the_sequence_index() {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selected);

    let mut host = MockHost::new();
    let mut t = Ticker::new(
        Headlines::new(["one", "two"]),
        TickerOptions::new()
            .with_spacing_width(10)
            .with_travel_speed(1)
            .with_initial_viewport_width(Some(100))
            .with_on_headline_selected(Some(move |index| {
                sink.lock().unwrap().push(index);
            })),
    );
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);
    t.animation_finished(&mut host, 0); // launches item 1

    t.item_interacted(0);
    t.item_interacted(1);
    t.item_interacted(99); // unknown: ignored
    assert_eq!(*selected.lock().unwrap(), [0, 1]);

    // After removal the item no longer resolves.
    t.animation_finished(&mut host, 0);
    t.item_interacted(0);
    assert_eq!(*selected.lock().unwrap(), [0, 1]);
}

#[test]
fn replacing_headlines_affects_the_next_launch() {
    let mut host = MockHost::new();
    let mut t = ticker(&["old"], 10, 1, 100);
    t.run(&mut host).unwrap();
    t.report_width(&mut host, 0, 20);

    t.set_headlines(Headlines::new(["new"]));
    t.animation_finished(&mut host, 0);
    assert_eq!(host.launches().last().unwrap(), &(0, "new".to_string()));
}

#[test]
fn option_defaults_and_builders() {
    let opts = TickerOptions::new();
    assert_eq!(opts.travel_speed, DEFAULT_TRAVEL_SPEED);
    assert_eq!(opts.spacing_width, DEFAULT_SPACING_WIDTH);
    assert_eq!(opts.text_color, DEFAULT_TEXT_COLOR);
    assert_eq!(opts.text_size, DEFAULT_TEXT_SIZE);
    assert_eq!(opts.initial_viewport_width, None);

    let opts = opts
        .with_travel_speed(3)
        .with_spacing_width(7)
        .with_text_color(0xFF00_0000)
        .with_text_size(32)
        .with_initial_viewport_width(Some(640));
    assert_eq!((opts.travel_speed, opts.spacing_width), (3, 7));
    assert_eq!((opts.text_color, opts.text_size), (0xFF00_0000, 32));
    assert_eq!(opts.initial_viewport_width, Some(640));
}

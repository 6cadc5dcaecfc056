// Example: launch cadence driven by enter-leg completions.
use newsticker::{ElementId, Headlines, Ticker, TickerHost, TickerItem, TickerOptions};

struct PrintHost {
    next_element: ElementId,
}

impl TickerHost for PrintHost {
    fn materialize(&mut self, item: &TickerItem) -> ElementId {
        println!(
            "materialize #{} (headline {}): {:?}",
            item.id, item.sequence_index, item.content
        );
        let element = self.next_element;
        self.next_element += 1;
        element
    }

    fn animate(&mut self, element: ElementId, delta_x: i64, duration_ms: u64) {
        println!("animate     el{element}: {delta_x}px over {duration_ms}ms");
    }

    fn discard(&mut self, element: ElementId) {
        println!("discard     el{element}");
    }
}

fn main() {
    let mut host = PrintHost { next_element: 0 };
    let mut ticker = Ticker::new(
        Headlines::new([
            "Breaking: example compiles",
            "Markets rally on cadence news",
            "Weather: windy, 40px gaps",
        ]),
        TickerOptions::new()
            .with_travel_speed(10)
            .with_spacing_width(40)
            .with_initial_viewport_width(Some(480)),
    );
    ticker.run(&mut host).expect("headlines set");

    // Play the host's part: report layout, then complete each enter leg.
    // Every completion launches the next headline, so the interval between
    // launches is exactly one enter duration.
    for id in 0..4u64 {
        let width = 80 + 20 * id as u32;
        ticker.report_width(&mut host, id, width);
        ticker.animation_finished(&mut host, id);
    }

    // Complete the outstanding exit legs.
    for id in 0..4u64 {
        ticker.animation_finished(&mut host, id);
    }
    println!("in flight at exit: {}", ticker.item_count());
}

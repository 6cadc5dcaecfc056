// Example: a frame-loop driven ticker with a click listener.
use newsticker::{Headlines, TickerOptions};
use newsticker_adapter::Controller;

fn main() {
    let mut c = Controller::new(
        Headlines::new([
            "Rust 1.85 ships the 2024 edition",
            "Local parade draws record crowds downtown",
            "Forecast: brisk winds, scrolling text",
        ]),
        TickerOptions::new()
            .with_travel_speed(10)
            .with_spacing_width(60)
            .with_initial_viewport_width(Some(640))
            .with_on_headline_selected(Some(|index| {
                println!("            headline {index} selected");
            })),
        // Stand-in for real font metrics: a fixed-width glyph.
        |text| 12 * text.len() as u32,
    );
    c.run(0).expect("headlines set");

    // Simulate a 60fps frame loop for a few seconds.
    let mut now_ms = 0u64;
    while now_ms < 6_000 {
        now_ms += 16;
        c.tick(now_ms);

        if now_ms % 480 == 0 {
            print!("t={now_ms:>4}ms |");
            c.scene().for_each_element(|el| {
                print!(" #{}@{:>4}px", el.sequence_index, el.x);
            });
            println!();
        }

        // Poke the middle of the viewport once.
        if now_ms == 4_000 {
            c.click_at(320);
        }
    }
}

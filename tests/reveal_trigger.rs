mod common;

use std::time::{Duration, Instant};

use termfolio::site::SectionId;
use termfolio::ui::app::App;
use termfolio::ui::reveal::{stagger, Reveal, VisibilityTrigger, STAGGER_STEP};

// -- the latch ----------------------------------------------------------

#[test]
fn entered_fires_at_most_once_per_instance() {
    let mut trigger = VisibilityTrigger::at_ratio(0.2);
    let samples = [0.0, 0.3, 0.0, 1.0, 0.25, 0.0, 0.9];
    let fired: Vec<bool> = samples
        .into_iter()
        .map(|ratio| trigger.observe(ratio))
        .collect();
    assert_eq!(fired.iter().filter(|&&f| f).count(), 1);
    assert!(fired[1], "fires on the first crossing");
}

#[test]
fn threshold_is_inclusive_and_clamped() {
    let mut at_one = VisibilityTrigger::at_ratio(1.0);
    assert!(!at_one.observe(0.99));
    assert!(at_one.observe(1.0));

    // A zero threshold is pushed into (0, 1]: a ratio of zero cannot fire it.
    let mut clamped = VisibilityTrigger::at_ratio(0.0);
    assert!(!clamped.observe(0.0));
    assert!(clamped.observe(0.001));
}

// -- the stagger function -----------------------------------------------

#[test]
fn stagger_is_pure_and_linear() {
    for index in 0..8 {
        let pose = stagger(true, index);
        assert_eq!(pose.delay, STAGGER_STEP * index);
        assert!(pose.visible);
        assert_eq!(pose, stagger(true, index));
    }
    assert!(!stagger(false, 3).visible);
}

#[test]
fn reveal_gates_children_on_elapsed_time() {
    let reveal = Reveal::new(true, STAGGER_STEP * 3);
    assert!(reveal.child(3));
    assert!(!reveal.child(4));
    assert!(!Reveal::hidden().triggered());
}

// -- wired into the page ------------------------------------------------

fn app_with_viewport(rows: u16) -> App {
    let mut app = App::new();
    app.on_resize(rows, Instant::now());
    app
}

#[test]
fn sections_reveal_as_the_user_scrolls_down() {
    let mut app = app_with_viewport(40);
    let now = Instant::now();

    assert!(app.reveal(SectionId::Home, now).triggered());
    assert!(!app.reveal(SectionId::About, now).triggered());

    // Scroll one viewport down: the about section crosses its threshold.
    app.scroll_by(40, now);
    assert!(app.reveal(SectionId::About, now).triggered());

    // Way down: the contact section reveals and stays revealed.
    app.scroll_to_bottom(now);
    assert!(app.reveal(SectionId::Contact, now).triggered());
    app.scroll_to_top(now);
    assert!(app.reveal(SectionId::Contact, now).triggered());
}

#[test]
fn a_section_never_scrolled_to_stays_hidden_forever() {
    let mut app = app_with_viewport(40);
    let start = Instant::now();
    // Ticks pass, timers fire, but the viewport never moves.
    for seconds in 1..30 {
        app.on_tick(start + Duration::from_secs(seconds));
    }
    assert!(!app.reveal(SectionId::Contact, start + Duration::from_secs(30)).triggered());
}

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use typespeed::runtime::{Event, FixedTicker, Runner, TestEventSource};
use typespeed::session::{Session, SessionConfig, SessionStatus};

// No TTY anywhere in this file: the runner is fed from a plain channel
// and the session consumes whatever it yields, exactly like the real loop.
#[test]
fn headless_typing_completes_over_a_channel() {
    let mut session = Session::new(SessionConfig {
        custom_prompt: Some("up".to_string()),
        ..Default::default()
    });

    let (tx, rx) = mpsc::channel();

    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for c in ['u', 'p'] {
        tx.send(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
            .unwrap();
    }

    // drive the loop until the session reports finished, bounded steps
    for _ in 0..100u32 {
        match runner.step() {
            Event::Tick => session.on_tick(),
            Event::Resize => {}
            Event::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    session.write(c);
                    if session.has_finished() {
                        break;
                    }
                }
            }
        }
    }

    assert!(session.has_finished(), "prompt should be consumed");
    assert_eq!(session.accuracy, 100);
    assert_eq!(session.errors, 0);
}

#[test]
fn headless_countdown_finishes_by_time() {
    let mut session = Session::new(SessionConfig {
        time_limit_secs: 15,
        seed: Some(5),
        ..Default::default()
    });

    // The clock only runs once typing has started
    session.write('x');
    assert_eq!(session.status, SessionStatus::Running);

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // With no events queued every step times out into a tick
    for _ in 0..50u32 {
        if let Event::Tick = runner.step() {
            session.on_tick();
        }
        if session.has_finished() {
            break;
        }
    }

    assert!(
        session.has_finished(),
        "timed session should finish by countdown"
    );
    assert_eq!(session.seconds_remaining, 0);
    assert_eq!(session.wpm_samples.len(), 15);
}

#[test]
fn headless_backspace_cannot_erase_correct_input() {
    let mut session = Session::new(SessionConfig {
        custom_prompt: Some("ab".to_string()),
        ..Default::default()
    });

    session.write('a');
    session.write('x');
    assert_eq!(session.input, "ax");

    // The wrong character comes off
    session.backspace();
    assert_eq!(session.input, "a");

    // The correct one is locked in
    session.backspace();
    assert_eq!(session.input, "a");

    session.write('b');
    assert!(session.has_finished());
}

#[test]
fn headless_stale_ticks_after_finish_are_inert() {
    let mut session = Session::new(SessionConfig {
        custom_prompt: Some("ok".to_string()),
        ..Default::default()
    });

    session.write('o');
    session.write('k');
    assert!(session.has_finished());

    let frozen_remaining = session.seconds_remaining;
    let frozen_samples = session.wpm_samples.len();

    // Ticks queued before the finish was observed must not move the clock
    for _ in 0..5 {
        session.on_tick();
    }

    assert_eq!(session.seconds_remaining, frozen_remaining);
    assert_eq!(session.wpm_samples.len(), frozen_samples);
}

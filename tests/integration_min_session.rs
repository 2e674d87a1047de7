// Drives the compiled binary through a pseudo terminal: real event loop,
// real crossterm input, real alternate-screen setup and teardown.
//
// These need a TTY (expectrl allocates one), so they are Unix-only and
// ignored by default. Run them by hand with
// `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn typing_the_prompt_reaches_results_and_esc_exits() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("typespeed");
    let mut p = spawn(format!("{} -p ok", bin.display()))?;

    // Let the app settle into the alternate screen before typing
    std::thread::sleep(Duration::from_millis(200));

    // Completing the custom prompt lands on the results screen
    p.send("ok")?;
    std::thread::sleep(Duration::from_millis(200));

    // ESC quits from any screen
    p.send("\x1b")?;

    p.expect(Eof)?;
    Ok(())
}

#[test]
#[ignore]
fn leaderboard_roundtrip_and_exit() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("typespeed");
    let mut p = spawn(format!("{} -p ok", bin.display()))?;

    std::thread::sleep(Duration::from_millis(200));

    p.send("ok")?;
    std::thread::sleep(Duration::from_millis(100));

    // Results -> leaderboard -> back -> quit
    p.send("l")?;
    std::thread::sleep(Duration::from_millis(100));
    p.send("b")?;
    std::thread::sleep(Duration::from_millis(100));
    p.send("\x1b")?;

    p.expect(Eof)?;
    Ok(())
}

use pretty_assertions::assert_eq;
use std::time::Duration;
use stopwatch::console::{Format, Session};
use stopwatch::{InvalidStateError, ManualClock, State, Stopwatch};

#[test]
fn console_walkthrough() {
    let clock = ManualClock::new();
    let mut sw = Stopwatch::with_clock(clock.clone());

    sw.start().unwrap();
    assert_eq!(sw.start(), Err(InvalidStateError::AlreadyStarted));
    clock.advance(Duration::from_millis(1000));
    sw.stop().unwrap();
    assert_eq!(sw.duration(), 1.0);
    assert_eq!(sw.stop(), Err(InvalidStateError::NotStarted));

    sw.start().unwrap();
    clock.advance(Duration::from_millis(500));
    sw.stop().unwrap();
    assert_eq!(sw.duration(), 1.5);

    sw.reset();
    sw.start().unwrap();
    clock.advance(Duration::from_millis(250));
    sw.stop().unwrap();

    assert_eq!(sw.duration(), 0.25);
    assert_eq!(sw.state(), State::Idle);
    assert_eq!(sw.laps(), 1);
}

#[test]
fn session_over_buffers() {
    let clock = ManualClock::new();
    let stopwatch = Stopwatch::with_clock(clock.clone());
    let mut session = Session::new(stopwatch, Vec::new(), Format::Json);

    session.run("start()\n".as_bytes()).unwrap();
    clock.advance(Duration::from_millis(750));
    session
        .run("stop()\nstop()\nduration\nreset\nstatus\nquit\nstart\n".as_bytes())
        .unwrap();

    assert!(!session.stopwatch().is_running());

    let output = String::from_utf8(session.into_output()).unwrap();
    let replies: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(
        replies,
        vec![
            serde_json::json!({ "ok": true }),
            serde_json::json!({ "ok": true }),
            serde_json::json!({ "error": "Stopwatch is not started." }),
            serde_json::json!({ "duration": 0.75 }),
            serde_json::json!({ "ok": true }),
            serde_json::json!({ "state": "idle", "running": false, "duration": 0.0, "laps": 0 }),
        ]
    );
}

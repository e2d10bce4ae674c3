use intelx_fx::FxConfig;
use intelx_fx::terminal::{Effect, Entry, FixedClock, Key, Phase, SCRIPT, Terminal};

const STAMP: &str = "2025-10-17T08:30:05.123Z";

fn terminal(seed: u32) -> Terminal {
    Terminal::new(&FxConfig::default(), seed, Box::new(FixedClock(STAMP.into())))
}

fn submit(t: &mut Terminal, now: f64, line: &str) {
    for c in line.chars() {
        t.key(now, Key::Char(c));
    }
    t.key(now, Key::Enter);
}

/// Ticks a 16ms frame clock up to `until`
fn run(t: &mut Terminal, from: f64, until: f64) -> f64 {
    let mut now = from;
    while now < until {
        now += 16.0;
        t.tick(now);
    }
    now
}

#[test]
fn scripted_playback_loops_forever() {
    let mut t = terminal(3);
    t.start(0.0);
    t.drain_effects();

    let mut now = 0.0;
    let mut restarts = 0;
    let mut last_phase = t.phase();
    while restarts < 3 && now < 600_000.0 {
        now += 16.0;
        t.tick(now);
        let effects = t.drain_effects();
        if let Some(pos) = effects.iter().position(|e| *e == Effect::Clear) {
            restarts += 1;
            assert_eq!(last_phase, Phase::SequencePause);
            assert!(t.log().is_empty());
            // First line starts typing in the same step
            assert_eq!(effects[pos + 1], Effect::Live(String::new()));
            assert_eq!(t.phase(), Phase::Typing { line: 0, ch: 1 });
        }
        last_phase = t.phase();
    }
    assert!(restarts >= 2, "saw {restarts} restarts");
}

#[test]
fn full_pass_commits_every_line_in_order() {
    let mut t = terminal(8);
    t.start(0.0);
    let mut now = 0.0;
    while t.phase() != Phase::SequencePause {
        now = run(&mut t, now, now + 16.0);
    }
    let lines: Vec<&str> = t.log().lines().collect();
    assert_eq!(lines, SCRIPT);
    assert_eq!(t.live(), "");
}

#[test]
fn scan_then_download_offers_the_report() {
    let mut t = terminal(5);
    submit(&mut t, 0.0, "scan target-x");
    let now = run(&mut t, 0.0, 2200.0);
    submit(&mut t, now, "download-report");

    let Some(Entry::Link(link)) = t.log().entries().last() else {
        panic!("no download link");
    };
    assert!(link.text.contains("Target: target-x"));

    let stem = link
        .filename
        .strip_prefix("intelx-scan-")
        .and_then(|s| s.strip_suffix(".txt"))
        .expect("filename pattern");
    assert!(!stem.is_empty());
    assert!(!stem.contains(':') && !stem.contains('.'));
}

#[test]
fn download_before_any_scan() {
    let mut t = terminal(1);
    t.run(0.0, "download-report");
    let hits: Vec<&str> = t
        .log()
        .lines()
        .filter(|l| l.contains("No report available."))
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(t.log().len(), 1);
}

#[test]
fn download_before_scan_finishes() {
    let mut t = terminal(1);
    submit(&mut t, 0.0, "scan");
    submit(&mut t, 10.0, "report");
    assert!(t.log().lines().any(|l| l == "No report available. Run a scan first."));
}

#[test]
fn unknown_command() {
    let mut t = terminal(1);
    submit(&mut t, 0.0, "foobar");
    let lines: Vec<&str> = t.log().lines().collect();
    assert_eq!(lines[0], "root@intelx:~$ foobar");
    assert!(lines[1].contains("Unknown command: foobar"));
    assert!(lines[1].contains("help"));
}

#[test]
fn backspace_on_empty_buffer() {
    let mut t = terminal(1);
    t.key(0.0, Key::Backspace);
    assert!(t.input().is_empty());
    assert_eq!(t.live(), "");
}

#[test]
fn blank_submit_echoes_nothing() {
    let mut t = terminal(1);
    submit(&mut t, 0.0, "    ");
    t.key(0.0, Key::Enter);
    assert!(t.log().is_empty());
    assert!(
        !t.drain_effects()
            .iter()
            .any(|e| matches!(e, Effect::Append(_)))
    );
}

#[test]
fn clear_during_playback_keeps_the_script_going() {
    let mut t = terminal(2);
    t.start(0.0);
    submit(&mut t, 100.0, "clear");
    assert!(t.log().is_empty());
    let now = run(&mut t, 100.0, 5000.0);
    assert!(now >= 5000.0);
    assert!(t.log().lines().any(|l| l == SCRIPT[2]));
}

#[test]
fn scan_reveals_the_banner_once_per_scan() {
    let mut t = terminal(4);
    submit(&mut t, 0.0, "scan");
    t.drain_effects();
    run(&mut t, 0.0, 2200.0);
    let reveals = t
        .drain_effects()
        .into_iter()
        .filter(|e| *e == Effect::RevealBanner)
        .count();
    assert_eq!(reveals, 1);
}

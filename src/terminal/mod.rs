// terminal/ - Fake command-line session
//
// One `Terminal` owns every piece of session state: scripted playback, the
// committed log, the live slot, the input line and the latest scan report.
// It never touches the page. Each change is also queued as an `Effect` that
// the view mirrors onto the DOM.
//
// Playback and keyboard input both write the live slot without any
// coordination. Typing while the script runs makes them trample each other,
// which is accepted.

mod command;
mod input;
mod log;
mod playback;
mod report;

pub use command::{Command, DEFAULT_TARGET, HELP};
pub use input::{InputBuffer, Key};
pub use log::{Entry, OutputLog, ReportLink};
pub use playback::{Phase, Playback, SCRIPT, Step};
pub use report::{FixedClock, ScanReport, WallClock};

use tracing::{debug, trace};

use crate::config::{FxConfig, Pacing};
use crate::rng::Xorshift32;

/// Change to mirror onto the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the live slot's text
    Live(String),
    Append(Entry),
    Clear,
    /// Unhide the home banner, if the page has one
    RevealBanner,
}

#[derive(Clone, Debug)]
struct PendingScan {
    due: f64,
    target: String,
}

pub struct Terminal {
    pacing: Pacing,
    prompt: String,

    playback: Playback,
    log: OutputLog,
    live: String,
    input: InputBuffer,

    report: Option<ScanReport>,
    // Sorted by deadline; never cancelled
    pending: Vec<PendingScan>,

    rng: Xorshift32,
    clock: Box<dyn WallClock>,
    effects: Vec<Effect>,
}

impl Terminal {
    pub fn new(cfg: &FxConfig, seed: u32, clock: Box<dyn WallClock>) -> Self {
        Self {
            pacing: cfg.pacing.clone(),
            prompt: cfg.prompt.clone(),
            playback: Playback::new(&SCRIPT),
            log: OutputLog::new(),
            live: String::new(),
            input: InputBuffer::new(),
            report: None,
            pending: Vec::new(),
            rng: Xorshift32::new(seed),
            clock,
            effects: Vec::new(),
        }
    }

    /// Commit the opening lines and schedule the first keystroke
    pub fn start(&mut self, now: f64) {
        let seeded = self.playback.start(now, &self.pacing);
        for line in seeded {
            self.append(Entry::Line((*line).to_string()));
        }
        debug!(seeded = seeded.len(), "scripted playback started");
    }

    /// Advance every deadline that has passed
    pub fn tick(&mut self, now: f64) {
        let mut steps = Vec::new();
        self.playback.poll(now, &self.pacing, &mut self.rng, &mut steps);
        for step in steps {
            match step {
                Step::Live(text) => self.set_live(text),
                Step::Commit(line) => self.append(Entry::Line(line.to_string())),
                Step::Restart => {
                    trace!("script restart");
                    self.clear();
                }
            }
        }

        let ready = self.pending.partition_point(|p| p.due <= now);
        let fired: Vec<PendingScan> = self.pending.drain(..ready).collect();
        for scan in fired {
            self.finish_scan(&scan.target);
        }
    }

    /// Feed one key while the terminal has focus
    pub fn key(&mut self, now: f64, key: Key) {
        match key {
            Key::Backspace => {
                self.input.backspace();
                let text = self.input.as_str().to_string();
                self.set_live(text);
            }
            Key::Enter => self.submit(now),
            Key::Char(c) => {
                self.input.push(c);
                let text = self.input.as_str().to_string();
                self.set_live(text);
            }
        }
    }

    /// Echo and run the current input line, then reset it
    pub fn submit(&mut self, now: f64) {
        let line = self.input.take();
        if !line.is_empty() {
            self.append(Entry::Line(format!("{}{}", self.prompt, line)));
            self.run(now, &line);
        }
        self.set_live(String::new());
    }

    pub fn run(&mut self, now: f64, line: &str) {
        let cmd = Command::parse(line);
        trace!(?cmd, "dispatch");
        match cmd {
            Command::Empty => {}
            Command::Help => {
                for text in HELP {
                    self.append(Entry::Line(text.to_string()));
                }
            }
            Command::Clear => self.clear(),
            Command::Scan { target } => {
                self.append(Entry::Line(format!("Starting simulated scan on: {target}")));
                self.append(Entry::Line("Scanning...".into()));
                let delay = self.rng.jitter(self.pacing.scan_base, self.pacing.scan_jitter);
                let due = now + delay;
                let at = self.pending.partition_point(|p| p.due <= due);
                self.pending.insert(at, PendingScan { due, target });
            }
            Command::DownloadReport => match &self.report {
                None => self.append(Entry::Line("No report available. Run a scan first.".into())),
                Some(report) => {
                    let link = ReportLink {
                        filename: report.filename.clone(),
                        text: report.text.clone(),
                    };
                    self.append(Entry::Line(format!(
                        "Report ready: {} (click link to download)",
                        link.filename
                    )));
                    self.append(Entry::Link(link));
                }
            },
            Command::Unknown(input) => self.append(Entry::Line(command::unknown_message(&input))),
        }
    }

    fn finish_scan(&mut self, target: &str) {
        let report = ScanReport::generate(target, &self.clock.iso_now());
        debug!(scan_target = target, file = %report.filename, "scan complete");
        self.append(Entry::Line(format!("Scan complete. Summary: {}", report.summary)));
        self.append(Entry::Line("Use download-report to save a copy.".into()));
        self.report = Some(report);
        self.effects.push(Effect::RevealBanner);
    }

    fn append(&mut self, entry: Entry) {
        self.log.push(entry.clone());
        self.effects.push(Effect::Append(entry));
    }

    fn clear(&mut self) {
        self.log.clear();
        self.effects.push(Effect::Clear);
    }

    fn set_live(&mut self, text: String) {
        self.live.clone_from(&text);
        self.effects.push(Effect::Live(text));
    }

    /// Take queued effects in order
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn log(&self) -> &OutputLog { &self.log }
    pub fn live(&self) -> &str { &self.live }
    pub fn input(&self) -> &InputBuffer { &self.input }
    pub fn report(&self) -> Option<&ScanReport> { self.report.as_ref() }
    pub fn phase(&self) -> Phase { self.playback.phase() }
    pub fn pending_scans(&self) -> usize { self.pending.len() }

    /// Earliest deadline still outstanding
    pub fn next_due(&self) -> Option<f64> {
        let scan = self.pending.first().map(|p| p.due);
        match (self.playback.due(), scan) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: &str = "2025-10-17T08:30:05.123Z";

    fn terminal() -> Terminal {
        Terminal::new(&FxConfig::default(), 7, Box::new(FixedClock(STAMP.into())))
    }

    fn type_line(t: &mut Terminal, now: f64, line: &str) {
        for c in line.chars() {
            t.key(now, Key::Char(c));
        }
        t.key(now, Key::Enter);
    }

    #[test]
    fn start_commits_two_lines() {
        let mut t = terminal();
        t.start(0.0);
        let lines: Vec<&str> = t.log().lines().collect();
        assert_eq!(lines, &SCRIPT[..2]);
        assert_eq!(t.next_due(), Some(800.0));
    }

    #[test]
    fn keys_echo_into_live_slot() {
        let mut t = terminal();
        t.key(0.0, Key::Char('h'));
        t.key(0.0, Key::Char('i'));
        assert_eq!(t.live(), "hi");
        t.key(0.0, Key::Backspace);
        assert_eq!(t.live(), "h");
        assert_eq!(
            t.drain_effects(),
            vec![
                Effect::Live("h".into()),
                Effect::Live("hi".into()),
                Effect::Live("h".into()),
            ]
        );
    }

    #[test]
    fn empty_submit_is_silent() {
        let mut t = terminal();
        type_line(&mut t, 0.0, "   ");
        assert!(t.log().is_empty());
        assert_eq!(t.live(), "");
        assert!(t.input().is_empty());
    }

    #[test]
    fn submit_echoes_with_prompt() {
        let mut t = terminal();
        type_line(&mut t, 0.0, "  help ");
        let lines: Vec<&str> = t.log().lines().collect();
        assert_eq!(lines[0], "root@intelx:~$ help");
        assert_eq!(lines.len(), 1 + HELP.len());
    }

    #[test]
    fn clear_empties_log() {
        let mut t = terminal();
        t.start(0.0);
        t.run(0.0, "clear");
        assert!(t.log().is_empty());
        assert!(t.drain_effects().ends_with(&[Effect::Clear]));
    }

    #[test]
    fn scan_reports_after_delay() {
        let mut t = terminal();
        t.run(100.0, "scan lab");
        let lines: Vec<&str> = t.log().lines().collect();
        assert_eq!(lines, vec!["Starting simulated scan on: lab", "Scanning..."]);
        assert_eq!(t.pending_scans(), 1);

        t.tick(1299.0);
        assert!(t.report().is_none());

        t.tick(100.0 + 2100.0);
        assert_eq!(t.pending_scans(), 0);
        let report = t.report().expect("report stored");
        assert!(report.text.contains("Target: lab"));
        let lines: Vec<&str> = t.log().lines().collect();
        assert_eq!(lines[2], "Scan complete. Summary: 3 hosts found");
        assert_eq!(lines[3], "Use download-report to save a copy.");
        assert!(t.drain_effects().contains(&Effect::RevealBanner));
    }

    #[test]
    fn newest_scan_wins() {
        let mut t = terminal();
        t.run(0.0, "scan first");
        t.tick(5000.0);
        t.run(5000.0, "scan second");
        t.tick(10_000.0);
        assert!(t.report().unwrap().text.contains("Target: second"));
    }

    #[test]
    fn overlapping_scans_both_complete() {
        let mut t = terminal();
        t.run(0.0, "scan a");
        t.run(10.0, "scan b");
        assert_eq!(t.pending_scans(), 2);
        t.tick(10_000.0);
        assert_eq!(t.pending_scans(), 0);
        let done = t.log().lines().filter(|l| l.starts_with("Scan complete")).count();
        assert_eq!(done, 2);
    }

    #[test]
    fn download_without_scan() {
        let mut t = terminal();
        t.run(0.0, "download-report");
        let lines: Vec<&str> = t.log().lines().collect();
        assert_eq!(lines, vec!["No report available. Run a scan first."]);
    }

    #[test]
    fn download_appends_link() {
        let mut t = terminal();
        t.run(0.0, "scan");
        t.tick(3000.0);
        t.run(3000.0, "report");
        let Some(Entry::Link(link)) = t.log().entries().last() else {
            panic!("expected a link entry");
        };
        assert_eq!(link.filename, "intelx-scan-2025-10-17T08-30-05-123Z.txt");
        assert_eq!(link.label(), "[Download intelx-scan-2025-10-17T08-30-05-123Z.txt]");
        assert!(link.text.contains("Target: local-network"));
    }

    #[test]
    fn unknown_command_suggests_help() {
        let mut t = terminal();
        t.run(0.0, "foobar");
        let line = t.log().lines().next().unwrap();
        assert!(line.contains("Unknown command: foobar"));
        assert!(line.contains("help"));
    }

    #[test]
    fn playback_and_input_share_the_slot() {
        let mut t = terminal();
        t.start(0.0);
        t.key(0.0, Key::Char('x'));
        assert_eq!(t.live(), "x");
        t.tick(800.0);
        // Script overwrote the slot; the buffer is untouched
        assert_eq!(t.live(), "");
        assert_eq!(t.input().as_str(), "x");
    }
}

// playback.rs - Scripted typing loop
//
// State machine stepped by deadline. Each step types one more character,
// commits a finished line, or restarts the script after the long pause.
//
//   Typing(l, c) --c <= len--> Typing(l, c+1)         [char delay]
//   Typing(l, c) --c >  len--> LinePause(l+1)         [line delay]
//   LinePause(n) -----------> Typing(n, 0) ...        (steps immediately)
//   Typing(len, _) ---------> SequencePause           [sequence pause]
//   SequencePause ----------> Typing(0, 0) ...        (clears the log)

use crate::config::Pacing;
use crate::rng::Xorshift32;
use crate::schedule::Timer;

pub const SCRIPT: [&str; 8] = [
    "Initializing INTELX v2.7",
    "Loading modules: net, decrypt, scanner",
    "Establishing secure shell... OK",
    "Scanning network: 192.168.0.0/24",
    "Found 7 hosts, starting probe...",
    "Probe complete. Open ports: 22,80,443",
    "Saving report to /var/log/intelx/report-2025-10-17.log",
    "All systems nominal.",
];

/// Lines committed up front so the log is never empty on load
const PRESEED: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// `ch` is the prefix length shown next; it runs to `len + 1`,
    /// the extra step being the commit
    Typing { line: usize, ch: usize },
    LinePause { next: usize },
    SequencePause,
}

/// Output of one step, applied by the owning terminal
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Live(String),
    Commit(&'static str),
    Restart,
}

pub struct Playback {
    script: &'static [&'static str],
    phase: Phase,
    timer: Timer,
}

impl Playback {
    pub fn new(script: &'static [&'static str]) -> Self {
        Self { script, phase: Phase::Idle, timer: Timer::idle() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn due(&self) -> Option<f64> {
        self.timer.due()
    }

    /// Returns the pre-seeded lines and schedules the first step
    pub fn start(&mut self, now: f64, pacing: &Pacing) -> &'static [&'static str] {
        let seeded = PRESEED.min(self.script.len());
        self.phase = Phase::Typing { line: seeded, ch: 0 };
        self.timer.arm(now, pacing.start_delay);
        &self.script[..seeded]
    }

    /// Runs the step if its deadline has passed
    pub fn poll(&mut self, now: f64, pacing: &Pacing, rng: &mut Xorshift32, out: &mut Vec<Step>) {
        if !self.timer.fire(now) {
            return;
        }
        match self.phase {
            Phase::Idle => {}
            Phase::Typing { .. } => self.type_step(now, pacing, rng, out),
            Phase::LinePause { next } => {
                self.phase = Phase::Typing { line: next, ch: 0 };
                self.type_step(now, pacing, rng, out);
            }
            Phase::SequencePause => {
                out.push(Step::Restart);
                self.phase = Phase::Typing { line: 0, ch: 0 };
                self.type_step(now, pacing, rng, out);
            }
        }
    }

    fn type_step(&mut self, now: f64, pacing: &Pacing, rng: &mut Xorshift32, out: &mut Vec<Step>) {
        let Phase::Typing { line, ch } = self.phase else {
            return;
        };

        let Some(&text) = self.script.get(line) else {
            out.push(Step::Live(String::new()));
            self.phase = Phase::SequencePause;
            self.timer.arm(now, pacing.sequence_pause);
            return;
        };

        if ch <= text.chars().count() {
            out.push(Step::Live(text.chars().take(ch).collect()));
            self.phase = Phase::Typing { line, ch: ch + 1 };
            self.timer.arm(now, rng.jitter(pacing.char_base, pacing.char_jitter));
        } else {
            out.push(Step::Commit(text));
            out.push(Step::Live(String::new()));
            self.phase = Phase::LinePause { next: line + 1 };
            self.timer.arm(now, rng.jitter(pacing.line_base, pacing.line_jitter));
        }
    }
}

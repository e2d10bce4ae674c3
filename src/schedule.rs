// schedule.rs - Deadline helpers for the single-frame driver
//
// Times are milliseconds on one monotonic clock (`performance.now()` in the
// browser, a virtual clock in tests and the replay binary).

/// One-shot deadline. Re-arming replaces the previous deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer {
    due: Option<f64>,
}

impl Timer {
    pub fn idle() -> Self {
        Self { due: None }
    }

    pub fn arm(&mut self, now: f64, delay: f64) {
        self.due = Some(now + delay);
    }

    pub fn due(&self) -> Option<f64> {
        self.due
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Disarms and returns true once `now` has reached the deadline.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Trailing-edge debounce: every `trigger` pushes the deadline out again.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: f64,
    timer: Timer,
}

impl Debounce {
    pub fn new(delay: f64) -> Self {
        Self { delay, timer: Timer::idle() }
    }

    pub fn trigger(&mut self, now: f64) {
        self.timer.arm(now, self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn poll(&mut self, now: f64) -> bool {
        self.timer.fire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once() {
        let mut t = Timer::idle();
        t.arm(100.0, 50.0);
        assert!(!t.fire(149.0));
        assert!(t.fire(150.0));
        assert!(!t.fire(500.0));
    }

    #[test]
    fn debounce_rearms_on_each_trigger() {
        let mut d = Debounce::new(150.0);
        d.trigger(0.0);
        d.trigger(100.0);
        assert!(!d.poll(200.0));
        assert!(d.is_pending());
        assert!(d.poll(250.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn idle_debounce_never_fires() {
        let mut d = Debounce::new(150.0);
        assert!(!d.poll(10_000.0));
    }
}

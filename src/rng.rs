// rng.rs - Small xorshift32 generator
//
// Shared by the rain field (glyphs, restarts) and the terminal (typing jitter).
// Not cryptographic, not meant to be.

#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { 0xDEADBEEF } else { seed };
        Self { state }
    }

    /// Uniform in [0, 1)
    #[inline(always)]
    pub fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f64 * (1.0 / 16777216.0)
    }

    /// `base + r * jitter`, the pacing formula used for every delay
    #[inline]
    pub fn jitter(&mut self, base: f64, jitter: f64) -> f64 {
        base + self.next_f64() * jitter
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(0xDEADBEEF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_interval() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut a = Xorshift32::new(0);
        let mut b = Xorshift32::default();
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn jitter_is_bounded() {
        let mut rng = Xorshift32::new(99);
        for _ in 0..1000 {
            let d = rng.jitter(24.0, 80.0);
            assert!((24.0..104.0).contains(&d));
        }
    }
}

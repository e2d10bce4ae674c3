// drops.rs - Per-column fall positions
//
// One entry per column, measured in character rows. Only the position is
// state; the glyph is re-rolled every frame.

use super::{Frame, Glyph};
use crate::rng::Xorshift32;

const KATAKANA_BASE: u32 = 0x30A0;
const KATAKANA_SPAN: f64 = 96.0;

pub struct Drops {
    pub y: Vec<f64>,
}

impl Drops {
    pub fn new() -> Self {
        Self { y: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Reallocate for `columns`, each starting `r * depth` rows above the top
    pub fn reset(&mut self, columns: usize, depth: f64, rng: &mut Xorshift32) {
        self.y.clear();
        self.y.extend((0..columns).map(|_| rng.next_f64() * -depth));
    }

    /// Emit one glyph per column, then advance every column by a row.
    /// Columns below `visible_h` restart at the top only when the roll beats
    /// `threshold`, so streams drift out of phase.
    pub fn update(
        &mut self,
        font: f64,
        visible_h: f64,
        threshold: f64,
        frame: &mut Frame,
        rng: &mut Xorshift32,
    ) {
        for (i, row) in self.y.iter_mut().enumerate() {
            let ch = random_glyph(rng);
            let x = i as f64 * font;
            let y = *row * font;
            frame.push(Glyph { ch, x, y });

            if y > visible_h && rng.next_f64() > threshold {
                *row = 0.0;
            }
            *row += 1.0;
        }
    }
}

impl Default for Drops {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn random_glyph(rng: &mut Xorshift32) -> char {
    let offset = (rng.next_f64() * KATAKANA_SPAN) as u32;
    // Whole block is assigned, but stay total anyway
    char::from_u32(KATAKANA_BASE + offset).unwrap_or('\u{30A0}')
}

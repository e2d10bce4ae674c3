// frame.rs - Glyphs to paint this frame
//
// Filled by `RainField::tick`, drained by whichever surface paints it.
// Coordinates are logical (CSS) pixels, baseline-anchored like fillText.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

pub struct Frame {
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

// rain/ - Falling-glyph columns
//
// Pure simulation: sizing, per-column state and the glyph list for one
// frame. Painting lives in `web::canvas`.

mod drops;
mod frame;

pub use drops::Drops;
pub use frame::{Frame, Glyph};

use crate::config::RainConfig;
use crate::rng::Xorshift32;

/// Which drawing surface the page provides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceMode {
    /// Sized to the window
    FullWindow,
    /// Sized to the element's own box
    Widget,
}

impl SurfaceMode {
    pub fn font_size(self, cfg: &RainConfig) -> f64 {
        match self {
            SurfaceMode::FullWindow => cfg.full_font,
            SurfaceMode::Widget => cfg.widget_font,
        }
    }
}

/// Measured surface size in CSS pixels plus the device pixel ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
}

impl SurfaceMetrics {
    pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
        // Missing or nonsense ratio counts as 1
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            dpr,
        }
    }

    pub fn pixel_width(&self) -> u32 {
        (self.css_width * self.dpr).floor() as u32
    }

    pub fn pixel_height(&self) -> u32 {
        (self.css_height * self.dpr).floor() as u32
    }

    /// floor(logical width / font), logical width taken from the backing store
    pub fn columns(&self, font: f64) -> usize {
        let logical = self.pixel_width() as f64 / self.dpr;
        (logical / font).floor() as usize
    }
}

/// Rain simulation for one surface
pub struct RainField {
    mode: SurfaceMode,
    font: f64,
    spawn_depth: f64,
    reset_threshold: f64,

    metrics: SurfaceMetrics,
    columns: usize,

    drops: Drops,
    frame: Frame,
    rng: Xorshift32,
}

impl RainField {
    pub fn new(mode: SurfaceMode, cfg: &RainConfig, metrics: SurfaceMetrics, seed: u32) -> Self {
        let mut field = Self {
            mode,
            font: mode.font_size(cfg),
            spawn_depth: cfg.spawn_depth,
            reset_threshold: cfg.reset_threshold,
            metrics,
            columns: 0,
            drops: Drops::new(),
            frame: Frame::new(),
            rng: Xorshift32::new(seed),
        };
        field.setup(metrics);
        field
    }

    /// Recompute size and reallocate every column. Prior phase is lost.
    pub fn setup(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
        self.columns = metrics.columns(self.font);
        self.drops.reset(self.columns, self.spawn_depth, &mut self.rng);
        self.frame.clear();
    }

    pub fn tick(&mut self) {
        self.frame.clear();
        self.drops.update(
            self.font,
            self.metrics.css_height,
            self.reset_threshold,
            &mut self.frame,
            &mut self.rng,
        );
    }

    pub fn mode(&self) -> SurfaceMode { self.mode }
    pub fn font_size(&self) -> f64 { self.font }
    pub fn columns(&self) -> usize { self.columns }
    pub fn metrics(&self) -> SurfaceMetrics { self.metrics }
    pub fn drops(&self) -> &Drops { &self.drops }
    pub fn frame(&self) -> &Frame { &self.frame }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(mode: SurfaceMode, w: f64, h: f64, dpr: f64) -> RainField {
        RainField::new(mode, &RainConfig::default(), SurfaceMetrics::new(w, h, dpr), 42)
    }

    #[test]
    fn full_window_uses_large_font() {
        let f = field(SurfaceMode::FullWindow, 1280.0, 720.0, 1.0);
        assert_eq!(f.font_size(), 16.0);
        assert_eq!(f.columns(), 80);
        assert_eq!(f.drops().len(), 80);
    }

    #[test]
    fn widget_uses_small_font() {
        let f = field(SurfaceMode::Widget, 300.0, 240.0, 2.0);
        assert_eq!(f.font_size(), 12.0);
        assert_eq!(f.columns(), 25);
        assert_eq!(f.metrics().pixel_width(), 600);
        assert_eq!(f.metrics().pixel_height(), 480);
    }

    #[test]
    fn fractional_ratio_floors_backing_store_first() {
        // 333 * 1.5 = 499.5 -> 499 px -> 332.67 logical -> 20 columns at 16px
        let m = SurfaceMetrics::new(333.0, 100.0, 1.5);
        assert_eq!(m.pixel_width(), 499);
        assert_eq!(m.columns(16.0), 20);
    }

    #[test]
    fn bad_ratio_defaults_to_one() {
        assert_eq!(SurfaceMetrics::new(10.0, 10.0, 0.0).dpr, 1.0);
        assert_eq!(SurfaceMetrics::new(10.0, 10.0, f64::NAN).dpr, 1.0);
    }

    #[test]
    fn tick_paints_one_glyph_per_column() {
        let mut f = field(SurfaceMode::FullWindow, 640.0, 480.0, 1.0);
        f.tick();
        assert_eq!(f.frame().len(), 40);
        f.tick();
        assert_eq!(f.frame().len(), 40);
    }

    #[test]
    fn setup_reallocates_drops() {
        let mut f = field(SurfaceMode::FullWindow, 640.0, 480.0, 1.0);
        f.tick();
        f.setup(SurfaceMetrics::new(160.0, 480.0, 1.0));
        assert_eq!(f.columns(), 10);
        assert_eq!(f.drops().len(), 10);
        assert!(f.frame().is_empty());
    }

    #[test]
    fn tiny_surface_has_no_columns() {
        let mut f = field(SurfaceMode::Widget, 5.0, 5.0, 1.0);
        assert_eq!(f.columns(), 0);
        f.tick();
        assert!(f.frame().is_empty());
    }
}

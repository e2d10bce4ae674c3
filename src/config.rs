// config.rs - Tunables for both effects
//
// Defaults reproduce the shipped page. The browser layer may override pacing
// and the prompt from `window.intelxFx`; see `web::options`.

/// Rain appearance and resize behaviour
#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    /// Font size (px) on the full-window surface
    pub full_font: f64,
    /// Font size (px) on the embedded widget surface
    pub widget_font: f64,
    /// Drops start at `-r * spawn_depth` rows
    pub spawn_depth: f64,
    /// A column past the bottom restarts when `r > reset_threshold`
    pub reset_threshold: f64,
    pub fade_style: String,
    pub glyph_style: String,
    pub resize_debounce_ms: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            full_font: 16.0,
            widget_font: 12.0,
            spawn_depth: 1000.0,
            reset_threshold: 0.975,
            fade_style: "rgba(0, 0, 0, 0.05)".into(),
            glyph_style: "#33ff33".into(),
            resize_debounce_ms: 150.0,
        }
    }
}

/// Terminal delays in milliseconds. Every delay is `base + r * jitter`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pacing {
    pub char_base: f64,
    pub char_jitter: f64,
    pub line_base: f64,
    pub line_jitter: f64,
    pub sequence_pause: f64,
    pub start_delay: f64,
    pub scan_base: f64,
    pub scan_jitter: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            char_base: 24.0,
            char_jitter: 80.0,
            line_base: 600.0,
            line_jitter: 800.0,
            sequence_pause: 4000.0,
            start_delay: 800.0,
            scan_base: 1200.0,
            scan_jitter: 900.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub rain: RainConfig,
    pub pacing: Pacing,
    /// Echo prefix for submitted input
    pub prompt: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            rain: RainConfig::default(),
            pacing: Pacing::default(),
            prompt: "root@intelx:~$ ".into(),
        }
    }
}

// ============================================================================
// INTELX FX - Katakana rain and a scripted fake terminal for the landing page
// ============================================================================
//
// rain/      column simulation for the falling glyphs
// terminal/  scripted typing, line input, fake commands and scan reports
// web/       page wiring (wasm32 only): canvas painting, DOM view, frame loop
//
// Everything outside web/ is plain Rust and runs under `cargo test` on the
// host.

pub mod config;
pub mod error;
pub mod rain;
pub mod rng;
pub mod schedule;
pub mod terminal;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::{FxConfig, Pacing, RainConfig};
pub use error::FxError;
pub use rain::{RainField, SurfaceMetrics, SurfaceMode};
pub use terminal::{Effect, Key, ScanReport, Terminal};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web::mount().map_err(Into::into)
}

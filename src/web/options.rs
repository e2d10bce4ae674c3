// options.rs - Page-level overrides from `window.intelxFx`
//
// Example:
//   window.intelxFx = { typingSpeed: 40, prompt: "guest@intelx:~$ " };

use js_sys::Reflect;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::config::FxConfig;
use crate::error::{FxError, Result};

const GLOBAL: &str = "intelxFx";

/// Defaults with any valid overrides applied. Bad values are logged and skipped.
pub fn load(window: &Window) -> FxConfig {
    let mut cfg = FxConfig::default();
    let Ok(obj) = Reflect::get(window, &JsValue::from_str(GLOBAL)) else {
        return cfg;
    };
    if obj.is_undefined() || obj.is_null() {
        return cfg;
    }

    let p = &mut cfg.pacing;
    let numbers: [(&str, &mut f64); 9] = [
        ("typingSpeed", &mut p.char_base),
        ("typingJitter", &mut p.char_jitter),
        ("linePause", &mut p.line_base),
        ("lineJitter", &mut p.line_jitter),
        ("sequencePause", &mut p.sequence_pause),
        ("startDelay", &mut p.start_delay),
        ("scanDelay", &mut p.scan_base),
        ("scanJitter", &mut p.scan_jitter),
        ("resizeDebounce", &mut cfg.rain.resize_debounce_ms),
    ];
    for (key, slot) in numbers {
        if let Err(err) = read_number(&obj, key, slot) {
            warn!(%err, "ignoring option");
        }
    }
    if let Err(err) = read_string(&obj, "prompt", &mut cfg.prompt) {
        warn!(%err, "ignoring option");
    }
    cfg
}

fn get(obj: &JsValue, key: &str) -> Result<Option<JsValue>> {
    let v = Reflect::get(obj, &JsValue::from_str(key))?;
    Ok((!v.is_undefined() && !v.is_null()).then_some(v))
}

fn read_number(obj: &JsValue, key: &str, slot: &mut f64) -> Result<()> {
    let Some(v) = get(obj, key)? else {
        return Ok(());
    };
    match v.as_f64() {
        Some(n) if n.is_finite() && n >= 0.0 => {
            *slot = n;
            Ok(())
        }
        Some(_) => Err(FxError::option(key, "expected a non-negative number")),
        None => Err(FxError::option(key, "expected a number")),
    }
}

fn read_string(obj: &JsValue, key: &str, slot: &mut String) -> Result<()> {
    let Some(v) = get(obj, key)? else {
        return Ok(());
    };
    *slot = v
        .as_string()
        .ok_or_else(|| FxError::option(key, "expected a string"))?;
    Ok(())
}

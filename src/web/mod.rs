// web/ - Page wiring
//
// Finds the page elements, builds whichever effects the page supports and
// drives them all from one requestAnimationFrame loop. A missing element
// leaves its effect inert; nothing here throws for that.

mod canvas;
mod options;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, Window};

use crate::config::{FxConfig, RainConfig};
use crate::error::{FxError, Result};
use crate::rain::RainField;
use crate::schedule::Debounce;
use crate::terminal::{Key, Terminal};

use canvas::CanvasSurface;
use view::{JsClock, TerminalView};

struct RainStage {
    field: RainField,
    surface: CanvasSurface,
    cfg: RainConfig,
}

struct TerminalStage {
    term: Terminal,
    view: TerminalView,
}

impl TerminalStage {
    fn flush(&mut self) {
        for effect in self.term.drain_effects() {
            if let Err(err) = self.view.apply(&effect) {
                warn!(%err, "terminal update failed");
            }
        }
    }
}

struct App {
    window: Window,
    rain: Option<RainStage>,
    terminal: Option<TerminalStage>,
    resize: Debounce,
}

impl App {
    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn frame(&mut self, now: f64) {
        if let Some(rain) = &mut self.rain {
            if self.resize.poll(now) {
                if let Err(err) = resize(rain) {
                    warn!(%err, "rain resize failed");
                }
            }
            rain.field.tick();
            if let Err(err) = rain.surface.paint(&rain.field, &rain.cfg) {
                warn!(%err, "rain paint failed");
            }
        }

        if let Some(stage) = &mut self.terminal {
            stage.term.tick(now);
            stage.flush();
        }
    }

    fn on_key(&mut self, event: &KeyboardEvent) {
        let now = self.now();
        let Some(stage) = &mut self.terminal else {
            return;
        };
        if !stage.view.region_has_focus() {
            return;
        }
        let Some(key) = Key::from_dom(&event.key()) else {
            return;
        };
        if key.consumes_default() {
            event.prevent_default();
        }
        stage.term.key(now, key);
        stage.flush();
    }
}

fn resize(rain: &mut RainStage) -> Result<()> {
    let metrics = rain.surface.measure()?;
    rain.surface.apply(&metrics)?;
    rain.field.setup(metrics);
    debug!(columns = rain.field.columns(), "rain resized");
    Ok(())
}

fn seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

fn mount_rain(window: &Window, document: &web_sys::Document, cfg: &FxConfig) -> Result<Option<RainStage>> {
    let Some(surface) = CanvasSurface::find(window, document)? else {
        debug!("no rain surface on page");
        return Ok(None);
    };
    let metrics = surface.measure()?;
    surface.apply(&metrics)?;
    let field = RainField::new(surface.mode(), &cfg.rain, metrics, seed());
    debug!(mode = ?surface.mode(), columns = field.columns(), "rain mounted");
    Ok(Some(RainStage { field, surface, cfg: cfg.rain.clone() }))
}

fn mount_terminal(document: &web_sys::Document, cfg: &FxConfig, now: f64) -> Option<TerminalStage> {
    let Some(view) = TerminalView::find(document) else {
        debug!("no terminal on page");
        return None;
    };
    let mut term = Terminal::new(cfg, seed(), Box::new(JsClock));
    term.start(now);
    let mut stage = TerminalStage { term, view };
    stage.flush();
    Some(stage)
}

/// Wire everything the page supports. Safe to call on any page.
pub fn mount() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| FxError::Js("no window".into()))?;
    let Some(document) = window.document() else {
        return Ok(());
    };
    let cfg = options::load(&window);

    let rain = match mount_rain(&window, &document, &cfg) {
        Ok(rain) => rain,
        Err(err) => {
            warn!(%err, "rain disabled");
            None
        }
    };

    let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
    let terminal = mount_terminal(&document, &cfg, now);

    if rain.is_none() && terminal.is_none() {
        return Ok(());
    }

    let region = terminal
        .as_ref()
        .and_then(|t| t.view.region().cloned());

    let app = Rc::new(RefCell::new(App {
        window: window.clone(),
        rain,
        terminal,
        resize: Debounce::new(cfg.rain.resize_debounce_ms),
    }));

    // Resize: re-arm the debounce; the frame loop does the work
    {
        let app = app.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let mut app = app.borrow_mut();
            let now = app.now();
            app.resize.trigger(now);
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    {
        let app = app.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().on_key(&event);
        });
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    if let Some(region) = region {
        let target = region.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let _ = target.focus();
        });
        region.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    start_loop(&window, app)
}

/// Self-rescheduling requestAnimationFrame loop
fn start_loop(window: &Window, app: Rc<RefCell<App>>) -> Result<()> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        app.borrow_mut().frame(now);
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                warn!(err = ?err, "frame loop stopped");
            }
        }
    }));

    if let Some(cb) = slot.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

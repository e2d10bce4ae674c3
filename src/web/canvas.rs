// canvas.rs - 2D canvas surface for the rain field

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::config::RainConfig;
use crate::error::{FxError, Result};
use crate::rain::{RainField, SurfaceMetrics, SurfaceMode};

const FULL_ID: &str = "matrix";
const WIDGET_ID: &str = "smatrix";

pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    mode: SurfaceMode,
}

impl CanvasSurface {
    /// Full-window canvas wins over the widget when both exist.
    /// `Ok(None)` means the page has no rain surface.
    pub fn find(window: &Window, document: &Document) -> Result<Option<Self>> {
        let (el, mode) = match document.get_element_by_id(FULL_ID) {
            Some(el) => (el, SurfaceMode::FullWindow),
            None => match document.get_element_by_id(WIDGET_ID) {
                Some(el) => (el, SurfaceMode::Widget),
                None => return Ok(None),
            },
        };
        let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() else {
            return Ok(None);
        };
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FxError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext)?;

        Ok(Some(Self { window: window.clone(), canvas, ctx, mode }))
    }

    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    pub fn measure(&self) -> Result<SurfaceMetrics> {
        let dpr = self.window.device_pixel_ratio();
        let (w, h) = match self.mode {
            SurfaceMode::FullWindow => (
                self.window.inner_width()?.as_f64().unwrap_or(0.0),
                self.window.inner_height()?.as_f64().unwrap_or(0.0),
            ),
            SurfaceMode::Widget => {
                let rect = self.canvas.get_bounding_client_rect();
                (rect.width(), rect.height())
            }
        };
        Ok(SurfaceMetrics::new(w, h, dpr))
    }

    /// Size the backing store to the metrics and scale drawing to CSS pixels
    pub fn apply(&self, m: &SurfaceMetrics) -> Result<()> {
        self.canvas.set_width(m.pixel_width());
        self.canvas.set_height(m.pixel_height());
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", m.css_width))?;
        style.set_property("height", &format!("{}px", m.css_height))?;
        self.ctx.set_transform(m.dpr, 0.0, 0.0, m.dpr, 0.0, 0.0)?;
        Ok(())
    }

    /// Fade the previous frame, then draw this frame's glyphs
    pub fn paint(&self, field: &RainField, cfg: &RainConfig) -> Result<()> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&cfg.fade_style);
        ctx.fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);

        ctx.set_fill_style_str(&cfg.glyph_style);
        ctx.set_font(&format!("{}px monospace", field.font_size()));

        let mut buf = [0u8; 4];
        for g in field.frame().glyphs() {
            ctx.fill_text(g.ch.encode_utf8(&mut buf), g.x, g.y)?;
        }
        Ok(())
    }
}

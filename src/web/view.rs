// view.rs - Mirrors terminal effects onto the page

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

use crate::error::Result;
use crate::terminal::{Effect, Entry, ReportLink, WallClock};

const OUTPUT_ID: &str = "terminal-output";
const TYPING_ID: &str = "typing";
const REGION_ID: &str = "terminal";
const BANNER_ID: &str = "home-banner";

const LINK_COLOR: &str = "#7fff7f";

pub struct TerminalView {
    document: Document,
    output: HtmlElement,
    typing: HtmlElement,
    region: Option<HtmlElement>,
    banner: Option<HtmlElement>,
}

impl TerminalView {
    /// Needs both the output log and the live slot, else `None`
    pub fn find(document: &Document) -> Option<Self> {
        let html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };
        Some(Self {
            document: document.clone(),
            output: html(OUTPUT_ID)?,
            typing: html(TYPING_ID)?,
            region: html(REGION_ID),
            banner: html(BANNER_ID),
        })
    }

    /// The focusable input region, if the page has one
    pub fn region(&self) -> Option<&HtmlElement> {
        self.region.as_ref()
    }

    pub fn region_has_focus(&self) -> bool {
        let Some(region) = &self.region else {
            return false;
        };
        self.document
            .active_element()
            .is_some_and(|active| region.is_same_node(Some(active.as_ref())))
    }

    pub fn apply(&self, effect: &Effect) -> Result<()> {
        match effect {
            Effect::Live(text) => self.typing.set_text_content(Some(text.as_str())),
            Effect::Append(Entry::Line(text)) => {
                let p = self.document.create_element("p")?;
                p.set_text_content(Some(text.as_str()));
                self.output.append_child(&p)?;
                self.scroll_to_end();
            }
            Effect::Append(Entry::Link(link)) => {
                let a = self.download_anchor(link)?;
                self.output.append_child(&a)?;
                self.scroll_to_end();
            }
            Effect::Clear => self.output.set_inner_html(""),
            Effect::RevealBanner => {
                if let Some(banner) = &self.banner {
                    banner.style().set_property("display", "block")?;
                }
            }
        }
        Ok(())
    }

    fn download_anchor(&self, link: &ReportLink) -> Result<HtmlAnchorElement> {
        let parts = Array::of1(&JsValue::from_str(&link.text));
        let opts = BlobPropertyBag::new();
        opts.set_type("text/plain");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let a = self
            .document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(JsValue::from)?;
        a.set_href(&url);
        a.set_download(&link.filename);
        a.set_text_content(Some(link.label().as_str()));

        let style = a.style();
        style.set_property("color", LINK_COLOR)?;
        style.set_property("display", "inline-block")?;
        style.set_property("margin", "6px 0")?;
        Ok(a)
    }

    fn scroll_to_end(&self) {
        self.output.set_scroll_top(self.output.scroll_height());
    }
}

/// Browser wall clock
pub struct JsClock;

impl WallClock for JsClock {
    fn iso_now(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }
}

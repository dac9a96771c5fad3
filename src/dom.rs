use crate::core::style::StyleCommand;
use crate::core::{check_required, ConfigError};
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds on the page's high-resolution clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attaches one shared click handler to every element matching `selector`.
/// Returns how many elements were wired.
pub fn add_click_listener_all(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + 'static,
) -> u32 {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return 0;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let mut wired = 0;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if node
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                wired += 1;
            }
        }
    }
    closure.forget();
    wired
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Elements the animation writes styles to, looked up once at startup.
pub struct ElementCache {
    elements: FnvHashMap<&'static str, web::HtmlElement>,
}

impl ElementCache {
    /// Resolves every id, failing with the full list of missing ones.
    pub fn resolve(document: &web::Document, ids: &[&'static str]) -> Result<Self, ConfigError> {
        check_required(ids.iter().copied(), |id| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                .is_some()
        })?;
        let elements = ids
            .iter()
            .filter_map(|&id| {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                    .map(|el| (id, el))
            })
            .collect();
        Ok(Self { elements })
    }

    pub fn get(&self, id: &str) -> Option<&web::HtmlElement> {
        self.elements.get(id)
    }

    pub fn apply(&self, styles: &[StyleCommand]) {
        for cmd in styles {
            let Some(el) = self.elements.get(cmd.element) else {
                log::warn!("[dom] no cached element #{}", cmd.element);
                continue;
            };
            let value = cmd.value.css_value();
            if let Err(e) = el.style().set_property(cmd.value.property(), &value) {
                log::warn!("[dom] #{} {}: {:?}", cmd.element, cmd.value.property(), e);
            }
        }
    }
}

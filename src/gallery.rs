use crate::core::gallery::{GalleryContainer, GalleryEntry};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Image load check for one tile; the handler lives as long as the tile.
struct ImageWatch {
    img: web::HtmlImageElement,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for ImageWatch {
    fn drop(&mut self) {
        self.img.set_onerror(None);
    }
}

/// Gallery tiles rendered as `div.item` children of the wrap element.
pub struct DomGallery {
    document: web::Document,
    wrap: web::Element,
    watches: Vec<ImageWatch>,
}

impl DomGallery {
    pub fn new(document: web::Document, wrap: web::Element) -> Self {
        Self {
            document,
            wrap,
            watches: Vec::new(),
        }
    }
}

impl GalleryContainer for DomGallery {
    fn clear(&mut self) {
        self.watches.clear();
        self.wrap.set_inner_html("");
    }

    fn append(&mut self, entry: &GalleryEntry) -> anyhow::Result<()> {
        let div = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))?;
        _ = div.class_list().add_1("item");
        _ = div
            .style()
            .set_property("background-image", &entry.background());
        _ = div.set_attribute("tabindex", "0");
        _ = div.set_attribute("aria-label", &entry.label);
        self.wrap
            .append_child(&div)
            .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
        if let Some(watch) = watch_image(&entry.path, div) {
            self.watches.push(watch);
        }
        Ok(())
    }
}

// A broken image swaps its tile to the placeholder look instead of leaving
// an empty box; the other tiles are unaffected.
fn watch_image(path: &str, tile: web::HtmlElement) -> Option<ImageWatch> {
    let img = web::HtmlImageElement::new().ok()?;
    let path_owned = path.to_string();
    let on_error = Closure::wrap(Box::new(move || {
        log::warn!("[gallery] failed to load {}", path_owned);
        _ = tile.class_list().add_1("placeholder");
        _ = tile.style().set_property("background-image", "none");
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(path);
    Some(ImageWatch {
        img,
        _on_error: on_error,
    })
}

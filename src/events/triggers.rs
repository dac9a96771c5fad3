use crate::core::{AppState, BACK_BUTTON_SELECTOR, TRIGGER_TARGETS};
use crate::dom::{self, ElementCache};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct TriggerWiring {
    pub document: web::Document,
    pub app: Rc<RefCell<AppState>>,
    pub elements: Rc<ElementCache>,
}

pub fn wire_triggers(w: TriggerWiring) {
    for (index, target) in TRIGGER_TARGETS.iter().enumerate() {
        let w2 = w.clone();
        dom::add_click_listener(&w.document, target.id, move || {
            let styles = w2.app.borrow_mut().activate(index, dom::now_ms());
            if let Some(styles) = styles {
                w2.elements.apply(&styles);
            }
        });
    }

    let w2 = w.clone();
    let wired = dom::add_click_listener_all(&w.document, BACK_BUTTON_SELECTOR, move || {
        let styles = w2.app.borrow_mut().return_to_menu(dom::now_ms());
        if let Some(styles) = styles {
            w2.elements.apply(&styles);
        }
    });
    if wired == 0 {
        log::warn!("[dom] no {} elements; panels cannot be closed", BACK_BUTTON_SELECTOR);
    }
}

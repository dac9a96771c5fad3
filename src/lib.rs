#![cfg(target_arch = "wasm32")]
use crate::core::{required_element_ids, AppState, CANVAS_ID, GALLERY_WRAP_ID, TRIGGER_TARGETS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod render;

// Keeps the canvas backing store at CSS size * devicePixelRatio and the
// camera aspect in step with it.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<AppState>>) {
    let sync = {
        let canvas = canvas.clone();
        let app = app.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            app.borrow_mut()
                .orbit
                .set_aspect(canvas.width() as f32, canvas.height() as f32);
        }
    };
    sync();
    let resize_closure = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-folio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Fail before wiring anything if the page is incomplete.
    let elements = Rc::new(dom::ElementCache::resolve(
        &document,
        &required_element_ids(),
    )?);

    let canvas: web::HtmlCanvasElement = elements
        .get(CANVAS_ID)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let gallery_wrap: web::Element = elements
        .get(GALLERY_WRAP_ID)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing #{}", GALLERY_WRAP_ID))?
        .into();

    let mut rng = StdRng::from_entropy();
    let app = Rc::new(RefCell::new(AppState::new(TRIGGER_TARGETS.to_vec(), &mut rng)));
    let particle_count = app.borrow().particles.len();
    log::info!("[init] {} particles", particle_count);

    wire_canvas_resize(&canvas, &app);

    events::wire_triggers(events::TriggerWiring {
        document: document.clone(),
        app: app.clone(),
        elements: elements.clone(),
    });
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        drag: Rc::new(RefCell::new(input::DragState::default())),
    });

    let gpu = frame::init_gpu(&canvas, particle_count).await;
    if gpu.is_none() {
        log::warn!("[init] no renderer; page controls stay live");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        elements,
        gallery: gallery::DomGallery::new(document, gallery_wrap),
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

use crate::core::gallery::populate;
use crate::core::{AppState, OnComplete, TransitionEvent, IMAGE_PATHS};
use crate::dom::{self, ElementCache};
use crate::gallery::DomGallery;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub elements: Rc<ElementCache>,
    pub gallery: DomGallery,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let out = self.app.borrow_mut().tick(dom::now_ms());
        if !out.styles.is_empty() {
            self.elements.apply(&out.styles);
        }
        if let Some(event) = out.event {
            self.on_transition_event(event);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let app = self.app.borrow();
            let view = render::RenderView {
                camera: &app.orbit.camera,
                scene: &app.scene,
                particles: app.particles.positions(),
            };
            if let Err(e) = g.render(&view) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn on_transition_event(&mut self, event: TransitionEvent) {
        match event {
            TransitionEvent::EnteredPanel {
                target,
                on_complete: OnComplete::OpenGallery,
            } => {
                log::info!("[frame] panel {} open, loading gallery", target);
                populate(&mut self.gallery, &IMAGE_PATHS);
            }
            TransitionEvent::EnteredPanel { target, .. } => {
                log::info!("[frame] panel {} open", target);
            }
            TransitionEvent::ReturnedToMenu => {
                log::info!("[frame] back at menu");
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particle_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

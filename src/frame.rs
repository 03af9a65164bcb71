use crate::audio::WebSpectrum;
use crate::render::{self, GpuState, PendingTextures};
use instant::Instant;
use rings_core::{step_frame, AudioAnalyzer, FrameInput, OrbitControls, PlaybackState, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub playback: Rc<RefCell<PlaybackState>>,
    pub analyzer: AudioAnalyzer<WebSpectrum>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
    pub pending_textures: PendingTextures,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(self.canvas.width(), self.canvas.height());
            for texture in self.pending_textures.borrow_mut().drain(..) {
                gpu.upload(texture);
            }
        }

        let playing = self.playback.borrow().is_playing();
        if playing {
            self.analyzer.refresh();
        }

        let mut scene = self.scene.borrow_mut();
        self.orbit.borrow_mut().update(&mut scene.camera);
        let input = FrameInput {
            playing,
            frequencies: self.analyzer.frequencies(),
            dt_sec,
        };
        let gpu = &mut self.gpu;
        step_frame(&mut scene, &input, |scene| {
            let Some(gpu) = gpu.as_mut() else {
                return;
            };
            if let Err(e) = gpu.render(scene) {
                log::warn!("[gpu] frame skipped: {e:?}");
            }
        });
    }
}

/// Create the GPU state for `canvas`, logging instead of failing.
pub async fn init_gpu(canvas: web::HtmlCanvasElement, sphere_count: usize) -> Option<GpuState> {
    match render::GpuState::new(canvas, sphere_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {e:?}");
            None
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_tick(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_tick(&tick);
}

fn request_tick(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[scene] requestAnimationFrame failed: {e:?}");
        }
    }
}

#![cfg(target_arch = "wasm32")]
use crate::constants::{
    AUDIO_ID, AUDIO_SRC_ATTR, AUDIO_SRC_DELAY_MS, AUDIO_URL, CLASS_SHOW, PLAY_INTRO_SELECTOR,
    SCENE_BUILD_DELAY_MS,
};
use crate::dom::Listener;
use crate::loader::ResourceLoader;
use instant::Instant;
use rings_core::{
    bind_scene, build_scene, OrbitControls, ParamPanel, PlaybackState, SceneConfig, Transport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;
mod ui;

/// Handles that must outlive `init`: the pending download and every DOM listener.
#[derive(Default)]
struct Page {
    _loader: Option<ResourceLoader>,
    listeners: Vec<Listener>,
    _audio_source: Option<web::MediaElementAudioSourceNode>,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

fn keep_listeners(listeners: impl IntoIterator<Item = Listener>) {
    PAGE.with(|page| page.borrow_mut().listeners.extend(listeners));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rings-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let element: web::HtmlMediaElement = document
        .get_element_by_id(AUDIO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{AUDIO_ID}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{AUDIO_ID} is not a media element: {e:?}"))?;
    let url = element
        .get_attribute(AUDIO_SRC_ATTR)
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| AUDIO_URL.to_string());

    let progress = overlay::ProgressBar::new(&document);
    let loader = ResourceLoader::load(
        &url,
        move |percent| progress.show_percent(percent),
        move |url| {
            dom::set_timeout(SCENE_BUILD_DELAY_MS, move || {
                if let Err(e) = build_page(&document, element, url) {
                    log::error!("[scene] build failed: {e:?}");
                }
            });
        },
    )?;
    PAGE.with(|page| page.borrow_mut()._loader = Some(loader));
    Ok(())
}

/// Everything after the audio download: scene, audio graph, controls, renderer.
fn build_page(
    document: &web::Document,
    element: web::HtmlMediaElement,
    url: String,
) -> anyhow::Result<()> {
    let canvas = dom::create_canvas(document)?;
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let scene = Rc::new(RefCell::new(build_scene(&SceneConfig::default(), aspect)));
    let sphere_count = scene.borrow().spheres.len();
    log::info!(
        "[scene] {} rings, {sphere_count} spheres",
        scene.borrow().rings.len()
    );

    let audio::AudioGraph {
        media,
        analyzer,
        source,
    } = audio::build_audio_graph(element.clone())?;
    let playback = Rc::new(RefCell::new(PlaybackState::default()));
    keep_listeners(audio::watch_playback(&element, &playback));

    let transport = Rc::new(RefCell::new(Transport::new(media)));
    events::apply_transport_buttons(document, transport.borrow().visible());
    keep_listeners(events::wire_transport(document, &transport));

    let panel = Rc::new(RefCell::new(ParamPanel::new()));
    let subscriptions = bind_scene(&mut panel.borrow_mut(), &scene)?;
    log::info!("[panel] {} parameters bound", subscriptions.len());
    keep_listeners(ui::mount_panel(document, &panel)?);

    let orbit = Rc::new(RefCell::new(OrbitControls::from_camera(
        &scene.borrow().camera,
    )));
    keep_listeners(events::wire_orbit_controls(document, &canvas, &orbit));
    keep_listeners(events::wire_resize(&canvas, &scene));

    let pending_textures = render::PendingTextures::default();
    render::fetch_textures(&pending_textures);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        playback,
        analyzer,
        canvas: canvas.clone(),
        gpu: None,
        pending_textures,
        last_instant: Instant::now(),
    }));
    {
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            let gpu = frame::init_gpu(canvas, sphere_count).await;
            frame_ctx.borrow_mut().gpu = gpu;
        });
    }
    frame::start_loop(frame_ctx);

    let document = document.clone();
    dom::set_timeout(AUDIO_SRC_DELAY_MS, move || {
        if let Some(intro) = dom::query(&document, PLAY_INTRO_SELECTOR) {
            let button = intro.clone();
            let doc = document.clone();
            keep_listeners([dom::listen(
                intro.unchecked_ref(),
                "click",
                move |_: web::MouseEvent| {
                    dom::remove_class(&button, CLASS_SHOW);
                    let visible = transport.borrow_mut().play();
                    events::apply_transport_buttons(&doc, visible);
                },
            )]);
        }
        element.set_src(&url);
        log::info!("[audio] source set to {url}");
    });

    PAGE.with(|page| page.borrow_mut()._audio_source = Some(source));
    Ok(())
}

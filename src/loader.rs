//! Streaming download of the audio track with byte progress.

use rings_core::{LoadProgress, ProgressTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One tracked GET. The closures stay alive as long as the loader does.
pub struct ResourceLoader {
    _xhr: web::XmlHttpRequest,
    _on_progress: Closure<dyn FnMut(web::ProgressEvent)>,
    _on_load: Closure<dyn FnMut(web::ProgressEvent)>,
    _on_error: Closure<dyn FnMut(web::ProgressEvent)>,
}

impl ResourceLoader {
    /// Start loading `url`. `on_progress` sees a non-decreasing percent;
    /// `on_complete` runs at most once with the original url. Failures are logged only.
    pub fn load(
        url: &str,
        mut on_progress: impl FnMut(u8) + 'static,
        on_complete: impl FnOnce(String) + 'static,
    ) -> anyhow::Result<Self> {
        let xhr = web::XmlHttpRequest::new().map_err(|e| anyhow::anyhow!("xhr: {e:?}"))?;
        xhr.open_with_async("GET", url, true)
            .map_err(|e| anyhow::anyhow!("xhr open: {e:?}"))?;
        xhr.set_response_type(web::XmlHttpRequestResponseType::Arraybuffer);

        let tracker = Rc::new(RefCell::new(ProgressTracker::new()));

        let progress_tracker = tracker.clone();
        let on_progress_cb = Closure::wrap(Box::new(move |ev: web::ProgressEvent| {
            if !ev.length_computable() {
                return;
            }
            let sample = LoadProgress::new(ev.loaded() as u64, ev.total() as u64);
            let reported = progress_tracker.borrow_mut().on_progress(sample);
            if let Some(pct) = reported {
                on_progress(pct);
            }
        }) as Box<dyn FnMut(web::ProgressEvent)>);

        let load_url = url.to_string();
        let load_xhr = xhr.clone();
        let mut on_complete = Some(on_complete);
        let on_load_cb = Closure::wrap(Box::new(move |_ev: web::ProgressEvent| {
            let status = load_xhr.status().unwrap_or(0);
            if !(200..300).contains(&status) {
                log::error!("[loader] {load_url} failed with status {status}");
                return;
            }
            if !tracker.borrow_mut().complete() {
                return;
            }
            log::info!("[loader] {load_url} complete");
            if let Some(done) = on_complete.take() {
                done(load_url.clone());
            }
        }) as Box<dyn FnMut(web::ProgressEvent)>);

        let error_url = url.to_string();
        let on_error_cb = Closure::wrap(Box::new(move |_ev: web::ProgressEvent| {
            log::error!("[loader] network error while loading {error_url}");
        }) as Box<dyn FnMut(web::ProgressEvent)>);

        xhr.set_onprogress(Some(on_progress_cb.as_ref().unchecked_ref()));
        xhr.set_onload(Some(on_load_cb.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error_cb.as_ref().unchecked_ref()));
        xhr.send().map_err(|e| anyhow::anyhow!("xhr send: {e:?}"))?;
        log::info!("[loader] GET {url}");

        Ok(Self {
            _xhr: xhr,
            _on_progress: on_progress_cb,
            _on_load: on_load_cb,
            _on_error: on_error_cb,
        })
    }
}

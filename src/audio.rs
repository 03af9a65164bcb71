use crate::constants::AUDIO_VOLUME;
use crate::dom::{self, Listener};
use rings_core::{AudioAnalyzer, MediaControl, MediaEvent, PlaybackState, SpectrumSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Byte spectrum straight from a WebAudio analyser node.
pub struct WebSpectrum {
    analyser: web::AnalyserNode,
}

impl SpectrumSource for WebSpectrum {
    fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn read_bytes(&self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}

/// The page's `<audio>` element plus the context it is routed through.
#[derive(Clone)]
pub struct WebMedia {
    pub ctx: web::AudioContext,
    pub element: web::HtmlMediaElement,
}

impl MediaControl for WebMedia {
    fn resume_context(&self) {
        if let Err(e) = self.ctx.resume() {
            log::warn!("[audio] resume failed: {e:?}");
        }
    }

    fn play(&self) {
        if let Err(e) = self.element.play() {
            log::warn!("[audio] play failed: {e:?}");
        }
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause failed: {e:?}");
        }
    }
}

pub struct AudioGraph {
    pub media: WebMedia,
    pub analyzer: AudioAnalyzer<WebSpectrum>,
    pub source: web::MediaElementAudioSourceNode,
}

/// element → {analyser, speakers}
pub fn build_audio_graph(element: web::HtmlMediaElement) -> anyhow::Result<AudioGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {e:?}"))?;
    let analyser =
        web::AnalyserNode::new(&ctx).map_err(|e| anyhow::anyhow!("AnalyserNode: {e:?}"))?;
    let source = ctx
        .create_media_element_source(&element)
        .map_err(|e| anyhow::anyhow!("media source: {e:?}"))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect analyser: {e:?}"))?;
    source
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect destination: {e:?}"))?;
    element.set_volume(AUDIO_VOLUME);

    let analyzer = AudioAnalyzer::new(WebSpectrum { analyser });
    Ok(AudioGraph {
        media: WebMedia { ctx, element },
        analyzer,
        source,
    })
}

/// Keep `state` in step with the element's playing/pause/ended events.
pub fn watch_playback(
    element: &web::HtmlMediaElement,
    state: &Rc<RefCell<PlaybackState>>,
) -> Vec<Listener> {
    MediaEvent::ALL
        .iter()
        .map(|&event| {
            let state = state.clone();
            dom::listen(element.unchecked_ref(), event.name(), move |_: web::Event| {
                state.borrow_mut().observe(event);
                log::info!("[audio] {}", event.name());
            })
        })
        .collect()
}

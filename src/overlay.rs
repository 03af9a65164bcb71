use crate::constants::{
    loader_transform, CLASS_REMOVE_LOADER, CLASS_SHOW, LOADER_COLLAPSED, LOADER_SELECTOR,
    PLAY_INTRO_SELECTOR, REVEAL_DELAY_MS,
};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Loading bar plus the one-time reveal of the intro play control.
pub struct ProgressBar {
    loader: Option<web::HtmlElement>,
    play_intro: Option<web::HtmlElement>,
    revealed: Rc<Cell<bool>>,
}

impl ProgressBar {
    pub fn new(document: &web::Document) -> Self {
        Self {
            loader: dom::query(document, LOADER_SELECTOR),
            play_intro: dom::query(document, PLAY_INTRO_SELECTOR),
            revealed: Rc::new(Cell::new(false)),
        }
    }

    /// Scale the bar; at 100 schedule the reveal.
    pub fn show_percent(&self, percent: u8) {
        if let Some(loader) = &self.loader {
            dom::set_style(loader, "transform", &loader_transform(percent));
        }
        if percent >= 100 {
            self.schedule_reveal();
        }
    }

    fn schedule_reveal(&self) {
        if self.revealed.replace(true) {
            return;
        }
        let loader = self.loader.clone();
        let play_intro = self.play_intro.clone();
        dom::set_timeout(REVEAL_DELAY_MS, move || {
            dom::next_frame(move || {
                if let Some(intro) = &play_intro {
                    dom::add_class(intro, CLASS_SHOW);
                }
                if let Some(loader) = &loader {
                    dom::add_class(loader, CLASS_REMOVE_LOADER);
                    dom::set_style(loader, "transform", LOADER_COLLAPSED);
                }
                log::info!("[loader] intro revealed");
            });
        });
    }
}

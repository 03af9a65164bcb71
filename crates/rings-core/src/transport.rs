//! Play/pause transport.
//!
//! The controller only drives the media and the button pair; playback state
//! itself follows the media lifecycle events (see `analyzer::PlaybackState`).

/// Media operations the transport needs from the host.
pub trait MediaControl {
    /// Resume a suspended audio context (autoplay policies suspend it until a gesture).
    fn resume_context(&self);
    fn play(&self);
    fn pause(&self);
}

/// Which of the two transport buttons is shown. Exactly one always is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibleButton {
    #[default]
    Play,
    Pause,
}

impl VisibleButton {
    pub fn play_visible(self) -> bool {
        self == VisibleButton::Play
    }

    pub fn pause_visible(self) -> bool {
        self == VisibleButton::Pause
    }
}

pub struct Transport<M: MediaControl> {
    media: M,
    visible: VisibleButton,
}

impl<M: MediaControl> Transport<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            visible: VisibleButton::Play,
        }
    }

    pub fn play(&mut self) -> VisibleButton {
        self.media.resume_context();
        self.media.play();
        self.visible = VisibleButton::Pause;
        self.visible
    }

    pub fn pause(&mut self) -> VisibleButton {
        self.media.pause();
        self.visible = VisibleButton::Play;
        self.visible
    }

    pub fn visible(&self) -> VisibleButton {
        self.visible
    }

    pub fn media(&self) -> &M {
        &self.media
    }
}

//! Frequency data tap and playback lifecycle tracking.

/// Anything that can fill a byte spectrum: the WebAudio analyser on the web,
/// synthetic data in tests.
pub trait SpectrumSource {
    /// Number of frequency bins; fixed for the lifetime of the source.
    fn bin_count(&self) -> usize;
    /// Copy the current magnitudes (0..=255) into `out`.
    fn read_bytes(&self, out: &mut [u8]);
}

/// Fixed-length byte magnitudes. Never resized after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyBuffer {
    bins: Box<[u8]>,
}

impl FrequencyBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            bins: vec![0u8; len].into_boxed_slice(),
        }
    }

    pub fn from_bins(bins: &[u8]) -> Self {
        Self { bins: bins.into() }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bins
    }
}

/// Owns a spectrum source and the buffer it refreshes.
pub struct AudioAnalyzer<S: SpectrumSource> {
    source: S,
    buffer: FrequencyBuffer,
}

impl<S: SpectrumSource> AudioAnalyzer<S> {
    pub fn new(source: S) -> Self {
        let buffer = FrequencyBuffer::new(source.bin_count());
        log::info!("[audio] analyser bins={}", buffer.len());
        Self { source, buffer }
    }

    /// Pull the current magnitudes into the buffer.
    pub fn refresh(&mut self) {
        self.source.read_bytes(self.buffer.as_mut_slice());
    }

    pub fn frequencies(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    pub fn buffer(&self) -> &FrequencyBuffer {
        &self.buffer
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Media element lifecycle signals that drive [`PlaybackState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Playing,
    Pause,
    Ended,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 3] = [MediaEvent::Playing, MediaEvent::Pause, MediaEvent::Ended];

    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            MediaEvent::Playing => "playing",
            MediaEvent::Pause => "pause",
            MediaEvent::Ended => "ended",
        }
    }
}

/// True while the source is actually emitting sound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
}

impl PlaybackState {
    pub fn observe(&mut self, event: MediaEvent) {
        self.playing = matches!(event, MediaEvent::Playing);
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

//! Byte-progress bookkeeping for the audio download.

/// One progress sample of a streaming download.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded_bytes: u64,
    pub total_bytes: u64,
}

impl LoadProgress {
    pub fn new(loaded_bytes: u64, total_bytes: u64) -> Self {
        Self {
            loaded_bytes,
            total_bytes,
        }
    }

    /// `floor(loaded / total * 100)`, clamped to 100. `None` when the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        if self.total_bytes == 0 {
            return None;
        }
        let loaded = self.loaded_bytes.min(self.total_bytes) as u128;
        Some((loaded * 100 / self.total_bytes as u128) as u8)
    }
}

/// Tracks one load: monotone percent reporting and a single completion.
#[derive(Clone, Debug, Default)]
pub struct ProgressTracker {
    last_percent: Option<u8>,
    completed: bool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a progress event; returns the percent to report, if any.
    pub fn on_progress(&mut self, progress: LoadProgress) -> Option<u8> {
        let pct = progress.percent()?;
        let pct = self.last_percent.map_or(pct, |last| last.max(pct));
        self.last_percent = Some(pct);
        Some(pct)
    }

    /// Mark the load finished. True only on the first call.
    pub fn complete(&mut self) -> bool {
        !std::mem::replace(&mut self.completed, true)
    }

    pub fn last_percent(&self) -> Option<u8> {
        self.last_percent
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

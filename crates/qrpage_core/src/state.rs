use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::view_model::AppViewModel;
use crate::{Debouncer, DownloadOutcome};

/// Text shown and encoded when the page first opens.
pub const DEFAULT_QUERY: &str = "03339501";

/// Token attached to each encode request. Results carrying an older token are stale.
pub type Generation = u64;

/// An encoded QR image as the page sees it: PNG bytes plus a terminal preview.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub png: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    /// Text rendition of the module matrix, one entry per terminal row.
    pub preview: Arc<[String]>,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("png_len", &self.png.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("preview_rows", &self.preview.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Generating,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    debouncer: Debouncer,
    raw_input: String,
    settled_query: String,
    image: Option<EncodedImage>,
    generating: bool,
    generation: Generation,
    last_download: Option<DownloadOutcome>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce_window(window: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.raw_input.clone(),
            settled_query: self.settled_query.clone(),
            phase: self.phase(),
            preview: self.image.as_ref().map(|image| image.preview.clone()),
            download_enabled: self.image.is_some(),
            last_download: self.last_download.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.generating {
            Phase::Generating
        } else if self.image.is_some() {
            Phase::Ready
        } else {
            Phase::Empty
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn settled_query(&self) -> &str {
        &self.settled_query
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    pub(crate) fn set_raw_input(&mut self, text: String) -> bool {
        if self.raw_input == text {
            return false;
        }
        self.raw_input = text;
        self.dirty = true;
        true
    }

    /// Replaces the settled query. Returns the generation to encode with when
    /// the new query is non-empty; `None` means nothing needs encoding.
    ///
    /// Either way the generation advances, so an encode still in flight for
    /// the previous query can no longer land.
    pub(crate) fn settle_query(&mut self, query: String) -> Option<Generation> {
        self.generation += 1;
        self.image = None;
        self.generating = !query.is_empty();
        self.settled_query = query;
        self.dirty = true;
        self.generating.then_some(self.generation)
    }

    /// Applies an encode result. Returns false when `generation` is stale.
    pub(crate) fn apply_encoded(
        &mut self,
        generation: Generation,
        image: Option<EncodedImage>,
    ) -> bool {
        if generation != self.generation || !self.generating {
            return false;
        }
        self.generating = false;
        self.image = image;
        self.dirty = true;
        true
    }

    pub(crate) fn set_last_download(&mut self, outcome: DownloadOutcome) {
        self.last_download = Some(outcome);
        self.dirty = true;
    }
}

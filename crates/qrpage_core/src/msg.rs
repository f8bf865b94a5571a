use crate::{EncodedImage, Generation, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text field (full new contents).
    InputChanged(String),
    /// The debounce timer for `ticket` fired.
    DebounceElapsed { ticket: Ticket },
    /// Engine completion for an encode request.
    EncodeFinished {
        generation: Generation,
        outcome: EncodeOutcome,
    },
    /// User asked to download the current image.
    DownloadClicked,
    /// Engine completion for a download.
    DownloadFinished(DownloadOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome {
    Encoded(EncodedImage),
    /// Encoding failed; the reason has already been logged by the runner.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { path: String },
    Failed { reason: String },
}

use std::path::PathBuf;

use crate::{EncodingError, QrImage};

pub type Generation = u64;
pub type Ticket = u64;

#[derive(Debug)]
pub enum EngineEvent {
    DebounceElapsed {
        ticket: Ticket,
    },
    EncodeCompleted {
        generation: Generation,
        result: Result<QrImage, EncodingError>,
    },
    DownloadCompleted {
        result: Result<PathBuf, String>,
    },
}

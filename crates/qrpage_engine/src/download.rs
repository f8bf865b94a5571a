use std::path::PathBuf;

use crate::{AtomicFileWriter, PersistError};

/// Download name for an image saved at `timestamp_ms` (Unix epoch milliseconds).
pub fn download_filename(timestamp_ms: i64) -> String {
    format!("qrcode-{timestamp_ms}.png")
}

/// Where downloaded images end up.
pub trait ImageSink: Send + Sync {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, PersistError>;
}

/// Saves downloads into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    writer: AtomicFileWriter,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }
}

impl ImageSink for DirectorySink {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, PersistError> {
        self.writer.write(filename, png)
    }
}

/// Saves `png` once under the timestamped download name.
pub fn save_download(
    sink: &dyn ImageSink,
    png: &[u8],
    timestamp_ms: i64,
) -> Result<PathBuf, PersistError> {
    sink.save(&download_filename(timestamp_ms), png)
}

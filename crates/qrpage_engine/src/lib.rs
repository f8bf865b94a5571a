//! QR page engine: encoding, timers, and effect execution.
mod download;
mod encode;
mod engine;
mod options;
mod persist;
mod preview;
mod raster;
mod timer;
mod types;

pub use download::{download_filename, save_download, DirectorySink, ImageSink};
pub use encode::{Encoder, EncodingError, ModuleGrid, QrEncoder, QrImage};
pub use engine::{EngineHandle, EngineSettings};
pub use options::{
    ColorParseError, EncodeOptions, ErrorCorrection, HexColor, MAX_MARGIN, MAX_WIDTH,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use preview::preview_lines;
pub use raster::{encode_png, rasterize};
pub use timer::{DebounceTimer, TimerHandle};
pub use types::{EngineEvent, Generation, Ticket};

//! QR page core: pure state machine and view-model helpers.
mod debounce;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use debounce::{Debouncer, Ticket, DEFAULT_DEBOUNCE_WINDOW};
pub use effect::Effect;
pub use msg::{DownloadOutcome, EncodeOutcome, Msg};
pub use query::{is_query_whitespace, trim_query};
pub use state::{AppState, EncodedImage, Generation, Phase, DEFAULT_QUERY};
pub use update::{init, update};
pub use view_model::AppViewModel;

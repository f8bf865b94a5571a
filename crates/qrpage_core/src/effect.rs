use std::time::Duration;

use crate::{EncodedImage, Generation, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or restart) the debounce timer; deliver `Msg::DebounceElapsed` after `delay`.
    ScheduleSettle { ticket: Ticket, delay: Duration },
    /// Encode `text` and deliver `Msg::EncodeFinished` tagged with `generation`.
    Encode { generation: Generation, text: String },
    /// Save the image to disk under a timestamped name.
    SaveImage { image: EncodedImage },
}

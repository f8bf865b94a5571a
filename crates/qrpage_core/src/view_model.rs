use std::sync::Arc;

use crate::{DownloadOutcome, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub settled_query: String,
    pub phase: Phase,
    pub preview: Option<Arc<[String]>>,
    pub download_enabled: bool,
    pub last_download: Option<DownloadOutcome>,
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use page_logging::{page_info, page_warn};
use qrpage_core::{DEFAULT_DEBOUNCE_WINDOW, DEFAULT_QUERY};
use qrpage_engine::{EncodeOptions, ErrorCorrection, HexColor};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "qrpage.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_query: String,
    pub debounce_ms: u64,
    pub download_dir: PathBuf,
    pub encode: EncodeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_WINDOW.as_millis() as u64,
            download_dir: PathBuf::from("downloads"),
            encode: EncodeConfig::default(),
        }
    }
}

/// Encoder options as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    pub error_correction: String,
    pub margin: u32,
    pub width: u32,
    pub dark: String,
    pub light: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        let options = EncodeOptions::default();
        Self {
            error_correction: options.error_correction.to_string(),
            margin: options.margin,
            width: options.width,
            dark: options.dark.to_string(),
            light: options.light.to_string(),
        }
    }
}

impl EncodeConfig {
    pub fn to_options(&self) -> anyhow::Result<EncodeOptions> {
        let error_correction: ErrorCorrection =
            self.error_correction.parse().map_err(|err| anyhow!("{err}"))?;
        let dark: HexColor = self.dark.parse().context("encode.dark")?;
        let light: HexColor = self.light.parse().context("encode.light")?;
        let options = EncodeOptions {
            error_correction,
            margin: self.margin,
            width: self.width,
            dark,
            light,
        };
        options.validate().map_err(|err| anyhow!("encode: {err}"))?;
        Ok(options)
    }
}

/// Loads the config from `path`, or from `./qrpage.ron` when no path is given.
///
/// A missing file yields defaults; a malformed one is logged and also yields defaults.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILENAME), Path::to_path_buf);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            page_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            page_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            page_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use qrcode::types::{Color, QrError};
use qrcode::QrCode;
use thiserror::Error;

use crate::preview::preview_lines;
use crate::raster::{encode_png, rasterize};
use crate::EncodeOptions;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("text does not fit in a QR symbol at error correction {level}")]
    DataTooLong { level: crate::ErrorCorrection },
    #[error("text cannot be encoded: {0}")]
    Unsupported(String),
    #[error("invalid encode options: {0}")]
    InvalidOptions(String),
    #[error("encode task did not complete: {0}")]
    TaskFailed(String),
    #[error("png encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Square matrix of QR modules; `true` is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: u32,
    dark: Vec<bool>,
}

impl ModuleGrid {
    pub fn new(size: u32, dark: Vec<bool>) -> Self {
        debug_assert_eq!(dark.len(), (size * size) as usize, "module count mismatch");
        Self { size, dark }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Coordinates outside the symbol read as light, which makes the quiet zone free.
    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        let size = i64::from(self.size);
        if x < 0 || y < 0 || x >= size || y >= size {
            return false;
        }
        self.dark[(y * size + x) as usize]
    }
}

/// Result of a successful encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub modules: ModuleGrid,
    pub margin: u32,
}

impl QrImage {
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }

    pub fn preview(&self) -> Vec<String> {
        preview_lines(&self.modules, self.margin)
    }
}

pub trait Encoder: Send + Sync {
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<QrImage, EncodingError>;
}

/// Encoder backed by the `qrcode` crate for the symbol and `image` for the raster.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrEncoder;

impl QrEncoder {
    fn build_grid(text: &str, options: &EncodeOptions) -> Result<ModuleGrid, EncodingError> {
        let code = QrCode::with_error_correction_level(
            text.as_bytes(),
            options.error_correction.to_ec_level(),
        )
        .map_err(|err| match err {
            QrError::DataTooLong => EncodingError::DataTooLong {
                level: options.error_correction,
            },
            other => EncodingError::Unsupported(other.to_string()),
        })?;
        let size = code.width() as u32;
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(ModuleGrid::new(size, dark))
    }
}

impl Encoder for QrEncoder {
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<QrImage, EncodingError> {
        options.validate().map_err(EncodingError::InvalidOptions)?;
        let modules = Self::build_grid(text, options)?;
        let raster = rasterize(&modules, options)?;
        let png = encode_png(&raster)?;
        Ok(QrImage {
            png,
            width: raster.width(),
            height: raster.height(),
            modules,
            margin: options.margin,
        })
    }
}

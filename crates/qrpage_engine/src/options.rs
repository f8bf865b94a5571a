use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// QR error-correction level. Higher levels trade capacity for redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl ErrorCorrection {
    pub(crate) fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ErrorCorrection::Low => "L",
            ErrorCorrection::Medium => "M",
            ErrorCorrection::Quartile => "Q",
            ErrorCorrection::High => "H",
        };
        f.write_str(letter)
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ErrorCorrection::Low),
            "M" | "MEDIUM" => Ok(ErrorCorrection::Medium),
            "Q" | "QUARTILE" => Ok(ErrorCorrection::Quartile),
            "H" | "HIGH" => Ok(ErrorCorrection::High),
            other => Err(format!("unknown error correction level {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// An RGBA color written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub [u8; 4]);

impl HexColor {
    pub const BLACK: HexColor = HexColor([0x00, 0x00, 0x00, 0xFF]);
    pub const WHITE: HexColor = HexColor([0xFF, 0xFF, 0xFF, 0xFF]);

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba(self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let mut rgba = [0xFF; 4];
        for (slot, start) in rgba.iter_mut().zip((0..digits.len()).step_by(2)) {
            *slot = u8::from_str_radix(&digits[start..start + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        }
        Ok(HexColor(rgba))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 0xFF {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Largest accepted quiet zone, in modules.
pub const MAX_MARGIN: u32 = 64;
/// Largest accepted image width, in pixels.
pub const MAX_WIDTH: u32 = 4096;

/// Rendering options handed to the encoder with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    pub error_correction: ErrorCorrection,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    /// Target image width (and height) in pixels.
    pub width: u32,
    pub dark: HexColor,
    pub light: HexColor,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::High,
            margin: 2,
            width: 400,
            dark: HexColor::BLACK,
            light: HexColor::WHITE,
        }
    }
}

impl EncodeOptions {
    /// Checks the numeric options against the encoder's limits.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(format!(
                "width must be between 1 and {MAX_WIDTH}, got {}",
                self.width
            ));
        }
        if self.margin > MAX_MARGIN {
            return Err(format!(
                "margin must be at most {MAX_MARGIN}, got {}",
                self.margin
            ));
        }
        Ok(())
    }
}

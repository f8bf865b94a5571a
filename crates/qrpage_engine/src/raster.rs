use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::{EncodeOptions, EncodingError, ModuleGrid};

/// Pixels per module when the requested width cannot hold the symbol.
const FALLBACK_SCALE: u32 = 4;

/// Paints the symbol plus its margin into a square image.
///
/// When `options.width` can hold every module the image is exactly that wide
/// and modules get a fractional pixel size; otherwise each module is
/// `FALLBACK_SCALE` pixels.
pub fn rasterize(
    grid: &ModuleGrid,
    options: &EncodeOptions,
) -> Result<RgbaImage, EncodingError> {
    let span = options
        .margin
        .checked_mul(2)
        .and_then(|margins| margins.checked_add(grid.size()))
        .filter(|span| *span > 0)
        .ok_or_else(|| {
            EncodingError::InvalidOptions(format!("margin {} is too large", options.margin))
        })?;
    let (image_size, scale) = if options.width >= span {
        (options.width, f64::from(options.width) / f64::from(span))
    } else {
        let size = span.checked_mul(FALLBACK_SCALE).ok_or_else(|| {
            EncodingError::InvalidOptions(format!("{span} modules do not fit in an image"))
        })?;
        (size, f64::from(FALLBACK_SCALE))
    };
    let scaled_margin = (f64::from(options.margin) * scale).floor();
    let dark = options.dark.to_rgba();
    let light = options.light.to_rgba();
    let module_at = |pixel: u32| ((f64::from(pixel) - scaled_margin) / scale).floor() as i64;

    Ok(RgbaImage::from_fn(image_size, image_size, |px, py| {
        if grid.is_dark(module_at(px), module_at(py)) {
            dark
        } else {
            light
        }
    }))
}

pub fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    raster.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

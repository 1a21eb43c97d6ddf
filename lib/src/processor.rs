use crate::ascii::{AsciiArt, map_glyphs};
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::filters::{
    enhance_for_grayscale, enhance_for_grayscale_luma, stretch_dynamic_range, weighted_grayscale,
};
use crate::lut::{COLOUR_GLYPH, glyph_ramp};
use image::{DynamicImage, imageops};
use log::info;
use std::path::{Path, PathBuf};

/// Resize an image to a target character height, preserving aspect ratio
///
/// Target width is `round(width * target_height / height)`, clamped to a
/// minimum of 1 so extreme aspect ratios still produce output. Uses
/// Lanczos3 resampling; if the target dimensions already match the
/// source, the image is returned unchanged.
///
/// # Arguments
/// * `input` - The source image
/// * `target_height` - Output height in rows, must be positive
///
/// # Returns
/// An image whose height is exactly `target_height`
pub fn resize_to_height(
    input: &DynamicImage,
    target_height: u32,
) -> Result<DynamicImage, ConvertError> {
    if target_height == 0 {
        return Err(ConvertError::InvalidHeight(target_height));
    }

    let (width, height) = (input.width(), input.height());
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage);
    }

    let target_width =
        ((f64::from(width) * f64::from(target_height) / f64::from(height)).round() as u32).max(1);

    if (target_width, target_height) == (width, height) {
        return Ok(input.clone());
    }

    Ok(input.resize_exact(target_width, target_height, imageops::FilterType::Lanczos3))
}

/// Convert an image to ASCII art
///
/// This implements the full pipeline:
/// 1. Resize to the requested character height
/// 2. Enhance (contrast and sharpness) for grayscale conversion
/// 3. Convert to grayscale with perceptual luminance weights
/// 4. Stretch the dynamic range
/// 5. Map luminance buckets to glyphs, wrapping each glyph in an ANSI
///    truecolor escape when colour mode is enabled
///
/// # Arguments
/// * `input` - The source image
/// * `config` - Conversion parameters
///
/// # Returns
/// The glyph grid, one line per output row
pub fn convert_image(
    input: &DynamicImage,
    config: &ConvertConfig,
) -> Result<AsciiArt, ConvertError> {
    config.validate()?;

    let resized = resize_to_height(input, config.height)?;

    // Colour mode samples the resized image before enhancement touches it
    let colour_src = config.colour.then(|| resized.to_rgb8());

    let gray = match &resized {
        // Already single channel: enhance only, keep the values otherwise
        DynamicImage::ImageLuma8(luma) => enhance_for_grayscale_luma(luma),
        other => {
            let enhanced = enhance_for_grayscale(&other.to_rgb8());
            stretch_dynamic_range(&weighted_grayscale(&enhanced))
        }
    };

    let palette = if config.colour {
        vec![COLOUR_GLYPH]
    } else {
        glyph_ramp(config.dark_mode)
    };

    Ok(map_glyphs(&gray, &palette, colour_src.as_ref()))
}

/// Convert an image file to an ASCII art text file
///
/// Opens and decodes the source, runs [`convert_image`] and writes the
/// result to `output_path` (with a `.txt` extension enforced),
/// overwriting any existing file.
///
/// # Returns
/// The path actually written
pub fn convert_file(
    input_path: &Path,
    output_path: &Path,
    config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
    let img = image::open(input_path)?;
    info!(
        "original image dimensions: {}x{}",
        img.width(),
        img.height()
    );

    let art = convert_image(&img, config)?;

    let output_path = ensure_txt_extension(output_path);
    art.save(&output_path)?;
    info!(
        "ascii art saved to {} ({}x{} glyphs)",
        output_path.display(),
        art.width(),
        art.height()
    );

    Ok(output_path)
}

/// Append a `.txt` extension unless the path already ends in one
pub fn ensure_txt_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "txt") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".txt");
        PathBuf::from(name)
    }
}

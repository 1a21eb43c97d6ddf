use image::{GrayImage, Luma, Rgb, RgbImage};

/// Fixed contrast boost applied before grayscale conversion (+15%)
const CONTRAST_BOOST: f32 = 1.15;

/// Fixed sharpness boost applied before grayscale conversion (+20%)
const SHARPNESS_BOOST: f32 = 1.2;

/// Lower clip bound targeted by the dynamic range stretch
pub const BLACK_POINT: u8 = 5;

/// Upper clip bound targeted by the dynamic range stretch
pub const WHITE_POINT: u8 = 250;

/// Interpolate from a degenerate value toward the original
///
/// `factor` 0.0 returns the degenerate value, 1.0 returns the original,
/// values above 1.0 push past the original (boost). Result is clamped to
/// the byte range.
fn blend_channel(degenerate: f32, value: u8, factor: f32) -> u8 {
    (degenerate + (value as f32 - degenerate) * factor).clamp(0.0, 255.0) as u8
}

/// Mean luminance of an RGB image using ITU-R 601 weights
///
/// Per-pixel luminance is `(299R + 587G + 114B) / 1000` in integer
/// arithmetic; the mean is rounded to the nearest integer.
fn mean_luminance(img: &RgbImage) -> f32 {
    let mut sum: u64 = 0;
    for pixel in img.pixels() {
        let [r, g, b] = pixel.0;
        sum += u64::from(299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    }
    let count = img.pixels().len() as f64;
    ((sum as f64 / count) + 0.5).floor() as f32
}

/// Boost contrast by interpolating each channel away from the mean gray
///
/// The degenerate image is a solid gray at the mean luminance; each
/// channel is pushed away from it by `CONTRAST_BOOST`.
pub fn adjust_contrast(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let mean = mean_luminance(img);
    let mut output = RgbImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let adjusted = pixel.0.map(|c| blend_channel(mean, c, CONTRAST_BOOST));
        output.put_pixel(x, y, Rgb(adjusted));
    }

    output
}

/// Single-channel variant of [`adjust_contrast`]
pub fn adjust_contrast_luma(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let sum: u64 = img.pixels().map(|p| u64::from(p[0])).sum();
    let mean = ((sum as f64 / img.pixels().len() as f64) + 0.5).floor() as f32;
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([blend_channel(mean, pixel[0], CONTRAST_BOOST)]));
    }

    output
}

/// Apply a 3x3 smoothing kernel with border replication
///
/// Kernel:
/// ```text
/// [1 1 1]
/// [1 5 1]  / 13
/// [1 1 1]
/// ```
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Smoothed image of the same dimensions
pub fn smooth(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut output = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0u32; 3];

            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let sx = (x as i32 + dx).clamp(0, width as i32 - 1) as u32;
                    let sy = (y as i32 + dy).clamp(0, height as i32 - 1) as u32;
                    let weight = if dx == 0 && dy == 0 { 5 } else { 1 };
                    let sample = img.get_pixel(sx, sy);

                    for (channel, value) in acc.iter_mut().zip(sample.0) {
                        *channel += weight * u32::from(value);
                    }
                }
            }

            let smoothed = acc.map(|channel| (channel as f32 / 13.0).round() as u8);
            output.put_pixel(x, y, Rgb(smoothed));
        }
    }

    output
}

/// Single-channel variant of [`smooth`]
pub fn smooth_luma(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0u32;

            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let sx = (x as i32 + dx).clamp(0, width as i32 - 1) as u32;
                    let sy = (y as i32 + dy).clamp(0, height as i32 - 1) as u32;
                    let weight = if dx == 0 && dy == 0 { 5 } else { 1 };
                    acc += weight * u32::from(img.get_pixel(sx, sy)[0]);
                }
            }

            output.put_pixel(x, y, Luma([(acc as f32 / 13.0).round() as u8]));
        }
    }

    output
}

/// Boost sharpness by pushing each pixel away from its smoothed value
pub fn sharpen(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let smoothed = smooth(img);
    let mut output = RgbImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let degenerate = smoothed.get_pixel(x, y);
        let mut sharpened = [0u8; 3];
        for channel in 0..3 {
            sharpened[channel] =
                blend_channel(f32::from(degenerate[channel]), pixel[channel], SHARPNESS_BOOST);
        }
        output.put_pixel(x, y, Rgb(sharpened));
    }

    output
}

/// Single-channel variant of [`sharpen`]
pub fn sharpen_luma(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let smoothed = smooth_luma(img);
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let degenerate = f32::from(smoothed.get_pixel(x, y)[0]);
        output.put_pixel(x, y, Luma([blend_channel(degenerate, pixel[0], SHARPNESS_BOOST)]));
    }

    output
}

/// Enhance an image for grayscale conversion
///
/// Applies the fixed +15% contrast and +20% sharpness boosts so detail
/// survives the luminance collapse. Deterministic, no configuration.
pub fn enhance_for_grayscale(img: &RgbImage) -> RgbImage {
    sharpen(&adjust_contrast(img))
}

/// Single-channel variant of [`enhance_for_grayscale`]
pub fn enhance_for_grayscale_luma(img: &GrayImage) -> GrayImage {
    sharpen_luma(&adjust_contrast_luma(img))
}

/// Convert an RGB image to grayscale using perceptual luminance weights
///
/// Formula: `L = 0.21*R + 0.72*G + 0.07*B`, truncated to a byte.
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image with luminance values
pub fn weighted_grayscale(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let luminance = 0.21 * f32::from(r) + 0.72 * f32::from(g) + 0.07 * f32::from(b);
        output.put_pixel(x, y, Luma([luminance as u8]));
    }

    output
}

/// Histogram autocontrast with percentage cutoffs at each end
///
/// Removes `cutoff_lo` percent of the darkest pixel counts and
/// `cutoff_hi` percent of the lightest from the histogram, then linearly
/// stretches the surviving `[lo, hi]` range to `[0, 255]`. If the range
/// is degenerate after the cutoff (uniform images, all-black, all-white)
/// the image is returned unchanged.
///
/// # Arguments
/// * `img` - Input grayscale image
/// * `cutoff_lo` - Percentage of counts to drop from the dark end
/// * `cutoff_hi` - Percentage of counts to drop from the light end
///
/// # Returns
/// Contrast-stretched grayscale image
pub fn autocontrast(img: &GrayImage, cutoff_lo: f32, cutoff_hi: f32) -> GrayImage {
    let mut histogram = [0u64; 256];
    for pixel in img.pixels() {
        histogram[pixel[0] as usize] += 1;
    }
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return img.clone();
    }

    let mut cut = (total as f64 * f64::from(cutoff_lo) / 100.0) as u64;
    for bin in histogram.iter_mut() {
        if cut <= *bin {
            *bin -= cut;
            break;
        }
        cut -= *bin;
        *bin = 0;
    }

    let mut cut = (total as f64 * f64::from(cutoff_hi) / 100.0) as u64;
    for bin in histogram.iter_mut().rev() {
        if cut <= *bin {
            *bin -= cut;
            break;
        }
        cut -= *bin;
        *bin = 0;
    }

    let lo = histogram.iter().position(|&bin| bin > 0);
    let hi = histogram.iter().rposition(|&bin| bin > 0);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) if lo < hi => (lo, hi),
        // Degenerate histogram, nothing to stretch
        _ => return img.clone(),
    };

    let range = (hi - lo) as i64;
    let mut lut = [0u8; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        let mapped = (value as i64 - lo as i64) * 255 / range;
        *entry = mapped.clamp(0, 255) as u8;
    }

    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([lut[pixel[0] as usize]]));
    }

    output
}

/// Stretch the dynamic range with the fixed black/white point cutoffs
///
/// Cutoff percentages are derived from [`BLACK_POINT`] and
/// [`WHITE_POINT`]: roughly 2% of the counts at each end.
pub fn stretch_dynamic_range(img: &GrayImage) -> GrayImage {
    let cutoff_lo = f32::from(BLACK_POINT) / 255.0 * 100.0;
    let cutoff_hi = f32::from(255 - WHITE_POINT) / 255.0 * 100.0;
    autocontrast(img, cutoff_lo, cutoff_hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_grayscale_black() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let gray = weighted_grayscale(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_weighted_grayscale_white() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let gray = weighted_grayscale(&img);
        assert!(gray.get_pixel(0, 0)[0] >= 250);
    }

    #[test]
    fn test_weighted_grayscale_favors_green() {
        let green = weighted_grayscale(&RgbImage::from_pixel(1, 1, Rgb([0, 255, 0])));
        let red = weighted_grayscale(&RgbImage::from_pixel(1, 1, Rgb([255, 0, 0])));
        let blue = weighted_grayscale(&RgbImage::from_pixel(1, 1, Rgb([0, 0, 255])));

        // 0.72*255, 0.21*255, 0.07*255
        assert_eq!(green.get_pixel(0, 0)[0], 183);
        assert_eq!(red.get_pixel(0, 0)[0], 53);
        assert_eq!(blue.get_pixel(0, 0)[0], 17);
    }

    #[test]
    fn test_contrast_uniform_image_is_fixed_point() {
        let img = RgbImage::from_pixel(8, 8, Rgb([128, 128, 128]));
        let adjusted = adjust_contrast(&img);
        assert_eq!(adjusted.get_pixel(3, 3), &Rgb([128, 128, 128]));
    }

    #[test]
    fn test_contrast_pushes_values_from_mean() {
        // Top half 100, bottom half 200; mean luminance is 150
        let mut img = RgbImage::from_pixel(4, 4, Rgb([100, 100, 100]));
        for y in 2..4 {
            for x in 0..4 {
                img.put_pixel(x, y, Rgb([200, 200, 200]));
            }
        }

        let adjusted = adjust_contrast(&img);
        // 150 + (100-150)*1.15 = 92.5, 150 + (200-150)*1.15 = 207.5
        assert_eq!(adjusted.get_pixel(0, 0)[0], 92);
        assert_eq!(adjusted.get_pixel(0, 3)[0], 207);
    }

    #[test]
    fn test_contrast_clamps_extremes() {
        let mut img = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));

        let adjusted = adjust_contrast(&img);
        assert_eq!(adjusted.get_pixel(0, 0)[0], 0);
        assert_eq!(adjusted.get_pixel(1, 0)[0], 255);
    }

    #[test]
    fn test_smooth_uniform_image_is_fixed_point() {
        let img = RgbImage::from_pixel(5, 5, Rgb([128, 128, 128]));
        let smoothed = smooth(&img);
        for pixel in smoothed.pixels() {
            assert_eq!(pixel[0], 128);
        }
    }

    #[test]
    fn test_smooth_spreads_point() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));

        let smoothed = smooth(&img);
        // Center keeps weight 5 of 13: (5*255)/13 = 98.08
        assert_eq!(smoothed.get_pixel(1, 1)[0], 98);
        // Neighbors pick up weight 1 of 13: 255/13 = 19.6
        assert_eq!(smoothed.get_pixel(0, 1)[0], 20);
    }

    #[test]
    fn test_sharpen_uniform_image_is_fixed_point() {
        let img = RgbImage::from_pixel(6, 6, Rgb([77, 77, 77]));
        let sharpened = sharpen(&img);
        for pixel in sharpened.pixels() {
            assert_eq!(pixel[0], 77);
        }
    }

    #[test]
    fn test_enhance_preserves_dimensions() {
        let img = RgbImage::new(17, 9);
        let enhanced = enhance_for_grayscale(&img);
        assert_eq!(enhanced.dimensions(), (17, 9));
    }

    #[test]
    fn test_enhance_luma_uniform_is_fixed_point() {
        let img = GrayImage::from_pixel(4, 4, Luma([200]));
        let enhanced = enhance_for_grayscale_luma(&img);
        for pixel in enhanced.pixels() {
            assert_eq!(pixel[0], 200);
        }
    }

    #[test]
    fn test_autocontrast_uniform_is_identity() {
        let img = GrayImage::from_pixel(16, 16, Luma([42]));
        let stretched = stretch_dynamic_range(&img);
        for pixel in stretched.pixels() {
            assert_eq!(pixel[0], 42);
        }
    }

    #[test]
    fn test_autocontrast_all_black_and_all_white_are_identity() {
        for value in [0u8, 255u8] {
            let img = GrayImage::from_pixel(8, 8, Luma([value]));
            let stretched = stretch_dynamic_range(&img);
            assert_eq!(stretched.get_pixel(0, 0)[0], value);
        }
    }

    #[test]
    fn test_autocontrast_stretches_two_level_image() {
        // Half 100, half 150, large enough that the ~2% cutoff does not
        // empty either bin
        let mut img = GrayImage::from_pixel(64, 64, Luma([100]));
        for y in 32..64 {
            for x in 0..64 {
                img.put_pixel(x, y, Luma([150]));
            }
        }

        let stretched = stretch_dynamic_range(&img);
        assert_eq!(stretched.get_pixel(0, 0)[0], 0);
        assert_eq!(stretched.get_pixel(0, 63)[0], 255);
    }

    #[test]
    fn test_autocontrast_preserves_dimensions() {
        let img = GrayImage::new(33, 21);
        let stretched = stretch_dynamic_range(&img);
        assert_eq!(stretched.dimensions(), (33, 21));
    }
}

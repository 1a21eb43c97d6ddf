use crate::error::ConvertError;
use crate::lut::{ANSI_RESET, bucket_index, rgb_to_ansi};
use image::{GrayImage, RgbImage};
use std::fmt;
use std::fs;
use std::path::Path;

/// ASCII art output: one text line per image row
///
/// Lines are stored top to bottom. `Display` joins them with `\n` and
/// emits no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
    width: u32,
}

impl AsciiArt {
    /// Output lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Output width in glyphs (not characters)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in rows
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Write the art to a file, overwriting any existing content
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Map a grayscale image to glyph lines
///
/// Each pixel selects a palette bucket from its luminance. When a colour
/// source is given every glyph is wrapped in the ANSI truecolor escape
/// for the source pixel at the same coordinate plus a reset.
///
/// # Arguments
/// * `gray` - Grayscale image, one byte per pixel
/// * `palette` - Ordered glyph palette, length >= 1
/// * `colour_src` - Optional colour image with the same dimensions
///
/// # Returns
/// One line per image row, one glyph per pixel
pub fn map_glyphs(gray: &GrayImage, palette: &[&str], colour_src: Option<&RgbImage>) -> AsciiArt {
    assert!(!palette.is_empty(), "palette must not be empty");
    if let Some(src) = colour_src {
        assert_eq!(src.dimensions(), gray.dimensions());
    }

    let (width, height) = gray.dimensions();
    let mut lines = Vec::with_capacity(height as usize);

    for y in 0..height {
        let mut line = String::with_capacity(width as usize * 2);

        for x in 0..width {
            let luminance = gray.get_pixel(x, y)[0];
            let glyph = palette[bucket_index(luminance, palette.len())];

            match colour_src {
                Some(src) => {
                    let pixel = src.get_pixel(x, y);
                    line.push_str(&rgb_to_ansi(pixel[0], pixel[1], pixel[2]));
                    line.push_str(glyph);
                    line.push_str(ANSI_RESET);
                }
                None => line.push_str(glyph),
            }
        }

        lines.push(line);
    }

    AsciiArt { lines, width }
}

//! asciify - image to ASCII art converter
//!
//! Converts a raster image into a text rendering through a single linear
//! pipeline: resize, enhance, grayscale, glyph mapping. Colour mode keeps
//! the original pixel colors via ANSI truecolor escape sequences instead
//! of glyph density.
//!
//! # Example
//! ```no_run
//! use asciify::{ConvertConfig, convert_image};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = ConvertConfig::default();
//! let art = convert_image(&input, &config).unwrap();
//! art.save("ascii_art.txt".as_ref()).unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;

// Re-export main types for convenience
pub use ascii::AsciiArt;
pub use config::ConvertConfig;
pub use error::ConvertError;
pub use processor::{convert_file, convert_image};

//! Glyph lookup tables and ANSI escape helpers
//!
//! The ramp uses two-character glyphs so the output is roughly square in
//! most terminal fonts.

/// Dark-mode luminance ramp, darkest glyph first
///
/// Index 0 is rendered for the darkest pixels, index 12 for the
/// brightest, so bright pixels come out as dense glyphs. Suited to
/// light-background terminals.
pub const GLYPH_RAMP_DARK: [&str; 13] = [
    "  ", "..", ",,", "--", "~~", "::", ";;", "==", "!!", "**", "##", "$$", "@@",
];

/// Fixed glyph used in colour mode, where brightness is conveyed by the
/// escape sequence rather than glyph density
pub const COLOUR_GLYPH: &str = "<3";

/// ANSI sequence restoring the terminal's default attributes
pub const ANSI_RESET: &str = "\x1b[0m";

/// Select the glyph ramp for the requested mode
///
/// The default ramp is the exact reverse of the dark-mode ramp: the
/// lightest glyph first, so dark pixels render as dense glyphs.
pub fn glyph_ramp(dark_mode: bool) -> Vec<&'static str> {
    if dark_mode {
        GLYPH_RAMP_DARK.to_vec()
    } else {
        GLYPH_RAMP_DARK.iter().rev().copied().collect()
    }
}

/// Map a luminance value to a palette bucket
///
/// `bucket = floor(luminance / (256 / N))`, clamped to `[0, N-1]`.
///
/// # Arguments
/// * `luminance` - Pixel luminance in [0, 255]
/// * `palette_len` - Number of glyphs in the palette (N >= 1)
///
/// # Returns
/// Index into the palette, always in bounds
pub fn bucket_index(luminance: u8, palette_len: usize) -> usize {
    debug_assert!(palette_len >= 1, "palette must not be empty");

    let step = 256.0 / palette_len as f32;
    let index = (luminance as f32 / step) as usize;
    index.min(palette_len - 1)
}

/// Build the ANSI 24-bit foreground escape sequence for an RGB triple
pub fn rgb_to_ansi(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

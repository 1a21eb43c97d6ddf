use crate::error::ConvertError;

/// Configuration for an image to ASCII art conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Target output height in character rows, default 100
    pub height: u32,
    /// Ramp ordering for light-background terminals (dense glyphs for
    /// bright pixels), default false
    pub dark_mode: bool,
    /// Emit ANSI truecolor escape sequences around a fixed glyph instead
    /// of a luminance ramp, default false
    pub colour: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            height: 100,
            dark_mode: false,
            colour: false,
        }
    }
}

impl ConvertConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.height == 0 {
            return Err(ConvertError::InvalidHeight(self.height));
        }
        Ok(())
    }
}

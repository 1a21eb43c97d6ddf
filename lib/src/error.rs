use thiserror::Error;

/// Errors produced by the conversion pipeline
///
/// Any failure aborts the whole conversion; there is nothing to retry
/// and no partial output is reported.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or decoded
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// Reading the input or writing the output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested character height is not a positive integer
    #[error("target height must be at least 1, got {0}")]
    InvalidHeight(u32),

    /// The source image has a zero dimension
    #[error("image has no pixels to convert")]
    EmptyImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_height_message() {
        let err = ConvertError::InvalidHeight(0);
        assert_eq!(err.to_string(), "target height must be at least 1, got 0");
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}

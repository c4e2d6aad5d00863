use std::fmt;

/// Failures of the color picker's swatch painting and sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchError {
    /// The sampled pixel lies outside the painted swatch.
    ///
    /// Also returned when nothing has been painted yet: the swatch is then
    /// `0 × 0` and every position is out of range.
    OutOfRangeSample {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    /// The widget rect has a negative or non-finite size.
    InvalidDimension { width: f32, height: f32 },
}

impl fmt::Display for SwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchError::OutOfRangeSample { x, y, width, height } => write!(
                f,
                "sample at ({x}, {y}) is outside the {width}x{height} swatch"
            ),
            SwatchError::InvalidDimension { width, height } => {
                write!(f, "invalid swatch dimensions {width}x{height}")
            }
        }
    }
}

impl std::error::Error for SwatchError {}

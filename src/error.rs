use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Stepping and randomizing never fail once a stepper exists; everything
/// here is raised while building buffers, boards, rules or configs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A cell array or pixel buffer does not match its declared dimensions,
    /// or the dimensions themselves are unusable (zero or overflowing).
    #[error("invalid dimensions: {width}x{height} does not fit a buffer of length {len}")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    /// A survival or birth range is inverted or exceeds the neighbourhood size.
    #[error("invalid rule range {min}..={max} (thresholds must satisfy 0 <= min <= max <= {limit})")]
    InvalidRule { min: u32, max: u32, limit: u32 },

    #[error("live probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// Zero, or too large for the cube's board to be addressed.
    #[error("invalid cube size {0}")]
    InvalidCubeSize(u32),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Number of cells for a `width` x `height` board, rejecting empty or
/// overflowing sizes.
pub(crate) fn cell_count(width: u32, height: u32) -> Result<usize> {
    let invalid = SimError::InvalidDimensions { width, height, len: 0 };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(invalid)
}

/// Checks a supplied cell or pixel count against `width` x `height`. The
/// error carries `len` whether the dimensions are unusable or just mismatched.
pub(crate) fn expect_len(width: u32, height: u32, len: usize) -> Result<usize> {
    match cell_count(width, height) {
        Ok(count) if count == len => Ok(count),
        _ => Err(SimError::InvalidDimensions { width, height, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(3, 4), Ok(12));
        assert!(cell_count(0, 4).is_err());
        assert!(cell_count(4, 0).is_err());
    }

    #[test]
    fn test_expect_len_reports_supplied_length() {
        assert_eq!(expect_len(2, 3, 6), Ok(6));
        assert_eq!(
            expect_len(0, 2, 2),
            Err(SimError::InvalidDimensions { width: 0, height: 2, len: 2 })
        );
        assert_eq!(
            expect_len(2, 2, 3),
            Err(SimError::InvalidDimensions { width: 2, height: 2, len: 3 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SimError::InvalidDimensions { width: 2, height: 2, len: 3 };
        assert_eq!(
            err.to_string(),
            "invalid dimensions: 2x2 does not fit a buffer of length 3"
        );

        let err = SimError::InvalidRule { min: 4, max: 2, limit: 8 };
        assert!(err.to_string().contains("4..=2"));
    }
}

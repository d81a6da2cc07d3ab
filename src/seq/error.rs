//! Error type for sequence operations.
//!
//! Every bounds or range violation is reported at the call that received
//! the bad argument. Operations validate first and mutate second, so an
//! `Err` always leaves the sequence untouched.

use thiserror::Error;

/// Errors reported by [`Seq`](super::Seq) and [`MSeq`](super::MSeq) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A single index lies outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A range `[start, end)` does not fit into `0..=len`.
    #[error("range {start}..{end} out of bounds for length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// A range whose start lies after its end.
    #[error("invalid range: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },

    /// [`Cursor::set`](super::Cursor::set) called before `next` or `previous`.
    #[error("cursor has no current element")]
    NoCurrentElement,
}

/// Checks `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SeqError> {
    if index < len {
        Ok(())
    } else {
        Err(SeqError::IndexOutOfBounds { index, len })
    }
}

/// Checks `start <= len` for an open-ended range `[start, len)`.
pub(crate) fn check_start(start: usize, len: usize) -> Result<(), SeqError> {
    if start > len {
        return Err(SeqError::RangeOutOfBounds {
            start,
            end: start,
            len,
        });
    }
    Ok(())
}

/// Checks `start <= end <= len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), SeqError> {
    if start > end {
        return Err(SeqError::InvalidRange { start, end });
    }
    if end > len {
        return Err(SeqError::RangeOutOfBounds { start, end, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(3, 3),
            Err(SeqError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(1, 3, 3).is_ok());
        assert_eq!(
            check_range(2, 1, 3),
            Err(SeqError::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(
            check_range(0, 4, 3),
            Err(SeqError::RangeOutOfBounds {
                start: 0,
                end: 4,
                len: 3
            })
        );
    }

    #[test]
    fn test_check_start() {
        assert!(check_start(0, 0).is_ok());
        assert!(check_start(3, 3).is_ok());
        assert_eq!(
            check_start(4, 3),
            Err(SeqError::RangeOutOfBounds {
                start: 4,
                end: 4,
                len: 3
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SeqError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 out of bounds for length 2");
        let err = SeqError::InvalidRange { start: 3, end: 1 };
        assert_eq!(err.to_string(), "invalid range: start 3 > end 1");
    }
}

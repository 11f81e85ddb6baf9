#![forbid(unsafe_code)]

//! Error types for wrapping configuration.

/// Broad classification of a [`WrapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration cannot produce any valid wrapping.
    InvalidConfiguration,
}

/// Errors raised when a [`WrapConfig`](crate::WrapConfig) is rejected.
///
/// All variants are detected before any wrapping work starts, so a failed
/// call never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// Width must be at least one character.
    InvalidWidth { width: usize },
    /// `max_lines` was set to zero.
    InvalidMaxLines,
    /// The placeholder does not fit next to the indent of the last line.
    PlaceholderTooLarge {
        indent: usize,
        placeholder: usize,
        width: usize,
    },
}

impl WrapError {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWidth { .. } | Self::InvalidMaxLines | Self::PlaceholderTooLarge { .. } => {
                ErrorKind::InvalidConfiguration
            }
        }
    }
}

impl std::fmt::Display for WrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "invalid width {width} (must be > 0)")
            }
            Self::InvalidMaxLines => write!(f, "invalid max_lines 0 (must be >= 1)"),
            Self::PlaceholderTooLarge {
                indent,
                placeholder,
                width,
            } => write!(
                f,
                "placeholder too large for max width: indent {indent} + placeholder {placeholder} > width {width}"
            ),
        }
    }
}

impl std::error::Error for WrapError {}

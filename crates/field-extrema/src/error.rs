use core::fmt;

/// Buffer named in a [`ExtremaError::MismatchedBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Grid,
    Map,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::Map => f.write_str("extrema map"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtremaError {
    /// Fewer than 3 rows or columns: no interior cell exists.
    InvalidDimensions { rows: usize, cols: usize },
    /// A flat buffer whose length is not `rows * cols`.
    MismatchedBuffer {
        buffer: Buffer,
        expected: usize,
        actual: usize,
    },
    /// Map view shape differs from the grid view shape, as `(rows, cols)`.
    ShapeMismatch {
        grid: (usize, usize),
        map: (usize, usize),
    },
    InvalidCapacity(i64),
    Grid(field_core::Error),
}

impl fmt::Display for ExtremaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions {rows}x{cols}: need at least 3x3")
            }
            Self::MismatchedBuffer {
                buffer,
                expected,
                actual,
            } => write!(f, "{buffer} buffer has {actual} elements, expected {expected}"),
            Self::ShapeMismatch { grid, map } => write!(
                f,
                "extrema map is {}x{}, grid is {}x{}",
                map.0, map.1, grid.0, grid.1
            ),
            Self::InvalidCapacity(raw) => write!(f, "invalid capacity {raw}: must be non-negative"),
            Self::Grid(err) => write!(f, "grid: {err}"),
        }
    }
}

impl std::error::Error for ExtremaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<field_core::Error> for ExtremaError {
    fn from(err: field_core::Error) -> Self {
        Self::Grid(err)
    }
}

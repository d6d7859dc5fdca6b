use crate::config::ScanConfig;
use crate::mark::Mark;

/// Grid cell index. Derived ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

impl ExtremumKind {
    pub fn mark<M: Mark>(self) -> M {
        match self {
            Self::Maximum => M::MAXIMUM,
            Self::Minimum => M::MINIMUM,
        }
    }
}

/// Coordinate lists produced by one scan, both in row-major order.
///
/// `dropped_*` count qualifying cells that did not fit under the configured
/// capacity. Whether those cells were still marked in the map depends on
/// [`OverflowPolicy`](crate::OverflowPolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extrema {
    pub maxima: Vec<Coord>,
    pub minima: Vec<Coord>,
    pub dropped_maxima: usize,
    pub dropped_minima: usize,
}

impl Extrema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(maxima: usize, minima: usize) -> Self {
        Self {
            maxima: Vec::with_capacity(maxima),
            minima: Vec::with_capacity(minima),
            dropped_maxima: 0,
            dropped_minima: 0,
        }
    }

    /// Pre-sizes both lists so that scanning a `rows x cols` grid with `cfg`
    /// never reallocates.
    ///
    /// Reservation is bounded by the interior cell count, so unbounded
    /// capacities are safe to pass.
    pub fn for_grid(cfg: &ScanConfig, rows: usize, cols: usize) -> Self {
        let interior = rows.saturating_sub(2).saturating_mul(cols.saturating_sub(2));
        Self::with_capacity(
            cfg.max_capacity.min(interior),
            cfg.min_capacity.min(interior),
        )
    }

    /// Empties the lists and counters, keeping allocations.
    pub fn clear(&mut self) {
        self.maxima.clear();
        self.minima.clear();
        self.dropped_maxima = 0;
        self.dropped_minima = 0;
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped_maxima > 0 || self.dropped_minima > 0
    }
}

//! 3x3 neighborhood classification over the grid interior.
//!
//! Only cells with a complete 3x3 block are evaluated: rows `1..rows-1` and
//! columns `1..cols-1`. The outer ring is never read as a center and never
//! written.
//!
//! A center is a maximum iff no value in its block is strictly greater, and a
//! minimum iff none is strictly smaller. Flat blocks satisfy both; the maximum
//! wins. Comparisons go through `PartialOrd`, so a NaN neighbor neither
//! qualifies nor disqualifies a center and a NaN center is always a maximum.

use field_core::{Grid, GridView, GridViewMut};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{OverflowPolicy, ScanConfig};
use crate::error::{Buffer, ExtremaError};
use crate::extrema::{Coord, Extrema, ExtremumKind};
use crate::mark::Mark;

const MIN_DIM: usize = 3;
const ROWS_PER_TASK: usize = 8;

/// Reusable scanner bound to one [`ScanConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExtremaScanner {
    cfg: ScanConfig,
}

impl ExtremaScanner {
    pub fn new(cfg: ScanConfig) -> Self {
        Self { cfg }
    }

    pub fn scan<T, M>(
        &self,
        grid: &GridView<'_, T>,
        map: &mut GridViewMut<'_, M>,
    ) -> Result<Extrema, ExtremaError>
    where
        T: PartialOrd,
        M: Mark,
    {
        let mut out = Extrema::for_grid(&self.cfg, grid.rows(), grid.cols());
        self.scan_into(grid, map, &mut out)?;
        Ok(out)
    }

    /// Scans `grid`, marking `map` and refilling `out`.
    ///
    /// `out` is cleared first. When it was created with
    /// [`Extrema::for_grid`] for the same shape no allocation happens.
    /// On error neither `map` nor `out` is modified.
    pub fn scan_into<T, M>(
        &self,
        grid: &GridView<'_, T>,
        map: &mut GridViewMut<'_, M>,
        out: &mut Extrema,
    ) -> Result<(), ExtremaError>
    where
        T: PartialOrd,
        M: Mark,
    {
        validate(grid, map)?;
        out.clear();

        for i in 1..grid.rows() - 1 {
            scan_row(grid, i, |j, kind| {
                commit(map, out, &self.cfg, kind, Coord::new(i, j));
            });
        }

        log_summary(grid, out, false);
        Ok(())
    }

    /// Row-parallel variant of [`Self::scan_into`] with identical output.
    ///
    /// Rows are classified concurrently; hits are then committed on the
    /// calling thread in row-major order so capacity truncation picks the
    /// same cells as the sequential scan.
    pub fn scan_par<T, M>(
        &self,
        grid: &GridView<'_, T>,
        map: &mut GridViewMut<'_, M>,
        out: &mut Extrema,
    ) -> Result<(), ExtremaError>
    where
        T: PartialOrd + Sync,
        M: Mark,
    {
        validate(grid, map)?;
        if grid.rows() - 2 < self.cfg.par_min_rows {
            return self.scan_into(grid, map, out);
        }
        out.clear();

        let row_hits: Vec<Vec<(usize, ExtremumKind)>> = (1..grid.rows() - 1)
            .into_par_iter()
            .with_min_len(ROWS_PER_TASK)
            .map(|i| {
                let mut hits = Vec::new();
                scan_row(grid, i, |j, kind| hits.push((j, kind)));
                hits
            })
            .collect();

        trace!(rows = row_hits.len(), "merging row hits");
        for (offset, hits) in row_hits.into_iter().enumerate() {
            let i = offset + 1;
            for (j, kind) in hits {
                commit(map, out, &self.cfg, kind, Coord::new(i, j));
            }
        }

        log_summary(grid, out, true);
        Ok(())
    }
}

/// Scans `grid` into `map` with `cfg`.
pub fn scan<T, M>(
    grid: &GridView<'_, T>,
    map: &mut GridViewMut<'_, M>,
    cfg: &ScanConfig,
) -> Result<Extrema, ExtremaError>
where
    T: PartialOrd,
    M: Mark,
{
    ExtremaScanner::new(*cfg).scan(grid, map)
}

/// Flat-buffer entry point: `grid` and `map` are row-major `rows * cols`
/// buffers, and both lists share `capacity`.
pub fn scan_slice<T, M>(
    grid: &[T],
    rows: usize,
    cols: usize,
    map: &mut [M],
    capacity: usize,
) -> Result<Extrema, ExtremaError>
where
    T: PartialOrd,
    M: Mark,
{
    check_dims(rows, cols)?;
    let expected = rows
        .checked_mul(cols)
        .ok_or(ExtremaError::InvalidDimensions { rows, cols })?;
    check_len(Buffer::Grid, expected, grid.len())?;
    check_len(Buffer::Map, expected, map.len())?;

    let grid = GridView::from_slice(rows, cols, cols, grid)?;
    let mut map = GridViewMut::from_slice_mut(rows, cols, cols, map)?;
    scan(&grid, &mut map, &ScanConfig::with_capacity(capacity))
}

/// Allocates a zeroed map and scans into it.
pub fn find_extrema<T>(
    grid: &GridView<'_, T>,
    cfg: &ScanConfig,
) -> Result<(Grid<i8>, Extrema), ExtremaError>
where
    T: PartialOrd,
{
    check_dims(grid.rows(), grid.cols())?;
    let mut map = Grid::new_fill(grid.rows(), grid.cols(), 0i8);
    let extrema = scan(grid, &mut map.as_view_mut(), cfg)?;
    Ok((map, extrema))
}

fn check_dims(rows: usize, cols: usize) -> Result<(), ExtremaError> {
    if rows < MIN_DIM || cols < MIN_DIM {
        return Err(ExtremaError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

fn check_len(buffer: Buffer, expected: usize, actual: usize) -> Result<(), ExtremaError> {
    if expected != actual {
        return Err(ExtremaError::MismatchedBuffer {
            buffer,
            expected,
            actual,
        });
    }
    Ok(())
}

fn validate<T, M>(grid: &GridView<'_, T>, map: &GridViewMut<'_, M>) -> Result<(), ExtremaError> {
    check_dims(grid.rows(), grid.cols())?;
    if map.rows() != grid.rows() || map.cols() != grid.cols() {
        return Err(ExtremaError::ShapeMismatch {
            grid: (grid.rows(), grid.cols()),
            map: (map.rows(), map.cols()),
        });
    }
    Ok(())
}

fn scan_row<T: PartialOrd>(
    grid: &GridView<'_, T>,
    i: usize,
    mut hit: impl FnMut(usize, ExtremumKind),
) {
    let above = grid.row(i - 1);
    let mid = grid.row(i);
    let below = grid.row(i + 1);

    for j in 1..grid.cols() - 1 {
        if let Some(kind) = classify(above, mid, below, j) {
            hit(j, kind);
        }
    }
}

#[inline]
fn classify<T: PartialOrd>(above: &[T], mid: &[T], below: &[T], j: usize) -> Option<ExtremumKind> {
    let center = &mid[j];
    let mut is_max = true;
    let mut is_min = true;

    for row in [above, mid, below] {
        for v in &row[j - 1..=j + 1] {
            if v > center {
                is_max = false;
            }
            if v < center {
                is_min = false;
            }
        }
        if !is_max && !is_min {
            return None;
        }
    }

    if is_max {
        Some(ExtremumKind::Maximum)
    } else {
        Some(ExtremumKind::Minimum)
    }
}

fn commit<M: Mark>(
    map: &mut GridViewMut<'_, M>,
    out: &mut Extrema,
    cfg: &ScanConfig,
    kind: ExtremumKind,
    at: Coord,
) {
    let (list, dropped) = match kind {
        ExtremumKind::Maximum => (&mut out.maxima, &mut out.dropped_maxima),
        ExtremumKind::Minimum => (&mut out.minima, &mut out.dropped_minima),
    };

    if list.len() < cfg.capacity(kind) {
        list.push(at);
    } else {
        *dropped += 1;
        if cfg.overflow == OverflowPolicy::Truncate {
            return;
        }
    }

    map.row_mut(at.row)[at.col] = kind.mark();
}

fn log_summary<T>(grid: &GridView<'_, T>, out: &Extrema, parallel: bool) {
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        parallel,
        maxima = out.maxima.len(),
        minima = out.minima.len(),
        dropped_maxima = out.dropped_maxima,
        dropped_minima = out.dropped_minima,
        "extrema scan complete"
    );
}

//! Local extrema detection on regularly sampled 2D scalar fields.
//!
//! Every interior cell is compared against its full 3x3 neighborhood and
//! classified as a maximum, a minimum or neither. Results go two ways:
//! - an extrema map of the grid's shape, where maxima are marked `+1` and
//!   minima `-1` while all other cells keep the caller's background value;
//! - two coordinate lists in row-major order, each capped by a capacity.
//!
//! Capacity overflow:
//! - [`OverflowPolicy::Truncate`] (default) skips cells that do not fit in
//!   their list, so map and lists always agree.
//! - [`OverflowPolicy::MarkOnly`] keeps marking the map and only stops
//!   recording coordinates.
//!
//! In both cases [`Extrema::dropped_maxima`] and [`Extrema::dropped_minima`]
//! report how many cells were cut.
//!
//! [`ExtremaScanner::scan_par`] splits the classification over rows with
//! rayon and produces exactly the sequential result.

mod config;
mod error;
mod extrema;
mod mark;
mod scanner;

pub use config::{OverflowPolicy, ScanConfig};
pub use error::{Buffer, ExtremaError};
pub use extrema::{Coord, Extrema, ExtremumKind};
pub use mark::Mark;
pub use scanner::{ExtremaScanner, find_extrema, scan, scan_slice};

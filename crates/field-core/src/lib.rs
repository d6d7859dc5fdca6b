//! Storage primitives for regularly sampled 2D scalar fields.
//!
//! ## Indexing
//! Grids are row-major and addressed as `(row, col)`. Row 0 is the first row
//! in memory; no geographic or image orientation is implied.
//!
//! ## Views and Stride
//! Views use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `cols`.
//! This allows borrowed views over padded buffers and sub-windows.

mod error;
mod grid;

pub use error::Error;
pub use grid::{Grid, GridView, GridViewMut};

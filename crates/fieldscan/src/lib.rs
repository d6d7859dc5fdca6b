//! Umbrella crate for the field extrema workspace.
//!
//! Re-exports grid primitives from `field-core` and the extrema scanner from
//! `field-extrema`.

pub use field_core::*;
pub use field_extrema::*;

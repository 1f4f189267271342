//! One-dimensional Lorentz transforms in natural units (c = 1).
//!
//! The core is a handful of pure functions in [`relativity::special`]:
//! [`transform`], [`inverse_transform`], [`invariant`] and [`is_timelike`].
//! [`metrics`] and [`report`] build tables and printable summaries on top.

pub mod error;
pub mod metrics;
pub mod relativity;
pub mod report;

pub use error::{RelativityError, Result};
pub use relativity::special::{
    C, Event, IntervalKind, interval_kind, invariant, inverse_transform, is_timelike,
    length_contraction, lorentz_factor, time_dilation, transform,
};

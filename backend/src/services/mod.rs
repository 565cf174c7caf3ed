//! Schedule processing services.
//!
//! Pure functions that turn a decoded status sample into what a renderer
//! shows. Nothing here performs I/O.

pub mod normalizer;
pub mod outage_ranges;
pub mod view;

pub use normalizer::{normalize, StatusFlag};
pub use outage_ranges::{extract, format_half_hour};
pub use view::{OutageSummary, ScheduleView};

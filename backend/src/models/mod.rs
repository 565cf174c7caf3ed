pub mod queue;
pub mod schedule;

pub use queue::*;
pub use schedule::*;

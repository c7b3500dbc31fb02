//! Unicode-aware offset translation.

mod offset;

pub use offset::{OffsetIndex, OffsetUnit};

//! IO modules - location input and output
//!
//! - `reader` - line-oriented raw location input, tolerant of non-UTF-8 bytes
//! - `emitter` - text or JSONL records for each location update

pub mod emitter;
pub mod reader;

pub use emitter::Emitter;
pub use reader::read_locations;

//! Services - location normalization logic
//!
//! - `sanitizer` - segment sanitization contract and the default `PrepId`
//! - `decoder` - ordered rack-slot suffix rules
//! - `normalizer` - raw location to organizer path plus rack slot
//! - `location_map` - per-device processing and holder updates

pub mod decoder;
pub mod location_map;
pub mod normalizer;
pub mod sanitizer;

// Re-export commonly used types
pub use location_map::{LocationMap, LocationUpdate};
pub use normalizer::Normalizer;
pub use sanitizer::{PrepId, SegmentSanitizer};

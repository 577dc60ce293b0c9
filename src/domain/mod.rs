//! Domain models - normalized locations and rack slots
//!
//! - `Location` - normalized organizer path plus optional rack slot
//! - `RackSlot` - decoded mounting position within a rack
//! - `LocationHolder` - entities that store a location (e.g. `Device`)

pub mod location;
pub mod rack_slot;

// Re-export commonly used types at module level
pub use location::{Device, Location, LocationHolder};
pub use rack_slot::{RackSlot, Side};

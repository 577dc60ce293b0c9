//! Normalized location and the holder interface for entities that carry one

use crate::domain::rack_slot::RackSlot;
use serde::Serialize;

/// Result of normalizing a raw location string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    path: String,
    #[serde(serialize_with = "serialize_rack_slot")]
    rack_slot: Option<RackSlot>,
}

fn serialize_rack_slot<S>(slot: &Option<RackSlot>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match slot {
        Some(slot) => serializer.collect_str(slot),
        None => serializer.serialize_str(""),
    }
}

impl Location {
    pub fn new(path: String, rack_slot: Option<RackSlot>) -> Self {
        Self { path, rack_slot }
    }

    /// Canonical organizer path, empty for an empty raw location
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn rack_slot(&self) -> Option<&RackSlot> {
        self.rack_slot.as_ref()
    }

    /// Descriptor string, empty when no suffix was recognized
    pub fn rack_slot_descriptor(&self) -> String {
        self.rack_slot.as_ref().map(RackSlot::to_string).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.rack_slot.is_none()
    }

    /// `(path, rack_slot)` pair as handed to a [`LocationHolder`]
    pub fn into_parts(self) -> (String, String) {
        let descriptor = self.rack_slot_descriptor();
        (self.path, descriptor)
    }
}

/// An entity that stores a normalized location and rack slot
pub trait LocationHolder {
    fn id(&self) -> &str;
    fn location(&self) -> &str;
    fn rack_slot(&self) -> &str;
    fn set_location(&mut self, path: String, rack_slot: String);
}

/// In-memory managed device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    id: String,
    location: String,
    rack_slot: String,
}

impl Device {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }
}

impl LocationHolder for Device {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn rack_slot(&self) -> &str {
        &self.rack_slot
    }

    fn set_location(&mut self, path: String, rack_slot: String) {
        self.location = path;
        self.rack_slot = rack_slot;
    }
}

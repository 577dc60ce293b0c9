//! Collector-side location processing
//!
//! Takes the raw `sysLocation` value fetched for a device, normalizes it, and
//! produces an update that can be applied to any [`LocationHolder`]. Whether a
//! holder persists the values is up to the holder.

use crate::domain::location::{Location, LocationHolder};
use crate::infra::config::Config;
use crate::services::normalizer::Normalizer;
use crate::services::sanitizer::{PrepId, SegmentSanitizer};
use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

/// OID of `SNMPv2-MIB::sysLocation.0`
pub const SYS_LOCATION_OID: &str = ".1.3.6.1.2.1.1.6.0";

const MAP_NAME: &str = "LocationMap";

/// Normalized location for one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationUpdate {
    pub device_id: String,
    #[serde(flatten)]
    pub location: Location,
}

impl LocationUpdate {
    /// Hand both values to the holder
    pub fn apply_to<H: LocationHolder + ?Sized>(self, holder: &mut H) {
        let (path, rack_slot) = self.location.into_parts();
        debug!(
            device_id = %holder.id(),
            previous = %holder.location(),
            path = %path,
            rack_slot = %rack_slot,
            "location_applied"
        );
        holder.set_location(path, rack_slot);
    }
}

/// Location modeler step
pub struct LocationMap<S = PrepId> {
    normalizer: Normalizer<S>,
}

impl LocationMap<PrepId> {
    pub fn new(config: &Config) -> Self {
        Self { normalizer: Normalizer::with_sanitizer(config.prep_id()) }
    }
}

impl<S: SegmentSanitizer> LocationMap<S> {
    pub fn with_normalizer(normalizer: Normalizer<S>) -> Self {
        Self { normalizer }
    }

    pub fn name(&self) -> &'static str {
        MAP_NAME
    }

    /// Normalize the raw location collected for `device_id`
    pub fn process(&self, device_id: &str, raw: &str) -> anyhow::Result<LocationUpdate> {
        info!(map = MAP_NAME, oid = SYS_LOCATION_OID, device_id = %device_id, "location_processing");

        let location = self
            .normalizer
            .normalize(raw)
            .with_context(|| format!("Failed to normalize location for device {}", device_id))?;

        info!(
            device_id = %device_id,
            raw = %raw,
            path = %location.path(),
            rack_slot = %location.rack_slot_descriptor(),
            "location_normalized"
        );

        Ok(LocationUpdate { device_id: device_id.to_string(), location })
    }

    /// Process `raw` for `holder` and apply the result to it
    pub fn process_holder<H: LocationHolder + ?Sized>(
        &self,
        holder: &mut H,
        raw: &str,
    ) -> anyhow::Result<()> {
        let update = self.process(holder.id(), raw)?;
        update.apply_to(holder);
        Ok(())
    }
}

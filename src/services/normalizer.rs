//! Location normalization
//!
//! Turns a raw `sysLocation` string into an absolute organizer path and an
//! optional rack slot:
//!
//! ```text
//! "Albuquerque/DC1/Rack01-25"  ->  ("/Albuquerque/DC1/Rack01", "rh=1,ru=25")
//! ```
//!
//! Only the last `-` of the last segment starts a suffix. Segments are
//! sanitized after the suffix is removed, and empty segments are dropped so
//! the path never contains `//`.

use crate::domain::location::Location;
use crate::services::decoder;
use crate::services::sanitizer::{PrepId, SegmentSanitizer};
use anyhow::{bail, Context};
use smallvec::SmallVec;
use std::convert::Infallible;

/// Normalize with the default [`PrepId`] sanitizer. Never fails.
pub fn normalize(raw: &str) -> Location {
    normalize_with_prep_id(raw, &PrepId::default())
}

/// Normalize with a specific [`PrepId`]. Never fails.
pub fn normalize_with_prep_id(raw: &str, prep: &PrepId) -> Location {
    match split_location(raw, |segment| Ok::<_, Infallible>(prep.prep(segment))) {
        Ok(location) => location,
        Err(never) => match never {},
    }
}

/// Normalizer bound to an injected segment sanitizer
#[derive(Debug, Clone, Default)]
pub struct Normalizer<S = PrepId> {
    sanitizer: S,
}

impl Normalizer<PrepId> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SegmentSanitizer> Normalizer<S> {
    pub fn with_sanitizer(sanitizer: S) -> Self {
        Self { sanitizer }
    }

    /// Normalize `raw`, failing if the sanitizer fails on any segment
    ///
    /// A sanitizer result containing `/` is rejected as well, since it would
    /// change the hierarchy.
    pub fn normalize(&self, raw: &str) -> anyhow::Result<Location> {
        split_location(raw, |segment| {
            let sanitized = self
                .sanitizer
                .sanitize(segment)
                .with_context(|| format!("Failed to sanitize location segment {:?}", segment))?;
            if sanitized.contains('/') {
                bail!("Sanitizer produced a delimiter in segment {:?} -> {:?}", segment, sanitized);
            }
            Ok(sanitized)
        })
    }
}

fn split_location<E>(
    raw: &str,
    mut sanitize: impl FnMut(&str) -> Result<String, E>,
) -> Result<Location, E> {
    if raw.is_empty() {
        return Ok(Location::default());
    }

    let mut segments: SmallVec<[&str; 8]> = raw.split('/').collect();

    let mut suffix = "";
    if let Some(last) = segments.last_mut() {
        let segment: &str = *last;
        if let Some((stem, tail)) = segment.rsplit_once('-') {
            *last = stem;
            suffix = tail;
        }
    }
    let rack_slot = decoder::decode(suffix);

    let mut path = String::with_capacity(raw.len() + 1);
    for &segment in &segments {
        let sanitized = sanitize(segment)?;
        if sanitized.is_empty() {
            continue;
        }
        path.push('/');
        path.push_str(&sanitized);
    }
    if path.is_empty() {
        path.push('/');
    }

    Ok(Location::new(path, rack_slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rack_slot::{RackSlot, Side};

    fn parts(raw: &str) -> (String, String) {
        normalize(raw).into_parts()
    }

    fn pair(path: &str, rack_slot: &str) -> (String, String) {
        (path.to_string(), rack_slot.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parts(""), pair("", ""));
    }

    #[test]
    fn test_front_unit() {
        assert_eq!(parts("Albuquerque/DC1/Rack01-25"), pair("/Albuquerque/DC1/Rack01", "rh=1,ru=25"));
    }

    #[test]
    fn test_rear_unit() {
        assert_eq!(
            parts("Albuquerque/DC1/Rack01-r25"),
            pair("/Albuquerque/DC1/Rack01", "rh=1,split=rear,ru=25")
        );
    }

    #[test]
    fn test_rear_left() {
        assert_eq!(parts("Albuquerque/DC1/Rack01-rl"), pair("/Albuquerque/DC1/Rack01", "split=left/rear"));
    }

    #[test]
    fn test_left() {
        assert_eq!(parts("Albuquerque/DC1/Rack01-l"), pair("/Albuquerque/DC1/Rack01", "split=left"));
    }

    #[test]
    fn test_only_final_segment_has_suffix() {
        assert_eq!(parts("Site-A/Row 1"), pair("/Site_A/Row_1", ""));
    }

    #[test]
    fn test_rear_digit_beats_right() {
        assert_eq!(parts("X-r9"), pair("/X", "rh=1,split=rear,ru=9"));
    }

    #[test]
    fn test_leading_slash() {
        assert_eq!(normalize("A/B").path(), "/A/B");
        assert_eq!(normalize("/A/B").path(), "/A/B");
    }

    #[test]
    fn test_last_dash_splits() {
        assert_eq!(parts("DC1/Rack-01-25"), pair("/DC1/Rack_01", "rh=1,ru=25"));
    }

    #[test]
    fn test_unrecognized_suffix_still_truncates() {
        assert_eq!(parts("DC1/Rack01-front"), pair("/DC1/Rack01", ""));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(parts("/"), pair("/", ""));
        assert_eq!(parts("///"), pair("/", ""));
        assert_eq!(parts("-"), pair("/", ""));
        assert_eq!(parts("-25"), pair("/", "rh=1,ru=25"));
        assert_eq!(parts("A//B/"), pair("/A/B", ""));
        assert_eq!(parts("Rack"), pair("/Rack", ""));
        assert_eq!(parts("A/B/-rr"), pair("/A/B", "split=right/rear"));
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "Albuquerque/DC1/Rack01-25",
            "Site-A/Row 1",
            "a-b/c-d-e/f-r7",
            "/",
            "-",
            "Zürich/DC 2/Cage#4-RL",
        ] {
            let first = normalize(raw);
            let second = normalize(first.path());
            assert_eq!(second.path(), first.path(), "raw {:?}", raw);
            assert_eq!(second.rack_slot(), None, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_typed_rack_slot() {
        let location = normalize("DC1/Rack01-RR");
        assert_eq!(location.rack_slot(), Some(&RackSlot::Side { side: Side::Right, rear: true }));
    }

    #[test]
    fn test_custom_prep_id() {
        let prep = PrepId::new('.').unwrap();
        let location = normalize_with_prep_id("Site A/Row 1-3", &prep);
        assert_eq!(location.path(), "/Site.A/Row.1");
        assert_eq!(location.rack_slot_descriptor(), "rh=1,ru=3");
    }

    struct Upper;

    impl SegmentSanitizer for Upper {
        fn sanitize(&self, segment: &str) -> anyhow::Result<String> {
            Ok(segment.to_ascii_uppercase())
        }
    }

    struct Failing;

    impl SegmentSanitizer for Failing {
        fn sanitize(&self, segment: &str) -> anyhow::Result<String> {
            if segment == "bad" {
                bail!("unsupported segment");
            }
            Ok(segment.to_string())
        }
    }

    struct Slashing;

    impl SegmentSanitizer for Slashing {
        fn sanitize(&self, segment: &str) -> anyhow::Result<String> {
            Ok(segment.replace('_', "/"))
        }
    }

    #[test]
    fn test_injected_sanitizer() {
        let normalizer = Normalizer::with_sanitizer(Upper);
        let location = normalizer.normalize("dc1/rack01-r4").unwrap();
        assert_eq!(location.path(), "/DC1/RACK01");
        assert_eq!(location.rack_slot_descriptor(), "rh=1,split=rear,ru=4");
    }

    #[test]
    fn test_sanitizer_failure_is_fatal() {
        let normalizer = Normalizer::with_sanitizer(Failing);
        assert!(normalizer.normalize("ok/good").is_ok());

        let err = normalizer.normalize("ok/bad/good").unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_sanitizer_delimiter_rejected() {
        let normalizer = Normalizer::with_sanitizer(Slashing);
        assert!(normalizer.normalize("a_b").is_err());
        assert_eq!(normalizer.normalize("ab").unwrap().path(), "/ab");
    }

    #[test]
    fn test_default_normalizer_matches_free_fn() {
        let normalizer = Normalizer::new();
        let raw = "Albuquerque/DC1/Rack01-rl";
        assert_eq!(normalizer.normalize(raw).unwrap(), normalize(raw));
    }
}

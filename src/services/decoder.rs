//! Rack-slot suffix decoding
//!
//! Suffixes are matched against an ordered rule table, first match wins.
//! Two-character forms sit above the single-letter forms so that `r5` is a
//! rear unit and never "right side".

use crate::domain::rack_slot::{RackSlot, Side};

/// One entry of the decode table
pub struct Rule {
    pub name: &'static str,
    pub decode: fn(&str) -> Option<RackSlot>,
}

/// Decode rules in priority order
pub const RULES: &[Rule] = &[
    Rule { name: "front_unit", decode: front_unit },
    Rule { name: "rear_unit", decode: rear_unit },
    Rule { name: "rear_left", decode: rear_left },
    Rule { name: "rear_right", decode: rear_right },
    Rule { name: "left", decode: left },
    Rule { name: "right", decode: right },
];

/// Decode a suffix, `None` when no rule recognizes it
pub fn decode(suffix: &str) -> Option<RackSlot> {
    RULES.iter().find_map(|rule| (rule.decode)(suffix))
}

/// Name of the rule that matches `suffix`
pub fn matching_rule(suffix: &str) -> Option<&'static str> {
    RULES.iter().find(|rule| (rule.decode)(suffix).is_some()).map(|rule| rule.name)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn strip_rear(suffix: &str) -> Option<&str> {
    suffix.strip_prefix(|c: char| c == 'r' || c == 'R')
}

// FOO-25
fn front_unit(suffix: &str) -> Option<RackSlot> {
    is_digits(suffix).then(|| RackSlot::Front { unit: suffix.to_string() })
}

// FOO-r25
fn rear_unit(suffix: &str) -> Option<RackSlot> {
    let unit = strip_rear(suffix)?;
    is_digits(unit).then(|| RackSlot::Rear { unit: unit.to_string() })
}

// FOO-rl
fn rear_left(suffix: &str) -> Option<RackSlot> {
    strip_rear(suffix)?
        .eq_ignore_ascii_case("l")
        .then_some(RackSlot::Side { side: Side::Left, rear: true })
}

// FOO-rr
fn rear_right(suffix: &str) -> Option<RackSlot> {
    strip_rear(suffix)?
        .eq_ignore_ascii_case("r")
        .then_some(RackSlot::Side { side: Side::Right, rear: true })
}

// FOO-l
fn left(suffix: &str) -> Option<RackSlot> {
    suffix.eq_ignore_ascii_case("l").then_some(RackSlot::Side { side: Side::Left, rear: false })
}

// FOO-r
fn right(suffix: &str) -> Option<RackSlot> {
    suffix.eq_ignore_ascii_case("r").then_some(RackSlot::Side { side: Side::Right, rear: false })
}

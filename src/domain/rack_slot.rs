//! Rack-slot descriptor decoded from a location suffix

use std::fmt;

/// Side of the rack for equipment mounted outside the unit columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Physical mounting position within a rack
///
/// Unit positions keep the digits exactly as they appeared in the suffix,
/// so `Rack01-025` renders `ru=025`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackSlot {
    /// Front of rack at unit position
    Front { unit: String },
    /// Rear of rack at unit position
    Rear { unit: String },
    /// Side-mounted, no unit position
    Side { side: Side, rear: bool },
}

impl fmt::Display for RackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RackSlot::Front { unit } => write!(f, "rh=1,ru={}", unit),
            RackSlot::Rear { unit } => write!(f, "rh=1,split=rear,ru={}", unit),
            RackSlot::Side { side, rear: false } => write!(f, "split={}", side.as_str()),
            RackSlot::Side { side, rear: true } => write!(f, "split={}/rear", side.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_front_and_rear() {
        assert_eq!(RackSlot::Front { unit: "25".into() }.to_string(), "rh=1,ru=25");
        assert_eq!(RackSlot::Rear { unit: "7".into() }.to_string(), "rh=1,split=rear,ru=7");
    }

    #[test]
    fn test_display_sides() {
        let left = RackSlot::Side { side: Side::Left, rear: false };
        let right_rear = RackSlot::Side { side: Side::Right, rear: true };
        assert_eq!(left.to_string(), "split=left");
        assert_eq!(right_rear.to_string(), "split=right/rear");
    }

    #[test]
    fn test_unit_leading_zeros_kept() {
        assert_eq!(RackSlot::Front { unit: "007".into() }.to_string(), "rh=1,ru=007");
    }
}

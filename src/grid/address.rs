//! Grid addressing
//!
//! A cell is addressed by (group, bank, slot). The fixed iteration order of
//! these types is load-bearing: flattening walks groups, then banks, then
//! slots, and that order becomes persisted array order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two independent effect pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FxGroup {
    Input,
    Track,
}

impl FxGroup {
    /// Flattening order; input before track
    pub const ALL: [FxGroup; 2] = [FxGroup::Input, FxGroup::Track];

    pub(crate) fn index(self) -> usize {
        match self {
            FxGroup::Input => 0,
            FxGroup::Track => 1,
        }
    }
}

impl fmt::Display for FxGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FxGroup::Input => write!(f, "input"),
            FxGroup::Track => write!(f, "track"),
        }
    }
}

/// Bank coordinate within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bank {
    A,
    B,
    C,
    D,
}

impl Bank {
    pub const ALL: [Bank; 4] = [Bank::A, Bank::B, Bank::C, Bank::D];

    pub(crate) fn index(self) -> usize {
        match self {
            Bank::A => 0,
            Bank::B => 1,
            Bank::C => 2,
            Bank::D => 3,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::A => write!(f, "A"),
            Bank::B => write!(f, "B"),
            Bank::C => write!(f, "C"),
            Bank::D => write!(f, "D"),
        }
    }
}

/// Slot coordinate within a bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
    D,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::A, Slot::B, Slot::C, Slot::D];

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
            Slot::C => 2,
            Slot::D => 3,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
            Slot::C => write!(f, "C"),
            Slot::D => write!(f, "D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&FxGroup::Input).unwrap(), "\"input\"");
        assert_eq!(serde_json::to_string(&FxGroup::Track).unwrap(), "\"track\"");
        assert_eq!(serde_json::to_string(&Bank::C).unwrap(), "\"C\"");
        assert_eq!(serde_json::to_string(&Slot::D).unwrap(), "\"D\"");

        let bank: Bank = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(bank, Bank::B);
    }

    #[test]
    fn test_iteration_order() {
        assert_eq!(FxGroup::ALL[0], FxGroup::Input);
        assert_eq!(Bank::ALL.map(|b| b.index()), [0, 1, 2, 3]);
        assert_eq!(Slot::ALL.map(|s| s.index()), [0, 1, 2, 3]);
    }

    #[test]
    fn test_display_matches_wire_casing() {
        assert_eq!(FxGroup::Track.to_string(), "track");
        assert_eq!(Bank::A.to_string(), "A");
        assert_eq!(Slot::C.to_string(), "C");
    }
}

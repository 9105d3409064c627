//! Placement-aware effect choice
//!
//! Which effect types an editor may offer depends on where the effect
//! block sits in the signal chain and, for track blocks, on the bank
//! being edited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use crate::grid::Bank;

/// Position of an effect block in the signal chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FxPlacement {
    /// Standalone block outside the grid pairing
    Single,
    /// Input-side block of a paired grid
    Input,
    /// Track-side block of a paired grid
    Track,
    /// Combined view editing both sides at once
    InputTrack,
}

impl FxPlacement {
    pub const ALL: [FxPlacement; 4] = [
        FxPlacement::Single,
        FxPlacement::Input,
        FxPlacement::Track,
        FxPlacement::InputTrack,
    ];
}

impl fmt::Display for FxPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FxPlacement::Single => "single",
            FxPlacement::Input => "input",
            FxPlacement::Track => "track",
            FxPlacement::InputTrack => "inputTrack",
        };
        write!(f, "{}", name)
    }
}

impl Catalog {
    /// Effect types selectable at the given placement and bank.
    ///
    /// The track group's first bank offers only the restricted set; its
    /// other banks, and the combined view at any bank, offer everything
    /// else. Input and single placements see the whole catalog.
    pub fn legal_effect_types(&self, placement: FxPlacement, bank: Bank) -> Vec<String> {
        match placement {
            FxPlacement::Track if bank == Bank::A => self.track_a_only().to_vec(),
            FxPlacement::Track | FxPlacement::InputTrack => self
                .effect_types()
                .filter(|e| !self.is_track_a_only(e))
                .map(|e| e.to_string())
                .collect(),
            FxPlacement::Single | FxPlacement::Input => {
                self.effect_types().map(|e| e.to_string()).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_track_bank_a_offers_restricted_set_only() {
        let catalog = Catalog::builtin();
        let types = catalog.legal_effect_types(FxPlacement::Track, Bank::A);
        assert_eq!(
            types,
            vec!["BEAT SCATTER", "BEAT REPEAT", "BEAT SHIFT", "VINYL FLICK"]
        );
    }

    #[test_case(FxPlacement::Track, Bank::B; "track bank b")]
    #[test_case(FxPlacement::Track, Bank::D; "track bank d")]
    #[test_case(FxPlacement::InputTrack, Bank::A; "combined bank a")]
    #[test_case(FxPlacement::InputTrack, Bank::C; "combined bank c")]
    fn test_unrestricted_track_placements_drop_first_bank_set(
        placement: FxPlacement,
        bank: Bank,
    ) {
        let catalog = Catalog::builtin();
        let types = catalog.legal_effect_types(placement, bank);
        assert_eq!(types.len(), 46);
        assert!(!types.iter().any(|t| t == "BEAT SCATTER"));
        assert_eq!(types[0], "LPF");
    }

    #[test_case(FxPlacement::Single; "single")]
    #[test_case(FxPlacement::Input; "input")]
    fn test_input_and_single_see_whole_catalog(placement: FxPlacement) {
        let catalog = Catalog::builtin();
        for bank in [Bank::A, Bank::B, Bank::C, Bank::D] {
            let types = catalog.legal_effect_types(placement, bank);
            assert_eq!(types.len(), 50, "bank {} should expose everything", bank);
            assert!(types.iter().any(|t| t == "VINYL FLICK"));
        }
    }

    #[test]
    fn test_placement_serde_names() {
        let json = serde_json::to_string(&FxPlacement::InputTrack).unwrap();
        assert_eq!(json, "\"inputTrack\"");
        let back: FxPlacement = serde_json::from_str("\"track\"").unwrap();
        assert_eq!(back, FxPlacement::Track);
    }
}

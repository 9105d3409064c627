//! Effect grid
//!
//! In-memory edit state for a preset's effects: 2 groups x 4 banks x 4
//! slots, every cell populated from construction. Grids are values; `set`
//! and `clear` return a new grid that shares untouched cells with the old
//! one, so callers holding the previous version can still diff against it.

use std::sync::Arc;

use log::debug;

use super::address::{Bank, FxGroup, Slot};
use super::config::EffectConfig;
use super::legacy::{decode_payload, encode_payload, LegacyEffectRecord};
use crate::error::Result;

/// Total cell count of the fixed grid shape
pub const CELL_COUNT: usize = FxGroup::ALL.len() * Bank::ALL.len() * Slot::ALL.len();

/// Hardware recording mode, seen here only through its slot predicate.
/// The mode enum itself is owned by the recording collaborator; closures
/// satisfy the trait directly.
pub trait RecordingMode {
    fn is_slot_enabled(&self, fx_group: FxGroup, bank: Bank, slot: Slot) -> bool;
}

impl<F> RecordingMode for F
where
    F: Fn(FxGroup, Bank, Slot) -> bool,
{
    fn is_slot_enabled(&self, fx_group: FxGroup, bank: Bank, slot: Slot) -> bool {
        self(fx_group, bank, slot)
    }
}

/// Recording mode with every cell active
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSlotsEnabled;

impl RecordingMode for AllSlotsEnabled {
    fn is_slot_enabled(&self, _: FxGroup, _: Bank, _: Slot) -> bool {
        true
    }
}

/// The full effect grid of one preset
#[derive(Debug, Clone, PartialEq)]
pub struct EffectGrid {
    cells: Vec<Option<Arc<EffectConfig>>>,
}

impl EffectGrid {
    /// A grid with every cell holding the default config. All cells share
    /// one allocation until individually written.
    pub fn new() -> Self {
        let default_cell = Arc::new(EffectConfig::default());
        Self {
            cells: vec![Some(default_cell); CELL_COUNT],
        }
    }

    /// Every cell address in flattening order: groups, then banks, then
    /// slots. This order becomes persisted array order.
    pub fn addresses() -> impl Iterator<Item = (FxGroup, Bank, Slot)> {
        FxGroup::ALL.into_iter().flat_map(|fx_group| {
            Bank::ALL.into_iter().flat_map(move |bank| {
                Slot::ALL.into_iter().map(move |slot| (fx_group, bank, slot))
            })
        })
    }

    fn index(fx_group: FxGroup, bank: Bank, slot: Slot) -> usize {
        (fx_group.index() * Bank::ALL.len() + bank.index()) * Slot::ALL.len() + slot.index()
    }

    /// The cell's config, `None` only if the cell was cleared
    pub fn get(&self, fx_group: FxGroup, bank: Bank, slot: Slot) -> Option<&EffectConfig> {
        self.cells[Self::index(fx_group, bank, slot)].as_deref()
    }

    /// A new grid with exactly this cell replaced
    pub fn set(&self, fx_group: FxGroup, bank: Bank, slot: Slot, config: EffectConfig) -> Self {
        let mut next = self.clone();
        next.cells[Self::index(fx_group, bank, slot)] = Some(Arc::new(config));
        next
    }

    /// A new grid with exactly this cell emptied
    pub fn clear(&self, fx_group: FxGroup, bank: Bank, slot: Slot) -> Self {
        let mut next = self.clone();
        next.cells[Self::index(fx_group, bank, slot)] = None;
        next
    }

    fn enabled_cells(
        &self,
        mode: &impl RecordingMode,
    ) -> Vec<((FxGroup, Bank, Slot), &EffectConfig)> {
        let mut cells = Vec::new();
        for (fx_group, bank, slot) in Self::addresses() {
            if !mode.is_slot_enabled(fx_group, bank, slot) {
                continue;
            }
            if let Some(config) = self.get(fx_group, bank, slot) {
                cells.push(((fx_group, bank, slot), config));
            }
        }
        cells
    }

    /// Cells active under the given recording mode, in flattening order
    pub fn enabled_effects(&self, mode: &impl RecordingMode) -> Vec<&EffectConfig> {
        self.enabled_cells(mode)
            .into_iter()
            .map(|(_, config)| config)
            .collect()
    }

    /// Flatten the enabled cells into wire records, each stamped with the
    /// coordinates of the cell it came from
    pub fn to_legacy_array(&self, mode: &impl RecordingMode) -> Vec<LegacyEffectRecord> {
        self.enabled_cells(mode)
            .into_iter()
            .map(|((fx_group, bank, slot), config)| {
                LegacyEffectRecord::from_cell(fx_group, bank, slot, config)
            })
            .collect()
    }

    /// Rebuild a grid from wire records. Unnamed cells stay default; when
    /// two records name the same cell the later one wins.
    pub fn from_legacy_array(records: impl IntoIterator<Item = LegacyEffectRecord>) -> Self {
        let mut grid = Self::new();
        let mut written = [false; CELL_COUNT];
        for record in records {
            let (fx_group, bank, slot) = record.coordinates();
            let index = Self::index(fx_group, bank, slot);
            if written[index] {
                debug!(
                    "duplicate record at {}/{}/{}, keeping the later one",
                    fx_group, bank, slot
                );
            }
            written[index] = true;
            grid.cells[index] = Some(Arc::new(record.into_config()));
        }
        grid
    }

    /// Decode a persisted payload straight into a grid
    pub fn from_payload(payload: &str) -> Result<Self> {
        Ok(Self::from_legacy_array(decode_payload(payload)?))
    }

    /// Encode the enabled cells straight into a persisted payload
    pub fn to_payload(&self, mode: &impl RecordingMode) -> Result<String> {
        encode_payload(&self.to_legacy_array(mode))
    }
}

impl Default for EffectGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::config::SwMode;
    use pretty_assertions::assert_eq;

    fn chorus() -> EffectConfig {
        EffectConfig::new("CHORUS").with_parameter("RATE", 80.0)
    }

    #[test]
    fn test_new_populates_every_cell() {
        let grid = EffectGrid::new();
        assert_eq!(EffectGrid::addresses().count(), 32);
        for (fx_group, bank, slot) in EffectGrid::addresses() {
            let config = grid.get(fx_group, bank, slot);
            assert_eq!(
                config.map(|c| c.effect_type.as_str()),
                Some("LPF"),
                "cell {}/{}/{} should hold the default",
                fx_group,
                bank,
                slot
            );
        }
    }

    #[test]
    fn test_new_shares_one_default_allocation() {
        let grid = EffectGrid::new();
        let first = grid.get(FxGroup::Input, Bank::A, Slot::A).unwrap();
        let last = grid.get(FxGroup::Track, Bank::D, Slot::D).unwrap();
        assert!(std::ptr::eq(first, last));
    }

    #[test]
    fn test_set_is_copy_on_write() {
        let base = EffectGrid::new();
        let edited = base.set(FxGroup::Track, Bank::B, Slot::C, chorus());

        // old reference untouched
        assert_eq!(
            base.get(FxGroup::Track, Bank::B, Slot::C).unwrap().effect_type,
            "LPF"
        );
        assert_eq!(
            edited.get(FxGroup::Track, Bank::B, Slot::C).unwrap().effect_type,
            "CHORUS"
        );

        // siblings shared, edited cell not
        let sibling_before = base.get(FxGroup::Input, Bank::A, Slot::A).unwrap();
        let sibling_after = edited.get(FxGroup::Input, Bank::A, Slot::A).unwrap();
        assert!(std::ptr::eq(sibling_before, sibling_after));
        assert!(!std::ptr::eq(
            base.get(FxGroup::Track, Bank::B, Slot::C).unwrap(),
            edited.get(FxGroup::Track, Bank::B, Slot::C).unwrap()
        ));
    }

    #[test]
    fn test_set_is_idempotent() {
        let base = EffectGrid::new();
        let once = base.set(FxGroup::Input, Bank::C, Slot::D, chorus());
        let twice = once.set(FxGroup::Input, Bank::C, Slot::D, chorus());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_empties_exactly_one_cell() {
        let grid = EffectGrid::new().clear(FxGroup::Input, Bank::B, Slot::B);
        assert!(grid.get(FxGroup::Input, Bank::B, Slot::B).is_none());
        assert!(grid.get(FxGroup::Input, Bank::B, Slot::A).is_some());
        assert_eq!(grid.enabled_effects(&AllSlotsEnabled).len(), 31);
    }

    #[test]
    fn test_enabled_effects_follow_flattening_order() {
        let grid = EffectGrid::new()
            .set(FxGroup::Track, Bank::B, Slot::C, EffectConfig::new("WARP"))
            .set(FxGroup::Input, Bank::A, Slot::B, EffectConfig::new("TWIST"));

        let mode = |fx_group: FxGroup, bank: Bank, slot: Slot| {
            (fx_group, bank, slot) == (FxGroup::Track, Bank::B, Slot::C)
                || (fx_group, bank, slot) == (FxGroup::Input, Bank::A, Slot::B)
        };

        let enabled = grid.enabled_effects(&mode);
        let types: Vec<&str> = enabled.iter().map(|c| c.effect_type.as_str()).collect();
        assert_eq!(types, vec!["TWIST", "WARP"], "input group flattens first");
    }

    #[test]
    fn test_to_legacy_array_stamps_coordinates() {
        let grid = EffectGrid::new().set(FxGroup::Track, Bank::D, Slot::A, chorus());
        let records = grid.to_legacy_array(&AllSlotsEnabled);
        assert_eq!(records.len(), 32);

        let chorus_record = records
            .iter()
            .find(|r| r.effect_type == "CHORUS")
            .expect("edited cell should be present");
        assert_eq!(chorus_record.fx_group, Some(FxGroup::Track));
        assert_eq!(chorus_record.bank, Some(Bank::D));
        assert_eq!(chorus_record.slot, Some(Slot::A));
        assert_eq!(chorus_record.position, None);
    }

    #[test]
    fn test_from_legacy_array_last_write_wins() {
        let payload = r#"[
            {"fxGroup":"input","bank":"A","slot":"A","effectType":"WARP","sw":true,"swMode":"TOGGLE","insert":"ALL","parameters":"{}"},
            {"fxGroup":"input","bank":"A","slot":"A","effectType":"FREEZE","sw":false,"swMode":"MOMENT","insert":"ALL","parameters":"{}"}
        ]"#;
        let grid = EffectGrid::from_payload(payload).unwrap();
        let cell = grid.get(FxGroup::Input, Bank::A, Slot::A).unwrap();
        assert_eq!(cell.effect_type, "FREEZE");
        assert!(!cell.sw);
        assert_eq!(cell.sw_mode, SwMode::Moment);
    }

    #[test]
    fn test_round_trip_is_lossy_only_for_disabled_cells() {
        let grid = EffectGrid::new()
            .set(FxGroup::Input, Bank::A, Slot::A, chorus())
            .set(FxGroup::Track, Bank::B, Slot::C, EffectConfig::new("WARP"))
            .set(FxGroup::Track, Bank::D, Slot::D, EffectConfig::new("FREEZE"));

        // recording mode that never sees the FREEZE cell
        let mode = |fx_group: FxGroup, bank: Bank, _: Slot| {
            !(fx_group == FxGroup::Track && bank == Bank::D)
        };

        let restored = EffectGrid::from_legacy_array(grid.to_legacy_array(&mode));
        assert_eq!(
            restored.get(FxGroup::Input, Bank::A, Slot::A),
            grid.get(FxGroup::Input, Bank::A, Slot::A)
        );
        assert_eq!(
            restored.get(FxGroup::Track, Bank::B, Slot::C),
            grid.get(FxGroup::Track, Bank::B, Slot::C)
        );
        assert_eq!(
            restored
                .get(FxGroup::Track, Bank::D, Slot::D)
                .unwrap()
                .effect_type,
            "LPF",
            "disabled cell should come back as default"
        );
    }

    #[test]
    fn test_payload_round_trip() {
        let grid = EffectGrid::new().set(
            FxGroup::Input,
            Bank::B,
            Slot::A,
            EffectConfig::new("REVERB").with_parameter("TIME", 65.0),
        );
        let payload = grid.to_payload(&AllSlotsEnabled).unwrap();
        let restored = EffectGrid::from_payload(&payload).unwrap();
        assert_eq!(restored, grid);
    }
}

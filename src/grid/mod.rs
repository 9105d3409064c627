//! Effect Grid Engine
//!
//! The in-memory grid of a preset's effects, the flat wire records it is
//! persisted as, and the codec between the two.

mod address;
mod config;
mod engine;
mod legacy;

pub use address::{Bank, FxGroup, Slot};
pub use config::{EffectConfig, Insert, SwMode};
pub use engine::{AllSlotsEnabled, EffectGrid, RecordingMode, CELL_COUNT};
pub use legacy::{decode_payload, encode_payload, LegacyEffectRecord};

//! Effect Schema Library
//!
//! Everything an editor needs to render controls for an effect: the
//! catalog of effect types, the parameter registry, sequencer block
//! generation, and placement-based filtering of the selectable types.

mod catalog;
mod params;
mod placement;
mod registry;
mod sequencer;
mod vocab;

pub use catalog::{Catalog, EffectDefinition, DEFAULT_EFFECT_TYPE};
pub use params::{ParamKind, ParamValue, ParameterConfig};
pub use placement::FxPlacement;
pub use registry::ParameterRegistry;
pub use sequencer::{SequencerSchema, SequencerTarget, SEQ_STEPS};
pub use vocab::{
    is_note_glyph, octave_notes, pan_positions, BAR_LENGTH_TOKENS, CHROMATIC_NOTES,
    MUSICAL_NOTE_TOKENS,
};

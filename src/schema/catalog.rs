//! Effect catalog
//!
//! The fixed table of effect types in display order, each with its declared
//! parameter names, plus the composition rules that turn a type name into
//! the full parameter list an editor renders: declared names resolved
//! through the registry, a generated sequencer block for sequencer-capable
//! types, and the step-slicer override that replaces the declared tail
//! wholesale.

use std::collections::BTreeMap;

use super::params::{ParamValue, ParameterConfig};
use super::registry::ParameterRegistry;
use super::sequencer::SequencerSchema;

/// Effect type that swaps its declared parameters for the step block
const STEP_SLICER: &str = "STEP SLICER";

/// Steps in the step-slicer length/level tables
const SLICER_STEPS: usize = 16;

/// Default effect type for freshly constructed grid cells
pub const DEFAULT_EFFECT_TYPE: &str = "LPF";

/// Effect types legal only at the track group's first bank
const TRACK_A_ONLY: [&str; 4] = ["BEAT SCATTER", "BEAT REPEAT", "BEAT SHIFT", "VINYL FLICK"];

/// Catalog order is display order. The step slicer's numbered legacy names
/// (SLICE/LEN/LVL 1..16) are appended at construction; they are never
/// surfaced by queries but remain part of the declared table.
const EFFECT_TABLE: [(&str, &[&str]); 50] = [
    ("LPF", &["RATE", "DEPTH", "RESONANCE", "CUTOFF", "E_LEVEL"]),
    ("BPF", &["RATE", "DEPTH", "RESONANCE", "CUTOFF", "E_LEVEL"]),
    ("HPF", &["RATE", "DEPTH", "RESONANCE", "CUTOFF", "E_LEVEL"]),
    ("PHASER", &["RATE", "DEPTH", "RESONANCE", "STAGE", "STEP_RATE", "E_LEVEL", "D_LEVEL"]),
    ("FLANGER", &["RATE", "DEPTH", "RESONANCE", "MANUAL", "STEP_RATE", "E_LEVEL", "D_LEVEL"]),
    ("LO-FI", &["BIT_DEPTH", "SAMPLE_RATE", "BALANCE"]),
    ("RING MOD", &["FREQUENCY", "BALANCE", "E_LEVEL"]),
    ("SUSTAINER", &["ATTACK", "RELEASE", "SUSTAIN", "TONE", "LEVEL"]),
    ("AUTO RIFF", &["PHRASE", "KEY", "HOLD", "ATTACK", "D_LEVEL"]),
    ("SLOW GEAR", &["SENS", "RISE_TIME", "LEVEL"]),
    ("TRANSPOSE", &["TRANS"]),
    ("PITCH BEND", &["PITCH", "BEND", "E_LEVEL"]),
    ("ROBOT", &["NOTE", "GENDER"]),
    ("ELECTRIC", &["SHIFT", "FORMANT", "SPEED", "STABILITY", "SCALE"]),
    ("HRM MANUAL", &["VOICE", "FORMANT", "PAN", "D_LEVEL"]),
    ("HRM AUTO", &["VOICE", "FORMANT", "KEY", "PAN", "D_LEVEL"]),
    ("VOCODER", &["CARRIER", "MOD_SENS", "ATTACK", "TONE", "BALANCE"]),
    ("OSC VOC", &["OSC", "TONE", "ATTACK", "MOD_SENS", "RELEASE", "BALANCE"]),
    ("OSC BOT", &["OSC", "OSC_NOTE", "TONE", "ATTACK", "MOD_SENS", "BALANCE"]),
    ("PREAMP", &["AMP_TYPE", "GAIN", "BASS", "MIDDLE", "TREBLE", "LEVEL"]),
    ("DIST", &["DIST_TYPE", "DRIVE", "TONE", "LEVEL"]),
    ("DYNAMICS", &["DYNA_TYPE", "DYNAMICS"]),
    ("EQ", &["LOW", "LO_MID", "HI_MID", "HIGH", "EQ_LEVEL"]),
    ("ISOLATOR", &["BAND", "RATE", "DEPTH", "BAND_LEVEL"]),
    ("OCTAVE", &["MODE", "OCT_LEVEL"]),
    ("AUTO PAN", &["RATE", "DEPTH", "WAVE"]),
    ("MANUAL PAN", &["POSITION"]),
    ("STEREO ENHANCE", &["LOW_CUT", "ENHANCE"]),
    ("TREMOLO", &["RATE", "DEPTH", "WAVE", "LEVEL"]),
    ("VIBRATO", &["RATE", "DEPTH", "D_LEVEL"]),
    ("PATTERN SLICER", &["RATE", "DUTY", "ATTACK", "PATTERN", "E_LEVEL"]),
    (STEP_SLICER, &["PATTERN", "SPEED", "DUTY", "SMOOTH", "COMP", "LEVEL", "BAND", "WAVE", "PHASE", "BALANCE"]),
    ("DELAY", &["DELAY_TIME", "FEEDBACK", "E_LEVEL", "D_LEVEL"]),
    ("PANNING DELAY", &["DELAY_TIME", "FEEDBACK", "E_LEVEL", "D_LEVEL"]),
    ("REVERSE DELAY", &["DELAY_TIME", "FEEDBACK", "E_LEVEL", "D_LEVEL"]),
    ("MOD DELAY", &["DELAY_TIME", "FEEDBACK", "MOD_DEPTH", "E_LEVEL", "D_LEVEL"]),
    ("TAPE ECHO", &["REPEAT_RATE", "INTENSITY", "BASS", "TREBLE", "ECHO_LEVEL"]),
    ("GRANULAR DELAY", &["TIME", "FEEDBACK", "E_LEVEL"]),
    ("WARP", &["LEVEL"]),
    ("TWIST", &["RELEASE", "RISE", "LEVEL"]),
    ("ROLL", &["LENGTH", "FEEDBACK", "BALANCE"]),
    ("FREEZE", &["ATTACK", "RELEASE", "DECAY", "SUSTAIN", "BALANCE"]),
    ("CHORUS", &["RATE", "DEPTH", "E_LEVEL"]),
    ("REVERB", &["TIME", "PRE_DELAY", "E_LEVEL", "D_LEVEL"]),
    ("GATE REVERB", &["TIME", "PRE_DELAY", "THRESHOLD", "E_LEVEL", "D_LEVEL"]),
    ("REVERSE REVERB", &["TIME", "PRE_DELAY", "E_LEVEL", "D_LEVEL"]),
    ("BEAT SCATTER", &["SCATTER_TYPE", "SCATTER_LENGTH"]),
    ("BEAT REPEAT", &["REPEAT_TYPE", "REPEAT_LENGTH"]),
    ("BEAT SHIFT", &["SHIFT_TYPE", "SHIFT_LENGTH"]),
    ("VINYL FLICK", &["FLICK"]),
];

/// One catalog row: an effect type and its declared parameter names
#[derive(Debug, Clone)]
pub struct EffectDefinition {
    pub name: String,
    pub parameters: Vec<String>,
}

/// Immutable effect catalog: the ordered effect table plus the registry and
/// sequencer schema its queries compose with. Built once and shared by
/// reference; independent instances can describe different hardware
/// revisions.
#[derive(Debug, Clone)]
pub struct Catalog {
    effects: Vec<EffectDefinition>,
    registry: ParameterRegistry,
    sequencer: SequencerSchema,
    track_a_only: Vec<String>,
}

impl Catalog {
    /// Build a catalog from explicit parts
    pub fn new(
        effects: Vec<EffectDefinition>,
        registry: ParameterRegistry,
        sequencer: SequencerSchema,
        track_a_only: Vec<String>,
    ) -> Self {
        Self {
            effects,
            registry,
            sequencer,
            track_a_only,
        }
    }

    /// The catalog of the reference hardware
    pub fn builtin() -> Self {
        let effects = EFFECT_TABLE
            .iter()
            .map(|(name, declared)| {
                let mut parameters: Vec<String> =
                    declared.iter().map(|p| p.to_string()).collect();
                if *name == STEP_SLICER {
                    for family in ["SLICE", "LEN", "LVL"] {
                        for step in 1..=SLICER_STEPS {
                            parameters.push(format!("{}{}", family, step));
                        }
                    }
                }
                EffectDefinition {
                    name: name.to_string(),
                    parameters,
                }
            })
            .collect();

        Self::new(
            effects,
            ParameterRegistry::builtin(),
            SequencerSchema::builtin(),
            TRACK_A_ONLY.iter().map(|e| e.to_string()).collect(),
        )
    }

    /// Effect type names in catalog (display) order
    pub fn effect_types(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|e| e.name.as_str())
    }

    /// Number of effect types in the catalog
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Declared parameter names for an effect type, empty if unknown
    pub fn parameter_names(&self, effect_type: &str) -> &[String] {
        self.definition(effect_type)
            .map(|d| d.parameters.as_slice())
            .unwrap_or(&[])
    }

    /// True if the effect type is restricted to the track group's first bank
    pub fn is_track_a_only(&self, effect_type: &str) -> bool {
        self.track_a_only.iter().any(|e| e == effect_type)
    }

    /// The restricted first-bank effect set, in its fixed order
    pub fn track_a_only(&self) -> &[String] {
        &self.track_a_only
    }

    /// The registry this catalog resolves parameter names through
    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// The sequencer capability table this catalog composes with
    pub fn sequencer(&self) -> &SequencerSchema {
        &self.sequencer
    }

    /// Full parameter list for an effect type, in render order.
    ///
    /// Declared names resolve through the registry. Sequencer-capable types
    /// append the generated sequencer block. The step slicer discards its
    /// declared names and returns its fixed step block instead. The
    /// sequencer check runs first; the two substitutions never combine.
    pub fn effect_parameters(&self, effect_type: &str) -> Vec<ParameterConfig> {
        if self.sequencer.is_sequencer_effect(effect_type) {
            let mut params = self.resolve_declared(effect_type);
            params.extend(self.sequencer.parameters_for(effect_type));
            return params;
        }

        if effect_type == STEP_SLICER {
            return self.step_slicer_parameters();
        }

        self.resolve_declared(effect_type)
    }

    /// Default value per editable parameter (headers carry no value)
    pub fn default_parameters(&self, effect_type: &str) -> BTreeMap<String, ParamValue> {
        self.effect_parameters(effect_type)
            .into_iter()
            .filter(|p| !p.is_header())
            .map(|p| {
                let value = p.default_value();
                (p.name, value)
            })
            .collect()
    }

    fn definition(&self, effect_type: &str) -> Option<&EffectDefinition> {
        self.effects.iter().find(|e| e.name == effect_type)
    }

    fn resolve_declared(&self, effect_type: &str) -> Vec<ParameterConfig> {
        self.parameter_names(effect_type)
            .iter()
            .map(|name| self.registry.resolve(name))
            .collect()
    }

    /// The step slicer's query-time block: base controls, then the sixteen
    /// step lengths and sixteen step levels under their headers.
    fn step_slicer_parameters(&self) -> Vec<ParameterConfig> {
        let mut params = vec![
            self.registry.resolve("RATE"),
            self.registry.resolve("DEPTH"),
            self.registry.resolve("THRESHOLD"),
            self.registry.resolve("GAIN"),
            self.registry.resolve("STEP_MAX"),
            ParameterConfig::text("STEP LENGTH", "STEP LENGTH"),
        ];
        for step in 1..=SLICER_STEPS {
            params.push(ParameterConfig::range(
                format!("STEP_LEN{}", step),
                0.0,
                100.0,
                1.0,
                50.0,
            ));
        }
        params.push(ParameterConfig::text("STEP LEVEL", "STEP LEVEL"));
        for step in 1..=SLICER_STEPS {
            params.push(ParameterConfig::range(
                format!("STEP_LVL{}", step),
                0.0,
                100.0,
                1.0,
                100.0,
            ));
        }
        params
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

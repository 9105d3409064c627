//! Step-sequencer parameter generation
//!
//! A fixed subset of effect types carries a 16-step sequencer. Its controls
//! are not declared in the effect catalog; they are generated here and
//! appended after the declared list. The step-value controls change type
//! with the effect: transpose steps are semitone offsets, manual-pan steps
//! are pan positions, oscillator steps are notes, and everything else is a
//! plain 0..=100 step level.

use super::params::ParameterConfig;
use super::vocab::{octave_notes, pan_positions, MUSICAL_NOTE_TOKENS};

/// Number of step-value parameters every sequencer block carries
pub const SEQ_STEPS: usize = 16;

/// Effect types that carry the step sequencer
const SEQUENCER_EFFECTS: [&str; 14] = [
    "LPF",
    "BPF",
    "HPF",
    "RING MOD",
    "ISOLATOR",
    "OCTAVE",
    "AUTO PAN",
    "MANUAL PAN",
    "TREMOLO",
    "VIBRATO",
    "TRANSPOSE",
    "PITCH BEND",
    "OSC BOT",
    "ELECTRIC",
];

/// Which declared parameter the sequencer drives, per effect type.
/// Effects absent from this table get no SEQ_TARGET control.
const TARGET_OPTIONS: [(&str, &[&str], &str); 10] = [
    ("LPF", &["CUTOFF", "RESONANCE"], "CUTOFF"),
    ("BPF", &["CUTOFF", "RESONANCE"], "CUTOFF"),
    ("HPF", &["CUTOFF", "RESONANCE"], "CUTOFF"),
    ("RING MOD", &["FREQUENCY", "BALANCE"], "FREQUENCY"),
    ("ISOLATOR", &["BAND_LEVEL", "DEPTH"], "BAND_LEVEL"),
    ("OCTAVE", &["OCT_LEVEL"], "OCT_LEVEL"),
    ("AUTO PAN", &["DEPTH"], "DEPTH"),
    ("TREMOLO", &["DEPTH", "LEVEL"], "DEPTH"),
    ("VIBRATO", &["DEPTH", "D_LEVEL"], "DEPTH"),
    ("PITCH BEND", &["PITCH", "BEND"], "PITCH"),
];

/// Target-parameter choices for one sequencer-capable effect
#[derive(Debug, Clone)]
pub struct SequencerTarget {
    pub effect_type: String,
    pub options: Vec<String>,
    pub default: String,
}

/// Immutable sequencer capability table
#[derive(Debug, Clone)]
pub struct SequencerSchema {
    effects: Vec<String>,
    targets: Vec<SequencerTarget>,
}

impl SequencerSchema {
    /// Build a schema from an explicit capability set and target table
    pub fn new(
        effects: impl IntoIterator<Item = impl Into<String>>,
        targets: Vec<SequencerTarget>,
    ) -> Self {
        Self {
            effects: effects.into_iter().map(Into::into).collect(),
            targets,
        }
    }

    /// The sequencer table of the reference hardware
    pub fn builtin() -> Self {
        let targets = TARGET_OPTIONS
            .iter()
            .map(|(effect_type, options, default)| SequencerTarget {
                effect_type: effect_type.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                default: default.to_string(),
            })
            .collect();
        Self::new(SEQUENCER_EFFECTS, targets)
    }

    /// True if `effect_type` carries the step sequencer
    pub fn is_sequencer_effect(&self, effect_type: &str) -> bool {
        self.effects.iter().any(|e| e == effect_type)
    }

    /// Generate the sequencer parameter block for `effect_type`.
    ///
    /// Empty unless the effect is sequencer-capable. Otherwise, in order:
    /// SEQ_SW, SEQ_SYNC, SEQ_RETRIG, SEQ_TARGET (only for effects with a
    /// target entry), SEQ_RATE, SEQ_MAX, then SEQ_VAL1..SEQ_VAL16.
    pub fn parameters_for(&self, effect_type: &str) -> Vec<ParameterConfig> {
        if !self.is_sequencer_effect(effect_type) {
            return Vec::new();
        }

        let mut params = vec![
            ParameterConfig::select("SEQ_SW", ["OFF", "ON"], "OFF"),
            ParameterConfig::select("SEQ_SYNC", ["OFF", "ON"], "OFF"),
            ParameterConfig::select("SEQ_RETRIG", ["OFF", "ON"], "OFF"),
        ];

        if let Some(target) = self.target_entry(effect_type) {
            params.push(ParameterConfig::select(
                "SEQ_TARGET",
                target.options.clone(),
                target.default.clone(),
            ));
        }

        params.push(ParameterConfig::combined(
            "SEQ_RATE",
            MUSICAL_NOTE_TOKENS[0],
            true,
        ));
        params.push(ParameterConfig::range("SEQ_MAX", 1.0, 16.0, 1.0, 16.0));

        for step in 1..=SEQ_STEPS {
            params.push(step_value(effect_type, step));
        }

        params
    }

    fn target_entry(&self, effect_type: &str) -> Option<&SequencerTarget> {
        self.targets.iter().find(|t| t.effect_type == effect_type)
    }
}

/// One step-value control. The control's type follows the effect, not the
/// parameter name; this fan-out is the contract the editor relies on.
fn step_value(effect_type: &str, step: usize) -> ParameterConfig {
    let name = format!("SEQ_VAL{}", step);
    match effect_type {
        "TRANSPOSE" => ParameterConfig::range(name, -12.0, 12.0, 1.0, 0.0),
        "MANUAL PAN" => ParameterConfig::select(name, pan_positions(), "L50"),
        "OSC BOT" => ParameterConfig::select(name, octave_notes(), "C1"),
        _ => ParameterConfig::range(name, 0.0, 100.0, 1.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::super::params::{ParamKind, ParamValue};
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_capability_set_size() {
        let schema = SequencerSchema::builtin();
        assert_eq!(SEQUENCER_EFFECTS.len(), 14);
        for effect in SEQUENCER_EFFECTS {
            assert!(schema.is_sequencer_effect(effect), "{} should sequence", effect);
        }
        assert!(!schema.is_sequencer_effect("REVERB"));
    }

    #[test]
    fn test_block_order_with_target() {
        let schema = SequencerSchema::builtin();
        let params = schema.parameters_for("LPF");
        assert_eq!(params.len(), 22);

        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names[0], "SEQ_SW");
        assert_eq!(names[1], "SEQ_SYNC");
        assert_eq!(names[2], "SEQ_RETRIG");
        assert_eq!(names[3], "SEQ_TARGET");
        assert_eq!(names[4], "SEQ_RATE");
        assert_eq!(names[5], "SEQ_MAX");
        assert_eq!(names[6], "SEQ_VAL1");
        assert_eq!(names[21], "SEQ_VAL16");
    }

    #[test]
    fn test_block_without_target() {
        let schema = SequencerSchema::builtin();
        let params = schema.parameters_for("ELECTRIC");
        assert_eq!(params.len(), 21);
        assert!(params.iter().all(|p| p.name != "SEQ_TARGET"));
    }

    #[test]
    fn test_non_sequencer_effect_is_empty() {
        let schema = SequencerSchema::builtin();
        assert!(schema.parameters_for("REVERB").is_empty());
        assert!(schema.parameters_for("STEP SLICER").is_empty());
        assert!(schema.parameters_for("UNKNOWN").is_empty());
    }

    #[test]
    fn test_rate_defaults_to_first_note_token() {
        let schema = SequencerSchema::builtin();
        let params = schema.parameters_for("TREMOLO");
        let rate = params.iter().find(|p| p.name == "SEQ_RATE").unwrap();
        assert_eq!(rate.default_value(), ParamValue::token("4MEAS"));
    }

    #[test_case("TRANSPOSE"; "transpose steps")]
    #[test_case("MANUAL PAN"; "pan steps")]
    #[test_case("OSC BOT"; "note steps")]
    #[test_case("LPF"; "level steps")]
    fn test_step_values_follow_effect_type(effect: &str) {
        let schema = SequencerSchema::builtin();
        let params = schema.parameters_for(effect);
        let val1 = params.iter().find(|p| p.name == "SEQ_VAL1").unwrap();

        match (effect, &val1.kind) {
            ("TRANSPOSE", ParamKind::Range { min, max, default, .. }) => {
                assert_eq!((*min, *max, *default), (-12.0, 12.0, 0.0));
            }
            ("MANUAL PAN", ParamKind::Select { options, default }) => {
                assert_eq!(options.len(), 101);
                assert_eq!(default, "L50");
            }
            ("OSC BOT", ParamKind::Select { options, default }) => {
                assert_eq!(options.len(), 49);
                assert_eq!(default, "C1");
            }
            ("LPF", ParamKind::Range { min, max, default, .. }) => {
                assert_eq!((*min, *max, *default), (0.0, 100.0, 0.0));
            }
            (effect, kind) => panic!("unexpected step kind for {}: {:?}", effect, kind),
        }
    }

    #[test]
    fn test_all_sixteen_steps_share_one_type() {
        let schema = SequencerSchema::builtin();
        let params = schema.parameters_for("MANUAL PAN");
        let step_kinds: Vec<&ParamKind> = params
            .iter()
            .filter(|p| p.name.starts_with("SEQ_VAL"))
            .map(|p| &p.kind)
            .collect();
        assert_eq!(step_kinds.len(), SEQ_STEPS);
        assert!(step_kinds.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

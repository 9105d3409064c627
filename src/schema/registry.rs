//! Parameter type registry
//!
//! Maps parameter names to their editing semantics. Lookup is total: names
//! missing from the table resolve to the generic 0..=100 knob instead of
//! failing, so an out-of-date catalog or a hand-edited preset can always be
//! rendered.

use std::collections::HashMap;

use super::params::{ParamKind, ParameterConfig};
use super::vocab::{octave_notes, pan_positions, CHROMATIC_NOTES};

/// Immutable name-to-config table built once and shared by reference
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    configs: HashMap<String, ParamKind>,
}

impl ParameterRegistry {
    /// Build a registry from explicit configs (last entry wins per name)
    pub fn from_configs(configs: impl IntoIterator<Item = ParameterConfig>) -> Self {
        Self {
            configs: configs
                .into_iter()
                .map(|config| (config.name, config.kind))
                .collect(),
        }
    }

    /// The registry for the reference hardware's parameter set
    pub fn builtin() -> Self {
        Self::from_configs(builtin_configs())
    }

    /// Resolve a parameter name to its config, falling back to the generic
    /// knob for unknown names. Never fails.
    pub fn resolve(&self, name: &str) -> ParameterConfig {
        match self.configs.get(name) {
            Some(kind) => ParameterConfig {
                name: name.to_string(),
                kind: kind.clone(),
            },
            None => ParameterConfig::generic(name),
        }
    }

    /// True if `name` has an explicit entry (the fallback never shows here)
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Number of explicit entries
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// True if the registry has no explicit entries
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Shorthand for the ubiquitous 0..=100 knob with a centered default
fn knob(name: &str) -> ParameterConfig {
    ParameterConfig::range(name, 0.0, 100.0, 1.0, 50.0)
}

/// Full-scale level knob (direct/band levels rest at maximum)
fn level_knob(name: &str) -> ParameterConfig {
    ParameterConfig::range(name, 0.0, 100.0, 1.0, 100.0)
}

/// EQ-style gain in dB
fn gain_db(name: &str) -> ParameterConfig {
    ParameterConfig::range(name, -20.0, 20.0, 1.0, 0.0)
}

fn numbered_options(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{}{:02}", prefix, i)).collect()
}

/// Every explicitly described parameter of the reference hardware,
/// grouped the way the parameter guide groups them.
fn builtin_configs() -> Vec<ParameterConfig> {
    vec![
        // Rate-style hybrids shared across the modulation effects
        ParameterConfig::combined("RATE", "1/4", true),
        ParameterConfig::combined("STEP_RATE", "1/16", true),
        ParameterConfig::combined("DELAY_TIME", "1/8", false),
        // Filters and modulation
        knob("DEPTH"),
        knob("RESONANCE"),
        knob("CUTOFF"),
        knob("E_LEVEL"),
        level_knob("D_LEVEL"),
        ParameterConfig::select("STAGE", ["4STAGE", "8STAGE", "12STAGE", "BI-PHASE"], "4STAGE"),
        knob("MANUAL"),
        knob("WAVE"),
        ParameterConfig::range("BIT_DEPTH", 1.0, 16.0, 1.0, 16.0),
        ParameterConfig::select(
            "SAMPLE_RATE",
            ["FULL", "1/2", "1/4", "1/8", "1/16", "1/32"],
            "FULL",
        ),
        knob("BALANCE"),
        knob("FREQUENCY"),
        ParameterConfig::select("BAND", ["LOW", "MID", "HIGH"], "LOW"),
        level_knob("BAND_LEVEL"),
        ParameterConfig::select("MODE", ["-1OCT", "-2OCT", "-1OCT&-2OCT"], "-1OCT"),
        knob("OCT_LEVEL"),
        ParameterConfig::select("POSITION", pan_positions(), "CENTER"),
        ParameterConfig::select(
            "LOW_CUT",
            ["FLAT", "55HZ", "110HZ", "220HZ", "440HZ"],
            "FLAT",
        ),
        knob("ENHANCE"),
        // Dynamics and tone
        knob("ATTACK"),
        knob("RELEASE"),
        knob("SUSTAIN"),
        knob("TONE"),
        knob("LEVEL"),
        knob("SENS"),
        knob("RISE_TIME"),
        ParameterConfig::select("AMP_TYPE", ["CLEAN", "CRUNCH", "DRIVE", "STACK", "METAL"], "CLEAN"),
        knob("GAIN"),
        knob("BASS"),
        knob("MIDDLE"),
        knob("TREBLE"),
        ParameterConfig::select("DIST_TYPE", ["OD", "DIST", "FUZZ", "METAL"], "OD"),
        knob("DRIVE"),
        ParameterConfig::select(
            "DYNA_TYPE",
            ["NATURAL COMP", "SOFT COMP", "HARD COMP", "LIMITER"],
            "NATURAL COMP",
        ),
        knob("DYNAMICS"),
        gain_db("LOW"),
        gain_db("LO_MID"),
        gain_db("HI_MID"),
        gain_db("HIGH"),
        gain_db("EQ_LEVEL"),
        // Pitch and voice
        ParameterConfig::range("TRANS", -12.0, 12.0, 1.0, 0.0),
        ParameterConfig::range("PITCH", -24.0, 24.0, 1.0, 0.0),
        ParameterConfig::range("BEND", 0.0, 100.0, 1.0, 0.0),
        ParameterConfig::select("NOTE", CHROMATIC_NOTES, "C"),
        ParameterConfig::range("GENDER", -10.0, 10.0, 1.0, 0.0),
        ParameterConfig::range("SHIFT", -12.0, 12.0, 1.0, 0.0),
        ParameterConfig::range("FORMANT", -10.0, 10.0, 1.0, 0.0),
        knob("SPEED"),
        knob("STABILITY"),
        ParameterConfig::select("SCALE", ["CHROMATIC", "MAJOR", "MINOR"], "CHROMATIC"),
        ParameterConfig::select(
            "VOICE",
            [
                "-6TH", "-5TH", "-4TH", "-3RD", "UNISON", "+3RD", "+4TH", "+5TH", "+6TH",
                "+OCTAVE",
            ],
            "+3RD",
        ),
        ParameterConfig::select("PAN", pan_positions(), "CENTER"),
        ParameterConfig::select("KEY", CHROMATIC_NOTES, "C"),
        ParameterConfig::select(
            "CARRIER",
            ["INST1", "INST2", "TRACK1", "TRACK2", "TRACK3", "TRACK4", "TRACK5"],
            "INST1",
        ),
        knob("MOD_SENS"),
        ParameterConfig::select("OSC", ["SAW", "SQUARE", "PULSE", "TRIANGLE"], "SAW"),
        ParameterConfig::select("OSC_NOTE", octave_notes(), "C2"),
        // Phrase and slicer pattern banks
        ParameterConfig::select("PHRASE", numbered_options("P", 30), "P01"),
        ParameterConfig::select("HOLD", ["OFF", "ON"], "OFF"),
        ParameterConfig::select("PATTERN", numbered_options("P", 20), "P01"),
        knob("DUTY"),
        // Delays and reverbs
        knob("FEEDBACK"),
        knob("MOD_DEPTH"),
        knob("REPEAT_RATE"),
        knob("INTENSITY"),
        knob("ECHO_LEVEL"),
        ParameterConfig::range("TIME", 1.0, 100.0, 1.0, 50.0),
        ParameterConfig::range("PRE_DELAY", 0.0, 100.0, 1.0, 0.0),
        knob("THRESHOLD"),
        knob("DECAY"),
        knob("RISE"),
        ParameterConfig::select("LENGTH", ["1/4", "1/8", "1/8T", "1/16"], "1/4"),
        // Track-loop effects
        ParameterConfig::select("SCATTER_TYPE", ["P1", "P2", "P3", "P4"], "P1"),
        ParameterConfig::select(
            "SCATTER_LENGTH",
            ["THRU", "1MEAS", "1/2", "1/4", "1/8"],
            "THRU",
        ),
        ParameterConfig::select("REPEAT_TYPE", ["FORWARD", "REWIND", "MIX"], "FORWARD"),
        ParameterConfig::select(
            "REPEAT_LENGTH",
            ["THRU", "1MEAS", "1/2", "1/4", "1/8", "1/16"],
            "THRU",
        ),
        ParameterConfig::select("SHIFT_TYPE", ["FUTURE", "PAST"], "FUTURE"),
        ParameterConfig::select(
            "SHIFT_LENGTH",
            ["THRU", "1/16", "1/8", "1/4", "1/2", "1MEAS"],
            "THRU",
        ),
        ParameterConfig::range("FLICK", 0.0, 100.0, 1.0, 50.0),
        // Step slicer base block
        ParameterConfig::range("STEP_MAX", 1.0, 16.0, 1.0, 16.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::params::ParamValue;
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_resolve_known_name() {
        let registry = ParameterRegistry::builtin();
        let rate = registry.resolve("RATE");
        assert_eq!(rate.name, "RATE");
        match rate.kind {
            ParamKind::Combined { ref options, .. } => assert_eq!(options.len(), 14),
            other => panic!("RATE should be combined, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let registry = ParameterRegistry::builtin();
        let config = registry.resolve("NO_SUCH_PARAMETER");
        assert_eq!(config, ParameterConfig::generic("NO_SUCH_PARAMETER"));
        assert!(!registry.contains("NO_SUCH_PARAMETER"));
    }

    #[test]
    fn test_pan_select_is_full_scale() {
        let registry = ParameterRegistry::builtin();
        match registry.resolve("POSITION").kind {
            ParamKind::Select { options, default } => {
                assert_eq!(options.len(), 101);
                assert_eq!(default, "CENTER");
            }
            other => panic!("POSITION should be select, got {:?}", other),
        }
    }

    #[test_case("DEPTH", "range"; "plain knob")]
    #[test_case("STAGE", "select"; "mode select")]
    #[test_case("DELAY_TIME", "combined"; "note or number")]
    #[test_case("STEP_RATE", "combined"; "step rate")]
    fn test_kind_by_name(name: &str, expected: &str) {
        let registry = ParameterRegistry::builtin();
        assert_eq!(registry.resolve(name).kind_name(), expected);
    }

    #[test]
    fn test_every_entry_has_concrete_default() {
        let registry = ParameterRegistry::builtin();
        for config in builtin_configs() {
            let resolved = registry.resolve(&config.name);
            match resolved.default_value() {
                ParamValue::Number(n) => assert!(n.is_finite(), "{} default", config.name),
                ParamValue::Token(t) => assert!(!t.is_empty(), "{} default", config.name),
            }
        }
    }

    #[test]
    fn test_custom_registry_coexists_with_builtin() {
        let custom = ParameterRegistry::from_configs([ParameterConfig::range(
            "RATE", 0.0, 10.0, 1.0, 5.0,
        )]);
        let builtin = ParameterRegistry::builtin();

        assert_eq!(custom.resolve("RATE").kind_name(), "range");
        assert_eq!(builtin.resolve("RATE").kind_name(), "combined");
        assert_eq!(custom.len(), 1);
    }
}

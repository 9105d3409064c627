//! Parameter editing semantics
//!
//! A [`ParameterConfig`] tells the editor how one knob is edited: a numeric
//! range, a closed select vocabulary, a display-only header, or the combined
//! note-or-number hybrid used by rate-style controls. Values are carried as
//! a tagged [`ParamValue`] union so a note token and a raw number can never
//! be confused, on the wire or in memory.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vocab::MUSICAL_NOTE_TOKENS;

/// A parameter's current value.
///
/// Serialized untagged: JSON numbers decode as [`ParamValue::Number`], JSON
/// strings as [`ParamValue::Token`]. Select options, musical-note tokens and
/// header text all travel as tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Raw numeric entry
    Number(f64),
    /// Entry drawn from a closed vocabulary
    Token(String),
}

impl ParamValue {
    /// Token constructor that accepts anything string-like
    pub fn token(value: impl Into<String>) -> Self {
        ParamValue::Token(value.into())
    }

    /// Numeric view of the value, if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Token(_) => None,
        }
    }

    /// Token view of the value, if it is a token
    pub fn as_token(&self) -> Option<&str> {
        match self {
            ParamValue::Number(_) => None,
            ParamValue::Token(t) => Some(t.as_str()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Token(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Token(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Token(token) => write!(f, "{}", token),
        }
    }
}

/// Editing semantics of one parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    /// Numeric knob with inclusive bounds
    Range {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    /// Ordered closed vocabulary
    Select {
        options: Vec<String>,
        default: String,
    },
    /// Non-interactive section header inside a parameter list
    Text { label: String },
    /// Hybrid control: a musical-note token or a raw number in range
    Combined {
        options: Vec<String>,
        min: f64,
        max: f64,
        step: f64,
        default: String,
        use_image_notes: bool,
    },
}

/// One named parameter and how it is edited
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterConfig {
    pub name: String,
    pub kind: ParamKind,
}

impl ParameterConfig {
    /// Numeric range parameter
    pub fn range(name: impl Into<String>, min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Range {
                min,
                max,
                step,
                default,
            },
        }
    }

    /// Select parameter over an ordered option vocabulary
    pub fn select(
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Select {
                options: options.into_iter().map(Into::into).collect(),
                default: default.into(),
            },
        }
    }

    /// Display-only header pseudo-parameter
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Text {
                label: label.into(),
            },
        }
    }

    /// Combined note-or-number parameter.
    ///
    /// The numeric side is always 0..=100 step 1 and the token side is
    /// always the full musical-note vocabulary; only the default token and
    /// the glyph-rendering hint vary per parameter.
    pub fn combined(
        name: impl Into<String>,
        default: impl Into<String>,
        use_image_notes: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Combined {
                options: MUSICAL_NOTE_TOKENS.iter().map(|t| t.to_string()).collect(),
                min: 0.0,
                max: 100.0,
                step: 1.0,
                default: default.into(),
                use_image_notes,
            },
        }
    }

    /// Fallback config for names missing from the registry
    pub fn generic(name: impl Into<String>) -> Self {
        Self::range(name, 0.0, 100.0, 1.0, 50.0)
    }

    /// The concrete default value every parameter is guaranteed to have
    pub fn default_value(&self) -> ParamValue {
        match &self.kind {
            ParamKind::Range { default, .. } => ParamValue::Number(*default),
            ParamKind::Select { default, .. } => ParamValue::Token(default.clone()),
            ParamKind::Text { label } => ParamValue::Token(label.clone()),
            ParamKind::Combined { default, .. } => ParamValue::Token(default.clone()),
        }
    }

    /// True for header pseudo-parameters that hold no editable value
    pub fn is_header(&self) -> bool {
        matches!(self.kind, ParamKind::Text { .. })
    }

    /// Short kind label for listings
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ParamKind::Range { .. } => "range",
            ParamKind::Select { .. } => "select",
            ParamKind::Text { .. } => "text",
            ParamKind::Combined { .. } => "combined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_builder_fixes_numeric_side() {
        let param = ParameterConfig::combined("RATE", "1/4", true);
        match &param.kind {
            ParamKind::Combined {
                options,
                min,
                max,
                step,
                default,
                use_image_notes,
            } => {
                assert_eq!(options.len(), 14);
                assert_eq!(options[0], "4MEAS");
                assert_eq!(*min, 0.0);
                assert_eq!(*max, 100.0);
                assert_eq!(*step, 1.0);
                assert_eq!(default, "1/4");
                assert!(use_image_notes);
            }
            other => panic!("expected combined kind, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_fallback_shape() {
        let param = ParameterConfig::generic("ANYTHING");
        assert_eq!(
            param.kind,
            ParamKind::Range {
                min: 0.0,
                max: 100.0,
                step: 1.0,
                default: 50.0
            }
        );
    }

    #[test]
    fn test_default_values_are_concrete() {
        assert_eq!(
            ParameterConfig::range("DEPTH", 0.0, 100.0, 1.0, 50.0).default_value(),
            ParamValue::Number(50.0)
        );
        assert_eq!(
            ParameterConfig::select("SEQ_SW", ["OFF", "ON"], "OFF").default_value(),
            ParamValue::token("OFF")
        );
        assert_eq!(
            ParameterConfig::text("HDR", "STEP LENGTH").default_value(),
            ParamValue::token("STEP LENGTH")
        );
        assert_eq!(
            ParameterConfig::combined("RATE", "1/4", true).default_value(),
            ParamValue::token("1/4")
        );
    }

    #[test]
    fn test_value_serde_is_untagged() {
        let number: ParamValue = serde_json::from_str("42").unwrap();
        assert_eq!(number, ParamValue::Number(42.0));

        let token: ParamValue = serde_json::from_str("\"1/8\"").unwrap();
        assert_eq!(token, ParamValue::token("1/8"));

        assert_eq!(serde_json::to_string(&ParamValue::Number(42.0)).unwrap(), "42.0");
        assert_eq!(
            serde_json::to_string(&ParamValue::token("L50")).unwrap(),
            "\"L50\""
        );
    }

    #[test]
    fn test_header_detection() {
        assert!(ParameterConfig::text("HDR", "LEVELS").is_header());
        assert!(!ParameterConfig::generic("X").is_header());
    }
}

//! Effect cell configuration
//!
//! The value stored in one grid cell. Addressing is not part of the value;
//! the grid knows where a cell lives and stamps coordinates onto records
//! when flattening for the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{ParamValue, DEFAULT_EFFECT_TYPE};

/// Footswitch behavior of the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwMode {
    /// Press toggles the effect on and off
    Toggle,
    /// Effect is active only while held
    Moment,
}

impl Default for SwMode {
    fn default() -> Self {
        SwMode::Toggle
    }
}

/// Where the effect block taps the signal path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Insert {
    All,
    Mic1,
    Mic2,
    Inst1,
    Inst2,
    Track1,
    Track2,
    Track3,
    Track4,
    Track5,
}

impl Default for Insert {
    fn default() -> Self {
        Insert::All
    }
}

/// One grid cell: an effect type, its switch state, and any stored
/// parameter values. Parameters hold only the values a user changed;
/// defaults come from the catalog at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectConfig {
    pub effect_type: String,
    pub sw: bool,
    pub sw_mode: SwMode,
    pub insert: Insert,
    pub parameters: BTreeMap<String, ParamValue>,
}

impl EffectConfig {
    /// An enabled effect of the given type with nothing overridden
    pub fn new(effect_type: impl Into<String>) -> Self {
        Self {
            effect_type: effect_type.into(),
            sw: true,
            sw_mode: SwMode::default(),
            insert: Insert::default(),
            parameters: BTreeMap::new(),
        }
    }

    /// Store one parameter value, replacing any previous one
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_sw(mut self, sw: bool) -> Self {
        self.sw = sw;
        self
    }

    pub fn with_sw_mode(mut self, sw_mode: SwMode) -> Self {
        self.sw_mode = sw_mode;
        self
    }

    pub fn with_insert(mut self, insert: Insert) -> Self {
        self.insert = insert;
        self
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EFFECT_TYPE)
    }
}

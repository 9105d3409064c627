//! Legacy wire records
//!
//! The persisted form of a preset's effects is a flat JSON array, one
//! record per cell, with `parameters` JSON-encoded as a string inside the
//! record. Stored payloads predate this crate and are full of holes, so
//! decoding is deliberately tolerant: missing fields take the hardware
//! defaults and unreadable parameter payloads decode to an empty map. The
//! one genuine decode error is a broken array envelope.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::address::{Bank, FxGroup, Slot};
use super::config::{EffectConfig, Insert, SwMode};
use crate::error::{FxGridError, Result};
use crate::schema::{ParamValue, DEFAULT_EFFECT_TYPE};

/// One flat record of the persisted effect array.
///
/// Coordinates are optional on the wire. Grid writers stamp
/// `fxGroup`/`bank`/`slot`; older single-group writers store only
/// `position`, which names the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEffectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Bank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fx_group: Option<FxGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    #[serde(default = "default_effect_type")]
    pub effect_type: String,
    #[serde(default = "default_sw")]
    pub sw: bool,
    #[serde(default)]
    pub sw_mode: SwMode,
    #[serde(default)]
    pub insert: Insert,
    #[serde(
        default,
        deserialize_with = "deserialize_parameters",
        serialize_with = "serialize_parameters"
    )]
    pub parameters: BTreeMap<String, ParamValue>,
}

impl LegacyEffectRecord {
    /// Flatten one grid cell, stamped with the coordinates it came from
    pub fn from_cell(fx_group: FxGroup, bank: Bank, slot: Slot, config: &EffectConfig) -> Self {
        Self {
            position: None,
            fx_group: Some(fx_group),
            bank: Some(bank),
            slot: Some(slot),
            effect_type: config.effect_type.clone(),
            sw: config.sw,
            sw_mode: config.sw_mode,
            insert: config.insert,
            parameters: config.parameters.clone(),
        }
    }

    /// Resolve the record's cell, defaulting whatever the writer left out
    pub fn coordinates(&self) -> (FxGroup, Bank, Slot) {
        let fx_group = self.fx_group.unwrap_or(FxGroup::Input);
        let bank = self.bank.or(self.position).unwrap_or(Bank::A);
        let slot = self.slot.unwrap_or(Slot::A);
        (fx_group, bank, slot)
    }

    /// Strip addressing, keeping only the cell value
    pub fn into_config(self) -> EffectConfig {
        EffectConfig {
            effect_type: self.effect_type,
            sw: self.sw,
            sw_mode: self.sw_mode,
            insert: self.insert,
            parameters: self.parameters,
        }
    }
}

fn default_effect_type() -> String {
    DEFAULT_EFFECT_TYPE.to_string()
}

fn default_sw() -> bool {
    true
}

fn deserialize_parameters<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, ParamValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(parameters_from_value(raw))
}

/// Accept the parameter payload however it arrives: JSON-encoded string
/// (the wire form) or an already-parsed object. Anything unreadable decodes
/// to an empty map; entries that are neither numbers nor strings are
/// dropped.
fn parameters_from_value(raw: Value) -> BTreeMap<String, ParamValue> {
    let object = match raw {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!("unreadable parameters payload, treating as empty");
                Map::new()
            }
        },
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            warn!("unreadable parameters payload, treating as empty");
            Map::new()
        }
    };

    object
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Number(number) => number.as_f64().map(|n| (name, ParamValue::Number(n))),
            Value::String(token) => Some((name, ParamValue::Token(token))),
            _ => None,
        })
        .collect()
}

fn serialize_parameters<S>(
    parameters: &BTreeMap<String, ParamValue>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = serde_json::to_string(parameters).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

/// Decode a persisted effect array
pub fn decode_payload(payload: &str) -> Result<Vec<LegacyEffectRecord>> {
    serde_json::from_str(payload).map_err(|source| FxGridError::PayloadDecode { source })
}

/// Encode records into the persisted array shape
pub fn encode_payload(records: &[LegacyEffectRecord]) -> Result<String> {
    serde_json::to_string(records).map_err(|source| FxGridError::PayloadEncode { source })
}

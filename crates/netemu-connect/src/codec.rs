//! Config Codec: typed configuration through string-keyed maps
//!
//! The daemon exposes WLAN, mobility, EMANE and session options as groups of
//! named options whose values are always text. Decoding is two steps:
//!
//! 1. Flatten every group into one `name -> value` map ([`groups_to_map`]).
//!    Groups are applied in order, so a later group wins a name collision.
//! 2. Pull the keys a domain reserves out of that map ([`ConfigSchema::extract`]).
//!
//! A domain is only data: a [`ConfigSchema`] naming its keys and their value
//! kinds. Typed records implement [`ConfigRecord`] on top of a schema.

use crate::mapper::MappingError;
use crate::model::{ConfigGroup, ConfigOption, MobilityConfig, WlanConfig};
use std::collections::BTreeMap;

/// Flat option map as sent to and read from the daemon
pub type ConfigMap = BTreeMap<String, String>;

/// Flatten options to `name -> value`, dropping presentation metadata
pub fn options_to_map(options: &[ConfigOption]) -> ConfigMap {
    options
        .iter()
        .map(|option| (option.name.clone(), option.value.clone()))
        .collect()
}

/// Flatten groups in order; the last group to define a name wins
pub fn groups_to_map(groups: &[ConfigGroup]) -> ConfigMap {
    let mut map = ConfigMap::new();
    for group in groups {
        map.extend(options_to_map(&group.options));
    }
    map
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
}

/// A reserved key of a configuration domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl ConfigKey {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Integer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Integer(i64),
}

impl ConfigValue {
    fn render(&self) -> String {
        match self {
            ConfigValue::Text(text) => text.clone(),
            ConfigValue::Integer(value) => value.to_string(),
        }
    }
}

/// Typed values of one configuration domain, keyed by option name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues(BTreeMap<String, ConfigValue>);

impl ConfigValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        match self.0.get(name) {
            Some(ConfigValue::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.0.get(name) {
            Some(ConfigValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Set a text value; `None` removes the key
    pub fn set_text(&mut self, name: &str, value: Option<String>) {
        match value {
            Some(text) => {
                self.0.insert(name.to_string(), ConfigValue::Text(text));
            }
            None => {
                self.0.remove(name);
            }
        }
    }

    /// Set an integer value; `None` removes the key
    pub fn set_integer(&mut self, name: &str, value: Option<i64>) {
        match value {
            Some(value) => {
                self.0.insert(name.to_string(), ConfigValue::Integer(value));
            }
            None => {
                self.0.remove(name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }
}

/// Declarative key set of a configuration domain
///
/// Closed schemas ignore keys they do not reserve. Open schemas keep them
/// as text, for domains whose keys depend on the daemon (EMANE models,
/// session options).
#[derive(Debug, Clone, Copy)]
pub struct ConfigSchema {
    pub domain: &'static str,
    pub keys: &'static [ConfigKey],
    pub open: bool,
}

impl ConfigSchema {
    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|key| key.name == name)
    }

    /// Typed values from a flat map
    ///
    /// A reserved integer key holding anything but an integer is a
    /// [`MappingError::InvalidNumber`]; it is never defaulted.
    pub fn extract(&self, map: &ConfigMap) -> Result<ConfigValues, MappingError> {
        let mut values = ConfigValues::new();
        for (name, raw) in map {
            match self.key(name).map(|key| key.kind) {
                Some(ValueKind::Integer) => {
                    let value = raw.trim().parse().map_err(|_| MappingError::InvalidNumber {
                        key: format!("{}.{}", self.domain, name),
                        value: raw.clone(),
                    })?;
                    values.set_integer(name, Some(value));
                }
                Some(ValueKind::Text) => values.set_text(name, Some(raw.clone())),
                None if self.open => values.set_text(name, Some(raw.clone())),
                None => {}
            }
        }
        Ok(values)
    }

    /// Flat map from typed values; absent values are omitted
    pub fn render(&self, values: &ConfigValues) -> ConfigMap {
        values
            .iter()
            .filter(|(name, _)| self.open || self.key(name).is_some())
            .map(|(name, value)| (name.clone(), value.render()))
            .collect()
    }

    /// Options as this domain would send them
    pub fn encode_options(&self, options: &[ConfigOption]) -> Result<ConfigMap, MappingError> {
        Ok(self.render(&self.extract(&options_to_map(options))?))
    }
}

pub const WLAN_SCHEMA: ConfigSchema = ConfigSchema {
    domain: "wlan",
    keys: &[
        ConfigKey::text("bandwidth"),
        ConfigKey::text("delay"),
        ConfigKey::text("error"),
        ConfigKey::text("jitter"),
        ConfigKey::text("range"),
    ],
    open: false,
};

/// Per-node mobility, and every entry of the all-nodes mobility map
pub const MOBILITY_SCHEMA: ConfigSchema = ConfigSchema {
    domain: "mobility",
    keys: &[
        ConfigKey::text("file"),
        ConfigKey::integer("refresh_ms"),
        ConfigKey::text("autostart"),
        ConfigKey::text("loop"),
        ConfigKey::text("map"),
        ConfigKey::text("script_pause"),
        ConfigKey::text("script_start"),
        ConfigKey::text("script_stop"),
    ],
    open: false,
};

pub const EMANE_SCHEMA: ConfigSchema = ConfigSchema {
    domain: "emane",
    keys: &[],
    open: true,
};

pub const EMANE_MODEL_SCHEMA: ConfigSchema = ConfigSchema {
    domain: "emane_model",
    keys: &[],
    open: true,
};

pub const SESSION_OPTIONS_SCHEMA: ConfigSchema = ConfigSchema {
    domain: "session",
    keys: &[],
    open: true,
};

/// A fixed-shape record carried as configuration options
pub trait ConfigRecord: Sized {
    const SCHEMA: ConfigSchema;

    fn from_values(values: &ConfigValues) -> Self;

    fn to_values(&self) -> ConfigValues;
}

/// Decode a record from option groups (flatten, then extract)
pub fn groups_to_record<R: ConfigRecord>(groups: &[ConfigGroup]) -> Result<R, MappingError> {
    let values = R::SCHEMA.extract(&groups_to_map(groups))?;
    Ok(R::from_values(&values))
}

/// Encode a record as the flat map the daemon expects
pub fn record_to_map<R: ConfigRecord>(record: &R) -> ConfigMap {
    R::SCHEMA.render(&record.to_values())
}

impl ConfigRecord for WlanConfig {
    const SCHEMA: ConfigSchema = WLAN_SCHEMA;

    fn from_values(values: &ConfigValues) -> Self {
        Self {
            bandwidth: values.text("bandwidth"),
            delay: values.text("delay"),
            error: values.text("error"),
            jitter: values.text("jitter"),
            range: values.text("range"),
        }
    }

    fn to_values(&self) -> ConfigValues {
        let mut values = ConfigValues::new();
        values.set_text("bandwidth", self.bandwidth.clone());
        values.set_text("delay", self.delay.clone());
        values.set_text("error", self.error.clone());
        values.set_text("jitter", self.jitter.clone());
        values.set_text("range", self.range.clone());
        values
    }
}

impl ConfigRecord for MobilityConfig {
    const SCHEMA: ConfigSchema = MOBILITY_SCHEMA;

    fn from_values(values: &ConfigValues) -> Self {
        Self {
            file: values.text("file"),
            refresh_ms: values.integer("refresh_ms"),
            autostart: values.text("autostart"),
            repeat: values.text("loop"),
            map: values.text("map"),
            script_pause: values.text("script_pause"),
            script_start: values.text("script_start"),
            script_stop: values.text("script_stop"),
        }
    }

    fn to_values(&self) -> ConfigValues {
        let mut values = ConfigValues::new();
        values.set_text("file", self.file.clone());
        values.set_integer("refresh_ms", self.refresh_ms);
        values.set_text("autostart", self.autostart.clone());
        values.set_text("loop", self.repeat.clone());
        values.set_text("map", self.map.clone());
        values.set_text("script_pause", self.script_pause.clone());
        values.set_text("script_start", self.script_start.clone());
        values.set_text("script_stop", self.script_stop.clone());
        values
    }
}

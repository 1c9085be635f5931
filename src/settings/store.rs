use std::collections::BTreeMap;

use serde_json::Value;

/// A per-instance settings snapshot: string keys over JSON-shaped values.
///
/// Mirrors the host's settings-object contract: a user-value layer (what gets
/// persisted) over a defaults layer (seeded by the stage, never persisted).
/// Typed getters fall back to the default when no user value exists, then to
/// the type's zero value.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Values explicitly set by the user or by migration.
    values: BTreeMap<String, Value>,
    /// Defaults consulted when no user value exists.
    #[serde(skip)]
    defaults: BTreeMap<String, Value>,
}

impl Settings {
    /// Empty snapshot with no user values and no defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `key` carries an explicit user value (defaults don't count).
    pub fn has_user_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The user value for `key`, ignoring defaults.
    pub fn user_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Remove the user value for `key`, exposing the default again.
    pub fn unset_user_value(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Set a raw JSON user value.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Set an integer user value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set_value(key, Value::from(value));
    }

    /// Set a floating-point user value.
    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.set_value(key, Value::from(value));
    }

    /// Set a boolean user value.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set_value(key, Value::from(value));
    }

    /// Set a default for `key`. Defaults are not persisted and never shadow a
    /// user value.
    pub fn set_default(&mut self, key: impl Into<String>, value: Value) {
        self.defaults.insert(key.into(), value);
    }

    /// Integer value for `key` (user value, then default, then 0).
    pub fn get_int(&self, key: &str) -> i64 {
        match self.lookup(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| {
                n.as_f64().map(|f| f as i64).unwrap_or(0)
            }),
            _ => 0,
        }
    }

    /// Floating-point value for `key` (user value, then default, then 0.0).
    pub fn get_double(&self, key: &str) -> f64 {
        match self.lookup(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Boolean value for `key` (user value, then default, then false).
    pub fn get_bool(&self, key: &str) -> bool {
        match self.lookup(key) {
            Some(Value::Bool(b)) => *b,
            _ => false,
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/store.rs"]
mod tests;

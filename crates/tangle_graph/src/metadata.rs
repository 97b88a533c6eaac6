//! Name and property bag shared by vertices and arcs.

use hashbrown::HashMap;
use parking_lot::RwLock;
use serde_json::Value;

/// String-keyed bag of arbitrary values attached to a vertex or an arc.
pub type Properties = HashMap<String, Value>;

/// Optional name and optional property bag.
///
/// Both are opaque to the connection protocol; they exist for callers and
/// for rendering.
#[derive(Debug, Default)]
pub struct Metadata {
    name: RwLock<Option<String>>,
    properties: RwLock<Option<Properties>>,
}

impl Metadata {
    /// Creates metadata with the given name and no properties.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: RwLock::new(name),
            properties: RwLock::new(None),
        }
    }

    /// Returns a copy of the name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.name.read().clone()
    }

    /// Replaces the name.
    pub fn set_name(&self, name: Option<String>) {
        *self.name.write() = name;
    }

    /// Returns a copy of the property bag, if one is set.
    #[must_use]
    pub fn properties(&self) -> Option<Properties> {
        self.properties.read().clone()
    }

    /// Replaces the whole property bag.
    pub fn set_properties(&self, properties: Option<Properties>) {
        *self.properties.write() = properties;
    }

    /// Returns a single property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<Value> {
        self.properties
            .read()
            .as_ref()
            .and_then(|bag| bag.get(key).cloned())
    }

    /// Sets a single property, creating the bag when there is none.
    ///
    /// Returns the previous value stored under `key`.
    pub fn set_property(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.properties
            .write()
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value)
    }
}

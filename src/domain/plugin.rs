//! Plugin catalog model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor of one optional capability a tenant can enable.
///
/// Any JSON value is accepted; only the catalog key is authoritative.
/// `label` and `description` are read when the value is an object holding them
/// as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginDescriptor(pub Value);

impl PluginDescriptor {
    pub fn label(&self) -> Option<&str> {
        self.text("label")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Plugin ID → descriptor, in file order. Keys are the authoritative feature IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginCatalog {
    plugins: IndexMap<String, PluginDescriptor>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, descriptor: PluginDescriptor) {
        self.plugins.insert(id.to_string(), descriptor);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&PluginDescriptor> {
        self.plugins.get(id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin IDs in catalog order.
    pub fn ids(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PluginDescriptor)> {
        self.plugins.iter().map(|(id, descriptor)| (id.as_str(), descriptor))
    }

    /// Entries sorted by plugin ID, the order the feature matrix lists them in.
    pub fn sorted(&self) -> Vec<(&str, &PluginDescriptor)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Display label, falling back to the plugin ID.
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.plugins.get(id).and_then(PluginDescriptor::label).unwrap_or(id)
    }
}

impl FromIterator<(String, PluginDescriptor)> for PluginCatalog {
    fn from_iter<I: IntoIterator<Item = (String, PluginDescriptor)>>(iter: I) -> Self {
        Self { plugins: iter.into_iter().collect() }
    }
}

//! Tenant store: normalized tenant ID → record, in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tenant::TenantRecord;
use super::tenant_id::normalize_tenant_id;

/// A key rewritten by normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRename {
    pub from: String,
    pub to: String,
}

/// Mapping tenant ID → record, persisted as one JSON object.
///
/// Entries added through [`TenantStore::insert`] or [`TenantStore::normalized`]
/// are keyed by their slug with `id` rewritten to match. Deserialization keeps
/// keys as found; callers normalize before trusting the invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantStore {
    tenants: IndexMap<String, TenantRecord>,
}

impl TenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw entries, normalizing every key.
    ///
    /// When two keys collapse onto the same slug, the later record replaces the
    /// earlier one in the earlier position.
    pub fn from_entries<I>(entries: I) -> (Self, Vec<KeyRename>)
    where
        I: IntoIterator<Item = (String, TenantRecord)>,
    {
        let mut store = Self::new();
        let mut renames = Vec::new();
        for (key, record) in entries {
            let slug = store.insert(&key, record);
            if slug != key {
                renames.push(KeyRename { from: key, to: slug });
            }
        }
        (store, renames)
    }

    /// Re-key every entry by its slug.
    pub fn normalized(&self) -> Self {
        Self::from_entries(self.tenants.clone()).0
    }

    /// Insert under the normalized key, rewriting the record's `id`. Returns the key used.
    pub fn insert(&mut self, id: &str, mut record: TenantRecord) -> String {
        let slug = normalize_tenant_id(id);
        record.id = slug.clone();
        self.tenants.insert(slug.clone(), record);
        slug
    }

    /// Insert as-is, without normalizing. Used for in-memory edits that
    /// must still be caught by validation.
    pub fn insert_raw(&mut self, key: &str, record: TenantRecord) {
        self.tenants.insert(key.to_string(), record);
    }

    /// Remove a tenant, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<TenantRecord> {
        self.tenants.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&TenantRecord> {
        self.tenants.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TenantRecord> {
        self.tenants.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tenants.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.tenants.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TenantRecord)> {
        self.tenants.iter().map(|(id, record)| (id.as_str(), record))
    }
}

use credset_common::{CredentialSet, Error, Result};
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::CredentialSetStore;

/// In-process store keyed by name. Lists in name order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: RwLock<BTreeMap<String, CredentialSet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sets.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialSetStore for MemoryStore {
    fn read(&self, name: &str) -> Result<CredentialSet> {
        let guard = self.sets.read().unwrap_or_else(|e| e.into_inner());
        guard
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("credential set {name:?} not found")))
    }

    fn write(&self, set: &CredentialSet) -> Result<()> {
        let mut guard = self.sets.write().unwrap_or_else(|e| e.into_inner());
        guard.insert(set.name.clone(), set.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<CredentialSet>> {
        let guard = self.sets.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut guard = self.sets.write().unwrap_or_else(|e| e.into_inner());
        guard
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("credential set {name:?} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn write_read_delete_round_trip() {
        let store = MemoryStore::new();
        let set = CredentialSet::new("kool-kreds", Vec::new(), Utc::now().fixed_offset());

        store.write(&set).unwrap();
        assert_eq!(store.read("kool-kreds").unwrap(), set);
        assert_eq!(store.len(), 1);

        store.delete("kool-kreds").unwrap();
        assert!(store.is_empty());
        assert!(store.read("kool-kreds").unwrap_err().is_not_found());
        assert!(store.delete("kool-kreds").unwrap_err().is_not_found());
    }

    #[test]
    fn list_is_name_ordered() {
        let store = MemoryStore::new();
        let now = Utc::now().fixed_offset();
        store.write(&CredentialSet::new("b", Vec::new(), now)).unwrap();
        store.write(&CredentialSet::new("a", Vec::new(), now)).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}

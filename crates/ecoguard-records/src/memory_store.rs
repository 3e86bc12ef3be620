//! MemoryCollection: concurrent in-memory document collection via DashMap.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use ecoguard_core::errors::RecordError;
use ecoguard_core::traits::{IDocumentStore, Record};

/// Thread-safe in-memory collection keyed by record id.
pub struct MemoryCollection<T> {
    docs: DashMap<String, T>,
}

impl<T: Record> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }

    /// Collection pre-populated with `docs`. Later duplicates overwrite earlier ones.
    pub fn seeded(docs: impl IntoIterator<Item = T>) -> Self {
        let collection = Self::new();
        for doc in docs {
            collection.docs.insert(doc.id().to_string(), doc);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<T: Record> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> IDocumentStore<T> for MemoryCollection<T> {
    fn insert(&self, doc: T) -> Result<(), RecordError> {
        match self.docs.entry(doc.id().to_string()) {
            Entry::Occupied(e) => Err(RecordError::AlreadyExists {
                collection: T::COLLECTION.to_string(),
                id: e.key().clone(),
            }),
            Entry::Vacant(e) => {
                e.insert(doc);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Result<Option<T>, RecordError> {
        Ok(self.docs.get(id).map(|r| r.clone()))
    }

    fn replace(&self, doc: T) -> Result<(), RecordError> {
        match self.docs.get_mut(doc.id()) {
            Some(mut entry) => {
                *entry = doc;
                Ok(())
            }
            None => Err(RecordError::not_found(T::COLLECTION, doc.id())),
        }
    }

    fn remove(&self, id: &str) -> Result<bool, RecordError> {
        Ok(self.docs.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<T>, RecordError> {
        Ok(self.docs.iter().map(|r| r.value().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoguard_core::models::{User, UserRole};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{name}@ecoguard.org"),
            role: UserRole::Ranger,
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let users = MemoryCollection::new();
        users.insert(user("u1", "ana")).unwrap();
        let err = users.insert(user("u1", "bo")).unwrap_err();
        assert!(matches!(
            err,
            RecordError::AlreadyExists { ref collection, .. } if collection == "users"
        ));
        assert_eq!(users.get("u1").unwrap().unwrap().name, "ana");
    }

    #[test]
    fn replace_requires_existing_record() {
        let users = MemoryCollection::new();
        assert!(matches!(
            users.replace(user("u1", "ana")).unwrap_err(),
            RecordError::NotFound { .. }
        ));
        users.insert(user("u1", "ana")).unwrap();
        users.replace(user("u1", "anabel")).unwrap();
        assert_eq!(users.get("u1").unwrap().unwrap().name, "anabel");
    }

    #[test]
    fn remove_reports_presence() {
        let users = MemoryCollection::seeded([user("u1", "ana"), user("u2", "bo")]);
        assert_eq!(users.len(), 2);
        assert!(users.remove("u1").unwrap());
        assert!(!users.remove("u1").unwrap());
        assert_eq!(users.list().unwrap().len(), 1);
        assert!(users.get("u1").unwrap().is_none());
    }
}

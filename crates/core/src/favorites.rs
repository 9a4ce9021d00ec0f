//! Favorite tools on top of a key-value store
//!
//! The favorites live under a single key as a JSON array of tool ids, in the
//! order they were added. [`Favorites`] works against any
//! [`KeyValueStore`]; the core ships an in-memory store, the shell a
//! file-backed one.

use std::collections::HashMap;

/// Storage key holding the JSON array of favorite tool ids
pub const FAVORITES_KEY: &str = "favorite-tools";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(String),

    #[error("Store serialization error: {0}")]
    Serialization(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Decode a stored favorites value
///
/// Anything that is not a JSON array of strings reads as empty; duplicates
/// keep their first position.
pub fn parse_favorites(raw: &str) -> Vec<String> {
    let ids: Vec<String> = serde_json::from_str(raw).unwrap_or_default();

    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[derive(Debug, Clone)]
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .store
            .get(FAVORITES_KEY)?
            .map(|raw| parse_favorites(&raw))
            .unwrap_or_default())
    }

    pub fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.list()?.iter().any(|favorite| favorite == id))
    }

    fn save(&mut self, ids: &[String]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(ids).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(FAVORITES_KEY, &raw)
    }

    /// Returns `false` when the id was already a favorite
    pub fn add(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut ids = self.list()?;
        if ids.iter().any(|favorite| favorite == id) {
            return Ok(false);
        }

        ids.push(id.to_string());
        self.save(&ids)?;
        Ok(true)
    }

    /// Returns `false` when the id was not a favorite
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut ids = self.list()?;
        let before = ids.len();
        ids.retain(|favorite| favorite != id);

        if ids.len() == before {
            return Ok(false);
        }

        self.save(&ids)?;
        Ok(true)
    }

    /// Flip membership; returns whether the id is a favorite afterwards
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.remove(id)? {
            Ok(false)
        } else {
            self.add(id)
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(FAVORITES_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites() -> Favorites<MemoryStore> {
        Favorites::new(MemoryStore::new())
    }

    #[test]
    fn test_empty_store_has_no_favorites() {
        assert!(favorites().list().unwrap().is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order_without_duplicates() {
        let mut favorites = favorites();
        assert!(favorites.add("uuid-generator").unwrap());
        assert!(favorites.add("age-calculator").unwrap());
        assert!(!favorites.add("uuid-generator").unwrap());

        assert_eq!(
            favorites.list().unwrap(),
            vec!["uuid-generator", "age-calculator"]
        );
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut favorites = favorites();
        assert!(favorites.toggle("qr-generator").unwrap());
        assert!(favorites.contains("qr-generator").unwrap());
        assert!(!favorites.toggle("qr-generator").unwrap());
        assert!(!favorites.contains("qr-generator").unwrap());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut favorites = favorites();
        favorites.add("a").unwrap();
        assert!(!favorites.remove("b").unwrap());
        assert_eq!(favorites.list().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_stored_value_is_json_array() {
        let mut favorites = favorites();
        favorites.add("a").unwrap();
        favorites.add("b").unwrap();

        let store = favorites.into_inner();
        assert_eq!(
            store.get(FAVORITES_KEY).unwrap(),
            Some(r#"["a","b"]"#.to_string())
        );
    }

    #[test]
    fn test_malformed_value_reads_empty_and_is_overwritten() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not json").unwrap();

        let mut favorites = Favorites::new(store);
        assert!(favorites.list().unwrap().is_empty());

        favorites.add("a").unwrap();
        assert_eq!(favorites.list().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_parse_favorites_dedupes() {
        assert_eq!(parse_favorites(r#"["a","b","a"]"#), vec!["a", "b"]);
        assert!(parse_favorites(r#"[1, 2]"#).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut favorites = favorites();
        favorites.add("a").unwrap();
        favorites.clear().unwrap();
        assert!(favorites.list().unwrap().is_empty());
    }
}

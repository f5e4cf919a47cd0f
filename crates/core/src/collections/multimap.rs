//! Key to multiset map with checked removals.

use super::multiset::Multiset;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiMapError<K, V> {
    #[error("the key {key} is not present in the multi-map")]
    UnknownKey { key: K },
    #[error("the value {value} is not associated with the key {key}")]
    MissingAssociation { key: K, value: V },
}

/// Maps each key to a [`Multiset`] of values.
///
/// A key stays present once added, even when its multiset drains to empty;
/// only [`ValidatedMultiMap::delete_key`] removes it.
#[derive(Debug, Clone)]
pub struct ValidatedMultiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    entries: IndexMap<K, Multiset<V>>,
    empty: Multiset<V>,
}

impl<K, V> ValidatedMultiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            empty: Multiset::new(),
        }
    }

    /// Adds `key` with no values. Does nothing if it is already present.
    pub fn ensure_key(&mut self, key: K) {
        self.entries.entry(key).or_default();
    }

    /// Adds one occurrence of `value` under `key`, creating the key if needed.
    pub fn add_allow_duplicates(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().insert(value);
    }

    pub fn remove_one(&mut self, key: &K, value: &V) -> Result<(), MultiMapError<K, V>> {
        let removed = self
            .entries
            .get_mut(key)
            .is_some_and(|values| values.remove_one(value));

        if removed {
            Ok(())
        } else {
            Err(MultiMapError::MissingAssociation {
                key: key.clone(),
                value: value.clone(),
            })
        }
    }

    pub fn get_or_empty(&self, key: &K) -> &Multiset<V> {
        self.entries.get(key).unwrap_or(&self.empty)
    }

    pub fn get_strict(&self, key: &K) -> Result<&Multiset<V>, MultiMapError<K, V>> {
        self.entries
            .get(key)
            .ok_or_else(|| MultiMapError::UnknownKey { key: key.clone() })
    }

    /// Removes `key` and whatever values it still holds.
    pub fn delete_key(&mut self, key: &K) -> Result<Multiset<V>, MultiMapError<K, V>> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| MultiMapError::UnknownKey { key: key.clone() })
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Multiset<V>)> + '_ {
        self.entries.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for ValidatedMultiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Display for ValidatedMultiMap<K, V>
where
    K: Eq + Hash + fmt::Display,
    V: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {values}")?;
        }
        write!(f, "}}")
    }
}

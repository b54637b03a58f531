//! Array-backed ordered associative container.
//!
//! `OrderedMap` keeps its entries in a flat slot array in insertion order.
//! Lookups are linear scans, which is fine for boards holding tens to low
//! hundreds of pictograms and keeps positional access trivial.

use std::borrow::Borrow;
use thiserror::Error;

/// Errors raised by [`OrderedMap`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested key is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// A positional index was outside `0..size`.
    #[error("index {index} out of range for map of size {size}")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// Logical size of the map at the time of the request
        size: usize,
    },
}

/// A single key/value pair stored in a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Growable ordered map with unique keys.
///
/// # Invariants
///
/// - Keys are unique; `set` on an existing key overwrites in place
/// - Slots `0..size` are occupied and slots `size..capacity` are empty
/// - Capacity doubles (minimum 1) when a new key is inserted into a full map
/// - Capacity never shrinks
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    size: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with no backing storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            size: 0,
        }
    }

    /// Number of entries in the map.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the key stored at `index` in insertion order.
    pub fn key_at(&self, index: usize) -> Result<&K, MapError> {
        self.entry_at(index)
            .map(|entry| &entry.key)
            .ok_or(MapError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots[..self.size]
            .iter()
            .filter_map(Option::as_ref)
            .map(|entry| (&entry.key, &entry.value))
    }

    fn entry_at(&self, index: usize) -> Option<&Entry<K, V>> {
        if index >= self.size {
            return None;
        }
        self.slots[index].as_ref()
    }

    /// Doubles the backing store, moving occupied slots across in order.
    fn grow(&mut self) {
        let new_capacity = (self.slots.len() * 2).max(1);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.slots.iter_mut().map(Option::take));
        grown.resize_with(new_capacity, || None);
        self.slots = grown;
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots[..self.size].iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key)
        })
    }

    /// Inserts `value` under `key`, or overwrites the existing value in place.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(index) = self.position(&key) {
            if let Some(entry) = self.slots[index].as_mut() {
                entry.value = value;
            }
            return;
        }

        if self.size == self.slots.len() {
            self.grow();
        }
        self.slots[self.size] = Some(Entry { key, value });
        self.size += 1;
    }

    /// Returns the value under `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                if self.size == self.slots.len() {
                    self.grow();
                }
                self.size += 1;
                self.size - 1
            }
        };

        &mut self.slots[index]
            .get_or_insert_with(|| Entry {
                key,
                value: default(),
            })
            .value
    }

    /// Returns true if `key` is present.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Removes `key` and shifts every later entry one slot left.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        let removed = self.slots[index].take();

        for i in index..self.size - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.size -= 1;

        removed.map(|entry| entry.value)
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ToString + ?Sized,
    {
        self.position(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|entry| &entry.value)
            .ok_or_else(|| MapError::KeyNotFound(key.to_string()))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ToString + ?Sized,
    {
        match self.position(key) {
            Some(index) => self.slots[index]
                .as_mut()
                .map(|entry| &mut entry.value)
                .ok_or_else(|| MapError::KeyNotFound(key.to_string())),
            None => Err(MapError::KeyNotFound(key.to_string())),
        }
    }
}

impl<K: Clone, V> OrderedMap<K, V> {
    /// Returns a fresh copy of the keys in insertion order.
    pub fn keys_in_order(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }
}

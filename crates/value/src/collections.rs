//! Keyed collections with SameValueZero key semantics.
//!
//! Both collections keep insertion order. Lookups are linear, which matches the
//! small sizes these values have in configuration-like trees.

use crate::equal::same_value_zero;
use crate::value::Value;

/// An insertion-ordered map whose keys may be any [`Value`].
///
/// # Examples
///
/// ```
/// use objkit_value::{MapValue, Value};
///
/// let mut map = MapValue::new();
/// map.insert(Value::from("a"), Value::from(1));
/// map.insert(Value::Number(f64::NAN), Value::from(2));
///
/// assert_eq!(map.get(&Value::from("a")), Some(&Value::from(1)));
/// assert_eq!(map.get(&Value::Number(f64::NAN)), Some(&Value::from(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| same_value_zero(k, key))
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Inserts or replaces; a replaced entry keeps its original position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// An insertion-ordered set of [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetValue {
    items: Vec<Value>,
}

impl SetValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &Value) -> bool {
        self.items.iter().any(|v| same_value_zero(v, item))
    }

    /// Returns `false` if an equal item was already present.
    pub fn insert(&mut self, item: Value) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, item: &Value) -> bool {
        match self.items.iter().position(|v| same_value_zero(v, item)) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = SetValue::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

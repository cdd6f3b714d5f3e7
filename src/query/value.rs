use indexmap::IndexMap;

use crate::log::warning;

/// Decoded query string.
///
/// Keys are unique and iterate in insertion order. Rebinding an existing key keeps its original
/// position. Equality takes order into account.
#[derive(Clone, Default)]
pub struct QueryMap {
    entries: IndexMap<String, Value>,
    /// Largest canonical integer key ever bound.
    last_index: Option<usize>,
}

/// Value bound to a [`QueryMap`] key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Pair without `=`, e.g: `flag` in `flag&a=1`.
    Null,
    /// Plain value, e.g: `a=1`.
    String(String),
    /// Values appended with `key[]`.
    List(Vec<Value>),
    /// Values bound with `key[sub]`.
    Map(QueryMap),
}

impl QueryMap {
    /// Create new empty [`QueryMap`].
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            last_index: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Bind `key` to `value`, returning the previous value.
    ///
    /// An existing key keeps its position.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        self.track_index(&key);
        self.entries.insert(key, value.into())
    }

    /// Remove `key`, preserving the order of remaining keys.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns an iterator over keys and values in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Append `value` to the container bound to `key`.
    ///
    /// A scalar or missing binding is replaced by a new [`Value::List`]. A [`Value::Map`] receives
    /// `value` under its next integer key, see [`QueryMap::next_index`].
    pub(crate) fn push_at(&mut self, key: &str, value: Value) {
        self.track_index(key);
        let slot = self.entries.entry(key.to_owned()).or_insert(Value::Null);
        match slot {
            Value::List(list) => list.push(value),
            Value::Map(map) => match map.next_index() {
                Some(next) => {
                    map.insert(next.to_string(), value);
                }
                None => {
                    warning!("query key {key:?} has no free integer index, value dropped");
                }
            },
            _ => *slot = Value::List(vec![value]),
        }
    }

    /// One past the largest canonical integer key ever bound, `0` if there is none.
    ///
    /// Returns [`None`] when that index does not fit in `usize`.
    fn next_index(&self) -> Option<usize> {
        match self.last_index {
            Some(last) => last.checked_add(1),
            None => Some(0),
        }
    }

    fn track_index(&mut self, key: &str) {
        if let Some(index) = integer_key(key) {
            if self.last_index.is_none_or(|last| index > last) {
                self.last_index = Some(index);
            }
        }
    }

    /// Returns the map bound to `key`.
    ///
    /// A scalar or missing binding is replaced by an empty map. A [`Value::List`] is converted
    /// into a map keyed by position.
    pub(crate) fn nested_map(&mut self, key: &str) -> &mut QueryMap {
        self.track_index(key);
        let slot = self.entries.entry(key.to_owned()).or_insert(Value::Null);
        if !matches!(slot, Value::Map(_)) {
            let map = match std::mem::replace(slot, Value::Null) {
                Value::List(list) => list
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| (i.to_string(), value))
                    .collect(),
                _ => QueryMap::new(),
            };
            *slot = Value::Map(map);
        }
        match slot {
            Value::Map(map) => map,
            _ => unreachable!("slot was just bound to a map"),
        }
    }
}

/// Decimal key without sign or leading zeros that fits in `usize`.
fn integer_key(key: &str) -> Option<usize> {
    match key.as_bytes() {
        [b'0'] => Some(0),
        [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}

impl Value {
    /// Returns the string value, if this is [`Value::String`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&QueryMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// ===== Conversion =====

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Option<String>> for Value {
    #[inline]
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::String)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<QueryMap> for Value {
    #[inline]
    fn from(value: QueryMap) -> Self {
        Value::Map(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::ops::Index<&str> for QueryMap {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    #[inline]
    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("query key {key:?} not found"),
        }
    }
}

// ===== Comparison =====

impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for QueryMap { }

impl PartialEq<str> for Value {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

// ===== Formatting =====

impl std::fmt::Debug for QueryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

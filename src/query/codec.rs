use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::{QueryError, QueryMap, Value};
use crate::log::warning;

/// Everything but RFC 3986 `unreserved` is encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const DEFAULT_DELIMITER: &str = "&";
const DEFAULT_MAX_DEPTH: usize = 64;

/// Query string codec.
///
/// The default codec splits pairs on `&` and accepts up to 64 levels of bracket nesting.
///
/// # Examples
///
/// ```
/// use uref::query::{Codec, Value};
///
/// let query = Codec::with_delimiter(";").decode("a=1;b[]=2").unwrap();
/// assert_eq!(query["a"], "1");
/// assert_eq!(query["b"], Value::List(vec!["2".into()]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec<'d> {
    delimiter: &'d str,
    max_depth: usize,
}

impl Codec<'static> {
    /// Create codec with `&` delimiter.
    #[inline]
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for Codec<'static> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Codec<'d> {
    /// Create codec with custom pair delimiter.
    ///
    /// The delimiter is checked when decoding or encoding.
    #[inline]
    pub const fn with_delimiter(delimiter: &'d str) -> Self {
        Self {
            delimiter,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum bracket nesting depth.
    #[inline]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn delimiter(&self) -> &'d str {
        self.delimiter
    }

    /// Decode query string.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the delimiter is empty or a name nests brackets deeper than the
    /// configured maximum.
    pub fn decode(&self, raw: &str) -> Result<QueryMap, QueryError> {
        if self.delimiter.is_empty() {
            return Err(QueryError::EmptyDelimiter);
        }

        let mut data = QueryMap::new();

        for pair in raw.split(self.delimiter) {
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name, Some(percent_decode(value))),
                None => (pair, None),
            };
            let name = percent_decode(name);
            self.extract(&mut data, &name, Value::from(value), 0)?;
        }

        Ok(data)
    }

    /// Encode query string.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the delimiter is empty.
    pub fn encode(&self, map: &QueryMap) -> Result<String, QueryError> {
        if self.delimiter.is_empty() {
            return Err(QueryError::EmptyDelimiter);
        }
        Ok(encode_with(map, self.delimiter))
    }

    /// Bind a single decoded pair into `data`.
    ///
    /// - empty name is dropped
    /// - without `[`, or without `]` after it, the whole name is a plain key
    /// - `key[]` appends, `key[index]` descends into `key` with `index` as the new name
    /// - trailing text after `]` is kept only when it is another bracket group
    fn extract(
        &self,
        data: &mut QueryMap,
        name: &str,
        value: Value,
        depth: usize,
    ) -> Result<(), QueryError> {
        if name.is_empty() {
            return Ok(());
        }

        let Some(left) = name.find('[') else {
            data.insert(name, value);
            return Ok(());
        };

        let Some(right) = name[left..].find(']').map(|i| left + i) else {
            data.insert(name, value);
            return Ok(());
        };

        if depth >= self.max_depth {
            warning!("query name nested deeper than {}", self.max_depth);
            return Err(QueryError::TooDeep { limit: self.max_depth });
        }

        let key = &name[..left];
        let index = &name[left + 1..right];

        if index.is_empty() {
            data.push_at(key, value);
            return Ok(());
        }

        let mut remaining = &name[right + 1..];
        if !remaining.starts_with('[') || !remaining[1..].contains(']') {
            remaining = "";
        }

        let nested = format!("{index}{remaining}");
        self.extract(data.nested_map(key), &nested, value, depth + 1)
    }
}

/// Decode query string with the default [`Codec`].
///
/// # Examples
///
/// ```
/// use uref::query::{decode, Value};
///
/// let query = decode("hello=world&test[]=1&test[]=2&flag").unwrap();
/// assert_eq!(query["hello"], "world");
/// assert_eq!(query["test"], Value::List(vec!["1".into(), "2".into()]));
/// assert!(query["flag"].is_null());
/// ```
///
/// # Errors
///
/// Returns [`Err`] if a name nests brackets deeper than 64 levels.
#[inline]
pub fn decode(raw: &str) -> Result<QueryMap, QueryError> {
    Codec::new().decode(raw)
}

/// Encode query string with `&` delimiter.
///
/// Nested values are flattened into bracketed names. [`Value::Null`] encodes as an empty value.
///
/// # Examples
///
/// ```
/// use uref::query::{encode, QueryMap, Value};
///
/// let mut map = QueryMap::new();
/// map.insert("q", "rust lang");
/// map.insert("tag", Value::List(vec!["a".into(), "b".into()]));
/// assert_eq!(encode(&map), "q=rust%20lang&tag%5B%5D=a&tag%5B%5D=b");
/// ```
#[inline]
pub fn encode(map: &QueryMap) -> String {
    encode_with(map, DEFAULT_DELIMITER)
}

// ===== Logic =====

fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

fn encode_with(map: &QueryMap, delimiter: &str) -> String {
    let mut out = String::new();
    for (key, value) in map.iter() {
        let name = utf8_percent_encode(key, COMPONENT).to_string();
        flatten(&mut out, &name, value, delimiter);
    }
    out
}

/// `name` is already percent encoded.
fn flatten(out: &mut String, name: &str, value: &Value, delimiter: &str) {
    match value {
        Value::Null => write_pair(out, name, "", delimiter),
        Value::String(value) => write_pair(out, name, value, delimiter),
        Value::List(list) => {
            for (i, item) in list.iter().enumerate() {
                let name = match item {
                    // explicit index keeps nested containers apart
                    Value::List(_) | Value::Map(_) => format!("{name}%5B{i}%5D"),
                    _ => format!("{name}%5B%5D"),
                };
                flatten(out, &name, item, delimiter);
            }
        }
        Value::Map(map) => {
            for (key, item) in map.iter() {
                let name = format!("{name}%5B{}%5D", utf8_percent_encode(key, COMPONENT));
                flatten(out, &name, item, delimiter);
            }
        }
    }
}

fn write_pair(out: &mut String, name: &str, value: &str, delimiter: &str) {
    if !out.is_empty() {
        out.push_str(delimiter);
    }
    out.push_str(name);
    out.push('=');
    out.extend(utf8_percent_encode(value, COMPONENT));
}

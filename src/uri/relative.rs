use super::{Uri, merge, split};
use crate::log::debug;
use crate::query::{self, QueryMap};

/// Relative reference, a path and a query to be applied on a base [`Uri`].
///
/// # Examples
///
/// ```
/// use uref::{RelativeRef, Uri};
///
/// let base = Uri::parse("https://example.com/about/us/").unwrap();
///
/// let uri = RelativeRef::parse("../me/").apply(&base);
/// assert_eq!(uri.to_string(), "https://example.com/about/me/");
///
/// let uri = RelativeRef::parse("/services/x/?section=team").apply(&base);
/// assert_eq!(uri.to_string(), "https://example.com/services/x/?section=team");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeRef {
    path: String,
    query: QueryMap,
}

impl RelativeRef {
    #[inline]
    pub fn new(path: impl Into<String>, query: QueryMap) -> Self {
        Self { path: path.into(), query }
    }

    /// Parse relative reference.
    ///
    /// Only the path and query of `input` are used. Input that cannot be split, or whose query
    /// cannot be decoded, results in an empty reference.
    pub fn parse(input: &str) -> Self {
        let parts = match split(input) {
            Ok(ok) => ok,
            Err(err) => {
                debug!("relative reference {input:?} is empty: {err}");
                return Self::default();
            }
        };

        let query = match query::decode(parts.query.unwrap_or_default()) {
            Ok(ok) => ok,
            Err(err) => {
                debug!("relative reference {input:?} is empty: {err}");
                return Self::default();
            }
        };

        Self {
            path: parts.path.unwrap_or_default().to_owned(),
            query,
        }
    }

    /// Returns the path as written.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    /// Resolve this reference against `base`.
    ///
    /// Path is merged segment wise, see [`merge`]. Query is replaced, not merged, even when this
    /// reference has none. Everything else is taken from `base`.
    pub fn apply(self, base: &Uri) -> Uri {
        let incoming: Vec<&str> = match self.path.is_empty() {
            true => Vec::new(),
            false => self.path.split('/').collect(),
        };
        let path = merge(base.path().split('/').collect(), &incoming).join("/");

        Uri {
            path,
            query: self.query,
            ..base.clone()
        }
    }
}

// ===== Conversion =====

impl From<&str> for RelativeRef {
    #[inline]
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl std::str::FromStr for RelativeRef {
    type Err = std::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// ===== Formatting =====

impl std::fmt::Display for RelativeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        let query = query::encode(&self.query);
        if !query.is_empty() {
            f.write_str("?")?;
            f.write_str(&query)?;
        }
        Ok(())
    }
}

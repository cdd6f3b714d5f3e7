//! URI value type with bracket notation query strings and relative reference resolution.
//!
//! - [`query`]: decode and encode `a[b][]=1` style query strings into an ordered [`QueryMap`]
//! - [`uri`]: immutable [`Uri`] and [`RelativeRef`] resolution
//!
//! ```
//! use uref::{RelativeRef, Uri};
//!
//! let base = Uri::parse("https://example.com/about/us/").unwrap();
//! let next = RelativeRef::parse("./me/?tab[]=1&tab[]=2").apply(&base);
//! assert_eq!(next.path(), "/about/us/me/");
//! assert_eq!(next.to_string(), "https://example.com/about/us/me/?tab%5B%5D=1&tab%5B%5D=2");
//!
//! let parts = uref::split("http://example.com:8080").unwrap();
//! assert_eq!(parts.host, Some("example.com"));
//! assert_eq!(uref::default_port("http"), 80);
//! assert_eq!(uref::encode(&uref::decode("a[]=1").unwrap()), "a%5B%5D=1");
//! ```
//!
//! # Features
//!
//! - `log`: log rejected input through the [`log`](https://docs.rs/log) facade
//! - `serde`: `Serialize` and `Deserialize` implementations
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod query;
pub mod uri;

#[cfg(feature = "serde")]
mod serde_impl;

pub use query::{Codec, QueryError, QueryMap, Value, decode, encode};
pub use uri::{
    Components, Credentials, IntoUri, RelativeRef, Uri, UriError, default_port, merge, split,
};

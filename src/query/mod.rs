//! Bracket notation query string.
//!
//! A query string is a delimited sequence of `name=value` pairs. Names may carry bracket suffixes
//! that build nested structure:
//!
//! ```not_rust
//!   a=1&b[]=2&b[]=3&c[d][e]=4
//!   \_/ \_____________/ \______/
//!    |         |            |
//! string     list      nested map
//! ```
//!
//! decodes into `{a: "1", b: ["2", "3"], c: {d: {e: "4"}}}`.
//!
//! # Percent Encoding
//!
//! Names and values are percent decoded after splitting. `+` is kept as is, it is not a space.
mod value;
mod codec;
mod error;

pub use value::{QueryMap, Value};
pub use codec::{Codec, decode, encode};
pub use error::QueryError;

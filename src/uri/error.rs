use crate::query::QueryError;

/// A possible error value when parsing or building [`Uri`].
///
/// [`Uri`]: super::Uri
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    /// Scheme is empty.
    #[error("invalid uri: empty scheme")]
    Scheme,
    /// Host contains invalid character, or is missing while userinfo or port is present.
    #[error("invalid uri: invalid host")]
    Host,
    /// Port is not a valid 16 bit number.
    #[error("invalid uri: invalid port")]
    Port,
    /// Control character found.
    #[error("invalid uri: invalid character")]
    Char,
    /// Query string cannot be decoded.
    #[error("invalid uri: {0}")]
    Query(#[from] QueryError),
    /// Password given without a user.
    #[error("password requires a user")]
    Credentials,
}

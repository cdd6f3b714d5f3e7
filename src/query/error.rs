/// A possible error value when decoding or encoding a query string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Pair delimiter is empty.
    #[error("query delimiter cannot be empty")]
    EmptyDelimiter,
    /// Bracket nesting goes deeper than the codec allows.
    #[error("query nesting exceeds depth of {limit}")]
    TooDeep {
        /// Configured maximum depth.
        limit: usize,
    },
}

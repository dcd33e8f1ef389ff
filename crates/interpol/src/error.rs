use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Placeholder flags did not reduce to exactly one type code after
    /// stripping the `n` and `j` modifiers.
    #[error("malformed flags in token `{token}`")]
    MalformedToken { token: String },

    #[error("unknown type `{code}` in token `{token}`")]
    UnknownType { code: char, token: String },

    #[error("cannot use join in token `{token}` as it is not a sequence")]
    JoinOnNonSequence { token: String },

    /// The driver rejected the fully expanded statement. Carries the
    /// original template, not the expanded SQL.
    #[error("query failed: {message}")]
    Execution { message: String, query: String },
}

use thiserror::Error;

/// A leaf name that breaks the case convention: variables are lower-case
/// initial, constants upper-case initial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingViolation {
    #[error("empty name")]
    Empty,
    #[error("variable name `{0}` must start with a lower-case letter")]
    Variable(String),
    #[error("constant name `{0}` must start with an upper-case letter")]
    Constant(String),
}

/// Malformed term syntax. Positions are byte offsets into the parsed string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty term")]
    Empty,
    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParens { position: usize },
    #[error("unexpected input after the closing parenthesis at position {position}")]
    TrailingInput { position: usize },
    #[error("empty argument at position {position}")]
    EmptyArgument { position: usize },
    #[error("invalid identifier `{identifier}`")]
    InvalidIdentifier { identifier: String },
    #[error(transparent)]
    Naming(#[from] NamingViolation),
}

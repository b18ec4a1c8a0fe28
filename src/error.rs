use thiserror::Error;

/// Why an expression is not well-formed postfix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    #[error("operator `{op}` at token {position} needs two operands")]
    MissingOperands { op: char, position: usize },
    #[error("nothing left to return")]
    Empty,
    #[error("{0} operands left on the stack")]
    Leftover(usize),
    #[error("bad token `{token}` at position {position}")]
    BadToken { token: String, position: usize },
    #[error("empty token at position {position} (tokens are separated by a single space)")]
    EmptyToken { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] Invalid),
    #[error("integer division by zero at token {position}")]
    DivisionByZero { position: usize },
}

pub type Result<T> = std::result::Result<T, EvalError>;

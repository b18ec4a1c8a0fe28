mod error;
mod number;
mod rpneval;
mod tokenizer;

pub use crate::error::{EvalError, Invalid, Result};
pub use crate::number::Number;
pub use crate::rpneval::{evaluate, Evaluator};
pub use crate::tokenizer::{classify, Operator, Token, Tokenizer};

use crate::error::{EvalError, Invalid, Result};
use crate::number::Number;
use crate::tokenizer::{Operator, Token, Tokenizer};
use log::{debug, trace};

// Holds no state, each call owns its operand stack
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator
    }

    pub fn eval(&self, expr: &str) -> Result<Number> {
        let result = self.eval_tokens(Tokenizer::new(expr));
        debug!("{:?} => {:?}", expr, result);
        result
    }

    pub fn eval_tokens<I>(&self, tokens: I) -> Result<Number>
    where
        I: IntoIterator<Item = Result<(usize, Token)>>,
    {
        let mut operands = Vec::new();

        for token in tokens {
            let (position, token) = token?;
            trace!("token {}: {:?} stack={:?}", position, token, operands);
            match token {
                Token::Number(num) => operands.push(num),
                Token::BOp(op) => {
                    let missing = || Invalid::MissingOperands {
                        op: op.symbol(),
                        position,
                    };
                    // x is the top of the stack, y the operand written before it
                    let x = operands.pop().ok_or_else(missing)?;
                    let y = operands.pop().ok_or_else(missing)?;
                    operands.push(apply(op, y, x, position)?);
                }
            }
        }
        let result = operands.pop().ok_or(Invalid::Empty)?;
        if !operands.is_empty() {
            return Err(Invalid::Leftover(operands.len() + 1).into());
        }
        Ok(result)
    }
}

pub fn evaluate(expr: &str) -> Result<Number> {
    Evaluator.eval(expr)
}

// y op x: two ints stay int (wrapping, truncating), else f64
fn apply(op: Operator, y: Number, x: Number, position: usize) -> Result<Number> {
    match (y, x) {
        (Number::Int(l), Number::Int(r)) => {
            let value = match op {
                Operator::Add => l.wrapping_add(r),
                Operator::Sub => l.wrapping_sub(r),
                Operator::Mul => l.wrapping_mul(r),
                Operator::Div if r == 0 => return Err(EvalError::DivisionByZero { position }),
                Operator::Div => l.wrapping_div(r),
            };
            Ok(Number::Int(value))
        }
        (l, r) => {
            let (l, r) = (l.as_f64(), r.as_f64());
            let value = match op {
                Operator::Add => l + r,
                Operator::Sub => l - r,
                Operator::Mul => l * r,
                Operator::Div => l / r,
            };
            Ok(Number::Float(value))
        }
    }
}

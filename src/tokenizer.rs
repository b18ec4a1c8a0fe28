use crate::error::{Invalid, Result};
use crate::number::Number;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(Number),
    BOp(Operator),
}

pub fn classify(lexeme: &str, position: usize) -> Result<Token> {
    if lexeme.is_empty() {
        return Err(Invalid::EmptyToken { position }.into());
    }
    if let Some(op) = Operator::from_token(lexeme) {
        return Ok(Token::BOp(op));
    }
    let bad = || Invalid::BadToken {
        token: lexeme.to_string(),
        position,
    };
    // the decimal point alone decides the tag, magnitude doesn't matter
    let number = if lexeme.contains('.') {
        Number::Float(lexeme.parse::<f64>().map_err(|_| bad())?)
    } else {
        Number::Int(lexeme.parse::<i64>().map_err(|_| bad())?)
    };
    Ok(Token::Number(number))
}

// Splits on single spaces. Trailing spaces are dropped, but leading or
// consecutive ones leave empty tokens behind, which classify rejects.
pub struct Tokenizer<'a> {
    src: Option<std::str::Split<'a, char>>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(expr: &'a str) -> Tokenizer<'a> {
        let trimmed = expr.trim_end_matches(' ');
        // a line of nothing but spaces has no tokens at all
        let src = if trimmed.is_empty() && !expr.is_empty() {
            None
        } else {
            Some(trimmed.split(' '))
        };
        Tokenizer { src, pos: 0 }
    }

    // 1-based, of the token last returned by next
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<(usize, Token)>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.src.as_mut()?.next()?;
        self.pos += 1;
        let pos = self.pos;
        Some(classify(lexeme, pos).map(|token| (pos, token)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Operator, Token, Tokenizer};
    use crate::error::{EvalError, Invalid};
    use crate::number::Number;

    fn tokens(expr: &str) -> Result<Vec<Token>, EvalError> {
        Tokenizer::new(expr).map(|t| t.map(|(_, tok)| tok)).collect()
    }

    #[test]
    fn test_tokenize1() {
        let expect = vec![
            Token::Number(Number::Int(3)),
            Token::Number(Number::Float(4.0)),
            Token::BOp(Operator::Add),
            Token::Number(Number::Int(-2)),
            Token::BOp(Operator::Sub),
            Token::Number(Number::Float(0.5)),
            Token::BOp(Operator::Mul),
            Token::Number(Number::Int(10)),
            Token::BOp(Operator::Div),
        ];
        assert_eq!(tokens("3 4.0 + -2 - 0.5 * 10 /"), Ok(expect));
    }

    #[test]
    fn test_tokenize2() {
        assert_eq!(
            tokens("3.4e-2 +7 .5"),
            Ok(vec![
                Token::Number(Number::Float(3.4e-2)),
                Token::Number(Number::Int(7)),
                Token::Number(Number::Float(0.5)),
            ])
        );
    }

    #[test]
    fn operators() {
        for &sym in ["+", "-", "*", "/"].iter() {
            let op = Operator::from_token(sym).unwrap();
            assert_eq!(op.to_string(), sym);
        }
        assert_eq!(Operator::from_token("%"), None);
        assert_eq!(Operator::Div.symbol(), '/');
    }

    #[test]
    fn positions() {
        let mut lex = Tokenizer::new("1 2 +");
        assert_eq!(lex.position(), 0);
        assert_eq!(lex.next(), Some(Ok((1, Token::Number(Number::Int(1))))));
        assert_eq!(lex.next(), Some(Ok((2, Token::Number(Number::Int(2))))));
        assert_eq!(lex.next(), Some(Ok((3, Token::BOp(Operator::Add)))));
        assert_eq!(lex.position(), 3);
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn bad_tokens() {
        let bad = |token: &str, position: usize| -> Result<Vec<Token>, EvalError> {
            Err(EvalError::from(Invalid::BadToken {
                token: token.to_string(),
                position,
            }))
        };
        assert_eq!(tokens("3 x +"), bad("x", 2));
        assert_eq!(tokens("1.2.3"), bad("1.2.3", 1));
        assert_eq!(tokens("inf"), bad("inf", 1));
        assert_eq!(tokens("3\t4"), bad("3\t4", 1));
        assert_eq!(tokens("2 ++"), bad("++", 2));
        assert_eq!(tokens("99999999999999999999"), bad("99999999999999999999", 1));
    }

    #[test]
    fn empty_tokens() {
        let empty = |position: usize| -> Result<Vec<Token>, EvalError> {
            Err(EvalError::from(Invalid::EmptyToken { position }))
        };
        assert_eq!(tokens(""), empty(1));
        assert_eq!(tokens("3  4 +"), empty(2));
        assert_eq!(tokens(" 3 4 +"), empty(1));
        assert_eq!(tokens("3 4 +  2"), empty(4));
    }

    #[test]
    fn trailing_spaces_dropped() {
        let expect = vec![
            Token::Number(Number::Int(3)),
            Token::Number(Number::Int(4)),
            Token::BOp(Operator::Add),
        ];
        assert_eq!(tokens("3 4 + "), Ok(expect.clone()));
        assert_eq!(tokens("3 4 +    "), Ok(expect));
        assert_eq!(tokens("   "), Ok(vec![]));
        assert_eq!(tokens(" "), Ok(vec![]));
    }
}

//! JSON parser.
//!
//! Recursive descent over the lexer's tokens. The parser sits outside the
//! value model and builds trees only through its public construction API.

use super::array::Array;
use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::number::Number;
use super::object::Object;
use super::value::Value;
use crate::error::{ErrorCode, JsonResult};

/// JSON parser with resource limits.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        let mut lexer = Lexer::new(input, limits)?;
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            limits,
            depth: 0,
        })
    }

    /// Parse the whole input as a single value.
    pub fn parse(&mut self) -> JsonResult<Value> {
        let value = self.parse_value()?;

        // Ensure no trailing content
        if self.current != Token::Eof {
            return Err(self.invalid());
        }

        Ok(value)
    }

    fn invalid(&self) -> ErrorCode {
        ErrorCode::InvalidJson {
            offset: self.lexer.position(),
        }
    }

    fn advance(&mut self) -> JsonResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse_value(&mut self) -> JsonResult<Value> {
        let value = match &self.current {
            Token::Null => Value::Null,
            Token::True => Value::from(true),
            Token::False => Value::from(false),
            Token::String(s) => Value::from(s.as_str()),
            Token::Number { text, integral } => Value::from(parse_number(text, *integral)?),
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            _ => return Err(self.invalid()),
        };
        self.advance()?;
        Ok(value)
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            tracing::debug!(
                depth = self.depth,
                limit = self.limits.max_nesting_depth,
                "nesting limit exceeded"
            );
            return Err(ErrorCode::NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> JsonResult<Value> {
        self.enter()?;

        // Consume opening brace
        self.advance()?;

        let mut object = Object::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(object));
        }

        loop {
            let key = match &self.current {
                Token::String(s) => s.clone(),
                _ => return Err(self.invalid()),
            };
            self.advance()?;

            if object.contains_key(&key) {
                return Err(ErrorCode::DuplicateKey(key));
            }

            if self.current != Token::Colon {
                return Err(self.invalid());
            }
            self.advance()?;

            let value = self.parse_value()?;
            object.insert(key, value);

            if object.len() as u64 > self.limits.max_object_fields {
                return Err(ErrorCode::TooManyFields(
                    object.len() as u64,
                    self.limits.max_object_fields,
                ));
            }

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    // Trailing comma is not allowed in JSON
                    if self.current == Token::RightBrace {
                        return Err(self.invalid());
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.invalid()),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(object))
    }

    fn parse_array(&mut self) -> JsonResult<Value> {
        self.enter()?;

        // Consume opening bracket
        self.advance()?;

        let mut array = Array::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            if array.len() as u64 > self.limits.max_array_length {
                return Err(ErrorCode::ArrayTooLong(
                    array.len() as u64,
                    self.limits.max_array_length,
                ));
            }

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    // Trailing comma is not allowed in JSON
                    if self.current == Token::RightBracket {
                        return Err(self.invalid());
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.invalid()),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(array))
    }
}

/// Integral literals that fit in an i64 stay integers; everything else is a
/// float and must be finite. `-0` has no integer form and becomes `-0.0`.
fn parse_number(text: &str, integral: bool) -> JsonResult<Number> {
    if integral {
        match text.parse::<i64>() {
            Ok(0) if text.starts_with('-') => return Ok(Number::Float(-0.0)),
            Ok(n) => return Ok(Number::Integer(n)),
            Err(_) => {}
        }
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| ErrorCode::NumberOutOfRange(text.to_string()))
}

/// Parse JSON text with default limits.
pub fn parse(input: &str) -> JsonResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<Value> {
    let mut parser = Parser::new(input, limits)?;
    let value = parser.parse()?;
    tracing::trace!(bytes = input.len(), kind = value.type_name(), "parsed document");
    Ok(value)
}

/// Parse raw bytes, validating UTF-8 first.
pub fn parse_bytes(input: &[u8], limits: Limits) -> JsonResult<Value> {
    let text = std::str::from_utf8(input).map_err(|_| ErrorCode::InvalidUtf8)?;
    parse_with_limits(text, limits)
}

impl std::str::FromStr for Value {
    type Err = ErrorCode;

    fn from_str(s: &str) -> JsonResult<Self> {
        parse(s)
    }
}

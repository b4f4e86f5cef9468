//! JSON lexer/tokenizer.
//!
//! Turns input text into tokens for the parser. Strings are unescaped here,
//! including `\u` escapes and surrogate pairs; number literals are checked
//! against the JSON grammar but left as text.

use super::limits::Limits;
use crate::error::{ErrorCode, JsonResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number literal as written
    Number {
        /// Raw literal text.
        text: String,
        /// True when the literal has no fraction and no exponent.
        integral: bool,
    },
    /// End of input
    Eof,
}

/// JSON lexer that tokenizes input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(ErrorCode::InputTooLarge(
                input.len() as u64,
                limits.max_input_size,
            ));
        }

        Ok(Self {
            input,
            pos: 0,
            limits,
        })
    }

    /// Get the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn invalid(&self) -> ErrorCode {
        ErrorCode::InvalidJson { offset: self.pos }
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> JsonResult<Token> {
        self.skip_whitespace();

        let token = match self.peek() {
            None => return Ok(Token::Eof),
            Some(b'{') => Token::LeftBrace,
            Some(b'}') => Token::RightBrace,
            Some(b'[') => Token::LeftBracket,
            Some(b']') => Token::RightBracket,
            Some(b':') => Token::Colon,
            Some(b',') => Token::Comma,
            Some(b'"') => return self.read_string(),
            Some(b'-' | b'0'..=b'9') => return self.read_number(),
            Some(b't') => return self.read_literal("true", Token::True),
            Some(b'f') => return self.read_literal("false", Token::False),
            Some(b'n') => return self.read_literal("null", Token::Null),
            Some(_) => return Err(self.invalid()),
        };
        self.pos += 1;
        Ok(token)
    }

    /// Read a string token, handling escape sequences.
    fn read_string(&mut self) -> JsonResult<Token> {
        // Opening quote
        self.advance();

        let mut result = String::new();

        loop {
            match self.peek() {
                None => return Err(self.invalid()),
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let escaped = self.read_escape_sequence()?;
                    result.push(escaped);
                }
                // Raw control characters must be escaped inside strings
                Some(b) if b < 0x20 => return Err(self.invalid()),
                Some(b) if b < 0x80 => {
                    self.pos += 1;
                    result.push(char::from(b));
                }
                Some(_) => {
                    let ch = self.input[self.pos..]
                        .chars()
                        .next()
                        .ok_or(ErrorCode::InvalidUtf8)?;
                    self.pos += ch.len_utf8();
                    result.push(ch);
                }
            }

            if result.len() as u64 > self.limits.max_string_length {
                tracing::debug!(
                    limit = self.limits.max_string_length,
                    "string length limit exceeded"
                );
                return Err(ErrorCode::StringTooLong(
                    result.len() as u64,
                    self.limits.max_string_length,
                ));
            }
        }

        Ok(Token::String(result))
    }

    /// Read an escape sequence after a backslash.
    fn read_escape_sequence(&mut self) -> JsonResult<char> {
        match self.advance() {
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(),
            _ => Err(self.invalid()),
        }
    }

    /// Read a `\uXXXX` escape, combining surrogate pairs.
    fn read_unicode_escape(&mut self) -> JsonResult<char> {
        let unit = u32::from(self.read_hex4()?);

        if (0xD800..=0xDBFF).contains(&unit) {
            // A high surrogate must be followed by an escaped low surrogate
            if self.advance() != Some(b'\\') || self.advance() != Some(b'u') {
                return Err(ErrorCode::UnpairedSurrogate(unit));
            }
            let low = u32::from(self.read_hex4()?);
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ErrorCode::UnpairedSurrogate(unit));
            }
            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).ok_or(ErrorCode::UnpairedSurrogate(unit));
        }

        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(ErrorCode::UnpairedSurrogate(unit));
        }

        char::from_u32(unit).ok_or(ErrorCode::UnpairedSurrogate(unit))
    }

    /// Read 4 hex digits and return the value.
    fn read_hex4(&mut self) -> JsonResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let digit = match self.advance() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return Err(self.invalid()),
            };
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Read a number token.
    fn read_number(&mut self) -> JsonResult<Token> {
        let start = self.pos;
        let mut integral = true;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                // No leading zeros
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.invalid());
                }
            }
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(self.invalid()),
        }

        if self.peek() == Some(b'.') {
            integral = false;
            self.pos += 1;
            if self.skip_digits() == 0 {
                return Err(self.invalid());
            }
        }

        if let Some(b'e' | b'E') = self.peek() {
            integral = false;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.invalid());
            }
        }

        Ok(Token::Number {
            text: self.input[start..self.pos].to_string(),
            integral,
        })
    }

    /// Expect a keyword literal at the current position.
    fn read_literal(&mut self, word: &str, token: Token) -> JsonResult<Token> {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            Ok(token)
        } else {
            Err(self.invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> JsonResult<Vec<Token>> {
        let mut lexer = Lexer::new(input, Limits::lenient())?;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn number(text: &str, integral: bool) -> Token {
        Token::Number {
            text: text.to_string(),
            integral,
        }
    }

    #[test]
    fn test_structural_tokens() {
        let tokens = lex("{}[],:").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_literals() {
        let tokens = lex("null true false").unwrap();
        assert_eq!(tokens, vec![Token::Null, Token::True, Token::False]);
        assert!(lex("nul").is_err());
        assert!(lex("tru").is_err());
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\nb\tc\/d""#).unwrap();
        assert_eq!(tokens, vec![Token::String("a\nb\tc/d".to_string())]);
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(lex(r#""\u0041""#).unwrap(), vec![Token::String("A".to_string())]);
        assert_eq!(
            lex(r#""\uD83D\uDE00""#).unwrap(),
            vec![Token::String("\u{1F600}".to_string())]
        );
    }

    #[test]
    fn test_raw_utf8_passes_through() {
        assert_eq!(
            lex("\"h\u{e9}\u{2603}\"").unwrap(),
            vec![Token::String("h\u{e9}\u{2603}".to_string())]
        );
    }

    #[test]
    fn test_lone_surrogates_rejected() {
        assert_eq!(lex(r#""\uD800""#), Err(ErrorCode::UnpairedSurrogate(0xD800)));
        assert_eq!(lex(r#""\uDC00""#), Err(ErrorCode::UnpairedSurrogate(0xDC00)));
        assert_eq!(
            lex(r#""\uD800\u0041""#),
            Err(ErrorCode::UnpairedSurrogate(0xD800))
        );
    }

    #[test]
    fn test_raw_control_character_rejected() {
        assert!(lex("\"a\nb\"").is_err());
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 -123 0 1.5 -2e10 3E-2").unwrap();
        assert_eq!(
            tokens,
            vec![
                number("42", true),
                number("-123", true),
                number("0", true),
                number("1.5", false),
                number("-2e10", false),
                number("3E-2", false),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(lex("01").is_err());
        assert!(lex("-").is_err());
        assert!(lex("1.").is_err());
        assert!(lex("1e").is_err());
        assert!(lex(".5").is_err());
    }

    #[test]
    fn test_error_offset() {
        let mut lexer = Lexer::new("  @", Limits::lenient()).unwrap();
        assert_eq!(lexer.next_token(), Err(ErrorCode::InvalidJson { offset: 2 }));
    }

    #[test]
    fn test_input_too_large() {
        let mut limits = Limits::strict();
        limits.max_input_size = 10;
        let result = Lexer::new("this is more than 10 bytes", limits);
        assert!(matches!(result, Err(ErrorCode::InputTooLarge(26, 10))));
    }
}

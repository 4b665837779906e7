use crate::language;
use crate::lexer::Token;
use crate::lexer::rules::{MatchResult, LexerRule};

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

// Identifiers

#[derive(Debug, Clone)]
pub struct IdentifierRule {
    buf: String,
}

impl IdentifierRule {
    pub fn new() -> Self {
        IdentifierRule { buf: String::new() }
    }
}

// Identifiers are ( :alphanumeric: | '_' ), first character cannot be a digit
impl LexerRule for IdentifierRule {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn current_state(&self) -> MatchResult {
        if self.buf.is_empty() {
            MatchResult::IncompleteMatch
        } else {
            MatchResult::CompleteMatch
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        let valid =
            if self.buf.is_empty() {
                next == '_' || next.is_ascii_alphabetic()
            } else {
                is_word_char(next)
            };

        if valid {
            self.buf.push(next);
            self.current_state()
        } else {
            MatchResult::NoMatch
        }
    }

    fn get_token(&self) -> Option<Token> {
        debug_assert!(self.current_state().is_complete_match());
        Some(Token::Identifier(self.buf.clone()))
    }
}

// Integer Literals

// Decimal digit runs only. There is no sign here: negation is a prefix
// operator handled by the parser.
#[derive(Debug, Clone)]
pub struct IntegerLiteralRule {
    buf: String,
}

impl IntegerLiteralRule {
    pub fn new() -> Self {
        IntegerLiteralRule { buf: String::new() }
    }
}

impl LexerRule for IntegerLiteralRule {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn current_state(&self) -> MatchResult {
        if self.buf.is_empty() {
            MatchResult::IncompleteMatch
        } else {
            MatchResult::CompleteMatch
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        if next.is_ascii_digit() {
            self.buf.push(next);
            return MatchResult::CompleteMatch;
        }
        MatchResult::NoMatch
    }

    fn get_token(&self) -> Option<Token> {
        debug_assert!(self.current_state().is_complete_match());

        let conversion = language::IntType::from_str_radix(self.buf.as_str(), 10);
        match conversion {
            Ok(value) => Some(Token::IntegerLiteral(value)),

            // the value overflowed language::IntType - lexing itself never fails
            Err(..) => Some(Token::Illegal(self.buf.clone())),
        }
    }
}

// String Literals

// Delimited by double quotes, no escape sequence processing.
// An unterminated string is left incomplete and surfaces as an
// illegal token when the lexer hits end of input.
#[derive(Debug, Clone)]
pub struct StringLiteralRule {
    buf: String,
    // (open, closed)
    state: (bool, bool),
}

impl StringLiteralRule {
    pub fn new() -> Self {
        StringLiteralRule {
            buf: String::new(),
            state: (false, false),
        }
    }
}

impl LexerRule for StringLiteralRule {
    fn reset(&mut self) {
        self.buf.clear();
        self.state = (false, false);
    }

    fn current_state(&self) -> MatchResult {
        match self.state {
            (_, true) => MatchResult::CompleteMatch,
            _ => MatchResult::IncompleteMatch,
        }
    }

    fn try_match(&mut self, _prev: Option<char>, next: char) -> MatchResult {
        match self.state {
            (false, false) => {
                if next != '"' {
                    return MatchResult::NoMatch;
                }
                self.state = (true, false);
                MatchResult::IncompleteMatch
            },

            (true, false) => {
                if next == '"' {
                    self.state = (true, true);
                    return MatchResult::CompleteMatch;
                }
                self.buf.push(next);
                MatchResult::IncompleteMatch
            },

            // complete string - anything else will not match
            _ => MatchResult::NoMatch,
        }
    }

    fn get_token(&self) -> Option<Token> {
        if self.current_state().is_complete_match() {
            return Some(Token::StringLiteral(self.buf.clone()));
        }
        None
    }
}

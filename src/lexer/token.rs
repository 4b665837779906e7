use std::fmt;
use crate::language::IntType;

// Token Types

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // Delimiters, separators, punctuation
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Comma,
    Colon,
    Semicolon,

    // Operator symbols
    OpAssign,
    OpAdd, OpSub, OpMul, OpDiv,
    OpNot,

    OpLT, OpGT, OpLE, OpGE, OpEQ, OpNE,

    // Keywords
    Let, Fun, If, Else, Return,
    True, False,

    // Literals
    Identifier(String),
    IntegerLiteral(IntType),
    StringLiteral(String),

    // Misc
    Illegal(String),
    EOF,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::EOF)
    }
}

// user-facing rendition, used by parser error messages
impl fmt::Display for Token {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => fmt.write_str("'('"),
            Self::CloseParen => fmt.write_str("')'"),
            Self::OpenBrace => fmt.write_str("'{'"),
            Self::CloseBrace => fmt.write_str("'}'"),
            Self::Comma => fmt.write_str("','"),
            Self::Colon => fmt.write_str("':'"),
            Self::Semicolon => fmt.write_str("';'"),

            Self::OpAssign => fmt.write_str("'='"),
            Self::OpAdd => fmt.write_str("'+'"),
            Self::OpSub => fmt.write_str("'-'"),
            Self::OpMul => fmt.write_str("'*'"),
            Self::OpDiv => fmt.write_str("'/'"),
            Self::OpNot => fmt.write_str("'!'"),

            Self::OpLT => fmt.write_str("'<'"),
            Self::OpGT => fmt.write_str("'>'"),
            Self::OpLE => fmt.write_str("'<='"),
            Self::OpGE => fmt.write_str("'>='"),
            Self::OpEQ => fmt.write_str("'=='"),
            Self::OpNE => fmt.write_str("'!='"),

            Self::Let => fmt.write_str("'let'"),
            Self::Fun => fmt.write_str("'fn'"),
            Self::If => fmt.write_str("'if'"),
            Self::Else => fmt.write_str("'else'"),
            Self::Return => fmt.write_str("'return'"),
            Self::True => fmt.write_str("'true'"),
            Self::False => fmt.write_str("'false'"),

            Self::Identifier(name) => write!(fmt, "identifier '{}'", name),
            Self::IntegerLiteral(value) => write!(fmt, "integer '{}'", value),
            Self::StringLiteral(..) => fmt.write_str("string literal"),

            Self::Illegal(text) => write!(fmt, "illegal input '{}'", text),
            Self::EOF => fmt.write_str("end of input"),
        }
    }
}

// character offsets into the source text
pub type TokenIndex = usize;

// include only character indexes in the output
// if a lexeme needs to be rendered, the relevant string can be extracted then
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub index: TokenIndex,
    pub length: usize,
}

/// Token Output
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMeta {
    pub token: Token,
    pub span: Span,
    pub newline: bool,  // true if this is the first token after the start of a new line
}

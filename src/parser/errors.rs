use std::fmt;
use std::error::Error;

use crate::lexer::{Span, Token, TokenMeta};
use crate::debug::SourceError;
use crate::debug::symbol::{DebugSymbol, TokenIndex};


pub type ErrorKind = ParserErrorKind;

// Specifies the actual error that occurred
#[derive(Debug, Clone)]
pub enum ParserErrorKind {
    IllegalToken(String),
    ExpectedStartOfExpr(Token),
    ExpectedToken { expected: Token, found: Token },
    ExpectedIdentifier(Token),
}

impl fmt::Display for ParserErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalToken(lexeme) =>
                write!(fmt, "unable to parse the input '{}'", lexeme),
            Self::ExpectedStartOfExpr(found) =>
                write!(fmt, "expected the start of an expression, found {}", found),
            Self::ExpectedToken { expected, found } =>
                write!(fmt, "expected {}, found {}", expected, found),
            Self::ExpectedIdentifier(found) =>
                write!(fmt, "expected an identifier, found {}", found),
        }
    }
}

// Provide information about the type of syntactic construct from which the error originated
#[derive(Debug, Clone, Copy)]
pub enum ContextTag {
    TopLevel,
    Stmt,
    LetStmt,
    ReturnStmt,
    Expr,
    BinaryOpExpr,
    UnaryOpExpr,
    CallExpr,
    IfExpr,
    FunDefExpr,
    Atom,
    Group,
    Block,
    Sync,
}

// Since ErrorContext is threaded through the recursive descent call stack,
// errors are built up in two stages: a prototype carrying just the kind is
// raised at the failure site, and the context frame is attached at the
// statement level where the ErrorContext is available.
#[derive(Debug)]
pub struct ErrorPrototype {
    kind: ErrorKind,
}

impl From<ParserErrorKind> for ErrorPrototype {
    fn from(kind: ParserErrorKind) -> Self {
        ErrorPrototype { kind }
    }
}

#[derive(Debug)]
pub struct ParserError {
    kind: ErrorKind,
    symbol: Option<DebugSymbol>,
}

impl ParserError {
    pub fn from_prototype(proto: ErrorPrototype, context: ErrorContext) -> Self {
        let frame = context.take();
        log::debug!("parse error in {:?}: {}", frame.context(), proto.kind);

        ParserError {
            kind: proto.kind,
            symbol: frame.as_debug_symbol(),
        }
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }
}

impl Error for ParserError {}

impl SourceError for ParserError {
    fn debug_symbol(&self) -> Option<&DebugSymbol> { self.symbol.as_ref() }
}

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "syntax error: {}", self.kind)
    }
}


// Structures used by the parser for error handling and synchronization

#[derive(Debug, Clone)]
pub struct ErrorContext {
    stack: Vec<ContextFrame>,
}

impl ErrorContext {
    pub fn new(base: ContextTag) -> Self {
        ErrorContext {
            stack: vec![ ContextFrame::new(base) ],
        }
    }

    pub fn frame(&self) -> &ContextFrame { self.stack.last().unwrap() }
    pub fn frame_mut(&mut self) -> &mut ContextFrame { self.stack.last_mut().unwrap() }

    pub fn push(&mut self, tag: ContextTag) { self.stack.push(ContextFrame::new(tag)) }

    pub fn push_continuation(&mut self, tag: ContextTag) {
        let start = self.frame().start().map(|o| o.to_owned());
        self.push(tag);
        self.frame_mut().set_span(start, None);
    }

    pub fn pop(&mut self) -> ContextFrame {
        assert!(self.stack.len() > 1);
        self.stack.pop().unwrap()
    }

    pub fn pop_extend(&mut self) {
        let inner_frame = self.pop();
        self.frame_mut().extend(inner_frame);
    }

    pub fn take(mut self) -> ContextFrame {
        assert!(!self.stack.is_empty());
        self.stack.pop().unwrap()
    }

    // for convenience
    pub fn set_start(&mut self, token: &TokenMeta) { self.frame_mut().set_start(token) }
    pub fn set_end(&mut self, token: &TokenMeta) { self.frame_mut().set_end(token) }
}

#[derive(Debug, Clone)]
pub struct ContextFrame {
    tag: ContextTag,
    start: Option<Span>,
    end: Option<Span>,
}

fn span_lt(first: &Span, second: &Span) -> bool { first.index < second.index }

impl ContextFrame {
    pub fn new(tag: ContextTag) -> Self { ContextFrame { tag, start: None, end: None } }

    pub fn context(&self) -> ContextTag { self.tag }
    pub fn start(&self) -> Option<&Span> { self.start.as_ref() }

    pub fn set_start(&mut self, token: &TokenMeta) {
        self.start.replace(token.span.clone());
    }

    pub fn set_end(&mut self, token: &TokenMeta) {
        self.end.replace(token.span.clone());
    }

    pub fn set_span(&mut self, start: Option<Span>, end: Option<Span>) {
        self.start = start;
        self.end = end;
    }

    pub fn extend(&mut self, other: ContextFrame) {
        if self.start.as_ref().and(other.start.as_ref()).is_some() {
            if span_lt(other.start.as_ref().unwrap(), self.start.as_ref().unwrap()) {
                self.start = other.start;
            }
        } else if other.start.is_some() {
            self.start = other.start;
        }

        if self.end.as_ref().and(other.end.as_ref()).is_some() {
            if span_lt(self.end.as_ref().unwrap(), other.end.as_ref().unwrap()) {
                self.end = other.end;
            }
        } else if other.end.is_some() {
            self.end = other.end;
        }
    }

    pub fn as_debug_symbol(&self) -> Option<DebugSymbol> {
        match (self.start.clone(), self.end.clone()) {

            (Some(start), Some(end)) => {
                let start_index = start.index;
                let end_index = end.index + TokenIndex::from(end.length);

                Some((start_index, end_index).into())
            },

            (Some(span), None) | (None, Some(span)) => {
                let start_index = span.index;
                let end_index = span.index + TokenIndex::from(span.length);

                Some((start_index, end_index).into())
            },

            (None, None) => None,
        }
    }
}

impl From<&ContextFrame> for DebugSymbol {
    fn from(frame: &ContextFrame) -> Self {
        frame.as_debug_symbol().expect("empty context frame")
    }
}
use std::fmt;
use std::error::Error;

use crate::parser::operator::{UnaryOp, BinaryOp};
use crate::runtime::Value;


pub type ExecResult<T> = Result<T, Unwind>;

#[derive(Debug, Clone)]
pub enum ErrorKind {
    NameNotDefined(String),
    BinaryTypeMismatch(BinaryOp, &'static str, &'static str),
    UnsupportedBinaryOperand(BinaryOp, &'static str),
    UnsupportedUnaryOperand(UnaryOp, &'static str),
    NotCallable(&'static str),
    WrongArgumentCount { expected: usize, got: usize },
    DivideByZero,
}

#[derive(Debug, Clone)]
pub struct RuntimeError {
    kind: ErrorKind,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind) -> Self {
        RuntimeError { kind }
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }
}

impl From<ErrorKind> for RuntimeError {
    fn from(kind: ErrorKind) -> Self {
        RuntimeError::new(kind)
    }
}

impl Error for RuntimeError {}

impl fmt::Display for RuntimeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ErrorKind::NameNotDefined(name) =>
                write!(fmt, "identifier not found: {}", name),
            ErrorKind::BinaryTypeMismatch(op, lhs_type, rhs_type) =>
                write!(fmt, "type mismatch: {} {} {}", lhs_type, op, rhs_type),
            ErrorKind::UnsupportedBinaryOperand(op, operand_type) =>
                write!(fmt, "unknown operator: {} {} {}", operand_type, op, operand_type),
            ErrorKind::UnsupportedUnaryOperand(op, operand_type) =>
                write!(fmt, "unknown operator: {}{}", op, operand_type),
            ErrorKind::NotCallable(callee_type) =>
                write!(fmt, "not a function: {}", callee_type),
            ErrorKind::WrongArgumentCount { expected, got } =>
                write!(fmt, "wrong number of arguments: expected {}, got {}", expected, got),
            ErrorKind::DivideByZero =>
                fmt.write_str("division by zero"),
        }
    }
}


// Evaluation unwinds through the Err channel for both runtime errors and
// return statements, so a single `?` propagates either one. The Return
// variant must never escape: a function call boundary (and the top level)
// converts it back into a plain value.
#[derive(Debug)]
pub enum Unwind {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

impl From<ErrorKind> for Unwind {
    fn from(kind: ErrorKind) -> Self {
        Unwind::Error(RuntimeError::new(kind))
    }
}

use core::fmt;
use std::rc::Rc;

use static_assertions::const_assert_eq;

use crate::language::IntType;
use crate::parser::expr::FunctionDef;
use crate::parser::stmt::Block;
use crate::runtime::Environment;


#[cfg(target_pointer_width = "64")]
const_assert_eq!(core::mem::size_of::<Value>(), 24);

// Fundamental data value type
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    BoolTrue,
    BoolFalse,

    Integer(IntType),
    String(Rc<str>),
    Function(Rc<Function>),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    // only false and nil are falsy, everything else (including zero and
    // the empty string) is truthy
    pub fn truth_value(&self) -> bool {
        !matches!(self, Self::Nil | Self::BoolFalse)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "NIL",
            Self::BoolTrue | Self::BoolFalse => "BOOLEAN",
            Self::Integer(..) => "INTEGER",
            Self::String(..) => "STRING",
            Self::Function(..) => "FUNCTION",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { Self::BoolTrue } else { Self::BoolFalse }
    }
}

impl From<IntType> for Value {
    fn from(value: IntType) -> Self {
        Self::Integer(value)
    }
}

// Structural equality for primitives, identity for functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::BoolTrue, Self::BoolTrue) => true,
            (Self::BoolFalse, Self::BoolFalse) => true,
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,
            (Self::Function(lhs), Self::Function(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => fmt.write_str("nil"),
            Self::BoolTrue => fmt.write_str("true"),
            Self::BoolFalse => fmt.write_str("false"),
            Self::Integer(value) => write!(fmt, "{}", value),
            Self::String(value) => fmt.write_str(value),
            Self::Function(fun) => write!(fmt, "fn({}) {{...}}", fun.params().join(", ")),
        }
    }
}


// A user defined function value: the shared definition plus the environment
// captured at the definition site (lexical closure).
pub struct Function {
    params: Rc<[String]>,
    body: Rc<Block>,
    env: Rc<Environment>,
}

impl Function {
    pub fn new(fundef: &FunctionDef, env: Rc<Environment>) -> Self {
        Function {
            params: Rc::clone(fundef.params()),
            body: Rc::clone(fundef.body()),
            env,
        }
    }

    pub fn params(&self) -> &[String] { &self.params }
    pub fn body(&self) -> &Block { &self.body }
    pub fn env(&self) -> &Rc<Environment> { &self.env }
}

// manual impl because the captured environment can refer back to this
// function, and a derived Debug would chase the cycle
impl fmt::Debug for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Function")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

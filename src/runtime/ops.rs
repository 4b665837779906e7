//! Operator implementations over `Value` operands.
//!
//! Arithmetic wraps on overflow rather than panicking. Only `==`/`!=` are
//! total across types; everything else reports `BinaryTypeMismatch` for
//! mixed operand types and `UnsupportedBinaryOperand` for same-typed
//! operands with no such operation.

use std::rc::Rc;

use crate::parser::operator::{UnaryOp, BinaryOp};
use crate::runtime::Value;
use crate::runtime::errors::{ExecResult, ErrorKind};


pub fn eval_neg(operand: &Value) -> ExecResult<Value> {
    match operand {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        _ => Err(ErrorKind::UnsupportedUnaryOperand(UnaryOp::Neg, operand.type_name()).into()),
    }
}

pub fn eval_not(operand: &Value) -> ExecResult<Value> {
    Ok(Value::from(!operand.truth_value()))
}

fn binary_operand_error(op: BinaryOp, lhs: &Value, rhs: &Value) -> ErrorKind {
    if lhs.type_name() == rhs.type_name() {
        ErrorKind::UnsupportedBinaryOperand(op, lhs.type_name())
    } else {
        ErrorKind::BinaryTypeMismatch(op, lhs.type_name(), rhs.type_name())
    }
}

pub fn eval_add(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs.wrapping_add(*rhs))),

        (Value::String(lhs), Value::String(rhs)) => {
            let mut buf = String::with_capacity(lhs.len() + rhs.len());
            buf.push_str(lhs);
            buf.push_str(rhs);
            Ok(Value::String(Rc::from(buf)))
        },

        _ => Err(binary_operand_error(BinaryOp::Add, lhs, rhs).into()),
    }
}

pub fn eval_sub(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs.wrapping_sub(*rhs))),
        _ => Err(binary_operand_error(BinaryOp::Sub, lhs, rhs).into()),
    }
}

pub fn eval_mul(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs.wrapping_mul(*rhs))),
        _ => Err(binary_operand_error(BinaryOp::Mul, lhs, rhs).into()),
    }
}

pub fn eval_div(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(..), Value::Integer(0)) => Err(ErrorKind::DivideByZero.into()),

        // wrapping_div so that IntType::MIN / -1 wraps instead of panicking
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs.wrapping_div(*rhs))),

        _ => Err(binary_operand_error(BinaryOp::Div, lhs, rhs).into()),
    }
}

pub fn eval_lt(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::from(lhs < rhs)),
        _ => Err(binary_operand_error(BinaryOp::LT, lhs, rhs).into()),
    }
}

pub fn eval_gt(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::from(lhs > rhs)),
        _ => Err(binary_operand_error(BinaryOp::GT, lhs, rhs).into()),
    }
}

pub fn eval_le(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::from(lhs <= rhs)),
        _ => Err(binary_operand_error(BinaryOp::LE, lhs, rhs).into()),
    }
}

pub fn eval_ge(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::from(lhs >= rhs)),
        _ => Err(binary_operand_error(BinaryOp::GE, lhs, rhs).into()),
    }
}

// equality is total: values of different types compare unequal
pub fn eval_eq(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    Ok(Value::from(lhs == rhs))
}

pub fn eval_ne(lhs: &Value, rhs: &Value) -> ExecResult<Value> {
    Ok(Value::from(lhs != rhs))
}

use std::rc::Rc;

use log::debug;

use crate::parser::expr::Expr;
use crate::parser::stmt::Block;
use crate::parser::operator::{UnaryOp, BinaryOp};
use crate::runtime::{Environment, Function, Unwind, Value};
use crate::runtime::ops;
use crate::runtime::errors::{ExecResult, ErrorKind};
use crate::interpreter::ExecContext;


// tracks the local scope that expressions are evaluated against
pub struct EvalContext<'a> {
    local_env: &'a Rc<Environment>,
}

impl<'a> From<&'a Rc<Environment>> for EvalContext<'a> {
    fn from(local_env: &'a Rc<Environment>) -> Self {
        EvalContext { local_env }
    }
}

impl EvalContext<'_> {

    pub fn eval_variant(&self, expr: &Expr) -> ExecResult<Value> {
        match expr {
            Expr::Identifier(name) => self.eval_name_lookup(name),

            Expr::BooleanLiteral(value) => Ok(Value::from(*value)),
            Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Expr::StringLiteral(value) => Ok(Value::String(Rc::clone(value))),

            Expr::UnaryOp(op, operand) => self.eval_unary_op(*op, operand),
            Expr::BinaryOp(op, operands) => {
                let (lhs, rhs) = &**operands;
                self.eval_binary_op(*op, lhs, rhs)
            },

            Expr::If { condition, branch, else_branch } =>
                self.eval_if_expr(condition, branch, else_branch.as_deref()),

            Expr::FunctionDef(fundef) => {
                // the *current* environment is captured, making the value a closure
                let function = Function::new(fundef, Rc::clone(self.local_env));
                Ok(Value::Function(Rc::new(function)))
            },

            Expr::Call { callee, args } => self.eval_call_expr(callee, args),
        }
    }

    fn eval_name_lookup(&self, name: &str) -> ExecResult<Value> {
        self.local_env.find_value(name)
            .ok_or_else(|| ErrorKind::NameNotDefined(name.to_string()).into())
    }

    fn eval_unary_op(&self, op: UnaryOp, operand: &Expr) -> ExecResult<Value> {
        let operand = self.eval_variant(operand)?;

        match op {
            UnaryOp::Neg => ops::eval_neg(&operand),
            UnaryOp::Not => ops::eval_not(&operand),
        }
    }

    fn eval_binary_op(&self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> ExecResult<Value> {
        // operands evaluate left to right, and an error in the left operand
        // short-circuits before the right one runs
        let lhs = self.eval_variant(lhs)?;
        let rhs = self.eval_variant(rhs)?;

        match op {
            BinaryOp::Add => ops::eval_add(&lhs, &rhs),
            BinaryOp::Sub => ops::eval_sub(&lhs, &rhs),
            BinaryOp::Mul => ops::eval_mul(&lhs, &rhs),
            BinaryOp::Div => ops::eval_div(&lhs, &rhs),
            BinaryOp::LT => ops::eval_lt(&lhs, &rhs),
            BinaryOp::GT => ops::eval_gt(&lhs, &rhs),
            BinaryOp::LE => ops::eval_le(&lhs, &rhs),
            BinaryOp::GE => ops::eval_ge(&lhs, &rhs),
            BinaryOp::EQ => ops::eval_eq(&lhs, &rhs),
            BinaryOp::NE => ops::eval_ne(&lhs, &rhs),
        }
    }

    fn eval_if_expr(&self, condition: &Expr, branch: &Block, else_branch: Option<&Block>) -> ExecResult<Value> {
        let condition = self.eval_variant(condition)?;

        if condition.truth_value() {
            self.eval_block(branch)
        } else if let Some(else_branch) = else_branch {
            self.eval_block(else_branch)
        } else {
            Ok(Value::Nil)
        }
    }

    // if-branches execute in the current scope, only function calls
    // introduce a new one
    fn eval_block(&self, block: &Block) -> ExecResult<Value> {
        let mut ctx = ExecContext::from(self.local_env);
        ctx.exec_block(block)
    }

    fn eval_call_expr(&self, callee: &Expr, args: &[Expr]) -> ExecResult<Value> {
        let callee = self.eval_variant(callee)?;

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval_variant(arg)?);
        }

        let function = match callee {
            Value::Function(function) => function,
            value => return Err(ErrorKind::NotCallable(value.type_name()).into()),
        };

        if function.params().len() != arg_values.len() {
            return Err(ErrorKind::WrongArgumentCount {
                expected: function.params().len(),
                got: arg_values.len(),
            }.into());
        }

        debug!("calling fn({}) with {} args", function.params().join(", "), arg_values.len());

        // parameters bind in a fresh child of the environment captured at the
        // definition site, never the caller's scope
        let local_env = Environment::new_enclosed(function.env());
        for (name, value) in function.params().iter().zip(arg_values) {
            local_env.insert_value(name.clone(), value);
        }

        let mut ctx = ExecContext::from(&local_env);
        match ctx.exec_block(function.body()) {
            Err(Unwind::Return(value)) => Ok(value),
            result => result,
        }
    }
}

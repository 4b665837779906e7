use std::rc::Rc;

use crate::parser::expr::Expr;
use crate::parser::stmt::{Block, Stmt, StmtMeta};
use crate::runtime::{Environment, Unwind, Value};
use crate::runtime::errors::ExecResult;
use crate::interpreter::EvalContext;


pub struct ExecContext<'a> {
    local_env: &'a Rc<Environment>,
}

impl<'a> From<&'a Rc<Environment>> for ExecContext<'a> {
    fn from(local_env: &'a Rc<Environment>) -> Self {
        ExecContext { local_env }
    }
}

impl ExecContext<'_> {

    pub fn exec(&mut self, stmt: &StmtMeta) -> ExecResult<Option<Value>> {
        self.exec_variant(stmt.variant())
    }

    pub fn exec_variant(&mut self, stmt: &Stmt) -> ExecResult<Option<Value>> {
        match stmt {
            Stmt::Let { name, init } => {
                let value = self.eval(init)?;
                self.local_env.insert_value(name.clone(), value);
                Ok(None)
            },

            Stmt::Return(expr) => {
                let value = self.eval(expr)?;
                Err(Unwind::Return(value))
            },

            Stmt::Expression(expr) => Ok(Some(self.eval(expr)?)),
        }
    }

    /// Runs the statements of a block in order; the block's value is that of
    /// its last value-producing statement, or nil.
    pub fn exec_block(&mut self, block: &Block) -> ExecResult<Value> {
        let mut result = None;

        for stmt in block.stmts() {
            if let Some(value) = self.exec(stmt)? {
                result.replace(value);
            }
        }

        Ok(result.unwrap_or(Value::Nil))
    }

    fn eval(&self, expr: &Expr) -> ExecResult<Value> {
        EvalContext::from(self.local_env).eval_variant(expr)
    }
}

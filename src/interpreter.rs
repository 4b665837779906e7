use std::rc::Rc;

pub mod eval;
pub mod exec;

#[cfg(test)]
mod tests;

pub use eval::EvalContext;
pub use exec::ExecContext;

use crate::parser::stmt::StmtMeta;
use crate::runtime::{Environment, RuntimeError, Unwind, Value};


/// Executes a parsed program against an environment and yields the value of
/// the last value-producing statement, if any. A top level `return` ends the
/// program early with that value; the `Unwind::Return` marker never escapes.
pub fn interpret(program: &[StmtMeta], env: &Rc<Environment>) -> Result<Option<Value>, RuntimeError> {
    let mut result = None;

    for stmt in program {
        let mut ctx = ExecContext::from(env);

        match ctx.exec(stmt) {
            Ok(Some(value)) => { result.replace(value); },
            Ok(None) => { },

            Err(Unwind::Return(value)) => return Ok(Some(value)),
            Err(Unwind::Error(error)) => return Err(error),
        }
    }

    Ok(result)
}

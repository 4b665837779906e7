use std::rc::Rc;

use crate::language::IntType;
use crate::parser::stmt::Block;
use crate::parser::operator::{BinaryOp, UnaryOp};


#[derive(Debug, Clone)]
pub enum Expr {

    Identifier(String),

    BooleanLiteral(bool),

    IntegerLiteral(IntType),

    StringLiteral(Rc<str>),

    UnaryOp(UnaryOp, Box<Expr>),

    BinaryOp(BinaryOp, Box<(Expr, Expr)>),

    If {
        condition: Box<Expr>,
        branch: Rc<Block>,
        else_branch: Option<Rc<Block>>,
    },

    FunctionDef(FunctionDef),

    Call {
        callee: Box<Expr>,
        args: Box<[Expr]>,
    },

}

impl Expr {
    pub fn unary_op(op: UnaryOp, operand: Expr) -> Self {
        Self::UnaryOp(op, Box::new(operand))
    }

    pub fn binary_op(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::BinaryOp(op, Box::new((lhs, rhs)))
    }

    pub fn if_expr(condition: Expr, branch: Block, else_branch: Option<Block>) -> Self {
        Self::If {
            condition: Box::new(condition),
            branch: Rc::new(branch),
            else_branch: else_branch.map(Rc::new),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args: args.into_boxed_slice(),
        }
    }
}


// Function definitions share their parameter list and body with every
// function value created from them, hence the Rc.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    params: Rc<[String]>,
    body: Rc<Block>,
}

impl FunctionDef {
    pub fn new(params: Vec<String>, body: Block) -> Self {
        FunctionDef {
            params: Rc::from(params),
            body: Rc::new(body),
        }
    }

    pub fn params(&self) -> &Rc<[String]> { &self.params }
    pub fn body(&self) -> &Rc<Block> { &self.body }
}

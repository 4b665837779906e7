use crate::debug::DebugSymbol;
use crate::parser::expr::Expr;


#[derive(Debug, Clone)]
pub enum Stmt {

    Let {
        name: String,
        init: Expr,
    },

    Return(Expr),

    Expression(Expr),

}


// Statement blocks, i.e. the braced body of a function or if-branch
#[derive(Debug, Clone)]
pub struct Block {
    suite: Box<[StmtMeta]>,
}

impl Block {
    pub fn new(suite: Vec<StmtMeta>) -> Self {
        Block { suite: suite.into_boxed_slice() }
    }

    pub fn stmts(&self) -> &[StmtMeta] { &self.suite }
}


#[derive(Debug, Clone)]
pub struct StmtMeta {
    variant: Stmt,
    symbol: DebugSymbol,
}

impl StmtMeta {
    pub fn new(variant: Stmt, symbol: DebugSymbol) -> Self {
        StmtMeta { variant, symbol }
    }

    pub fn variant(&self) -> &Stmt { &self.variant }
    pub fn take_variant(self) -> Stmt { self.variant }

    pub fn debug_symbol(&self) -> &DebugSymbol { &self.symbol }
}

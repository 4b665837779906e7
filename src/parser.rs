// Recursive descent parser

mod errors;

#[cfg(test)]
mod tests;

pub mod expr;
pub mod stmt;
pub mod operator;

pub use errors::{ParserError, ParserErrorKind, ContextFrame};

use std::rc::Rc;

use crate::lexer::{Span, Token, TokenMeta};
use crate::debug::symbol::DebugSymbol;

use expr::{Expr, FunctionDef};
use stmt::{Stmt, StmtMeta, Block};
use operator::{UnaryOp, BinaryOp, Precedence};
use errors::{ErrorKind, ErrorPrototype, ErrorContext, ContextTag};


pub struct Parser<T> where T: Iterator<Item=TokenMeta> {
    tokens: T,
    next: Option<TokenMeta>,
}

type InternalResult<T> = Result<T, ErrorPrototype>;

impl<T> Iterator for Parser<T> where T: Iterator<Item=TokenMeta> {
    type Item = Result<StmtMeta, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_stmt()
    }
}

impl<T> Parser<T> where T: Iterator<Item=TokenMeta> {

    pub fn new(tokens: T) -> Self {
        Parser { tokens, next: None }
    }

    // The lexer fuses after producing EOF, but error paths may consume the
    // EOF token itself, so keep yielding EOF instead of panicking.
    fn next_token(&mut self) -> TokenMeta {
        self.tokens.next().unwrap_or_else(|| TokenMeta {
            token: Token::EOF,
            span: Span { index: 0, length: 0 },
            newline: false,
        })
    }

    fn advance(&mut self) -> TokenMeta {
        self.next.take().unwrap_or_else(|| self.next_token())
    }

    fn peek(&mut self) -> &TokenMeta {
        if self.next.is_none() {
            self.next = Some(self.next_token());
        }
        self.next.as_ref().unwrap()
    }

    /// Parse the next top level statement, or None once end of input is reached.
    /// After an error the parser synchronizes to the next likely statement
    /// boundary, so this can keep being called to collect further errors.
    pub fn next_stmt(&mut self) -> Option<Result<StmtMeta, ParserError>> {
        if self.peek().token.is_eof() {
            return None;
        }

        let mut ctx = ErrorContext::new(ContextTag::TopLevel);

        match self.parse_stmt_meta(&mut ctx) {
            Ok(stmt) => Some(Ok(stmt)),
            Err(err) => {
                let error = ParserError::from_prototype(err, ctx);
                self.synchronize_stmt();
                Some(Err(error))
            },
        }
    }

    // Discards tokens until we reach a likely statement boundary
    fn synchronize_stmt(&mut self) {
        loop {
            let next = self.peek();

            if matches!(next.token, Token::EOF | Token::Let | Token::Return) {
                break;
            }
            if next.newline {
                break;  // a token at the start of a line restarts statement parsing
            }
            if matches!(next.token, Token::Semicolon) {
                self.advance();
                break;
            }

            self.advance();
        }
    }

    /*** Statement Parsing ***/

    /*
        statement ::= ( let-statement | return-statement | expression ) ( ";" )? ;
        let-statement ::= "let" IDENTIFIER "=" expression ;
        return-statement ::= "return" expression ;
    */

    fn parse_stmt_meta(&mut self, ctx: &mut ErrorContext) -> InternalResult<StmtMeta> {
        ctx.push(ContextTag::Stmt);

        let first = self.peek();
        ctx.set_start(first);

        let variant =
            if matches!(self.peek().token, Token::Let) {
                self.parse_let_stmt(ctx)?
            } else if matches!(self.peek().token, Token::Return) {
                self.parse_return_stmt(ctx)?
            } else {
                Stmt::Expression(self.parse_expr_variant(ctx, Precedence::Lowest)?)
            };

        // optional statement terminator
        if matches!(self.peek().token, Token::Semicolon) {
            ctx.set_end(&self.advance());
        }

        let symbol = DebugSymbol::from(ctx.frame());
        ctx.pop_extend();

        Ok(StmtMeta::new(variant, symbol))
    }

    fn parse_let_stmt(&mut self, ctx: &mut ErrorContext) -> InternalResult<Stmt> {
        ctx.push(ContextTag::LetStmt);

        let next = self.advance();
        debug_assert!(matches!(next.token, Token::Let));
        ctx.set_start(&next);

        let next = self.advance();
        ctx.set_end(&next);
        let name = match next.token {
            Token::Identifier(name) => name,
            Token::Illegal(lexeme) => return Err(ErrorKind::IllegalToken(lexeme).into()),
            token => return Err(ErrorKind::ExpectedIdentifier(token).into()),
        };

        let next = self.advance();
        ctx.set_end(&next);
        if !matches!(next.token, Token::OpAssign) {
            return Err(Self::unexpected_token(Token::OpAssign, next.token));
        }

        let init = self.parse_expr_variant(ctx, Precedence::Lowest)?;

        ctx.pop_extend();
        Ok(Stmt::Let { name, init })
    }

    fn parse_return_stmt(&mut self, ctx: &mut ErrorContext) -> InternalResult<Stmt> {
        ctx.push(ContextTag::ReturnStmt);

        let next = self.advance();
        debug_assert!(matches!(next.token, Token::Return));
        ctx.set_start(&next);

        let expr = self.parse_expr_variant(ctx, Precedence::Lowest)?;

        ctx.pop_extend();
        Ok(Stmt::Return(expr))
    }

    /*** Expression Parsing ***/

    /*
        Expressions are parsed by precedence climbing: parse a unary
        expression for the current token, then as long as the next token is
        an infix operator binding tighter than `min_prec`, consume it and
        parse its right operand with the operator's own precedence as the
        new threshold.
    */
    fn parse_expr_variant(&mut self, ctx: &mut ErrorContext, min_prec: Precedence) -> InternalResult<Expr> {
        let mut expr = self.parse_unary_expr(ctx)?;

        loop {
            // a call binds to whatever expression came immediately before it
            if matches!(self.peek().token, Token::OpenParen) {
                if Precedence::Call <= min_prec {
                    break;
                }
                expr = self.parse_call_expr(ctx, expr)?;
                continue;
            }

            let binary_op = match Self::which_binary_op(&self.peek().token) {
                Some(op) if op.precedence() > min_prec => op,
                _ => break,
            };

            ctx.push_continuation(ContextTag::BinaryOpExpr);
            ctx.set_end(&self.advance()); // consume binary_op token

            let rhs = self.parse_expr_variant(ctx, binary_op.precedence())?;
            expr = Expr::binary_op(binary_op, expr, rhs);

            ctx.pop_extend();
        }

        Ok(expr)
    }

    /*
        unary-expression ::= ( "-" | "!" ) unary-expression | atom ;
    */
    fn parse_unary_expr(&mut self, ctx: &mut ErrorContext) -> InternalResult<Expr> {
        if let Some(unary_op) = Self::which_unary_op(&self.peek().token) {
            ctx.push(ContextTag::UnaryOpExpr);
            ctx.set_start(&self.advance()); // consume unary_op token

            let operand = self.parse_expr_variant(ctx, Precedence::Prefix)?;

            ctx.pop_extend();
            return Ok(Expr::unary_op(unary_op, operand));
        }

        self.parse_atom(ctx)
    }

    /*
        atom ::= LITERAL | IDENTIFIER | group | if-expression | function-def ;
    */
    fn parse_atom(&mut self, ctx: &mut ErrorContext) -> InternalResult<Expr> {
        ctx.push(ContextTag::Atom);

        let next = self.advance();
        ctx.set_start(&next);
        ctx.set_end(&next);

        let expr = match next.token {
            Token::True => Expr::BooleanLiteral(true),
            Token::False => Expr::BooleanLiteral(false),
            Token::IntegerLiteral(value) => Expr::IntegerLiteral(value),
            Token::StringLiteral(value) => Expr::StringLiteral(Rc::from(value)),
            Token::Identifier(name) => Expr::Identifier(name),

            Token::OpenParen => self.parse_group_expr(ctx)?,
            Token::If => self.parse_if_expr(ctx)?,
            Token::Fun => self.parse_function_def(ctx)?,

            Token::Illegal(lexeme) => return Err(ErrorKind::IllegalToken(lexeme).into()),
            token => return Err(ErrorKind::ExpectedStartOfExpr(token).into()),
        };

        ctx.pop_extend();
        Ok(expr)
    }

    // group ::= "(" expression ")" ;
    // the opening paren has already been consumed
    fn parse_group_expr(&mut self, ctx: &mut ErrorContext) -> InternalResult<Expr> {
        ctx.push(ContextTag::Group);

        let inner = self.parse_expr_variant(ctx, Precedence::Lowest)?;

        let next = self.advance();
        ctx.set_end(&next);
        if !matches!(next.token, Token::CloseParen) {
            return Err(Self::unexpected_token(Token::CloseParen, next.token));
        }

        ctx.pop_extend();
        Ok(inner)
    }

    /*
        if-expression ::= "if" "(" expression ")" block ( "else" block )? ;
    */
    fn parse_if_expr(&mut self, ctx: &mut ErrorContext) -> InternalResult<Expr> {
        ctx.push(ContextTag::IfExpr);

        let next = self.advance();
        ctx.set_end(&next);
        if !matches!(next.token, Token::OpenParen) {
            return Err(Self::unexpected_token(Token::OpenParen, next.token));
        }

        let condition = self.parse_expr_variant(ctx, Precedence::Lowest)?;

        let next = self.advance();
        ctx.set_end(&next);
        if !matches!(next.token, Token::CloseParen) {
            return Err(Self::unexpected_token(Token::CloseParen, next.token));
        }

        let branch = self.parse_block(ctx)?;

        let else_branch =
            if matches!(self.peek().token, Token::Else) {
                ctx.set_end(&self.advance()); // consume "else"
                Some(self.parse_block(ctx)?)
            } else {
                None
            };

        ctx.pop_extend();
        Ok(Expr::if_expr(condition, branch, else_branch))
    }

    /*
        function-def ::= "fn" "(" parameter-list? ")" block ;
        parameter-list ::= IDENTIFIER ( "," IDENTIFIER )* ;
    */
    fn parse_function_def(&mut self, ctx: &mut ErrorContext) -> InternalResult<Expr> {
        ctx.push(ContextTag::FunDefExpr);

        let next = self.advance();
        ctx.set_end(&next);
        if !matches!(next.token, Token::OpenParen) {
            return Err(Self::unexpected_token(Token::OpenParen, next.token));
        }

        let mut params = Vec::new();
        if matches!(self.peek().token, Token::CloseParen) {
            ctx.set_end(&self.advance());
        } else {
            loop {
                let next = self.advance();
                ctx.set_end(&next);
                match next.token {
                    Token::Identifier(name) => params.push(name),
                    Token::Illegal(lexeme) => return Err(ErrorKind::IllegalToken(lexeme).into()),
                    token => return Err(ErrorKind::ExpectedIdentifier(token).into()),
                }

                let next = self.advance();
                ctx.set_end(&next);
                match next.token {
                    Token::Comma => continue,
                    Token::CloseParen => break,
                    token => return Err(Self::unexpected_token(Token::CloseParen, token)),
                }
            }
        }

        let body = self.parse_block(ctx)?;

        ctx.pop_extend();
        Ok(Expr::FunctionDef(FunctionDef::new(params, body)))
    }

    // block ::= "{" statement* "}" ;
    fn parse_block(&mut self, ctx: &mut ErrorContext) -> InternalResult<Block> {
        ctx.push(ContextTag::Block);

        let next = self.advance();
        ctx.set_start(&next);
        if !matches!(next.token, Token::OpenBrace) {
            return Err(Self::unexpected_token(Token::OpenBrace, next.token));
        }

        let mut suite = Vec::new();
        loop {
            if matches!(self.peek().token, Token::CloseBrace) {
                ctx.set_end(&self.advance());
                break;
            }
            if self.peek().token.is_eof() {
                return Err(Self::unexpected_token(Token::CloseBrace, Token::EOF));
            }

            suite.push(self.parse_stmt_meta(ctx)?);
        }

        ctx.pop_extend();
        Ok(Block::new(suite))
    }

    /*
        call-expression ::= expression "(" argument-list? ")" ;
        argument-list ::= expression ( "," expression )* ;
    */
    fn parse_call_expr(&mut self, ctx: &mut ErrorContext, callee: Expr) -> InternalResult<Expr> {
        ctx.push_continuation(ContextTag::CallExpr);

        let next = self.advance();
        debug_assert!(matches!(next.token, Token::OpenParen));
        ctx.set_end(&next);

        let mut args = Vec::new();
        if matches!(self.peek().token, Token::CloseParen) {
            ctx.set_end(&self.advance());
        } else {
            loop {
                args.push(self.parse_expr_variant(ctx, Precedence::Lowest)?);

                let next = self.advance();
                ctx.set_end(&next);
                match next.token {
                    Token::Comma => continue,
                    Token::CloseParen => break,
                    token => return Err(Self::unexpected_token(Token::CloseParen, token)),
                }
            }
        }

        ctx.pop_extend();
        Ok(Expr::call(callee, args))
    }

    fn which_unary_op(token: &Token) -> Option<UnaryOp> {
        let op = match token {
            Token::OpSub => UnaryOp::Neg,
            Token::OpNot => UnaryOp::Not,

            _ => return None,
        };

        Some(op)
    }

    fn which_binary_op(token: &Token) -> Option<BinaryOp> {
        let op = match token {
            Token::OpMul => BinaryOp::Mul,
            Token::OpDiv => BinaryOp::Div,
            Token::OpAdd => BinaryOp::Add,
            Token::OpSub => BinaryOp::Sub,
            Token::OpLT => BinaryOp::LT,
            Token::OpGT => BinaryOp::GT,
            Token::OpLE => BinaryOp::LE,
            Token::OpGE => BinaryOp::GE,
            Token::OpEQ => BinaryOp::EQ,
            Token::OpNE => BinaryOp::NE,

            _ => return None,
        };

        Some(op)
    }

    fn unexpected_token(expected: Token, found: Token) -> ErrorPrototype {
        match found {
            Token::Illegal(lexeme) => ErrorKind::IllegalToken(lexeme).into(),
            found => ErrorKind::ExpectedToken { expected, found }.into(),
        }
    }
}

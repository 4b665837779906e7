use crate::lexer::{LexerBuilder, Token};
use crate::lexer::rules::{SingleCharRule, MultiCharRule};
use crate::lexer::rules::keywords::KeywordRule;
use crate::lexer::rules::literals::{IdentifierRule, IntegerLiteralRule, StringLiteralRule};


pub type IntType = i64;


pub fn create_default_lexer_rules() -> LexerBuilder {
    LexerBuilder::new()

    .add_rule(SingleCharRule::new(Token::OpenParen,  '('))
    .add_rule(SingleCharRule::new(Token::CloseParen, ')'))
    .add_rule(SingleCharRule::new(Token::OpenBrace,  '{'))
    .add_rule(SingleCharRule::new(Token::CloseBrace, '}'))

    .add_rule(SingleCharRule::new(Token::Comma,     ','))
    .add_rule(SingleCharRule::new(Token::Colon,     ':'))
    .add_rule(SingleCharRule::new(Token::Semicolon, ';'))

    .add_rule(SingleCharRule::new(Token::OpAssign, '='))
    .add_rule(SingleCharRule::new(Token::OpAdd,    '+'))
    .add_rule(SingleCharRule::new(Token::OpSub,    '-'))
    .add_rule(SingleCharRule::new(Token::OpMul,    '*'))
    .add_rule(SingleCharRule::new(Token::OpDiv,    '/'))
    .add_rule(SingleCharRule::new(Token::OpNot,    '!'))
    .add_rule(SingleCharRule::new(Token::OpLT,     '<'))
    .add_rule(SingleCharRule::new(Token::OpGT,     '>'))

    .add_rule(MultiCharRule::new(Token::OpLE, "<="))
    .add_rule(MultiCharRule::new(Token::OpGE, ">="))
    .add_rule(MultiCharRule::new(Token::OpEQ, "=="))
    .add_rule(MultiCharRule::new(Token::OpNE, "!="))

    // keywords are registered ahead of the identifier rule so that
    // the lowest-index tie break resolves e.g. "let" as a keyword
    .add_rule(KeywordRule::new(Token::Let,    "let"))
    .add_rule(KeywordRule::new(Token::Fun,    "fn"))
    .add_rule(KeywordRule::new(Token::If,     "if"))
    .add_rule(KeywordRule::new(Token::Else,   "else"))
    .add_rule(KeywordRule::new(Token::Return, "return"))
    .add_rule(KeywordRule::new(Token::True,   "true"))
    .add_rule(KeywordRule::new(Token::False,  "false"))

    .add_rule(IdentifierRule::new())
    .add_rule(IntegerLiteralRule::new())
    .add_rule(StringLiteralRule::new())
}

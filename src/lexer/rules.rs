pub mod strmatcher;
pub mod general;
pub mod keywords;
pub mod literals;

pub use general::{SingleCharRule, MultiCharRule};

use crate::lexer::Token;

// Match Result

#[derive(Clone, Copy, Debug)]
pub enum MatchResult {
    // has not consumed enough characters to produce a valid token, but could if given further correct input
    IncompleteMatch,

    // has consumed enough characters to produce a valid token, may still yet accept further correct input
    // should either remain in this state, or drop to the NoMatch state if incorrect input given
    CompleteMatch,

    // not a match for the characters that have been given, should remain in this state until reset
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        match self {
            MatchResult::IncompleteMatch | MatchResult::CompleteMatch => true,
            MatchResult::NoMatch => false,
        }
    }

    pub fn is_complete_match(&self) -> bool {
        matches!(self, MatchResult::CompleteMatch)
    }

    pub fn is_incomplete_match(&self) -> bool {
        matches!(self, MatchResult::IncompleteMatch)
    }
}

// Lexer Rules

pub trait LexerRule: LexerRuleClone {
    fn reset(&mut self);

    fn current_state(&self) -> MatchResult;

    // only modifies the rule state if the char would keep the rule matching
    // `prev` is the last char consumed before the current token, for word boundary checks
    fn try_match(&mut self, prev: Option<char>, next: char) -> MatchResult;

    // produce Some(Token) if current state is CompleteMatch, otherwise None
    fn get_token(&self) -> Option<Token>;
}

// Clone support for boxed rules, so a LexerBuilder can stamp out
// any number of lexers from the same rule set.

pub trait LexerRuleClone {
    fn clone_rule(&self) -> Box<dyn LexerRule>;
}

impl<R> LexerRuleClone for R where R: LexerRule + Clone + 'static {
    fn clone_rule(&self) -> Box<dyn LexerRule> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn LexerRule> {
    fn clone(&self) -> Self {
        self.clone_rule()
    }
}

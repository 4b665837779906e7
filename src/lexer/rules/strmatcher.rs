use std::str::Chars;
use std::collections::VecDeque;
use crate::lexer::rules::MatchResult;

// Helper struct to incrementally match an exact string

#[derive(Debug, Clone)]
pub struct StrMatcher<'a> {
    target: &'a str,
    state: MatchResult,
    chars: Chars<'a>,
    peek: VecDeque<Option<char>>,
}

impl<'a> StrMatcher<'a> {
    pub fn new(target: &'a str) -> Self {
        StrMatcher {
            target,
            state: MatchResult::IncompleteMatch,
            chars: target.chars(),
            peek: VecDeque::new(),
        }
    }

    pub fn last_match_result(&self) -> MatchResult { self.state }

    pub fn reset(&mut self) {
        self.state = MatchResult::IncompleteMatch;
        self.chars = self.target.chars();
        self.peek.clear();
    }

    fn peek_nth(&mut self, n: usize) -> Option<char> {
        while self.peek.len() < n + 1 {
            self.peek.push_back(self.chars.next());
        }
        self.peek[n]
    }

    fn advance(&mut self) -> Option<char> {
        match self.peek.pop_front() {
            Some(o) => o,
            None => self.chars.next(),
        }
    }

    pub fn peek_match(&mut self, next: char) -> MatchResult {
        // if the match already failed, don't bother looking at any further input
        if !self.state.is_match() {
            return MatchResult::NoMatch;
        }

        match self.peek_nth(0) {
            Some(this_ch) if this_ch == next => {
                if self.peek_nth(1).is_none() {
                    MatchResult::CompleteMatch
                } else {
                    MatchResult::IncompleteMatch
                }
            },
            _ => MatchResult::NoMatch,
        }
    }

    pub fn try_match(&mut self, next: char) -> MatchResult {
        let match_result = self.peek_match(next);
        if match_result.is_match() {
            self.state = match_result;
            self.advance();
        }
        match_result
    }
}

mod token;


pub mod rules;
pub use rules::MatchResult;

pub use token::*;

use std::iter::{Iterator, Peekable};

use rules::LexerRule;


// Lexer Builder

pub struct LexerBuilder {
    rules: Vec<Box<dyn LexerRule>>,
}

impl LexerBuilder {
    pub fn new() -> Self {
        LexerBuilder {
            rules: Vec::new(),
        }
    }

    // Note, the order that rules are added determines priority

    pub fn add_rule<R>(mut self, rule: R) -> Self
    where R: LexerRule + 'static {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn extend_rules(mut self, rules: impl Iterator<Item=impl LexerRule + 'static>) -> Self {
        for rule in rules {
            self.rules.push(Box::new(rule));
        }
        self
    }

    // less expensive than build(), but invalidates self
    pub fn build_once<S>(self, source: S) -> Lexer<S> where S: Iterator<Item=char> {
        Lexer::new(source, self.rules)
    }

    pub fn build<S>(&self, source: S) -> Lexer<S> where S: Iterator<Item=char> {
        Lexer::new(source, self.rules.clone())
    }
}

impl Default for LexerBuilder {
    fn default() -> Self { Self::new() }
}

// Lexer

fn split_array_pair_mut<T>(pair: &mut [T; 2]) -> (&mut T, &mut T) {
    let (first, rest) = pair.split_first_mut().unwrap();
    let second = &mut rest[0];
    (first, second)
}

// to avoid interior self-referentiality inside Lexer (not permitted in safe Rust),
// instead of passing around references, we pass indices into the rules Vec instead
type RuleID = usize;

pub struct Lexer<S> where S: Iterator<Item=char> {
    source: Peekable<S>,
    rules: Vec<Box<dyn LexerRule>>,

    current: TokenIndex, // one ahead of current char
    last: Option<char>,
    newline: bool,
    done: bool,

    // source text of the token being scanned, kept for illegal tokens
    lexeme: String,

    // internal state used by next_token().
    // putting these here instead to avoid unnecessary allocations
    active:   [Vec<RuleID>; 2],
    complete: [Vec<RuleID>; 2],
}

// indices for active/complete arrays
const THIS_CYCLE: usize = 0;
const NEXT_CYCLE: usize = 1;


impl<S> Iterator for Lexer<S> where S: Iterator<Item=char> {
    type Item = TokenMeta;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self.next_token();
        if out.token.is_eof() {
            self.done = true;
        }
        Some(out)
    }
}

impl<S> Lexer<S> where S: Iterator<Item=char> {

    pub fn new(source: S, rules: Vec<Box<dyn LexerRule>>) -> Self {
        Lexer {
            source: source.peekable(),
            rules,

            current: 0,
            last: None,
            newline: true,
            done: false,
            lexeme: String::new(),
            active:   [Vec::new(), Vec::new()],
            complete: [Vec::new(), Vec::new()],
        }
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.source.next();
        if let Some(ch) = next {
            self.current += 1;
            self.last = Some(ch);
            self.lexeme.push(ch);
        }
        next
    }

    fn peek_next(&mut self) -> Option<char> {
        self.source.peek().copied()
    }

    // (last consumed char, next unconsumed char)
    fn peek(&mut self) -> (Option<char>, Option<char>) {
        (self.last, self.peek_next())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_next(), Some(ch) if ch.is_whitespace()) {
            // consume whitespace and update self.newline
            if let Some('\n') = self.advance() {
                self.newline = true;
            }
        }
    }

    fn reset_rules(&mut self) {
        for rule in self.rules.iter_mut() {
            rule.reset();
        }

        for idx in 0..2 {
            self.active[idx].clear();
            self.complete[idx].clear();
        }
    }

    pub fn next_token(&mut self) -> TokenMeta {
        self.skip_whitespace();

        let result = self.scan_token();
        self.newline = matches!(self.last, Some('\n'));

        result
    }

    fn scan_token(&mut self) -> TokenMeta {

        //starting a new token
        let token_start = self.current;
        self.reset_rules();
        self.lexeme.clear();

        // grab the next char, and feed it to all the rules
        // any rules that no longer match are discarded
        //
        // if exactly one rule left, stop iterating and just fill out that one
        // if nothing left, consider rules that were completed on the last iteration...
        //    if there are none, the current char is consumed as an illegal token
        //    if there is more than one, the lowest rule index takes priority
        //
        // otherwise...
        //    any rules that match completely are noted for the next iteration
        //    advance current to the next char

        // check if we are already at EOF
        let (mut prev, next) = self.peek();
        let mut next = match next {
            Some(ch) => ch,
            None => {
                return self.token_data(Token::EOF, token_start);
            },
        };

        // generate rule ids
        self.active[THIS_CYCLE].extend(0..self.rules.len());

        loop {

            // need to split the body of this loop into two blocks in order to keep the borrow checker happy...

            {
                let (active, next_active) = split_array_pair_mut(&mut self.active);
                let (complete, next_complete) = split_array_pair_mut(&mut self.complete);

                next_active.clear();
                next_complete.clear();

                for &rule_id in active.iter() {
                    let rule = &mut self.rules[rule_id];
                    let match_result = rule.try_match(prev, next);

                    if match_result.is_match() {
                        next_active.push(rule_id);

                        if match_result.is_complete_match() {
                            next_complete.push(rule_id);
                        }
                    }
                }

                // Only care about complete rules if next_active is empty ("rule of maximal munch")
                if next_active.is_empty() && !complete.is_empty() {
                    // falling back to the rules which matched completely on the previous char
                    // do not advance the lexer as we will revisit the current char on the next pass

                    // if there is more than one complete rule, the lowest index takes priority!
                    let rule_id = *complete.iter().min().unwrap();
                    let token = self.rules[rule_id].get_token().unwrap();

                    return self.token_data(token, token_start);
                }
            }

            // commit to accepting this char (and therefore consuming it)
            self.advance();

            {
                let next_active = &self.active[NEXT_CYCLE];

                if next_active.is_empty() {
                    // nothing matches: the consumed text becomes an illegal token,
                    // deferred to the parser instead of failing here
                    let lexeme = self.lexeme.clone();
                    return self.token_data(Token::Illegal(lexeme), token_start);
                }
                if next_active.len() == 1 {
                    let rule_id = next_active[0];
                    return self.exhaust_rule(rule_id, token_start);
                }

                prev = self.last;
                next = match self.peek_next() {
                    Some(ch) => ch,
                    None => break,
                };

                // swap cycles
                self.active.swap(0, 1);
                self.complete.swap(0, 1);
            }
        }

        // hit EOF with more than one rule still active

        let next_complete = &self.complete[NEXT_CYCLE];
        if !next_complete.is_empty() {

            // if there is more than one complete rule, the lowest index takes priority!
            let rule_id = *next_complete.iter().min().unwrap();
            let token = self.rules[rule_id].get_token().unwrap();

            return self.token_data(token, token_start);
        }

        // ran out of input mid-token (e.g. an unterminated string)
        let lexeme = self.lexeme.clone();
        self.token_data(Token::Illegal(lexeme), token_start)
    }

    fn exhaust_rule(&mut self, rule_id: RuleID, token_start: TokenIndex) -> TokenMeta {
        {
            let rule = &self.rules[rule_id];
            debug_assert!(!matches!(rule.current_state(), MatchResult::NoMatch));
        }

        loop {
            let (prev, next) = self.peek();
            let next = match next {
                Some(ch) => ch,
                None => break,
            };

            let match_result = self.rules[rule_id].try_match(prev, next);
            if match_result.is_match() {
                self.advance();
            } else {
                break;
            }
        }

        let rule = &self.rules[rule_id];
        if rule.current_state().is_complete_match() {
            let token = rule.get_token().unwrap();
            return self.token_data(token, token_start);
        }

        // the last live rule fizzled before completing
        let lexeme = self.lexeme.clone();
        self.token_data(Token::Illegal(lexeme), token_start)
    }

    fn token_data(&self, token: Token, token_start: TokenIndex) -> TokenMeta {
        let length = self.current.saturating_sub(token_start);

        TokenMeta {
            token,
            span: Span { index: token_start, length },
            newline: self.newline,
        }
    }
}

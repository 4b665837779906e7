pub use crate::lexer::TokenIndex;

// metadata attached to parser output for error handling and debug output
// attached at the statement level

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebugSymbol {
    pub start: TokenIndex,  // char offsets into the source text
    pub end: TokenIndex,
}

impl From<(TokenIndex, TokenIndex)> for DebugSymbol {
    fn from(tuple: (TokenIndex, TokenIndex)) -> Self {
        let (start, end) = tuple;
        DebugSymbol { start, end }
    }
}

// Resolved Symbols

// A symbol resolved against its source text, pinned to the line where it starts.
// Multiline symbols are clipped to their first line.
#[derive(Debug, Clone)]
pub struct ResolvedSymbol {
    lineno: usize,  // 1-based line number at the start of the symbol
    line: String,   // entire line of text containing the start of the symbol
    start: usize,   // char offsets into self.line
    end: usize,
}

impl ResolvedSymbol {
    pub fn lineno(&self) -> usize { self.lineno }
    pub fn line_text(&self) -> &str { self.line.as_str() }

    // char column offsets into line_text(), 0-based, end exclusive
    pub fn start_col(&self) -> usize { self.start }
    pub fn end_col(&self) -> usize { self.end }
}

// Symbol Resolution

// Resolves symbols against a fully buffered copy of the source text.
pub struct BufferedResolver {
    text: String,
}

impl BufferedResolver {
    pub fn new(text: impl Into<String>) -> Self {
        BufferedResolver { text: text.into() }
    }

    pub fn resolve(&self, symbol: &DebugSymbol) -> ResolvedSymbol {
        let mut lineno = 1;
        let mut line_start = 0;  // char offset of the start of the current line

        let mut index = 0;
        for ch in self.text.chars() {
            if index >= symbol.start {
                break;
            }
            index += 1;

            if ch == '\n' {
                lineno += 1;
                line_start = index;
            }
        }

        let line: String = self.text.chars()
            .skip(line_start)
            .take_while(|&ch| ch != '\n')
            .collect();

        let line_len = line.chars().count();
        let start = symbol.start.saturating_sub(line_start).min(line_len);
        let end = symbol.end.saturating_sub(line_start)
            .max(start + 1)
            .min(line_len.max(start + 1));

        ResolvedSymbol { lineno, line, start, end }
    }
}

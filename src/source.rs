use std::fs;
use std::io;
use std::path::PathBuf;

use crate::lexer::LexerBuilder;
use crate::parser::{Parser, ParserError};
use crate::parser::stmt::StmtMeta;


#[derive(Debug, Clone)]
pub enum SourceType {
    String(String),
    File(PathBuf),
}

// Represents a "source" of source code and provides access to its text
#[derive(Debug, Clone)]
pub struct ModuleSource {
    name: String,
    source: SourceType,
}

impl ModuleSource {
    pub fn new(name: impl ToString, source: SourceType) -> Self {
        ModuleSource {
            name: name.to_string(),
            source,
        }
    }

    pub fn name(&self) -> &str { self.name.as_str() }

    // Load the entire source text into a buffer.
    // Source files are small enough that streaming them is not worth it.
    pub fn source_text(&self) -> io::Result<String> {
        match &self.source {
            SourceType::String(string) => Ok(string.clone()),
            SourceType::File(path) => fs::read_to_string(path),
        }
    }
}

// High-level Parsing Interface

// Container for state required for parsing
pub struct ParseContext<'f> {
    lexer_factory: &'f LexerBuilder,
}

impl<'f> ParseContext<'f> {
    pub fn new(lexer_factory: &'f LexerBuilder) -> Self {
        ParseContext { lexer_factory }
    }

    // Returns a Vec of parsed Stmts (if no error occurred) or a Vec of errors
    pub fn parse_ast(&self, text: &str) -> Result<Vec<StmtMeta>, Vec<ParserError>> {
        let lexer = self.lexer_factory.build(text.chars());
        let output: Vec<_> = Parser::new(lexer).collect();

        if output.iter().any(|result| result.is_err()) {
            Err(output.into_iter().filter_map(|result| result.err()).collect())
        } else {
            Ok(output.into_iter().filter_map(|result| result.ok()).collect())
        }
    }
}

use std::io;
use std::fmt;
use std::rc::Rc;
use std::error::Error;

pub mod utils;
pub mod source;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod interpreter;
pub mod frontend;
pub mod debug;

use source::{ModuleSource, ParseContext};
use parser::ParserError;
use parser::stmt::StmtMeta;
use runtime::{Environment, RuntimeError, Value};


#[derive(Debug)]
pub enum InterpretError {
    Source(io::Error),
    Syntax(Box<[ParserError]>),
    Runtime(RuntimeError),
}

impl From<io::Error> for InterpretError {
    fn from(error: io::Error) -> Self { Self::Source(error) }
}

impl From<Vec<ParserError>> for InterpretError {
    fn from(errors: Vec<ParserError>) -> Self { Self::Syntax(errors.into_boxed_slice()) }
}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self { Self::Runtime(error) }
}

impl Error for InterpretError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(error) => Some(error),
            Self::Syntax(errors) => errors.first().map(|error| error as &dyn Error),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(error) => write!(fmt, "could not read source: {}", error),
            Self::Syntax(errors) => write!(fmt, "syntax errors in source ({} total)", errors.len()),
            Self::Runtime(error) => write!(fmt, "runtime error: {}", error),
        }
    }
}


/// Parse an entire source text into a list of statements.
pub fn parse_source(text: &str) -> Result<Vec<StmtMeta>, Vec<ParserError>> {
    let lexer_factory = language::create_default_lexer_rules();
    let parse_ctx = ParseContext::new(&lexer_factory);
    parse_ctx.parse_ast(text)
}

/// Parse and evaluate a source text against the given environment.
/// Produces the value of the last evaluated expression statement, if any.
pub fn interpret_source(text: &str, env: &Rc<Environment>) -> Result<Option<Value>, InterpretError> {
    let program = parse_source(text)?;
    let result = interpreter::interpret(&program, env)?;
    Ok(result)
}

pub fn interpret_module(module: &ModuleSource, env: &Rc<Environment>) -> Result<Option<Value>, InterpretError> {
    let text = module.source_text()?;
    interpret_source(&text, env)
}

/// Report an interpreter failure to stderr, with source context where available.
pub fn print_interpret_error(text: &str, error: &InterpretError) {
    match error {
        InterpretError::Source(error) => eprintln!("{}", error),
        InterpretError::Syntax(errors) => frontend::print_source_errors(text, errors),
        InterpretError::Runtime(error) => eprintln!("runtime error: {}", error),
    }
}

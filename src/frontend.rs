//! output/error reporting and formatting

use std::fmt;
use std::iter;
use std::fmt::Formatter;

use crate::utils;
use crate::debug::SourceError;
use crate::debug::symbol::{BufferedResolver, ResolvedSymbol};
use crate::parser::ParserError;


/// Prints each parse error with its source line and a caret marker.
pub fn print_source_errors(text: &str, errors: &[ParserError]) {
    let resolver = BufferedResolver::new(text);

    for error in errors {
        match error.debug_symbol() {
            Some(symbol) => {
                let symbol = resolver.resolve(symbol);
                eprintln!("{}", render_parser_error(error, &symbol));
            },
            None => {
                eprintln!("{}.", utils::title_case_string(&error.to_string()));
            },
        }
    }
}

pub fn render_parser_error<'a>(error: &'a ParserError, symbol: &'a ResolvedSymbol) -> impl fmt::Display + 'a {
    utils::delegate_fmt(|fmt| fmt_parser_error(fmt, error, symbol))
}

fn fmt_parser_error(fmt: &mut Formatter<'_>, error: &ParserError, symbol: &ResolvedSymbol) -> fmt::Result {
    let message = utils::title_case_string(&error.to_string());
    writeln!(fmt, "{}.", message)?;

    fmt_source_line(fmt, symbol)
}

fn fmt_source_line(fmt: &mut Formatter<'_>, symbol: &ResolvedSymbol) -> fmt::Result {
    let margin = format!("{: >3}|    ", symbol.lineno());
    let source_line = symbol.line_text().trim_end();
    let line_len = source_line.chars().count();

    let start_col = symbol.start_col().min(line_len);
    let end_col = symbol.end_col().min(line_len).max(start_col + 1);

    let mut marker = String::new();
    marker.extend(iter::repeat(' ').take(margin.len() + start_col));
    marker.extend(iter::repeat('^').take(end_col - start_col));

    writeln!(fmt, "{}{}", margin, source_line)?;
    writeln!(fmt, "{}", marker)
}

#![cfg(test)]

use crate::debug::symbol::{BufferedResolver, DebugSymbol};


#[test]
fn resolver_locates_symbol_on_later_line() {
    let resolver = BufferedResolver::new("let a = 1;\nlet b = 2;");

    // the second statement, chars 11..21
    let symbol = DebugSymbol::from((11, 21));
    let resolved = resolver.resolve(&symbol);

    assert_eq!(resolved.lineno(), 2);
    assert_eq!(resolved.line_text(), "let b = 2;");
    assert_eq!(resolved.start_col(), 0);
    assert_eq!(resolved.end_col(), 10);
}

#[test]
fn resolver_clips_multiline_symbol_to_first_line() {
    let resolver = BufferedResolver::new("if (x) {\n  y\n}");

    // spans the whole if-expression across three lines
    let symbol = DebugSymbol::from((0, 14));
    let resolved = resolver.resolve(&symbol);

    assert_eq!(resolved.lineno(), 1);
    assert_eq!(resolved.line_text(), "if (x) {");
    assert_eq!(resolved.start_col(), 0);
    assert_eq!(resolved.end_col(), resolved.line_text().chars().count());
}

#[test]
fn resolver_clamps_symbol_past_end_of_text() {
    let resolver = BufferedResolver::new("ab\ncd");

    let symbol = DebugSymbol::from((6, 8));
    let resolved = resolver.resolve(&symbol);

    // pinned to the last line, one column past its end
    assert_eq!(resolved.lineno(), 2);
    assert_eq!(resolved.line_text(), "cd");
    assert_eq!(resolved.start_col(), 2);
    assert_eq!(resolved.end_col(), 3);
}

#[test]
fn resolver_marks_at_least_one_column() {
    let resolver = BufferedResolver::new("x + y");

    // zero-width symbol still produces a visible marker range
    let symbol = DebugSymbol::from((2, 2));
    let resolved = resolver.resolve(&symbol);

    assert_eq!(resolved.start_col(), 2);
    assert_eq!(resolved.end_col(), 3);
}

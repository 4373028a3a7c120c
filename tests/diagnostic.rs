use dsnlex::diagnostic::*;
use dsnlex::lexing::*;

mod common;
use common::*;

#[test]
fn need_left_on_right_bracket() {
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::from_text("\n  ) (", &keywords);

    let diagnostic = expect_diagnostic(lexer.need_left());
    assert_eq!(diagnostic.message, "Expecting '('");
    assert_eq!(diagnostic.line_number, 2);
    assert_eq!(diagnostic.column, 3);
    assert_eq!(diagnostic.source_name, "clipboard");
    assert_eq!(diagnostic.line, "  ) (");
    assert_eq!(
        diagnostic.to_string(),
        "Expecting '(' in \"clipboard\" on line 2 at offset 3"
    );
}

#[test]
fn need_right_on_symbol() {
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::from_text("(a", &keywords);

    assert_eq!(lexer.need_left().unwrap(), Tok::Left);
    let diagnostic = expect_diagnostic(lexer.need_right());
    assert_eq!(diagnostic.message, "Expecting ')'");
    assert_eq!(diagnostic.column, 2);
}

#[test]
fn need_symbol_rejects_delimiters() {
    let keywords = test_keywords::new();
    let mut lexer = DsnLexer::from_text("wire 12 \"s\"", &keywords);

    assert_eq!(lexer.need_symbol().unwrap(), Tok::Keyword(test_keywords::WIRE));
    assert_eq!(lexer.need_symbol_or_number().unwrap(), Tok::Number);

    let diagnostic = expect_diagnostic(lexer.need_symbol());
    assert_eq!(diagnostic.message, "Expecting 'symbol'");
    assert_eq!(diagnostic.column, 9);
}

#[test]
fn need_symbol_or_number_at_eof() {
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::from_text("  ", &keywords);

    let diagnostic = expect_diagnostic(lexer.need_symbol_or_number());
    assert_eq!(diagnostic.message, "Expecting symbol|number");
}

#[test]
fn unexpected_token() {
    let keywords = test_keywords::new();
    let mut lexer = DsnLexer::from_text("(pcb (net", &keywords);

    lexer.next_tok().unwrap();
    lexer.next_tok().unwrap();
    lexer.next_tok().unwrap();
    let tok = lexer.next_tok().unwrap();

    match lexer.unexpected(tok) {
        LexerError::Diagnostic(diagnostic) => {
            assert_eq!(diagnostic.message, "Unexpected 'net'");
            assert_eq!(diagnostic.column, 7);
        }
        other => panic!("expected a diagnostic, got {:?}", other),
    }

    match lexer.unexpected_msg("nested net") {
        LexerError::Diagnostic(diagnostic) => {
            assert_eq!(diagnostic.message, "Unexpected nested net");
        }
        other => panic!("expected a diagnostic, got {:?}", other),
    }
}

#[test]
fn error_at_custom_offset() {
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::from_text("(resolution mil 10)", &keywords);
    lexer.next_tok().unwrap();

    let error = lexer.error_at("bad resolution", 13);
    assert_eq!(
        error.to_string(),
        "bad resolution in \"clipboard\" on line 1 at offset 13"
    );
}

#[test]
fn reported_through_reporter() {
    let (reporter, mut diagnostics) = TestReporter::new();
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::from_text("(a)", &keywords);

    lexer.next_tok().unwrap();
    if let Err(LexerError::Diagnostic(diagnostic)) = lexer.need_right() {
        reporter.report(diagnostic);
    }

    let expected = [Diagnostic::error("Expecting ')'", "clipboard", 1, 2, "(a)\n")];
    let got = diagnostics.unwrap();
    assert_slices_equal("diagnostics", &got[..], &expected[..], |lhs, rhs| lhs == rhs, "")
        .unwrap();
}

#[test]
fn default_reporter_prints() {
    let reporter = DefaultReporter::new();
    reporter.report(Diagnostic::error("Expecting '('", "board.dsn", 3, 5, "\t (x\n"));
    assert_eq!(
        Diagnostic::error("m", "board.dsn", 3, 5, "").location(),
        "board.dsn:3:5"
    );
}

fn expect_diagnostic(result: Result<Tok>) -> Diagnostic {
    match result {
        Err(LexerError::Diagnostic(diagnostic)) => diagnostic,
        other => panic!("expected a diagnostic, got {:?}", other),
    }
}

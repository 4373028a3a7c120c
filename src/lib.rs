pub mod config;
pub mod diagnostic;
pub mod lexing;
pub mod source;

use config::LexerConfig;
use diagnostic::{DefaultReporter, LexerError, Reporter};
use lexing::*;
use log::error;
pub use source::*;
use std::rc::Rc;

/// Lexes until EOF. The first diagnostic goes to `reporter` and stops lexing.
pub fn tokenize(lexer: &mut DsnLexer, reporter: Rc<dyn Reporter>) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    loop {
        match lexer.next_tok() {
            Ok(Tok::EOF) => return Some(tokens),
            Ok(_) => tokens.push(lexer.cur_token()),
            Err(LexerError::Diagnostic(diagnostic)) => {
                reporter.report(diagnostic);
                return None;
            }
            Err(err @ LexerError::Io { .. }) => {
                error!(target: "lexer", "{}", err);
                return None;
            }
        }
    }
}

/// Prints every token of `reader` with its position.
pub fn run(reader: Box<dyn LineReader>) -> Result<(), &'static str> {
    let reporter: Rc<dyn Reporter> = DefaultReporter::new();
    let keywords = KeywordTable::new();
    let mut lexer = DsnLexer::with_config(reader, &keywords, LexerConfig::from_env());

    loop {
        let tok = match lexer.next_tok() {
            Ok(tok) => tok,
            Err(LexerError::Diagnostic(diagnostic)) => {
                reporter.report(diagnostic);
                return Err("lexing failed");
            }
            Err(err @ LexerError::Io { .. }) => {
                error!(target: "lexer", "{}", err);
                return Err("unable to read input");
            }
        };

        if tok == Tok::EOF {
            return Ok(());
        }

        println!(
            "{}:{} {} {:?}",
            lexer.cur_line_number(),
            lexer.cur_offset(),
            lexer.token_text(tok),
            lexer.cur_text()
        );
    }
}

use colored::*;
use std::io;
use std::rc::Rc;
use thiserror::Error;

/// A lexical or expectation failure, pinned to a place in a named source.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message} in \"{source_name}\" on line {line_number} at offset {column}")]
pub struct Diagnostic {
    pub message: String,
    pub source_name: String,
    pub line_number: usize,
    /// 1-based character offset within the line
    pub column: usize,
    /// The offending line, without its terminator
    pub line: String,
}

impl Diagnostic {
    pub fn error(message: &str, source_name: &str, line_number: usize, column: usize, line: &str) -> Self {
        Diagnostic {
            message: String::from(message),
            source_name: String::from(source_name),
            line_number,
            column,
            line: String::from(line.trim_end_matches(|c: char| c == '\n' || c == '\r')),
        }
    }

    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.source_name, self.line_number, self.column)
    }
}

#[derive(Debug, Error)]
pub enum LexerError {
    #[error(transparent)]
    Diagnostic(#[from] Diagnostic),

    #[error("unable to read \"{source_name}\": {error}")]
    Io {
        source_name: String,
        #[source]
        error: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LexerError>;

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = "• Error:".red().bold();
        println!("\n{} {}\n", header, diagnostic.message);
        println!("  {}", diagnostic.line);

        let offset = diagnostic
            .line
            .chars()
            .take(diagnostic.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect::<String>();
        println!("  {}{}", offset, "^".red().bold());
        println!("  {}\n", diagnostic.location());
    }
}

use super::keyword::KeywordTable;
use super::token::*;
use crate::config::LexerConfig;
use crate::diagnostic::{Diagnostic, LexerError, Result};
use crate::source::*;
use log::{debug, trace};
use std::fs::File;

const COMMENT_MARKER: char = '#';
const STRING_QUOTE_WORD: &str = "string_quote";
const QUOTE_DEF_ERROR: &str = "String delimiter must be a single character of ', \", or $";

/// Pull-based lexer for parenthesized DSN text.
///
/// Tokens are produced one at a time by `next_tok`. Only the current and the
/// previous token kinds are remembered, together with the current token's
/// text and starting offset.
///
/// The lexer owns a stack of line readers for file inclusion. An exhausted
/// nested reader is popped automatically; pushing and popping explicitly is
/// left to the grammar, which must keep an inclusion directive alone on its
/// line since the rest of a line never survives a push or a pop.
pub struct DsnLexer<'k> {
    readers: ReaderStack,
    keywords: &'k KeywordTable,
    config: LexerConfig,

    line: Vec<char>,
    next: usize,

    cur_tok: Tok,
    prev_tok: Tok,
    cur_text: String,
    cur_offset: usize,
}

impl<'k> DsnLexer<'k> {
    pub fn new(reader: Box<dyn LineReader>, keywords: &'k KeywordTable) -> Self {
        DsnLexer::with_config(reader, keywords, LexerConfig::default())
    }

    pub fn with_config(
        reader: Box<dyn LineReader>,
        keywords: &'k KeywordTable,
        config: LexerConfig,
    ) -> Self {
        DsnLexer {
            readers: ReaderStack::new(reader),
            keywords,
            config,
            line: Vec::new(),
            next: 0,
            cur_tok: Tok::None,
            prev_tok: Tok::None,
            cur_text: String::new(),
            cur_offset: 0,
        }
    }

    pub fn from_file(file: File, name: &str, keywords: &'k KeywordTable) -> Self {
        DsnLexer::new(Box::new(FileLineReader::new(file, name)), keywords)
    }

    pub fn from_text(text: &str, keywords: &'k KeywordTable) -> Self {
        DsnLexer::new(Box::new(StringLineReader::clipboard(text)), keywords)
    }

    // Reader stack

    pub fn push_reader(&mut self, reader: Box<dyn LineReader>) {
        self.readers.push(reader);
        self.discard_line();
    }

    /// Resumes the enclosing reader at its next unread line. Returns false,
    /// changing nothing, when only one reader is left.
    pub fn pop_reader(&mut self) -> bool {
        if self.readers.pop() {
            self.discard_line();
            true
        } else {
            false
        }
    }

    pub fn reader_depth(&self) -> usize {
        self.readers.depth()
    }

    // Scanning

    /// Returns the kind of the next token, or `Tok::EOF` once every reader
    /// is exhausted.
    pub fn next_tok(&mut self) -> Result<Tok> {
        self.prev_tok = self.cur_tok;

        loop {
            while self.next < self.line.len() && is_space(self.line[self.next]) {
                self.next += 1;
            }

            if self.next >= self.line.len() {
                if self.read_line()? {
                    continue;
                }
                return Ok(self.emit(Tok::EOF, String::new(), 0));
            }

            let cur = self.next;
            if self.line[cur] == COMMENT_MARKER && self.line[..cur].iter().all(|c| is_space(*c)) {
                let end = self.line.len();
                self.next = end;
                if self.config.comments_are_tokens {
                    let text = self.line[cur..end].iter().collect();
                    return Ok(self.emit(Tok::Comment, text, cur));
                }
                continue;
            }

            break;
        }

        let cur = self.next;
        let c = self.line[cur];

        if c == '(' {
            self.next = cur + 1;
            return Ok(self.emit(Tok::Left, String::from("("), cur));
        }

        if c == ')' {
            self.next = cur + 1;
            return Ok(self.emit(Tok::Right, String::from(")"), cur));
        }

        if self.prev_tok == Tok::StringQuote {
            return self.quote_def(cur);
        }

        // A dash glued to whatever precedes it, as in "U2"-"14"
        if c == '-' && cur > 0 && !is_space(self.line[cur - 1]) && self.line[cur - 1] != '(' {
            self.next = cur + 1;
            return Ok(self.emit(Tok::Dash, String::from("-"), cur));
        }

        if c == self.config.string_delimiter {
            return Ok(self.quoted_string(cur));
        }

        Ok(self.bare_word(cur))
    }

    fn quoted_string(&mut self, cur: usize) -> Tok {
        let start = cur + 1;
        let mut head = start;
        while head < self.line.len()
            && !self.is_string_terminator(self.line[head])
            && !is_line_end(self.line[head])
        {
            head += 1;
        }

        let text = self.line[start..head].iter().collect();

        // An unterminated string runs to the end of the line
        if head < self.line.len() && self.is_string_terminator(self.line[head]) {
            head += 1;
        }
        self.next = head;

        self.emit(Tok::String, text, cur)
    }

    fn bare_word(&mut self, cur: usize) -> Tok {
        let mut head = cur + 1;
        while head < self.line.len() && !is_word_end(self.line[head]) {
            head += 1;
        }
        self.next = head;

        let text: String = self.line[cur..head].iter().collect();
        let kind = if is_number(&text) {
            Tok::Number
        } else if let Some(id) = self.keywords.lookup(&text) {
            Tok::Keyword(id)
        } else if text == STRING_QUOTE_WORD {
            Tok::StringQuote
        } else {
            Tok::Symbol
        };

        self.emit(kind, text, cur)
    }

    fn quote_def(&mut self, cur: usize) -> Result<Tok> {
        let c = self.line[cur];
        if !(c == '\'' || c == '"' || c == '$') {
            return Err(self.error_at(QUOTE_DEF_ERROR, cur + 1));
        }

        let head = cur + 1;
        if head < self.line.len() && !is_word_end(self.line[head]) {
            return Err(self.error_at(QUOTE_DEF_ERROR, cur + 1));
        }
        self.next = head;

        Ok(self.emit(Tok::QuoteDef, c.to_string(), cur))
    }

    fn emit(&mut self, kind: Tok, text: String, offset: usize) -> Tok {
        trace!(target: "lexer", "{:?} {:?} at {}:{}", kind, text, self.cur_line_number(), offset + 1);
        self.cur_tok = kind;
        self.cur_text = text;
        self.cur_offset = offset;
        kind
    }

    /// Loads the next line from the current reader, popping exhausted nested
    /// readers along the way. Returns false at the true end of input.
    fn read_line(&mut self) -> Result<bool> {
        loop {
            let result = self.readers.current_mut().read_line();
            let length = match result {
                Ok(length) => length,
                Err(error) => {
                    return Err(LexerError::Io {
                        source_name: self.cur_source().to_owned(),
                        error,
                    })
                }
            };

            if length > 0 {
                self.line = self.readers.current().line().chars().collect();
                self.next = 0;
                return Ok(true);
            }

            let exhausted = self.cur_source().to_owned();
            if !self.readers.pop() {
                self.discard_line();
                return Ok(false);
            }
            trace!(target: "lexer", "Reached end of {}, resuming {}", exhausted, self.cur_source());
        }
    }

    fn discard_line(&mut self) {
        self.line.clear();
        self.next = 0;
    }

    fn is_string_terminator(&self, c: char) -> bool {
        c == self.config.string_delimiter || (!self.config.space_in_quoted_tokens && c == ' ')
    }

    // Assertions

    pub fn need_symbol(&mut self) -> Result<Tok> {
        let tok = self.next_tok()?;
        if !tok.is_symbol() {
            return Err(self.expecting(Tok::Symbol));
        }
        Ok(tok)
    }

    pub fn need_symbol_or_number(&mut self) -> Result<Tok> {
        let tok = self.next_tok()?;
        if !tok.is_symbol() && tok != Tok::Number {
            return Err(self.expecting_msg("symbol|number"));
        }
        Ok(tok)
    }

    pub fn need_left(&mut self) -> Result<Tok> {
        let tok = self.next_tok()?;
        if tok != Tok::Left {
            return Err(self.expecting(Tok::Left));
        }
        Ok(tok)
    }

    pub fn need_right(&mut self) -> Result<Tok> {
        let tok = self.next_tok()?;
        if tok != Tok::Right {
            return Err(self.expecting(Tok::Right));
        }
        Ok(tok)
    }

    // Diagnostics

    /// Builds an error locating `text` at the 1-based `offset` of the current line.
    pub fn error_at(&self, text: &str, offset: usize) -> LexerError {
        let line: String = self.line.iter().collect();
        Diagnostic::error(
            text,
            self.cur_source(),
            self.cur_line_number(),
            offset,
            &line,
        )
        .into()
    }

    pub fn expecting(&self, tok: Tok) -> LexerError {
        self.expecting_msg(&self.token_string(tok))
    }

    pub fn expecting_msg(&self, message: &str) -> LexerError {
        self.error_at(&format!("Expecting {}", message), self.cur_offset())
    }

    pub fn unexpected(&self, tok: Tok) -> LexerError {
        self.unexpected_msg(&self.token_string(tok))
    }

    pub fn unexpected_msg(&self, message: &str) -> LexerError {
        self.error_at(&format!("Unexpected {}", message), self.cur_offset())
    }

    // Accessors

    pub fn cur_tok(&self) -> Tok {
        self.cur_tok
    }

    pub fn prev_tok(&self) -> Tok {
        self.prev_tok
    }

    pub fn cur_text(&self) -> &str {
        &self.cur_text
    }

    pub fn cur_token(&self) -> Token {
        Token::new(self.cur_tok, &self.cur_text)
    }

    pub fn cur_line_number(&self) -> usize {
        self.readers.current().line_number()
    }

    pub fn cur_source(&self) -> &str {
        self.readers.current().source_name()
    }

    /// 1-based offset of the current token within its line
    pub fn cur_offset(&self) -> usize {
        self.cur_offset + 1
    }

    pub fn token_text(&self, tok: Tok) -> &str {
        match tok {
            Tok::Keyword(id) => self.keywords.name_of(id).unwrap_or("token too big"),
            _ => tok.syntax().unwrap_or("???"),
        }
    }

    pub fn token_string(&self, tok: Tok) -> String {
        format!("'{}'", self.token_text(tok))
    }

    // Configuration

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    pub fn set_string_delimiter(&mut self, delimiter: char) -> char {
        debug!(target: "lexer", "String delimiter {:?} -> {:?}", self.config.string_delimiter, delimiter);
        std::mem::replace(&mut self.config.string_delimiter, delimiter)
    }

    pub fn set_space_in_quoted_tokens(&mut self, value: bool) -> bool {
        debug!(target: "lexer", "Space in quoted tokens -> {}", value);
        std::mem::replace(&mut self.config.space_in_quoted_tokens, value)
    }

    pub fn set_comments_are_tokens(&mut self, value: bool) -> bool {
        debug!(target: "lexer", "Comments are tokens -> {}", value);
        std::mem::replace(&mut self.config.comments_are_tokens, value)
    }
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_word_end(c: char) -> bool {
    is_space(c) || c == '(' || c == ')'
}

/// `[+-]? (D+ ('.' D*)? | '.' D+) ([eE] [+-]? D+)?` over the whole word
fn is_number(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    let digits = |i: &mut usize| {
        let start = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
        i += 1;
    }

    let whole = digits(&mut i);
    let mut fraction = 0;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        fraction = digits(&mut i);
    }
    if whole == 0 && fraction == 0 {
        return false;
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }

    i == chars.len()
}

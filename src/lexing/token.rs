use std::fmt;

/// Token kinds produced by the lexer. Built-in kinds order before every
/// keyword, so a keyword is recognisable by value alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tok {
    None,
    Comment,
    StringQuote,
    QuoteDef,
    Dash,
    Symbol,
    Number,
    Right,
    Left,
    String,
    EOF,

    /// An id supplied by the grammar's keyword table
    Keyword(u32),
}

impl Tok {
    /// A symbol cannot be a delimiter. Numbers and keywords still count.
    pub fn is_symbol(self) -> bool {
        match self {
            Tok::Symbol | Tok::Number | Tok::Keyword(_) => true,
            _ => false,
        }
    }

    pub fn is_keyword(self) -> bool {
        if let Tok::Keyword(_) = self {
            true
        } else {
            false
        }
    }

    /// Display text of a built-in kind. Keywords need their table.
    pub fn syntax(self) -> Option<&'static str> {
        let text = match self {
            Tok::None => "NONE",
            Tok::Comment => "comment",
            Tok::StringQuote => "string_quote",
            Tok::QuoteDef => "quoted text delimiter",
            Tok::Dash => "-",
            Tok::Symbol => "symbol",
            Tok::Number => "number",
            Tok::Right => ")",
            Tok::Left => "(",
            Tok::String => "quoted string",
            Tok::EOF => "end of file",
            Tok::Keyword(_) => return None,
        };
        Some(text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: Tok,
    pub text: String,
}

impl Token {
    pub fn new(kind: Tok, text: &str) -> Self {
        Token {
            kind,
            text: String::from(text),
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:?}, lexeme: {:?})",
            self.kind,
            self.lexeme()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}

use std::env;

/// Environment variable names read by `LexerConfig::from_env`
pub mod env_vars {
    pub const STRING_DELIMITER: &str = "DSN_STRING_DELIMITER";
    pub const SPACE_IN_QUOTED_TOKENS: &str = "DSN_SPACE_IN_QUOTED_TOKENS";
    pub const COMMENTS_ARE_TOKENS: &str = "DSN_COMMENTS_ARE_TOKENS";
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LexerConfig {
    /// Opens and closes a quoted string
    pub string_delimiter: char,

    /// When false, an unquoted space also ends a quoted string
    pub space_in_quoted_tokens: bool,

    /// When true, comment lines come back as `Tok::Comment`
    pub comments_are_tokens: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            string_delimiter: '"',
            space_in_quoted_tokens: true,
            comments_are_tokens: false,
        }
    }
}

impl LexerConfig {
    pub fn from_env() -> Self {
        let defaults = LexerConfig::default();
        LexerConfig {
            string_delimiter: env::var(env_vars::STRING_DELIMITER)
                .ok()
                .and_then(|v| parse_delimiter(&v))
                .unwrap_or(defaults.string_delimiter),
            space_in_quoted_tokens: env::var(env_vars::SPACE_IN_QUOTED_TOKENS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.space_in_quoted_tokens),
            comments_are_tokens: env::var(env_vars::COMMENTS_ARE_TOKENS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.comments_are_tokens),
        }
    }
}

fn parse_delimiter(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

pub mod keyword;
pub mod lexer;
pub mod token;

pub use keyword::{Keyword, KeywordTable};
pub use lexer::DsnLexer;
pub use token::{Tok, Token, TokenString};

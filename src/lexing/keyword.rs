use std::iter::FromIterator;

/// A reserved word and the grammar-specific id it lexes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
    pub name: String,
    pub token: u32,
}

/// Keyword table supplied by the grammar layer. Lookup is case-insensitive
/// and exact; when names collide the earliest entry wins.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    keywords: Vec<Keyword>,
}

impl KeywordTable {
    pub fn new() -> Self {
        KeywordTable {
            keywords: Vec::new(),
        }
    }

    pub fn add(mut self, name: &str, token: u32) -> Self {
        self.keywords.push(Keyword {
            name: String::from(name),
            token,
        });
        self
    }

    pub fn lookup(&self, word: &str) -> Option<u32> {
        self.keywords
            .iter()
            .find(|k| k.name.eq_ignore_ascii_case(word))
            .map(|k| k.token)
    }

    pub fn name_of(&self, token: u32) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| k.token == token)
            .map(|k| k.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }
}

impl<'a> FromIterator<(&'a str, u32)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KeywordTable::new(), |table, (name, token)| table.add(name, token))
    }
}

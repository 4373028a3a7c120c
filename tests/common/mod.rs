pub use dsnlex::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_keywords {

    use dsnlex::lexing::KeywordTable;

    pub const WIRE: u32 = 42;
    pub const PCB: u32 = 0;
    pub const NET: u32 = 7;

    pub fn new() -> KeywordTable {
        vec![("pcb", PCB), ("net", NET), ("wire", WIRE)]
            .into_iter()
            .collect()
    }
}

#[allow(dead_code)]
pub mod test_token {

    use dsnlex::lexing::*;

    pub fn test(kind: Tok, text: &str) -> Token {
        Token::new(kind, text)
    }

    pub fn left() -> Token {
        test(Tok::Left, "(")
    }

    pub fn right() -> Token {
        test(Tok::Right, ")")
    }

    pub fn dash() -> Token {
        test(Tok::Dash, "-")
    }

    pub fn symbol(text: &str) -> Token {
        test(Tok::Symbol, text)
    }

    pub fn number(text: &str) -> Token {
        test(Tok::Number, text)
    }

    pub fn string(text: &str) -> Token {
        test(Tok::String, text)
    }

    pub fn comment(text: &str) -> Token {
        test(Tok::Comment, text)
    }

    pub fn keyword(id: u32, text: &str) -> Token {
        test(Tok::Keyword(id), text)
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}

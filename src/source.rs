use log::trace;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Produces one line of text at a time, tracking how many lines have been consumed.
pub trait LineReader {
    /// Reads the next line, terminator included. Returns the line's length in bytes,
    /// which is at least 1 for an empty line, or 0 once the source is exhausted.
    fn read_line(&mut self) -> io::Result<usize>;

    /// The most recently read line. Only valid until the next `read_line`.
    fn line(&self) -> &str;

    /// 1-based count of lines consumed so far.
    fn line_number(&self) -> usize;

    /// Origin label used in diagnostics, e.g. a filename or "clipboard".
    fn source_name(&self) -> &str;
}

pub struct FileLineReader {
    reader: BufReader<File>,
    name: String,
    bytes: Vec<u8>,
    line: String,
    line_number: usize,
}

impl FileLineReader {
    pub fn new(file: File, name: &str) -> Self {
        FileLineReader {
            reader: BufReader::new(file),
            name: String::from(name),
            bytes: Vec::new(),
            line: String::new(),
            line_number: 0,
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(FileLineReader::new(file, &path.display().to_string()))
    }
}

impl LineReader for FileLineReader {
    /// Bytes that are not valid UTF-8 decode to U+FFFD; the returned length
    /// is still the raw byte count.
    fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();
        self.bytes.clear();
        let length = self.reader.read_until(b'\n', &mut self.bytes)?;
        if length > 0 {
            self.line.push_str(&String::from_utf8_lossy(&self.bytes));
            self.line_number += 1;
        }
        Ok(length)
    }

    fn line(&self) -> &str {
        &self.line
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

pub struct StringLineReader {
    content: String,
    index: usize,
    name: String,
    line: String,
    line_number: usize,
}

impl StringLineReader {
    pub fn new(content: &str, name: &str) -> Self {
        StringLineReader {
            content: String::from(content),
            index: 0,
            name: String::from(name),
            line: String::new(),
            line_number: 0,
        }
    }

    pub fn clipboard(content: &str) -> Self {
        StringLineReader::new(content, "clipboard")
    }
}

impl LineReader for StringLineReader {
    fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();

        let rest = &self.content[self.index..];
        let end = match rest.find('\n') {
            Some(newline) => newline + 1,
            None => rest.len(),
        };

        self.line.push_str(&rest[..end]);
        self.index += end;
        if end > 0 {
            self.line_number += 1;
        }
        Ok(end)
    }

    fn line(&self) -> &str {
        &self.line
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

pub fn file(path: &str) -> io::Result<Box<dyn LineReader>> {
    Ok(Box::new(FileLineReader::open(path)?))
}

pub fn text(text: &str) -> Box<dyn LineReader> {
    Box::new(StringLineReader::clipboard(text))
}

/// Owns every reader pushed onto it. The bottom reader is never popped, so
/// there is always a current reader.
pub struct ReaderStack {
    readers: Vec<Box<dyn LineReader>>,
}

impl ReaderStack {
    pub fn new(initial: Box<dyn LineReader>) -> Self {
        ReaderStack {
            readers: vec![initial],
        }
    }

    pub fn push(&mut self, reader: Box<dyn LineReader>) {
        trace!(target: "lexer", "Pushing reader -- {}", reader.source_name());
        self.readers.push(reader);
    }

    /// Drops the current reader and resumes the one beneath it. Fails without
    /// touching the stack when only one reader remains.
    pub fn pop(&mut self) -> bool {
        if self.readers.len() < 2 {
            return false;
        }

        if let Some(popped) = self.readers.pop() {
            trace!(
                target: "lexer",
                "Popped reader {} after {} lines",
                popped.source_name(),
                popped.line_number()
            );
        }
        true
    }

    pub fn current(&self) -> &dyn LineReader {
        // The stack is never empty
        self.readers[self.readers.len() - 1].as_ref()
    }

    pub fn current_mut(&mut self) -> &mut dyn LineReader {
        let top = self.readers.len() - 1;
        self.readers[top].as_mut()
    }

    pub fn depth(&self) -> usize {
        self.readers.len()
    }
}

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Splits a byte stream into lines.
///
/// A line ends at `\n`, and a `\r` directly before the end of a line is
/// dropped with it. The last line does not need a terminator, and a
/// terminator at the very end of the stream does not start an extra empty
/// line. Lines are handed out as raw bytes, so input that is not UTF-8 still
/// scans.
pub struct LineScanner<R> {
    reader: R,
    line: Vec<u8>,
}

impl LineScanner<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        log::debug!("opened {}", path.display());
        Ok(LineScanner::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        LineScanner {
            reader,
            line: Vec::new(),
        }
    }

    /// Returns the next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
        }
        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }

        Ok(Some(&self.line))
    }
}

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Whitespace-token input plus the two output streams of the menu.
///
/// Tokens are pulled across line boundaries, so `Alice Engineer R&D` on one
/// line answers three prompts, and a field typed with spaces only keeps its
/// first word.
pub struct Console<R, W, E> {
    input: R,
    pending: VecDeque<String>,
    pub out: W,
    pub err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            out,
            err,
        }
    }

    /// Next token, or `None` once input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            // Lossy: undecodable bytes become U+FFFD, not an I/O error.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        self.next_token()
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", message.as_ref())
    }

    pub fn complain(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.err, "{}", message.as_ref())
    }
}

#[cfg(test)]
pub(crate) type TestConsole = Console<io::Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

#[cfg(test)]
impl TestConsole {
    pub(crate) fn scripted(input: &str) -> Self {
        Self::scripted_bytes(input.as_bytes())
    }

    pub(crate) fn scripted_bytes(input: &[u8]) -> Self {
        Console::new(io::Cursor::new(input.to_vec()), Vec::new(), Vec::new())
    }

    pub(crate) fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub(crate) fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

//! Whitespace tokenizer for the stub's input stream.
//!
//! Tokens are maximal runs of non-delimiter characters and may be spread
//! over several lines. Input is pulled one line at a time and only when the
//! buffered tokens run out: the manager on the other end of the pipe keeps it
//! open until it has read our answer, so reading ahead to end of input would
//! deadlock both processes.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Returns true if `c` separates tokens.
///
/// This is the JVM's `Character.isWhitespace` set, which `java.util.Scanner`
/// splits on, not Unicode `White_Space`: the no-break spaces U+00A0,
/// U+2007 and U+202F and the control U+0085 belong to a token, while the
/// information separators U+001C..=U+001F split tokens.
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Lazily splits a buffered reader into delimiter-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a token reader over the given input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Blank lines are skipped. Byte sequences that are not valid UTF-8 are
    /// replaced with U+FFFD rather than failing the read.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&line);
            self.pending.extend(
                line.split(is_delimiter)
                    .filter(|token| !token.is_empty())
                    .map(String::from),
            );
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> R {
        self.reader
    }
}

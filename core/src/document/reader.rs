use std::io::{self, Read};

use ropey::iter::Chunks;

/// [`Read`] adapter over a rope, so the searcher can scan a document without
/// first collecting it into one contiguous string.
pub struct RopeReader<'a> {
    chunks: Chunks<'a>,
    current: &'a [u8],
}

impl<'a> RopeReader<'a> {
    pub(super) fn new(chunks: Chunks<'a>) -> Self {
        Self {
            chunks,
            current: &[],
        }
    }
}

impl Read for RopeReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.current.is_empty() {
            match self.chunks.next() {
                Some(chunk) => self.current = chunk.as_bytes(),
                None => return Ok(0),
            }
        }

        let n = buf.len().min(self.current.len());
        buf[..n].copy_from_slice(&self.current[..n]);
        self.current = &self.current[n..];
        Ok(n)
    }
}

//! Buffered byte source with exactly one byte of pushback

use std::io::{self, BufReader, Bytes, Read};

pub struct ByteSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
    pushed_back: Option<u8>,
    exhausted: bool,
}

impl<R: Read> ByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            pushed_back: None,
            exhausted: false,
        }
    }

    /// Next byte, or `None` once the stream is exhausted. End of input is
    /// sticky: the underlying reader is not polled again after it reports it.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushed_back.take() {
            return Ok(Some(byte));
        }

        if self.exhausted {
            return Ok(None);
        }

        match self.bytes.next() {
            Some(Ok(byte)) => Ok(Some(byte)),
            Some(Err(error)) => Err(error),
            None => {
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    /// Return the most recently read byte so the next read sees it again
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(
            self.pushed_back.is_none(),
            "pushback capacity is a single byte"
        );
        self.pushed_back = Some(byte);
    }
}

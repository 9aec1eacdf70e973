use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the lines of a UTF-8 text file.
///
/// A line ends with `\n`, `\r` or `\r\n`; a trailing run of bytes without
/// an ending is also a line, and an empty file has none. The whole file is
/// validated as UTF-8 while it is streamed, so a file that fails validation
/// part way contributes nothing.
///
/// # Errors
/// `EngineError::NotUtf8` when the content does not decode, `EngineError::FileRead`
/// for any I/O failure while opening or reading.
pub fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    count_reader(BufReader::new(file), path)
}

/// Streaming core of [`count_lines`], generic over the reader.
///
/// # Errors
/// Same as [`count_lines`]; `path` is only used to label errors.
pub fn count_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<u64> {
    let mut lines = 0u64;
    let mut last_byte: Option<u8> = None;
    let mut validator = Utf8Validator::default();

    loop {
        let buf = reader.fill_buf().map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if buf.is_empty() {
            break;
        }

        validator.feed(buf).map_err(|offset| EngineError::NotUtf8 {
            path: path.to_path_buf(),
            offset,
        })?;

        lines += count_line_endings(buf, last_byte == Some(b'\r'));
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    validator.finish().map_err(|offset| EngineError::NotUtf8 {
        path: path.to_path_buf(),
        offset,
    })?;

    // 末尾に改行がない場合の行カウント補正
    if let Some(b) = last_byte
        && b != b'\n'
        && b != b'\r'
    {
        lines += 1;
    }

    Ok(lines)
}

/// Number of line endings in `buf`, treating `\r\n` as one.
///
/// `after_cr` is set when the previous chunk ended with `\r`, so a `\r\n`
/// split across chunks is not counted twice.
fn count_line_endings(buf: &[u8], after_cr: bool) -> u64 {
    let lf = bytecount::count(buf, b'\n');
    let cr = bytecount::count(buf, b'\r');
    let mut crlf = if cr == 0 {
        0
    } else {
        buf.windows(2).filter(|w| *w == b"\r\n").count()
    };
    if after_cr && buf.first() == Some(&b'\n') {
        crlf += 1;
    }
    (lf + cr - crlf) as u64
}

/// Incremental UTF-8 check across buffer boundaries.
///
/// At most three bytes of an unfinished sequence are held back between chunks.
/// Errors carry the absolute byte offset of the first invalid byte.
#[derive(Debug, Default)]
struct Utf8Validator {
    pending: Vec<u8>,
    offset: u64,
}

impl Utf8Validator {
    fn feed(&mut self, chunk: &[u8]) -> std::result::Result<(), u64> {
        if self.pending.is_empty() {
            return self.check(chunk);
        }

        // Complete the held-back sequence with the head of the new chunk.
        let take = chunk.len().min(4 - self.pending.len());
        let mut joined = std::mem::take(&mut self.pending);
        joined.extend_from_slice(&chunk[..take]);
        match std::str::from_utf8(&joined) {
            Ok(_) => {}
            Err(e) if e.error_len().is_none() && e.valid_up_to() == 0 && take == chunk.len() => {
                // Still incomplete, and the chunk is exhausted.
                self.pending = joined;
                return Ok(());
            }
            Err(e) if e.valid_up_to() == 0 => return Err(self.offset),
            Err(_) => {}
        }

        let seq_len = utf8_sequence_len(joined[0]);
        let used = seq_len - (joined.len() - take);
        self.offset += seq_len as u64;
        self.check(&chunk[used..])
    }

    fn check(&mut self, bytes: &[u8]) -> std::result::Result<(), u64> {
        match std::str::from_utf8(bytes) {
            Ok(_) => {
                self.offset += bytes.len() as u64;
                Ok(())
            }
            Err(e) if e.error_len().is_none() => {
                let valid = e.valid_up_to();
                self.offset += valid as u64;
                self.pending.extend_from_slice(&bytes[valid..]);
                Ok(())
            }
            Err(e) => Err(self.offset + e.valid_up_to() as u64),
        }
    }

    fn finish(self) -> std::result::Result<(), u64> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(self.offset)
        }
    }
}

/// Length of the UTF-8 sequence introduced by `lead`.
const fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

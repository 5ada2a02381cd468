//! Small reading helpers shared by the decoder.
//!
//! All helpers work on any [`BufRead`] so the same code serves in-memory
//! slices and buffered readers. Peeking never consumes input.

use std::io::{self, BufRead, ErrorKind};
use std::str::FromStr;

/// Returns the next byte without consuming it, or `None` at end of input.
pub fn peek<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Appends bytes to `out` up to `sentinel`, which is left in the reader.
///
/// Returns `true` if the sentinel was found. When the input ends first, the
/// bytes read so far are still appended and `false` is returned.
pub fn read_up_to<R: BufRead + ?Sized>(
    reader: &mut R,
    out: &mut Vec<u8>,
    sentinel: u8,
) -> io::Result<bool> {
    loop {
        let (found, used) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(false);
            }
            match available.iter().position(|&b| b == sentinel) {
                Some(i) => {
                    out.extend_from_slice(&available[..i]);
                    (true, i)
                }
                None => {
                    out.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };
        reader.consume(used);
        if found {
            return Ok(true);
        }
    }
}

/// Appends bytes to `out` up to and including `sentinel`, consuming it.
///
/// Returns `true` if the sentinel was found (it is then the last byte of `out`).
pub fn read_until<R: BufRead + ?Sized>(
    reader: &mut R,
    out: &mut Vec<u8>,
    sentinel: u8,
) -> io::Result<bool> {
    let start = out.len();
    reader.read_until(sentinel, out)?;
    Ok(out.len() > start && out.last() == Some(&sentinel))
}

/// Converts the whole of `text` into a number.
///
/// Unlike a prefix scan, any byte that is not part of the number (including
/// surrounding whitespace) makes the conversion fail.
pub fn str_to_num<N: FromStr>(text: &[u8]) -> Option<N> {
    std::str::from_utf8(text).ok()?.parse().ok()
}

//! Character I/O over byte streams
//!
//! `Output` writes a cell as one UTF-8 encoded character and `Input` reads one
//! UTF-8 encoded character. The engine has no end-of-input policy of its own:
//! whatever error the stream reports is surfaced as-is.

use crate::memory::Cell;
use std::io::{self, Read, Write};

/// Written for cell values that are not Unicode scalar values
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Convert a cell to the character it prints as
pub fn cell_to_char(value: Cell) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT)
}

/// Write `value` as a single UTF-8 encoded character
pub fn write_cell<W: Write + ?Sized>(output: &mut W, value: Cell) -> io::Result<()> {
    let mut buf = [0u8; 4];
    let encoded = cell_to_char(value).encode_utf8(&mut buf);
    output.write_all(encoded.as_bytes())
}

/// Read exactly one UTF-8 encoded character.
///
/// End of stream surfaces as [`io::ErrorKind::UnexpectedEof`]; malformed or
/// truncated sequences as [`io::ErrorKind::InvalidData`] or `UnexpectedEof`.
pub fn read_char<R: Read + ?Sized>(input: &mut R) -> io::Result<char> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf[..1])?;

    let width = match buf[0] {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        lead => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid UTF-8 lead byte 0x{:02x}", lead),
            ))
        }
    };

    if width > 1 {
        input.read_exact(&mut buf[1..width])?;
    }

    std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "malformed UTF-8 character"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ascii_then_eof() {
        let mut input = &b"A"[..];
        assert_eq!(read_char(&mut input).unwrap(), 'A');
        let err = read_char(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_multibyte() {
        let mut input = "é✕𝓍".as_bytes();
        assert_eq!(read_char(&mut input).unwrap(), 'é');
        assert_eq!(read_char(&mut input).unwrap(), '✕');
        assert_eq!(read_char(&mut input).unwrap(), '𝓍');
    }

    #[test]
    fn test_read_rejects_bad_lead_and_truncation() {
        let mut input = &[0x80u8][..];
        assert_eq!(read_char(&mut input).unwrap_err().kind(), io::ErrorKind::InvalidData);

        let mut truncated = &[0xe2u8, 0x9c][..];
        assert_eq!(
            read_char(&mut truncated).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_write_cell() {
        let mut out = Vec::new();
        write_cell(&mut out, 72).unwrap();
        write_cell(&mut out, 0x2715).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "H✕");
    }

    #[test]
    fn test_out_of_range_cells_print_replacement() {
        assert_eq!(cell_to_char(-1), REPLACEMENT);
        assert_eq!(cell_to_char(0xD800), REPLACEMENT);
        assert_eq!(cell_to_char(0x11_0000), REPLACEMENT);
        assert_eq!(cell_to_char(10), '\n');
    }
}

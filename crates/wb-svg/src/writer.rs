use core::fmt;

use crate::error::SvgError;

/// Text sink over a fixed, caller-owned byte buffer.
///
/// The cursor counts committed bytes. A write that does not fit turns the
/// cursor into the overflow sentinel; from then on every write is a no-op and
/// [`SvgWriter::finish`] fails. One byte is always kept free so the committed
/// text stays NUL-terminated.
#[derive(Debug)]
pub struct SvgWriter<'a> {
    buf: &'a mut [u8],
    cursor: Option<usize>,
}

impl<'a> SvgWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Result<Self, SvgError> {
        let Some(first) = buf.first_mut() else {
            return Err(SvgError::EmptyBuffer);
        };
        *first = 0;
        Ok(Self {
            buf,
            cursor: Some(0),
        })
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Committed length, or `None` after an overflow.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_overflowed(&self) -> bool {
        self.cursor.is_none()
    }

    /// Formats `args` into the remaining space.
    pub fn append(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Text committed so far; empty after an overflow.
    pub fn as_str(&self) -> &str {
        match self.cursor {
            // Only whole `&str` fragments are ever committed.
            Some(end) => core::str::from_utf8(&self.buf[..end]).unwrap_or_default(),
            None => "",
        }
    }

    pub fn finish(self) -> Result<usize, SvgError> {
        self.cursor.ok_or(SvgError::Overflow {
            capacity: self.capacity(),
        })
    }
}

impl fmt::Write for SvgWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let Some(cursor) = self.cursor else {
            return Err(fmt::Error);
        };

        let remaining = self.buf.len() - cursor;
        if remaining == 0 || s.len() >= remaining {
            // Keep whatever fits, like a truncating snprintf; the caller must
            // discard the buffer anyway.
            let keep = remaining.saturating_sub(1);
            self.buf[cursor..cursor + keep].copy_from_slice(&s.as_bytes()[..keep]);
            if let Some(nul) = self.buf.get_mut(cursor + keep) {
                *nul = 0;
            }
            self.cursor = None;
            return Err(fmt::Error);
        }

        let end = cursor + s.len();
        self.buf[cursor..end].copy_from_slice(s.as_bytes());
        self.buf[end] = 0;
        self.cursor = Some(end);
        Ok(())
    }
}

/// Counts bytes without storing them.
#[derive(Debug, Default)]
pub(crate) struct ByteCounter(pub(crate) usize);

impl fmt::Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::SvgWriter;
    use crate::SvgError;

    #[test]
    fn empty_buffer_is_rejected() {
        let mut buf: [u8; 0] = [];
        assert_eq!(SvgWriter::new(&mut buf).unwrap_err(), SvgError::EmptyBuffer);
    }

    #[test]
    fn appends_advance_cursor_and_terminate() {
        let mut buf = [0xAAu8; 16];
        let mut w = SvgWriter::new(&mut buf).expect("non-empty buffer");
        w.append(format_args!("<{}>", "svg"));
        write!(w, "{}", 42).expect("fits");

        assert_eq!(w.cursor(), Some(7));
        assert_eq!(w.as_str(), "<svg>42");
        assert_eq!(w.finish(), Ok(7));
        assert_eq!(&buf[..8], b"<svg>42\0");
    }

    #[test]
    fn one_byte_is_reserved_for_the_terminator() {
        let mut buf = [0u8; 4];
        let mut w = SvgWriter::new(&mut buf).expect("non-empty buffer");
        w.append(format_args!("abc"));
        assert_eq!(w.cursor(), Some(3));

        let mut buf = [0u8; 4];
        let mut w = SvgWriter::new(&mut buf).expect("non-empty buffer");
        w.append(format_args!("abcd"));
        assert!(w.is_overflowed());
        assert_eq!(w.capacity(), 4);
        assert_eq!(w.finish(), Err(SvgError::Overflow { capacity: 4 }));
    }

    #[test]
    fn overflow_is_sticky() {
        let mut buf = [0u8; 8];
        let mut w = SvgWriter::new(&mut buf).expect("non-empty buffer");
        w.append(format_args!("0123456789"));
        assert!(w.is_overflowed());

        w.append(format_args!("x"));
        assert!(w.is_overflowed());
        assert_eq!(w.as_str(), "");
        assert!(w.finish().is_err());
    }

    #[test]
    fn single_byte_buffer_only_holds_the_terminator() {
        let mut buf = [1u8];
        let mut w = SvgWriter::new(&mut buf).expect("non-empty buffer");
        w.append(format_args!(""));
        assert_eq!(w.cursor(), Some(0));
        w.append(format_args!("a"));
        assert!(w.is_overflowed());
        assert_eq!(buf, [0]);
    }
}

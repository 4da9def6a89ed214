//! Memory-backed print sinks

use super::Print;

/// Print into a borrowed byte buffer
///
/// The last byte of the buffer is kept free so that
/// [`SliceSink::terminate`] can always write a NUL. Bytes beyond that are
/// refused (counted as 0).
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    /// Wrap `buf`, starting empty
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far, excluding any terminator
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes that can still be accepted
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(1) - self.len
    }

    /// Written bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Written bytes as text, if they are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Write a NUL after the last byte
    ///
    /// Does nothing on a zero-length buffer.
    pub fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
    }

    /// Forget the written bytes
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Print for SliceSink<'_> {
    fn write_byte(&mut self, byte: u8) -> usize {
        if self.len + 1 < self.buf.len() {
            self.buf[self.len] = byte;
            self.len += 1;
            1
        } else {
            0
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        n
    }
}

impl<const N: usize> Print for heapless::Vec<u8, N> {
    fn write_byte(&mut self, byte: u8) -> usize {
        match self.push(byte) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(N - self.len());
        match self.extend_from_slice(&bytes[..n]) {
            Ok(()) => n,
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::Base;

    #[test]
    fn test_slice_sink_reserves_terminator() {
        let mut buf = [0xAAu8; 6];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.remaining(), 5);
        assert_eq!(sink.print_str("abcdefg"), 5);
        assert_eq!(sink.write_byte(b'x'), 0);
        assert_eq!(sink.as_str(), Some("abcde"));
        sink.terminate();
        assert_eq!(buf, *b"abcde\0");
    }

    #[test]
    fn test_slice_sink_bytewise_and_bulk_agree() {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        let mut bulk = SliceSink::new(&mut a);
        let mut bytewise = SliceSink::new(&mut b);

        let n_bulk = bulk.write_bytes(b"0123456789");
        let n_bytewise: usize = b"0123456789".iter().map(|&c| bytewise.write_byte(c)).sum();
        assert_eq!(n_bulk, n_bytewise);
        assert_eq!(bulk.as_bytes(), bytewise.as_bytes());
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.remaining(), 0);
        assert_eq!(sink.print_u64(7, Base::DEC), 0);
        sink.terminate();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_clear_reuses_buffer() {
        let mut buf = [0u8; 8];
        let mut sink = SliceSink::new(&mut buf);
        sink.print_str("old");
        sink.clear();
        sink.print_str("new!");
        assert_eq!(sink.as_bytes(), b"new!");
    }

    #[test]
    fn test_heapless_vec_full() {
        let mut out: heapless::Vec<u8, 4> = heapless::Vec::new();
        assert_eq!(out.write_bytes(b"abcdef"), 4);
        assert_eq!(out.write_byte(b'g'), 0);
        assert_eq!(&out[..], b"abcd");
    }
}

//! XDR decoder
//!
//! The decoder reads values out of a borrowed source buffer through a
//! monotonically-advancing cursor. Each operation either advances the cursor
//! by exactly the number of bytes its layout prescribes or fails with the
//! cursor unchanged.
//!
//! One deliberate exception to strict bounds checking: fixed-size opaque
//! reads are lenient about a short source. If fewer real bytes remain than
//! the declared size, the missing tail is treated as implicit zeros and the
//! cursor still advances past the full padded region, as if the buffer were
//! zero-extended. Most XDR implementations reject this case; here the
//! leniency is intentional and relied upon (see [`Decoder::get_fixed_opaque`]).

use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::padded_len;

/// Reads XDR-encoded values from a borrowed byte buffer
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    charset: Charset,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over the given source buffer, cursor at 0, with the
    /// default Latin-1 string charset
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            charset: Charset::default(),
        }
    }

    /// Create a decoder with an explicit string charset
    #[inline]
    pub fn with_charset(buf: &'a [u8], charset: Charset) -> Self {
        Self {
            buf,
            pos: 0,
            charset,
        }
    }

    /// The charset used by the string operations
    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// The full source buffer
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Rebind the decoder to a new source buffer and reset the cursor to 0
    #[inline]
    pub fn reset(&mut self, buf: &'a [u8]) {
        self.buf = buf;
        self.pos = 0;
    }

    /// Current cursor offset into the source buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an arbitrary offset.
    ///
    /// No bounds validation happens here; an out-of-range offset only
    /// surfaces at the next read.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.pos = position;
    }

    /// Bytes remaining between the cursor and the end of the source
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Assert that the source buffer has been fully consumed.
    ///
    /// Fails with [`Error::Residual`] if unread bytes remain past the cursor.
    pub fn done(&self) -> Result<()> {
        if self.pos < self.buf.len() {
            return Err(Error::Residual {
                position: self.pos,
                remaining: self.buf.len() - self.pos,
            });
        }
        Ok(())
    }

    /// Consume exactly `needed` bytes, or fail without moving the cursor
    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < needed {
            return Err(Error::Truncated { available, needed });
        }
        let bytes = &self.buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    /// Read an unsigned 32-bit integer (4 bytes, big-endian)
    #[inline]
    pub fn get_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read a signed 32-bit integer (4 bytes, big-endian)
    #[inline]
    pub fn get_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read an enum value (encoded as a signed 32-bit integer)
    #[inline]
    pub fn get_enum(&mut self) -> Result<i32> {
        self.get_i32()
    }

    /// Read a boolean: a 4-byte integer, any nonzero value is `true`
    #[inline]
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.get_i32()? != 0)
    }

    /// Read an unsigned 64-bit integer ("uhyper", 8 bytes, big-endian)
    #[inline]
    pub fn get_u64(&mut self) -> Result<u64> {
        let bytes = self.take(8)?;
        Ok(u64::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read a signed 64-bit integer ("hyper", 8 bytes, big-endian)
    #[inline]
    pub fn get_i64(&mut self) -> Result<i64> {
        let bytes = self.take(8)?;
        Ok(i64::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read a 32-bit IEEE 754 float (4 bytes, big-endian)
    #[inline]
    pub fn get_f32(&mut self) -> Result<f32> {
        let bytes = self.take(4)?;
        Ok(f32::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read a 64-bit IEEE 754 double (8 bytes, big-endian)
    #[inline]
    pub fn get_f64(&mut self) -> Result<f64> {
        let bytes = self.take(8)?;
        Ok(f64::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Read fixed-size opaque data, returning exactly `size` bytes.
    ///
    /// Lenient by design: if the source ends inside the padded region, the
    /// shortfall is filled with zeros instead of failing, and the cursor
    /// still advances by `padded_len(size)` as if the buffer were
    /// zero-extended. This cannot fail, which is why it returns a bare
    /// `Vec<u8>` rather than a `Result`.
    pub fn get_fixed_opaque(&mut self, size: usize) -> Vec<u8> {
        let mut data = vec![0u8; size];
        if self.pos < self.buf.len() {
            let end = self.buf.len().min(self.pos + size);
            let real = &self.buf[self.pos..end];
            data[..real.len()].copy_from_slice(real);
        }
        self.pos = self.pos.saturating_add(padded_len(size));
        data
    }

    /// Read a fixed-size string: fixed opaque, then charset decode.
    ///
    /// The cursor is restored if the bytes do not decode in the configured
    /// charset.
    pub fn get_fixed_string(&mut self, size: usize) -> Result<String> {
        let mark = self.pos;
        let data = self.get_fixed_opaque(size);
        match self.charset.decode("get_fixed_string", &data) {
            Ok(text) => Ok(text),
            Err(err) => {
                self.pos = mark;
                Err(err)
            }
        }
    }

    /// Read variable-length opaque data: u32 length prefix, then a fixed
    /// opaque of that length
    pub fn get_opaque(&mut self) -> Result<Vec<u8>> {
        let len = self.get_u32()?;
        Ok(self.get_fixed_opaque(len as usize))
    }

    /// Read a variable-length string: u32 length prefix, then a fixed
    /// string of that length.
    ///
    /// The cursor is restored on any failure.
    pub fn get_string(&mut self) -> Result<String> {
        let mark = self.pos;
        let len = self.get_u32()?;
        match self.get_fixed_string(len as usize) {
            Ok(text) => Ok(text),
            Err(err) => {
                self.pos = mark;
                Err(err)
            }
        }
    }

    /// Read a list: continuation marker 1 precedes each item, marker 0
    /// terminates. Any other marker value is a format error.
    ///
    /// The cursor is restored on any failure.
    pub fn get_list<T, F>(&mut self, mut get_item: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mark = self.pos;
        let mut items = Vec::new();
        loop {
            let marker = match self.get_u32() {
                Ok(marker) => marker,
                Err(err) => {
                    self.pos = mark;
                    return Err(err);
                }
            };
            match marker {
                0 => return Ok(items),
                1 => match get_item(self) {
                    Ok(item) => items.push(item),
                    Err(err) => {
                        self.pos = mark;
                        return Err(err);
                    }
                },
                other => {
                    self.pos = mark;
                    return Err(Error::BadMarker(other));
                }
            }
        }
    }

    /// Read a fixed array: exactly `count` items back-to-back, no markers.
    ///
    /// The cursor is restored on any failure.
    pub fn get_fixed_array<T, F>(&mut self, count: usize, mut get_item: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mark = self.pos;
        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            match get_item(self) {
                Ok(item) => items.push(item),
                Err(err) => {
                    self.pos = mark;
                    return Err(err);
                }
            }
        }
        Ok(items)
    }

    /// Read a variable array: u32 item count, then that many items as a
    /// fixed array.
    ///
    /// The cursor is restored on any failure.
    pub fn get_array<T, F>(&mut self, get_item: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mark = self.pos;
        let count = self.get_u32()?;
        match self.get_fixed_array(count as usize, get_item) {
            Ok(items) => Ok(items),
            Err(err) => {
                self.pos = mark;
                Err(err)
            }
        }
    }

    /// Read void: consumes no bytes
    #[inline]
    pub fn get_void(&mut self) {}
}

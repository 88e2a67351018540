//! XDR encoder
//!
//! The encoder accumulates an append-only byte buffer by serializing typed
//! values in caller-determined order. Every encoded unit is big-endian and
//! occupies a multiple of 4 bytes. Operations that can fail leave the buffer
//! exactly as it was at entry, so a failed call never corrupts the output.

use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::padded_len;

/// Accumulates XDR-encoded values into an owned, append-only buffer
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    charset: Charset,
}

impl Encoder {
    /// Create a new encoder with the default Latin-1 string charset
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new encoder with an explicit string charset
    #[inline]
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            buf: Vec::new(),
            charset,
        }
    }

    /// The charset used by the string operations
    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// The bytes accumulated so far, without resetting
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder, returning the accumulated buffer
    #[inline]
    pub fn into_buffer(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes accumulated so far
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been encoded yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discard the accumulated bytes and start a new buffer
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Write an unsigned 32-bit integer (4 bytes, big-endian).
    ///
    /// Values at the top of the unsigned range encode as their raw bytes;
    /// `u32::MAX` becomes `FF FF FF FF`.
    #[inline]
    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a signed 32-bit integer (4 bytes, big-endian)
    #[inline]
    pub fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write an enum value (XDR encodes enums as signed 32-bit integers)
    #[inline]
    pub fn put_enum(&mut self, value: i32) {
        self.put_i32(value);
    }

    /// Write a boolean as a 4-byte integer: 1 for true, 0 for false
    #[inline]
    pub fn put_bool(&mut self, value: bool) {
        self.put_u32(u32::from(value));
    }

    /// Write an unsigned 64-bit integer ("uhyper", 8 bytes, big-endian)
    #[inline]
    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a signed 64-bit integer ("hyper", 8 bytes, big-endian)
    #[inline]
    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a 32-bit IEEE 754 float (4 bytes, big-endian)
    #[inline]
    pub fn put_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a 64-bit IEEE 754 double (8 bytes, big-endian)
    #[inline]
    pub fn put_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write fixed-size opaque data occupying `padded_len(size)` bytes.
    ///
    /// Input longer than `size` is truncated; input shorter is zero-filled
    /// up to `size`; the remainder to the 4-byte boundary is zero padding.
    pub fn put_fixed_opaque(&mut self, size: usize, bytes: &[u8]) {
        let mark = self.buf.len();
        let data = &bytes[..bytes.len().min(size)];
        self.buf.extend_from_slice(data);
        self.buf.resize(mark + padded_len(size), 0);
    }

    /// Write a fixed-size string: charset-encode, then fixed opaque
    pub fn put_fixed_string(&mut self, size: usize, text: &str) -> Result<()> {
        let encoded = self.charset.encode("put_fixed_string", text)?;
        self.put_fixed_opaque(size, &encoded);
        Ok(())
    }

    /// Write variable-length opaque data: u32 byte length, then the bytes
    /// padded to a 4-byte boundary
    pub fn put_opaque(&mut self, bytes: &[u8]) -> Result<()> {
        let len = u32::try_from(bytes.len())
            .map_err(|_| Error::conversion("put_opaque", &bytes.len()))?;
        self.put_u32(len);
        self.put_fixed_opaque(len as usize, bytes);
        Ok(())
    }

    /// Write a variable-length string: charset-encode, then variable opaque
    pub fn put_string(&mut self, text: &str) -> Result<()> {
        let encoded = self.charset.encode("put_string", text)?;
        self.put_opaque(&encoded)
    }

    /// Write a list: each item is prefixed with continuation marker 1, and a
    /// final marker 0 terminates the sequence.
    ///
    /// If `put_item` fails, the buffer is rolled back to its state at entry.
    pub fn put_list<T, F>(&mut self, items: &[T], mut put_item: F) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        let mark = self.buf.len();
        for item in items {
            self.put_u32(1);
            if let Err(err) = put_item(self, item) {
                self.buf.truncate(mark);
                return Err(err);
            }
        }
        self.put_u32(0);
        Ok(())
    }

    /// Write a fixed array: `declared` items back-to-back, no markers and no
    /// count prefix.
    ///
    /// Fails with [`Error::ArraySize`] before writing anything if the item
    /// count does not match `declared`.
    pub fn put_fixed_array<T, F>(
        &mut self,
        declared: usize,
        items: &[T],
        mut put_item: F,
    ) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        if items.len() != declared {
            return Err(Error::ArraySize {
                declared,
                actual: items.len(),
            });
        }
        let mark = self.buf.len();
        for item in items {
            if let Err(err) = put_item(self, item) {
                self.buf.truncate(mark);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Write a variable array: u32 item count, then the items as a fixed
    /// array of that length
    pub fn put_array<T, F>(&mut self, items: &[T], put_item: F) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        let count = u32::try_from(items.len())
            .map_err(|_| Error::conversion("put_array", &items.len()))?;
        let mark = self.buf.len();
        self.put_u32(count);
        if let Err(err) = self.put_fixed_array(items.len(), items, put_item) {
            self.buf.truncate(mark);
            return Err(err);
        }
        Ok(())
    }

    /// Write void: no bytes
    #[inline]
    pub fn put_void(&mut self) {}
}

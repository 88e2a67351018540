//! Text charset configuration
//!
//! XDR strings are opaque byte data on the wire; the charset decides how
//! Rust `str` values map to those bytes. The default is Latin-1, where the
//! Unicode code points U+0000..=U+00FF map one-to-one to single bytes. The
//! charset is carried explicitly by each [`Encoder`](crate::Encoder) and
//! [`Decoder`](crate::Decoder) instance; there is no process-wide default.

use crate::error::{Error, Result};

/// Mapping between `str` values and on-wire string bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    /// ISO 8859-1: code points U+0000..=U+00FF map 1:1 to bytes.
    /// Encoding rejects anything above U+00FF; decoding never fails.
    #[default]
    Latin1,
    /// UTF-8: encoding never fails; decoding rejects invalid sequences
    Utf8,
    /// 7-bit ASCII: both directions reject bytes/chars above 0x7F
    Ascii,
}

impl Charset {
    /// Encode text to its on-wire byte representation.
    ///
    /// `op` names the calling operation for error context.
    pub(crate) fn encode(self, op: &'static str, text: &str) -> Result<Vec<u8>> {
        match self {
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| Error::conversion(op, &text)))
                .collect(),
            Charset::Utf8 => Ok(text.as_bytes().to_vec()),
            Charset::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(Error::conversion(op, &text))
                }
            }
        }
    }

    /// Decode on-wire bytes back into text
    pub(crate) fn decode(self, op: &'static str, bytes: &[u8]) -> Result<String> {
        match self {
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| Error::conversion(op, &bytes))
            }
            Charset::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    Err(Error::conversion(op, &bytes))
                }
            }
        }
    }
}

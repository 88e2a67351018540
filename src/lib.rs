//! xdrpack: an XDR (RFC 1014) value codec
//!
//! This crate packs typed values into the XDR wire layout and unpacks them
//! again: big-endian throughout, every unit padded to a multiple of 4 bytes.
//! It is a pure in-memory codec — no transport, no RPC framing, no
//! interface-file code generation. A caller encodes a sequence of values,
//! extracts the buffer, and later decodes the same sequence in the same
//! order; the format carries no type tags beyond list markers and length
//! prefixes.
//!
//! # Wire format
//!
//! | Unit | Layout |
//! |------|--------|
//! | u32 / i32 / bool / enum / f32 | 4 bytes, big-endian |
//! | u64 / i64 (hyper) / f64 | 8 bytes, big-endian |
//! | fixed opaque(n) | `padded_len(n)` bytes: n data bytes, then zero padding |
//! | variable opaque | u32 length L, then fixed opaque(L) |
//! | fixed string(n) | fixed opaque(n) of the charset-encoded text |
//! | variable string | variable opaque of the charset-encoded text |
//! | list | repeated (u32 marker=1, item), terminated by u32 marker=0 |
//! | fixed array(n) | n items back-to-back, no markers |
//! | variable array | u32 count N, then fixed array(N) |
//! | void | zero bytes |
//!
//! # Example
//!
//! ```rust
//! use xdrpack::{Decoder, Encoder};
//!
//! let mut enc = Encoder::new();
//! enc.put_u32(9);
//! enc.put_string("hello world")?;
//! enc.put_list(&[0u32, 1, 2, 3, 4], |e, &v| {
//!     e.put_u32(v);
//!     Ok(())
//! })?;
//!
//! let buf = enc.into_buffer();
//! let mut dec = Decoder::new(&buf);
//! assert_eq!(dec.get_u32()?, 9);
//! assert_eq!(dec.get_string()?, "hello world");
//! assert_eq!(dec.get_list(|d| d.get_u32())?, vec![0, 1, 2, 3, 4]);
//! dec.done()?;
//! # Ok::<(), xdrpack::Error>(())
//! ```
//!
//! # Lenient short reads
//!
//! Fixed-size opaque (and string) reads deliberately do not fail when the
//! source buffer ends inside the declared region: the missing tail is read
//! as zero bytes and the cursor advances as if the buffer were zero-extended.
//! This is non-standard for XDR and is preserved on purpose; see
//! [`Decoder::get_fixed_opaque`].
//!
//! # Strings
//!
//! Text is encoded through a [`Charset`] chosen at construction (Latin-1 by
//! default, UTF-8 and ASCII available). Text that does not fit the charset
//! fails with a conversion error; nothing is written on failure.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod charset;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use charset::Charset;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, ErrorKind, Result};

/// XDR basic block size: every encoded unit occupies a multiple of 4 bytes
pub const BLOCK_SIZE: usize = 4;

/// Smallest multiple of [`BLOCK_SIZE`] that is >= `n`
#[inline]
pub const fn padded_len(n: usize) -> usize {
    n.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

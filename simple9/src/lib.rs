//! Simple-9: word-aligned compression of small non-negative integers.
//!
//! Every 32 bit word carries a 4 bit selector in its low bits and up to 28
//! payload bits, split into equally sized slots. A stream is the vbyte
//! encoded number of items followed by as many words as needed to hold them.
//!
//! ```
//! let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! let bytes = simple9::to_vec(&values).unwrap();
//! let (decoded, read) = simple9::from_slice(&bytes).unwrap();
//! assert_eq!(values, decoded);
//! assert_eq!(bytes.len(), read);
//! ```

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod decode;
mod encode;
mod error;
mod selector;
mod unrolled;

pub mod vbyte;

pub use {
    decode::{decode, from_slice, unpack},
    encode::{encode, pack, to_vec},
    error::{Error, Result},
    selector::{selector, Selector, CODE_BITS, MAX_ITEMS, MAX_VALUE, SELECTORS, SELECTOR_BITS},
    unrolled::decode_fast,
};

/// Decoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Bounds checked extraction, exact output allocation.
    Checked,
    /// Unrolled extraction over an over-allocated output buffer.
    Unrolled,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::Checked
    }
}

impl Decoder {
    /// Decodes a stream with the chosen strategy.
    /// Returns the values and the number of bytes read.
    pub fn decode<R: std::io::Read>(self, r: R) -> Result<(Vec<u32>, usize)> {
        match self {
            Decoder::Checked => decode(r),
            Decoder::Unrolled => decode_fast(r),
        }
    }
}

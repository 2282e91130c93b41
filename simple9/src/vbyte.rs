//! Variable byte encoding of unsigned integers, used for the stream header.
//!
//! - integers are serialized 7 bits at a time, starting with the
//!   least significant bits
//! - the most significant bit (msb) in each output byte indicates if there
//!   is a continuation byte (msb = 1)

use std::io;

use crate::{Error, Result};

// MAX_VBYTE_LENn is the maximum length of a vbyte-encoded n-bit integer.
pub const MAX_VBYTE_LEN32: usize = 5;
pub const MAX_VBYTE_LEN64: usize = 10;

pub trait Vbyte: Sized {
    /// Encodes self into buf and returns the number of bytes written.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is too small.
    fn encode(&self, buf: &mut [u8]) -> usize;

    /// Decodes a value from the front of buf, returning it with the number of bytes read.
    fn decode(buf: &[u8]) -> Result<(Self, usize)>;

    /// Writes self to w and returns the number of bytes written.
    fn write_to<W: io::Write>(&self, w: W) -> io::Result<usize>;

    /// Reads one value from r, one byte at a time.
    fn read_from<R: io::Read>(r: R) -> Result<(Self, usize)>;
}

pub fn encode<V: Vbyte>(buf: &mut [u8], v: &V) -> usize {
    <V as Vbyte>::encode(v, buf)
}

pub fn decode<V: Vbyte>(buf: &[u8]) -> Result<(V, usize)> {
    <V as Vbyte>::decode(buf)
}

/// Number of bytes `v` occupies once encoded.
pub fn encoded_len(v: u64) -> usize {
    let mut v = v;
    let mut n = 1;
    while v >= 0x80 {
        v >>= 7;
        n += 1;
    }
    n
}

macro_rules! impl_Vbyte {
    ( $( $u:ty ),* ) => ($(
        impl Vbyte for $u {
            fn encode(&self, buf: &mut [u8]) -> usize {
                let mut x = *self;
                let mut i = 0;
                while x >= 0x80 {
                    buf[i] = x as u8 | 0x80;
                    x >>= 7;
                    i += 1;
                }
                buf[i] = x as u8;
                i + 1
            }

            fn decode(buf: &[u8]) -> Result<(Self, usize)> {
                let mut x: $u = 0;
                let mut s = 0u32;
                for (i, &b) in buf.iter().enumerate() {
                    let g = (b & 0x7f) as $u;
                    if s >= <$u>::BITS || (g << s) >> s != g {
                        return Err(Error::Overflow);
                    }
                    x |= g << s;
                    if b < 0x80 {
                        return Ok((x, i + 1));
                    }
                    s += 7;
                }
                Err(Error::Truncated)
            }

            fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<usize> {
                let mut buf = [0; MAX_VBYTE_LEN64];
                let n = self.encode(&mut buf);
                w.write_all(&buf[..n])?;
                Ok(n)
            }

            fn read_from<R: io::Read>(mut r: R) -> Result<(Self, usize)> {
                let mut x: $u = 0;
                let mut s = 0u32;
                let mut n = 0;
                loop {
                    let mut byte = [0u8; 1];
                    r.read_exact(&mut byte)?;
                    n += 1;

                    let b = byte[0];
                    let g = (b & 0x7f) as $u;
                    if s >= <$u>::BITS || (g << s) >> s != g {
                        return Err(Error::Overflow);
                    }
                    x |= g << s;
                    if b < 0x80 {
                        return Ok((x, n));
                    }
                    s += 7;
                }
            }
        }
    )*)
}
impl_Vbyte!(u32, u64, usize);

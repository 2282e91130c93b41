//! Decoder with one straight-line extraction per selector.
//!
//! There is no per-item bounds check inside a word: every word writes its full
//! capacity, so the last word may run up to `MAX_ITEMS - 1` slots past the
//! logical length. The output always lives in an `OverrunBuffer`, which
//! reserves exactly that slack and zero-fills it one word at a time.

use std::io;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::{
    selector::{SELECTOR_BITS, SELECTOR_MASK},
    vbyte::Vbyte,
    Error, Result, MAX_ITEMS,
};

// Writes `$items` fields of `$bits` each from `$data` into `$dst`.
// The destination is sliced once, so the indexing below needs no checks.
macro_rules! unroll {
    ($dst:ident, $data:expr, $items:literal x $bits:literal; $( $i:literal )*) => {{
        let dst = &mut $dst[..$items];
        $( dst[$i] = ($data >> ($i * $bits)) & ((1 << $bits) - 1); )*
        $items
    }};
}

/// Output of the unrolled decoder: room for `n` items plus the overrun of a
/// full last word. Capacity is reserved up front, length grows per word.
struct OverrunBuffer {
    buf: Vec<u32>,
}

impl OverrunBuffer {
    fn with_items(n: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(n.saturating_add(MAX_ITEMS - 1))?;
        Ok(OverrunBuffer { buf })
    }

    /// The `MAX_ITEMS` slots starting at `pos`, where `pos` is below `n`.
    /// Never reallocates, since `pos + MAX_ITEMS <= n + MAX_ITEMS - 1`.
    fn word(&mut self, pos: usize) -> &mut [u32] {
        let end = pos + MAX_ITEMS;
        if self.buf.len() < end {
            self.buf.resize(end, 0);
        }
        &mut self.buf[pos..end]
    }

    fn into_vec(self) -> Vec<u32> {
        self.buf
    }
}

/// Decodes into the over-allocated buffer and leaves the overrun in place.
/// Returns the buffer, the logical length and the number of bytes read.
fn decode_overrun<R: io::Read>(mut r: R) -> Result<(Vec<u32>, usize, usize)> {
    let (n, mut bytes) = usize::read_from(&mut r)?;
    let mut buf = OverrunBuffer::with_items(n)?;

    let mut pos = 0;
    while pos < n {
        let word = r.read_u32::<LittleEndian>()?;
        bytes += 4;

        let data = word >> SELECTOR_BITS;
        let dst = buf.word(pos);
        let k = match word & SELECTOR_MASK {
            0 => unroll!(dst, data, 28 x 1;
                0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27),
            1 => unroll!(dst, data, 14 x 2; 0 1 2 3 4 5 6 7 8 9 10 11 12 13),
            2 => unroll!(dst, data, 9 x 3; 0 1 2 3 4 5 6 7 8),
            3 => unroll!(dst, data, 7 x 4; 0 1 2 3 4 5 6),
            4 => unroll!(dst, data, 5 x 5; 0 1 2 3 4),
            5 => unroll!(dst, data, 4 x 7; 0 1 2 3),
            6 => unroll!(dst, data, 3 x 9; 0 1 2),
            7 => unroll!(dst, data, 2 x 14; 0 1),
            8 => {
                dst[0] = data;
                1
            }
            s => return Err(Error::InvalidSelector(s)),
        };
        trace!("word {:#010x}: selector {} items {}", word, word & SELECTOR_MASK, k);
        pos += k;
    }

    debug!("decoded {} items from {} bytes (unrolled)", n, bytes);
    Ok((buf.into_vec(), n, bytes))
}

/// Decodes a stream from `r` with the unrolled extractor.
/// Returns the values and the number of bytes read.
///
/// The result equals `decode`'s. The returned vector is cut back to the
/// logical length but keeps the capacity of the over-allocated buffer.
pub fn decode_fast<R: io::Read>(r: R) -> Result<(Vec<u32>, usize)> {
    let (mut buf, n, bytes) = decode_overrun(r)?;
    buf.truncate(n);
    Ok((buf, bytes))
}

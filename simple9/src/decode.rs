use std::io;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::{
    selector::{selector, SELECTOR_BITS, SELECTOR_MASK},
    vbyte::Vbyte,
    Result,
};

/// Appends the items of `word` to `out`, stopping early once `out` holds `limit` items.
/// Returns the number of items appended.
pub fn unpack(word: u32, out: &mut Vec<u32>, limit: usize) -> Result<usize> {
    let sel = selector(word & SELECTOR_MASK)?;
    let mask = sel.mask();
    let mut data = word >> SELECTOR_BITS;

    let start = out.len();
    for _ in 0..sel.items {
        if out.len() == limit {
            break;
        }
        out.push(data & mask);
        data >>= sel.bits;
    }
    Ok(out.len() - start)
}

/// Decodes a stream from `r`.
/// Returns the values and the number of bytes read.
pub fn decode<R: io::Read>(mut r: R) -> Result<(Vec<u32>, usize)> {
    let (n, mut bytes) = usize::read_from(&mut r)?;

    let mut out = Vec::new();
    out.try_reserve_exact(n)?;

    while out.len() < n {
        let word = r.read_u32::<LittleEndian>()?;
        bytes += 4;
        let k = unpack(word, &mut out, n)?;
        trace!("word {:#010x}: selector {} items {}", word, word & SELECTOR_MASK, k);
    }

    debug!("decoded {} items from {} bytes", n, bytes);
    Ok((out, bytes))
}

/// Decodes a stream held in memory.
pub fn from_slice(buf: &[u8]) -> Result<(Vec<u32>, usize)> {
    decode(buf)
}

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, trace};

use crate::{
    selector::{SELECTORS, SELECTOR_BITS, SELECTOR_MASK},
    vbyte::Vbyte,
    Error, Result, MAX_VALUE,
};

/// Packs as many leading items of `values` as the greedy rule allows into one word.
/// Returns the word and the number of items consumed.
///
/// Selectors are tried in ascending item width. The first one that either
/// fills its capacity or swallows the rest of the input wins.
pub fn pack(values: &[u32]) -> Result<(u32, usize)> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    for (index, sel) in SELECTORS.iter().enumerate() {
        let mut word = index as u32;
        let mut shift = SELECTOR_BITS;
        let mut n = 0;

        for (i, &v) in values.iter().enumerate() {
            if v > MAX_VALUE {
                return Err(Error::ValueTooLarge { index: i, value: v });
            }
            if n == sel.items || !sel.fits(v) {
                break;
            }
            word |= v << shift;
            shift += sel.bits;
            n += 1;
        }

        if n == sel.items || n == values.len() {
            return Ok((word, n));
        }
    }

    // The 28 bit selector accepts any single value <= MAX_VALUE.
    unreachable!()
}

/// Encodes `values` into `w`, returning the number of bytes written.
///
/// Every value is checked before the first byte is written, so a rejected
/// input leaves `w` untouched.
pub fn encode<W: io::Write>(values: &[u32], mut w: W) -> Result<usize> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = values.iter().position(|&v| v > MAX_VALUE) {
        let value = values[index];
        return Err(Error::ValueTooLarge { index, value });
    }

    let mut bytes = values.len().write_to(&mut w)?;
    let mut i = 0;
    while i < values.len() {
        let (word, n) = pack(&values[i..])?;
        trace!("word {:#010x}: selector {} items {}", word, word & SELECTOR_MASK, n);
        w.write_u32::<LittleEndian>(word)?;
        bytes += 4;
        i += n;
    }

    debug!("encoded {} items into {} bytes", values.len(), bytes);
    Ok(bytes)
}

/// Encodes `values` into a freshly allocated buffer.
pub fn to_vec(values: &[u32]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(values, &mut buf)?;
    Ok(buf)
}

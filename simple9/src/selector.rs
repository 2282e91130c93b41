use crate::{Error, Result};

/// Number of low bits of a word that hold the selector index.
pub const SELECTOR_BITS: u32 = 4;

pub(crate) const SELECTOR_MASK: u32 = (1 << SELECTOR_BITS) - 1;

/// Payload bits of a word.
pub const CODE_BITS: u32 = 32 - SELECTOR_BITS;

/// Largest codable value, `2^28 - 1`.
pub const MAX_VALUE: u32 = (1 << CODE_BITS) - 1;

/// Most items a single word can carry.
pub const MAX_ITEMS: usize = SELECTORS[0].items;

/// One packing layout of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    /// Item capacity.
    pub items: usize,
    /// Width of each item.
    pub bits: u32,
    /// Unused high bits.
    pub waste: u32,
}

// Ascending item width. The encoder takes the first row that fits,
// so the order is part of the wire format.
pub const SELECTORS: [Selector; 9] = [
    Selector::new(28, 1, 0),
    Selector::new(14, 2, 0),
    Selector::new(9, 3, 1),
    Selector::new(7, 4, 0),
    Selector::new(5, 5, 3),
    Selector::new(4, 7, 0),
    Selector::new(3, 9, 1),
    Selector::new(2, 14, 0),
    Selector::new(1, 28, 0),
];

impl Selector {
    const fn new(items: usize, bits: u32, waste: u32) -> Self {
        Selector { items, bits, waste }
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        (1 << self.bits) - 1
    }

    #[inline]
    pub fn fits(&self, value: u32) -> bool {
        value <= self.mask()
    }
}

/// Looks up the selector stored in the low bits of a word.
#[inline]
pub fn selector(index: u32) -> Result<&'static Selector> {
    SELECTORS
        .get(index as usize)
        .ok_or(Error::InvalidSelector(index))
}

#[test]
fn test_rows() {
    for s in SELECTORS.iter() {
        assert_eq!(SELECTOR_BITS + s.items as u32 * s.bits + s.waste, 32);
    }
    assert!(SELECTORS.windows(2).all(|w| w[0].bits < w[1].bits));
    assert_eq!(MAX_ITEMS, 28);
    assert_eq!(MAX_VALUE, 268_435_455);
    assert_eq!(SELECTORS[8].mask(), MAX_VALUE);
}

#[test]
fn test_lookup() {
    assert_eq!(selector(2).unwrap().items, 9);
    for i in 9..16 {
        match selector(i) {
            Err(Error::InvalidSelector(j)) => assert_eq!(i, j),
            other => panic!("unexpected {:?}", other),
        }
    }
}

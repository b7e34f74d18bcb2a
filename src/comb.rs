//! Enumeration of fixed-width ordinal tuples. A tuple of width `w` over base `b` takes every
//! value in `0..b` in each of its `w` slots; the enumeration is a plain odometer over the
//! `b^w` possibilities. Tuples with repeated ordinals are rejected by a separate linear-time
//! distinctness check rather than folded into the enumeration.

/// Decodes the given `sequence` number into its ordinal tuple, least significant slot first.
pub fn pick(base: usize, sequence: u128, ordinals: &mut [usize]) {
    let mut residual = sequence;
    let base = base as u128;
    for ordinal in ordinals.iter_mut() {
        let (quotient, remainder) = (residual / base, residual % base);
        residual = quotient;
        *ordinal = remainder as usize;
    }
}

/// Number of ordinal tuples of the given `width` over `base`; i.e., `base^width`.
pub fn count_sequences(base: usize, width: usize) -> u128 {
    (base as u128)
        .checked_pow(width as u32)
        .unwrap_or_else(|| panic!("enumeration of {base}^{width} tuples overflows"))
}

/// A restartable, finite, lazy enumeration of all ordinal tuples of a given width.
pub struct Sequencer {
    base: usize,
    width: usize,
}
impl Sequencer {
    pub fn new(base: usize, width: usize) -> Self {
        Self { base, width }
    }
}

impl IntoIterator for &Sequencer {
    type Item = Vec<usize>;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            base: self.base,
            width: self.width,
            sequence: 0,
            sequences: count_sequences(self.base, self.width),
        }
    }
}

pub struct Iter {
    base: usize,
    width: usize,
    sequence: u128,
    sequences: u128,
}
impl Iterator for Iter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence != self.sequences {
            let mut ordinals = vec![0; self.width];
            pick(self.base, self.sequence, &mut ordinals);
            self.sequence += 1;
            Some(ordinals)
        } else {
            None
        }
    }
}

/// Tests whether no ordinal occurs twice, using a caller-supplied scratch bitmap whose length
/// must cover the base.
pub fn is_distinct(ordinals: &[usize], bitmap: &mut [bool]) -> bool {
    bitmap.fill(false);
    for &ordinal in ordinals {
        if bitmap[ordinal] {
            return false;
        }
        bitmap[ordinal] = true;
    }
    true
}

/// Unbounded iterator over the "next lexicographic bit permutation" sequence:
/// every item is the next larger integer with the same number of set bits as
/// the seed. The seed itself is not yielded.
///
/// Bit hack from
/// http://www-graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
///
/// There is no upper bound; callers take exactly as many terms as they need,
/// and reverse the collected sequence when strongest-pattern-first order is
/// wanted. Reseed to restart.
pub struct BitSequence {
    word: u32,
}

impl BitSequence {
    pub fn new(seed: u32) -> BitSequence {
        BitSequence { word: seed }
    }
}

impl Iterator for BitSequence {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let w = self.word;
        let t = (w | (w - 1)) + 1;
        // the division must be integer (floor) division; t & -t and w & -w
        // isolate the lowest set bits
        self.word = t | ((((t & t.wrapping_neg()) / (w & w.wrapping_neg())) >> 1) - 1);
        Some(self.word)
    }
}

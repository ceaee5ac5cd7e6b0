//! Single-pass interleave transform.
//!
//! One pass walks a write cursor `i` (from 1) and a read cursor `j` (from 2,
//! stepping by 2) over the buffer; at each step the character at `j` is
//! inserted at `i` and its old copy, now at `j + 1`, is removed. Because
//! everything between `i` and `j` shifts right by one, after step `k` the
//! prefix holds the characters from positions `0, 2, .., 2k` and the next
//! read lands on position `2k + 2` of the original buffer again. The pass
//! therefore gathers every even position in order, followed by every odd
//! position in order.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9  →  1 3 5 7 9 2 4 6 8
//! ```

use std::mem;

/// Precomputed permutation of one interleave pass for a fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interleaver {
    /// Output position `k` takes the character at input position `gather[k]`
    gather: Vec<usize>,
}

impl Interleaver {
    /// Build the forward pass for buffers of `len` characters
    pub fn new(len: usize) -> Self {
        let evens = (len + 1) / 2;
        let gather = (0..len)
            .map(|k| if k < evens { 2 * k } else { 2 * (k - evens) + 1 })
            .collect();
        Self { gather }
    }

    /// Buffer length this pass applies to
    pub fn len(&self) -> usize {
        self.gather.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gather.is_empty()
    }

    /// Source position for each output position
    pub fn gather(&self) -> &[usize] {
        &self.gather
    }

    /// Apply one pass to `buf`, using `scratch` as the staging buffer.
    ///
    /// `scratch` is overwritten; keeping it alive across passes avoids an
    /// allocation per pass.
    pub fn apply(&self, buf: &mut Vec<char>, scratch: &mut Vec<char>) {
        assert_eq!(buf.len(), self.gather.len());

        scratch.clear();
        scratch.extend(self.gather.iter().map(|&from| buf[from]));
        mem::swap(buf, scratch);
    }

    /// The pass that undoes this one
    pub fn invert(&self) -> Self {
        let mut gather = vec![0usize; self.gather.len()];
        for (to, &from) in self.gather.iter().enumerate() {
            gather[from] = to;
        }
        Self { gather }
    }

    /// Number of passes after which every position is back where it started.
    ///
    /// This is the LCM of the permutation's cycle lengths; the period of any
    /// particular text of this length divides it.
    pub fn order(&self) -> u64 {
        let n = self.gather.len();
        let mut visited = vec![false; n];
        let mut order = 1u64;

        for start in 0..n {
            if visited[start] {
                continue;
            }

            // Follow the cycle
            let mut cycle = 0u64;
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                current = self.gather[current];
                cycle += 1;
            }

            order = lcm(order, cycle);
        }

        order
    }
}

/// Apply exactly one interleave pass to `buf`
pub fn single_pass(buf: &mut Vec<char>) {
    let mut scratch = Vec::with_capacity(buf.len());
    Interleaver::new(buf.len()).apply(buf, &mut scratch);
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The cursor insert/remove rule, applied literally
    fn literal_pass(buf: &mut Vec<char>) {
        let (mut i, mut j) = (1, 2);
        while j < buf.len() {
            let c = buf[j];
            buf.insert(i, c);
            buf.remove(j + 1);
            i += 1;
            j += 2;
        }
    }

    fn pass(s: &str) -> String {
        let mut buf: Vec<char> = s.chars().collect();
        single_pass(&mut buf);
        buf.into_iter().collect()
    }

    #[test]
    fn test_single_pass_digits() {
        assert_eq!(pass("123456789"), "135792468");
        assert_eq!(pass("1234567890"), "1357924680");
    }

    #[test]
    fn test_short_buffers_are_fixed() {
        assert_eq!(pass(""), "");
        assert_eq!(pass("A"), "A");
        assert_eq!(pass("AB"), "AB");
        assert_eq!(pass("ABC"), "ACB");
    }

    #[test]
    fn test_matches_literal_rule() {
        for len in 0..64 {
            let original: Vec<char> = (0..len)
                .map(|i| char::from_u32(0x41 + i as u32).unwrap())
                .collect();

            let mut literal = original.clone();
            literal_pass(&mut literal);

            let mut fast = original.clone();
            single_pass(&mut fast);

            assert_eq!(literal, fast, "mismatch at length {}", len);
        }
    }

    #[test]
    fn test_invert_undoes_pass() {
        let forward = Interleaver::new(11);
        let backward = forward.invert();
        let original: Vec<char> = "Hello EPAM!".chars().collect();

        let mut buf = original.clone();
        let mut scratch = Vec::new();
        forward.apply(&mut buf, &mut scratch);
        assert_ne!(buf, original);
        backward.apply(&mut buf, &mut scratch);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_order() {
        assert_eq!(Interleaver::new(0).order(), 1);
        assert_eq!(Interleaver::new(2).order(), 1);
        assert_eq!(Interleaver::new(3).order(), 2);
        assert_eq!(Interleaver::new(9).order(), 6);
        assert_eq!(Interleaver::new(11).order(), 10);
    }

    #[test]
    fn test_order_never_exceeds_length() {
        for len in 1..512 {
            let order = Interleaver::new(len).order();
            assert!(order <= len as u64, "order {} for length {}", order, len);
        }
    }

    #[test]
    fn test_order_passes_are_identity() {
        let interleaver = Interleaver::new(28);
        let original: Vec<char> = "Das lässt sich nicht ändern.".chars().collect();
        let mut buf = original.clone();
        let mut scratch = Vec::new();
        for _ in 0..interleaver.order() {
            interleaver.apply(&mut buf, &mut scratch);
        }
        assert_eq!(buf, original);
    }
}

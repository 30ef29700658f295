//! Vertex subsets encoded as bitmasks: bit `i` is set iff vertex `i` is in the subset.

/// Builds the bitmask of the given vertex indices.
pub fn to_bitmask<I>(vertices: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    vertices.into_iter().fold(0, |mask, v| mask | (1 << v))
}

pub fn contains(mask: usize, v: usize) -> bool {
    mask & (1 << v) != 0
}

pub fn without(mask: usize, v: usize) -> usize {
    mask & !(1 << v)
}

/// Iterates the members of a subset in ascending order.
pub fn members(mask: usize) -> Members {
    Members(mask)
}

#[derive(Debug, Clone, Copy)]
pub struct Members(usize);

impl Iterator for Members {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let v = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Members {}

/// Enumerates every subset of `1..n` (vertex 0 excluded) with exactly `size` members, in
/// increasing mask order.
///
/// Works on the `n - 1` bits above bit 0 and steps with Gosper's hack, so each mask is produced
/// in constant time.
#[derive(Debug, Clone)]
pub struct SubsetsOfSize {
    current: Option<usize>,
    limit: usize,
}

impl SubsetsOfSize {
    pub fn new(n: usize, size: usize) -> Self {
        let bits = n.saturating_sub(1);
        let current = if size > bits {
            None
        } else {
            Some((1usize << size) - 1)
        };
        Self {
            current,
            limit: 1usize << bits,
        }
    }
}

impl Iterator for SubsetsOfSize {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.current?;
        if c == 0 {
            // the single empty subset
            self.current = None;
            return Some(0);
        }
        if c >= self.limit {
            self.current = None;
            return None;
        }

        let lowest = c & c.wrapping_neg();
        let ripple = c + lowest;
        let next = (((ripple ^ c) >> 2) / lowest) | ripple;
        self.current = Some(next);

        Some(c << 1)
    }
}

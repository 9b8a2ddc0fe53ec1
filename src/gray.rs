//! Reflected Gray-code enumeration.
//!
//! A standalone combinatorial utility, independent of the evolutionary
//! loop: [`codes`] lazily enumerates all `k.pow(n)` length-`n` codes over
//! the alphabet `[0, k)` such that successive codes differ in exactly one
//! position, by ±1 modulo `k`.
//!
//! Useful for encoding schemes where adjacent parameter values should
//! decode to adjacent chromosomes.
//!
//! # References
//!
//! - Gray (1953), U.S. Patent 2,632,058, *Pulse Code Communication*
//! - Knuth, TAOCP Vol. 4A, §7.2.1.1, *Generating all n-tuples*

/// Extracts digit `j` of `i` in base `k` (digit 0 is least significant).
pub fn digit(i: u64, k: u64, j: u32) -> u64 {
    (i / k.pow(j)) % k
}

/// Lazily enumerates all length-`n` Gray codes over `[0, k)`.
///
/// The sequence is finite (`k.pow(n)` items) and not restartable; collect
/// it if you need to traverse more than once. `n == 0` yields an empty
/// sequence.
///
/// # Panics
/// Panics if `k < 2`, or if `k.pow(n)` overflows a `u64`.
///
/// # Examples
///
/// ```
/// use radix_ga::gray::codes;
///
/// let binary: Vec<Vec<u32>> = codes(2, 2).collect();
/// assert_eq!(binary, vec![
///     vec![0, 0],
///     vec![0, 1],
///     vec![1, 1],
///     vec![1, 0],
/// ]);
/// ```
pub fn codes(n: usize, k: u32) -> GrayCodes {
    assert!(k >= 2, "base must be at least 2");
    let total = if n == 0 {
        0
    } else {
        (k as u64)
            .checked_pow(n as u32)
            .expect("k.pow(n) overflows u64")
    };
    GrayCodes {
        n,
        k: k as u64,
        index: 0,
        total,
    }
}

/// Iterator over reflected Gray codes. Created by [`codes`].
#[derive(Debug, Clone)]
pub struct GrayCodes {
    n: usize,
    k: u64,
    index: u64,
    total: u64,
}

impl Iterator for GrayCodes {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        if self.index >= self.total {
            return None;
        }
        let i = self.index;
        self.index += 1;

        // Reflected construction: each digit is shifted by the running
        // complement of the digits above it, so that incrementing i
        // changes exactly one output position.
        let mut code = Vec::with_capacity(self.n);
        let mut shift = 0u64;
        for j in (0..self.n as u32).rev() {
            let x = (digit(i, self.k, j) + shift) % self.k;
            shift += self.k - x;
            code.push(x as u32);
        }
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GrayCodes {}

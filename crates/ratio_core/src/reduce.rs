//! Integer-first reduction helpers.
//!
//! GCD is computed iteratively (Euclid) and folded left-to-right across a
//! sequence: `gcd(gcd(gcd(a, b), c), d)`.

use crate::errors::ReduceError;

/// Greatest common divisor; `gcd(x, 0) == x` and `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// GCD of every term. Returns 0 for an empty or all-zero sequence.
pub fn gcd_all(numbers: &[u64]) -> u64 {
    numbers.iter().copied().fold(0, gcd)
}

/// True iff the terms share no common factor above 1.
#[inline]
pub fn is_simplest(numbers: &[u64]) -> bool {
    gcd_all(numbers) == 1
}

/// Divide every term by the GCD of all terms.
///
/// A sequence already in simplest form comes back unchanged. Empty and
/// all-zero sequences have no simplest form and are rejected.
pub fn reduce(numbers: &[u64]) -> Result<Vec<u64>, ReduceError> {
    if numbers.is_empty() {
        return Err(ReduceError::Empty);
    }
    match gcd_all(numbers) {
        0 => Err(ReduceError::AllZero),
        1 => Ok(numbers.to_vec()),
        g => Ok(divide_all(numbers, g)),
    }
}

/// Exact division of every term by `g` (caller guarantees `g` divides all, `g > 0`).
pub(crate) fn divide_all(numbers: &[u64], g: u64) -> Vec<u64> {
    debug_assert!(g > 0);
    numbers.iter().map(|n| n / g).collect()
}

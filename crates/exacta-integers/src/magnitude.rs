//! Unsigned arbitrary-precision magnitudes.
//!
//! A [`Magnitude`] stores a non-negative integer as base-`10^9` chunks in
//! least-significant-first order. The radix is chosen so the product of two
//! chunks fits a 64-bit accumulator and each chunk maps to exactly nine
//! decimal digits, which keeps string conversion free of cross-chunk
//! carries.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;

/// The chunk modulus. Two chunks multiply without overflowing a `u64`.
pub const RADIX: u64 = 1_000_000_000;

/// Decimal digits encoded by one chunk.
pub const CHUNK_DIGITS: usize = 9;

/// An unsigned arbitrary-precision integer.
///
/// Invariants: the chunk vector is never empty, every chunk is below
/// [`RADIX`], and there are no most-significant zero chunks except for the
/// canonical zero value `[0]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    chunks: Vec<u64>,
}

impl Magnitude {
    /// Returns the number of chunks in the representation.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Subtracts `rhs`, failing when the result would be negative.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if `self < rhs`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if *self < *rhs {
            return Err(ArithmeticError::Underflow);
        }
        let mut chunks = Vec::with_capacity(self.chunks.len());
        let mut borrow = 0;
        for (i, &chunk) in self.chunks.iter().enumerate() {
            let sub = rhs.chunks.get(i).copied().unwrap_or(0) + borrow;
            if sub > chunk {
                chunks.push(RADIX + chunk - sub);
                borrow = 1;
            } else {
                chunks.push(chunk - sub);
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0);
        Ok(Self { chunks }.trimmed())
    }

    /// Multiplies by a single chunk value `k`, with `k < RADIX`.
    ///
    /// This is the primitive behind full multiplication and behind the
    /// candidate evaluation in long division.
    #[must_use]
    pub fn mul_small(&self, k: u64) -> Self {
        debug_assert!(k < RADIX);
        if k == 0 || self.is_zero() {
            return Self::zero();
        }
        let mut chunks = Vec::with_capacity(self.chunks.len() + 1);
        let mut carry = 0;
        for &chunk in &self.chunks {
            let t = chunk * k + carry;
            carry = t / RADIX;
            chunks.push(t % RADIX);
        }
        if carry != 0 {
            chunks.push(carry);
        }
        Self { chunks }
    }

    /// Divides by a single chunk value `k` via short division.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `k` is zero.
    pub fn div_small(&self, k: u64) -> Result<Self, ArithmeticError> {
        if k == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        debug_assert!(k < RADIX);
        let mut chunks = vec![0; self.chunks.len()];
        let mut rem = 0;
        for i in (0..self.chunks.len()).rev() {
            let cur = rem * RADIX + self.chunks[i];
            chunks[i] = cur / k;
            rem = cur % k;
        }
        Ok(Self { chunks }.trimmed())
    }

    /// Prepends `n` zero chunks, multiplying the value by `RADIX^n`.
    ///
    /// Zero shifts to zero so the canonical form is preserved.
    #[must_use]
    pub fn shift_chunks(&self, n: usize) -> Self {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let mut chunks = vec![0; n];
        chunks.extend_from_slice(&self.chunks);
        Self { chunks }
    }

    /// Computes the quotient and remainder of `self / rhs`.
    ///
    /// The quotient is built one chunk at a time from the most significant
    /// position down. Each chunk digit is located by binary search for the
    /// largest `d` with `rhs.mul_small(d).shift_chunks(pos) <= remainder`,
    /// exploiting that `mul_small` is monotonic in `d`; a hardware quotient
    /// estimate would not be exact at this non-binary radix.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(rhs))
    }

    /// Long division with a divisor known to be nonzero.
    pub(crate) fn div_rem_nonzero(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(!rhs.is_zero());
        if *self < *rhs {
            return (Self::zero(), self.clone());
        }
        let positions = self.chunks.len() - rhs.chunks.len() + 1;
        let mut quotient = vec![0; positions];
        let mut remainder = self.clone();
        for pos in (0..positions).rev() {
            let mut lo = 0;
            let mut hi = RADIX - 1;
            while lo < hi {
                let mid = (lo + hi + 1) / 2;
                if rhs.mul_small(mid).shift_chunks(pos) <= remainder {
                    lo = mid;
                } else {
                    hi = mid - 1;
                }
            }
            if lo != 0 {
                let scaled = rhs.mul_small(lo).shift_chunks(pos);
                // lo was chosen so that scaled <= remainder
                remainder = match remainder.checked_sub(&scaled) {
                    Ok(r) => r,
                    Err(_) => unreachable!("binary search bounded the digit"),
                };
                quotient[pos] = lo;
            }
        }
        (Self { chunks: quotient }.trimmed(), remainder)
    }

    /// Converts to a `u64` if the value fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        let mut value: u64 = 0;
        for &chunk in self.chunks.iter().rev() {
            value = value.checked_mul(RADIX)?.checked_add(chunk)?;
        }
        Some(value)
    }

    fn trimmed(mut self) -> Self {
        while self.chunks.len() > 1 && self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
        self
    }
}

impl From<u64> for Magnitude {
    fn from(mut value: u64) -> Self {
        let mut chunks = Vec::with_capacity(3);
        loop {
            chunks.push(value % RADIX);
            value /= RADIX;
            if value == 0 {
                break;
            }
        }
        Self { chunks }
    }
}

impl From<u32> for Magnitude {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl FromStr for Magnitude {
    type Err = ArithmeticError;

    /// Parses an unsigned decimal string.
    ///
    /// The string is split into nine-digit groups from the least
    /// significant end; a leading `-`, an empty string, or any non-digit
    /// character is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::InvalidFormat);
        }
        let mut chunks = Vec::with_capacity(s.len() / CHUNK_DIGITS + 1);
        let mut end = s.len();
        while end > 0 {
            let start = end.saturating_sub(CHUNK_DIGITS);
            let chunk = s[start..end]
                .parse()
                .map_err(|_| ArithmeticError::InvalidFormat)?;
            chunks.push(chunk);
            end = start;
        }
        Ok(Self { chunks }.trimmed())
    }
}

impl Zero for Magnitude {
    fn zero() -> Self {
        Self { chunks: vec![0] }
    }

    fn is_zero(&self) -> bool {
        self.chunks == [0]
    }
}

impl One for Magnitude {
    fn one() -> Self {
        Self { chunks: vec![1] }
    }

    fn is_one(&self) -> bool {
        self.chunks == [1]
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.chunks.len().cmp(&other.chunks.len()) {
            Ordering::Equal => self.chunks.iter().rev().cmp(other.chunks.iter().rev()),
            unequal => unequal,
        }
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({self})")
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = self.chunks.iter().rev();
        if let Some(first) = chunks.next() {
            write!(f, "{first}")?;
            for chunk in chunks {
                write!(f, "{chunk:09}")?;
            }
        }
        Ok(())
    }
}

fn add_ref(lhs: &Magnitude, rhs: &Magnitude) -> Magnitude {
    let len = lhs.chunks.len().max(rhs.chunks.len());
    let mut chunks = Vec::with_capacity(len + 1);
    let mut carry = 0;
    for i in 0..len {
        let sum = lhs.chunks.get(i).copied().unwrap_or(0)
            + rhs.chunks.get(i).copied().unwrap_or(0)
            + carry;
        carry = sum / RADIX;
        chunks.push(sum % RADIX);
    }
    if carry != 0 {
        chunks.push(carry);
    }
    Magnitude { chunks }
}

fn mul_ref(lhs: &Magnitude, rhs: &Magnitude) -> Magnitude {
    let mut acc = Magnitude::zero();
    for (i, &chunk) in rhs.chunks.iter().enumerate() {
        if chunk == 0 {
            continue;
        }
        acc = add_ref(&acc, &lhs.mul_small(chunk).shift_chunks(i));
    }
    acc
}

// Arithmetic operations
impl Add for Magnitude {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(&self, &rhs)
    }
}

impl Add<&Magnitude> for Magnitude {
    type Output = Self;

    fn add(self, rhs: &Magnitude) -> Self::Output {
        add_ref(&self, rhs)
    }
}

impl Add for &Magnitude {
    type Output = Magnitude;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(self, rhs)
    }
}

impl Sub for Magnitude {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs > self`; use [`Magnitude::checked_sub`] to handle the
    /// underflow case.
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Magnitude> for Magnitude {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs > self`.
    fn sub(self, rhs: &Magnitude) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Magnitude {
    type Output = Magnitude;

    /// # Panics
    ///
    /// Panics if `rhs > self`.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(diff) => diff,
            Err(_) => panic!("magnitude subtraction underflowed"),
        }
    }
}

impl Mul for Magnitude {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(&self, &rhs)
    }
}

impl Mul<&Magnitude> for Magnitude {
    type Output = Self;

    fn mul(self, rhs: &Magnitude) -> Self::Output {
        mul_ref(&self, rhs)
    }
}

impl Mul for &Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(self, rhs)
    }
}

impl Div for Magnitude {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Magnitude::div_rem`] for a fallible
    /// division.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Magnitude {
    type Output = Magnitude;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "magnitude division by zero");
        self.div_rem_nonzero(rhs).0
    }
}

impl Rem for Magnitude {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &Magnitude {
    type Output = Magnitude;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "magnitude remainder by zero");
        self.div_rem_nonzero(rhs).1
    }
}

//! Signed arbitrary-precision integers.
//!
//! An [`Integer`] pairs a [`Magnitude`] with a [`Sign`]. Zero is always
//! tagged positive, so structural equality is value equality.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::magnitude::Magnitude;

/// The sign of an [`Integer`]. `Negative` orders before `Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Strictly negative values.
    Negative,
    /// Non-negative values, including zero.
    Positive,
}

/// A signed arbitrary-precision integer.
///
/// Invariant: a zero magnitude always carries [`Sign::Positive`]; there is
/// no signed zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    sign: Sign,
    magnitude: Magnitude,
}

impl Integer {
    /// Creates an integer from an `i64`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_parts(sign, Magnitude::from(value.unsigned_abs()))
    }

    /// Builds an integer from a sign and magnitude, normalizing zero.
    pub(crate) fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    /// Returns the sign.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns a reference to the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Consumes the integer, returning its magnitude.
    #[must_use]
    pub fn into_magnitude(self) -> Magnitude {
        self.magnitude
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.sign == Sign::Positive {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Computes the truncated quotient and remainder of `self / rhs`.
    ///
    /// The quotient is positive when the operand signs agree, and the
    /// remainder takes the dividend's sign, so
    /// `(a / c) * c + (a % c) == a` for every nonzero `c`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        let (q, r) = self.magnitude.div_rem(&rhs.magnitude)?;
        let q_sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Ok((Self::from_parts(q_sign, q), Self::from_parts(self.sign, r)))
    }

    /// Computes the greatest common divisor of `self` and `other`.
    ///
    /// The result is non-negative; `gcd(0, 0)` is zero.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.magnitude.clone();
        let mut b = other.magnitude.clone();
        while !b.is_zero() {
            let r = a.div_rem_nonzero(&b).1;
            a = b;
            b = r;
        }
        Self::from_parts(Sign::Positive, a)
    }

    /// Attempts to convert to an `i64`.
    ///
    /// Returns `None` if the value doesn't fit in an `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        match self.sign {
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative if magnitude == i64::MIN.unsigned_abs() => Some(i64::MIN),
            Sign::Negative => i64::try_from(magnitude).ok().map(|v| -v),
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl FromStr for Integer {
    type Err = ArithmeticError;

    /// Parses a signed decimal string: an optional leading `-` followed by
    /// one or more digits. `-0` normalizes to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(digits) => Ok(Self::from_parts(Sign::Negative, digits.parse()?)),
            None => Ok(Self::from_parts(Sign::Positive, s.parse()?)),
        }
    }
}

fn add_ref(lhs: &Integer, rhs: &Integer) -> Integer {
    if lhs.sign == rhs.sign {
        return Integer::from_parts(lhs.sign, &lhs.magnitude + &rhs.magnitude);
    }
    // Differing signs: the larger magnitude decides the result's sign.
    if lhs.magnitude >= rhs.magnitude {
        Integer::from_parts(lhs.sign, &lhs.magnitude - &rhs.magnitude)
    } else {
        Integer::from_parts(rhs.sign, &rhs.magnitude - &lhs.magnitude)
    }
}

fn mul_ref(lhs: &Integer, rhs: &Integer) -> Integer {
    let sign = if lhs.sign == rhs.sign {
        Sign::Positive
    } else {
        Sign::Negative
    };
    Integer::from_parts(sign, &lhs.magnitude * &rhs.magnitude)
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(&self, &rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        add_ref(&self, rhs)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(self, rhs)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add_ref(&self, &-rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        add_ref(&self, &-rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        add_ref(self, &-rhs)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(&self, &rhs)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        mul_ref(&self, rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(self, rhs)
    }
}

impl Div for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Integer::div_rem`] for a fallible
    /// division.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("integer division by zero"),
        }
    }
}

impl Rem for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("integer remainder by zero"),
        }
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        let flipped = match self.sign {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        };
        Integer::from_parts(flipped, self.magnitude.clone())
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::from_parts(Sign::Positive, Magnitude::from(value))
    }
}

impl From<Magnitude> for Integer {
    fn from(magnitude: Magnitude) -> Self {
        Self::from_parts(Sign::Positive, magnitude)
    }
}

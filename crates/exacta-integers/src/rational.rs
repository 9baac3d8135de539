//! Arbitrary-precision rational numbers.
//!
//! A [`Rational`] is a pair of [`Integer`]s kept in canonical form: the
//! denominator is strictly positive and coprime to the numerator. Every
//! constructor and arithmetic operation re-establishes that form, so
//! structural equality is value equality.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::integer::Integer;
use crate::magnitude::Magnitude;

/// An arbitrary-precision rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero; zero denominators are unrepresentable, so the degenerate
    /// `0/0` never reaches reduction.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Creates a rational from `i64` numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Canonicalizes a fraction with a known-nonzero denominator: flips
    /// both parts if the denominator is negative, then divides both by
    /// their gcd.
    fn reduced(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        let (mut numerator, mut denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        // gcd(0, d) = d, so zero reduces to 0/1.
        let g = numerator.gcd(&denominator);
        if !g.is_one() {
            numerator = &numerator / &g;
            denominator = &denominator / &g;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator (always strictly positive).
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Renders the value as a decimal string with exactly `precision`
    /// fractional digits.
    ///
    /// The output is `[-]intpart.fracpart`, or just `[-]intpart` when
    /// `precision` is zero (truncated toward zero). For a positive
    /// precision the expansion computes one digit beyond the request and
    /// rounds the magnitude half-up (half away from zero), carrying into
    /// the integer part when the fraction overflows.
    #[must_use]
    pub fn to_decimal(&self, precision: usize) -> String {
        let n = self.numerator.magnitude();
        let d = self.denominator.magnitude();
        let (mut int_part, mut rem) = n.div_rem_nonzero(d);

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        if precision == 0 {
            out.push_str(&int_part.to_string());
            return out;
        }

        // One digit past the requested precision decides the rounding.
        let mut digits = Vec::with_capacity(precision + 1);
        for _ in 0..=precision {
            rem = rem.mul_small(10);
            let (digit, next) = rem.div_rem_nonzero(d);
            digits.push(digit.to_u64().unwrap_or(0));
            rem = next;
        }
        let extra = digits.pop().unwrap_or(0);
        if extra >= 5 {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                int_part = &int_part + &Magnitude::one();
            }
        }

        out.push_str(&int_part.to_string());
        out.push('.');
        for digit in digits {
            out.push(char::from(b'0' + u8::try_from(digit).unwrap_or(0)));
        }
        out
    }

    /// Converts to an `f64` by parsing a ten-digit decimal rendering.
    ///
    /// Explicitly lossy; never use the result for exact comparisons.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_decimal(10).parse().unwrap_or(f64::NAN)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Valid because denominators are strictly positive.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Parses `"n"` or `"n/d"` where both parts are signed decimal
    /// integers; the denominator defaults to 1 when absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((n, d)) => Self::new(n.parse()?, d.parse()?),
            None => Ok(Self::from_integer(s.parse()?)),
        }
    }
}

fn add_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::reduced(
        &(&lhs.numerator * &rhs.denominator) + &(&lhs.denominator * &rhs.numerator),
        &lhs.denominator * &rhs.denominator,
    )
}

fn mul_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::reduced(
        &lhs.numerator * &rhs.numerator,
        &lhs.denominator * &rhs.denominator,
    )
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(&self, &rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        add_ref(&self, rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add_ref(&self, &-rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        add_ref(&self, &-rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        add_ref(self, &-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(&self, &rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        mul_ref(&self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] for a
    /// fallible division.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("rational division by zero"),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}

//! # exacta-integers
//!
//! Exact arbitrary-precision integer and rational arithmetic.
//!
//! This crate provides:
//! - Unsigned magnitudes stored as base-`10^9` chunks (`Magnitude`)
//! - Sign-magnitude signed integers (`Integer`)
//! - Reduced rationals with decimal expansion (`Rational`)
//!
//! ## Design Principles
//!
//! - **Value semantics**: every operation returns a fresh value; operands
//!   are never mutated through shared storage
//! - **Canonical representations**: no leading zero chunks, no signed zero,
//!   rationals always in lowest terms with a positive denominator
//! - **Decimal-friendly radix**: each chunk holds exactly nine decimal
//!   digits, so parsing and rendering never cross chunk boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod magnitude;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::{Integer, Sign};
pub use magnitude::Magnitude;
pub use rational::Rational;

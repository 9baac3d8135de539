//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Magnitude, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for decimal digit strings well past one chunk
    fn digit_string() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,40}"
    }

    proptest! {
        // Magnitude invariants

        #[test]
        fn magnitude_string_round_trip(s in digit_string()) {
            let m: Magnitude = s.parse().expect("generated digits parse");
            prop_assert_eq!(m.to_string(), s);
        }

        #[test]
        fn magnitude_add_sub_round_trip(a in digit_string(), b in digit_string()) {
            let a: Magnitude = a.parse().expect("generated digits parse");
            let b: Magnitude = b.parse().expect("generated digits parse");
            let sum = &a + &b;
            prop_assert_eq!(sum.checked_sub(&b), Ok(a));
        }

        #[test]
        fn magnitude_mul_commutative(a in digit_string(), b in digit_string()) {
            let a: Magnitude = a.parse().expect("generated digits parse");
            let b: Magnitude = b.parse().expect("generated digits parse");
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn magnitude_mul_distributive(
            a in digit_string(),
            b in digit_string(),
            c in digit_string()
        ) {
            let a: Magnitude = a.parse().expect("generated digits parse");
            let b: Magnitude = b.parse().expect("generated digits parse");
            let c: Magnitude = c.parse().expect("generated digits parse");
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn magnitude_div_rem_identity(a in digit_string(), b in digit_string()) {
            let a: Magnitude = a.parse().expect("generated digits parse");
            let b: Magnitude = b.parse().expect("generated digits parse");
            let (q, r) = a.div_rem(&b).expect("generated divisor is nonzero");
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn integer_add_identity(a in small_int()) {
            let a = Integer::new(a);
            let zero = Integer::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert_eq!(a + neg_a, Integer::zero());
        }

        #[test]
        fn integer_matches_native_arithmetic(a in small_int(), b in small_int()) {
            let big_a = Integer::new(a);
            let big_b = Integer::new(b);
            prop_assert_eq!((&big_a + &big_b).to_i64(), Some(a + b));
            prop_assert_eq!((&big_a - &big_b).to_i64(), Some(a - b));
            prop_assert_eq!((&big_a * &big_b).to_i64(), Some(a * b));
        }

        #[test]
        fn integer_div_rem_identity(a in small_int(), c in non_zero_int()) {
            let a = Integer::new(a);
            let c = Integer::new(c);
            let (q, r) = a.div_rem(&c).expect("divisor is nonzero");
            prop_assert_eq!(&(&q * &c) + &r, a);
        }

        #[test]
        fn integer_div_rem_matches_native(a in small_int(), c in non_zero_int()) {
            let big_a = Integer::new(a);
            let big_c = Integer::new(c);
            let (q, r) = big_a.div_rem(&big_c).expect("divisor is nonzero");
            prop_assert_eq!(q.to_i64(), Some(a / c));
            prop_assert_eq!(r.to_i64(), Some(a % c));
        }

        #[test]
        fn integer_string_round_trip(a in small_int()) {
            let a = Integer::new(a);
            let parsed: Integer = a.to_string().parse().expect("rendered integer parses");
            prop_assert_eq!(parsed, a);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            let rem_a = &a % &g;
            let rem_b = &b % &g;
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("nonzero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("nonzero denominator");
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("nonzero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("nonzero denominator");
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("nonzero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("nonzero denominator");
            let c = Rational::from_i64(num_c, den_c).expect("nonzero denominator");
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_additive_inverse(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).expect("nonzero denominator");
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den).expect("nonzero denominator");
            let inv = a.recip().expect("nonzero rational has a reciprocal");
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_reduction_is_canonical(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den).expect("nonzero denominator");
            prop_assert!(!r.denominator().is_negative());
            let g = r.numerator().gcd(r.denominator());
            prop_assert!(g.is_one());
        }

        #[test]
        fn rational_display_round_trip(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den).expect("nonzero denominator");
            let parsed: Rational = r.to_string().parse().expect("rendered rational parses");
            prop_assert_eq!(parsed, r);
        }
    }
}

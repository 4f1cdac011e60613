//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    #[test]
    fn zero_is_neither_positive_nor_negative() {
        let z = Integer::new(0);
        assert!(!z.is_positive());
        assert!(!z.is_negative());
        assert_eq!(z.signum(), 0);
        let z = Rational::from(0);
        assert!(!z.is_positive());
        assert!(!z.is_negative());
        assert_eq!(z.signum(), 0);
    }

    proptest! {
        #[test]
        fn integer_sign_predicates_match_signum(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!(a.is_positive(), a.signum() == 1);
            prop_assert_eq!(a.is_negative(), a.signum() == -1);
        }

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn integer_gcd_divides_both(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!(!g.is_zero());
            prop_assert!(a.is_divisible_by(&g));
            prop_assert!(b.is_divisible_by(&g));
        }

        #[test]
        fn integer_floor_ceil_bracket(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let fl = a.div_floor(&b);
            let ce = a.div_ceil(&b);
            // floor * b <= a <= ceil * b when b > 0, reversed when b < 0.
            if b.is_positive() {
                prop_assert!(&fl * &b <= a);
                prop_assert!(&ce * &b >= a);
            } else {
                prop_assert!(&fl * &b >= a);
                prop_assert!(&ce * &b <= a);
            }
            // They differ by at most one.
            let diff = &ce - &fl;
            prop_assert!(diff == Integer::new(0) || diff == Integer::new(1));
        }

        #[test]
        fn integer_prquot_is_nearest(a in small_int(), b in 1i64..100i64) {
            let q = Integer::new(a).prquot(&Integer::new(b));
            let q = q.to_i64().unwrap();
            // |a - q*b| <= b/2, i.e. 2|a - q*b| <= b.
            prop_assert!(2 * (a - q * b).abs() <= b);
        }

        #[test]
        fn rational_add_associative(
            an in small_int(), ad in non_zero_int(),
            bn in small_int(), bd in non_zero_int(),
            cn in small_int(), cd in non_zero_int(),
        ) {
            let a = Rational::from_i64(an, ad);
            let b = Rational::from_i64(bn, bd);
            let c = Rational::from_i64(cn, cd);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn rational_recip_inverse(n in non_zero_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert_eq!(&r * &r.recip(), Rational::from(1));
        }

        #[test]
        fn rational_floor_le_ceil(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let fl = Rational::from_integer(r.floor());
            let ce = Rational::from_integer(r.ceil());
            prop_assert!(fl <= r);
            prop_assert!(ce >= r);
            if r.is_integer() {
                prop_assert_eq!(fl, ce);
            }
        }
    }
}

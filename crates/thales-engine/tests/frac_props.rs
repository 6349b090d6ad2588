use proptest::prelude::*;
use thales_engine::Frac;

fn small() -> impl Strategy<Value = i64> {
    -1000..1000i64
}

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-1000..-1i64, 1..1000i64]
}

proptest! {
    #[test]
    fn addition_commutes(a in small(), b in nonzero(), c in small(), d in nonzero()) {
        let x = Frac::new(a, b).unwrap();
        let y = Frac::new(c, d).unwrap();
        prop_assert_eq!(x.checked_add(&y), y.checked_add(&x));
    }

    #[test]
    fn multiplication_distributes(a in small(), b in nonzero(), c in small(), d in nonzero(), e in small(), f in nonzero()) {
        let x = Frac::new(a, b).unwrap();
        let y = Frac::new(c, d).unwrap();
        let z = Frac::new(e, f).unwrap();
        let lhs = x.checked_mul(&y.checked_add(&z).unwrap()).unwrap();
        let rhs = x
            .checked_mul(&y)
            .unwrap()
            .checked_add(&x.checked_mul(&z).unwrap())
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn subtraction_inverts_addition(a in small(), b in nonzero(), c in small(), d in nonzero()) {
        let x = Frac::new(a, b).unwrap();
        let y = Frac::new(c, d).unwrap();
        let roundtrip = x.checked_add(&y).unwrap().checked_sub(&y).unwrap();
        prop_assert_eq!(roundtrip, x);
    }

    #[test]
    fn ordering_matches_floats(a in small(), b in nonzero(), c in small(), d in nonzero()) {
        let x = Frac::new(a, b).unwrap();
        let y = Frac::new(c, d).unwrap();
        if (x.to_f64() - y.to_f64()).abs() > 1e-9 {
            prop_assert_eq!(x < y, x.to_f64() < y.to_f64());
        }
    }

    #[test]
    fn rem_one_lands_in_the_unit_interval(a in small(), b in nonzero()) {
        let x = Frac::new(a, b).unwrap().rem_one();
        prop_assert!(x >= Frac::zero());
        prop_assert!(x < Frac::one());
    }
}

#[test]
fn parses_fraction_integer_and_degree_tokens() {
    assert_eq!(Frac::parse_token("3/4"), Frac::new(3, 4));
    assert_eq!(Frac::parse_token("7"), Some(Frac::from_int(7)));
    assert_eq!(Frac::parse_token("90o"), Frac::new(1, 2));
    assert_eq!(Frac::parse_token("45o"), Frac::new(1, 4));
    assert_eq!(Frac::parse_token("x"), None);
}

#[test]
fn prime_decomposition_reconstructs_the_value() {
    use thales_engine::frac::prime_exponents;
    let value = Frac::new(12, 35).unwrap();
    let factors = prime_exponents(&value).unwrap();
    assert_eq!(factors, vec![(2, 2), (3, 1), (5, -1), (7, -1)]);
    let rebuilt: f64 = factors
        .iter()
        .map(|(p, e)| (*p as f64).powi(*e as i32))
        .product();
    assert!((rebuilt - value.to_f64()).abs() < 1e-12);
    assert!(prime_exponents(&Frac::zero()).is_none());
    assert!(prime_exponents(&Frac::from_int(-3)).is_none());
}

#[test]
fn approximates_small_rationals() {
    assert_eq!(Frac::approximate(0.5, 64, 1e-9), Frac::new(1, 2));
    assert_eq!(Frac::approximate(1.25, 64, 1e-9), Frac::new(5, 4));
    assert_eq!(Frac::approximate(2.0, 64, 1e-9), Some(Frac::from_int(2)));
    assert_eq!(Frac::approximate(std::f64::consts::SQRT_2, 64, 1e-12), None);
}

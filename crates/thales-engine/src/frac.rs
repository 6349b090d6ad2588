//! Exact rational arithmetic for the algebraic tables.
//!
//! Coefficients stay tiny (units, halves, prime exponents), so an `i64`
//! numerator/denominator pair with checked arithmetic is enough. Every
//! operation that could overflow reports `None`; the tables treat that as a
//! recoverable failure and skip the equation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Exact rational number, normalized so `den > 0` and `gcd(num, den) = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frac {
    num: i64,
    den: i64,
}

impl Frac {
    /// Creates a normalized fraction; `None` when the denominator is zero
    /// or normalization overflows.
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let mut num = num as i128;
        let mut den = den as i128;
        if den < 0 {
            num = -num;
            den = -den;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        if g > 0 {
            num /= g as i128;
            den /= g as i128;
        }
        Some(Self {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
        })
    }

    /// Integer constant.
    pub fn from_int(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self::from_int(0)
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::from_int(1)
    }

    /// Whether the fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Numerator of the normalized fraction.
    pub fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator of the normalized fraction (always positive).
    pub fn denom(&self) -> i64 {
        self.den
    }

    /// Checked addition.
    pub fn checked_add(&self, other: &Frac) -> Option<Frac> {
        let num = (self.num as i128)
            .checked_mul(other.den as i128)?
            .checked_add((other.num as i128).checked_mul(self.den as i128)?)?;
        let den = (self.den as i128).checked_mul(other.den as i128)?;
        normalize(num, den)
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: &Frac) -> Option<Frac> {
        self.checked_add(&other.neg())
    }

    /// Checked multiplication.
    pub fn checked_mul(&self, other: &Frac) -> Option<Frac> {
        let num = (self.num as i128).checked_mul(other.num as i128)?;
        let den = (self.den as i128).checked_mul(other.den as i128)?;
        normalize(num, den)
    }

    /// Checked division.
    pub fn checked_div(&self, other: &Frac) -> Option<Frac> {
        if other.num == 0 {
            return None;
        }
        let num = (self.num as i128).checked_mul(other.den as i128)?;
        let den = (self.den as i128).checked_mul(other.num as i128)?;
        normalize(num, den)
    }

    /// Negation (never overflows for normalized values except `i64::MIN`,
    /// which normalization already rejects).
    pub fn neg(&self) -> Frac {
        Frac {
            num: -self.num,
            den: self.den,
        }
    }

    /// Multiplicative inverse.
    pub fn recip(&self) -> Option<Frac> {
        Frac::new(self.den, self.num)
    }

    /// Floating point value of the fraction.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Reduces the fraction modulo 1 into `[0, 1)`.
    pub fn rem_one(&self) -> Frac {
        Frac {
            num: self.num.rem_euclid(self.den),
            den: self.den,
        }
    }

    /// Parses a literal token: `3`, `3/4` or a degree form such as `90o`.
    pub fn parse_token(token: &str) -> Option<Frac> {
        if let Some(degrees) = token.strip_suffix('o') {
            let degrees: i64 = degrees.parse().ok()?;
            return Frac::new(degrees, 180);
        }
        match token.split_once('/') {
            Some((num, den)) => Frac::new(num.parse().ok()?, den.parse().ok()?),
            None => token.parse().ok().map(Frac::from_int),
        }
    }

    /// Approximates a float by a small rational within `tol`, using the
    /// continued-fraction expansion. `None` when no representative with a
    /// denominator below `max_den` exists.
    pub fn approximate(value: f64, max_den: i64, tol: f64) -> Option<Frac> {
        if !value.is_finite() {
            return None;
        }
        let (mut h0, mut h1) = (1i64, value.floor() as i64);
        let (mut k0, mut k1) = (0i64, 1i64);
        let mut x = value - value.floor();
        for _ in 0..64 {
            if (h1 as f64 / k1 as f64 - value).abs() < tol {
                return Frac::new(h1, k1);
            }
            if x.abs() < tol {
                break;
            }
            x = 1.0 / x;
            let a = x.floor();
            if !(a.is_finite() && a.abs() < max_den as f64) {
                break;
            }
            let a = a as i64;
            let h2 = a.checked_mul(h1)?.checked_add(h0)?;
            let k2 = a.checked_mul(k1)?.checked_add(k0)?;
            if k2 > max_den {
                break;
            }
            (h0, h1) = (h1, h2);
            (k0, k1) = (k1, k2);
            x -= a as f64;
        }
        None
    }
}

impl PartialOrd for Frac {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frac {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = (self.num as i128) * (other.den as i128);
        let rhs = (other.num as i128) * (self.den as i128);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn normalize(num: i128, den: i128) -> Option<Frac> {
    if den == 0 {
        return None;
    }
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let g = gcd(num.unsigned_abs(), den.unsigned_abs());
    let (num, den) = if g > 0 {
        (num / g as i128, den / g as i128)
    } else {
        (num, den)
    };
    Some(Frac {
        num: i64::try_from(num).ok()?,
        den: i64::try_from(den).ok()?,
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Decomposes a positive rational into its prime factorization, with
/// negative exponents for the denominator. Returns `None` for zero or
/// negative values (lengths and ratios are positive).
pub fn prime_exponents(value: &Frac) -> Option<Vec<(u64, i64)>> {
    if value.num <= 0 {
        return None;
    }
    let mut factors: Vec<(u64, i64)> = Vec::new();
    accumulate_factors(value.num as u64, 1, &mut factors);
    accumulate_factors(value.den as u64, -1, &mut factors);
    factors.sort_by_key(|(p, _)| *p);
    Some(factors)
}

fn accumulate_factors(mut value: u64, sign: i64, factors: &mut Vec<(u64, i64)>) {
    let mut p = 2u64;
    while p * p <= value {
        while value % p == 0 {
            push_factor(factors, p, sign);
            value /= p;
        }
        p += 1;
    }
    if value > 1 {
        push_factor(factors, value, sign);
    }
}

fn push_factor(factors: &mut Vec<(u64, i64)>, prime: u64, sign: i64) {
    if let Some(entry) = factors.iter_mut().find(|(p, _)| *p == prime) {
        entry.1 += sign;
    } else {
        factors.push((prime, sign));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num_traits::{One, Zero};
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::algorithms::float_approx;
use crate::output::FractionParts;

/// An exact fraction of two machine integers.
///
/// Always stored in canonical form: the denominator is positive, the
/// numerator carries the sign, and the two are coprime. Zero is `0/1`.
/// Every constructor and every arithmetic result goes through the same
/// normalize step, so two equal fractions have identical fields and the
/// derived equality and hashing are exact.
///
/// Arithmetic is plain `i64` arithmetic, including the intermediate
/// cross-products of add, subtract, and compare. Overflow is not
/// detected: debug builds panic, release builds wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts", into = "FractionParts")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Failure to construct a fraction, or to divide by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractionError {
    /// A zero denominator was passed to a constructor, or a division by
    /// the zero fraction was attempted.
    ZeroDenominator,
    /// The input text is not of the form `<int>/<int>`.
    ParseError,
    /// The input float is NaN or infinite.
    NonFinite,
}

impl fmt::Display for FractionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FractionError::ZeroDenominator => write!(fmt, "denominator cannot be zero"),
            FractionError::ParseError => {
                write!(fmt, "expected a fraction of the form \"1/2\"")
            }
            FractionError::NonFinite => {
                write!(fmt, "cannot express a non-finite value as a fraction")
            }
        }
    }
}

impl Error for FractionError {}

/// Euclidean gcd on magnitudes. `gcd(0, n)` is `n`.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Least common multiple of two positive denominators.
fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a.unsigned_abs(), b.unsigned_abs()) as i64 * b
}

impl Fraction {
    /// Creates a fraction from a numerator and denominator, reduced to
    /// canonical form.
    pub fn new(numerator: i64, denominator: i64) -> Result<Fraction, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::normalized(numerator, denominator))
    }

    /// Creates the fraction `value/1`.
    pub fn whole(value: i64) -> Fraction {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    /// Converts a finite float into a fraction.
    ///
    /// Terminating decimals come out exact (`0.5` is `1/2`, `0.345` is
    /// `69/200`); values that do not terminate within six decimal
    /// digits are approximated by continued-fraction expansion. NaN and
    /// infinities are rejected.
    pub fn from_float(value: f64) -> Result<Fraction, FractionError> {
        float_approx::from_float(value)
    }

    /// Sign fix-up plus reduction by the gcd. Every fraction in the
    /// crate is built here; `denominator` must be nonzero.
    pub(crate) fn normalized(numerator: i64, denominator: i64) -> Fraction {
        let (mut numerator, mut denominator) = (numerator, denominator);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        Fraction {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// Returns the numerator, sign included.
    pub fn numer(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    pub fn denom(&self) -> i64 {
        self.denominator
    }

    /// True if the magnitude is below one.
    pub fn is_proper(&self) -> bool {
        self.numerator.unsigned_abs() < self.denominator as u64
    }

    /// True if the magnitude is at least one and the fraction is not a
    /// plain integer.
    pub fn is_improper(&self) -> bool {
        self.numerator.unsigned_abs() >= self.denominator as u64 && self.denominator != 1
    }

    /// True if the fraction represents an integer.
    pub fn is_whole(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// True if the numerator is plus or minus one.
    pub fn is_unit(&self) -> bool {
        self.numerator.unsigned_abs() == 1
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Fraction {
        Fraction {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Returns the sign of the fraction: -1, 0, or 1.
    pub fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    /// Returns the reciprocal. The zero fraction has none.
    pub fn recip(&self) -> Result<Fraction, FractionError> {
        if self.numerator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::normalized(self.denominator, self.numerator))
    }

    /// Approximates the fraction as a float.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, divisor: &Fraction) -> Result<Fraction, FractionError> {
        if divisor.numerator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::normalized(
            self.numerator * divisor.denominator,
            self.denominator * divisor.numerator,
        ))
    }

    /// Adds an integer operand, converting it first.
    pub fn add_int(&self, value: i64) -> Fraction {
        *self + Fraction::whole(value)
    }

    /// Adds a float operand, converting it through
    /// [`Fraction::from_float`].
    pub fn add_float(&self, value: f64) -> Result<Fraction, FractionError> {
        Ok(*self + Fraction::from_float(value)?)
    }

    /// Adds an operand in `"a/b"` text form, parsing it first.
    pub fn add_str(&self, text: &str) -> Result<Fraction, FractionError> {
        Ok(*self + text.parse::<Fraction>()?)
    }

    /// Three-way comparison against an optional fraction, ordering the
    /// absent value after every present one.
    pub fn cmp_option(&self, other: Option<&Fraction>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Less,
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::whole(value)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Fraction, FractionError> {
        Fraction::from_float(value)
    }
}

impl TryFrom<&str> for Fraction {
    type Error = FractionError;

    fn try_from(text: &str) -> Result<Fraction, FractionError> {
        text.parse()
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses the exact form `<int>/<int>`: one separator, an optional
    /// sign on either side, no whitespace.
    fn from_str(text: &str) -> Result<Fraction, FractionError> {
        let (numerator, denominator) = match text.split_once('/') {
            Some(parts) => parts,
            None => return Err(FractionError::ParseError),
        };
        if denominator.contains('/') {
            return Err(FractionError::ParseError);
        }
        let numerator = numerator
            .parse::<i64>()
            .map_err(|_err| FractionError::ParseError)?;
        let denominator = denominator
            .parse::<i64>()
            .map_err(|_err| FractionError::ParseError)?;
        Fraction::new(numerator, denominator)
    }
}

impl fmt::Display for Fraction {
    // The denominator is always rendered, whole values included: the
    // integer 5 reads "5/1".
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}/{}", self.numerator, self.denominator)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        let common = lcm(self.denominator, rhs.denominator);
        Fraction::normalized(
            self.numerator * (common / self.denominator)
                + rhs.numerator * (common / rhs.denominator),
            common,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        let common = lcm(self.denominator, rhs.denominator);
        Fraction::normalized(
            self.numerator * (common / self.denominator)
                - rhs.numerator * (common / rhs.denominator),
            common,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::normalized(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Div for Fraction {
    type Output = Fraction;

    /// See [`Fraction::checked_div`] for the non-panicking form.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is the zero fraction.
    fn div(self, rhs: Fraction) -> Fraction {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(_err) => panic!("division by the zero fraction"),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

macro_rules! ref_binop {
    ($what:ident, $func:ident) => {
        impl<'a> $what for &'a Fraction {
            type Output = Fraction;

            fn $func(self, rhs: &'a Fraction) -> Fraction {
                (*self).$func(*rhs)
            }
        }
    };
}

ref_binop!(Add, add);
ref_binop!(Sub, sub);
ref_binop!(Mul, mul);
ref_binop!(Div, div);

impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -*self
    }
}

// The integer operand is converted first, then combined fraction to
// fraction. Float and string operands are fallible conversions and go
// through `from_float`/`parse` or the `add_*` helpers instead.
macro_rules! int_binop {
    ($what:ident, $func:ident) => {
        impl $what<i64> for Fraction {
            type Output = Fraction;

            fn $func(self, rhs: i64) -> Fraction {
                self.$func(Fraction::whole(rhs))
            }
        }
    };
}

int_binop!(Add, add);
int_binop!(Sub, sub);
int_binop!(Mul, mul);
int_binop!(Div, div);

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        let common = lcm(self.denominator, other.denominator);
        let left = self.numerator * (common / self.denominator);
        let right = other.numerator * (common / other.denominator);
        left.cmp(&right)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction {
            numerator: 0,
            denominator: 1,
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction {
            numerator: 1,
            denominator: 1,
        }
    }
}

impl Default for Fraction {
    fn default() -> Fraction {
        Fraction::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::{Fraction, FractionError};
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn construction_normalizes() {
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_eq!(frac(-4, 6).numer(), -2);
        assert_eq!(frac(-4, 6).denom(), 3);
        assert_eq!(frac(3, -9), frac(-1, 3));
        assert_eq!(frac(-2, -8), frac(1, 4));
        assert_eq!(frac(0, -7), frac(0, 1));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn display_always_includes_the_denominator() {
        assert_eq!(frac(5, 1).to_string(), "5/1");
        assert_eq!(Fraction::whole(5).to_string(), "5/1");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
    }

    #[test]
    fn parsing_accepts_exactly_one_separator() {
        assert_eq!("3/4".parse::<Fraction>(), Ok(frac(3, 4)));
        assert_eq!("-3/4".parse::<Fraction>(), Ok(frac(-3, 4)));
        assert_eq!("3/-4".parse::<Fraction>(), Ok(frac(-3, 4)));
        assert_eq!("+3/4".parse::<Fraction>(), Ok(frac(3, 4)));
        assert_eq!("".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("   ".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("12".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("1/2/3".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("abc/2".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("1/ 2".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!("1.5/2".parse::<Fraction>(), Err(FractionError::ParseError));
        assert_eq!(
            "5/0".parse::<Fraction>(),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 2) - frac(1, 3), frac(1, 6));
        assert_eq!(frac(3, 4) * frac(2, 3), frac(1, 2));
        assert_eq!(frac(1, 2) / frac(1, 4), frac(2, 1));
        assert_eq!(frac(1, 6) + frac(1, 6), frac(1, 3));
        assert_eq!(-frac(1, 2), frac(-1, 2));
        assert_eq!(&frac(1, 2) + &frac(1, 3), frac(5, 6));
    }

    #[test]
    fn integer_operands_convert_first() {
        assert_eq!(frac(1, 2) + 1, frac(3, 2));
        assert_eq!(frac(1, 2) - 1, frac(-1, 2));
        assert_eq!(frac(1, 2) * 4, frac(2, 1));
        assert_eq!(frac(1, 2) / 2, frac(1, 4));
    }

    #[test]
    fn add_conveniences_match_the_operator() {
        let half = frac(1, 2);
        assert_eq!(half.add_int(2), frac(5, 2));
        assert_eq!(half.add_float(0.25), Ok(frac(3, 4)));
        assert_eq!(half.add_str("1/3"), Ok(frac(5, 6)));
        assert_eq!(half.add_float(f64::NAN), Err(FractionError::NonFinite));
        assert_eq!(half.add_str("1:2"), Err(FractionError::ParseError));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            frac(1, 2).checked_div(&frac(0, 1)),
            Err(FractionError::ZeroDenominator)
        );
        assert_eq!(frac(0, 1).recip(), Err(FractionError::ZeroDenominator));
        assert_eq!(frac(2, 3).recip(), Ok(frac(3, 2)));
        assert_eq!(frac(-2, 3).recip(), Ok(frac(-3, 2)));
    }

    #[test]
    #[should_panic(expected = "zero fraction")]
    fn division_operator_panics_on_zero() {
        let _ = frac(1, 2) / frac(0, 3);
    }

    #[test]
    fn ordering_scales_to_a_common_denominator() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(-1, 3));
        assert!(frac(2, 4) <= frac(1, 2));
        assert!(frac(7, 6) > frac(1, 1));
        assert_eq!(frac(1, 2).cmp(&frac(2, 4)), Ordering::Equal);
    }

    #[test]
    fn absent_values_order_last() {
        let half = frac(1, 2);
        assert_eq!(half.cmp_option(Some(&frac(1, 3))), Ordering::Greater);
        assert_eq!(half.cmp_option(Some(&frac(1, 2))), Ordering::Equal);
        assert_eq!(half.cmp_option(None), Ordering::Less);
    }

    #[test]
    fn predicates() {
        assert!(frac(1, 2).is_proper());
        assert!(!frac(3, 2).is_proper());
        assert!(frac(3, 2).is_improper());
        assert!(!frac(4, 2).is_improper());
        assert!(frac(4, 2).is_whole());
        assert!(frac(0, 5).is_whole());
        assert!(!frac(2, 3).is_whole());
        assert!(frac(1, 9).is_unit());
        assert!(frac(-1, 9).is_unit());
        assert!(!frac(2, 9).is_unit());
    }

    #[test]
    fn equal_fractions_hash_alike() {
        fn hash(value: &Fraction) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(hash(&frac(2, 4)), hash(&frac(1, 2)));
        assert_eq!(hash(&frac(-3, 6)), hash(&frac(1, -2)));
    }

    #[test]
    fn sign_helpers() {
        assert_eq!(frac(-3, 4).abs(), frac(3, 4));
        assert_eq!(frac(-3, 4).signum(), -1);
        assert_eq!(frac(0, 4).signum(), 0);
        assert_eq!(frac(3, 4).signum(), 1);
        assert!((frac(1, 2).to_f64() - 0.5).abs() < f64::EPSILON);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Float to fraction conversion.
//!
//! Multiplying a float out and truncating is drift-prone (`0.345 * 1000`
//! is not 345.0), so the conversion first scales by powers of ten
//! looking for a value that sits within tolerance of an integer, then
//! falls back to continued-fraction expansion for values that never
//! terminate.

use num_traits::Zero;

use crate::types::{Fraction, FractionError};

/// How close a candidate has to get before it counts as exact.
pub(crate) const APPROX_TOLERANCE: f64 = 1e-15;

/// Largest power of ten tried by the decimal scaling pass.
pub(crate) const MAX_DECIMAL_SCALE: i64 = 1_000_000;

/// Convergent count after which the expansion gives up and returns its
/// best approximation so far.
pub(crate) const MAX_CONVERGENT_STEPS: u32 = 20;

pub(crate) fn from_float(value: f64) -> Result<Fraction, FractionError> {
    if !value.is_finite() {
        return Err(FractionError::NonFinite);
    }
    if value == 0.0 {
        return Ok(Fraction::zero());
    }
    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut scale: i64 = 1;
    loop {
        let scaled = magnitude * scale as f64;
        if (scaled - scaled.round()).abs() < APPROX_TOLERANCE {
            return Fraction::new(apply_sign(scaled.round() as i64, negative), scale);
        }
        if scale == MAX_DECIMAL_SCALE {
            break;
        }
        scale *= 10;
    }

    Ok(expand(magnitude, negative))
}

/// Continued-fraction expansion of `magnitude`, tracking convergents
/// `p/q` until one reproduces the input or the step budget runs out.
fn expand(magnitude: f64, negative: bool) -> Fraction {
    let whole = magnitude.floor();
    let mut remainder = magnitude - whole;
    if remainder < APPROX_TOLERANCE {
        return Fraction::normalized(apply_sign(whole as i64, negative), 1);
    }

    let (mut prev_numer, mut prev_denom): (i64, i64) = (1, 0);
    let (mut numer, mut denom): (i64, i64) = (whole as i64, 1);
    for _ in 0..MAX_CONVERGENT_STEPS {
        if remainder.abs() <= APPROX_TOLERANCE {
            break;
        }
        let inverted = remainder.recip();
        let term = inverted.floor() as i64;
        let next_numer = term * numer + prev_numer;
        let next_denom = term * denom + prev_denom;
        prev_numer = numer;
        prev_denom = denom;
        numer = next_numer;
        denom = next_denom;
        if (numer as f64 / denom as f64 - magnitude).abs() < APPROX_TOLERANCE {
            break;
        }
        remainder = inverted - term as f64;
    }

    Fraction::normalized(apply_sign(numer, negative), denom)
}

fn apply_sign(numerator: i64, negative: bool) -> i64 {
    if negative {
        -numerator
    } else {
        numerator
    }
}

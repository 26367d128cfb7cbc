// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact fraction arithmetic on machine-sized integers.
//!
//! A [`Fraction`] is an immutable pair of `i64`s kept in lowest terms
//! with a positive denominator. Construction from integers, `"a/b"`
//! text, and finite floats all funnel through the same normalize step,
//! and every operator hands back a fraction in the same canonical form,
//! so equality and hashing work directly on the stored fields.
//!
//! ## Example
//!
//! ```rust
//! use fraction::Fraction;
//!
//! # fn main() -> Result<(), fraction::FractionError> {
//! let half = Fraction::new(1, 2)?;
//! let third = "1/3".parse::<Fraction>()?;
//! assert_eq!((half + third).to_string(), "5/6");
//!
//! // Floats convert exactly when they terminate...
//! assert_eq!(Fraction::from_float(0.345)?, Fraction::new(69, 200)?);
//! // ...and by continued-fraction approximation when they don't.
//! assert_eq!(Fraction::from_float(1.0 / 3.0)?, Fraction::new(1, 3)?);
//! # Ok(())
//! # }
//! ```
//!
//! Numerators and denominators are plain `i64`s, and so are the
//! intermediate cross-products of add, subtract, and compare. Overflow
//! is not detected; keep operands comfortably inside the machine range.

pub mod output;
pub mod types;

pub(crate) mod algorithms;

mod proptests;

pub use crate::types::{Fraction, FractionError};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::types::{Fraction, FractionError};

/// Wire representation of a [`Fraction`], one field per side of the bar.
///
/// `Fraction` serializes through this struct, so `1/2` appears in JSON
/// as `{"numer": 1, "denom": 2}`. Deserialization runs the parts back
/// through `Fraction::new`, so a zero denominator is rejected the same
/// way it is at construction, and un-reduced parts come out reduced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FractionParts {
    pub numer: i64,
    pub denom: i64,
}

impl From<Fraction> for FractionParts {
    fn from(value: Fraction) -> FractionParts {
        FractionParts {
            numer: value.numer(),
            denom: value.denom(),
        }
    }
}

impl TryFrom<FractionParts> for Fraction {
    type Error = FractionError;

    fn try_from(parts: FractionParts) -> Result<Fraction, FractionError> {
        Fraction::new(parts.numer, parts.denom)
    }
}

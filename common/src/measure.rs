//! Measurement definitions.

use std::{fmt, str::FromStr};

use derive_more::{From, Into};
use rust_decimal::Decimal;

/// Surface measured in square meters.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd)]
pub struct SquareMeters(Decimal);

impl SquareMeters {
    /// Creates a new [`SquareMeters`] if the given `value` is not negative.
    #[must_use]
    pub fn new(value: impl Into<Decimal>) -> Option<Self> {
        let value = value.into();
        (!value.is_sign_negative()).then_some(Self(value))
    }

    /// Returns the numeric value of these [`SquareMeters`].
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sqm", grouped(self.0))
    }
}

impl FromStr for SquareMeters {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `SquareMeters`")
    }
}

/// Formats the given `value` with `,` separated thousands groups.
///
/// Trailing zeros of the fractional part are dropped.
pub(crate) fn grouped(value: Decimal) -> String {
    let normalized = value.normalize();
    let repr = normalized.abs().to_string();
    let (int, frac) = repr.split_once('.').unwrap_or((&repr, ""));

    let mut out = String::with_capacity(repr.len() + int.len() / 3 + 1);
    if normalized.is_sign_negative() {
        out.push('-');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

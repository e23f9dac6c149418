//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Percentage in the `0..=100` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] if the provided value lies in the `0..=100`
    /// range.
    #[must_use]
    pub fn new(val: impl Into<Decimal>) -> Option<Self> {
        let val = val.into();
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim_end_matches('%'))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use super::Percent;

    #[test]
    fn bounds() {
        assert!(Percent::new(0).is_some());
        assert!(Percent::new(100).is_some());
        assert!(Percent::new(101).is_none());
        assert!(Percent::new(-1).is_none());
    }

    #[test]
    fn parses_and_displays() {
        let p: Percent = "60%".parse().unwrap();

        assert_eq!(p, Percent::new(60).unwrap());
        assert_eq!(p.to_string(), "60%");
        assert!("120".parse::<Percent>().is_err());
    }
}

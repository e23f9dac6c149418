//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{define_kind, measure::grouped};

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount in UAE dirhams.
    #[must_use]
    pub fn aed(amount: impl Into<Decimal>) -> Self {
        Self {
            amount: amount.into(),
            currency: Currency::Aed,
        }
    }
}

/// Whole units with `,` separated thousands, prefixed with the [`Currency`]
/// code, e.g. `AED 1,850,000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        let whole = amount.round_dp_with_strategy(
            0,
            RoundingStrategy::MidpointAwayFromZero,
        );
        write!(f, "{} {}", currency.code(), grouped(whole))
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }
        if !s.is_char_boundary(s.len() - 3) {
            return Err("invalid currency");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency = Currency::from_str(&currency.to_ascii_lowercase())
            .map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "UAE Dirham."]
        Aed = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

impl Currency {
    /// Returns the ISO 4217 code of this [`Currency`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aed => "AED",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("1850000AED").unwrap(),
            Money::aed(1_850_000),
        );

        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("500eur").unwrap(),
            Money {
                amount: decimal("500"),
                currency: Currency::Eur,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Ae").is_err());
        assert!(Money::from_str("123.45Dirham").is_err());
        assert!(Money::from_str("AED").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::aed(1_850_000).to_string(), "AED 1,850,000");
        assert_eq!(Money::aed(820_000).to_string(), "AED 820,000");
        assert_eq!(Money::aed(500).to_string(), "AED 500");
        assert_eq!(Money::aed(decimal("999.5")).to_string(), "AED 1,000");
        assert_eq!(
            Money {
                amount: decimal("2500000.00"),
                currency: Currency::Usd,
            }
            .to_string(),
            "USD 2,500,000",
        );
    }
}

use bigdecimal::{BigDecimal, RoundingMode};
use std::fmt::{Display, Formatter};

/// Money in reais, kept at two decimal places.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
pub struct Amount(BigDecimal);

impl Amount {
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl From<BigDecimal> for Amount {
    /// Rounds half-up to cents.
    fn from(value: BigDecimal) -> Self {
        Self(value.with_scale_round(2, RoundingMode::HalfUp))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(text: &str) -> Amount {
        Amount::from(BigDecimal::from_str(text).unwrap())
    }

    #[test]
    fn always_two_decimals() {
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::default().to_string(), "0.00");
        assert_eq!(amount("15").to_string(), "15.00");
        assert_eq!(amount("3.5").to_string(), "3.50");
    }

    #[test]
    fn rounds_half_up_to_cents() {
        assert_eq!(amount("3.625").to_string(), "3.63");
        assert_eq!(amount("3.624").to_string(), "3.62");
    }

    #[test]
    fn sums() {
        let total: Amount = [amount("15"), amount("3.5")].into_iter().sum();
        assert_eq!(total.to_string(), "18.50");
    }
}

use crate::Result;

use std::fmt;

use thiserror::Error;

/// Fixed-point units per whole dollar (four implied decimal places)
const UNITS_PER_DOLLAR: i64 = 10_000;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),
}

/// A currency amount in fixed-point units. Negative amounts are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    pub const fn from_dollars(dollars: i64) -> Self {
        return Self(dollars * UNITS_PER_DOLLAR);
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        if b > 0 && Money::MAX.0 - b < a {
            Err(MoneyError::Overflow("add", Money(a), *other))?
        }

        if b < 0 && Money::MIN.0 - b > a {
            Err(MoneyError::Underflow("add", Money(a), *other))?
        }

        self.0 += b;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let other = Self(-1 * other.0);
        return self.add(&other);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };

        let magnitude = self.0.unsigned_abs();
        let dollars = magnitude / UNITS_PER_DOLLAR as u64;
        let fraction = magnitude % UNITS_PER_DOLLAR as u64;

        if fraction == 0 {
            return write!(f, "{sign}{dollars}");
        }

        let fraction = format!("{fraction:04}");
        let fraction = fraction.trim_end_matches('0');

        return write!(f, "{sign}{dollars}.{fraction}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        let mut amount = Money::from_dollars(100);
        amount.add(&Money::from_dollars(25)).unwrap();

        assert_eq!(amount, Money::from_dollars(125));
    }

    #[test]
    fn add_negative() {
        let mut amount = Money::from_dollars(100);
        amount.add(&Money::from_dollars(-25)).unwrap();

        assert_eq!(amount, Money::from_dollars(75));
    }

    #[test]
    fn add_overflow_leaves_value_unchanged() {
        let mut amount = Money::MAX;

        assert!(amount.add(&Money(1)).is_err());
        assert_eq!(amount, Money::MAX);
    }

    #[test]
    fn sub() {
        let mut amount = Money::from_dollars(100);
        amount.sub(&Money::from_dollars(30)).unwrap();

        assert_eq!(amount, Money::from_dollars(70));
    }

    #[test]
    fn sub_underflow_leaves_value_unchanged() {
        let mut amount = Money(i64::MIN + 1);

        assert!(amount.sub(&Money(2)).is_err());
        assert_eq!(amount, Money(i64::MIN + 1));
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_dollars(1000).to_string(), "1000");
        assert_eq!(Money::ZERO.to_string(), "0");
        assert_eq!(Money(5_000).to_string(), "0.5");
        assert_eq!(Money(12_2500).to_string(), "12.25");
        assert_eq!(Money(-7_5000).to_string(), "-7.5");
        assert_eq!(Money(3_0001).to_string(), "3.0001");
    }
}

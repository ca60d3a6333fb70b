//! Money type for representing currency amounts
//!
//! Amounts are held as integer cents so that allocation and spending totals
//! never drift. On the JSON boundary a `Money` is a plain decimal number of
//! currency units (`400`, `12.5`), which is what budget snapshots carry.
//!
//! Amounts are bounded by [`Money::MAX`] in both directions. Parsing and
//! deserialization reject anything larger, and the store adds amounts with
//! [`Money::checked_add`], so totals stay inside the range too. Inside it a
//! cent-bearing amount written as a JSON number reads back to the same cents.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// 100 billion currency units
const MAX_CENTS: i64 = 10_000_000_000_000;

impl Money {
    /// Largest supported magnitude for an amount or a running total
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use wealthwise::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use wealthwise::models::Money;
    /// assert_eq!(Money::from_units(400).cents(), 40_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// True when the magnitude is at most [`Money::MAX`]
    pub const fn is_in_range(&self) -> bool {
        self.0 >= -MAX_CENTS && self.0 <= MAX_CENTS
    }

    fn bounded(cents: i64) -> Option<Self> {
        let amount = Self(cents);
        amount.is_in_range().then_some(amount)
    }

    /// Add two amounts, or `None` if the result leaves the supported range
    ///
    /// # Examples
    /// ```
    /// use wealthwise::models::Money;
    /// let a = Money::from_units(40);
    /// assert_eq!(a.checked_add(Money::from_units(2)), Some(Money::from_units(42)));
    /// assert_eq!(Money::MAX.checked_add(Money::from_cents(1)), None);
    /// ```
    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).and_then(Self::bounded)
    }

    /// Sum amounts, or `None` if any partial total leaves the supported range
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Amount as a floating point number of currency units
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a floating point number of currency units, rounding to the
    /// nearest cent. Returns `None` for NaN, infinities and out-of-range values.
    pub fn from_units_f64(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        let cents = (units * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Self::bounded(cents as i64)
    }

    /// Whole-number percentage of `self` relative to `whole`, rounded half up
    ///
    /// Computed exactly on cents. A zero `whole` yields 0.
    ///
    /// # Examples
    /// ```
    /// use wealthwise::models::Money;
    /// let spent = Money::from_units(175);
    /// assert_eq!(spent.percent_of(Money::from_units(150)), 117);
    /// assert_eq!(spent.percent_of(Money::zero()), 0);
    /// ```
    pub fn percent_of(&self, whole: Money) -> i64 {
        if whole.0 == 0 {
            return 0;
        }
        let (part, whole) = if whole.0 < 0 {
            (-(self.0 as i128), -(whole.0 as i128))
        } else {
            (self.0 as i128, whole.0 as i128)
        };
        // floor(100 * part / whole + 1/2)
        let pct = (200 * part + whole).div_euclid(2 * whole);
        pct.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.75"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(original.to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Self::bounded(if negative { -total } else { total })
            .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

// Exact for every in-range amount: at most 10^13 cents is far below 2^53, and
// the shortest f64 text for `cents / 100` parses back to the same cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_units_f64())
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number of currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .and_then(Money::bounded)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .and_then(Money::bounded)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_units_f64(v).ok_or_else(|| E::custom(format!("invalid amount: {}", v)))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount is larger than {}: {}", Money::MAX, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_units(3).format_with_symbol("€"), "€3.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".05").unwrap().cents(), 5);
        assert_eq!(Money::parse("1,250.75").unwrap().cents(), 125_075);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert_eq!(
            Money::parse("1.005"),
            Err(MoneyParseError::TooPrecise("1.005".into()))
        );
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        assert_eq!(Money::from_units(380).percent_of(Money::from_units(400)), 95);
        assert_eq!(Money::from_units(400).percent_of(Money::from_units(400)), 100);
        assert_eq!(Money::from_units(220).percent_of(Money::from_units(300)), 73);
        // 1/8 = 12.5% rounds up
        assert_eq!(Money::from_units(1).percent_of(Money::from_units(8)), 13);
        assert_eq!(Money::from_units(50).percent_of(Money::zero()), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serializes_as_units() {
        assert_eq!(serde_json::to_string(&Money::from_units(400)).unwrap(), "400");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");
    }

    #[test]
    fn test_deserializes_integers_and_decimals() {
        let m: Money = serde_json::from_str("400").unwrap();
        assert_eq!(m.cents(), 40_000);
        let m: Money = serde_json::from_str("12.34").unwrap();
        assert_eq!(m.cents(), 1234);
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }

    #[test]
    fn test_checked_add_stays_in_range() {
        let near_max = Money::MAX - Money::from_units(10);
        assert_eq!(near_max.checked_add(Money::from_units(10)), Some(Money::MAX));
        assert_eq!(near_max.checked_add(Money::from_units(11)), None);
        assert_eq!((-Money::MAX).checked_add(Money::from_cents(-1)), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_sum() {
        let amounts = [Money::from_units(5), Money::from_units(7)];
        assert_eq!(Money::checked_sum(amounts), Some(Money::from_units(12)));
        assert_eq!(Money::checked_sum([Money::MAX, Money::MAX]), None);
        assert_eq!(Money::checked_sum([]), Some(Money::zero()));
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        assert!(serde_json::from_str::<Money>("92000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("-100000000001").is_err());
        assert!(serde_json::from_str::<Money>("1e15").is_err());
        assert!(serde_json::from_str::<Money>("100000000000").is_ok());

        assert!(matches!(
            Money::parse("100000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(Money::parse("100000000000").unwrap(), Money::MAX);
    }

    #[test]
    fn test_large_cent_amounts_round_trip_exactly() {
        for cents in [9_999_999_999_999, 1_234_567_890_123, -9_999_999_999_901, 7] {
            let amount = Money::from_cents(cents);
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "round trip of {}", json);
        }
    }
}

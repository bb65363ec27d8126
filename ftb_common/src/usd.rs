use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::Mul,
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::op;

/// Currency code for the dollar stablecoin that settlements are paid in.
pub const USDC_CURRENCY_CODE: &str = "USDC";

/// Largest magnitude (in cents) that survives a round trip through an `f64` without losing precision.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_991.0;

//--------------------------------------        Usd          ---------------------------------------------------------
/// A US dollar amount, held as an integer number of cents.
///
/// Amounts arrive from JSON as decimal numbers (`11.5`) and are serialized back the same way, but all arithmetic is
/// done on whole cents, so sums and products never drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Usd(i64);

op!(binary Usd, Add, add);
op!(binary Usd, Sub, sub);
op!(inplace Usd, AddAssign, add_assign);
op!(inplace Usd, SubAssign, sub_assign);
op!(unary Usd, Neg, neg);

/// Scaling saturates at the `i64` bounds rather than overflowing.
impl Mul<i64> for Usd {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, v| Self(acc.0.saturating_add(v.0)))
    }
}

impl<'a> Sum<&'a Usd> for Usd {
    fn sum<I: Iterator<Item = &'a Usd>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Value cannot be represented as a dollar amount: {0}")]
pub struct UsdConversionError(String);

impl Usd {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts a floating point dollar value, rounding to the nearest cent.
    pub fn try_from_dollars(value: f64) -> Result<Self, UsdConversionError> {
        if !value.is_finite() {
            return Err(UsdConversionError(format!("{value} is not a finite number")));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_EXACT_CENTS {
            return Err(UsdConversionError(format!("{value} is out of range")));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(cents as i64))
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal representation with insignificant trailing zeros removed, e.g. `0.8`, `8` or `11.05`. This is
    /// the format wallet APIs expect for amounts sent as strings.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, cents) = (abs / 100, abs % 100);
        match cents {
            0 => format!("{sign}{whole}"),
            c if c % 10 == 0 => format!("{sign}{whole}.{}", c / 10),
            c => format!("{sign}{whole}.{c:02}"),
        }
    }

    /// Divides the amount into `divisor` parts, rounding half away from zero to the nearest cent.
    /// Returns `None` when `divisor` is zero.
    pub fn checked_div_rounded(self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        let adjust = if 2 * remainder.abs() >= divisor.abs() { self.0.signum() * divisor.signum() } else { 0 };
        Some(Self(quotient + adjust))
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Usd {
    type Err = UsdConversionError;

    /// Parses strings such as `8`, `8.5`, `"0.80"` or `"$11.50"`. At most two decimal places are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UsdConversionError(format!("'{s}' is not a valid dollar amount"));
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };
        let is_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) || frac.len() > 2 {
            return Err(invalid());
        }
        let whole = if whole.is_empty() { 0 } else { whole.parse::<i64>().map_err(|_| invalid())? };
        let cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid())?,
        };
        let total = whole.checked_mul(100).and_then(|w| w.checked_add(cents)).ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }
}

impl Serialize for Usd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_dollars())
    }
}

impl<'de> Deserialize<'de> for Usd {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UsdVisitor)
    }
}

struct UsdVisitor;

impl<'de> de::Visitor<'de> for UsdVisitor {
    type Value = Usd;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a dollar amount as a number or a decimal string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Usd::try_from_dollars(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        v.checked_mul(100).map(Usd).ok_or_else(|| E::custom(format!("{v} dollars is out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Usd)
            .ok_or_else(|| E::custom(format!("{v} dollars is out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

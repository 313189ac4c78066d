use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CURRENCY_PLACES: u32 = 2;
const PERCENTAGE_PLACES: u32 = 1;

/// A signed, non-zero amount of money.
///
/// Positive values are income and negative values are expenses. Zero is not a
/// valid amount for a transaction and cannot be constructed.
///
/// Amounts are stored as JSON numbers, so only values that survive the trip
/// through an `f64` and back unchanged are accepted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_zero() {
            return Err(AmountError::Zero)
        }

        if to_stored_float(value).and_then(from_stored_float) != Some(value) {
            return Err(AmountError::Unrepresentable(value.to_string()))
        }

        Ok(Amount(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_income(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn magnitude(self) -> Decimal {
        self.0.abs()
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&format_currency(self.0))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let parsed = Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(|error| AmountError::InvalidFormat(format!("Value [{value}] is not a number: {error}")))?;

        Amount::new(parsed)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = to_stored_float(self.0)
            .ok_or_else(|| ser::Error::custom(AmountError::Unrepresentable(self.0.to_string())))?;

        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        let decimal = from_stored_float(value)
            .ok_or_else(|| de::Error::custom(AmountError::Unrepresentable(value.to_string())))?;

        Amount::new(decimal).map_err(de::Error::custom)
    }
}

//NOTE: Both directions go through the shortest decimal text of the float, which Rust
//      parses and prints with correct rounding, so equal decimals always map to the same float.
fn to_stored_float(value: Decimal) -> Option<f64> {
    value.to_string().parse::<f64>().ok().filter(|float| float.is_finite())
}

fn from_stored_float(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None
    }

    Decimal::from_str(&value.to_string()).ok()
}

/// Renders money with two decimals and `,` thousands separators, e.g. `-1,200.50`.
pub fn format_currency(value: Decimal) -> String {
    format_grouped(value, CURRENCY_PLACES)
}

/// Renders a percentage value with a single decimal, e.g. `42.5`.
pub fn format_percentage(value: Decimal) -> String {
    format_grouped(value, PERCENTAGE_PLACES)
}

fn format_grouped(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let mut magnitude = rounded.abs();
    magnitude.rescale(places);

    let digits = magnitude.to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (digits.as_str(), "")
    };

    if fraction.is_empty() {
        format!("{}{}", sign, group_thousands(integer))
    } else {
        format!("{}{}.{}", sign, group_thousands(integer), fraction)
    }
}

fn group_thousands(integer: &str) -> String {
    let length = integer.len();
    let mut grouped = String::with_capacity(length + length / 3);

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (length - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

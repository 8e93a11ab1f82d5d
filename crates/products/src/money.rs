//! Peso amounts.
//!
//! Stored as integer centavos so min/max comparisons and display never suffer
//! from floating-point drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use shelfwise_core::{DomainError, ValueObject};

/// Currency symbol used when rendering amounts (Philippine peso, en-US style).
pub const CURRENCY_SYMBOL: &str = "\u{20b1}";

/// A non-negative amount in Philippine pesos, held in centavos.
///
/// The product store encodes prices as decimal numbers; the serde
/// representation follows it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    centavos: u64,
}

impl Money {
    pub const ZERO: Money = Money { centavos: 0 };

    pub fn from_centavos(centavos: u64) -> Self {
        Self { centavos }
    }

    /// Create from a decimal peso amount, rounding to the nearest centavo.
    ///
    /// Rounding works on the shortest decimal form of `amount` (what the store
    /// wrote), half away from zero: `1.005` is `₱1.01`, not the `₱1.00` its
    /// binary approximation would give.
    ///
    /// ```
    /// use shelfwise_products::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.centavos(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::malformed(format!("price is not a finite number: {amount}")));
        }
        if amount < 0.0 {
            return Err(DomainError::malformed(format!("price cannot be negative: {amount}")));
        }
        let out_of_range = || DomainError::malformed(format!("price out of range: {amount}"));
        let exact: Decimal = amount.to_string().parse().map_err(|_| out_of_range())?;
        let centavos = exact
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_u64())
            .ok_or_else(out_of_range)?;
        Ok(Self::from_centavos(centavos))
    }

    pub fn centavos(&self) -> u64 {
        self.centavos
    }

    pub fn to_decimal(&self) -> f64 {
        self.centavos as f64 / 100.0
    }

    /// Format as a display string (e.g. "₱1,234.50").
    pub fn display(&self) -> String {
        format!(
            "{}{}.{:02}",
            CURRENCY_SYMBOL,
            group_thousands(self.centavos / 100),
            self.centavos % 100
        )
    }
}

impl ValueObject for Money {}

impl TryFrom<f64> for Money {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Money::from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

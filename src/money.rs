//! Fixed-point currency values.
//!
//! Every amount the crate computes or displays carries exactly two fractional
//! digits. Intermediate values (per-head averages, per-beneficiary shares) keep
//! the full precision of [`Decimal`] and are only rounded with [`Money::round2`]
//! at the edges, so binary floating point drift never shows up in the output.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::InvalidInputError;

/// Number of fractional digits in every computed amount.
pub const SCALE: u32 = 2;

/// A balance whose magnitude is below this is treated as settled.
pub const EPSILON: Money = Money(Decimal::from_parts(1, 0, 0, false, SCALE));

// Half a cent: the per-participant rounding error `round2` can introduce.
const HALF_CENT: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// An amount of the trip's single currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Builds an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, SCALE))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Rounds to exactly two fractional digits, halves away from zero.
    pub fn round2(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(SCALE);
        // -0.004 must not come back as "-0.00"
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        Money(rounded)
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// True when the magnitude is below [`EPSILON`].
    pub fn is_settled(self) -> bool {
        self.abs() < EPSILON
    }

    /// Splits the amount into `parts` equal shares without rounding.
    ///
    /// Returns `None` when `parts` is zero.
    pub fn split(self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Money(self.0 / Decimal::from(parts)))
    }

    /// Largest imbalance a set of `participants` rounded balances may carry.
    pub fn rounding_tolerance(participants: usize) -> Self {
        Money(HALF_CENT * Decimal::from(participants))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round2().0)
    }
}

impl FromStr for Money {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Decimal>()
            .map(Money)
            .map_err(|_| InvalidInputError::MalformedAmount(s.to_string()))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

//! Mixed-radix numeral systems.

use radix_base::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of radices, each at least 2.
///
/// A base with `len()` radices has `len() + 1` digits. Digit `i` has place
/// value `radix(0) * ... * radix(i - 1)`; the last digit is open-ended and
/// absorbs everything the radices cannot represent.
///
/// Bases are values: `extended` returns a new base and leaves the original
/// untouched, which is what the base search relies on to backtrack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Base {
    radices: Vec<u64>,
}

impl Base {
    /// Creates a base from its radices.
    ///
    /// # Panics
    /// Panics if a radix is below 2 or the product overflows `u64`.
    #[must_use]
    pub fn new(radices: Vec<u64>) -> Self {
        match Self::try_new(radices) {
            Ok(base) => base,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a base from its radices, validating them.
    pub fn try_new(radices: Vec<u64>) -> Result<Self> {
        let mut product = 1u64;
        for (position, &radix) in radices.iter().enumerate() {
            if radix < 2 {
                return Err(Error::InvalidRadix { position, radix });
            }
            product = product.checked_mul(radix).ok_or_else(|| {
                Error::ThresholdOverflow(format!("product of base {radices:?} exceeds u64"))
            })?;
        }
        Ok(Self { radices })
    }

    /// The base with no radices: a single open-ended digit.
    #[must_use]
    pub const fn empty() -> Self {
        Self { radices: Vec::new() }
    }

    /// The shortest all-binary base whose product does not exceed `max`
    /// while doubling it would.
    #[must_use]
    pub fn binary_for(max: u64) -> Self {
        let mut radices = Vec::new();
        let mut product = 1u64;
        while let Some(next) = product.checked_mul(2) {
            if next > max {
                break;
            }
            radices.push(2);
            product = next;
        }
        Self { radices }
    }

    /// Returns the radices.
    #[must_use]
    pub fn radices(&self) -> &[u64] {
        &self.radices
    }

    /// Returns the radix between digit `i` and digit `i + 1`.
    #[must_use]
    pub fn radix(&self, i: usize) -> u64 {
        self.radices[i]
    }

    /// Number of radices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.radices.len()
    }

    /// Whether the base has no radices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radices.is_empty()
    }

    /// Number of digits, including the open-ended top digit.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.radices.len() + 1
    }

    /// Product of all radices, the place value of the top digit.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.radices.iter().product()
    }

    /// Returns a copy of this base with `radix` appended.
    ///
    /// # Panics
    /// Panics if `radix` is below 2 or the product overflows.
    #[must_use]
    pub fn extended(&self, radix: u64) -> Self {
        let mut radices = Vec::with_capacity(self.radices.len() + 1);
        radices.extend_from_slice(&self.radices);
        radices.push(radix);
        Self::new(radices)
    }

    /// Place value of every digit, least significant first.
    #[must_use]
    pub fn place_values(&self) -> Vec<u64> {
        let mut places = Vec::with_capacity(self.digit_count());
        let mut place = 1u64;
        places.push(place);
        for &radix in &self.radices {
            place *= radix;
            places.push(place);
        }
        places
    }

    /// Digits of `num`, least significant first. The top digit is unbounded.
    #[must_use]
    pub fn convert(&self, num: u64) -> Vec<u64> {
        let places = self.place_values();
        let mut digits = vec![0; places.len()];
        let mut rest = num;
        for (digit, &place) in digits.iter_mut().zip(&places).rev() {
            *digit = rest / place;
            rest -= *digit * place;
        }
        digits
    }

    /// The number a digit vector denotes, or `None` on overflow.
    ///
    /// # Panics
    /// Panics if `digits` does not have `digit_count()` entries.
    #[must_use]
    pub fn value(&self, digits: &[u64]) -> Option<u64> {
        assert_eq!(digits.len(), self.digit_count(), "digit vector length");
        digits
            .iter()
            .zip(self.place_values())
            .try_fold(0u64, |acc, (&digit, place)| acc.checked_add(digit.checked_mul(place)?))
    }

    /// The positional form `[1, r0, r1, ...]`: one leading weight-1 digit
    /// followed by the radices.
    #[must_use]
    pub fn positional(&self) -> Vec<u64> {
        std::iter::once(1).chain(self.radices.iter().copied()).collect()
    }
}

impl TryFrom<Vec<u64>> for Base {
    type Error = Error;

    fn try_from(radices: Vec<u64>) -> Result<Self> {
        Self::try_new(radices)
    }
}

impl From<Base> for Vec<u64> {
    fn from(base: Base) -> Self {
        base.radices
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.radices)
    }
}

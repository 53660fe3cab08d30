//! Fare policy: distance bands, surcharge, and age discounts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One distance band of the tariff.
///
/// Beyond `lower_bound`, every started `unit` of distance adds `increment`
/// to the fare, up to where the next band takes over. Partial units charge a
/// full increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBand {
    /// Distance where this band starts charging.
    pub lower_bound: u64,

    /// Size of one charging unit within this band.
    pub unit: u64,

    /// Amount added per started unit.
    pub increment: u64,
}

impl FareBand {
    /// Create a new band.
    pub fn new(lower_bound: u64, unit: u64, increment: u64) -> Self {
        Self {
            lower_bound,
            unit,
            increment,
        }
    }
}

/// An age-bracket discount: flat deduction first, then a percentage off the
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDiscountRule {
    /// Youngest age the rule applies to, inclusive.
    pub min_age: u8,

    /// Oldest age the rule applies to, inclusive.
    pub max_age: u8,

    /// Flat amount deducted before the percentage is applied.
    pub deduction: u64,

    /// Percentage taken off the remainder, 0..=100.
    pub percent: u8,
}

impl AgeDiscountRule {
    /// Create a new rule.
    pub fn new(min_age: u8, max_age: u8, deduction: u64, percent: u8) -> Self {
        Self {
            min_age,
            max_age,
            deduction,
            percent,
        }
    }

    /// Returns true if the rule covers the given age.
    pub fn matches(&self, age: u8) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

/// Errors from policy validation or loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Bands out of order or starting at the same distance
    #[error("fare bands must be ordered by strictly increasing lower bound")]
    UnorderedBands,

    /// Band with a zero charging unit
    #[error("fare band starting at {lower_bound} has a zero charging unit")]
    ZeroUnit { lower_bound: u64 },

    /// Discount percentage above 100
    #[error("discount for ages {min_age}-{max_age} exceeds 100 percent")]
    PercentTooLarge { min_age: u8, max_age: u8 },

    /// Discount range with min above max
    #[error("discount age range {min_age}-{max_age} is inverted")]
    InvertedAgeRange { min_age: u8, max_age: u8 },

    /// Two discount rules covering the same age
    #[error("discount age ranges overlap at age {age}")]
    OverlappingAgeRanges { age: u8 },

    /// Policy file could not be read
    #[error("failed to read policy file: {message}")]
    Io { message: String },

    /// Policy file could not be parsed
    #[error("failed to parse policy JSON: {message}")]
    Json { message: String },
}

/// The full tariff: base fare, distance bands, and age discounts.
///
/// The default policy is the standard metropolitan tariff: 1250 up to 10 km,
/// then 100 per started 5 km up to 50 km, then 100 per started 8 km; children
/// (6-12) get 350 off then 50% off the remainder, teenagers (13-18) get 350
/// off then 20%.
///
/// # Examples
///
/// ```
/// use subway_router::fare::FarePolicy;
///
/// let policy = FarePolicy::default();
/// assert_eq!(policy.compute(10, 0, 30), 1250);
/// assert_eq!(policy.compute(10, 300, 30), 1550);
/// assert_eq!(policy.compute(10, 300, 9), 600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarePolicy {
    /// Flat amount charged for any distance within the first band.
    pub base_fare: u64,

    /// Distance bands, ordered by strictly increasing `lower_bound`.
    pub bands: Vec<FareBand>,

    /// Discount rules, checked in order; the first match applies.
    pub discounts: Vec<AgeDiscountRule>,
}

impl FarePolicy {
    /// Create a validated policy.
    pub fn new(
        base_fare: u64,
        bands: Vec<FareBand>,
        discounts: Vec<AgeDiscountRule>,
    ) -> Result<Self, PolicyError> {
        let policy = Self {
            base_fare,
            bands,
            discounts,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json).map_err(|e| PolicyError::Json {
            message: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| PolicyError::Io {
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Check the policy's structural rules.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for pair in self.bands.windows(2) {
            if pair[0].lower_bound >= pair[1].lower_bound {
                return Err(PolicyError::UnorderedBands);
            }
        }
        for band in &self.bands {
            if band.unit == 0 {
                return Err(PolicyError::ZeroUnit {
                    lower_bound: band.lower_bound,
                });
            }
        }
        for rule in &self.discounts {
            if rule.min_age > rule.max_age {
                return Err(PolicyError::InvertedAgeRange {
                    min_age: rule.min_age,
                    max_age: rule.max_age,
                });
            }
            if rule.percent > 100 {
                return Err(PolicyError::PercentTooLarge {
                    min_age: rule.min_age,
                    max_age: rule.max_age,
                });
            }
        }
        for (i, a) in self.discounts.iter().enumerate() {
            for b in &self.discounts[i + 1..] {
                if a.min_age <= b.max_age && b.min_age <= a.max_age {
                    return Err(PolicyError::OverlappingAgeRanges {
                        age: a.min_age.max(b.min_age),
                    });
                }
            }
        }
        Ok(())
    }

    /// Compute the fare for a route.
    ///
    /// Pure and total: identical inputs always produce the identical fare,
    /// and the result depends on nothing but the three arguments.
    pub fn compute(&self, distance: u64, max_surcharge: u64, age: u8) -> u64 {
        let before_discount = self.distance_fare(distance) + max_surcharge;
        let fare = self.apply_discount(before_discount, age);

        debug!(distance, max_surcharge, age, fare, "fare computed");
        fare
    }

    /// The piecewise-linear distance component of the fare.
    fn distance_fare(&self, distance: u64) -> u64 {
        let mut fare = self.base_fare;

        for (i, band) in self.bands.iter().enumerate() {
            if distance <= band.lower_bound {
                break;
            }
            // This band charges the distance between its own lower bound and
            // the next band's, or the full remainder for the last band.
            let cap = self
                .bands
                .get(i + 1)
                .map_or(distance, |next| distance.min(next.lower_bound));
            let excess = cap - band.lower_bound;
            fare += excess.div_ceil(band.unit) * band.increment;
        }

        fare
    }

    /// Apply the first matching age discount, clamped at zero.
    fn apply_discount(&self, fare: u64, age: u8) -> u64 {
        match self.discounts.iter().find(|rule| rule.matches(age)) {
            Some(rule) => {
                let remainder = fare.saturating_sub(rule.deduction);
                // A hand-built policy may carry percent > 100; clamp rather
                // than underflow. Validation rejects such policies up front.
                let kept = 100 - u64::from(rule.percent.min(100));
                remainder * kept / 100
            }
            None => fare,
        }
    }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            bands: vec![FareBand::new(10, 5, 100), FareBand::new(50, 8, 100)],
            discounts: vec![
                AgeDiscountRule::new(6, 12, 350, 50),
                AgeDiscountRule::new(13, 18, 350, 20),
            ],
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A longer trip never costs less, for any fixed surcharge and age.
        #[test]
        fn monotonic_in_distance(
            d1 in 0u64..200,
            d2 in 0u64..200,
            surcharge in 0u64..1000,
            age in 0u8..100,
        ) {
            let policy = FarePolicy::default();
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(policy.compute(lo, surcharge, age) <= policy.compute(hi, surcharge, age));
        }

        /// Identical inputs always yield the identical fare.
        #[test]
        fn deterministic(
            distance in 0u64..10_000,
            surcharge in 0u64..10_000,
            age in any::<u8>(),
        ) {
            let policy = FarePolicy::default();
            prop_assert_eq!(
                policy.compute(distance, surcharge, age),
                policy.compute(distance, surcharge, age)
            );
        }

        /// A discount never raises the fare above the adult fare.
        #[test]
        fn discount_never_increases_fare(
            distance in 0u64..10_000,
            surcharge in 0u64..10_000,
            age in any::<u8>(),
        ) {
            let policy = FarePolicy::default();
            let adult = policy.compute(distance, surcharge, 30);
            prop_assert!(policy.compute(distance, surcharge, age) <= adult);
        }

        /// A higher surcharge never lowers the fare.
        #[test]
        fn monotonic_in_surcharge(
            distance in 0u64..10_000,
            s1 in 0u64..10_000,
            s2 in 0u64..10_000,
            age in any::<u8>(),
        ) {
            let policy = FarePolicy::default();
            let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            prop_assert!(policy.compute(distance, lo, age) <= policy.compute(distance, hi, age));
        }
    }
}

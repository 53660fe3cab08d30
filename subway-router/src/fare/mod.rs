//! Fare computation.
//!
//! The fare for a route is a pure function of three inputs: the path's total
//! distance, the highest line surcharge along the path, and the traveler's
//! age. The tariff itself (distance bands and age discounts) is data rather
//! than code, so hosts can supply their own as configuration and the
//! computation stays testable in isolation from the graph.

mod policy;

pub use policy::{AgeDiscountRule, FareBand, FarePolicy, PolicyError};

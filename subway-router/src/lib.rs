//! Subway route and fare engine.
//!
//! Answers the question: "what is the shortest route between these two
//! stations, and what does it cost for this traveler?"
//!
//! The network itself (station and line administration, persistence, the
//! HTTP surface) lives outside this crate. An external store supplies a
//! read-only [`store::NetworkSnapshot`] per query; the engine turns it into
//! a weighted graph, runs a shortest-path search, prices the result against
//! a configurable [`fare::FarePolicy`], and hands back a
//! [`service::RouteSummary`] or a typed [`service::RouteError`].

pub mod domain;
pub mod fare;
pub mod planner;
pub mod service;
pub mod store;

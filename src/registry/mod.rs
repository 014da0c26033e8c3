//! Location registry: identifier to coordinate lookup.
//!
//! A registry is built once at startup, either from the built-in Punjab
//! table or from a JSON document, and is read-only afterwards. Lookup never
//! fails: unknown identifiers resolve to the depot coordinate and are tagged
//! [`ResolutionKind::Defaulted`] so callers can detect the substitution.

mod lookup;
mod table;

pub use lookup::{LocationRegistry, Resolution, ResolutionKind};

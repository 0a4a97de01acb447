//! Catalogue data model: observation records and the owning collection.

pub mod catalogue;
pub mod object;

pub use catalogue::{Catalogue, KindCounts};
pub use object::{CelestialObject, ObjectKind, Radius};

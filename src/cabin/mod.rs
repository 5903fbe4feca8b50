//! Cabin geometry model and occupancy bitsets.

pub(crate) mod class;
pub(crate) mod model;
pub(crate) mod occupancy;

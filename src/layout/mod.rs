//! Seat geometry fold: structural offsets to absolute sprite origins.

pub(crate) mod engine;

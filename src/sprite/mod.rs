//! Theme-driven seat sprites, built off the render thread.

pub(crate) mod provider;

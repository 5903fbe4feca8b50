//! Drawing surface, frame scheduling, and the seat map view's repaint loop.

pub(crate) mod scheduler;
pub(crate) mod surface;
pub(crate) mod view;

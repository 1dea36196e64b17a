//! The pane layout engine: opening decomposition and sash subdivision.
//!
//! Both entry points are pure functions over millimetre values and never fail; invalid
//! or degenerate geometry yields an empty pane list.

pub(crate) mod decompose;
pub(crate) mod grid;
pub(crate) mod subdivide;

//! Turning a quote item into drawable geometry.

pub(crate) mod fingerprint;
pub(crate) mod opening;
pub(crate) mod plan;
pub(crate) mod viewport;

//! Shape renderers.

pub mod quad;

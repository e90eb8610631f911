//! Effect chains: CSS-style filter functions and their compiled pass form.

pub(crate) mod blur;
pub(crate) mod chain;
pub(crate) mod matrix;
pub(crate) mod op;

//! Off-screen surfaces, filtered rendering, and the preview/gallery views.

pub(crate) mod pipeline;
pub(crate) mod preview;
pub(crate) mod surface;

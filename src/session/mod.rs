//! The session state machine: uploads, filter selection, views and export.

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod upload;

//! Error translation at the library boundary.
//!
//! Everything a public entry point can fail with is funnelled through
//! [`catch_and_wrap`], which hands callers a single [`Error`](crate::Error)
//! kind carrying only a message.
//!
//! - [`Failure`] - Heterogeneous failure signal accepted at the boundary
//! - [`catch_and_wrap`] - Run a unit of work and normalize its failures

mod failure;
mod translate;

pub use failure::Failure;
pub use translate::{catch_and_wrap, translate};

//! Render delegate boundary.
//!
//! The compiler's contract ends at producing document text; turning that
//! text into a fixed-layout binary artifact belongs to an external engine.
//! This crate defines only the seam: the [`RenderDelegate`] trait and a
//! passthrough implementation for wiring and tests.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::{FoPassthrough, RenderDelegate};

#![warn(missing_docs)]

//! # Numerobis Shared
//!
//! Types shared between the unit algebra and the runtime proper:
//!
//! - **Source spans**: the location payload carried by diagnostic throws,
//!   mapping runtime errors back to the emitting source program
//! - **Source modules**: per-module source text used when rendering a
//!   diagnostic preview
//! - **Compact float formatting**: the `%g`-style rendering used everywhere
//!   a scalar is shown to the user

pub mod fmt;
pub mod source;
pub mod span;

pub use source::SourceModule;
pub use span::SourceSpan;

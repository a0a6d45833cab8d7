//! Core types and utilities for shotcraft
//!
//! Everything the generation pipeline passes between its stages lives here:
//! - [`ComponentDescriptor`] and [`RouteEntry`], the model's output once parsed
//! - [`VirtualFileTree`], the project being built
//! - [`naming`], the identifier normalizer every other crate relies on
//! - [`Error`], the error type shared by all crates

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod naming;
pub mod tree;

pub use descriptor::{ComponentDescriptor, DEFAULT_COMPONENT_NAME, RouteEntry};
pub use error::{Error, Result};
pub use tree::{FileContent, VirtualFileTree};

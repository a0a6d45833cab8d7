//! # shotcraft-packaging
//!
//! Serializes generated project trees into downloadable ZIP archives.
//!
//! Archives are deterministic: the same tree, in the same order, always
//! produces the same bytes (and therefore the same SHA256). Every archive is
//! read back and CRC-checked before it is handed to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod archive;

pub use archive::{
    DEFAULT_ROOT_FOLDER, PackagedProject, compute_sha256, pack, package, unpack,
};

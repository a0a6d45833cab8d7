//! # shotcraft-codegen
//!
//! Angular project scaffolding and assembly.
//!
//! This crate turns a batch of generated component descriptors into a
//! complete project tree:
//! - [`scaffold`] provides the fixed baseline files every project starts from
//! - [`assembler`] overlays the components, rewires the root shell and
//!   synthesizes the route table
//! - [`shell`] renders the TypeScript and markup the assembler overwrites
//!
//! Assembly never fails. Malformed model output is absorbed by defaults and
//! by dropping routes that reference nothing.
//!
//! ## Example
//!
//! ```
//! use shotcraft_codegen::ProjectAssembler;
//! use shotcraft_core::ComponentDescriptor;
//!
//! let page = ComponentDescriptor::new("MainPage", "export class MainPage {}", "<h1>Hi</h1>", "");
//! let tree = ProjectAssembler::new().assemble(&[page], None);
//! assert!(tree.contains("src/app/main-page/main-page.component.ts"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod scaffold;
pub mod shell;

pub use assembler::ProjectAssembler;
pub use scaffold::{AngularScaffold, ScaffoldProvider};

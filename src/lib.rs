//! # Brewgen Core Library
//!
//! This crate contains the core logic of the `brewgen` tool – a generator that
//! turns structured binary-release metadata into Homebrew-style install
//! formulas, inspired by jpillora/installer.
//!
//! Rendering is deterministic and pure: a [`ReleaseDescriptor`] goes in, text
//! comes out, and identical descriptors always produce byte-identical output.
//! Fetching release metadata, writing formula files and running the package
//! manager are left to the caller.
//!
//! This library is built for the `brewgen` CLI, but you can also reuse it as a
//! backend in other tools.
//!
//! ## Modules Overview
//! - [`descriptor`] – The release descriptor data model (owner, program, version, assets)
//! - [`formula`] – Rendering a descriptor into a Homebrew-style formula
//! - [`summary`] – Rendering a descriptor into a plain-text summary
//! - [`classify`] – Deriving OS and architecture from release-asset filenames
//! - [`error`] – The renderer error taxonomy


pub mod descriptor;
pub mod formula;
pub mod summary;
pub mod classify;
pub mod error;

pub use descriptor::*;
pub use formula::*;
pub use summary::*;
pub use classify::*;
pub use error::*;

//! # RustNLP Hub
//!
//! Registry integration for installing model packages.
//!
//! This crate provides functionality to:
//! - Resolve and inspect the local package cache
//! - Check whether a package is installed
//! - Download packages from the registry
//!
//! ## Example
//!
//! ```rust,ignore
//! use rustnlp_hub::HubApi;
//!
//! let api = HubApi::new();
//! if !api.is_installed("en-core-tiny") {
//!     api.download_package("en-core-tiny")?;
//! }
//! ```

pub mod api;
pub(crate) mod core;
mod saf;

pub use saf::*;

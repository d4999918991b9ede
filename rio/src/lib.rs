//! This crate is part of the `rdfjs` workspace.
//!
//! It converts terms and quads from and to the model of [Rio](https://docs.rs/rio_api/),
//! so that they can be fed to, or read from,
//! any parser or formatter built on `rio_api`.
#![deny(missing_docs)]

mod _error;
pub use _error::*;
pub mod model;
pub use model::*;

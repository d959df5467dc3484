#![deny(clippy::all, clippy::perf, clippy::correctness)]

//! Admission and lifecycle-entry for sectors in a sealing pipeline: decides
//! when a new committed-capacity (placeholder data) sector may be created,
//! enforces the ceiling on concurrently-sealing sectors, and re-pledges
//! already-proved sectors back into the pipeline for reprocessing. Sealing,
//! proving, and persistence are consumed through the traits in [`traits`].

#[macro_use]
extern crate log;

pub use crate::error::*;
pub use crate::events::*;
pub use crate::metadata::*;
pub use crate::nullreader::*;
pub use crate::pledger::*;
pub use crate::startup::*;
pub use crate::traits::*;

pub(crate) mod error;
pub(crate) mod events;
pub(crate) mod helpers;
pub(crate) mod metadata;
pub(crate) mod nullreader;
pub(crate) mod pledger;
pub(crate) mod redo;
pub(crate) mod startup;
pub(crate) mod traits;

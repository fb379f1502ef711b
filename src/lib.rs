#![forbid(unsafe_code)]

//! Discography browser core.
//!
//! - [`gesture`]: pointer-down → move → up sequences to discrete swipes
//! - [`model::navigation`]: artist → albums → songs → song details state machine
//! - [`model::ranking`]: dense personal rankings with a persisted record
//! - [`model::ordering`]: the catalog arranged by release date or ranking
//!
//! Rendering lives in the binary; nothing here depends on a terminal.

pub mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod model;

pub use error::{Error, Result};

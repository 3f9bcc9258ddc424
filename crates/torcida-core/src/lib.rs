//! Core types and trait definitions for the torcida fixture tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! storage backend (`torcida-store-sqlite`) and the remote provider client
//! (`torcida-apifootball`) implement the traits defined here.

pub mod attendance;
pub mod competition;
pub mod error;
pub mod fixture;
pub mod normalize;
pub mod raw;
pub mod source;
pub mod stats;
pub mod store;
pub mod sync;

pub use error::{Error, Result};

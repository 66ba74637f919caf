//! getpkt - keep a local copy of your Pocket reading list
//!
//! This crate provides the core functionality for the `getpkt` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Article records and the snapshot collection
//! - [`remote`] - Pocket v3 API client and wire types
//! - [`sync`] - Paginated download, deduplication and single-item actions
//! - [`storage`] - Atomic JSON snapshot persistence
//! - [`config`] - Paths, API root and stored credentials
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod storage;
pub mod sync;

pub use error::{Error, Result};

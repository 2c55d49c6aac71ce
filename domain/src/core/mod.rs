//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ParseError`] - unknown textual literals
//! - [`error::ResolutionError`] - failures of configuration resolution

pub mod error;

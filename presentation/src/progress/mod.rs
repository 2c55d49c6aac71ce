//! Progress display for batch resolution

pub mod reporter;

//! Domain resource documents
//!
//! Reads the source declaration of a domain from a JSON or TOML resource
//! document and hands it to the application layer as raw literals.

mod loader;
mod resource;

pub use loader::{DocumentError, FileDomainSpecLoader};
pub use resource::DomainResource;

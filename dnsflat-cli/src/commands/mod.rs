//! CLI command implementations.
//!
//! - `flatten`: resolve includes and print the effective directives

pub mod flatten;

pub use flatten::FlattenCommand;

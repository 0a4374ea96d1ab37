//! Domain types shared by the registration bridge crates.
//!
//! Nothing in here talks to the network: the form and metadata payloads,
//! the region-code table, and the platform identifiers are all plain data.

pub mod error;
pub mod ids;
pub mod lenient;
pub mod metadata;
pub mod region;
pub mod registration;
pub mod types;

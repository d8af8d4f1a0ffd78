//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires a store into the three resource managers, registers
//! their descriptors in an `EntityRegistry` and exposes them over REST.

pub mod builder;
pub mod entity_registry;
pub mod rest;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use rest::RestExposure;

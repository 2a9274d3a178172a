//! Domain layer: entities, query descriptions, hydration and collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Value objects returned to callers
//! - [`query`] - Structured queries and result rows
//! - [`hydration`] - Row to entity conversion
//! - [`repositories`] - Collaborator traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the infrastructure layer; gateways in
//! [`crate::application::services`] consume the traits defined here.

pub mod entities;
pub mod hydration;
pub mod query;
pub mod repositories;

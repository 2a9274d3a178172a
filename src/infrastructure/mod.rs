//! Infrastructure layer implementing the domain collaborator traits.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL query execution and schema column lists

pub mod persistence;

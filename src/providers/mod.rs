//! Providers Module - external data collaborators
//!
//! Project/profile lookup used by search and scoring endpoints.

pub mod catalog;

pub use catalog::{InMemoryCatalog, Profile, Project, ProjectCatalog};

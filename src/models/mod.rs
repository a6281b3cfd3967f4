//! Models Module - Data Structures & Configuration
//!
//! Single source of truth for data types, errors and runtime configuration.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;

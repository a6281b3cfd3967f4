//! Utils Module - Helper Functions & Shared Utilities
//!
//! Constants, display mappings, the score cache and telemetry.

pub mod cache;
pub mod constants;
pub mod display;
pub mod telemetry;

pub use cache::*;
pub use display::*;
pub use telemetry::*;

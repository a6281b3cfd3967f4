//! Core Module - Business Logic
//!
//! Entity resolution and LARP scoring. Everything here is pure and
//! synchronous; callers may invoke it from any thread without coordination.

pub mod entity;
pub mod larp_score;
pub mod scoring;

pub use entity::*;
pub use larp_score::*;
pub use scoring::*;

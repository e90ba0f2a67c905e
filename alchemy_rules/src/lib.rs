//! # Alchemy Rules
//!
//! The "recipe book" crate - elements, categories and the recipe keys that tie them
//! together. This crate only describes the data; resolving combinations, scanning
//! for gaps and persisting the world live in `alchemy_core`.

pub mod categories;
pub mod elements;
pub mod seed;

pub use categories::*;
pub use elements::*;
pub use seed::*;

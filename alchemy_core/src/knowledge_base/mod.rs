//! Knowledge Base module - the recipe graph and everything the player knows about it.
//!
//! The knowledge base consists of:
//! - **Categories**: ordered containers owning the elements
//! - **Recipes**: a map from an unordered ingredient pair to the element it makes
//! - **Nothing**: the sentinel element (id 0) that "empty" combinations produce
//!
//! On top of the graph sit the randomized circular scans used to find a gap in
//! the recipe grid while authoring, and a known fact to quiz the player on.

mod engine;
mod explorer;
mod scan;

pub use engine::*;
pub use explorer::*;

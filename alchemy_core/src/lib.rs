//! # Alchemy Core
//!
//! The crafting knowledge engine. Players start with a handful of basic
//! elements and discover new ones by combining pairs according to authored
//! recipes. This crate owns the recipe graph built from `alchemy_rules` types,
//! tracks what the player knows, and reads and writes the save format.
//!
//! ## Core Components
//!
//! - **knowledge_base**: the engine, recipe resolution and the randomized scans
//! - **quiz**: multiple-choice questions about discovered recipes
//! - **codec**: the line-oriented save format
//! - **export**: JSON view of the whole catalog
//!
//! ## Design Philosophy
//!
//! - **Owned state**: the engine is a plain value passed around explicitly
//! - **Caller-driven**: every operation runs to completion; there is no loop inside
//! - **Recoverable outcomes**: exhausted searches and bad save lines are typed results

pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod knowledge_base;
pub mod quiz;

pub use config::*;
pub use error::*;
pub use export::*;
pub use knowledge_base::*;
pub use quiz::*;

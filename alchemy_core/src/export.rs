//! Catalog export - a human-readable JSON view of the engine.

use alchemy_rules::{Element, RecipeState};
use serde::{Deserialize, Serialize};

use crate::knowledge_base::KnowledgeEngine;

/// Exported element with its recipes grouped by state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementExport {
    pub id: u32,
    pub name: String,
    pub basic: bool,
    pub known: bool,
    /// Recipe keys in `a,b` form.
    pub quizzed: Vec<String>,
    pub known_recipes: Vec<String>,
    pub unknown_recipes: Vec<String>,
}

/// Exported category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExport {
    pub name: String,
    pub elements: Vec<ElementExport>,
}

/// Exported engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExport {
    /// Percentage of known elements, absent for an empty engine.
    pub progress: Option<f64>,
    pub recipe_count: usize,
    pub categories: Vec<CategoryExport>,
}

impl CatalogExport {
    pub fn from_engine(engine: &KnowledgeEngine) -> Self {
        let categories = engine
            .categories()
            .iter()
            .map(|category| CategoryExport {
                name: category.name().to_string(),
                elements: category
                    .elements()
                    .iter()
                    .map(|e| export_element(e, category.knows(e)))
                    .collect(),
            })
            .collect();

        Self {
            progress: engine.progress(),
            recipe_count: engine.recipe_count(),
            categories,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn export_element(element: &Element, known: bool) -> ElementExport {
    let keys = |state| {
        element
            .recipes()
            .in_state(state)
            .iter()
            .map(ToString::to_string)
            .collect()
    };
    ElementExport {
        id: element.id().0,
        name: element.name().to_string(),
        basic: element.is_basic(),
        known,
        quizzed: keys(RecipeState::Quizzed),
        known_recipes: keys(RecipeState::Known),
        unknown_recipes: keys(RecipeState::Unknown),
    }
}

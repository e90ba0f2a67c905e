//! Element definitions.

use serde::{Deserialize, Serialize};

use super::{ElementId, RecipeKey, RecipeLedger};
use crate::categories::CategoryId;

/// A single thing the player can discover and combine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    name: String,
    basic: bool,

    /// The category currently holding this element. Lookup only; the
    /// category owns the element.
    category: Option<CategoryId>,

    /// Recipes that produce this element.
    recipes: RecipeLedger,
}

impl Element {
    /// Create an element with an explicit id.
    ///
    /// Basic elements are the starting set and are always known.
    pub fn new(id: ElementId, name: impl Into<String>, basic: bool) -> Self {
        Self {
            id,
            name: name.into(),
            basic,
            category: None,
            recipes: RecipeLedger::new(),
        }
    }

    /// Create an element with recipes already tracked, as read from a save file.
    pub fn with_recipes(mut self, recipes: RecipeLedger) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_basic(&self) -> bool {
        self.basic
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub(crate) fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    pub fn recipes(&self) -> &RecipeLedger {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeLedger {
        &mut self.recipes
    }

    /// Register an authored recipe for this element.
    pub fn add_recipe_reference(&mut self, key: RecipeKey) {
        self.recipes.add(key);
    }

    /// Mark a recipe as discovered by the player.
    pub fn learn(&mut self, key: &RecipeKey) -> bool {
        self.recipes.learn(key)
    }

    /// Use up a known recipe as a quiz question.
    pub fn mark_quizzed(&mut self, key: &RecipeKey) -> bool {
        self.recipes.mark_quizzed(key)
    }

    /// Make a quizzed recipe available again.
    pub fn unmark_quizzed(&mut self, key: &RecipeKey) -> bool {
        self.recipes.unmark_quizzed(key)
    }

    /// Forget every discovered recipe.
    pub fn forget_all(&mut self) {
        self.recipes.forget_all();
    }

    /// Stop tracking a recipe, whatever its state.
    pub fn remove_recipe_reference(&mut self, key: &RecipeKey) -> bool {
        self.recipes.remove(key).is_some()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}. {}]", self.id, self.name)
    }
}

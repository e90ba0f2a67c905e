//! Knowledge Engine - owns the categories, the recipe map and the nothing sentinel.

use std::collections::HashMap;

use alchemy_rules::{
    Category, CategoryId, Element, ElementId, Insertion, Learning, RecipeKey, RecipeLedger,
    BASIC_ELEMENTS, NOTHING_NAME, STARTER_CONTENT,
};
use tracing::debug;

use crate::codec;
use crate::config::SeedContent;
use crate::error::{EngineError, Result};

/// Outcome of a rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rename<T> {
    Renamed,
    /// Another item already uses the name. Merging the two is left to the caller.
    NameTaken(T),
}

/// The crafting knowledge engine.
///
/// Holds every category (in display order), the map from ingredient pairs to
/// results, and the nothing sentinel. Element ids are allocated here, so two
/// engines never share an id counter.
#[derive(Debug, Clone)]
pub struct KnowledgeEngine {
    categories: Vec<Category>,
    recipes: HashMap<RecipeKey, ElementId>,
    nothing: Element,
    highest_id: u32,
    next_category: u32,
}

impl Default for KnowledgeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeEngine {
    /// Create an engine holding only the nothing sentinel.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            recipes: HashMap::new(),
            nothing: Element::new(ElementId::NOTHING, NOTHING_NAME, false),
            highest_id: 0,
            next_category: 0,
        }
    }

    /// Create an engine with fire, water, earth and air.
    pub fn with_basics() -> Self {
        let mut engine = Self::new();
        engine.seed_basics();
        engine
    }

    /// Create an engine holding the bundled starter world.
    pub fn with_starter_content() -> Result<Self> {
        codec::load(STARTER_CONTENT).map(|report| report.engine)
    }

    /// Create an engine from the configured seed.
    pub fn seeded(seed: SeedContent) -> Self {
        match seed {
            SeedContent::Basics => Self::with_basics(),
            SeedContent::Starter => Self::with_starter_content().unwrap_or_else(|err| {
                tracing::warn!(%err, "starter content unreadable, using the basics");
                Self::with_basics()
            }),
        }
    }

    fn seed_basics(&mut self) {
        for (id, name) in BASIC_ELEMENTS {
            let category = self.push_category(name);
            // A fresh engine holds no element yet, so the insert cannot collide.
            let _ = self.insert_element(category, Element::new(ElementId(id), name, true), false);
        }
    }

    // ------------------------------------------------------------------
    // Ids
    // ------------------------------------------------------------------

    /// Hand out the next element id.
    ///
    /// Fails once the highest possible id has been seen, since ids are never reused.
    pub fn allocate_id(&mut self) -> Result<ElementId> {
        self.highest_id = self
            .highest_id
            .checked_add(1)
            .ok_or(EngineError::IdSpaceExhausted)?;
        Ok(ElementId(self.highest_id))
    }

    /// The highest element id seen so far.
    pub fn highest_id(&self) -> ElementId {
        ElementId(self.highest_id)
    }

    fn observe_id(&mut self, id: ElementId) {
        if id.0 > self.highest_id {
            self.highest_id = id.0;
        }
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Get the position of a category in display order.
    pub fn category_index(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id() == id)
    }

    /// Find a category by name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Get the category with this name, appending a new one if there is none.
    pub fn ensure_category(&mut self, name: &str) -> Result<CategoryId> {
        validate_name(name)?;
        match self.category_by_name(name) {
            Some(category) => Ok(category.id()),
            None => Ok(self.push_category(name)),
        }
    }

    /// Append a category without checking its name.
    pub(crate) fn push_category(&mut self, name: &str) -> CategoryId {
        let id = CategoryId(self.next_category);
        self.next_category += 1;
        self.categories.push(Category::new(id, name));
        id
    }

    /// Rename a category.
    pub fn rename_category(&mut self, current: &str, new_name: &str) -> Result<Rename<CategoryId>> {
        validate_name(new_name)?;
        let index = self
            .categories
            .iter()
            .position(|c| c.name() == current)
            .ok_or_else(|| EngineError::UnknownCategory(current.to_string()))?;

        if let Some(existing) = self.category_by_name(new_name) {
            if existing.id() != self.categories[index].id() {
                return Ok(Rename::NameTaken(existing.id()));
            }
        }
        self.categories[index].set_name(new_name);
        Ok(Rename::Renamed)
    }

    /// Move every element of `absorbed` into `base` and delete `absorbed`.
    ///
    /// Returns false if either category is missing or both are the same.
    pub fn merge_categories(&mut self, base: CategoryId, absorbed: CategoryId) -> bool {
        if base == absorbed || self.category(base).is_none() {
            return false;
        }
        let Some(absorbed_index) = self.category_index(absorbed) else {
            return false;
        };

        let mut removed = self.categories.remove(absorbed_index);
        let Some(base_index) = self.category_index(base) else {
            return false;
        };
        for (element, known) in removed.take_all() {
            if let Insertion::Added { gained_progress: true } =
                self.categories[base_index].insert(element, known)
            {
                debug!(category = %self.categories[base_index].name(), "category gained progress");
            }
        }
        debug!(base = %self.categories[base_index].name(), absorbed = %removed.name(), "merged categories");
        true
    }

    // ------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------

    /// The nothing sentinel.
    pub fn nothing(&self) -> &Element {
        &self.nothing
    }

    /// Get an element by id, the sentinel included.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        if id.is_nothing() {
            return Some(&self.nothing);
        }
        self.categories.iter().find_map(|c| c.get(id))
    }

    /// Get an element by id, but only if the player knows it.
    pub fn known_element(&self, id: ElementId) -> Option<&Element> {
        if id.is_nothing() {
            return Some(&self.nothing);
        }
        self.categories.iter().find_map(|c| c.lookup_by_id(id, true))
    }

    /// Find an element by name, the sentinel included.
    pub fn element_by_name(&self, name: &str) -> Option<&Element> {
        if self.nothing.name() == name {
            return Some(&self.nothing);
        }
        self.categories.iter().find_map(|c| c.lookup_by_name(name))
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if id.is_nothing() {
            return Some(&mut self.nothing);
        }
        self.categories.iter_mut().find_map(|c| c.get_mut(id))
    }

    /// Find where an element sits: (category index, element index).
    pub(crate) fn locate(&self, id: ElementId) -> Option<(usize, usize)> {
        self.categories.iter().enumerate().find_map(|(category, c)| {
            c.elements()
                .binary_search_by_key(&id, Element::id)
                .ok()
                .map(|index| (category, index))
        })
    }

    /// Check if the player knows an element. Basics and the sentinel always count.
    pub fn is_known(&self, id: ElementId) -> bool {
        if id.is_nothing() {
            return true;
        }
        self.element(id)
            .and_then(|element| {
                let category = self.category(element.category()?)?;
                Some(category.knows(element))
            })
            .unwrap_or(false)
    }

    /// Iterate over every element in category order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.categories.iter().flat_map(|c| c.elements())
    }

    /// Number of elements across all categories.
    pub fn element_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Number of known elements across all categories.
    pub fn known_count(&self) -> usize {
        self.categories.iter().map(Category::known_len).sum()
    }

    /// Create a new, undiscovered element in the named category.
    ///
    /// The category is appended if it does not exist yet.
    pub fn create_element(&mut self, name: &str, category_name: &str) -> Result<ElementId> {
        validate_name(name)?;
        validate_name(category_name)?;
        // No category is created when the ids have run out
        let id = self.allocate_id()?;
        let category = self.ensure_category(category_name)?;
        self.insert_element(category, Element::new(id, name, false), false)?;
        debug!(%id, name, category = category_name, "created element");
        Ok(id)
    }

    /// Insert an element into a category.
    ///
    /// The id counter moves past the element's id. An id that already exists
    /// anywhere in the engine is ignored.
    pub fn insert_element(
        &mut self,
        category: CategoryId,
        element: Element,
        known: bool,
    ) -> Result<Insertion> {
        let index = self
            .category_index(category)
            .ok_or_else(|| EngineError::UnknownCategory(category.to_string()))?;
        self.observe_id(element.id());
        if self.element(element.id()).is_some() {
            debug!(id = %element.id(), "ignoring duplicate element id");
            return Ok(Insertion::Duplicate);
        }

        let outcome = self.categories[index].insert(element, known);
        if let Insertion::Added { gained_progress: true } = outcome {
            debug!(category = %self.categories[index].name(), "category gained progress");
        }
        Ok(outcome)
    }

    /// Mark an element as discovered in its category.
    ///
    /// Returns true if the element was not known before.
    pub fn learn_element(&mut self, id: ElementId) -> bool {
        let Some(category_id) = self.element(id).and_then(Element::category) else {
            return false;
        };
        let Some(index) = self.category_index(category_id) else {
            return false;
        };
        match self.categories[index].learn(id) {
            Learning::Learned { gained_progress } => {
                if gained_progress {
                    debug!(category = %self.categories[index].name(), "category gained progress");
                }
                true
            }
            Learning::AlreadyKnown | Learning::NotContained => false,
        }
    }

    /// Rename an element.
    ///
    /// The sentinel keeps its name, since the save format relies on it.
    pub fn rename_element(&mut self, id: ElementId, new_name: &str) -> Result<Rename<ElementId>> {
        validate_name(new_name)?;
        if id.is_nothing() {
            return Err(EngineError::InvalidName(new_name.to_string()));
        }
        if let Some(existing) = self.element_by_name(new_name) {
            if existing.id() != id {
                return Ok(Rename::NameTaken(existing.id()));
            }
        }
        let element = self
            .element_mut(id)
            .ok_or(EngineError::UnknownElement(id))?;
        element.set_name(new_name);
        Ok(Rename::Renamed)
    }

    /// Move an element to the named category, creating it when needed.
    ///
    /// The element keeps its recipes and its known status.
    pub fn move_element(&mut self, id: ElementId, category_name: &str) -> Result<CategoryId> {
        validate_name(category_name)?;
        let current = self
            .element(id)
            .filter(|_| !id.is_nothing())
            .ok_or(EngineError::UnknownElement(id))?
            .category();
        if let Some(target) = self.category_by_name(category_name) {
            if Some(target.id()) == current {
                return Ok(target.id());
            }
        }

        let (element, known) = self
            .take_element(id)
            .ok_or(EngineError::UnknownElement(id))?;
        let category = self.ensure_category(category_name)?;
        self.insert_element(category, element, known)?;
        Ok(category)
    }

    /// Remove an element from its category, dropping the category if it ends up empty.
    ///
    /// With `clear_inbound_recipes`, every recipe producing the element is
    /// removed from the recipe map. The ingredients are left alone.
    pub fn remove_element(&mut self, id: ElementId, clear_inbound_recipes: bool) -> Option<Element> {
        let (element, _) = self.take_element(id)?;
        if clear_inbound_recipes {
            // Entries re-pointed elsewhere by a merge stay
            for (key, _) in element.recipes().iter() {
                if self.recipes.get(&key) == Some(&id) {
                    self.recipes.remove(&key);
                }
            }
        }
        debug!(%id, name = element.name(), clear_inbound_recipes, "removed element");
        Some(element)
    }

    fn take_element(&mut self, id: ElementId) -> Option<(Element, bool)> {
        if id.is_nothing() {
            return None;
        }
        let index = self.categories.iter().position(|c| c.contains(id))?;
        let taken = self.categories[index].remove(id)?;
        if self.categories[index].is_empty() {
            let category = self.categories.remove(index);
            debug!(category = %category.name(), "removed empty category");
        }
        Some(taken)
    }

    /// Fold `absorbed` into `base`: `absorbed` disappears and all of its
    /// recipes now produce `base`, keeping their known/quizzed state.
    ///
    /// Returns false if either element is missing or both are the same.
    pub fn merge_elements(&mut self, base: ElementId, absorbed: ElementId) -> bool {
        if base == absorbed || self.element(base).is_none() {
            return false;
        }
        let Some(absorbed_element) = self.remove_element(absorbed, false) else {
            return false;
        };

        // Re-point the map first, then hand the keys over with their state
        let moved: Vec<_> = absorbed_element.recipes().iter().collect();
        for (key, _) in &moved {
            self.recipes.insert(*key, base);
        }
        if let Some(base_element) = self.element_mut(base) {
            for (key, state) in moved {
                base_element.recipes_mut().insert(key, state);
            }
        }
        debug!(%base, %absorbed, "merged elements");
        true
    }

    // ------------------------------------------------------------------
    // Recipes
    // ------------------------------------------------------------------

    /// Look up what a pair of elements makes.
    ///
    /// With `learn`, the recipe is marked as discovered on the result. Authoring
    /// previews should pass false.
    pub fn resolve(&mut self, a: ElementId, b: ElementId, learn: bool) -> Option<ElementId> {
        let key = RecipeKey::new(a, b);
        let result = self.result_of(&key)?;
        if learn {
            if let Some(element) = self.element_mut(result) {
                element.learn(&key);
            }
        }
        Some(result)
    }

    /// Look up what a pair of elements makes without touching any state.
    pub fn peek(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        self.result_of(&RecipeKey::new(a, b))
    }

    /// Combine two elements during play: resolve, learn the recipe and learn the result.
    pub fn combine(&mut self, a: ElementId, b: ElementId) -> Option<ElementId> {
        let result = self.resolve(a, b, true)?;
        self.learn_element(result);
        Some(result)
    }

    /// The result a recipe key maps to, if that element still exists.
    pub fn result_of(&self, key: &RecipeKey) -> Option<ElementId> {
        let id = *self.recipes.get(key)?;
        self.element(id).map(|_| id)
    }

    /// Author a recipe: `a + b` now makes `result`.
    ///
    /// A different element that used to come out of this pair loses the recipe.
    /// If that leaves it without any recipe and it is not basic, it is removed.
    /// This cleanup only looks one level deep.
    pub fn register_recipe(&mut self, a: ElementId, b: ElementId, result: ElementId) -> Result<()> {
        for id in [a, b] {
            if self.element(id).is_none() {
                return Err(EngineError::UnknownElement(id));
            }
        }
        let key = RecipeKey::new(a, b);
        self.element_mut(result)
            .ok_or(EngineError::UnknownElement(result))?
            .add_recipe_reference(key);

        // The element this pair used to make loses the key
        let previous = self.recipes.insert(key, result);
        if let Some(previous) = previous.filter(|p| *p != result) {
            self.release_recipe(previous, &key);
        }
        Ok(())
    }

    fn release_recipe(&mut self, previous: ElementId, key: &RecipeKey) {
        let Some(element) = self.element_mut(previous) else {
            return;
        };
        element.remove_recipe_reference(key);

        // Basics and the sentinel stay even without recipes
        let orphaned =
            element.recipes().is_empty() && !element.is_basic() && !previous.is_nothing();
        if orphaned {
            debug!(id = %previous, %key, "removing element left without recipes");
            self.remove_element(previous, true);
        }
    }

    /// Iterate over every recipe and its result.
    pub fn recipes(&self) -> impl Iterator<Item = (&RecipeKey, &ElementId)> + '_ {
        self.recipes.iter()
    }

    /// Number of entries in the recipe map.
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub(crate) fn is_bound(&self, key: &RecipeKey) -> bool {
        self.recipes.contains_key(key)
    }

    pub(crate) fn bind_recipe(&mut self, key: RecipeKey, result: ElementId) {
        self.recipes.insert(key, result);
    }

    /// Replace the sentinel's recipes, binding each to the sentinel.
    pub(crate) fn restore_nothing(&mut self, recipes: RecipeLedger) {
        for (key, _) in recipes.iter() {
            self.recipes.insert(key, ElementId::NOTHING);
        }
        self.nothing = Element::new(ElementId::NOTHING, NOTHING_NAME, false).with_recipes(recipes);
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    /// Percentage of elements the player knows, or `None` if there are no elements.
    pub fn progress(&self) -> Option<f64> {
        let total = self.element_count();
        if total == 0 {
            return None;
        }
        Some(self.known_count() as f64 * 100.0 / total as f64)
    }

    /// Go back to the start.
    ///
    /// With `erase_content`, everything is wiped and the four basics are
    /// reloaded. Otherwise all content stays and only discoveries are forgotten.
    pub fn reset_to_start_state(&mut self, erase_content: bool) {
        if erase_content {
            *self = Self::with_basics();
            debug!("reset to the basic elements");
            return;
        }
        self.nothing.forget_all();
        for category in &mut self.categories {
            if category.reset_progress() {
                debug!(category = %category.name(), "category lost all progress");
            }
        }
    }
}

/// Names end up in the save format, so they cannot hold its delimiters.
pub fn validate_name(name: &str) -> Result<()> {
    let forbidden = |c: char| c == ';' || c == '\n' || c == '\r';
    if name.trim().is_empty() || name.contains(forbidden) {
        return Err(EngineError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemy_rules::RecipeState;

    const FIRE: ElementId = ElementId(1);
    const WATER: ElementId = ElementId(2);
    const EARTH: ElementId = ElementId(3);
    const AIR: ElementId = ElementId(4);

    #[test]
    fn test_seed_state() {
        let engine = KnowledgeEngine::with_basics();

        let names: Vec<_> = engine.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["fire", "water", "earth", "air"]);
        assert_eq!(engine.element_count(), 4);
        assert_eq!(engine.known_count(), 4);
        assert!(engine.is_known(FIRE));
        assert!(engine.is_known(ElementId::NOTHING));
        assert_eq!(engine.element_by_name("air").map(Element::id), Some(AIR));
        assert_eq!(engine.highest_id(), AIR);
    }

    #[test]
    fn test_register_and_resolve_any_order() {
        let mut engine = KnowledgeEngine::with_basics();
        assert_eq!(engine.resolve(FIRE, WATER, false), None);

        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        assert_eq!(engine.resolve(FIRE, WATER, false), Some(steam));
        assert_eq!(engine.resolve(WATER, FIRE, false), Some(steam));
        let key = RecipeKey::new(FIRE, WATER);
        assert_eq!(
            engine.element(steam).unwrap().recipes().state_of(&key),
            Some(RecipeState::Unknown)
        );
    }

    #[test]
    fn test_resolve_with_learn() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        engine.resolve(FIRE, WATER, true);

        let key = RecipeKey::new(FIRE, WATER);
        assert_eq!(engine.element(steam).unwrap().recipes().known(), &[key]);
        // Resolving alone does not discover the element itself.
        assert!(!engine.is_known(steam));
    }

    #[test]
    fn test_combine_discovers_result() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        assert_eq!(engine.combine(WATER, FIRE), Some(steam));
        assert!(engine.is_known(steam));
        assert!(engine.known_element(steam).is_some());
        assert_eq!(engine.combine(FIRE, EARTH), None);
    }

    #[test]
    fn test_reregister_moves_recipe_and_removes_orphan() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        let vapor = engine.create_element("vapor", "vapors").unwrap();
        engine.register_recipe(FIRE, WATER, vapor).unwrap();

        engine.register_recipe(FIRE, WATER, steam).unwrap();

        assert_eq!(engine.peek(FIRE, WATER), Some(steam));
        assert!(engine.element(vapor).is_none());
        assert!(engine.category_by_name("vapors").is_none());
    }

    #[test]
    fn test_reregister_keeps_element_with_other_recipes() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        let mud = engine.create_element("mud", "earth").unwrap();
        engine.register_recipe(FIRE, WATER, mud).unwrap();
        engine.register_recipe(WATER, EARTH, mud).unwrap();

        engine.register_recipe(FIRE, WATER, steam).unwrap();

        let mud_element = engine.element(mud).unwrap();
        assert!(!mud_element.recipes().contains(&RecipeKey::new(FIRE, WATER)));
        assert_eq!(mud_element.recipes().len(), 1);
    }

    #[test]
    fn test_reregister_never_removes_basics() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(WATER, WATER, FIRE).unwrap();

        engine.register_recipe(WATER, WATER, steam).unwrap();

        assert!(engine.element(FIRE).is_some());
        assert!(engine.element(FIRE).unwrap().recipes().is_empty());
    }

    #[test]
    fn test_register_unknown_elements() {
        let mut engine = KnowledgeEngine::with_basics();
        assert_eq!(
            engine.register_recipe(FIRE, WATER, ElementId(99)),
            Err(EngineError::UnknownElement(ElementId(99)))
        );
        assert_eq!(
            engine.register_recipe(ElementId(42), WATER, FIRE),
            Err(EngineError::UnknownElement(ElementId(42)))
        );
        assert_eq!(engine.recipe_count(), 0);
    }

    #[test]
    fn test_recipe_can_make_nothing() {
        let mut engine = KnowledgeEngine::with_basics();
        engine.register_recipe(EARTH, AIR, ElementId::NOTHING).unwrap();

        assert_eq!(engine.combine(EARTH, AIR), Some(ElementId::NOTHING));
        assert_eq!(engine.nothing().recipes().len(), 1);
    }

    #[test]
    fn test_remove_element_clears_inbound() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "vapors").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        let removed = engine.remove_element(steam, true).unwrap();

        assert_eq!(removed.name(), "steam");
        assert_eq!(engine.peek(FIRE, WATER), None);
        assert_eq!(engine.recipe_count(), 0);
        assert!(engine.category_by_name("vapors").is_none());
    }

    #[test]
    fn test_remove_element_keeps_inbound() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        engine.remove_element(steam, false);

        assert_eq!(engine.recipe_count(), 1);
        // The map entry dangles, so the pair no longer resolves.
        assert_eq!(engine.peek(FIRE, WATER), None);
        assert!(engine.remove_element(ElementId::NOTHING, true).is_none());
    }

    #[test]
    fn test_merge_elements() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        let vapor = engine.create_element("vapor", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();
        engine.register_recipe(EARTH, AIR, vapor).unwrap();
        engine.resolve(EARTH, AIR, true);

        assert!(engine.merge_elements(steam, vapor));

        assert_eq!(engine.peek(EARTH, AIR), Some(steam));
        assert!(engine.element(vapor).is_none());
        let recipes = engine.element(steam).unwrap().recipes();
        assert_eq!(recipes.known(), &[RecipeKey::new(EARTH, AIR)]);
        assert_eq!(recipes.unknown(), &[RecipeKey::new(FIRE, WATER)]);
    }

    #[test]
    fn test_merge_elements_noop() {
        let mut engine = KnowledgeEngine::with_basics();
        assert!(!engine.merge_elements(FIRE, FIRE));
        assert!(!engine.merge_elements(FIRE, ElementId(77)));
        assert!(!engine.merge_elements(ElementId(77), FIRE));
        assert!(engine.element(FIRE).is_some());
    }

    #[test]
    fn test_merge_categories() {
        let mut engine = KnowledgeEngine::with_basics();
        let fire = engine.category_by_name("fire").unwrap().id();
        let earth = engine.category_by_name("earth").unwrap().id();

        assert!(engine.merge_categories(fire, earth));

        let names: Vec<_> = engine.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["fire", "water", "air"]);
        let merged = engine.category(fire).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged.is_known(EARTH));
        assert_eq!(engine.element(EARTH).unwrap().category(), Some(fire));
        assert!(!engine.merge_categories(fire, fire));
        assert!(!engine.merge_categories(fire, earth));
    }

    #[test]
    fn test_rename_element() {
        let mut engine = KnowledgeEngine::with_basics();

        assert_eq!(engine.rename_element(FIRE, "flame"), Ok(Rename::Renamed));
        assert_eq!(engine.element(FIRE).unwrap().name(), "flame");
        assert_eq!(engine.rename_element(FIRE, "water"), Ok(Rename::NameTaken(WATER)));
        assert_eq!(
            engine.rename_element(FIRE, "nothing"),
            Ok(Rename::NameTaken(ElementId::NOTHING))
        );
        assert!(matches!(
            engine.rename_element(FIRE, "a;b"),
            Err(EngineError::InvalidName(_))
        ));
        assert_eq!(
            engine.rename_element(ElementId(50), "ghost"),
            Err(EngineError::UnknownElement(ElementId(50)))
        );
    }

    #[test]
    fn test_rename_category() {
        let mut engine = KnowledgeEngine::with_basics();
        let water = engine.category_by_name("water").unwrap().id();

        assert_eq!(engine.rename_category("fire", "heat"), Ok(Rename::Renamed));
        assert!(engine.category_by_name("heat").is_some());
        assert_eq!(engine.rename_category("heat", "water"), Ok(Rename::NameTaken(water)));
        assert_eq!(
            engine.rename_category("lava", "magma"),
            Err(EngineError::UnknownCategory("lava".to_string()))
        );
        assert!(matches!(
            engine.rename_category("heat", "  "),
            Err(EngineError::InvalidName(_))
        ));
    }

    #[test]
    fn test_move_element() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "air").unwrap();
        engine.learn_element(steam);

        let target = engine.move_element(steam, "vapors").unwrap();

        assert_eq!(engine.element(steam).unwrap().category(), Some(target));
        assert!(engine.is_known(steam));
        assert_eq!(engine.category_by_name("air").unwrap().len(), 1);

        // Moving the last element out removes the old category.
        engine.move_element(FIRE, "vapors").unwrap();
        assert!(engine.category_by_name("fire").is_none());
        assert_eq!(engine.category(target).unwrap().len(), 2);
    }

    #[test]
    fn test_create_element_ids_are_monotonic() {
        let mut engine = KnowledgeEngine::with_basics();
        let first = engine.create_element("steam", "air").unwrap();
        engine.remove_element(first, true);
        let second = engine.create_element("mud", "earth").unwrap();

        assert_eq!(first, ElementId(5));
        assert_eq!(second, ElementId(6));
    }

    #[test]
    fn test_insert_duplicate_id_is_ignored() {
        let mut engine = KnowledgeEngine::with_basics();
        let air = engine.category_by_name("air").unwrap().id();

        let outcome = engine
            .insert_element(air, Element::new(FIRE, "copy", false), false)
            .unwrap();

        assert_eq!(outcome, Insertion::Duplicate);
        assert_eq!(engine.element_count(), 4);
    }

    #[test]
    fn test_insert_advances_counter() {
        let mut engine = KnowledgeEngine::with_basics();
        let air = engine.category_by_name("air").unwrap().id();
        engine
            .insert_element(air, Element::new(ElementId(40), "stoner", false), false)
            .unwrap();

        assert_eq!(engine.allocate_id(), Ok(ElementId(41)));
    }

    #[test]
    fn test_progress() {
        let mut engine = KnowledgeEngine::with_basics();
        assert_eq!(engine.progress(), Some(100.0));

        let steam = engine.create_element("steam", "air").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();
        assert_eq!(engine.progress(), Some(80.0));

        engine.combine(FIRE, WATER);
        assert_eq!(engine.progress(), Some(100.0));

        assert_eq!(KnowledgeEngine::new().progress(), None);
    }

    #[test]
    fn test_reset_keeps_content() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "vapors").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();
        engine.combine(FIRE, WATER);

        engine.reset_to_start_state(false);

        assert!(!engine.is_known(steam));
        assert!(engine.is_known(FIRE));
        assert_eq!(engine.peek(FIRE, WATER), Some(steam));
        assert_eq!(
            engine.element(steam).unwrap().recipes().unknown(),
            &[RecipeKey::new(FIRE, WATER)]
        );
    }

    #[test]
    fn test_reset_erases_content() {
        let mut engine = KnowledgeEngine::with_basics();
        let steam = engine.create_element("steam", "vapors").unwrap();
        engine.register_recipe(FIRE, WATER, steam).unwrap();

        engine.reset_to_start_state(true);

        assert_eq!(engine.element_count(), 4);
        assert_eq!(engine.recipe_count(), 0);
        assert!(engine.element(steam).is_none());
        assert_eq!(engine.allocate_id(), Ok(ElementId(5)));
    }

    #[test]
    fn test_starter_content() {
        let engine = KnowledgeEngine::with_starter_content().unwrap();

        assert_eq!(engine.categories().len(), 11);
        assert_eq!(engine.element_count(), 50);
        assert_eq!(engine.known_count(), 4);
        assert_eq!(engine.peek(FIRE, WATER), engine.element_by_name("steam").map(Element::id));
        assert_eq!(engine.highest_id(), ElementId(50));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("fat fish").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("a\nb").is_err());
        assert!(validate_name("c;x").is_err());
    }
}

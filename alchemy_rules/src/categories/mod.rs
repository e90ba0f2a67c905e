//! Categories - ordered containers that group elements for display and lookup.

use serde::{Deserialize, Serialize};

use crate::elements::{Element, ElementId};

/// Identifier for a category, stable for the lifetime of the engine that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of inserting an element into a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The element was added. `gained_progress` is set when it is the first
    /// known element of a category that had none.
    Added { gained_progress: bool },
    /// An element with the same id is already present; nothing changed.
    Duplicate,
}

/// Outcome of learning an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Learning {
    Learned { gained_progress: bool },
    AlreadyKnown,
    NotContained,
}

/// A named group of elements.
///
/// Both `containing` and `known` are kept sorted ascending by id so lookups can
/// use binary search. `known` is always a subset of `containing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    containing: Vec<Element>,
    known: Vec<ElementId>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            containing: Vec::new(),
            known: Vec::new(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Insert an element at its sorted position.
    ///
    /// Basic elements, and elements flagged `known` by the caller, are also added
    /// to the known subset. An id that is already present is ignored.
    pub fn insert(&mut self, mut element: Element, known: bool) -> Insertion {
        let id = element.id();
        let index = match self.containing.binary_search_by_key(&id, Element::id) {
            Ok(_) => return Insertion::Duplicate,
            Err(index) => index,
        };

        let known = known || element.is_basic();
        element.set_category(Some(self.id));
        self.containing.insert(index, element);

        let gained_progress = known && self.mark_known(id);
        Insertion::Added { gained_progress }
    }

    /// Find an element by id, either among all elements or only the known ones.
    pub fn lookup_by_id(&self, id: ElementId, from_known: bool) -> Option<&Element> {
        if from_known && self.known.binary_search(&id).is_err() {
            return None;
        }
        self.get(id)
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.containing
            .binary_search_by_key(&id, Element::id)
            .ok()
            .map(|index| &self.containing[index])
    }

    /// Get a mutable element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.containing
            .binary_search_by_key(&id, Element::id)
            .ok()
            .map(|index| &mut self.containing[index])
    }

    /// Find an element by name. Names are not sorted, so this is a linear scan.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Element> {
        self.containing.iter().find(|e| e.name() == name)
    }

    /// Check if the category holds an element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Check if the player knows the element with this id.
    pub fn is_known(&self, id: ElementId) -> bool {
        self.known.binary_search(&id).is_ok()
    }

    /// Check if an element counts as known: basic, or learned in this category.
    pub fn knows(&self, element: &Element) -> bool {
        element.is_basic() || self.is_known(element.id())
    }

    /// Remove an element.
    ///
    /// Returns the element together with whether it was known. Recipe cleanup
    /// is left to the caller.
    pub fn remove(&mut self, id: ElementId) -> Option<(Element, bool)> {
        let index = self.containing.binary_search_by_key(&id, Element::id).ok()?;
        let mut element = self.containing.remove(index);
        element.set_category(None);

        let was_known = match self.known.binary_search(&id) {
            Ok(known_index) => {
                self.known.remove(known_index);
                true
            }
            Err(_) => false,
        };
        Some((element, was_known))
    }

    /// Add a contained element to the known subset.
    pub fn learn(&mut self, id: ElementId) -> Learning {
        if !self.contains(id) {
            return Learning::NotContained;
        }
        if self.is_known(id) {
            return Learning::AlreadyKnown;
        }
        let gained_progress = self.mark_known(id);
        Learning::Learned { gained_progress }
    }

    /// Forget everything the player discovered, keeping only the basics.
    ///
    /// Returns true if the category is left without any known element.
    pub fn reset_progress(&mut self) -> bool {
        self.known.clear();
        for element in &mut self.containing {
            element.forget_all();
        }
        self.known = self
            .containing
            .iter()
            .filter(|e| e.is_basic())
            .map(Element::id)
            .collect();
        self.known.is_empty()
    }

    /// Take every element out, with its known flag, leaving the category empty.
    pub fn take_all(&mut self) -> Vec<(Element, bool)> {
        let known = std::mem::take(&mut self.known);
        std::mem::take(&mut self.containing)
            .into_iter()
            .map(|mut element| {
                element.set_category(None);
                let was_known = known.binary_search(&element.id()).is_ok();
                (element, was_known)
            })
            .collect()
    }

    /// All elements, sorted by id.
    pub fn elements(&self) -> &[Element] {
        &self.containing
    }

    /// Ids of the known elements, sorted.
    pub fn known_ids(&self) -> &[ElementId] {
        &self.known
    }

    /// Iterate over the known elements in id order.
    pub fn known_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.containing.iter().filter(|e| self.is_known(e.id()))
    }

    pub fn len(&self) -> usize {
        self.containing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containing.is_empty()
    }

    pub fn known_len(&self) -> usize {
        self.known.len()
    }

    /// Check if the player knows at least one element here.
    pub fn has_progress(&self) -> bool {
        !self.known.is_empty()
    }

    /// Insert an id into the known subset. Returns true if the subset was empty before.
    fn mark_known(&mut self, id: ElementId) -> bool {
        let was_empty = self.known.is_empty();
        match self.known.binary_search(&id) {
            Ok(_) => false,
            Err(index) => {
                self.known.insert(index, id);
                was_empty
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

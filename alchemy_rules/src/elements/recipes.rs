//! Per-element recipe bookkeeping.

use serde::{Deserialize, Serialize};

use super::RecipeKey;

/// How far the player has come with a single recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeState {
    /// Authored but never combined by the player.
    Unknown,
    /// Discovered by the player and available as a quiz question.
    Known,
    /// Currently used up by a quiz question.
    Quizzed,
}

/// The recipes that produce one element, split by how much the player knows.
///
/// A key lives in exactly one of the three lists. Each list keeps insertion
/// order so a save file reproduces the same layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeLedger {
    quizzed: Vec<RecipeKey>,
    known: Vec<RecipeKey>,
    unknown: Vec<RecipeKey>,
}

impl RecipeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an authored recipe as unknown.
    ///
    /// A key that is already tracked keeps its current state.
    pub fn add(&mut self, key: RecipeKey) {
        self.insert(key, RecipeState::Unknown);
    }

    /// Track a key in the given state, unless it is already tracked.
    ///
    /// Returns false if the key was already present.
    pub fn insert(&mut self, key: RecipeKey, state: RecipeState) -> bool {
        if self.state_of(&key).is_some() {
            return false;
        }
        self.list_mut(state).push(key);
        true
    }

    /// Move a key from unknown to known.
    pub fn learn(&mut self, key: &RecipeKey) -> bool {
        self.shift(key, RecipeState::Unknown, RecipeState::Known)
    }

    /// Move a key from known to quizzed.
    pub fn mark_quizzed(&mut self, key: &RecipeKey) -> bool {
        self.shift(key, RecipeState::Known, RecipeState::Quizzed)
    }

    /// Move a key from quizzed back to known.
    pub fn unmark_quizzed(&mut self, key: &RecipeKey) -> bool {
        // Quizzes are usually cancelled right after being asked, so look from the back.
        match self.quizzed.iter().rposition(|k| k == key) {
            Some(index) => {
                let key = self.quizzed.remove(index);
                self.known.push(key);
                true
            }
            None => false,
        }
    }

    /// Move every known and quizzed key back to unknown.
    pub fn forget_all(&mut self) {
        self.unknown.append(&mut self.quizzed);
        self.unknown.append(&mut self.known);
    }

    /// Drop a key from whichever list holds it.
    pub fn remove(&mut self, key: &RecipeKey) -> Option<RecipeState> {
        let state = self.state_of(key)?;
        self.list_mut(state).retain(|k| k != key);
        Some(state)
    }

    /// Find the state a key is in.
    pub fn state_of(&self, key: &RecipeKey) -> Option<RecipeState> {
        if self.quizzed.contains(key) {
            Some(RecipeState::Quizzed)
        } else if self.known.contains(key) {
            Some(RecipeState::Known)
        } else if self.unknown.contains(key) {
            Some(RecipeState::Unknown)
        } else {
            None
        }
    }

    /// Check if the ledger tracks a key.
    pub fn contains(&self, key: &RecipeKey) -> bool {
        self.state_of(key).is_some()
    }

    pub fn quizzed(&self) -> &[RecipeKey] {
        &self.quizzed
    }

    pub fn known(&self) -> &[RecipeKey] {
        &self.known
    }

    pub fn unknown(&self) -> &[RecipeKey] {
        &self.unknown
    }

    /// Get the keys in one state.
    pub fn in_state(&self, state: RecipeState) -> &[RecipeKey] {
        match state {
            RecipeState::Unknown => &self.unknown,
            RecipeState::Known => &self.known,
            RecipeState::Quizzed => &self.quizzed,
        }
    }

    /// Iterate over every key together with its state.
    pub fn iter(&self) -> impl Iterator<Item = (RecipeKey, RecipeState)> + '_ {
        let unknown = self.unknown.iter().map(|k| (*k, RecipeState::Unknown));
        let known = self.known.iter().map(|k| (*k, RecipeState::Known));
        let quizzed = self.quizzed.iter().map(|k| (*k, RecipeState::Quizzed));
        unknown.chain(known).chain(quizzed)
    }

    /// Total number of recipes, whatever their state.
    pub fn len(&self) -> usize {
        self.quizzed.len() + self.known.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shift(&mut self, key: &RecipeKey, from: RecipeState, to: RecipeState) -> bool {
        let source = self.list_mut(from);
        match source.iter().position(|k| k == key) {
            Some(index) => {
                let key = source.remove(index);
                self.list_mut(to).push(key);
                true
            }
            None => false,
        }
    }

    fn list_mut(&mut self, state: RecipeState) -> &mut Vec<RecipeKey> {
        match state {
            RecipeState::Unknown => &mut self.unknown,
            RecipeState::Known => &mut self.known,
            RecipeState::Quizzed => &mut self.quizzed,
        }
    }
}

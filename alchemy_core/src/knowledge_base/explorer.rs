//! Randomized searches over the recipe graph.
//!
//! Both searches start at a random slot and wrap around the whole element list,
//! so every candidate is reachable no matter where the scan begins.

use alchemy_rules::{Category, ElementId, RecipeKey};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scan::{CircularScan, Slot};
use super::KnowledgeEngine;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// A known recipe picked as a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizFact {
    pub key: RecipeKey,
    pub first: ElementId,
    pub second: ElementId,
    /// The element the recipe makes.
    pub result: ElementId,
}

impl KnowledgeEngine {
    /// Find a pair of elements that has no result yet, with self pairs allowed
    /// as configured.
    pub fn find_gap(
        &self,
        config: &EngineConfig,
        rng: &mut impl Rng,
        start: Option<ElementId>,
    ) -> Result<(ElementId, ElementId)> {
        self.find_unresolved_combination(rng, start, config.allow_self_pairs)
    }

    /// Find a pair of elements that has no result yet.
    ///
    /// The outer scan starts at `start` if given, otherwise at a random element.
    /// For each outer element an inner scan starts at its own random element.
    /// Both wrap around all categories, so the search only fails when every pair
    /// is already filled in.
    pub fn find_unresolved_combination(
        &self,
        rng: &mut impl Rng,
        start: Option<ElementId>,
        allow_self_pairs: bool,
    ) -> Result<(ElementId, ElementId)> {
        let lens: Vec<usize> = self.categories().iter().map(Category::len).collect();
        let outer = match start {
            Some(id) => {
                let slot = self.locate(id).ok_or(EngineError::UnknownElement(id))?;
                CircularScan::starting_at(&lens, slot)
            }
            None => CircularScan::random(&lens, rng).ok_or(EngineError::AllCombinationsExhausted)?,
        };

        for outer_slot in outer {
            let first = self.id_at(outer_slot);
            let Some(inner) = CircularScan::random(&lens, rng) else {
                break;
            };
            for inner_slot in inner {
                let second = self.id_at(inner_slot);
                let key = RecipeKey::new(first, second);
                if key.is_self_pair() && !allow_self_pairs {
                    continue;
                }
                if self.result_of(&key).is_none() {
                    return Ok((first, second));
                }
            }
        }
        Err(EngineError::AllCombinationsExhausted)
    }

    /// Pick a known recipe to quiz the player on and mark it as quizzed.
    ///
    /// Only known elements of categories with progress are scanned. The first
    /// one (other than `exclude`) with a known recipe gives a random one of them.
    pub fn find_quiz_fact(
        &mut self,
        rng: &mut impl Rng,
        exclude: Option<ElementId>,
    ) -> Result<QuizFact> {
        let fact = self.locate_quiz_fact(rng, exclude)?;
        if let Some(element) = self.element_mut(fact.result) {
            element.mark_quizzed(&fact.key);
        }
        Ok(fact)
    }

    /// Same search as [`find_quiz_fact`](Self::find_quiz_fact), without marking anything.
    pub fn locate_quiz_fact(
        &self,
        rng: &mut impl Rng,
        exclude: Option<ElementId>,
    ) -> Result<QuizFact> {
        let lens: Vec<usize> = self
            .categories()
            .iter()
            .map(|c| if c.has_progress() { c.known_len() } else { 0 })
            .collect();
        let scan = CircularScan::random(&lens, rng).ok_or(EngineError::NoQuizableFacts)?;

        for (category, index) in scan {
            let category = &self.categories()[category];
            let id = category.known_ids()[index];
            if Some(id) == exclude {
                continue;
            }
            let Some(element) = category.get(id) else {
                continue;
            };
            let Some(key) = element.recipes().known().choose(rng).copied() else {
                continue;
            };
            let (first, second) = key.ingredients();
            return Ok(QuizFact {
                key,
                first,
                second,
                result: id,
            });
        }
        Err(EngineError::NoQuizableFacts)
    }

    /// Give a quizzed recipe back when the quiz is abandoned.
    pub fn cancel_quiz(&mut self, fact: &QuizFact) -> bool {
        self.element_mut(fact.result)
            .map(|element| element.unmark_quizzed(&fact.key))
            .unwrap_or(false)
    }

    fn id_at(&self, (category, index): Slot) -> ElementId {
        self.categories()[category].elements()[index].id()
    }
}

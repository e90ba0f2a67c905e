//! Quiz - multiple-choice questions about recipes the player already discovered.
//!
//! A question asks which pair makes a given element. The correct answer is a
//! known recipe, which is used up (marked quizzed) while the question is open.
//! Decoy answers are other known recipes with a different result; they are only
//! looked at, never used up.

use std::collections::HashSet;

use alchemy_rules::ElementId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::knowledge_base::{KnowledgeEngine, QuizFact};

/// One answer offered for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizChoice {
    pub ingredients: (ElementId, ElementId),
    /// What the pair actually makes.
    pub result: ElementId,
    pub correct: bool,
}

impl QuizChoice {
    fn from_fact(fact: &QuizFact, correct: bool) -> Self {
        Self {
            ingredients: (fact.first, fact.second),
            result: fact.result,
            correct,
        }
    }
}

/// A question with its shuffled answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    fact: QuizFact,
    choices: Vec<QuizChoice>,
    correct: usize,
}

impl QuizQuestion {
    /// The element the player has to find the recipe for.
    pub fn target(&self) -> ElementId {
        self.fact.result
    }

    /// The recipe being asked about.
    pub fn fact(&self) -> &QuizFact {
        &self.fact
    }

    pub fn choices(&self) -> &[QuizChoice] {
        &self.choices
    }

    /// Pick an answer by position.
    pub fn answer(&self, index: usize) -> Option<&QuizChoice> {
        self.choices.get(index)
    }

    /// Position of the correct answer.
    pub fn correct_index(&self) -> usize {
        self.correct
    }
}

/// Builds quiz questions from an engine.
#[derive(Debug, Clone)]
pub struct QuizMaster {
    choices: usize,
    decoy_attempts: usize,
}

impl Default for QuizMaster {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl QuizMaster {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            choices: config.quiz_choices.max(1),
            decoy_attempts: config.decoy_attempts,
        }
    }

    /// Ask a question.
    ///
    /// The correct recipe is marked quizzed until [`cancel`](Self::cancel) is
    /// called. A question may come with fewer decoys than configured when the
    /// player has not discovered enough other recipes.
    pub fn ask(&self, engine: &mut KnowledgeEngine, rng: &mut impl Rng) -> Result<QuizQuestion> {
        let fact = engine.find_quiz_fact(rng, None)?;
        let mut seen = HashSet::from([fact.key]);
        let mut choices = Vec::new();

        'decoys: while choices.len() + 1 < self.choices {
            for _ in 0..self.decoy_attempts {
                match engine.locate_quiz_fact(rng, Some(fact.result)) {
                    Ok(decoy) if seen.insert(decoy.key) => {
                        choices.push(QuizChoice::from_fact(&decoy, false));
                        continue 'decoys;
                    }
                    Ok(_) => {}
                    Err(EngineError::NoQuizableFacts) => break 'decoys,
                    Err(err) => return Err(err),
                }
            }
            break;
        }

        // Decoys in random order, the correct answer at a random position among them
        choices.shuffle(rng);
        let correct = rng.gen_range(0..=choices.len());
        choices.insert(correct, QuizChoice::from_fact(&fact, true));
        tracing::debug!(target_id = %fact.result, choices = choices.len(), "asking quiz question");
        Ok(QuizQuestion {
            fact,
            choices,
            correct,
        })
    }

    /// Abandon a question, making its recipe available again.
    pub fn cancel(&self, engine: &mut KnowledgeEngine, question: &QuizQuestion) -> bool {
        engine.cancel_quiz(&question.fact)
    }
}

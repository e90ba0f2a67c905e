//! Element definitions for the crafting world.

mod element;
mod recipes;

pub use element::*;
pub use recipes::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Numeric identifier for elements.
///
/// Ids are handed out in creation order and never reused within a session.
/// Id 0 belongs to the "nothing" sentinel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct ElementId(pub u32);

impl ElementId {
    /// The id reserved for the "nothing" sentinel.
    pub const NOTHING: ElementId = ElementId(0);

    /// Check if this is the sentinel id.
    pub fn is_nothing(self) -> bool {
        self == Self::NOTHING
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unordered pair of ingredients that make up a recipe.
///
/// Stored canonically with the smaller id first, so `RecipeKey::new(a, b)` and
/// `RecipeKey::new(b, a)` are the same key. The text form is `low,high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeKey {
    low: ElementId,
    high: ElementId,
}

impl RecipeKey {
    /// Create the canonical key for a pair of ingredients.
    pub fn new(a: ElementId, b: ElementId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two ingredients, smallest id first.
    pub fn ingredients(&self) -> (ElementId, ElementId) {
        (self.low, self.high)
    }

    /// Check if both ingredients are the same element.
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl std::fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.low, self.high)
    }
}

/// Errors from reading a recipe key in its `a,b` text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeKeyParseError {
    #[error("recipe `{0}` must have 2 ids separated by a comma")]
    WrongArity(String),

    #[error("recipe `{0}` must have 2 integer ids")]
    NotAnId(String),
}

impl FromStr for RecipeKey {
    type Err = RecipeKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RecipeKeyParseError::WrongArity(s.to_string()));
        };
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map(ElementId)
                .map_err(|_| RecipeKeyParseError::NotAnId(s.to_string()))
        };
        Ok(Self::new(parse(a)?, parse(b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_order_independent() {
        let forward = RecipeKey::new(ElementId(1), ElementId(2));
        let backward = RecipeKey::new(ElementId(2), ElementId(1));

        assert_eq!(forward, backward);
        assert_eq!(forward.to_string(), "1,2");
        assert_eq!(backward.ingredients(), (ElementId(1), ElementId(2)));
    }

    #[test]
    fn test_key_parse() {
        let key: RecipeKey = "12,3".parse().unwrap();
        assert_eq!(key.ingredients(), (ElementId(3), ElementId(12)));
        assert_eq!(key.to_string(), "3,12");

        let self_pair: RecipeKey = "4,4".parse().unwrap();
        assert!(self_pair.is_self_pair());
        assert_eq!(self_pair.ingredients(), (ElementId(4), ElementId(4)));
    }

    #[test]
    fn test_key_parse_errors() {
        assert_eq!(
            "7".parse::<RecipeKey>(),
            Err(RecipeKeyParseError::WrongArity("7".to_string()))
        );
        assert_eq!(
            "1,2,3".parse::<RecipeKey>(),
            Err(RecipeKeyParseError::WrongArity("1,2,3".to_string()))
        );
        assert_eq!(
            "1,fire".parse::<RecipeKey>(),
            Err(RecipeKeyParseError::NotAnId("1,fire".to_string()))
        );
    }

    #[test]
    fn test_nothing_id() {
        assert!(ElementId::NOTHING.is_nothing());
        assert!(!ElementId(1).is_nothing());
        assert_eq!(ElementId(42).to_string(), "42");
    }
}

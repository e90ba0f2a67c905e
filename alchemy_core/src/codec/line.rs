//! Reading and writing single lines of the save format.
//!
//! ```text
//! nothing;q;<quizzed>;k;<known>;u;<unknown>;
//! c;<category name>
//! <b|k|u>;<id>;<name>;q;<quizzed>;k;<known>;u;<unknown>;
//! ```
//!
//! Each recipe group is a `;`-separated list of `a,b` recipe keys.

use alchemy_rules::{Element, ElementId, RecipeKey, RecipeLedger, RecipeState};

use crate::error::{EngineError, Result};

const CATEGORY_MARKER: &str = "c";
const RECIPE_GROUPS: [(&str, RecipeState); 3] = [
    ("q", RecipeState::Quizzed),
    ("k", RecipeState::Known),
    ("u", RecipeState::Unknown),
];

/// How much the player knows about an element, as written at the start of its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Basic,
    Known,
    Unknown,
}

impl Marker {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "b" => Some(Self::Basic),
            "k" => Some(Self::Known),
            "u" => Some(Self::Unknown),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "b",
            Self::Known => "k",
            Self::Unknown => "u",
        }
    }
}

/// An element as read from its line, not yet placed in a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub marker: Marker,
    pub id: ElementId,
    pub name: String,
    pub recipes: RecipeLedger,
}

impl ElementRecord {
    pub fn into_element(self) -> Element {
        Element::new(self.id, self.name, self.marker == Marker::Basic).with_recipes(self.recipes)
    }
}

/// One parsed line after the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Category(String),
    Element(ElementRecord),
}

/// Read the recipes of the sentinel line.
pub fn parse_sentinel(text: &str, sentinel_name: &str) -> Result<RecipeLedger> {
    let fields: Vec<&str> = text.split(';').collect();
    if fields[0] != sentinel_name {
        return Err(EngineError::NoSuchSentinel);
    }
    parse_recipe_groups(&fields[1..], 1)
}

/// Read a category or element line.
pub fn parse_line(text: &str, line: usize) -> Result<Line> {
    let fields: Vec<&str> = text.split(';').collect();
    if fields[0] == CATEGORY_MARKER {
        return match fields.as_slice() {
            [_, name] if !name.trim().is_empty() => Ok(Line::Category(name.to_string())),
            [_] | [_, _] => Err(EngineError::malformed(line, "category name is missing")),
            _ => Err(EngineError::malformed(line, "category name cannot contain `;`")),
        };
    }

    if fields.len() < 6 {
        return Err(EngineError::malformed(line, "incorrect format, not enough fields"));
    }
    let marker = Marker::parse(fields[0])
        .ok_or_else(|| EngineError::malformed(line, "element must start with b, k or u"))?;
    let id = fields[1]
        .parse::<u32>()
        .map(ElementId)
        .map_err(|_| EngineError::malformed(line, "element id is not a number"))?;
    if id.is_nothing() {
        return Err(EngineError::malformed(line, "element id 0 is reserved for nothing"));
    }
    let name = fields[2];
    if name.trim().is_empty() {
        return Err(EngineError::malformed(line, "element name is missing"));
    }
    let recipes = parse_recipe_groups(&fields[3..], line)?;

    Ok(Line::Element(ElementRecord {
        marker,
        id,
        name: name.to_string(),
        recipes,
    }))
}

/// Read `q;...;k;...;u;...;` into a ledger. The three markers must all be
/// present and in that order.
fn parse_recipe_groups(fields: &[&str], line: usize) -> Result<RecipeLedger> {
    let mut ledger = RecipeLedger::new();
    let mut groups_seen = 0;
    let mut current = None;

    for field in fields.iter().filter(|f| !f.is_empty()) {
        if let Some((marker, state)) = RECIPE_GROUPS.get(groups_seen) {
            if field == marker {
                current = Some(*state);
                groups_seen += 1;
                continue;
            }
        }
        let Some(state) = current else {
            return Err(EngineError::malformed(line, "recipes must start with the q group"));
        };
        let key: RecipeKey = field.parse().map_err(|err| (line, err))?;
        if !ledger.insert(key, state) {
            return Err(EngineError::malformed(line, format!("recipe {key} is listed twice")));
        }
    }

    if groups_seen < RECIPE_GROUPS.len() {
        return Err(EngineError::malformed(
            line,
            "recipe groups must be introduced by q, k and u",
        ));
    }
    Ok(ledger)
}

/// Write a ledger as `q;...;k;...;u;...;`.
pub fn encode_recipes(recipes: &RecipeLedger) -> String {
    let mut out = String::new();
    for (marker, state) in RECIPE_GROUPS {
        out.push_str(marker);
        out.push(';');
        for key in recipes.in_state(state) {
            out.push_str(&key.to_string());
            out.push(';');
        }
    }
    out
}

/// Write an element line.
pub fn encode_element(element: &Element, known: bool) -> String {
    let marker = if element.is_basic() {
        Marker::Basic
    } else if known {
        Marker::Known
    } else {
        Marker::Unknown
    };
    format!(
        "{};{};{};{}",
        marker.as_str(),
        element.id(),
        element.name(),
        encode_recipes(element.recipes())
    )
}

/// Write a category line.
pub fn encode_category(name: &str) -> String {
    format!("{CATEGORY_MARKER};{name}")
}

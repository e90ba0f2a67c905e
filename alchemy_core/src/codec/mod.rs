//! Save format - turns the whole engine into plain text and back.
//!
//! The first line is always the nothing sentinel; a text without it is rejected.
//! After that, a `c;` line opens a category and every element line belongs to the
//! most recent category. Lines that cannot be read are reported and skipped.

mod line;

pub use line::{ElementRecord, Line, Marker};

use alchemy_rules::{CategoryId, ElementId, NOTHING_NAME};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::knowledge_base::KnowledgeEngine;

/// A loaded engine together with the problems found on the way.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub engine: KnowledgeEngine,
    /// One [`EngineError::MalformedLine`] per skipped line or dropped recipe.
    pub diagnostics: Vec<EngineError>,
}

impl LoadReport {
    /// Check if every line was read without problems.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Write the whole engine in save format.
pub fn save(engine: &KnowledgeEngine) -> String {
    let mut out = String::new();
    out.push_str(NOTHING_NAME);
    out.push(';');
    out.push_str(&line::encode_recipes(engine.nothing().recipes()));
    out.push('\n');

    for category in engine.categories() {
        out.push_str(&line::encode_category(category.name()));
        out.push('\n');
        for element in category.elements() {
            out.push_str(&line::encode_element(element, category.knows(element)));
            out.push('\n');
        }
    }
    out
}

/// Read an engine from save text.
///
/// Fails only if the first line is not a readable nothing sentinel. Every other
/// problem is collected in the report and the offending line is skipped.
pub fn load(text: &str) -> Result<LoadReport> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim_end_matches('\r')));

    let (_, first) = lines.next().ok_or(EngineError::NoSuchSentinel)?;
    let nothing_recipes = line::parse_sentinel(first, NOTHING_NAME).map_err(|err| {
        debug!(%err, "unreadable sentinel line");
        EngineError::NoSuchSentinel
    })?;

    let mut engine = KnowledgeEngine::new();
    engine.restore_nothing(nothing_recipes);
    let mut diagnostics = Vec::new();
    let mut current: Option<CategoryId> = None;

    for (number, text) in lines {
        if text.trim().is_empty() {
            continue;
        }
        match line::parse_line(text, number) {
            Ok(Line::Category(name)) => current = Some(engine.push_category(&name)),
            Ok(Line::Element(record)) => match current {
                Some(category) => restore_element(&mut engine, category, record, number, &mut diagnostics),
                None => report(
                    &mut diagnostics,
                    EngineError::malformed(number, "no category specified"),
                ),
            },
            Err(err) => report(&mut diagnostics, err),
        }
    }

    debug!(
        categories = engine.categories().len(),
        elements = engine.element_count(),
        recipes = engine.recipe_count(),
        skipped = diagnostics.len(),
        "loaded save"
    );
    Ok(LoadReport {
        engine,
        diagnostics,
    })
}

/// Read an engine from save text, falling back to the configured seed when
/// the text has no sentinel.
pub fn load_or_seed(text: &str, config: &EngineConfig) -> LoadReport {
    match load(text) {
        Ok(report) => report,
        Err(err) => {
            warn!(%err, seed = ?config.seed, "no previous save found, starting from the seed");
            LoadReport {
                engine: KnowledgeEngine::seeded(config.seed),
                diagnostics: vec![err],
            }
        }
    }
}

fn restore_element(
    engine: &mut KnowledgeEngine,
    category: CategoryId,
    mut record: ElementRecord,
    number: usize,
    diagnostics: &mut Vec<EngineError>,
) {
    if engine.element(record.id).is_some() {
        // Duplicate ids are dropped silently, like a duplicate insert.
        debug!(line = number, id = %record.id, "skipping duplicate element id");
        return;
    }

    let claimed: Vec<_> = record
        .recipes
        .iter()
        .filter(|(key, _)| engine.is_bound(key))
        .map(|(key, _)| key)
        .collect();
    for key in claimed {
        record.recipes.remove(&key);
        report(
            diagnostics,
            EngineError::malformed(number, format!("recipe {key} already makes another element")),
        );
    }

    let id: ElementId = record.id;
    let known = record.marker == Marker::Known;
    let keys: Vec<_> = record.recipes.iter().map(|(key, _)| key).collect();
    let element = record.into_element();
    if let Err(err) = engine.insert_element(category, element, known) {
        report(diagnostics, err);
        return;
    }
    for key in keys {
        engine.bind_recipe(key, id);
    }
}

fn report(diagnostics: &mut Vec<EngineError>, err: EngineError) {
    warn!(%err, "skipping unreadable save data");
    diagnostics.push(err);
}

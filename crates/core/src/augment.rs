//! Knowledge-augmented translation
//!
//! Runs the dictionary rewrite first, then walks the words of the original
//! query and wraps any keyword ability or card type the tables missed.

use serde::{Deserialize, Serialize};

use crate::knowledge::{Category, KnowledgeBase, KnowledgeSource, SearchResult};
use crate::mappings::MappingTables;
use crate::rewrite::{replace_word, RewriteEngine};

/// Rewrites `query` with `engine`, then augments it with `knowledge`.
///
/// For each whitespace-separated word of the lower-cased input: a keyword
/// ability becomes `o:"<word>"` and a card type becomes `t:<word>`, unless
/// the query already contains that exact fragment. Keyword wins when a word
/// is both.
pub fn translate_with_knowledge<K>(engine: &RewriteEngine, query: &str, knowledge: &K) -> String
where
    K: KnowledgeSource + ?Sized,
{
    let mut translated = engine.translate(query);
    let lowered = query.to_lowercase();

    for word in lowered.split_whitespace() {
        let result = knowledge.classify(word);
        if !result.found {
            continue;
        }

        if result.has_category(Category::KeywordAbility) {
            let fragment = format!("o:\"{}\"", word);
            if !translated.contains(&fragment) {
                translated = replace_word(&translated, word, &fragment);
            }
        } else if result.has_category(Category::CardType) {
            let fragment = format!("t:{}", word);
            if !translated.contains(&fragment) {
                translated = replace_word(&translated, word, &fragment);
            }
        }
    }

    translated
}

/// A translated query together with the hints computed from the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub original: String,
    pub translated: String,
    /// Related mapping entries, `"phrase" → fragment`.
    pub suggestions: Vec<String>,
    /// Knowledge terms the raw input matches.
    pub related_terms: Vec<SearchResult>,
}

impl Translation {
    /// Whether the rewrite did more than lower-case the input.
    pub fn changed(&self) -> bool {
        self.translated != self.original.to_lowercase()
    }
}

/// Full translation report: augmented rewrite, mapping suggestions and
/// related knowledge terms.
pub fn translate_query_report(
    engine: &RewriteEngine,
    tables: &MappingTables,
    knowledge: &KnowledgeBase,
    query: &str,
) -> Translation {
    let translated = translate_with_knowledge(engine, query, knowledge);
    log::debug!("Translated '{}' to '{}'", query, translated);

    Translation {
        original: query.to_string(),
        translated,
        suggestions: tables.suggest(query),
        related_terms: knowledge.search_terms(query),
    }
}

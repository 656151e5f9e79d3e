//! Dictionary-driven query rewriting
//!
//! [`RewriteEngine`] compiles every mapping phrase into a case-insensitive,
//! word-boundary anchored literal pattern once, then rewrites input strings
//! category by category.
//!
//! In [`RewriteMode::Sequential`] every rule runs over the string produced by
//! the previous rule, so a fragment inserted early can be matched again by a
//! later phrase (`"removal"` inserts `o:"exile"`, which the later `"exile"`
//! rule rewrites a second time). Output compatibility depends on this, so it
//! is the default. [`RewriteMode::Snapshot`] matches all rules against the
//! untouched input and splices the replacements once.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mappings::{MappingCategory, MappingTables};

/// Error building a [`RewriteEngine`] from caller-supplied tables.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Empty phrase in {0} mappings")]
    EmptyPhrase(MappingCategory),
    #[error("Invalid pattern for phrase '{phrase}': {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },
}

/// How rules see text inserted by earlier rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    /// Each rule rewrites the accumulated output of the previous rules.
    #[default]
    Sequential,
    /// Rules match the original input only; overlapping matches lose to
    /// earlier rules.
    Snapshot,
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteMode::Sequential => f.write_str("sequential"),
            RewriteMode::Snapshot => f.write_str("snapshot"),
        }
    }
}

impl FromStr for RewriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(RewriteMode::Sequential),
            "snapshot" => Ok(RewriteMode::Snapshot),
            other => Err(format!(
                "Invalid rewrite mode: {}. Valid modes: sequential, snapshot",
                other
            )),
        }
    }
}

#[derive(Debug)]
struct Rule {
    category: MappingCategory,
    phrase: String,
    pattern: Regex,
    fragment: String,
}

/// Compiled, immutable rewrite rules.
#[derive(Debug)]
pub struct RewriteEngine {
    rules: Vec<Rule>,
    mode: RewriteMode,
}

/// Builds the literal, word-bounded, case-insensitive pattern for a phrase.
///
/// Boundaries are ASCII: a letter such as `é` does not count as a word
/// character, so `éflying` still matches `flying`.
pub fn phrase_pattern(phrase: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(phrase)))
        .case_insensitive(true)
        .build()
}

/// Replaces every word-bounded occurrence of `word` in `haystack`.
///
/// `word` is matched literally; `replacement` is inserted verbatim.
pub fn replace_word(haystack: &str, word: &str, replacement: &str) -> String {
    if word.is_empty() {
        return haystack.to_string();
    }

    match phrase_pattern(word) {
        Ok(pattern) => pattern
            .replace_all(haystack, NoExpand(replacement))
            .into_owned(),
        Err(e) => {
            log::debug!("Skipping replacement of '{}': {}", word, e);
            haystack.to_string()
        }
    }
}

impl RewriteEngine {
    /// Compiles `tables` into an engine.
    pub fn new(tables: &MappingTables, mode: RewriteMode) -> Result<Self, RewriteError> {
        let mut rules = Vec::with_capacity(tables.len());

        for (category, entry) in tables.iter() {
            if entry.phrase.is_empty() {
                return Err(RewriteError::EmptyPhrase(category));
            }

            let pattern = phrase_pattern(&entry.phrase).map_err(|source| RewriteError::Pattern {
                phrase: entry.phrase.clone(),
                source,
            })?;

            rules.push(Rule {
                category,
                phrase: entry.phrase.clone(),
                pattern,
                fragment: entry.fragment.clone(),
            });
        }

        Ok(Self { rules, mode })
    }

    /// Engine over the built-in tables, compiled once per process and mode.
    pub fn standard(mode: RewriteMode) -> &'static RewriteEngine {
        static SEQUENTIAL: OnceLock<RewriteEngine> = OnceLock::new();
        static SNAPSHOT: OnceLock<RewriteEngine> = OnceLock::new();

        let cell = match mode {
            RewriteMode::Sequential => &SEQUENTIAL,
            RewriteMode::Snapshot => &SNAPSHOT,
        };

        cell.get_or_init(|| {
            RewriteEngine::new(MappingTables::standard(), mode)
                .expect("built-in mapping phrases compile")
        })
    }

    pub fn mode(&self) -> RewriteMode {
        self.mode
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites a natural-language query into Scryfall syntax.
    ///
    /// The input is lower-cased once. Text no rule matches is passed
    /// through unchanged.
    pub fn translate(&self, query: &str) -> String {
        let lowered = query.to_lowercase();

        match self.mode {
            RewriteMode::Sequential => self.translate_sequential(lowered),
            RewriteMode::Snapshot => self.translate_snapshot(&lowered),
        }
    }

    fn translate_sequential(&self, mut current: String) -> String {
        for rule in &self.rules {
            if let Cow::Owned(next) = rule
                .pattern
                .replace_all(&current, NoExpand(&rule.fragment))
            {
                log::trace!("{} rule '{}' matched", rule.category, rule.phrase);
                current = next;
            }
        }

        current
    }

    fn translate_snapshot(&self, original: &str) -> String {
        let mut edits: Vec<(Range<usize>, &str)> = Vec::new();

        for rule in &self.rules {
            for found in rule.pattern.find_iter(original) {
                let span = found.range();
                let free = edits
                    .iter()
                    .all(|(claimed, _)| span.end <= claimed.start || span.start >= claimed.end);

                if free {
                    log::trace!("{} rule '{}' matched", rule.category, rule.phrase);
                    edits.push((span, rule.fragment.as_str()));
                }
            }
        }

        edits.sort_by_key(|(span, _)| span.start);

        let mut output = String::with_capacity(original.len());
        let mut cursor = 0;
        for (span, fragment) in edits {
            output.push_str(&original[cursor..span.start]);
            output.push_str(fragment);
            cursor = span.end;
        }
        output.push_str(&original[cursor..]);

        output
    }
}

/// Translates with the built-in tables in sequential mode.
pub fn translate(query: &str) -> String {
    RewriteEngine::standard(RewriteMode::Sequential).translate(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> &'static RewriteEngine {
        RewriteEngine::standard(RewriteMode::Sequential)
    }

    fn snapshot() -> &'static RewriteEngine {
        RewriteEngine::standard(RewriteMode::Snapshot)
    }

    // ============================================================================
    // Basic behaviour
    // ============================================================================

    #[test]
    fn test_translate_is_deterministic() {
        let query = "Cheap red goblins with haste";
        assert_eq!(translate(query), translate(query));
    }

    #[test]
    fn test_translate_unmatched_input_is_lowercased() {
        assert_eq!(translate("Llanowar ELVES of Yore"), "llanowar t:elf of yore");
        assert_eq!(translate("Quux Zorp"), "quux zorp");
    }

    #[test]
    fn test_translate_empty_and_whitespace() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("   "), "   ");
    }

    #[test]
    fn test_translate_big_creatures() {
        assert_eq!(
            translate("big creatures"),
            "t:creature and (pow>=4 or tou>=4)"
        );
        assert_eq!(
            translate("BIG Creatures"),
            "t:creature and (pow>=4 or tou>=4)"
        );
    }

    #[test]
    fn test_translate_cheap_blue_counterspells() {
        let translated = translate("cheap blue counterspells");
        assert_eq!(translated, r#"cmc<=2 c:u o:"counter" and o:"spell""#);

        let cost = translated.find("cmc<=2").unwrap();
        let color = translated.find("c:u").unwrap();
        let counter = translated.find(r#"o:"counter" and o:"spell""#).unwrap();
        assert!(cost < color && color < counter);
    }

    #[test]
    fn test_translate_respects_word_boundaries() {
        // "counters" must not fire inside "encounters"
        assert_eq!(translate("encounters"), "encounters");
        assert_eq!(translate("credit"), "credit");
    }

    #[test]
    fn test_translate_word_boundaries_are_ascii() {
        assert_eq!(translate("éflying"), r#"éo:"flying""#);
        assert_eq!(snapshot().translate("Éflying"), r#"éo:"flying""#);
        assert_eq!(replace_word("naïve red", "red", "c:r"), "naïve c:r");
    }

    #[test]
    fn test_translate_multiple_occurrences() {
        assert_eq!(translate("red or red"), "c:r or c:r");
    }

    #[test]
    fn test_translate_quoted_phrase_with_apostrophe() {
        assert_eq!(
            snapshot().translate("can't be blocked"),
            r#"o:"can't be blocked" or o:"unblockable""#
        );
        // The "unblockable" rule runs right after and rewrites the fragment.
        assert_eq!(
            translate("can't be blocked"),
            r#"o:"can't be blocked" or o:"o:"can't be blocked" or o:"unblockable"""#
        );
    }

    #[test]
    fn test_translate_color_and_cost_terms() {
        assert_eq!(translate("expensive azorius"), "cmc>=6 c:wu");
        assert_eq!(translate("modern legal"), "legal:modern");
    }

    // ============================================================================
    // Sequential overwrite hazard
    // ============================================================================

    #[test]
    fn test_sequential_rematches_inserted_fragment() {
        // "removal" inserts o:"exile", which the later "exile" rule rewrites.
        assert_eq!(
            translate("removal"),
            r#"o:"destroy" or o:"o:"exile" or o:"exiled"" or o:"return" or o:"bounce""#
        );
    }

    #[test]
    fn test_translate_is_not_idempotent() {
        let once = translate("flying");
        assert_eq!(once, r#"o:"flying""#);
        assert_eq!(translate(&once), r#"o:"o:"flying"""#);
    }

    #[test]
    fn test_category_order_is_load_bearing() {
        let text_then_color = MappingTables::new()
            .with_table(MappingCategory::Text, [("foo", "bar")])
            .with_table(MappingCategory::Color, [("bar", "baz")]);
        let engine = RewriteEngine::new(&text_then_color, RewriteMode::Sequential).unwrap();
        assert_eq!(engine.translate("foo"), "baz");

        let color_then_text = MappingTables::new()
            .with_table(MappingCategory::Color, [("foo", "bar")])
            .with_table(MappingCategory::Text, [("bar", "baz")]);
        let engine = RewriteEngine::new(&color_then_text, RewriteMode::Sequential).unwrap();
        assert_eq!(engine.translate("foo"), "bar");
    }

    #[test]
    fn test_non_overlapping_fragments_ignore_category_order() {
        let tables = MappingTables::new()
            .with_table(MappingCategory::Color, [("blue", "c:u")])
            .with_table(MappingCategory::Cost, [("cheap", "cmc<=2")]);
        let swapped = MappingTables::new()
            .with_table(MappingCategory::Color, [("cheap", "cmc<=2")])
            .with_table(MappingCategory::Cost, [("blue", "c:u")]);

        let a = RewriteEngine::new(&tables, RewriteMode::Sequential).unwrap();
        let b = RewriteEngine::new(&swapped, RewriteMode::Sequential).unwrap();
        assert_eq!(a.translate("cheap blue"), b.translate("cheap blue"));
    }

    // ============================================================================
    // Snapshot mode
    // ============================================================================

    #[test]
    fn test_snapshot_does_not_rematch_inserted_text() {
        assert_eq!(
            snapshot().translate("removal"),
            r#"o:"destroy" or o:"exile" or o:"return" or o:"bounce""#
        );
        assert_eq!(snapshot().translate(r#"o:"flying""#), r#"o:"o:"flying"""#);
    }

    #[test]
    fn test_snapshot_earlier_rule_claims_overlapping_span() {
        assert_eq!(
            snapshot().translate("big creatures"),
            "t:creature and (pow>=4 or tou>=4)"
        );
    }

    #[test]
    fn test_snapshot_matches_sequential_without_overlap() {
        let query = "cheap blue counterspells";
        assert_eq!(snapshot().translate(query), sequential().translate(query));
    }

    // ============================================================================
    // Literal handling
    // ============================================================================

    #[test]
    fn test_phrase_metacharacters_are_literal() {
        let tables = MappingTables::new().with_table(MappingCategory::Text, [("a.b", "X")]);
        let engine = RewriteEngine::new(&tables, RewriteMode::Sequential).unwrap();
        assert_eq!(engine.translate("a.b axb"), "X axb");
    }

    #[test]
    fn test_fragment_dollar_is_not_expanded() {
        let tables = MappingTables::new().with_table(MappingCategory::Cost, [("pricey", "usd>$1")]);
        let engine = RewriteEngine::new(&tables, RewriteMode::Sequential).unwrap();
        assert_eq!(engine.translate("pricey"), "usd>$1");
    }

    #[test]
    fn test_empty_phrase_is_rejected() {
        let tables = MappingTables::new().with_table(MappingCategory::Format, [("", "legal:x")]);
        let err = RewriteEngine::new(&tables, RewriteMode::Sequential).unwrap_err();
        assert!(matches!(err, RewriteError::EmptyPhrase(MappingCategory::Format)));
    }

    #[test]
    fn test_replace_word() {
        assert_eq!(
            replace_word("flying and flyingish", "flying", "o:\"flying\""),
            "o:\"flying\" and flyingish"
        );
        assert_eq!(replace_word("a (b", "(b", "c"), "a (b");
        assert_eq!(replace_word("abc", "", "x"), "abc");
    }

    #[test]
    fn test_rewrite_mode_from_str() {
        assert_eq!("Snapshot".parse::<RewriteMode>(), Ok(RewriteMode::Snapshot));
        assert!("frozen".parse::<RewriteMode>().is_err());
    }

    #[test]
    fn test_standard_engine_has_every_rule() {
        assert_eq!(sequential().len(), MappingTables::standard().len());
        assert_eq!(sequential().mode(), RewriteMode::Sequential);
    }
}

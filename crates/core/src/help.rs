//! Markdown reports for knowledge lookups and translation help.
//!
//! Everything here is pure string building so the CLI and the MCP server
//! render identical text.

use std::fmt::Write;

use crate::colors::color_code;
use crate::knowledge::{Category, KnowledgeResult, SearchResult};
use crate::mappings::{MappingCategory, MappingTables};

const TEXT_HIGHLIGHTS: &[&str] = &[
    "enters the battlefield",
    "leaves the battlefield",
    "sacrifice",
    "destroy",
    "draw cards",
    "flying",
    "trample",
    "deathtouch",
    "lifelink",
    "counterspell",
    "token generation",
];

const COLOR_HIGHLIGHTS: &[&str] = &[
    "white",
    "blue",
    "black",
    "red",
    "green",
    "multicolor",
    "azorius",
    "dimir",
    "rakdos",
    "gruul",
    "selesnya",
];

const TYPE_HIGHLIGHTS: &[&str] = &[
    "creatures",
    "instants",
    "sorceries",
    "artifacts",
    "enchantments",
    "planeswalkers",
    "angels",
    "demons",
    "dragons",
    "elves",
    "equipment",
];

const FORMAT_HIGHLIGHTS: &[&str] = &[
    "standard legal",
    "modern legal",
    "legacy legal",
    "commander legal",
    "banned in standard",
    "banned in modern",
];

const COST_HIGHLIGHTS: &[&str] = &[
    "cheap",
    "expensive",
    "budget",
    "expensive cards",
    "under a dollar",
    "one mana",
    "three mana",
];

fn highlights(category: MappingCategory) -> &'static [&'static str] {
    match category {
        MappingCategory::Text => TEXT_HIGHLIGHTS,
        MappingCategory::Color => COLOR_HIGHLIGHTS,
        MappingCategory::Type => TYPE_HIGHLIGHTS,
        MappingCategory::Format => FORMAT_HIGHLIGHTS,
        MappingCategory::Cost => COST_HIGHLIGHTS,
    }
}

/// Bulleted list under a bold heading, followed by a blank line.
///
/// Returns an empty string for an empty list.
pub fn format_suggestions(heading: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let mut out = format!("**{}**\n", heading);
    for suggestion in suggestions {
        let _ = writeln!(out, "• {}", suggestion);
    }
    out.push('\n');
    out
}

/// Bulleted `term (category)` list, at most `limit` entries.
pub fn format_terms(heading: &str, terms: &[SearchResult], limit: usize) -> String {
    if terms.is_empty() {
        return String::new();
    }

    let mut out = format!("**{}**\n", heading);
    for result in terms.iter().take(limit) {
        let _ = writeln!(out, "• **{}** ({})", result.term, result.category);
    }
    out.push('\n');
    out
}

/// Inputs of a knowledge lookup report.
#[derive(Debug, Clone)]
pub struct KnowledgeLookup<'a> {
    pub query: &'a str,
    pub result: &'a KnowledgeResult,
    /// Plain table rewrite of the query.
    pub translated: &'a str,
    /// Fuzzy search hits, `None` when similar-term search is disabled.
    pub similar: Option<&'a [SearchResult]>,
    /// Names listed when nothing matched.
    pub available_categories: &'a [&'a str],
}

/// Renders the `mtg_knowledge_lookup` report.
pub fn format_knowledge_lookup(lookup: &KnowledgeLookup<'_>) -> String {
    let query = lookup.query;
    let mut out = format!("# MTG Knowledge: \"{}\"\n\n", query);

    if lookup.result.found {
        for info in &lookup.result.categories {
            let _ = write!(out, "## {}\n\n{}\n\n", info.category, info.information);
            if !info.examples.is_empty() {
                let _ = write!(out, "**Examples:** {}\n\n", info.examples.join(", "));
            }
        }

        out.push_str("---\n\n**Related Scryfall Searches:**\n");
        if lookup.translated.to_lowercase() != query.to_lowercase() {
            let _ = writeln!(
                out,
                "• **Natural Language:** \"{}\" → `{}`",
                query, lookup.translated
            );
        }
        if lookup.result.has_category(Category::KeywordAbility) {
            let _ = writeln!(out, "• **Cards with this ability:** `o:\"{}\"`", query);
        }
        if lookup.result.has_category(Category::CardType) {
            let _ = writeln!(out, "• **All {}s:** `t:{}`", query, query);
        }
        if lookup.result.has_category(Category::ColorIdentity) {
            if let Some(code) = color_code(query) {
                let _ = writeln!(out, "• **{} cards:** `c:{}`", query, code);
            }
        }

        return out;
    }

    let _ = write!(out, "**No direct match found for \"{}\"**\n\n", query);

    if let Some(similar) = lookup.similar.filter(|s| !s.is_empty()) {
        out.push_str(&format_terms("Similar terms found:", similar, similar.len()));
        out.push_str("Try using one of these terms with the `mtg_knowledge_lookup` tool.\n\n");
    }

    out.push_str(&format_suggestions("Did you mean:", &lookup.result.suggestions));

    out.push_str("**Available categories:**\n");
    for category in lookup.available_categories {
        let _ = writeln!(out, "• {}", category);
    }

    out
}

/// The "your query" block of the translation help.
#[derive(Debug, Clone)]
pub struct QueryHelp<'a> {
    pub query: &'a str,
    pub translated: &'a str,
    pub suggestions: &'a [String],
}

/// Renders the translation help page.
///
/// `topic` is `all` or one of the mapping topics (`text`, `colors`, `types`,
/// `formats`, `costs`). An unknown topic shows no mapping section.
pub fn format_translation_help(
    tables: &MappingTables,
    query: Option<&QueryHelp<'_>>,
    topic: &str,
) -> String {
    let mut out = String::from("# Natural Language Translation Help\n\n");

    if let Some(help) = query {
        let _ = write!(
            out,
            "**Your Query:** \"{}\"\n**Translated To:** \"{}\"\n\n",
            help.query, help.translated
        );
        out.push_str(&format_suggestions("Related Mappings:", help.suggestions));
    }

    let categories: Vec<MappingCategory> = if topic.eq_ignore_ascii_case("all") {
        MappingCategory::ALL.to_vec()
    } else {
        topic.parse::<MappingCategory>().into_iter().collect()
    };

    for category in categories {
        let _ = write!(out, "## {}\n\n", category.title());
        for phrase in highlights(category) {
            if let Some(fragment) = tables.lookup(category, phrase) {
                let _ = writeln!(out, "• **\"{}\"** → `{}`", phrase, fragment);
            }
        }
        out.push('\n');
    }

    out.push_str("---\n\n**Tips:**\n");
    out.push_str("• Use `scryfall_natural_search` for automatic translation\n");
    out.push_str("• Combine terms: \"red creatures with flying\" → `c:r t:creature o:flying`\n");
    out.push_str("• Use `show_translation: true` to see how your query was translated\n");
    out.push_str(
        "• The regular `scryfall_search_cards` tool has natural language fallback enabled by default\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::rewrite::translate;

    fn lookup_text(query: &str, search_similar: bool) -> String {
        let kb = KnowledgeBase::standard();
        let result = kb.classify(query);
        let translated = translate(query);
        let similar = kb.search_terms(query);

        format_knowledge_lookup(&KnowledgeLookup {
            query,
            result: &result,
            translated: &translated,
            similar: search_similar.then_some(similar.as_slice()),
            available_categories: kb.available_categories(),
        })
    }

    // ============================================================================
    // Knowledge lookup
    // ============================================================================

    #[test]
    fn test_lookup_keyword() {
        let text = lookup_text("flying", true);
        assert!(text.starts_with("# MTG Knowledge: \"flying\"\n\n## Keyword Ability\n\n"));
        assert!(text.contains("**Examples:** Serra Angel, Delver of Secrets, Dragon Hatchling"));
        assert!(text.contains("• **Natural Language:** \"flying\" → `o:\"flying\"`"));
        assert!(text.contains("• **Cards with this ability:** `o:\"flying\"`"));
        assert!(!text.contains("Available categories"));
    }

    #[test]
    fn test_lookup_card_type() {
        let text = lookup_text("artifact", true);
        assert!(text.contains("• **All artifacts:** `t:artifact`"));
        assert!(!text.contains("Natural Language"));
    }

    #[test]
    fn test_lookup_color_code() {
        let text = lookup_text("azorius", true);
        assert!(text.contains("• **azorius cards:** `c:wu`"));
        assert!(text.contains("## Color Identity"));
    }

    #[test]
    fn test_lookup_not_found() {
        let text = lookup_text("fly", true);
        assert!(text.contains("**No direct match found for \"fly\"**"));
        assert!(text.contains("**Similar terms found:**\n• **flying** (Keyword Ability)\n"));
        assert!(text.contains("**Did you mean:**\n• flying\n"));
        assert!(text.ends_with("• Game Actions\n• Common Terms\n"));
    }

    #[test]
    fn test_lookup_without_similar_search() {
        let text = lookup_text("fly", false);
        assert!(!text.contains("Similar terms found"));
        assert!(text.contains("Did you mean"));
    }

    // ============================================================================
    // Translation help
    // ============================================================================

    #[test]
    fn test_translation_help_all_topics() {
        let text = format_translation_help(MappingTables::standard(), None, "all");
        for category in MappingCategory::ALL {
            assert!(text.contains(&format!("## {}", category.title())));
        }
        assert!(text.contains("• **\"cheap\"** → `cmc<=2`"));
        assert!(text.contains("**Tips:**"));
        assert!(!text.contains("Your Query"));
    }

    #[test]
    fn test_translation_help_single_topic() {
        let text = format_translation_help(MappingTables::standard(), None, "colors");
        assert!(text.contains("## Color Mappings"));
        assert!(!text.contains("## Type Mappings"));
        assert!(text.contains("• **\"azorius\"** → `c:wu`"));
    }

    #[test]
    fn test_translation_help_unknown_topic() {
        let text = format_translation_help(MappingTables::standard(), None, "planes");
        assert!(!text.contains("## "));
        assert!(text.contains("**Tips:**"));
    }

    #[test]
    fn test_translation_help_with_query() {
        let suggestions = MappingTables::standard().suggest("cheap dragons");
        let help = QueryHelp {
            query: "cheap dragons",
            translated: "cmc<=2 t:dragon",
            suggestions: &suggestions,
        };
        let text = format_translation_help(MappingTables::standard(), Some(&help), "costs");
        assert!(text.contains("**Your Query:** \"cheap dragons\"\n**Translated To:** \"cmc<=2 t:dragon\""));
        assert!(text.contains("**Related Mappings:**\n"));
    }

    #[test]
    fn test_highlights_exist_in_tables() {
        let tables = MappingTables::standard();
        for category in MappingCategory::ALL {
            for phrase in highlights(category) {
                assert!(tables.lookup(category, phrase).is_some(), "{}", phrase);
            }
        }
    }

    // ============================================================================
    // Lists
    // ============================================================================

    #[test]
    fn test_format_suggestions() {
        assert_eq!(format_suggestions("Heading", &[]), "");
        assert_eq!(
            format_suggestions("Heading", &["a".to_string(), "b".to_string()]),
            "**Heading**\n• a\n• b\n\n"
        );
    }

    #[test]
    fn test_format_terms_limit() {
        let terms = KnowledgeBase::standard().search_terms("st");
        let text = format_terms("Terms", &terms, 3);
        // heading, three entries, trailing blank line
        assert_eq!(text.lines().count(), 5);
    }
}

//! Magic: The Gathering knowledge base
//!
//! Static domain data (card types, keyword abilities, color identities,
//! formats, deck archetypes and a few auxiliary glossaries) with a classifier
//! that tells which categories a term belongs to and a fuzzy term search.
//!
//! # Example
//!
//! ```rust
//! use mtgquery_core::knowledge::{Category, KnowledgeBase};
//!
//! let kb = KnowledgeBase::standard();
//! let result = kb.classify("Flying");
//! assert!(result.found);
//! assert!(result.has_category(Category::KeywordAbility));
//! ```

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Maximum number of "did you mean" suggestions for an unknown term.
pub const SUGGESTION_LIMIT: usize = 5;

/// Maximum number of results returned by [`KnowledgeBase::search_terms`].
pub const SEARCH_LIMIT: usize = 10;

/// Per-group cap applied to the larger tables when building suggestions.
const SUGGESTION_SAMPLE_SIZE: usize = 10;

const AVAILABLE_CATEGORIES: &[&str] = &[
    "Card Types",
    "Keyword Abilities",
    "Color Identities",
    "Formats",
    "Deck Archetypes",
    "Game Zones",
    "Game Actions",
    "Common Terms",
];

/// Knowledge category a term can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Card Type")]
    CardType,
    #[serde(rename = "Keyword Ability")]
    KeywordAbility,
    #[serde(rename = "Color Identity")]
    ColorIdentity,
    #[serde(rename = "Format")]
    Format,
    #[serde(rename = "Deck Archetype")]
    DeckArchetype,
}

impl Category {
    /// Classification order.
    pub const ALL: [Category; 5] = [
        Category::CardType,
        Category::KeywordAbility,
        Category::ColorIdentity,
        Category::Format,
        Category::DeckArchetype,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::CardType => "Card Type",
            Category::KeywordAbility => "Keyword Ability",
            Category::ColorIdentity => "Color Identity",
            Category::Format => "Format",
            Category::DeckArchetype => "Deck Archetype",
        }
    }

    /// Term groups whose union makes up this category.
    pub fn groups(&self) -> &'static [TermGroup] {
        match self {
            Category::CardType => &[TermGroup::CardTypes],
            Category::KeywordAbility => &[TermGroup::EvergreenKeywords, TermGroup::OtherKeywords],
            Category::ColorIdentity => &[
                TermGroup::Colors,
                TermGroup::Guilds,
                TermGroup::Shards,
                TermGroup::Wedges,
            ],
            Category::Format => &[
                TermGroup::ConstructedFormats,
                TermGroup::LimitedFormats,
                TermGroup::CasualFormats,
            ],
            Category::DeckArchetype => &[TermGroup::DeckArchetypes],
        }
    }

    /// Text used for a known term that has no bespoke description.
    pub fn fallback_information(&self) -> &'static str {
        match self {
            Category::CardType => "No information available.",
            Category::KeywordAbility => "Keyword ability with specific rules interactions.",
            Category::ColorIdentity => "Color combination with specific mechanical identity.",
            Category::Format => "Magic: The Gathering competitive format.",
            Category::DeckArchetype => "Magic: The Gathering deck archetype.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named list of terms inside the knowledge tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermGroup {
    CardTypes,
    Supertypes,
    EvergreenKeywords,
    OtherKeywords,
    Colors,
    Guilds,
    Shards,
    Wedges,
    ConstructedFormats,
    LimitedFormats,
    CasualFormats,
    DeckArchetypes,
    Zones,
    Actions,
    CardAdvantage,
    Slang,
}

impl TermGroup {
    pub const ALL: [TermGroup; 16] = [
        TermGroup::CardTypes,
        TermGroup::Supertypes,
        TermGroup::EvergreenKeywords,
        TermGroup::OtherKeywords,
        TermGroup::Colors,
        TermGroup::Guilds,
        TermGroup::Shards,
        TermGroup::Wedges,
        TermGroup::ConstructedFormats,
        TermGroup::LimitedFormats,
        TermGroup::CasualFormats,
        TermGroup::DeckArchetypes,
        TermGroup::Zones,
        TermGroup::Actions,
        TermGroup::CardAdvantage,
        TermGroup::Slang,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TermGroup::CardTypes => "card-types",
            TermGroup::Supertypes => "supertypes",
            TermGroup::EvergreenKeywords => "evergreen-keywords",
            TermGroup::OtherKeywords => "other-keywords",
            TermGroup::Colors => "colors",
            TermGroup::Guilds => "guilds",
            TermGroup::Shards => "shards",
            TermGroup::Wedges => "wedges",
            TermGroup::ConstructedFormats => "constructed-formats",
            TermGroup::LimitedFormats => "limited-formats",
            TermGroup::CasualFormats => "casual-formats",
            TermGroup::DeckArchetypes => "deck-archetypes",
            TermGroup::Zones => "zones",
            TermGroup::Actions => "actions",
            TermGroup::CardAdvantage => "card-advantage",
            TermGroup::Slang => "slang",
        }
    }

    /// The classifier category this group feeds, if any.
    pub fn category(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.groups().contains(self))
    }
}

impl fmt::Display for TermGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TermGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        TermGroup::ALL
            .into_iter()
            .find(|group| group.name() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = TermGroup::ALL.iter().map(|g| g.name()).collect();
                format!("Unknown term group: {}. Valid groups: {}", s, valid.join(", "))
            })
    }
}

/// Description and examples attached to one `(category, term)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermDetails {
    pub information: Option<String>,
    pub examples: Vec<String>,
}

/// Raw knowledge data: ordered term groups plus per-term details.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTables {
    groups: HashMap<TermGroup, Vec<String>>,
    details: HashMap<(Category, String), TermDetails>,
}

impl KnowledgeTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends terms to a group. Terms are lower-cased and a term already in
    /// the group is skipped.
    pub fn with_group<I, S>(mut self, group: TermGroup, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.groups.entry(group).or_default();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if !list.contains(&term) {
                list.push(term);
            }
        }
        self
    }

    pub fn set_information(&mut self, category: Category, term: &str, information: &str) {
        self.details
            .entry((category, term.to_lowercase()))
            .or_default()
            .information = Some(information.to_string());
    }

    pub fn set_examples<I, S>(&mut self, category: Category, term: &str, examples: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details
            .entry((category, term.to_lowercase()))
            .or_default()
            .examples = examples.into_iter().map(Into::into).collect();
    }

    pub fn group(&self, group: TermGroup) -> &[String] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn details(&self, category: Category, term: &str) -> Option<&TermDetails> {
        self.details.get(&(category, term.to_string()))
    }
}

/// One category a term matched, with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub information: String,
    pub examples: Vec<String>,
}

/// Outcome of classifying a single term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeResult {
    pub found: bool,
    pub categories: Vec<CategoryInfo>,
    pub suggestions: Vec<String>,
}

impl KnowledgeResult {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.iter().any(|info| info.category == category)
    }
}

/// A fuzzy search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub term: String,
    pub category: Category,
    pub relevance: u8,
}

/// Match strength of `pattern` against `term`: 100 exact, 80 prefix,
/// 60 substring, 0 otherwise.
pub fn relevance(term: &str, pattern: &str) -> u8 {
    if term == pattern {
        100
    } else if term.starts_with(pattern) {
        80
    } else if term.contains(pattern) {
        60
    } else {
        0
    }
}

/// Anything that can classify a single term.
pub trait KnowledgeSource {
    fn classify(&self, term: &str) -> KnowledgeResult;
}

/// Read-only classifier over a set of [`KnowledgeTables`].
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    tables: KnowledgeTables,
}

impl KnowledgeBase {
    pub fn new(tables: KnowledgeTables) -> Self {
        Self { tables }
    }

    /// Knowledge base over the built-in tables, built once per process.
    pub fn standard() -> &'static KnowledgeBase {
        static KNOWLEDGE: OnceLock<KnowledgeBase> = OnceLock::new();
        KNOWLEDGE.get_or_init(|| KnowledgeBase::new(KnowledgeTables::standard()))
    }

    pub fn tables(&self) -> &KnowledgeTables {
        &self.tables
    }

    /// Terms of one group, in table order.
    pub fn terms(&self, group: TermGroup) -> &[String] {
        self.tables.group(group)
    }

    /// Display names of every knowledge area.
    pub fn available_categories(&self) -> &'static [&'static str] {
        AVAILABLE_CATEGORIES
    }

    fn belongs_to(&self, category: Category, term: &str) -> bool {
        category
            .groups()
            .iter()
            .any(|group| self.tables.group(*group).iter().any(|t| t == term))
    }

    fn describe(&self, category: Category, term: &str) -> CategoryInfo {
        let details = self.tables.details(category, term);

        CategoryInfo {
            category,
            information: details
                .and_then(|d| d.information.clone())
                .unwrap_or_else(|| category.fallback_information().to_string()),
            examples: details.map(|d| d.examples.clone()).unwrap_or_default(),
        }
    }

    /// Classifies a term against every category.
    ///
    /// All matching categories are reported in classification order. When
    /// nothing matches, `suggestions` holds up to [`SUGGESTION_LIMIT`] related
    /// terms.
    pub fn classify(&self, term: &str) -> KnowledgeResult {
        let term = term.to_lowercase();

        let categories: Vec<CategoryInfo> = Category::ALL
            .into_iter()
            .filter(|category| self.belongs_to(*category, &term))
            .map(|category| self.describe(category, &term))
            .collect();

        let found = !categories.is_empty();
        let suggestions = if found {
            Vec::new()
        } else {
            self.suggestions(&term)
        };

        KnowledgeResult {
            found,
            categories,
            suggestions,
        }
    }

    /// Plain containment filter over a bounded sample of the tables.
    fn suggestions(&self, term: &str) -> Vec<String> {
        let sample: [(TermGroup, Option<usize>); 6] = [
            (TermGroup::CardTypes, None),
            (TermGroup::EvergreenKeywords, None),
            (TermGroup::OtherKeywords, Some(SUGGESTION_SAMPLE_SIZE)),
            (TermGroup::Colors, None),
            (TermGroup::Guilds, None),
            (TermGroup::DeckArchetypes, Some(SUGGESTION_SAMPLE_SIZE)),
        ];

        sample
            .into_iter()
            .flat_map(|(group, cap)| {
                let terms = self.tables.group(group);
                terms[..cap.unwrap_or(terms.len()).min(terms.len())].iter()
            })
            .filter(|candidate| candidate.contains(term) || term.contains(candidate.as_str()))
            .take(SUGGESTION_LIMIT)
            .cloned()
            .collect()
    }

    /// Finds terms containing `pattern`, best matches first.
    ///
    /// Scans card types, keywords and single/guild colors. Ties keep scan
    /// order. At most [`SEARCH_LIMIT`] results.
    pub fn search_terms(&self, pattern: &str) -> Vec<SearchResult> {
        let pattern = pattern.to_lowercase();
        let scan = [
            (TermGroup::CardTypes, Category::CardType),
            (TermGroup::EvergreenKeywords, Category::KeywordAbility),
            (TermGroup::OtherKeywords, Category::KeywordAbility),
            (TermGroup::Colors, Category::ColorIdentity),
            (TermGroup::Guilds, Category::ColorIdentity),
        ];

        let mut results: Vec<SearchResult> = scan
            .into_iter()
            .flat_map(|(group, category)| {
                self.tables
                    .group(group)
                    .iter()
                    .map(move |term| (term, category))
            })
            .filter(|(term, _)| term.contains(pattern.as_str()))
            .map(|(term, category)| SearchResult {
                term: term.clone(),
                category,
                relevance: relevance(term, &pattern),
            })
            .collect();

        // sort_by is stable, so equal scores keep scan order
        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        results.truncate(SEARCH_LIMIT);
        results
    }
}

impl KnowledgeSource for KnowledgeBase {
    fn classify(&self, term: &str) -> KnowledgeResult {
        KnowledgeBase::classify(self, term)
    }
}

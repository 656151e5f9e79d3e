//! Natural-language to Scryfall mapping tables
//!
//! Five ordered tables translate everyday phrases ("big creatures", "cheap",
//! "modern legal") into Scryfall query fragments. Insertion order inside a
//! table and the declaration order of [`MappingCategory`] are both significant:
//! the rewrite engine applies rules in exactly this order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Maximum number of entries returned by [`MappingTables::suggest`].
pub const SUGGESTION_LIMIT: usize = 5;

const TEXT_MAPPINGS: &[(&str, &str)] = &[
    // Enters the battlefield
    (
        "enters the battlefield",
        r#"o:"enters the battlefield" or o:"enters tapped" or o:"when ~ enters""#,
    ),
    ("etb", r#"o:"enters the battlefield" or o:"when ~ enters""#),
    ("comes into play", r#"o:"enters the battlefield""#),
    ("enters tapped", r#"o:"enters tapped""#),
    // Leaves the battlefield
    (
        "leaves the battlefield",
        r#"o:"leaves the battlefield" or o:"when ~ leaves" or o:"dies""#,
    ),
    ("ltb", r#"o:"leaves the battlefield" or o:"when ~ leaves""#),
    ("dies", r#"o:"dies" or o:"when ~ dies""#),
    ("is put into a graveyard", r#"o:"is put into a graveyard""#),
    // Sacrifice
    ("sacrifice", r#"o:"sacrifice" or o:"sac a" or o:"sac an""#),
    ("sac", r#"o:"sacrifice" or o:"sac""#),
    ("sacrificial", r#"o:"sacrifice""#),
    // Destroy
    ("destroy", r#"o:"destroy" or o:"destroys""#),
    (
        "removal",
        r#"o:"destroy" or o:"exile" or o:"return" or o:"bounce""#,
    ),
    // Exile
    ("exile", r#"o:"exile" or o:"exiled""#),
    ("remove from the game", r#"o:"exile""#),
    ("banish", r#"o:"exile""#),
    // Draw
    ("draw cards", r#"o:"draw" and (o:"card" or o:"cards")"#),
    ("card draw", r#"o:"draw" and (o:"card" or o:"cards")"#),
    ("draw a card", r#"o:"draw a card""#),
    ("draws cards", r#"o:"draw" and o:"card""#),
    // Discard
    ("discard", r#"o:"discard""#),
    ("discards", r#"o:"discard""#),
    (
        "mill",
        r#"o:"mill" or o:"put" and o:"library" and o:"graveyard""#,
    ),
    // Combat
    (
        "can't be blocked",
        r#"o:"can't be blocked" or o:"unblockable""#,
    ),
    ("unblockable", r#"o:"can't be blocked" or o:"unblockable""#),
    ("menace", r#"o:"menace""#),
    ("trample", r#"o:"trample""#),
    ("flying", r#"o:"flying""#),
    ("first strike", r#"o:"first strike""#),
    ("double strike", r#"o:"double strike""#),
    ("deathtouch", r#"o:"deathtouch""#),
    ("lifelink", r#"o:"lifelink""#),
    ("vigilance", r#"o:"vigilance""#),
    ("haste", r#"o:"haste""#),
    ("reach", r#"o:"reach""#),
    ("defender", r#"o:"defender""#),
    // Protection
    ("protection", r#"o:"protection""#),
    ("hexproof", r#"o:"hexproof""#),
    ("shroud", r#"o:"shroud""#),
    ("ward", r#"o:"ward""#),
    ("indestructible", r#"o:"indestructible""#),
    // Mana
    ("mana dork", r#"t:creature and (o:"add" and o:"mana")"#),
    ("ramp", r#"o:"search" and o:"land" or (o:"add" and o:"mana")"#),
    ("mana acceleration", r#"o:"add" and o:"mana""#),
    ("fixes mana", r#"o:"add" and o:"any color""#),
    // Counterspells
    ("counters", r#"o:"counter" and (o:"spell" or o:"ability")"#),
    ("counterspell", r#"o:"counter" and o:"spell""#),
    ("counterspells", r#"o:"counter" and o:"spell""#),
    (
        "negate",
        r#"o:"counter" and (o:"noncreature" or o:"instant" or o:"sorcery")"#,
    ),
    // +1/+1 counters
    ("+1/+1 counters", r#"o:"+1/+1 counter""#),
    ("plus one counters", r#"o:"+1/+1 counter""#),
    ("growth counters", r#"o:"+1/+1 counter""#),
    // Tokens
    ("makes tokens", r#"o:"create" and o:"token""#),
    ("token generation", r#"o:"create" and o:"token""#),
    ("creates tokens", r#"o:"create" and o:"token""#),
    // Graveyard
    ("graveyard", r#"o:"graveyard""#),
    ("from your graveyard", r#"o:"from your graveyard""#),
    (
        "reanimation",
        r#"o:"return" and o:"graveyard" and (o:"battlefield" or o:"hand")"#,
    ),
    ("recursion", r#"o:"return" and o:"graveyard""#),
    // Cost reduction
    ("cost reduction", r#"o:"cost" and (o:"less" or o:"reduced")"#),
    ("costs less", r#"o:"costs" and o:"less""#),
    ("free spell", r#"o:"without paying" and o:"mana cost""#),
    // Tutors
    ("tutor", r#"o:"search" and o:"library""#),
    ("search", r#"o:"search" and o:"library""#),
    ("find a card", r#"o:"search" and o:"library""#),
    // Creature size and attitude
    ("big creatures", "t:creature and (pow>=4 or tou>=4)"),
    ("small creatures", "t:creature and pow<=2 and tou<=2"),
    ("efficient creatures", "t:creature"),
    (
        "aggressive creatures",
        r#"t:creature and (o:"haste" or o:"trample" or pow>=3)"#,
    ),
    // Planeswalkers
    ("plus ability", r#"t:planeswalker and o:"+""#),
    ("minus ability", r#"t:planeswalker and o:"-""#),
    (
        "ultimate",
        r#"t:planeswalker and (o:"ultimate" or o:"-" and loyalty>=6)"#,
    ),
    // Artifacts
    ("artifact synergy", r#"o:"artifact" and not t:artifact"#),
    ("artifact matters", r#"o:"artifact" and not t:artifact"#),
    ("equipment", "t:equipment"),
    ("vehicles", "t:vehicle"),
    // Lands
    ("land destruction", r#"o:"destroy" and o:"land""#),
    ("landfall", r#"o:"landfall""#),
    (
        "land ramp",
        r#"o:"search" and o:"land" and o:"battlefield""#,
    ),
    ("fetch lands", r#"t:land and o:"search" and o:"library""#),
    // Win conditions
    ("alternate win", r#"o:"you win the game""#),
    (
        "win condition",
        r#"o:"you win the game" or o:"loses the game""#,
    ),
    ("combo piece", r#"o:"infinite" or o:"win the game""#),
];

const COLOR_MAPPINGS: &[(&str, &str)] = &[
    ("white", "c:w"),
    ("blue", "c:u"),
    ("black", "c:b"),
    ("red", "c:r"),
    ("green", "c:g"),
    ("colorless", "c:c"),
    ("multicolor", "c:m"),
    ("monocolor", "c=1"),
    ("two color", "c=2"),
    ("three color", "c=3"),
    ("four color", "c=4"),
    ("five color", "c=5"),
    ("azorius", "c:wu"),
    ("dimir", "c:ub"),
    ("rakdos", "c:br"),
    ("gruul", "c:rg"),
    ("selesnya", "c:gw"),
    ("orzhov", "c:wb"),
    ("izzet", "c:ur"),
    ("golgari", "c:bg"),
    ("boros", "c:rw"),
    ("simic", "c:gu"),
];

const TYPE_MAPPINGS: &[(&str, &str)] = &[
    ("creatures", "t:creature"),
    ("instants", "t:instant"),
    ("sorceries", "t:sorcery"),
    ("artifacts", "t:artifact"),
    ("enchantments", "t:enchantment"),
    ("planeswalkers", "t:planeswalker"),
    ("lands", "t:land"),
    ("legendary", "t:legendary"),
    ("basic lands", r#"t:"basic land""#),
    ("nonbasic lands", "t:land -t:basic"),
    ("spells", "t:instant or t:sorcery"),
    ("permanents", "not t:instant and not t:sorcery"),
    ("angels", "t:angel"),
    ("demons", "t:demon"),
    ("dragons", "t:dragon"),
    ("elves", "t:elf"),
    ("goblins", "t:goblin"),
    ("humans", "t:human"),
    ("zombies", "t:zombie"),
    ("vampires", "t:vampire"),
    ("spirits", "t:spirit"),
    ("beasts", "t:beast"),
    ("equipment", "t:equipment"),
    ("auras", "t:aura"),
    ("vehicles", "t:vehicle"),
];

const FORMAT_MAPPINGS: &[(&str, &str)] = &[
    ("standard legal", "legal:standard"),
    ("modern legal", "legal:modern"),
    ("legacy legal", "legal:legacy"),
    ("vintage legal", "legal:vintage"),
    ("commander legal", "legal:commander"),
    ("pioneer legal", "legal:pioneer"),
    ("pauper legal", "legal:pauper"),
    ("historic legal", "legal:historic"),
    ("banned in standard", "banned:standard"),
    ("banned in modern", "banned:modern"),
    ("restricted in vintage", "restricted:vintage"),
];

const COST_MAPPINGS: &[(&str, &str)] = &[
    ("cheap", "cmc<=2"),
    ("low cost", "cmc<=3"),
    ("expensive", "cmc>=6"),
    ("high cost", "cmc>=5"),
    ("free", "cmc=0"),
    ("one mana", "cmc=1"),
    ("two mana", "cmc=2"),
    ("three mana", "cmc=3"),
    ("four mana", "cmc=4"),
    ("five mana", "cmc=5"),
    ("six mana", "cmc=6"),
    ("seven mana", "cmc=7"),
    ("budget", "usd<=5"),
    ("budget friendly", "usd<=10"),
    ("expensive cards", "usd>=50"),
    ("under a dollar", "usd<1"),
];

/// Concern a mapping table covers. Declaration order is application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingCategory {
    Text,
    Color,
    Type,
    Format,
    Cost,
}

impl MappingCategory {
    /// All categories in the order the rewrite engine applies them.
    pub const ALL: [MappingCategory; 5] = [
        MappingCategory::Text,
        MappingCategory::Color,
        MappingCategory::Type,
        MappingCategory::Format,
        MappingCategory::Cost,
    ];

    /// Heading used in the translation help output.
    pub fn title(&self) -> &'static str {
        match self {
            MappingCategory::Text => "Text & Ability Mappings",
            MappingCategory::Color => "Color Mappings",
            MappingCategory::Type => "Type Mappings",
            MappingCategory::Format => "Format Mappings",
            MappingCategory::Cost => "Cost & Price Mappings",
        }
    }

    /// Topic name accepted by the help surfaces (`text`, `colors`, ...).
    pub fn topic(&self) -> &'static str {
        match self {
            MappingCategory::Text => "text",
            MappingCategory::Color => "colors",
            MappingCategory::Type => "types",
            MappingCategory::Format => "formats",
            MappingCategory::Cost => "costs",
        }
    }
}

impl fmt::Display for MappingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.topic())
    }
}

impl FromStr for MappingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MappingCategory::Text),
            "color" | "colors" => Ok(MappingCategory::Color),
            "type" | "types" => Ok(MappingCategory::Type),
            "format" | "formats" => Ok(MappingCategory::Format),
            "cost" | "costs" => Ok(MappingCategory::Cost),
            other => Err(format!(
                "Unknown mapping category: {}. Valid categories: text, colors, types, formats, costs",
                other
            )),
        }
    }
}

/// A single phrase → fragment rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub phrase: String,
    pub fragment: String,
}

impl MappingEntry {
    /// Creates an entry. Phrases are stored lower-cased.
    pub fn new(phrase: impl AsRef<str>, fragment: impl Into<String>) -> Self {
        Self {
            phrase: phrase.as_ref().to_lowercase(),
            fragment: fragment.into(),
        }
    }

    /// `"phrase" → fragment`, the form shown to users as a suggestion.
    pub fn describe(&self) -> String {
        format!("\"{}\" → {}", self.phrase, self.fragment)
    }
}

/// The five ordered mapping tables.
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    text: Vec<MappingEntry>,
    color: Vec<MappingEntry>,
    card_type: Vec<MappingEntry>,
    format: Vec<MappingEntry>,
    cost: Vec<MappingEntry>,
}

impl MappingTables {
    /// Empty tables, to be filled with [`MappingTables::with_table`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tables, constructed once per process.
    pub fn standard() -> &'static MappingTables {
        static TABLES: OnceLock<MappingTables> = OnceLock::new();
        TABLES.get_or_init(|| {
            MappingTables::new()
                .with_table(MappingCategory::Text, TEXT_MAPPINGS.iter().copied())
                .with_table(MappingCategory::Color, COLOR_MAPPINGS.iter().copied())
                .with_table(MappingCategory::Type, TYPE_MAPPINGS.iter().copied())
                .with_table(MappingCategory::Format, FORMAT_MAPPINGS.iter().copied())
                .with_table(MappingCategory::Cost, COST_MAPPINGS.iter().copied())
        })
    }

    /// Appends entries to one table, preserving the given order.
    pub fn with_table<'a>(
        mut self,
        category: MappingCategory,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let table = self.table_mut(category);
        table.extend(
            entries
                .into_iter()
                .map(|(phrase, fragment)| MappingEntry::new(phrase, fragment)),
        );
        self
    }

    pub fn table(&self, category: MappingCategory) -> &[MappingEntry] {
        match category {
            MappingCategory::Text => &self.text,
            MappingCategory::Color => &self.color,
            MappingCategory::Type => &self.card_type,
            MappingCategory::Format => &self.format,
            MappingCategory::Cost => &self.cost,
        }
    }

    fn table_mut(&mut self, category: MappingCategory) -> &mut Vec<MappingEntry> {
        match category {
            MappingCategory::Text => &mut self.text,
            MappingCategory::Color => &mut self.color,
            MappingCategory::Type => &mut self.card_type,
            MappingCategory::Format => &mut self.format,
            MappingCategory::Cost => &mut self.cost,
        }
    }

    /// Every entry tagged with its category, in application order.
    pub fn iter(&self) -> impl Iterator<Item = (MappingCategory, &MappingEntry)> + '_ {
        MappingCategory::ALL
            .into_iter()
            .flat_map(move |category| self.table(category).iter().map(move |e| (category, e)))
    }

    pub fn len(&self) -> usize {
        MappingCategory::ALL
            .iter()
            .map(|category| self.table(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fragment for `phrase` in one table, if present.
    pub fn lookup(&self, category: MappingCategory, phrase: &str) -> Option<&str> {
        let phrase = phrase.to_lowercase();
        self.table(category)
            .iter()
            .find(|entry| entry.phrase == phrase)
            .map(|entry| entry.fragment.as_str())
    }

    /// All tables merged into one phrase-keyed sequence.
    ///
    /// A phrase that appears in more than one table keeps the position of its
    /// first occurrence and takes the fragment of its last one.
    pub fn merged(&self) -> Vec<(&str, &str)> {
        let mut merged: Vec<(&str, &str)> = Vec::with_capacity(self.len());
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for (_, entry) in self.iter() {
            match positions.get(entry.phrase.as_str()) {
                Some(&index) => merged[index].1 = entry.fragment.as_str(),
                None => {
                    positions.insert(entry.phrase.as_str(), merged.len());
                    merged.push((entry.phrase.as_str(), entry.fragment.as_str()));
                }
            }
        }

        merged
    }

    /// Mapping entries textually related to a raw query.
    ///
    /// Keeps every phrase the query contains, or that contains the query,
    /// formatted as `"phrase" → fragment`. At most [`SUGGESTION_LIMIT`].
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();

        self.merged()
            .into_iter()
            .filter(|(phrase, _)| query.contains(phrase) || phrase.contains(query.as_str()))
            .take(SUGGESTION_LIMIT)
            .map(|(phrase, fragment)| format!("\"{}\" → {}", phrase, fragment))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Table construction
    // ============================================================================

    #[test]
    fn test_standard_tables_keep_insertion_order() {
        let tables = MappingTables::standard();
        let text = tables.table(MappingCategory::Text);
        assert_eq!(text[0].phrase, "enters the battlefield");
        assert_eq!(text[1].phrase, "etb");

        let cost = tables.table(MappingCategory::Cost);
        assert_eq!(cost.first().map(|e| e.phrase.as_str()), Some("cheap"));
        assert_eq!(cost.last().map(|e| e.phrase.as_str()), Some("under a dollar"));
    }

    #[test]
    fn test_iter_follows_category_order() {
        let tables = MappingTables::new()
            .with_table(MappingCategory::Cost, [("cheap", "cmc<=2")])
            .with_table(MappingCategory::Text, [("flying", "o:\"flying\"")]);

        let order: Vec<MappingCategory> = tables.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![MappingCategory::Text, MappingCategory::Cost]);
    }

    #[test]
    fn test_entries_are_lowercased() {
        let tables = MappingTables::new().with_table(MappingCategory::Color, [("Azorius", "c:wu")]);
        assert_eq!(tables.table(MappingCategory::Color)[0].phrase, "azorius");
    }

    #[test]
    fn test_lookup() {
        let tables = MappingTables::standard();
        assert_eq!(tables.lookup(MappingCategory::Color, "Blue"), Some("c:u"));
        assert_eq!(tables.lookup(MappingCategory::Type, "blue"), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("colors".parse::<MappingCategory>(), Ok(MappingCategory::Color));
        assert_eq!("COST".parse::<MappingCategory>(), Ok(MappingCategory::Cost));
        assert!("mana".parse::<MappingCategory>().is_err());
    }

    // ============================================================================
    // merged
    // ============================================================================

    #[test]
    fn test_merged_keeps_first_position_for_duplicate_phrases() {
        let tables = MappingTables::standard();
        let merged = tables.merged();

        let equipment: Vec<usize> = merged
            .iter()
            .enumerate()
            .filter(|(_, (phrase, _))| *phrase == "equipment")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(equipment.len(), 1);

        let first_type = merged
            .iter()
            .position(|(phrase, _)| *phrase == "creatures")
            .unwrap();
        assert!(equipment[0] < first_type);
    }

    #[test]
    fn test_merged_later_fragment_wins() {
        let tables = MappingTables::new()
            .with_table(MappingCategory::Text, [("goblins", "o:\"goblin\""), ("x", "y")])
            .with_table(MappingCategory::Type, [("goblins", "t:goblin")]);

        let merged = tables.merged();
        assert_eq!(merged, vec![("goblins", "t:goblin"), ("x", "y")]);
    }

    // ============================================================================
    // suggest
    // ============================================================================

    #[test]
    fn test_suggest_phrase_contained_in_query() {
        let suggestions = MappingTables::standard().suggest("Cheap dragons");
        assert!(suggestions.contains(&"\"dragons\" → t:dragon".to_string()));
        assert!(suggestions.contains(&"\"cheap\" → cmc<=2".to_string()));
    }

    #[test]
    fn test_suggest_query_contained_in_phrase() {
        let suggestions = MappingTables::standard().suggest("battlefield");
        assert_eq!(
            suggestions[0],
            "\"enters the battlefield\" → o:\"enters the battlefield\" or o:\"enters tapped\" or o:\"when ~ enters\""
        );
    }

    #[test]
    fn test_suggest_caps_results() {
        // Every phrase contains the empty string.
        let suggestions = MappingTables::standard().suggest("");
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert!(suggestions[0].starts_with("\"enters the battlefield\""));
    }

    #[test]
    fn test_suggest_merged_order_is_text_first() {
        let suggestions = MappingTables::standard().suggest("mana");
        assert!(suggestions[0].starts_with("\"mana dork\""));
    }

    #[test]
    fn test_suggest_no_match() {
        assert!(MappingTables::standard().suggest("zzzz").is_empty());
    }
}

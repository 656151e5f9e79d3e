//! Scryfall API models and markdown rendering
//!
//! The shell fetches JSON from the Scryfall REST API, deserializes it into
//! these types and renders it with the `format_*` functions. Endpoint
//! builders return URL-encoded paths relative to the API base.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::help::{format_suggestions, format_terms};
use crate::knowledge::SearchResult;

/// Default number of cards returned by a natural-language search.
pub const DEFAULT_NATURAL_LIMIT: usize = 25;

/// Upper bound for a natural-language search.
pub const MAX_NATURAL_LIMIT: usize = 100;

/// Cards per page served by `/cards/search`.
pub const PAGE_SIZE: usize = 175;

/// Related knowledge terms shown above natural search results.
const RELATED_TERMS_SHOWN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub eur_etched: Option<String>,
    pub tix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUris {
    pub tcgplayer: Option<String>,
    pub cardmarket: Option<String>,
    pub cardhoarder: Option<String>,
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub image_uris: Option<ImageUris>,
}

/// Scryfall card object (the fields this tool uses).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    /// Absent on multi-faced cards, where each face has its own.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub rarity: String,
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub prices: Prices,
    pub purchase_uris: Option<PurchaseUris>,
    pub card_faces: Option<Vec<CardFace>>,
}

/// `list` object returned by `/cards/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScryfallSearchResponse {
    #[serde(default)]
    pub total_cards: u64,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    #[serde(default)]
    pub data: Vec<ScryfallCard>,
}

/// `catalog` object returned by `/cards/autocomplete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<String>,
}

/// `error` object returned with any non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryfallError {
    #[serde(default)]
    pub code: String,
    pub status: u16,
    pub details: String,
}

/// Parameters of a `/cards/search` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub unique: String,
    pub order: String,
    pub dir: String,
    pub page: u32,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            unique: "cards".to_string(),
            order: "name".to_string(),
            dir: "auto".to_string(),
            page: 1,
        }
    }

    /// Same options with a different query string.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

pub fn search_endpoint(params: &SearchParams) -> String {
    format!(
        "/cards/search?q={}&unique={}&order={}&dir={}&page={}",
        urlencoding::encode(&params.query),
        urlencoding::encode(&params.unique),
        urlencoding::encode(&params.order),
        urlencoding::encode(&params.dir),
        params.page
    )
}

/// `/cards/named` with either `fuzzy` or `exact` matching.
pub fn named_endpoint(name: &str, fuzzy: bool, set: Option<&str>) -> String {
    let mode = if fuzzy { "fuzzy" } else { "exact" };
    let mut endpoint = format!("/cards/named?{}={}", mode, urlencoding::encode(name));
    if let Some(set) = set.filter(|s| !s.is_empty()) {
        let _ = write!(endpoint, "&set={}", urlencoding::encode(set));
    }
    endpoint
}

pub fn random_endpoint(query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("/cards/random?q={}", urlencoding::encode(query)),
        None => "/cards/random".to_string(),
    }
}

pub fn autocomplete_endpoint(query: &str, include_extras: bool) -> String {
    let mut endpoint = format!("/cards/autocomplete?q={}", urlencoding::encode(query));
    if include_extras {
        endpoint.push_str("&include_extras=true");
    }
    endpoint
}

pub fn card_by_id_endpoint(id: &str) -> String {
    format!("/cards/{}", urlencoding::encode(id))
}

/// Caps a requested natural search size.
pub fn natural_search_limit(limit: Option<usize>) -> usize {
    limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_NATURAL_LIMIT)
        .min(MAX_NATURAL_LIMIT)
}

/// Pages needed to collect `limit` cards.
pub fn pages_for(limit: usize) -> u32 {
    limit.div_ceil(PAGE_SIZE).max(1) as u32
}

/// Renders one card as markdown.
pub fn format_card(card: &ScryfallCard) -> String {
    let mut out = format!("**{}**", card.name);

    if let Some(cost) = card.mana_cost.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(out, " {}", cost);
    }
    let _ = write!(out, "\n*{}*", card.type_line);

    if let Some(text) = card.oracle_text.as_deref().filter(|t| !t.is_empty()) {
        let _ = write!(out, "\n\n{}", text);
    }
    if let (Some(power), Some(toughness)) = (&card.power, &card.toughness) {
        let _ = write!(out, "\n\n**Power/Toughness:** {}/{}", power, toughness);
    }

    let _ = write!(
        out,
        "\n**Set:** {} ({})\n**Rarity:** {}",
        card.set_name,
        card.set.to_uppercase(),
        card.rarity
    );

    if !card.colors.is_empty() {
        let _ = write!(out, "\n**Colors:** {}", card.colors.join(", "));
    }

    let prices = format_prices(&card.prices);
    if !prices.is_empty() {
        let _ = write!(out, "\n**Prices:** {}", prices.join(", "));
    }

    if let Some(uris) = &card.purchase_uris {
        let links: Vec<String> = [
            ("TCGPlayer", &uris.tcgplayer),
            ("Cardmarket", &uris.cardmarket),
            ("Cardhoarder", &uris.cardhoarder),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_ref().map(|url| format!("[{}]({})", label, url)))
        .collect();

        if !links.is_empty() {
            let _ = write!(out, "\n**Purchase:** {}", links.join(" • "));
        }
    }

    if let Some(faces) = card.card_faces.as_ref().filter(|f| f.len() > 1) {
        out.push_str("\n\n**Card Faces:**");
        for (index, face) in faces.iter().enumerate() {
            let _ = write!(out, "\n\n*Face {}: {}*", index + 1, face.name);
            if let Some(cost) = face.mana_cost.as_deref().filter(|c| !c.is_empty()) {
                let _ = write!(out, " {}", cost);
            }
            let _ = write!(out, "\n{}", face.type_line);
            if let Some(text) = face.oracle_text.as_deref().filter(|t| !t.is_empty()) {
                let _ = write!(out, "\n{}", text);
            }
            if let (Some(power), Some(toughness)) = (&face.power, &face.toughness) {
                let _ = write!(out, "\nPower/Toughness: {}/{}", power, toughness);
            }
        }
    }

    let _ = write!(out, "\n**Scryfall ID:** {}", card.id);
    out
}

fn format_prices(prices: &Prices) -> Vec<String> {
    [
        ("USD: $", &prices.usd, ""),
        ("USD Foil: $", &prices.usd_foil, ""),
        ("USD Etched: $", &prices.usd_etched, ""),
        ("EUR: €", &prices.eur, ""),
        ("EUR Foil: €", &prices.eur_foil, ""),
        ("EUR Etched: €", &prices.eur_etched, ""),
        ("MTGO: ", &prices.tix, " tix"),
    ]
    .into_iter()
    .filter_map(|(prefix, value, suffix)| {
        value
            .as_ref()
            .map(|value| format!("{}{}{}", prefix, value, suffix))
    })
    .collect()
}

fn push_card_list(out: &mut String, cards: &[ScryfallCard]) {
    for (index, card) in cards.iter().enumerate() {
        let _ = write!(out, "{}. {}\n\n---\n\n", index + 1, format_card(card));
    }
}

/// Renders a page of `/cards/search` results.
///
/// `translated` is set when the query had to be rewritten before Scryfall
/// accepted it.
pub fn format_search_results(
    query: &str,
    translated: Option<&str>,
    response: &ScryfallSearchResponse,
    page: u32,
) -> String {
    let mut out = format!("**Search Results for \"{}\"**\n", query);
    if let Some(translated) = translated {
        let _ = write!(
            out,
            "*Your query was automatically translated to: \"{}\"*\n\n",
            translated
        );
    }

    let _ = write!(out, "Found {} total cards", response.total_cards);
    if response.has_more {
        let _ = write!(out, " (showing page {})", page);
    }
    out.push_str("\n\n");

    push_card_list(&mut out, &response.data);

    if response.has_more {
        let _ = write!(
            out,
            "*There are more results. Use page {} to see more.*",
            page + 1
        );
    }

    out.trim().to_string()
}

/// Renders the failure of both the raw and the translated search.
pub fn format_search_failure(
    query: &str,
    original_error: &str,
    translation_error: &str,
    suggestions: &[String],
) -> String {
    let mut out = format!(
        "**Search failed for \"{}\"**\n\nOriginal error: {}\nTranslation attempt also failed: {}\n\n",
        query, original_error, translation_error
    );

    if !suggestions.is_empty() {
        out.push_str(&format_suggestions("Suggested mappings:", suggestions));
        out.push_str("Try using the `scryfall_natural_search` tool for better natural language support.");
    }

    out
}

/// Everything a natural-language search report shows.
#[derive(Debug, Clone)]
pub struct NaturalSearch<'a> {
    pub original: &'a str,
    pub translated: &'a str,
    pub show_translation: bool,
    pub suggestions: &'a [String],
    pub related_terms: &'a [SearchResult],
    pub limit: usize,
    /// Collected cards, or the message of the request that failed.
    pub outcome: Result<&'a [ScryfallCard], String>,
}

/// Renders a natural-language search report.
pub fn format_natural_search(search: &NaturalSearch<'_>) -> String {
    let mut out = String::from("**Natural Language Search Results**\n");

    if search.show_translation {
        let _ = write!(
            out,
            "**Original Query:** \"{}\"\n**Translated Query:** \"{}\"\n\n",
            search.original, search.translated
        );
    }

    let unchanged = search.translated.to_lowercase() == search.original.to_lowercase();
    if unchanged {
        out.push_str(&format_suggestions(
            "Suggested mappings for your query:",
            search.suggestions,
        ));
    }

    out.push_str(&format_terms(
        "MTG terms found in your query:",
        search.related_terms,
        RELATED_TERMS_SHOWN,
    ));

    match &search.outcome {
        Ok(cards) if cards.is_empty() => {
            out.push_str("**No cards found matching your query.**\n\n");
            if !search.suggestions.is_empty() {
                out.push_str("Try using more specific terms, or use one of the suggested mappings above.");
            } else if !search.related_terms.is_empty() {
                out.push_str("Try using the `mtg_knowledge_lookup` tool to learn more about the MTG terms found in your query.");
            } else {
                out.push_str("Try using more specific terms or different keywords.");
            }
        }
        Ok(cards) => {
            let _ = write!(
                out,
                "Found {} cards (showing up to {})\n\n",
                cards.len(),
                search.limit
            );
            push_card_list(&mut out, cards);
            if cards.len() == search.limit {
                let _ = write!(
                    out,
                    "*Limited to {} results. Use the regular search for more comprehensive results.*",
                    search.limit
                );
            }
        }
        Err(message) => {
            let _ = write!(out, "**Search Error:** {}\n\n", message);
            if !search.suggestions.is_empty() {
                out.push_str(&format_suggestions(
                    "Try these suggested mappings:",
                    search.suggestions,
                ));
            } else if !search.related_terms.is_empty() {
                out.push_str("**Learn more about these MTG terms:**\n");
                for term in search.related_terms.iter().take(RELATED_TERMS_SHOWN) {
                    let _ = writeln!(out, "• Use `mtg_knowledge_lookup` with \"{}\"", term.term);
                }
            } else {
                out.push_str("Try rephrasing your query or using the regular `scryfall_search_cards` tool with exact Scryfall syntax.");
            }
        }
    }

    out.trim().to_string()
}

pub fn format_random_card(card: &ScryfallCard) -> String {
    format!("**Random Card:**\n\n{}", format_card(card))
}

pub fn format_autocomplete(query: &str, names: &[String]) -> String {
    let list: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{}. {}", index + 1, name))
        .collect();

    format!(
        "**Autocomplete suggestions for \"{}\":**\n\n{}",
        query,
        list.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Category;

    fn bolt() -> ScryfallCard {
        ScryfallCard {
            id: "e3285e6b-3e79-4d7c-bf96-d920f973b80d".to_string(),
            name: "Lightning Bolt".to_string(),
            mana_cost: Some("{R}".to_string()),
            cmc: 1.0,
            type_line: "Instant".to_string(),
            oracle_text: Some("Lightning Bolt deals 3 damage to any target.".to_string()),
            colors: vec!["R".to_string()],
            color_identity: vec!["R".to_string()],
            set: "lea".to_string(),
            set_name: "Limited Edition Alpha".to_string(),
            rarity: "common".to_string(),
            prices: Prices {
                usd: Some("1.50".to_string()),
                tix: Some("0.02".to_string()),
                ..Default::default()
            },
            purchase_uris: Some(PurchaseUris {
                tcgplayer: Some("https://tcg.example/bolt".to_string()),
                cardhoarder: Some("https://ch.example/bolt".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn delver() -> ScryfallCard {
        ScryfallCard {
            id: "delver-id".to_string(),
            name: "Delver of Secrets // Insectile Aberration".to_string(),
            type_line: "Creature — Human Wizard // Creature — Human Insect".to_string(),
            set: "isd".to_string(),
            set_name: "Innistrad".to_string(),
            rarity: "common".to_string(),
            card_faces: Some(vec![
                CardFace {
                    name: "Delver of Secrets".to_string(),
                    mana_cost: Some("{U}".to_string()),
                    type_line: "Creature — Human Wizard".to_string(),
                    power: Some("1".to_string()),
                    toughness: Some("1".to_string()),
                    ..Default::default()
                },
                CardFace {
                    name: "Insectile Aberration".to_string(),
                    mana_cost: Some(String::new()),
                    type_line: "Creature — Human Insect".to_string(),
                    oracle_text: Some("Flying".to_string()),
                    power: Some("3".to_string()),
                    toughness: Some("2".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        }
    }

    fn listing(cards: Vec<ScryfallCard>, has_more: bool) -> ScryfallSearchResponse {
        ScryfallSearchResponse {
            total_cards: cards.len() as u64,
            has_more,
            next_page: None,
            data: cards,
        }
    }

    // ============================================================================
    // Models
    // ============================================================================

    #[test]
    fn test_deserialize_card_with_missing_fields() {
        let json = r#"{
            "object": "card",
            "id": "abc",
            "name": "Forest",
            "type_line": "Basic Land — Forest",
            "set": "m21",
            "set_name": "Core Set 2021",
            "rarity": "common",
            "prices": {"usd": null, "eur": "0.10"}
        }"#;

        let card: ScryfallCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Forest");
        assert!(card.colors.is_empty());
        assert_eq!(card.prices.eur.as_deref(), Some("0.10"));
        assert!(card.card_faces.is_none());
    }

    #[test]
    fn test_deserialize_error() {
        let json = r#"{"object":"error","code":"not_found","status":404,"details":"No card found"}"#;
        let error: ScryfallError = serde_json::from_str(json).unwrap();
        assert_eq!(error.status, 404);
        assert_eq!(error.details, "No card found");
    }

    // ============================================================================
    // Endpoints
    // ============================================================================

    #[test]
    fn test_search_endpoint_encodes_query() {
        let params = SearchParams::new(r#"o:"draw a card" c:u"#);
        assert_eq!(
            search_endpoint(&params),
            "/cards/search?q=o%3A%22draw%20a%20card%22%20c%3Au&unique=cards&order=name&dir=auto&page=1"
        );
    }

    #[test]
    fn test_search_params_builders() {
        let params = SearchParams::new("bolt").with_page(3).with_query("t:instant");
        assert_eq!(params.query, "t:instant");
        assert_eq!(params.page, 3);
        assert_eq!(params.order, "name");
    }

    #[test]
    fn test_named_endpoint() {
        assert_eq!(
            named_endpoint("Lightning Bolt", false, None),
            "/cards/named?exact=Lightning%20Bolt"
        );
        assert_eq!(
            named_endpoint("bolt", true, Some("lea")),
            "/cards/named?fuzzy=bolt&set=lea"
        );
    }

    #[test]
    fn test_other_endpoints() {
        assert_eq!(random_endpoint(None), "/cards/random");
        assert_eq!(random_endpoint(Some("t:elf")), "/cards/random?q=t%3Aelf");
        assert_eq!(
            autocomplete_endpoint("thal", true),
            "/cards/autocomplete?q=thal&include_extras=true"
        );
        assert_eq!(card_by_id_endpoint("abc-123"), "/cards/abc-123");
    }

    #[test]
    fn test_natural_search_limit() {
        assert_eq!(natural_search_limit(None), 25);
        assert_eq!(natural_search_limit(Some(0)), 25);
        assert_eq!(natural_search_limit(Some(10)), 10);
        assert_eq!(natural_search_limit(Some(500)), 100);
        assert_eq!(pages_for(100), 1);
        assert_eq!(pages_for(176), 2);
    }

    // ============================================================================
    // format_card
    // ============================================================================

    #[test]
    fn test_format_card() {
        let text = format_card(&bolt());
        assert!(text.starts_with("**Lightning Bolt** {R}\n*Instant*\n\nLightning Bolt deals 3 damage"));
        assert!(text.contains("**Set:** Limited Edition Alpha (LEA)\n**Rarity:** common"));
        assert!(text.contains("**Colors:** R"));
        assert!(text.contains("**Prices:** USD: $1.50, MTGO: 0.02 tix"));
        assert!(text.contains(
            "**Purchase:** [TCGPlayer](https://tcg.example/bolt) • [Cardhoarder](https://ch.example/bolt)"
        ));
        assert!(text.ends_with("**Scryfall ID:** e3285e6b-3e79-4d7c-bf96-d920f973b80d"));
        assert!(!text.contains("Power/Toughness"));
    }

    #[test]
    fn test_format_card_faces() {
        let text = format_card(&delver());
        assert!(text.contains("**Card Faces:**"));
        assert!(text.contains("*Face 1: Delver of Secrets* {U}\nCreature — Human Wizard\nPower/Toughness: 1/1"));
        assert!(text.contains("*Face 2: Insectile Aberration*\nCreature — Human Insect\nFlying"));
        assert!(!text.contains("**Colors:**"));
        assert!(!text.contains("**Prices:**"));
    }

    // ============================================================================
    // Result pages
    // ============================================================================

    #[test]
    fn test_format_search_results() {
        let text = format_search_results("bolt", None, &listing(vec![bolt()], true), 2);
        assert!(text.starts_with("**Search Results for \"bolt\"**\nFound 1 total cards (showing page 2)\n\n1. **Lightning Bolt**"));
        assert!(text.ends_with("*There are more results. Use page 3 to see more.*"));
    }

    #[test]
    fn test_format_search_results_translated() {
        let text = format_search_results(
            "cheap dragons",
            Some("cmc<=2 t:dragon"),
            &listing(vec![bolt()], false),
            1,
        );
        assert!(text.contains("*Your query was automatically translated to: \"cmc<=2 t:dragon\"*"));
        assert!(text.ends_with("---"));
    }

    #[test]
    fn test_format_search_failure() {
        let text = format_search_failure(
            "cheap",
            "bad query",
            "still bad",
            &["\"cheap\" → cmc<=2".to_string()],
        );
        assert!(text.contains("Original error: bad query\nTranslation attempt also failed: still bad"));
        assert!(text.contains("**Suggested mappings:**\n• \"cheap\" → cmc<=2"));
    }

    fn natural<'a>(
        translated: &'a str,
        suggestions: &'a [String],
        related: &'a [SearchResult],
        outcome: Result<&'a [ScryfallCard], String>,
    ) -> NaturalSearch<'a> {
        NaturalSearch {
            original: "Cheap Dragons",
            translated,
            show_translation: true,
            suggestions,
            related_terms: related,
            limit: 1,
            outcome,
        }
    }

    #[test]
    fn test_format_natural_search_found() {
        let cards = vec![bolt()];
        let text = format_natural_search(&natural("cmc<=2 t:dragon", &[], &[], Ok(cards.as_slice())));
        assert!(text.contains("**Original Query:** \"Cheap Dragons\"\n**Translated Query:** \"cmc<=2 t:dragon\""));
        assert!(text.contains("Found 1 cards (showing up to 1)"));
        assert!(text.ends_with("*Limited to 1 results. Use the regular search for more comprehensive results.*"));
    }

    #[test]
    fn test_format_natural_search_suggestions_only_when_unchanged() {
        let suggestions = vec!["\"cheap\" → cmc<=2".to_string()];
        let changed = format_natural_search(&natural("cmc<=2 t:dragon", &suggestions, &[], Ok(&[][..])));
        assert!(!changed.contains("Suggested mappings for your query"));
        assert!(changed.ends_with("use one of the suggested mappings above."));

        let unchanged = format_natural_search(&natural("cheap dragons", &suggestions, &[], Ok(&[][..])));
        assert!(unchanged.contains("**Suggested mappings for your query:**\n• \"cheap\" → cmc<=2"));
    }

    #[test]
    fn test_format_natural_search_related_terms() {
        let related: Vec<SearchResult> = ["storm", "instant", "first strike", "double strike"]
            .into_iter()
            .map(|term| SearchResult {
                term: term.to_string(),
                category: Category::KeywordAbility,
                relevance: 60,
            })
            .collect();

        let text = format_natural_search(&natural("st", &[], &related, Ok(&[][..])));
        assert!(text.contains("• **first strike** (Keyword Ability)"));
        assert!(!text.contains("double strike"));
        assert!(text.ends_with("learn more about the MTG terms found in your query."));
    }

    #[test]
    fn test_format_natural_search_error() {
        let text = format_natural_search(&natural(
            "x",
            &[],
            &[],
            Err("Scryfall API Error (400): bad".to_string()),
        ));
        assert!(text.contains("**Search Error:** Scryfall API Error (400): bad"));
        assert!(text.ends_with("with exact Scryfall syntax."));
    }

    #[test]
    fn test_format_autocomplete() {
        let names = vec!["Thalia".to_string(), "Thalia's Lancers".to_string()];
        assert_eq!(
            format_autocomplete("thal", &names),
            "**Autocomplete suggestions for \"thal\":**\n\n1. Thalia\n2. Thalia's Lancers"
        );
    }
}

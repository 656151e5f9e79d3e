use crate::prelude::{println, *};
use mtgquery_core::augment::translate_with_knowledge;
use mtgquery_core::knowledge::KnowledgeBase;
use mtgquery_core::mappings::MappingTables;
use mtgquery_core::scryfall::{
    format_natural_search, natural_search_limit, pages_for, search_endpoint, NaturalSearch,
    ScryfallCard, ScryfallSearchResponse, SearchParams,
};

use super::ScryfallClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct NaturalOptions {
    /// Natural-language query (e.g. "cheap blue counterspells", "angels with flying")
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Show how the query was translated
    #[arg(short, long)]
    pub show_translation: bool,

    /// Maximum number of cards (max 100)
    #[arg(short, long, env = "MTGQUERY_LIMIT", default_value = "25")]
    pub limit: usize,

    /// Strategy for omitting similar cards: cards, art, prints
    #[arg(long, default_value = "cards")]
    pub unique: String,

    /// Sort order (name, set, released, rarity, color, usd, cmc, power, ...)
    #[arg(long, default_value = "name")]
    pub order: String,
}

/// Arguments of a natural-language search, shared by the CLI and MCP.
#[derive(Debug, Clone)]
pub struct NaturalRequest {
    pub query: String,
    pub show_translation: bool,
    pub limit: Option<usize>,
    pub unique: Option<String>,
    pub order: Option<String>,
}

pub async fn run(options: NaturalOptions, global: crate::Global) -> Result<()> {
    let client = ScryfallClient::new(&global)?;
    let request = NaturalRequest {
        query: options.query.join(" "),
        show_translation: options.show_translation || global.verbose,
        limit: Some(options.limit),
        unique: Some(options.unique),
        order: Some(options.order),
    };

    println!("{}", natural_search_data(&client, &request, &global).await);
    Ok(())
}

/// Translates the query with knowledge augmentation, collects up to the
/// capped limit of cards and renders the report. Request failures are part
/// of the report.
pub async fn natural_search_data(
    client: &ScryfallClient,
    request: &NaturalRequest,
    global: &crate::Global,
) -> String {
    let kb = KnowledgeBase::standard();
    let translated = translate_with_knowledge(
        crate::translate::engine(global),
        &request.query,
        kb,
    );
    let limit = natural_search_limit(request.limit);
    let suggestions = MappingTables::standard().suggest(&request.query);
    let related_terms = kb.search_terms(&request.query);

    log::debug!("Natural search '{}' as '{}'", request.query, translated);

    let mut params = SearchParams::new(translated.as_str());
    if let Some(unique) = &request.unique {
        params.unique = unique.clone();
    }
    if let Some(order) = &request.order {
        params.order = order.clone();
    }

    let outcome = collect_cards(client, &params, limit).await;

    format_natural_search(&NaturalSearch {
        original: &request.query,
        translated: &translated,
        show_translation: request.show_translation,
        suggestions: &suggestions,
        related_terms: &related_terms,
        limit,
        outcome: outcome.as_deref().map_err(|e| e.to_string()),
    })
}

/// Pages through `/cards/search` until `limit` cards are collected.
///
/// Scryfall answers 404 when nothing matches, which counts as an empty
/// result. A failure after the first page ends collection with what was
/// gathered.
async fn collect_cards(
    client: &ScryfallClient,
    params: &SearchParams,
    limit: usize,
) -> Result<Vec<ScryfallCard>, Error> {
    let mut cards: Vec<ScryfallCard> = Vec::new();

    for page in 1..=pages_for(limit) {
        let response = match client
            .get::<ScryfallSearchResponse>(&search_endpoint(&params.with_page(page)))
            .await
        {
            Ok(response) => response,
            Err(Error::Scryfall { status: 404, .. }) => break,
            Err(e) if page == 1 => return Err(e),
            Err(e) => {
                log::debug!("Stopping at page {}: {}", page, e);
                break;
            }
        };

        let remaining = limit - cards.len();
        cards.extend(response.data.into_iter().take(remaining));

        if !response.has_more || cards.len() >= limit {
            break;
        }
    }

    Ok(cards)
}

use crate::prelude::{eprintln, println, *};
use mtgquery_core::mappings::MappingTables;
use mtgquery_core::scryfall::{
    format_search_failure, format_search_results, search_endpoint, ScryfallSearchResponse,
    SearchParams,
};

use super::ScryfallClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Scryfall query (e.g. "c:blue t:creature", "t:instant cmc<=3")
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Do not retry with a natural-language translation when Scryfall rejects the query
    #[arg(long)]
    pub no_natural_language: bool,

    /// Strategy for omitting similar cards: cards, art, prints
    #[arg(long, default_value = "cards")]
    pub unique: String,

    /// Sort order (name, set, released, rarity, color, usd, cmc, power, ...)
    #[arg(long, default_value = "name")]
    pub order: String,

    /// Sort direction: auto, asc, desc
    #[arg(long, default_value = "auto")]
    pub dir: String,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

impl SearchOptions {
    fn params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            unique: self.unique.clone(),
            order: self.order.clone(),
            dir: self.dir.clone(),
            page: self.page.max(1),
        }
    }
}

/// Rendered search page, or the rendered failure of both attempts.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub text: String,
    pub failed: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let client = ScryfallClient::new(&global)?;

    if global.verbose {
        eprintln!("Searching Scryfall for: {}", options.query);
    }

    let report = search_data(&client, &options.params(), !options.no_natural_language, &global).await?;

    if report.failed {
        return Err(eyre!("{}", report.text));
    }

    println!("{}", report.text);
    Ok(())
}

/// Runs a search. When Scryfall rejects the raw query and `try_natural` is
/// set, retries once with the table translation if it differs.
pub async fn search_data(
    client: &ScryfallClient,
    params: &SearchParams,
    try_natural: bool,
    global: &crate::Global,
) -> Result<SearchReport, Error> {
    let original_error = match client
        .get::<ScryfallSearchResponse>(&search_endpoint(params))
        .await
    {
        Ok(response) => {
            return Ok(SearchReport {
                text: format_search_results(&params.query, None, &response, params.page),
                failed: false,
            })
        }
        Err(e) => e,
    };

    if !try_natural {
        return Err(original_error);
    }

    let translated = crate::translate::engine(global).translate(&params.query);
    if translated.to_lowercase() == params.query.to_lowercase() {
        return Err(original_error);
    }

    log::debug!("Retrying search with translated query '{}'", translated);
    if global.verbose {
        eprintln!("Search failed ({}), retrying as: {}", original_error, translated);
    }

    match client
        .get::<ScryfallSearchResponse>(&search_endpoint(&params.with_query(translated.as_str())))
        .await
    {
        Ok(response) => Ok(SearchReport {
            text: format_search_results(&params.query, Some(&translated), &response, params.page),
            failed: false,
        }),
        Err(translation_error) => Ok(SearchReport {
            text: format_search_failure(
                &params.query,
                &original_error.to_string(),
                &translation_error.to_string(),
                &MappingTables::standard().suggest(&params.query),
            ),
            failed: true,
        }),
    }
}

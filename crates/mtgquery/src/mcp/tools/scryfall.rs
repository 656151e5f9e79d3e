use crate::prelude::{eprintln, *};
use crate::scryfall::autocomplete::autocomplete_data;
use crate::scryfall::card::{card_by_id, card_named, random_card};
use crate::scryfall::natural::{natural_search_data, NaturalRequest};
use crate::scryfall::search::search_data;
use crate::scryfall::ScryfallClient;
use mtgquery_core::scryfall::{format_autocomplete, format_card, format_random_card, SearchParams};
use serde::Deserialize;

use super::{parse_arguments, tool_result, CallToolResult, JsonRpcError};

pub async fn handle_natural_search(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct NaturalSearchArgs {
        query: String,
        show_translation: Option<bool>,
        unique: Option<String>,
        order: Option<String>,
        limit: Option<usize>,
    }

    let args: NaturalSearchArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling scryfall_natural_search: query={}, limit={:?}",
            args.query, args.limit
        );
    }

    let request = NaturalRequest {
        query: args.query,
        show_translation: args.show_translation.unwrap_or(false),
        limit: args.limit,
        unique: args.unique,
        order: args.order,
    };

    let outcome = match ScryfallClient::new(global) {
        Ok(client) => Ok(natural_search_data(&client, &request, global).await),
        Err(e) => Err(e),
    };

    tool_result(outcome)
}

pub async fn handle_search_cards(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchCardsArgs {
        query: String,
        try_natural_language: Option<bool>,
        unique: Option<String>,
        order: Option<String>,
        dir: Option<String>,
        page: Option<u32>,
    }

    let args: SearchCardsArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling scryfall_search_cards: query={}, page={:?}",
            args.query, args.page
        );
    }

    let defaults = SearchParams::new(args.query);
    let params = SearchParams {
        unique: args.unique.unwrap_or(defaults.unique.clone()),
        order: args.order.unwrap_or(defaults.order.clone()),
        dir: args.dir.unwrap_or(defaults.dir.clone()),
        page: args.page.unwrap_or(1).max(1),
        ..defaults
    };
    let try_natural = args.try_natural_language.unwrap_or(true);

    let client = match ScryfallClient::new(global) {
        Ok(client) => client,
        Err(e) => return tool_result(Err(e)),
    };

    match search_data(&client, &params, try_natural, global).await {
        Ok(report) if report.failed => serde_json::to_value(CallToolResult::error(report.text))
            .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}"))),
        Ok(report) => tool_result(Ok(report.text)),
        Err(e) => tool_result(Err(e)),
    }
}

pub async fn handle_card_named(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CardNamedArgs {
        name: String,
        fuzzy: Option<bool>,
        set: Option<String>,
    }

    let args: CardNamedArgs = parse_arguments(arguments)?;

    let outcome = async {
        let client = ScryfallClient::new(global)?;
        let card = card_named(
            &client,
            &args.name,
            args.fuzzy.unwrap_or(false),
            args.set.as_deref(),
        )
        .await?;
        Ok::<_, Error>(format_card(&card))
    }
    .await;

    tool_result(outcome)
}

pub async fn handle_random_card(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RandomCardArgs {
        query: Option<String>,
    }

    let args: RandomCardArgs = parse_arguments(arguments.or(Some(serde_json::json!({}))))?;

    let outcome = async {
        let client = ScryfallClient::new(global)?;
        let card = random_card(&client, args.query.as_deref()).await?;
        Ok::<_, Error>(format_random_card(&card))
    }
    .await;

    tool_result(outcome)
}

pub async fn handle_card_by_id(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CardByIdArgs {
        id: String,
    }

    let args: CardByIdArgs = parse_arguments(arguments)?;

    let outcome = async {
        let client = ScryfallClient::new(global)?;
        let card = card_by_id(&client, &args.id).await?;
        Ok::<_, Error>(format_card(&card))
    }
    .await;

    tool_result(outcome)
}

pub async fn handle_autocomplete(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct AutocompleteArgs {
        query: String,
        include_extras: Option<bool>,
    }

    let args: AutocompleteArgs = parse_arguments(arguments)?;

    let outcome = async {
        let client = ScryfallClient::new(global)?;
        let names =
            autocomplete_data(&client, &args.query, args.include_extras.unwrap_or(false)).await?;
        Ok::<_, Error>(format_autocomplete(&args.query, &names))
    }
    .await;

    tool_result(outcome)
}

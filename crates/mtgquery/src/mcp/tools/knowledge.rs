use crate::prelude::{eprintln, *};
use mtgquery_core::knowledge::KnowledgeBase;
use serde::Deserialize;

use super::{parse_arguments, tool_result, JsonRpcError};

pub fn handle_knowledge_lookup(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct KnowledgeLookupArgs {
        query: String,
        search_similar: Option<bool>,
    }

    let args: KnowledgeLookupArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!("Calling mtg_knowledge_lookup: query={}", args.query);
    }

    let result = KnowledgeBase::standard().classify(&args.query);
    let text = crate::knowledge::lookup_text(
        &args.query,
        &result,
        args.search_similar.unwrap_or(true),
    );

    tool_result(Ok(text))
}

pub fn handle_translation_help(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize, Default)]
    struct TranslationHelpArgs {
        query: Option<String>,
        category: Option<String>,
    }

    let args: TranslationHelpArgs = match arguments {
        Some(arguments) => parse_arguments(Some(arguments))?,
        None => TranslationHelpArgs::default(),
    };

    if global.verbose {
        eprintln!(
            "Calling scryfall_translation_help: query={:?}, category={:?}",
            args.query, args.category
        );
    }

    let text = crate::mappings::help_text(
        args.query.as_deref(),
        args.category.as_deref().unwrap_or("all"),
        global,
    );

    tool_result(Ok(text))
}

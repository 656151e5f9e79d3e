use crate::prelude::{eprintln, println, *};
use mtgquery_core::scryfall::{autocomplete_endpoint, format_autocomplete, CatalogResponse};

use super::ScryfallClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct AutocompleteOptions {
    /// Partial card name
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Include extra cards such as tokens
    #[arg(long)]
    pub include_extras: bool,
}

pub async fn run(options: AutocompleteOptions, global: crate::Global) -> Result<()> {
    let client = ScryfallClient::new(&global)?;
    let names = autocomplete_data(&client, &options.query, options.include_extras).await?;

    if global.verbose {
        eprintln!("{} suggestions", names.len());
    }

    println!("{}", format_autocomplete(&options.query, &names));
    Ok(())
}

pub async fn autocomplete_data(
    client: &ScryfallClient,
    query: &str,
    include_extras: bool,
) -> Result<Vec<String>, Error> {
    let catalog: CatalogResponse = client
        .get(&autocomplete_endpoint(query, include_extras))
        .await?;

    Ok(catalog.data)
}

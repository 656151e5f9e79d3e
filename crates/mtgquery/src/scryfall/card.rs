use crate::prelude::{println, *};
use mtgquery_core::scryfall::{
    card_by_id_endpoint, format_card, format_random_card, named_endpoint, random_endpoint,
    ScryfallCard,
};

use super::ScryfallClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CardOptions {
    /// Card name, or a Scryfall ID with --id
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Use fuzzy name matching
    #[arg(long)]
    pub fuzzy: bool,

    /// Set code to search within (e.g. khm, znr)
    #[arg(long)]
    pub set: Option<String>,

    /// Treat NAME as a Scryfall ID
    #[arg(long, conflicts_with_all = ["fuzzy", "set"])]
    pub id: bool,

    /// Output the raw card as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RandomOptions {
    /// Scryfall query restricting the random pick
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output the raw card as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: CardOptions, global: crate::Global) -> Result<()> {
    let client = ScryfallClient::new(&global)?;

    let card = if options.id {
        card_by_id(&client, &options.name).await?
    } else {
        card_named(&client, &options.name, options.fuzzy, options.set.as_deref()).await?
    };

    print_card(&card, options.json, format_card)
}

pub async fn run_random(options: RandomOptions, global: crate::Global) -> Result<()> {
    let client = ScryfallClient::new(&global)?;
    let card = random_card(&client, options.query.as_deref()).await?;

    print_card(&card, options.json, format_random_card)
}

fn print_card(card: &ScryfallCard, json: bool, render: fn(&ScryfallCard) -> String) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(card)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", render(card));
    }

    Ok(())
}

pub async fn card_named(
    client: &ScryfallClient,
    name: &str,
    fuzzy: bool,
    set: Option<&str>,
) -> Result<ScryfallCard, Error> {
    client.get(&named_endpoint(name, fuzzy, set)).await
}

pub async fn card_by_id(client: &ScryfallClient, id: &str) -> Result<ScryfallCard, Error> {
    if id.trim().is_empty() {
        return Err(Error::InvalidArgument("card id must not be empty".to_string()));
    }

    client.get(&card_by_id_endpoint(id)).await
}

pub async fn random_card(client: &ScryfallClient, query: Option<&str>) -> Result<ScryfallCard, Error> {
    client.get(&random_endpoint(query)).await
}

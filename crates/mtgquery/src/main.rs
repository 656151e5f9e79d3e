use crate::prelude::*;
use clap::Parser;
use mtgquery_core::rewrite::RewriteMode;

mod error;
mod knowledge;
mod mappings;
mod mcp;
mod prelude;
mod scryfall;
mod translate;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search Magic: The Gathering cards with natural language, from the terminal or an MCP client"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MTGQUERY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Scryfall API base URL
    #[clap(
        long,
        env = "SCRYFALL_API_BASE",
        global = true,
        default_value = "https://api.scryfall.com"
    )]
    api_base: String,

    /// How rewrite rules treat text inserted by earlier rules (sequential, snapshot)
    #[clap(
        long,
        env = "MTGQUERY_REWRITE_MODE",
        global = true,
        default_value = "sequential"
    )]
    rewrite_mode: RewriteMode,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Translate a natural-language query into Scryfall syntax
    Translate(crate::translate::TranslateOptions),

    /// Look up Magic: The Gathering terms
    Knowledge(crate::knowledge::App),

    /// Show the natural-language mapping tables
    Mappings(crate::mappings::MappingsOptions),

    /// Search cards with Scryfall syntax
    Search(crate::scryfall::search::SearchOptions),

    /// Search cards with natural language
    Natural(crate::scryfall::natural::NaturalOptions),

    /// Get a card by name or Scryfall ID
    Card(crate::scryfall::card::CardOptions),

    /// Get a random card
    Random(crate::scryfall::card::RandomOptions),

    /// Complete a partial card name
    Autocomplete(crate::scryfall::autocomplete::AutocompleteOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Translate(options) => crate::translate::run(options, app.global).await,
        SubCommands::Knowledge(sub_app) => crate::knowledge::run(sub_app, app.global).await,
        SubCommands::Mappings(options) => crate::mappings::run(options, app.global).await,
        SubCommands::Search(options) => crate::scryfall::search::run(options, app.global).await,
        SubCommands::Natural(options) => crate::scryfall::natural::run(options, app.global).await,
        SubCommands::Card(options) => crate::scryfall::card::run(options, app.global).await,
        SubCommands::Random(options) => crate::scryfall::card::run_random(options, app.global).await,
        SubCommands::Autocomplete(options) => {
            crate::scryfall::autocomplete::run(options, app.global).await
        }
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

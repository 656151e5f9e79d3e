use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use mtgquery_core::help::{format_knowledge_lookup, KnowledgeLookup};
use mtgquery_core::knowledge::{KnowledgeBase, KnowledgeResult, SearchResult, TermGroup};
use mtgquery_core::rewrite::translate;

#[derive(Debug, clap::Parser)]
#[command(name = "knowledge")]
#[command(about = "Magic: The Gathering knowledge base")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Classify a term and describe it
    #[clap(name = "lookup")]
    Lookup(LookupOptions),

    /// Find terms containing a pattern
    #[clap(name = "search")]
    Search(SearchOptions),

    /// List the terms of one group
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct LookupOptions {
    /// Term to look up (e.g. flying, azorius, modern)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Do not search for similar terms when nothing matches
    #[arg(long)]
    pub no_similar: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Substring to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Term group (card-types, evergreen-keywords, guilds, zones, slang, ...)
    #[arg(value_name = "GROUP")]
    pub group: Option<TermGroup>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Lookup(options) => run_lookup(options, global),
        Commands::Search(options) => run_search(options, global),
        Commands::List(options) => run_list(options),
    }
}

fn run_lookup(options: LookupOptions, global: crate::Global) -> Result<()> {
    let result = KnowledgeBase::standard().classify(&options.term);

    if global.verbose {
        eprintln!(
            "Matched {} categories for '{}'",
            result.categories.len(),
            options.term
        );
    }

    if options.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", lookup_text(&options.term, &result, !options.no_similar));
    }

    Ok(())
}

/// Markdown lookup report shared with the `mtg_knowledge_lookup` tool.
pub fn lookup_text(query: &str, result: &KnowledgeResult, search_similar: bool) -> String {
    let kb = KnowledgeBase::standard();
    let translated = translate(query);
    let similar = if search_similar && !result.found {
        kb.search_terms(query)
    } else {
        Vec::new()
    };

    format_knowledge_lookup(&KnowledgeLookup {
        query,
        result,
        translated: &translated,
        similar: search_similar.then_some(similar.as_slice()),
        available_categories: kb.available_categories(),
    })
}

fn run_search(options: SearchOptions, global: crate::Global) -> Result<()> {
    let results = KnowledgeBase::standard().search_terms(&options.pattern);

    if global.verbose {
        eprintln!("{} terms match '{}'", results.len(), options.pattern);
    }

    if options.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", f!("No terms contain '{}'.", options.pattern).yellow());
        return Ok(());
    }

    search_table(&results).printstd();
    Ok(())
}

fn search_table(results: &[SearchResult]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["TERM", "CATEGORY", "RELEVANCE"]);

    for result in results {
        table.add_row(prettytable::row![
            result.term,
            result.category.label(),
            result.relevance
        ]);
    }

    table
}

fn run_list(options: ListOptions) -> Result<()> {
    let kb = KnowledgeBase::standard();

    match options.group {
        Some(group) => {
            println!("{}", group.name().bright_cyan().bold());
            for term in kb.terms(group) {
                println!("  {term}");
            }
        }
        None => {
            for group in TermGroup::ALL {
                println!(
                    "{} ({} terms)",
                    group.name().bright_cyan(),
                    kb.terms(group).len()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_text_found() {
        let result = KnowledgeBase::standard().classify("modern");
        let text = lookup_text("modern", &result, true);
        assert!(text.contains("## Format"));
        assert!(text.contains("sets from 8th Edition/Mirrodin forward"));
    }

    #[test]
    fn test_lookup_text_similar_toggle() {
        let result = KnowledgeBase::standard().classify("strik");
        assert!(lookup_text("strik", &result, true).contains("**first strike** (Keyword Ability)"));
        assert!(!lookup_text("strik", &result, false).contains("Similar terms found"));
    }

    #[test]
    fn test_search_table_rows() {
        let results = KnowledgeBase::standard().search_terms("fly");
        let table = search_table(&results);
        assert_eq!(table.len(), results.len() + 1);
    }
}

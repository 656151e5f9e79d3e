use crate::prelude::{eprintln, println, *};
use mtgquery_core::help::{format_translation_help, QueryHelp};
use mtgquery_core::mappings::{MappingCategory, MappingTables};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct MappingsOptions {
    /// Mapping topic: all, text, colors, types, formats, costs
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Show how this query translates and which mappings relate to it
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print every mapping of the selected topic as a table
    #[arg(long)]
    pub table: bool,
}

pub async fn run(options: MappingsOptions, global: crate::Global) -> Result<()> {
    if options.table {
        let categories = categories_for(&options.category)?;
        if global.verbose {
            eprintln!("Listing {} mapping tables", categories.len());
        }
        mappings_table(MappingTables::standard(), &categories).printstd();
        return Ok(());
    }

    println!("{}", help_text(options.query.as_deref(), &options.category, &global));
    Ok(())
}

/// Translation help page shared with the `scryfall_translation_help` tool.
pub fn help_text(query: Option<&str>, topic: &str, global: &crate::Global) -> String {
    let tables = MappingTables::standard();

    match query.filter(|q| !q.is_empty()) {
        Some(query) => {
            let translated = crate::translate::engine(global).translate(query);
            let suggestions = tables.suggest(query);
            let help = QueryHelp {
                query,
                translated: &translated,
                suggestions: &suggestions,
            };
            format_translation_help(tables, Some(&help), topic)
        }
        None => format_translation_help(tables, None, topic),
    }
}

fn categories_for(topic: &str) -> Result<Vec<MappingCategory>> {
    if topic.eq_ignore_ascii_case("all") {
        return Ok(MappingCategory::ALL.to_vec());
    }

    topic
        .parse::<MappingCategory>()
        .map(|category| vec![category])
        .map_err(|e| eyre!(Error::InvalidArgument(e)))
}

fn mappings_table(tables: &MappingTables, categories: &[MappingCategory]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["CATEGORY", "PHRASE", "SCRYFALL"]);

    for (category, entry) in tables.iter() {
        if categories.contains(&category) {
            table.add_row(prettytable::row![category, entry.phrase, entry.fragment]);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtgquery_core::rewrite::RewriteMode;

    fn global() -> crate::Global {
        crate::Global {
            verbose: false,
            api_base: "https://api.scryfall.com".to_string(),
            rewrite_mode: RewriteMode::Sequential,
        }
    }

    #[test]
    fn test_categories_for() {
        assert_eq!(categories_for("ALL").unwrap().len(), 5);
        assert_eq!(categories_for("costs").unwrap(), vec![MappingCategory::Cost]);
        assert!(categories_for("mana").is_err());
    }

    #[test]
    fn test_mappings_table_filters_categories() {
        let tables = MappingTables::standard();
        let table = mappings_table(tables, &[MappingCategory::Format]);
        assert_eq!(
            table.len(),
            tables.table(MappingCategory::Format).len() + 1
        );
    }

    #[test]
    fn test_help_text_with_query() {
        let text = help_text(Some("big creatures"), "types", &global());
        assert!(text.contains("**Translated To:** \"t:creature and (pow>=4 or tou>=4)\""));
        assert!(text.contains("## Type Mappings"));
    }

    #[test]
    fn test_help_text_empty_query_is_ignored() {
        let text = help_text(Some(""), "all", &global());
        assert!(!text.contains("Your Query"));
    }
}

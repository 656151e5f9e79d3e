use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use mtgquery_core::augment::{translate_query_report, Translation};
use mtgquery_core::knowledge::KnowledgeBase;
use mtgquery_core::mappings::MappingTables;
use mtgquery_core::rewrite::RewriteEngine;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TranslateOptions {
    /// Natural-language query (e.g. "cheap blue counterspells")
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Apply the mapping tables only, without knowledge augmentation
    #[arg(long)]
    pub plain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Rewrite engine selected by the global `--rewrite-mode`.
pub fn engine(global: &crate::Global) -> &'static RewriteEngine {
    RewriteEngine::standard(global.rewrite_mode)
}

pub async fn run(options: TranslateOptions, global: crate::Global) -> Result<()> {
    let query = options.query.join(" ");

    if global.verbose {
        eprintln!("Rewrite mode: {}", global.rewrite_mode);
        eprintln!("Mapping rules: {}", engine(&global).len());
        eprintln!();
    }

    let translation = translation_data(&query, options.plain, &global);

    if options.json {
        let json = serde_json::to_string_pretty(&translation)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", format_translation_text(&translation));
    }

    Ok(())
}

/// Translates `query` and gathers the suggestions shown alongside it.
pub fn translation_data(query: &str, plain: bool, global: &crate::Global) -> Translation {
    let engine = engine(global);
    let mut translation = translate_query_report(
        engine,
        MappingTables::standard(),
        KnowledgeBase::standard(),
        query,
    );

    if plain {
        translation.translated = engine.translate(query);
    }

    log::debug!("Translation: {:?}", translation);
    translation
}

fn format_translation_text(translation: &Translation) -> String {
    let mut result = String::new();

    result.push_str(&f!(
        "{} {}\n",
        "Original:  ".green(),
        translation.original.bright_white()
    ));
    result.push_str(&f!(
        "{} {}\n",
        "Translated:".green(),
        translation.translated.bright_cyan().bold()
    ));

    if !translation.changed() {
        result.push_str(&f!("\n{}\n", "No mapping matched this query.".yellow()));
    }

    if !translation.suggestions.is_empty() {
        result.push_str(&f!("\n{}\n", "Related mappings".bright_yellow().bold()));
        for suggestion in &translation.suggestions {
            result.push_str(&f!("  • {}\n", suggestion));
        }
    }

    if !translation.related_terms.is_empty() {
        result.push_str(&f!("\n{}\n", "MTG terms".bright_yellow().bold()));
        for term in &translation.related_terms {
            result.push_str(&f!(
                "  • {} ({}, {})\n",
                term.term.bright_white(),
                term.category,
                term.relevance
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtgquery_core::rewrite::RewriteMode;

    fn global(rewrite_mode: RewriteMode) -> crate::Global {
        crate::Global {
            verbose: false,
            api_base: "https://api.scryfall.com".to_string(),
            rewrite_mode,
        }
    }

    #[test]
    fn test_translation_data_augments_by_default() {
        let translation = translation_data("red creature", false, &global(RewriteMode::Sequential));
        assert_eq!(translation.translated, "c:r t:creature");
    }

    #[test]
    fn test_translation_data_plain() {
        let translation = translation_data("red creature", true, &global(RewriteMode::Sequential));
        assert_eq!(translation.translated, "c:r creature");
        assert_eq!(translation.original, "red creature");
    }

    #[test]
    fn test_translation_data_snapshot_mode() {
        let translation = translation_data("removal", true, &global(RewriteMode::Snapshot));
        assert_eq!(
            translation.translated,
            r#"o:"destroy" or o:"exile" or o:"return" or o:"bounce""#
        );
    }

    #[test]
    fn test_format_translation_text() {
        let translation = translation_data("cheap dragons", false, &global(RewriteMode::Sequential));
        let text = format_translation_text(&translation);
        assert!(text.contains("cmc<=2 t:dragon"));
        assert!(text.contains("Related mappings"));
        assert!(!text.contains("No mapping matched"));
    }

    #[test]
    fn test_format_translation_text_unchanged() {
        let translation = translation_data("zorp", false, &global(RewriteMode::Sequential));
        let text = format_translation_text(&translation);
        assert!(text.contains("No mapping matched this query."));
    }
}

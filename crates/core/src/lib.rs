//! Core library for mtgquery
//!
//! This crate implements the **Functional Core** of the mtgquery application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`mtgquery_core`** (this crate): query translation, term classification
//!   and report rendering. No I/O.
//! - **`mtgquery`**: the CLI, the MCP server and the Scryfall HTTP client.
//!
//! Every table is built once, never mutated, and handed to the engines by
//! reference. Given the same tables and input, every function here returns
//! the same output.
//!
//! # Module Organization
//!
//! - [`mappings`]: the five ordered phrase → fragment tables and mapping
//!   suggestions
//! - [`rewrite`]: the dictionary rewrite engine
//! - [`knowledge`]: the MTG knowledge base, term classifier and fuzzy search
//! - [`augment`]: knowledge-augmented translation and translation reports
//! - [`colors`]: color, guild, shard and wedge letter codes
//! - [`help`]: markdown for knowledge lookups and translation help
//! - [`scryfall`]: Scryfall API models, endpoints and card rendering
//!
//! # Example Usage
//!
//! ```rust
//! use mtgquery_core::augment::translate_with_knowledge;
//! use mtgquery_core::knowledge::KnowledgeBase;
//! use mtgquery_core::rewrite::{translate, RewriteEngine, RewriteMode};
//!
//! assert_eq!(translate("big creatures"), "t:creature and (pow>=4 or tou>=4)");
//!
//! let engine = RewriteEngine::standard(RewriteMode::Sequential);
//! let query = translate_with_knowledge(engine, "red creature", KnowledgeBase::standard());
//! assert_eq!(query, "c:r t:creature");
//! ```

pub mod augment;
pub mod colors;
pub mod help;
pub mod knowledge;
pub mod mappings;
pub mod rewrite;
pub mod scryfall;

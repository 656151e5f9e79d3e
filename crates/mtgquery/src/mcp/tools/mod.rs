mod knowledge;
mod scryfall;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

const ORDER_VALUES: &[&str] = &[
    "name", "set", "released", "rarity", "color", "usd", "tix", "eur", "cmc", "power",
    "toughness", "edhrec", "penny", "artist", "review",
];

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

impl CallToolResult {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: None,
        }
    }

    /// A failed tool call, reported to the client as content.
    pub fn error(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: Some(true),
        }
    }
}

/// Deserializes tool arguments, mapping failures to `-32602`.
pub fn parse_arguments<T: serde::de::DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

/// Wraps a tool outcome: errors become an `isError` result with an
/// `Error: ...` text.
pub fn tool_result(outcome: Result<String, crate::Error>) -> Result<serde_json::Value, JsonRpcError> {
    let result = match outcome {
        Ok(text) => CallToolResult::text(text),
        Err(e) => CallToolResult::error(format!("Error: {e}")),
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "mtgquery".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "scryfall_natural_search".to_string(),
            description: "Search for Magic cards using natural language. Automatically translates terms like 'leaves the battlefield', 'sacrifice', 'big creatures', etc. into proper Scryfall syntax.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Natural language search query (e.g., 'red creatures that sacrifice', 'cheap blue counterspells', 'angels with flying')"
                    },
                    "show_translation": {
                        "type": "boolean",
                        "description": "Whether to show how the natural language was translated to Scryfall syntax (default: false)",
                        "default": false
                    },
                    "unique": {
                        "type": "string",
                        "enum": ["cards", "art", "prints"],
                        "description": "Strategy for omitting similar cards (default: cards)",
                        "default": "cards"
                    },
                    "order": {
                        "type": "string",
                        "enum": ORDER_VALUES,
                        "description": "The method to sort returned cards (default: name)",
                        "default": "name"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results to return (default: 25, max: 100)",
                        "default": 25,
                        "minimum": 1,
                        "maximum": 100
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "scryfall_search_cards".to_string(),
            description: "Search for Magic: The Gathering cards using Scryfall's search syntax. Supports complex queries with operators like color, type, set, etc. Use scryfall_natural_search for easier natural language queries.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query using Scryfall search syntax (e.g., 'c:blue type:creature', 'Lightning Bolt', 't:instant cmc<=3')"
                    },
                    "try_natural_language": {
                        "type": "boolean",
                        "description": "Whether to attempt natural language translation if the exact query fails (default: true)",
                        "default": true
                    },
                    "unique": {
                        "type": "string",
                        "enum": ["cards", "art", "prints"],
                        "description": "Strategy for omitting similar cards (default: cards)",
                        "default": "cards"
                    },
                    "order": {
                        "type": "string",
                        "enum": ORDER_VALUES,
                        "description": "The method to sort returned cards (default: name)",
                        "default": "name"
                    },
                    "dir": {
                        "type": "string",
                        "enum": ["auto", "asc", "desc"],
                        "description": "The direction to sort cards (default: auto)",
                        "default": "auto"
                    },
                    "page": {
                        "type": "integer",
                        "description": "The page of results to return (default: 1)",
                        "default": 1,
                        "minimum": 1
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "scryfall_get_card_named".to_string(),
            description: "Get a specific card by exact or fuzzy name match".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "The card name to search for"
                    },
                    "fuzzy": {
                        "type": "boolean",
                        "description": "Whether to use fuzzy name matching (default: false for exact match)",
                        "default": false
                    },
                    "set": {
                        "type": "string",
                        "description": "Optional: The set code to search within (e.g., 'khm', 'znr')"
                    }
                },
                "required": ["name"]
            }),
        },
        Tool {
            name: "scryfall_get_random_card".to_string(),
            description: "Get a random card, optionally filtered by a search query".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Optional search query to filter random results (uses same syntax as search)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "scryfall_get_card_by_id".to_string(),
            description: "Get a specific card by its Scryfall ID".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "The Scryfall ID of the card"
                    }
                },
                "required": ["id"]
            }),
        },
        Tool {
            name: "scryfall_autocomplete".to_string(),
            description: "Get autocomplete suggestions for card names".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Partial card name to get suggestions for"
                    },
                    "include_extras": {
                        "type": "boolean",
                        "description": "Whether to include extra cards like tokens (default: false)",
                        "default": false
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "scryfall_translation_help".to_string(),
            description: "Get help with translating natural language terms to Scryfall search syntax. Shows available mappings and suggestions.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Natural language term to get translation help for (optional - if not provided, shows common mappings)"
                    },
                    "category": {
                        "type": "string",
                        "enum": ["all", "text", "colors", "types", "formats", "costs"],
                        "description": "Category of mappings to show (default: all)",
                        "default": "all"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "mtg_knowledge_lookup".to_string(),
            description: "Get comprehensive information about Magic: The Gathering terms, concepts, rules, and terminology. Covers card types, keywords, colors, formats, deck archetypes, and more.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "MTG term or concept to look up (e.g., 'flying', 'azorius', 'modern', 'aggro', 'commander')"
                    },
                    "search_similar": {
                        "type": "boolean",
                        "description": "Whether to search for similar terms if exact match not found (default: true)",
                        "default": true
                    }
                },
                "required": ["query"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "scryfall_natural_search" => scryfall::handle_natural_search(params.arguments, global).await,
        "scryfall_search_cards" => scryfall::handle_search_cards(params.arguments, global).await,
        "scryfall_get_card_named" => scryfall::handle_card_named(params.arguments, global).await,
        "scryfall_get_random_card" => scryfall::handle_random_card(params.arguments, global).await,
        "scryfall_get_card_by_id" => scryfall::handle_card_by_id(params.arguments, global).await,
        "scryfall_autocomplete" => scryfall::handle_autocomplete(params.arguments, global).await,
        "scryfall_translation_help" => knowledge::handle_translation_help(params.arguments, global),
        "mtg_knowledge_lookup" => knowledge::handle_knowledge_lookup(params.arguments, global),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}

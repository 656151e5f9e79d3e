#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Scryfall API Error ({status}): {details}")]
    Scryfall { status: u16, details: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

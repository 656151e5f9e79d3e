use crate::prelude::*;
use mtgquery_core::scryfall::ScryfallError;
use serde::de::DeserializeOwned;

pub mod autocomplete;
pub mod card;
pub mod natural;
pub mod search;

/// Thin HTTP client over the Scryfall REST API.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    client: reqwest::Client,
    api_base: String,
}

impl ScryfallClient {
    pub fn new(global: &crate::Global) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("mtgquery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_base: global.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// GETs `endpoint` (a path from the `mtgquery_core::scryfall` builders)
    /// and decodes the JSON body.
    ///
    /// Non-2xx responses are decoded as Scryfall `error` objects.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let url = f!("{}{}", self.api_base, endpoint);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(f!("Failed to read response from {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Generic(f!("Failed to parse response from {}: {}", url, e)))
    }
}

/// Decodes a Scryfall `error` body, falling back to the raw text.
fn api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ScryfallError>(body) {
        Ok(error) => Error::Scryfall {
            status: error.status,
            details: error.details,
        },
        Err(_) => Error::Scryfall {
            status,
            details: body.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_scryfall_body() {
        let body = r#"{"object":"error","code":"bad_request","status":400,"details":"All of your terms were ignored."}"#;
        assert_eq!(
            api_error(400, body).to_string(),
            "Scryfall API Error (400): All of your terms were ignored."
        );
    }

    #[test]
    fn test_api_error_from_plain_body() {
        assert_eq!(
            api_error(502, "Bad Gateway\n").to_string(),
            "Scryfall API Error (502): Bad Gateway"
        );
    }
}

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, warn};

use crate::dom::Document;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("element {0} not found in document")]
    MissingElement(String),
    #[error("invalid payload in {id}: {source}")]
    Parse {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn decode<T, D>(document: &D, id: &str) -> Result<T, PayloadError>
where
    T: DeserializeOwned,
    D: Document + ?Sized,
{
    let text = document
        .text_content(id)
        .ok_or_else(|| PayloadError::MissingElement(id.to_string()))?;
    serde_json::from_str(&text).map_err(|source| PayloadError::Parse {
        id: id.to_string(),
        source,
    })
}

pub fn decode_or<T, D>(document: &D, id: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    D: Document + ?Sized,
{
    match decode(document, id) {
        Ok(value) => value,
        Err(err @ PayloadError::MissingElement(_)) => {
            warn!("{err}; using fallback");
            fallback
        }
        Err(err) => {
            error!("{err}; using fallback");
            fallback
        }
    }
}

use std::io::Read;

use log::{debug, info};
use serde_json::Value as JsonValue;
use ureq::AgentBuilder;

use super::loader::{load_bundled, parse_json};
use super::model::IndexCatalog;
use crate::config::{CatalogConfig, CATALOG_KEY};
use crate::error::{CatalogError, FetchFailure, Malformed, Result};

/// Retrieve the index catalog.
///
/// With `online == false` the packaged dataset is read; otherwise the
/// configured remote document is fetched with a single GET. Nothing is
/// cached, so every call does fresh I/O.
pub fn get_indices(config: &CatalogConfig, online: bool) -> Result<IndexCatalog> {
    let (root, origin) = if online {
        info!("fetching spectral indices from {}", config.remote_url);
        (fetch_remote_json(config)?, config.remote_url.clone())
    } else {
        let path = config.resolve(&config.filename);
        info!("reading spectral indices from {}", path.display());
        (load_bundled(config)?, path.display().to_string())
    };
    let catalog = catalog_from_json(root, &origin)?;
    debug!("{} spectral indices available", catalog.len());
    Ok(catalog)
}

/// GET the remote document and parse its body as JSON.
///
/// Transport errors, non-2xx statuses and body read failures are all
/// [`CatalogError::RemoteFetch`]; only a body that arrives but does not parse
/// is [`CatalogError::MalformedData`].
pub fn fetch_remote_json(config: &CatalogConfig) -> Result<JsonValue> {
    let url = config.remote_url.as_str();
    let fetch_err = |reason: FetchFailure| CatalogError::RemoteFetch {
        url: url.to_string(),
        reason,
    };

    let mut builder = AgentBuilder::new();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let agent = builder.build();

    let response = agent
        .get(url)
        .call()
        .map_err(|e| fetch_err(FetchFailure::from(e)))?;
    debug!("{url} answered HTTP {}", response.status());

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| fetch_err(FetchFailure::Body(e)))?;
    parse_json(&body, url)
}

/// Pull the `"SpectralIndices"` entry out of a parsed document and type it.
pub fn catalog_from_json(mut root: JsonValue, origin: &str) -> Result<IndexCatalog> {
    let malformed = |reason: Malformed| CatalogError::MalformedData {
        origin: origin.to_string(),
        reason,
    };

    let entry = root
        .get_mut(CATALOG_KEY)
        .map(JsonValue::take)
        .ok_or_else(|| malformed(Malformed::MissingKey(CATALOG_KEY)))?;
    serde_json::from_value(entry).map_err(|e| malformed(Malformed::Json(e)))
}

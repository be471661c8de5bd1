use std::path::Path;

use log::debug;
use serde_json::Value as JsonValue;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Malformed, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `filename` from the configured data directory and parse it as JSON.
///
/// No schema is enforced here; the caller decides what shape it expects.
pub fn load_json(config: &CatalogConfig, filename: &str) -> Result<JsonValue> {
    let path = config.resolve(filename);
    debug!("loading dataset from {}", path.display());
    read_json_file(&path)
}

/// Load the dataset named by `config.filename`.
pub fn load_bundled(config: &CatalogConfig) -> Result<JsonValue> {
    load_json(config, &config.filename)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_json_file(path: &Path) -> Result<JsonValue> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&bytes, &path.display().to_string())
}

/// Parse raw document bytes; invalid UTF-8 is a JSON error like any other.
pub(crate) fn parse_json(bytes: &[u8], origin: &str) -> Result<JsonValue> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::MalformedData {
        origin: origin.to_string(),
        reason: Malformed::Json(e),
    })
}

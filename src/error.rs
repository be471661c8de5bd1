use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading, fetching or checking indices.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The packaged data file is missing or unreadable.
    #[error("cannot read dataset {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON or lacks an expected entry.
    #[error("malformed dataset from {origin}: {reason}")]
    MalformedData {
        origin: String,
        #[source]
        reason: Malformed,
    },

    /// The online request failed before a body could be parsed.
    #[error("fetching {url} failed: {reason}")]
    RemoteFetch {
        url: String,
        #[source]
        reason: FetchFailure,
    },

    /// The requested index is not in the catalog.
    #[error("unknown spectral index '{index}'")]
    UnknownIndex { index: String },

    /// First band, in dataset order, absent from the parameters.
    #[error("'{band}' is missing in the parameters for {index} computation!")]
    MissingParameter { band: String, index: String },
}

/// Why a document was rejected as malformed.
#[derive(Debug, Error)]
pub enum Malformed {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("no \"{0}\" key")]
    MissingKey(&'static str),
}

/// Which stage of the online request failed.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("{0}")]
    Request(#[source] Box<ureq::Error>),
    #[error("reading response body: {0}")]
    Body(#[source] io::Error),
}

impl From<ureq::Error> for FetchFailure {
    fn from(e: ureq::Error) -> Self {
        FetchFailure::Request(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

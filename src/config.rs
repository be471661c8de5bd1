use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the dataset shipped with the crate.
pub const DEFAULT_FILENAME: &str = "millcrest_spectral_indices.json";

/// Raw JSON of the community-maintained index list.
pub const CANONICAL_URL: &str = "https://raw.githubusercontent.com/awesome-spectral-indices/awesome-spectral-indices/main/output/spectral-indices-dict.json";

/// Top-level key holding the index catalog in both local and remote documents.
pub const CATALOG_KEY: &str = "SpectralIndices";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the catalog comes from.
///
/// The default points at the `data/` directory packaged next to the crate
/// sources and at [`CANONICAL_URL`]. Tests and embedders override the pieces
/// they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory dataset file names are resolved against.
    pub data_dir: PathBuf,
    /// Dataset file used by the offline path.
    pub filename: String,
    /// Document fetched by the online path.
    pub remote_url: String,
    /// Overall timeout for the online request; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: bundled_data_dir(),
            filename: DEFAULT_FILENAME.to_string(),
            remote_url: CANONICAL_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CatalogConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full path of `filename` inside the data directory.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }
}

/// The `data/` directory shipped with the package.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

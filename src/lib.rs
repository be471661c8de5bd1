//! Catalog of spectral indices.
//!
//! Loads the bundled index dataset (or a fresh copy from the canonical online
//! list) and checks that a parameter set supplies every band an index needs
//! before any computation runs.

pub mod config;
pub mod data;
pub mod error;

pub use config::{bundled_data_dir, CatalogConfig, CANONICAL_URL, CATALOG_KEY, DEFAULT_FILENAME};
pub use data::fetch::{catalog_from_json, fetch_remote_json, get_indices};
pub use data::loader::{load_bundled, load_json};
pub use data::model::{IndexCatalog, IndexDefinition, ParamValue, ParameterSet};
pub use data::validate::{check_params, missing_bands, BandLookup};
pub use error::{CatalogError, FetchFailure, Malformed, Result};

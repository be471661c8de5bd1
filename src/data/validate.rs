use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value as JsonValue};

use super::model::{IndexCatalog, IndexDefinition};
use crate::error::{CatalogError, Result};

// ---------------------------------------------------------------------------
// BandLookup – anything keyed by band name
// ---------------------------------------------------------------------------

/// A parameter mapping that can answer "is this band supplied?".
pub trait BandLookup {
    fn has_band(&self, band: &str) -> bool;
}

impl<V> BandLookup for BTreeMap<String, V> {
    fn has_band(&self, band: &str) -> bool {
        self.contains_key(band)
    }
}

impl<V, S: BuildHasher> BandLookup for HashMap<String, V, S> {
    fn has_band(&self, band: &str) -> bool {
        self.contains_key(band)
    }
}

impl BandLookup for Map<String, JsonValue> {
    fn has_band(&self, band: &str) -> bool {
        self.contains_key(band)
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Ensure `params` holds every band `index` requires.
///
/// Bands are scanned in dataset order and the first absent one is reported.
/// Keys in `params` that the index does not use are ignored.
pub fn check_params<P>(index: &str, params: &P, catalog: &IndexCatalog) -> Result<()>
where
    P: BandLookup + ?Sized,
{
    let definition = lookup(index, catalog)?;
    match definition.bands.iter().find(|band| !params.has_band(band)) {
        Some(band) => Err(CatalogError::MissingParameter {
            band: band.clone(),
            index: index.to_string(),
        }),
        None => Ok(()),
    }
}

/// Every band of `index` absent from `params`, in dataset order.
pub fn missing_bands<P>(index: &str, params: &P, catalog: &IndexCatalog) -> Result<Vec<String>>
where
    P: BandLookup + ?Sized,
{
    let definition = lookup(index, catalog)?;
    Ok(definition
        .bands
        .iter()
        .filter(|band| !params.has_band(band))
        .cloned()
        .collect())
}

fn lookup<'a>(index: &str, catalog: &'a IndexCatalog) -> Result<&'a IndexDefinition> {
    catalog.get(index).ok_or_else(|| CatalogError::UnknownIndex {
        index: index.to_string(),
    })
}

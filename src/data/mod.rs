/// Data layer: catalog types, loading, fetching and band checks.
///
/// Architecture:
/// ```text
///  data/millcrest_spectral_indices.json      remote JSON (GET)
///        │                                        │
///        ▼                                        ▼
///   ┌──────────┐                            ┌──────────┐
///   │  loader   │  read file → JSON          │  fetch    │  body → JSON
///   └──────────┘                            └──────────┘
///        │                                        │
///        └────────────► "SpectralIndices" ◄───────┘
///                            │
///                            ▼
///                     ┌──────────────┐
///                     │ IndexCatalog  │  name → IndexDefinition
///                     └──────────────┘
///                            │
///                            ▼
///                     ┌──────────┐
///                     │ validate  │  required bands ⊆ params
///                     └──────────┘
/// ```

pub mod fetch;
pub mod loader;
pub mod model;
pub mod validate;

//! Episode catalog for Podcastr
//!
//! Loads the bundled episode dataset and hands ordered episode records to
//! the rest of the app. Document order is playback order; the playback core
//! never fetches anything itself.

mod bundled;
mod error;
mod record;
mod traits;

pub use bundled::BundledCatalog;
pub use error::{CatalogError, CatalogResult};
pub use record::{EpisodeRecord, MediaFileRecord};
pub use traits::{EpisodeSource, SourceMetadata};
